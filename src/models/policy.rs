use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated policy milestone drawn over the dashboard's time axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyEvent {
    pub date: NaiveDate,
    pub label: String,
}

