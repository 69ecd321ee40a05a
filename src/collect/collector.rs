use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

use crate::error::Result;
use crate::models::RawRecord;
use crate::storage;

#[async_trait]
pub trait Collector: Send + Sync {
    async fn collect(&self) -> Result<Vec<RawRecord>>;
    fn name(&self) -> &str;
}

/// Runs a collector and writes whatever it gathered. Returns the record count.
pub async fn collect_to_csv(collector: &dyn Collector, output: &Path) -> Result<usize> {
    tracing::info!("Running {} collector", collector.name());
    let records = collector.collect().await?;

    if records.is_empty() {
        tracing::warn!("No records collected.");
        return Ok(0);
    }

    storage::write_raw(output, &records)?;
    tracing::info!("Saved {} records to {}", records.len(), output.display());
    Ok(records.len())
}

pub(crate) fn progress_bar(len: u64, unit: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let template = format!(
        "{{spinner:.green}} [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} {}",
        unit
    );
    if let Ok(style) = ProgressStyle::default_bar().template(&template) {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb
}
