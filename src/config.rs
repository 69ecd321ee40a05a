use chrono::{NaiveDate, NaiveDateTime};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::models::timestamp;

pub const DEFAULT_USER_AGENT: &str = "skills_hiring_research/0.1";

/// Log directives used when RUST_LOG is not set.
pub const DEFAULT_LOG_FILTER: &str = "skillpulse=info,reqwest=warn";

#[derive(Debug, Clone)]
pub struct Config {
    pub reddit_client_id: Option<String>,
    pub reddit_client_secret: Option<String>,
    pub user_agent: String,
    pub data_dir: PathBuf,
    pub study_window: StudyWindow,
    pub request_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let reddit_client_id = env::var("REDDIT_CLIENT_ID").ok();
        let reddit_client_secret = env::var("REDDIT_CLIENT_SECRET").ok();

        let user_agent =
            env::var("REDDIT_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        let data_dir = env::var("SKILLPULSE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        let default_window = StudyWindow::default();
        let start = match env::var("STUDY_START") {
            Ok(v) => parse_bound("STUDY_START", &v)?,
            Err(_) => default_window.start,
        };
        let end = match env::var("STUDY_END") {
            Ok(v) => parse_bound("STUDY_END", &v)?,
            Err(_) => default_window.end,
        };
        let study_window = StudyWindow::new(start, end)?;

        let request_delay = match env::var("REQUEST_DELAY_SECS") {
            Ok(v) => parse_delay(&v)?,
            Err(_) => Duration::from_secs(1),
        };

        Ok(Self {
            reddit_client_id,
            reddit_client_secret,
            user_agent,
            data_dir,
            study_window,
            request_delay,
        })
    }

    /// Credentials for the Reddit search API, required only by the search collector.
    pub fn reddit_credentials(&self) -> Result<(String, String)> {
        let id = self.reddit_client_id.clone().ok_or_else(|| {
            Error::Config("REDDIT_CLIENT_ID environment variable not set".to_string())
        })?;
        let secret = self.reddit_client_secret.clone().ok_or_else(|| {
            Error::Config("REDDIT_CLIENT_SECRET environment variable not set".to_string())
        })?;
        Ok((id, secret))
    }

    pub fn raw_path(&self) -> PathBuf {
        self.data_dir.join("raw").join("reddit_skills_raw.csv")
    }

    pub fn cleaned_path(&self) -> PathBuf {
        self.data_dir.join("cleaned").join("reddit_skills_cleaned.csv")
    }

    pub fn policy_events_path(&self) -> PathBuf {
        self.data_dir.join("policy_events.csv")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reddit_client_id: None,
            reddit_client_secret: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            data_dir: PathBuf::from("data"),
            study_window: StudyWindow::default(),
            request_delay: Duration::from_secs(1),
        }
    }
}

fn parse_bound(name: &str, value: &str) -> Result<NaiveDateTime> {
    timestamp::parse(value)
        .ok_or_else(|| Error::Config(format!("{} is not a date or timestamp: {}", name, value)))
}

fn parse_delay(value: &str) -> Result<Duration> {
    let invalid = || Error::Config(format!("REQUEST_DELAY_SECS is not a valid delay: {}", value));
    let secs: f64 = value.trim().parse().map_err(|_| invalid())?;
    Duration::try_from_secs_f64(secs).map_err(|_| invalid())
}

/// An explicit RUST_LOG wins outright; otherwise the crate defaults apply.
pub fn log_directives(rust_log: Option<&str>) -> &str {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => directives,
        _ => DEFAULT_LOG_FILTER,
    }
}

/// Inclusive bounds on `created_utc` for records kept by cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudyWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl StudyWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        if start > end {
            return Err(Error::Config(format!(
                "study window start {} is after end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        self.start <= ts && ts <= self.end
    }
}

impl Default for StudyWindow {
    fn default() -> Self {
        Self {
            start: midnight(2022, 1, 1),
            end: midnight(2025, 6, 30),
        }
    }
}

pub(crate) fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

#[derive(Debug, Clone)]
pub struct CleanConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub window: StudyWindow,
}

impl From<&Config> for CleanConfig {
    fn from(config: &Config) -> Self {
        Self {
            input: config.raw_path(),
            output: config.cleaned_path(),
            window: config.study_window,
        }
    }
}
