use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use crate::config::{CleanConfig, StudyWindow};
use crate::cleaning::sentiment::{LexiconSentiment, SentimentModel};
use crate::error::Result;
use crate::models::{CleanedRecord, EngagementTier, RawRecord, SentimentLabel};
use crate::storage;

/// Counts from one cleaning run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleaningReport {
    pub loaded: usize,
    pub duplicates_removed: usize,
    pub empty_bodies_dropped: usize,
    pub outside_window: usize,
    pub written: usize,
    /// Name of the model that scored sentiment.
    pub sentiment_model: String,
    pub sentiment: BTreeMap<SentimentLabel, usize>,
    pub engagement: BTreeMap<EngagementTier, usize>,
}

pub struct CleaningPipeline {
    sentiment: Arc<dyn SentimentModel>,
    config: CleanConfig,
}

impl CleaningPipeline {
    pub fn new(config: CleanConfig) -> Self {
        Self::with_model(config, LexiconSentiment::new())
    }

    pub fn with_model(config: CleanConfig, model: impl SentimentModel + 'static) -> Self {
        Self {
            sentiment: Arc::new(model),
            config,
        }
    }

    /// Reads the raw CSV, cleans it and writes the analysis-ready CSV.
    pub fn run(&self) -> Result<CleaningReport> {
        let raw = storage::read_raw(&self.config.input)?;
        tracing::info!(
            "Loaded {} rows from {}",
            raw.len(),
            self.config.input.display()
        );

        let (cleaned, mut report) = self.clean(raw);

        storage::write_cleaned(&self.config.output, &cleaned)?;
        report.written = cleaned.len();
        tracing::info!(
            "Saved {} cleaned rows to {}",
            report.written,
            self.config.output.display()
        );
        tracing::info!("Columns: {}", CleanedRecord::COLUMNS.join(", "));

        Ok(report)
    }

    /// The in-memory transform, step by step.
    pub fn clean(&self, raw: Vec<RawRecord>) -> (Vec<CleanedRecord>, CleaningReport) {
        let mut report = CleaningReport {
            loaded: raw.len(),
            sentiment_model: self.sentiment.name().to_string(),
            ..Default::default()
        };

        // Step 1: Deduplicate on (thread_id, id)
        let before = raw.len();
        let rows = remove_duplicates(raw);
        report.duplicates_removed = before - rows.len();
        tracing::info!("Removed {} duplicate rows", report.duplicates_removed);

        // Step 2: Fill defaults, drop rows without text
        let before = rows.len();
        let rows = handle_missing_values(rows);
        report.empty_bodies_dropped = before - rows.len();
        tracing::info!(
            "Dropped {} rows with missing/empty body text",
            report.empty_bodies_dropped
        );

        // Step 3: Keep the study window
        let before = rows.len();
        let rows = filter_date_range(rows, &self.config.window);
        report.outside_window = before - rows.len();
        if report.outside_window > 0 {
            tracing::info!(
                "Filtered {} rows outside study date range",
                report.outside_window
            );
        }

        // Steps 4-6: Derived columns
        tracing::info!("Scoring sentiment with the {} model", report.sentiment_model);
        let cleaned: Vec<CleanedRecord> = rows
            .into_iter()
            .map(|row| self.derive(row))
            .collect();

        for record in &cleaned {
            *report.sentiment.entry(record.sentiment_label).or_default() += 1;
            *report.engagement.entry(record.engagement_tier).or_default() += 1;
        }
        tracing::info!("Sentiment distribution: {}", format_counts(&report.sentiment));
        tracing::info!(
            "Engagement tier distribution: {}",
            format_counts(&report.engagement)
        );

        (cleaned, report)
    }

    fn derive(&self, row: FilledRecord) -> CleanedRecord {
        let sentiment_score = self.sentiment.polarity(&row.body);
        let word_count = row.body.split_whitespace().count();

        CleanedRecord {
            date: row.created_utc.date(),
            month: row.created_utc.format("%Y-%m").to_string(),
            sentiment_score,
            sentiment_label: SentimentLabel::from_score(sentiment_score),
            word_count,
            engagement_tier: EngagementTier::from_score(row.score),
            kind: row.raw.record_type(),
            id: row.raw.record_id().to_string(),
            thread_id: row.raw.thread_id,
            title: row.title,
            body: row.body,
            created_utc: row.created_utc,
            score: row.score,
            subreddit: row.raw.subreddit,
            author: row.author,
        }
    }
}

/// A raw row whose text fields have passed the missing-value policy.
pub struct FilledRecord {
    raw: RawRecord,
    title: String,
    body: String,
    author: String,
    created_utc: chrono::NaiveDateTime,
    score: i64,
}

/// Keeps the first occurrence of each `(thread_id, id)` pair, preserving order.
pub fn remove_duplicates(rows: Vec<RawRecord>) -> Vec<RawRecord> {
    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(rows.len());
    rows.into_iter()
        .filter(|row| seen.insert((row.thread_id.clone(), row.record_id().to_string())))
        .collect()
}

/// Title defaults to empty, author to `unknown`; rows with a null or blank body are dropped.
pub fn handle_missing_values(rows: Vec<RawRecord>) -> Vec<FilledRecord> {
    rows.into_iter()
        .filter(RawRecord::has_body)
        .map(|mut raw| {
            let body = raw.body.take().unwrap_or_default();
            let title = raw.title.take().unwrap_or_default();
            let author = raw
                .author
                .take()
                .filter(|a| !a.trim().is_empty())
                .unwrap_or_else(|| "unknown".to_string());
            FilledRecord {
                created_utc: raw.created_utc,
                score: raw.score,
                raw,
                title,
                body,
                author,
            }
        })
        .collect()
}

pub fn filter_date_range(rows: Vec<FilledRecord>, window: &StudyWindow) -> Vec<FilledRecord> {
    rows.into_iter()
        .filter(|row| window.contains(row.created_utc))
        .collect()
}

fn format_counts<K: std::fmt::Display>(counts: &BTreeMap<K, usize>) -> String {
    counts
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(", ")
}
