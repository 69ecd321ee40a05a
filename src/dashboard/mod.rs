//! Interactive analytics pages over the cleaned dataset.
//!
//! Both variants share the sidebar filters and executive summary; the
//! overview looks at volume, keywords and sentiment, the frames view at the
//! recurring themes of the discussion.

pub mod aggregate;
pub mod charts;
pub mod filters;
pub mod keywords;
pub mod render;
pub mod server;

use std::path::Path;

use crate::error::Result;
use crate::models::{CleanedRecord, PolicyEvent};
use crate::storage;
use aggregate::Summary;
use keywords::ThemeSet;
use render::{NoticeKind, Page};

pub use filters::{ContentType, DashboardFilters, DataBounds};
pub use render::RenderMode;

pub const EMPTY_FILTER_MESSAGE: &str =
    "No data matches the current filters. Adjust the sidebar filters.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DashboardVariant {
    #[default]
    Overview,
    Frames,
}

impl DashboardVariant {
    pub fn title(&self) -> &'static str {
        match self {
            DashboardVariant::Overview => "Skills-Based Hiring Discourse on Reddit",
            DashboardVariant::Frames => "Skills-Based Hiring Discourse: Frames",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            DashboardVariant::Overview => "overview",
            DashboardVariant::Frames => "frames",
        }
    }
}

impl std::str::FromStr for DashboardVariant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overview" | "" => Ok(DashboardVariant::Overview),
            "frames" => Ok(DashboardVariant::Frames),
            other => Err(format!("unknown dashboard variant: {}", other)),
        }
    }
}

pub struct Dashboard {
    records: Vec<CleanedRecord>,
    events: Vec<PolicyEvent>,
    bounds: DataBounds,
    keywords: ThemeSet,
    frames: ThemeSet,
}

impl Dashboard {
    pub fn new(records: Vec<CleanedRecord>, events: Vec<PolicyEvent>) -> Result<Self> {
        Ok(Self {
            bounds: DataBounds::of(&records),
            records,
            events,
            keywords: ThemeSet::keywords()?,
            frames: ThemeSet::frames()?,
        })
    }

    /// Loads the cleaned CSV (required) and the policy events (optional).
    pub fn load(data_path: &Path, events_path: &Path) -> Result<Self> {
        let records = storage::read_cleaned(data_path)?;
        let events = storage::read_policy_events(events_path)?;
        tracing::info!(
            "Loaded {} records and {} policy events",
            records.len(),
            events.len()
        );
        Self::new(records, events)
    }

    pub fn records(&self) -> &[CleanedRecord] {
        &self.records
    }

    pub fn bounds(&self) -> &DataBounds {
        &self.bounds
    }

    pub fn render(
        &self,
        variant: DashboardVariant,
        filters: &DashboardFilters,
        mode: RenderMode,
    ) -> Result<String> {
        let sidebar = render::sidebar(filters, &self.bounds, variant, mode);
        let mut page = Page::new(variant.title());
        let filtered = filters.apply(&self.records);

        if filtered.is_empty() {
            page.notice(NoticeKind::Warning, EMPTY_FILTER_MESSAGE);
            return Ok(page.finish(&sidebar));
        }

        page.notice(
            NoticeKind::Info,
            &format!(
                "Showing {} of {} records",
                filtered.len(),
                self.records.len()
            ),
        );
        summary_section(&mut page, &filtered);

        let events = self.events_within(&filtered);
        match variant {
            DashboardVariant::Overview => self.overview(&mut page, &filtered, &events)?,
            DashboardVariant::Frames => self.frames_view(&mut page, &filtered, &events)?,
        }

        tracing::debug!("Rendered {} charts", page.chart_count());
        Ok(page.finish(&sidebar))
    }

    fn overview(
        &self,
        page: &mut Page,
        records: &[&CleanedRecord],
        events: &[PolicyEvent],
    ) -> Result<()> {
        page.section("Volume & Engagement");
        page.charts(vec![
            charts::monthly_volume(&aggregate::monthly_volume(records), events)?,
            charts::score_histogram(&aggregate::score_points(records))?,
        ]);

        page.section("Keyword Trends");
        let trends = aggregate::theme_trends(records, &self.keywords);
        if trends.is_empty() {
            page.notice(NoticeKind::Info, "No keyword matches");
        } else {
            page.charts(vec![charts::theme_trends(
                "Keyword Mentions by Month",
                "Keyword",
                &trends,
                events,
            )?]);
        }

        page.section("Sentiment Over Time");
        page.charts(vec![charts::monthly_sentiment(
            &aggregate::monthly_sentiment(records),
            events,
        )?]);

        page.section("Subreddit Comparison");
        let stats = aggregate::subreddit_stats(records);
        page.charts(vec![
            charts::subreddit_volume(&stats)?,
            charts::subreddit_sentiment(&stats)?,
        ]);
        Ok(())
    }

    fn frames_view(
        &self,
        page: &mut Page,
        records: &[&CleanedRecord],
        events: &[PolicyEvent],
    ) -> Result<()> {
        let stats = aggregate::theme_stats(records, &self.frames);

        page.section("Frame Prevalence");
        page.charts(vec![charts::theme_prevalence(&stats)?]);

        page.section("Frame Trends");
        let trends = aggregate::theme_trends(records, &self.frames);
        if trends.is_empty() {
            page.notice(NoticeKind::Info, "No frame matches");
        } else {
            page.charts(vec![charts::theme_trends(
                "Frame Mentions by Month",
                "Frame",
                &trends,
                events,
            )?]);
        }

        page.section("Sentiment by Frame and Engagement");
        page.charts(vec![
            charts::theme_sentiment(&stats)?,
            charts::tier_sentiment_mix(&aggregate::tier_sentiment_mix(records))?,
        ]);
        Ok(())
    }

    /// Events inside the filtered date span, so markers never stretch the axis.
    fn events_within(&self, records: &[&CleanedRecord]) -> Vec<PolicyEvent> {
        let (Some(first), Some(last)) = (
            records.iter().map(|r| r.date).min(),
            records.iter().map(|r| r.date).max(),
        ) else {
            return Vec::new();
        };
        self.events
            .iter()
            .filter(|e| e.date >= first && e.date <= last)
            .cloned()
            .collect()
    }
}

fn summary_section(page: &mut Page, records: &[&CleanedRecord]) {
    let summary = Summary::of(records);
    page.section("Executive Summary");
    page.metrics(&[
        ("Total records", summary.total.to_string()),
        ("Posts", summary.posts.to_string()),
        ("Comments", summary.comments.to_string()),
        ("Avg sentiment", format!("{:+.3}", summary.avg_sentiment)),
        ("Unique threads", summary.unique_threads.to_string()),
    ]);
    page.metrics(&[
        ("Positive", format!("{:.1}%", summary.positive_pct)),
        ("Neutral", format!("{:.1}%", summary.neutral_pct)),
        ("Negative", format!("{:.1}%", summary.negative_pct)),
    ]);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{EngagementTier, RecordType, SentimentLabel};
    use chrono::{NaiveDate, NaiveTime};

    pub(crate) fn record(
        thread_id: &str,
        id: &str,
        kind: RecordType,
        subreddit: &str,
        date: &str,
        sentiment: f64,
        score: i64,
    ) -> CleanedRecord {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        let body = format!("Discussion in r/{} about federal hiring", subreddit);
        CleanedRecord {
            kind,
            thread_id: thread_id.to_string(),
            id: id.to_string(),
            title: match kind {
                RecordType::Post => format!("Thread {}", thread_id),
                RecordType::Comment => String::new(),
            },
            word_count: body.split_whitespace().count(),
            body,
            created_utc: date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap()),
            score,
            subreddit: subreddit.to_string(),
            author: "tester".to_string(),
            date,
            month: date.format("%Y-%m").to_string(),
            sentiment_score: sentiment,
            sentiment_label: SentimentLabel::from_score(sentiment),
            engagement_tier: EngagementTier::from_score(score),
        }
    }

    pub(crate) fn sample_records() -> Vec<CleanedRecord> {
        let mut records = vec![
            record("t1", "t1", RecordType::Post, "jobs", "2024-01-10", 0.3, 12),
            record("t1", "c1", RecordType::Comment, "jobs", "2024-01-11", -0.2, 4),
            record("t1", "c2", RecordType::Comment, "jobs", "2024-02-02", 0.0, 130),
            record("t2", "t2", RecordType::Post, "govfire", "2024-02-14", -0.6, 45),
            record("t2", "c3", RecordType::Comment, "govfire", "2024-02-15", 0.05, 8),
            record("t3", "t3", RecordType::Post, "FedEmployees", "2024-03-03", 0.5, 220),
            record("t3", "c4", RecordType::Comment, "FedEmployees", "2024-04-20", -0.15, 27),
            record("t3", "c5", RecordType::Comment, "FedEmployees", "2024-04-21", 0.12, 2),
        ];
        records[1].body = "Got the RIF notice this morning".into();
        records[3].body = "Skills-based hiring means no degree required".into();
        records[5].title = "STARs and the paper ceiling".into();
        records[6].body = "USAJobs questionnaire took forever at GS-9".into();
        records
    }

    fn events() -> Vec<PolicyEvent> {
        vec![
            PolicyEvent {
                date: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
                label: "Before the data".into(),
            },
            PolicyEvent {
                date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                label: "Chance to Compete Act".into(),
            },
        ]
    }

    #[test]
    fn test_variant_parsing() {
        assert_eq!("Frames".parse::<DashboardVariant>(), Ok(DashboardVariant::Frames));
        assert_eq!("".parse::<DashboardVariant>(), Ok(DashboardVariant::Overview));
        assert!("pie".parse::<DashboardVariant>().is_err());
    }

    #[test]
    fn test_overview_page() {
        let dashboard = Dashboard::new(sample_records(), events()).unwrap();
        let html = dashboard
            .render(
                DashboardVariant::Overview,
                &DashboardFilters::default(),
                RenderMode::Static,
            )
            .unwrap();

        assert!(html.contains("Executive Summary"));
        assert!(html.contains("Showing 8 of 8 records"));
        assert!(html.contains("Keyword Mentions by Month"));
        assert!(html.contains("Subreddit Comparison"));
        assert!(html.contains("Chance to Compete Act"));
        assert!(!html.contains("Before the data"));
        assert!(html.contains("chart-6"));
        assert!(!html.contains(EMPTY_FILTER_MESSAGE));
    }

    #[test]
    fn test_frames_page() {
        let dashboard = Dashboard::new(sample_records(), Vec::new()).unwrap();
        let html = dashboard
            .render(
                DashboardVariant::Frames,
                &DashboardFilters::default(),
                RenderMode::Live,
            )
            .unwrap();

        assert!(html.contains("Frame Prevalence"));
        assert!(html.contains("Credential barriers"));
        assert!(html.contains("Sentiment Mix by Engagement Tier"));
        assert!(!html.contains("strokeDash"));
    }

    #[test]
    fn test_keyword_notice_when_nothing_matches() {
        let records = vec![record("t9", "t9", RecordType::Post, "jobs", "2024-05-01", 0.0, 3)];
        let dashboard = Dashboard::new(records, Vec::new()).unwrap();
        let html = dashboard
            .render(
                DashboardVariant::Overview,
                &DashboardFilters::default(),
                RenderMode::Static,
            )
            .unwrap();
        assert!(html.contains("No keyword matches"));
    }

    #[test]
    fn test_empty_filter_result_shows_warning_only() {
        let dashboard = Dashboard::new(sample_records(), events()).unwrap();
        let filters = DashboardFilters {
            search: Some("no such phrase anywhere".into()),
            ..Default::default()
        };
        let html = dashboard
            .render(DashboardVariant::Overview, &filters, RenderMode::Static)
            .unwrap();
        assert!(html.contains(EMPTY_FILTER_MESSAGE));
        assert!(!html.contains("chart-1"));
        assert!(!html.contains("Executive Summary"));
    }
}
