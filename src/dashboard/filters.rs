use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::models::{CleanedRecord, EngagementTier, RecordType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ContentType {
    #[default]
    All,
    Posts,
    Comments,
}

impl ContentType {
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::All => "All",
            ContentType::Posts => "Posts only",
            ContentType::Comments => "Comments only",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ContentType::All => "all",
            ContentType::Posts => "posts",
            ContentType::Comments => "comments",
        }
    }

    fn admits(&self, kind: RecordType) -> bool {
        match self {
            ContentType::All => true,
            ContentType::Posts => kind == RecordType::Post,
            ContentType::Comments => kind == RecordType::Comment,
        }
    }
}

impl std::str::FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "" => Ok(ContentType::All),
            "posts" | "post" | "posts only" => Ok(ContentType::Posts),
            "comments" | "comment" | "comments only" => Ok(ContentType::Comments),
            other => Err(format!("unknown content type: {}", other)),
        }
    }
}

/// Sidebar selections. `None` means "no restriction", the default for every control.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardFilters {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub subreddits: Option<Vec<String>>,
    pub content: ContentType,
    pub tiers: Option<Vec<EngagementTier>>,
    pub search: Option<String>,
}

impl DashboardFilters {
    pub fn apply<'a>(&self, records: &'a [CleanedRecord]) -> Vec<&'a CleanedRecord> {
        let needle = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        records
            .iter()
            .filter(|r| self.start.map(|s| r.date >= s).unwrap_or(true))
            .filter(|r| self.end.map(|e| r.date <= e).unwrap_or(true))
            .filter(|r| {
                self.subreddits
                    .as_ref()
                    .map(|subs| subs.iter().any(|s| s == &r.subreddit))
                    .unwrap_or(true)
            })
            .filter(|r| self.content.admits(r.kind))
            .filter(|r| {
                self.tiers
                    .as_ref()
                    .map(|tiers| tiers.contains(&r.engagement_tier))
                    .unwrap_or(true)
            })
            .filter(|r| match needle {
                Some(ref n) => {
                    r.body.to_lowercase().contains(n) || r.title.to_lowercase().contains(n)
                }
                None => true,
            })
            .collect()
    }

    /// Builds filters from a form query string; repeated keys carry multiselect values.
    pub fn from_query(pairs: &[(String, String)]) -> Result<Self> {
        let mut filters = DashboardFilters::default();
        let mut subreddits = Vec::new();
        let mut tiers = Vec::new();
        let mut saw_subreddits = false;
        let mut saw_tiers = false;

        for (key, value) in pairs {
            let value = value.trim();
            match key.as_str() {
                "start" if !value.is_empty() => filters.start = Some(parse_date(key, value)?),
                "end" if !value.is_empty() => filters.end = Some(parse_date(key, value)?),
                "subreddit" => {
                    saw_subreddits = true;
                    if !value.is_empty() {
                        subreddits.push(value.to_string());
                    }
                }
                "tier" => {
                    saw_tiers = true;
                    if !value.is_empty() {
                        tiers.push(value.parse().map_err(Error::Config)?);
                    }
                }
                "content" => filters.content = value.parse().map_err(Error::Config)?,
                "q" if !value.is_empty() => filters.search = Some(value.to_string()),
                _ => {}
            }
        }

        if saw_subreddits {
            filters.subreddits = Some(subreddits);
        }
        if saw_tiers {
            filters.tiers = Some(tiers);
        }
        Ok(filters)
    }
}

fn parse_date(key: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| Error::Config(format!("{} must be YYYY-MM-DD, got {:?}", key, value)))
}

/// What the sidebar offers: data extent and the distinct subreddits.
#[derive(Debug, Clone, PartialEq)]
pub struct DataBounds {
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub subreddits: Vec<String>,
}

impl DataBounds {
    pub fn of(records: &[CleanedRecord]) -> Self {
        let subreddits: BTreeSet<&str> = records.iter().map(|r| r.subreddit.as_str()).collect();
        Self {
            min_date: records.iter().map(|r| r.date).min(),
            max_date: records.iter().map(|r| r.date).max(),
            subreddits: subreddits.into_iter().map(String::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::tests::sample_records;

    fn q(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_filters_keep_everything() {
        let records = sample_records();
        assert_eq!(DashboardFilters::default().apply(&records).len(), records.len());
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let records = sample_records();
        let filters = DashboardFilters {
            start: NaiveDate::from_ymd_opt(2024, 2, 1),
            end: NaiveDate::from_ymd_opt(2024, 2, 29),
            ..Default::default()
        };
        let kept = filters.apply(&records);
        assert!(!kept.is_empty());
        assert!(kept.iter().all(|r| r.month == "2024-02"));
    }

    #[test]
    fn test_content_subreddit_tier_and_search() {
        let records = sample_records();

        let posts = DashboardFilters {
            content: ContentType::Posts,
            ..Default::default()
        };
        assert!(posts.apply(&records).iter().all(|r| r.kind == RecordType::Post));

        let subs = DashboardFilters {
            subreddits: Some(vec!["jobs".into()]),
            ..Default::default()
        };
        assert!(subs.apply(&records).iter().all(|r| r.subreddit == "jobs"));

        let none = DashboardFilters {
            subreddits: Some(Vec::new()),
            ..Default::default()
        };
        assert!(none.apply(&records).is_empty());

        let viral = DashboardFilters {
            tiers: Some(vec![EngagementTier::Viral]),
            ..Default::default()
        };
        assert!(viral
            .apply(&records)
            .iter()
            .all(|r| r.engagement_tier == EngagementTier::Viral));

        let search = DashboardFilters {
            search: Some("  rif ".into()),
            ..Default::default()
        };
        let hits = search.apply(&records);
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|r| {
            r.body.to_lowercase().contains("rif") || r.title.to_lowercase().contains("rif")
        }));
    }

    #[test]
    fn test_from_query() {
        let filters = DashboardFilters::from_query(&q(&[
            ("start", "2024-01-01"),
            ("end", ""),
            ("subreddit", "jobs"),
            ("subreddit", "govfire"),
            ("content", "comments"),
            ("tier", "high"),
            ("q", "degree"),
            ("variant", "frames"),
        ]))
        .unwrap();

        assert_eq!(filters.start, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(filters.end, None);
        assert_eq!(filters.subreddits, Some(vec!["jobs".into(), "govfire".into()]));
        assert_eq!(filters.content, ContentType::Comments);
        assert_eq!(filters.tiers, Some(vec![EngagementTier::High]));
        assert_eq!(filters.search.as_deref(), Some("degree"));

        assert!(DashboardFilters::from_query(&q(&[("start", "01/02/2024")])).is_err());
        assert!(DashboardFilters::from_query(&q(&[("tier", "legendary")])).is_err());
    }

    #[test]
    fn test_bounds() {
        let records = sample_records();
        let bounds = DataBounds::of(&records);
        assert_eq!(bounds.min_date, records.iter().map(|r| r.date).min());
        let mut sorted = bounds.subreddits.clone();
        sorted.sort();
        assert_eq!(sorted, bounds.subreddits);
    }
}
