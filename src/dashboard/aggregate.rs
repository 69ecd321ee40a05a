//! Group-by summaries over the filtered records. Every function takes the
//! filtered slice and returns rows ready to be embedded as chart data.

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::dashboard::keywords::ThemeSet;
use crate::models::{CleanedRecord, EngagementTier, RecordType, SentimentLabel};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub posts: usize,
    pub comments: usize,
    pub avg_sentiment: f64,
    pub unique_threads: usize,
    pub positive_pct: f64,
    pub neutral_pct: f64,
    pub negative_pct: f64,
}

impl Summary {
    pub fn of(records: &[&CleanedRecord]) -> Self {
        let total = records.len();
        let posts = records.iter().filter(|r| r.kind == RecordType::Post).count();
        let threads: HashSet<&str> = records.iter().map(|r| r.thread_id.as_str()).collect();
        let pct = |label: SentimentLabel| {
            if total == 0 {
                0.0
            } else {
                let n = records.iter().filter(|r| r.sentiment_label == label).count();
                n as f64 * 100.0 / total as f64
            }
        };

        Self {
            total,
            posts,
            comments: total - posts,
            avg_sentiment: mean(records.iter().map(|r| r.sentiment_score)),
            unique_threads: threads.len(),
            positive_pct: pct(SentimentLabel::Positive),
            neutral_pct: pct(SentimentLabel::Neutral),
            negative_pct: pct(SentimentLabel::Negative),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyCount {
    pub month: String,
    pub series: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyMean {
    pub month: String,
    pub series: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorePoint {
    #[serde(rename = "type")]
    pub kind: RecordType,
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubredditStats {
    pub subreddit: String,
    pub posts: usize,
    pub comments: usize,
    pub avg_score: f64,
    pub avg_sentiment: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeStats {
    pub theme: String,
    pub records: usize,
    pub share: f64,
    pub avg_sentiment: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierMix {
    pub tier: EngagementTier,
    pub label: SentimentLabel,
    pub count: usize,
    pub share: f64,
}

/// Record counts per month and type.
pub fn monthly_volume(records: &[&CleanedRecord]) -> Vec<MonthlyCount> {
    let mut counts: BTreeMap<(String, String), usize> = BTreeMap::new();
    for r in records {
        *counts
            .entry((r.month.clone(), r.kind.to_string()))
            .or_default() += 1;
    }
    into_counts(counts)
}

pub fn score_points(records: &[&CleanedRecord]) -> Vec<ScorePoint> {
    records
        .iter()
        .map(|r| ScorePoint {
            kind: r.kind,
            score: r.score,
        })
        .collect()
}

/// Monthly mention counts per theme, matched against the body.
/// Months without a mention are absent, so an empty result means no matches.
pub fn theme_trends(records: &[&CleanedRecord], themes: &ThemeSet) -> Vec<MonthlyCount> {
    let mut counts: BTreeMap<(String, String), usize> = BTreeMap::new();
    for r in records {
        for theme in themes.matching(&r.body) {
            *counts
                .entry((r.month.clone(), theme.name.clone()))
                .or_default() += 1;
        }
    }
    into_counts(counts)
}

pub fn monthly_sentiment(records: &[&CleanedRecord]) -> Vec<MonthlyMean> {
    let mut groups: BTreeMap<(String, String), Vec<f64>> = BTreeMap::new();
    for r in records {
        groups
            .entry((r.month.clone(), r.subreddit.clone()))
            .or_default()
            .push(r.sentiment_score);
    }
    groups
        .into_iter()
        .map(|((month, series), scores)| MonthlyMean {
            month,
            series,
            value: mean(scores.into_iter()),
        })
        .collect()
}

pub fn subreddit_stats(records: &[&CleanedRecord]) -> Vec<SubredditStats> {
    let mut groups: BTreeMap<&str, Vec<&CleanedRecord>> = BTreeMap::new();
    for r in records {
        groups.entry(r.subreddit.as_str()).or_default().push(r);
    }
    groups
        .into_iter()
        .map(|(subreddit, rows)| {
            let posts = rows.iter().filter(|r| r.kind == RecordType::Post).count();
            SubredditStats {
                subreddit: subreddit.to_string(),
                posts,
                comments: rows.len() - posts,
                avg_score: mean(rows.iter().map(|r| r.score as f64)),
                avg_sentiment: mean(rows.iter().map(|r| r.sentiment_score)),
            }
        })
        .collect()
}

/// Per-theme reach over title and body. Share is the fraction of all
/// filtered records, so shares need not sum to one.
pub fn theme_stats(records: &[&CleanedRecord], themes: &ThemeSet) -> Vec<ThemeStats> {
    themes
        .themes()
        .iter()
        .map(|theme| {
            let hits: Vec<f64> = records
                .iter()
                .filter(|r| theme.matches(&r.body) || theme.matches(&r.title))
                .map(|r| r.sentiment_score)
                .collect();
            let share = if records.is_empty() {
                0.0
            } else {
                hits.len() as f64 / records.len() as f64
            };
            ThemeStats {
                theme: theme.name.clone(),
                records: hits.len(),
                share,
                avg_sentiment: (!hits.is_empty()).then(|| mean(hits.iter().copied())),
            }
        })
        .collect()
}

/// Sentiment label mix within each engagement tier present in the data.
pub fn tier_sentiment_mix(records: &[&CleanedRecord]) -> Vec<TierMix> {
    let mut counts: BTreeMap<EngagementTier, BTreeMap<SentimentLabel, usize>> = BTreeMap::new();
    for r in records {
        *counts
            .entry(r.engagement_tier)
            .or_default()
            .entry(r.sentiment_label)
            .or_default() += 1;
    }

    let mut mix = Vec::new();
    for (tier, labels) in counts {
        let tier_total: usize = labels.values().sum();
        for label in SentimentLabel::all() {
            let count = labels.get(&label).copied().unwrap_or(0);
            mix.push(TierMix {
                tier,
                label,
                count,
                share: count as f64 / tier_total as f64,
            });
        }
    }
    mix
}

fn into_counts(counts: BTreeMap<(String, String), usize>) -> Vec<MonthlyCount> {
    counts
        .into_iter()
        .map(|((month, series), count)| MonthlyCount {
            month,
            series,
            count,
        })
        .collect()
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::tests::{record, sample_records};

    #[test]
    fn test_summary() {
        let records = vec![
            record("a", "a", RecordType::Post, "jobs", "2024-01-05", 0.5, 3),
            record("a", "c1", RecordType::Comment, "jobs", "2024-01-06", -0.5, 12),
            record("b", "b", RecordType::Post, "govfire", "2024-02-01", 0.0, 40),
            record("b", "c2", RecordType::Comment, "govfire", "2024-02-02", 0.2, 150),
        ];
        let refs: Vec<&CleanedRecord> = records.iter().collect();
        let summary = Summary::of(&refs);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.posts, 2);
        assert_eq!(summary.comments, 2);
        assert_eq!(summary.unique_threads, 2);
        assert!((summary.avg_sentiment - 0.05).abs() < 1e-9);
        assert!((summary.positive_pct - 50.0).abs() < 1e-9);
        assert!((summary.neutral_pct - 25.0).abs() < 1e-9);
        assert!((summary.negative_pct - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_of_nothing() {
        let summary = Summary::of(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.avg_sentiment, 0.0);
        assert_eq!(summary.positive_pct, 0.0);
    }

    #[test]
    fn test_monthly_volume_and_subreddits() {
        let records = sample_records();
        let refs: Vec<&CleanedRecord> = records.iter().collect();

        let volume = monthly_volume(&refs);
        let total: usize = volume.iter().map(|v| v.count).sum();
        assert_eq!(total, records.len());
        assert!(volume.windows(2).all(|w| w[0].month <= w[1].month));

        let stats = subreddit_stats(&refs);
        let counted: usize = stats.iter().map(|s| s.posts + s.comments).sum();
        assert_eq!(counted, records.len());
    }

    #[test]
    fn test_theme_trends_only_count_matches() {
        let mut records = vec![
            record("a", "a", RecordType::Post, "jobs", "2024-01-05", 0.1, 3),
            record("b", "b", RecordType::Post, "jobs", "2024-03-05", 0.1, 3),
        ];
        records[0].body = "Skills-based hiring and the RIF".into();
        records[1].body = "Nothing relevant here".into();
        let refs: Vec<&CleanedRecord> = records.iter().collect();

        let trends = theme_trends(&refs, &ThemeSet::keywords().unwrap());
        assert_eq!(trends.len(), 2);
        assert!(trends.iter().all(|t| t.month == "2024-01" && t.count == 1));

        let none = theme_trends(&refs[1..], &ThemeSet::keywords().unwrap());
        assert!(none.is_empty());
    }

    #[test]
    fn test_theme_stats_and_tier_mix() {
        let mut records = vec![
            record("a", "a", RecordType::Post, "jobs", "2024-01-05", 0.4, 3),
            record("b", "b", RecordType::Post, "jobs", "2024-03-05", -0.4, 5),
        ];
        records[0].body = "They dropped the degree requirement".into();
        records[1].body = "Another degree gatekeeping story".into();
        let refs: Vec<&CleanedRecord> = records.iter().collect();

        let stats = theme_stats(&refs, &ThemeSet::frames().unwrap());
        let credentials = &stats[0];
        assert_eq!(credentials.theme, "Credential barriers");
        assert_eq!(credentials.records, 2);
        assert!((credentials.share - 1.0).abs() < 1e-9);
        assert_eq!(credentials.avg_sentiment, Some(0.0));
        assert!(stats.iter().skip(1).any(|s| s.avg_sentiment.is_none()));

        let mix = tier_sentiment_mix(&refs);
        assert_eq!(mix.len(), 3);
        assert!(mix.iter().all(|m| m.tier == EngagementTier::Low));
        let total_share: f64 = mix.iter().map(|m| m.share).sum();
        assert!((total_share - 1.0).abs() < 1e-9);
    }
}
