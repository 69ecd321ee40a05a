use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::timestamp;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Post,
    Comment,
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordType::Post => write!(f, "post"),
            RecordType::Comment => write!(f, "comment"),
        }
    }
}

/// A post or comment as written by the generator and the collectors.
///
/// Optional fields tolerate the narrower archive export and the gaps the
/// cleaning pipeline is there to repair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "type", default)]
    pub kind: Option<RecordType>,
    pub thread_id: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(with = "timestamp")]
    pub created_utc: NaiveDateTime,
    pub score: i64,
    pub subreddit: String,
    #[serde(default)]
    pub author: Option<String>,
}

impl RawRecord {
    /// Missing ids belong to archive submissions, whose id is the thread id.
    pub fn record_id(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.thread_id)
    }

    pub fn record_type(&self) -> RecordType {
        self.kind.unwrap_or_else(|| {
            if self.record_id() == self.thread_id {
                RecordType::Post
            } else {
                RecordType::Comment
            }
        })
    }

    pub fn has_body(&self) -> bool {
        self.body.as_deref().map(|b| !b.trim().is_empty()).unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub const THRESHOLD: f64 = 0.1;

    pub fn from_score(score: f64) -> Self {
        if score > Self::THRESHOLD {
            SentimentLabel::Positive
        } else if score < -Self::THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn all() -> [SentimentLabel; 3] {
        [
            SentimentLabel::Positive,
            SentimentLabel::Neutral,
            SentimentLabel::Negative,
        ]
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Neutral => write!(f, "neutral"),
            SentimentLabel::Negative => write!(f, "negative"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum EngagementTier {
    Low,
    Medium,
    High,
    Viral,
}

impl EngagementTier {
    /// Bins are right-closed `(lo, hi]`: low <= 10, medium 11-25, high 26-100, viral 101+.
    pub fn from_score(score: i64) -> Self {
        match score {
            s if s <= 10 => EngagementTier::Low,
            s if s <= 25 => EngagementTier::Medium,
            s if s <= 100 => EngagementTier::High,
            _ => EngagementTier::Viral,
        }
    }

    pub fn all() -> [EngagementTier; 4] {
        [
            EngagementTier::Low,
            EngagementTier::Medium,
            EngagementTier::High,
            EngagementTier::Viral,
        ]
    }
}

impl std::fmt::Display for EngagementTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngagementTier::Low => write!(f, "low"),
            EngagementTier::Medium => write!(f, "medium"),
            EngagementTier::High => write!(f, "high"),
            EngagementTier::Viral => write!(f, "viral"),
        }
    }
}

impl std::str::FromStr for EngagementTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(EngagementTier::Low),
            "medium" => Ok(EngagementTier::Medium),
            "high" => Ok(EngagementTier::High),
            "viral" => Ok(EngagementTier::Viral),
            other => Err(format!("unknown engagement tier: {}", other)),
        }
    }
}

/// Analysis-ready record written by the cleaning pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedRecord {
    #[serde(rename = "type")]
    pub kind: RecordType,
    pub thread_id: String,
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(with = "timestamp")]
    pub created_utc: NaiveDateTime,
    pub score: i64,
    pub subreddit: String,
    pub author: String,
    pub date: NaiveDate,
    pub month: String,
    pub sentiment_score: f64,
    pub sentiment_label: SentimentLabel,
    pub word_count: usize,
    pub engagement_tier: EngagementTier,
}

impl CleanedRecord {
    pub const COLUMNS: [&'static str; 15] = [
        "type",
        "thread_id",
        "id",
        "title",
        "body",
        "created_utc",
        "score",
        "subreddit",
        "author",
        "date",
        "month",
        "sentiment_score",
        "sentiment_label",
        "word_count",
        "engagement_tier",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_label_thresholds() {
        assert_eq!(SentimentLabel::from_score(0.11), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.11), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(1.0), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(-1.0), SentimentLabel::Negative);
    }

    #[test]
    fn test_engagement_tier_boundaries() {
        assert_eq!(EngagementTier::from_score(-3), EngagementTier::Low);
        assert_eq!(EngagementTier::from_score(10), EngagementTier::Low);
        assert_eq!(EngagementTier::from_score(11), EngagementTier::Medium);
        assert_eq!(EngagementTier::from_score(25), EngagementTier::Medium);
        assert_eq!(EngagementTier::from_score(26), EngagementTier::High);
        assert_eq!(EngagementTier::from_score(100), EngagementTier::High);
        assert_eq!(EngagementTier::from_score(101), EngagementTier::Viral);
        assert_eq!(EngagementTier::from_score(5000), EngagementTier::Viral);
    }

    #[test]
    fn test_engagement_tier_is_monotonic() {
        let mut previous = EngagementTier::from_score(-50);
        for score in -50..300 {
            let tier = EngagementTier::from_score(score);
            assert!(tier >= previous, "tier dropped at score {}", score);
            previous = tier;
        }
    }

    #[test]
    fn test_raw_record_inference() {
        let mut record = RawRecord {
            kind: None,
            thread_id: "abc123".into(),
            id: None,
            title: None,
            body: Some("   ".into()),
            created_utc: chrono::NaiveDateTime::default(),
            score: 3,
            subreddit: "jobs".into(),
            author: None,
        };
        assert_eq!(record.record_id(), "abc123");
        assert_eq!(record.record_type(), RecordType::Post);
        assert!(!record.has_body());

        record.id = Some("c1".into());
        assert_eq!(record.record_type(), RecordType::Comment);

        record.kind = Some(RecordType::Post);
        assert_eq!(record.record_type(), RecordType::Post);
    }

    #[test]
    fn test_tier_from_str() {
        assert_eq!("Viral".parse::<EngagementTier>(), Ok(EngagementTier::Viral));
        assert!("huge".parse::<EngagementTier>().is_err());
    }
}
