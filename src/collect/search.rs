use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::time::Duration;

use crate::collect::collector::{progress_bar, Collector};
use crate::config::midnight;
use crate::error::Result;
use crate::models::reddit::{Comment, Submission};
use crate::models::{timestamp, RawRecord};
use crate::reddit::RedditClient;

#[derive(Debug, Clone)]
pub struct SearchPlan {
    pub subreddits: Vec<String>,
    pub keywords: Vec<String>,
    pub after: NaiveDateTime,
    pub before: NaiveDateTime,
    /// Submissions per keyword per subreddit.
    pub limit: u32,
    pub min_score: i64,
    /// Pause after each submission's comment fetch.
    pub sleep: Duration,
}

impl Default for SearchPlan {
    fn default() -> Self {
        Self {
            subreddits: ["deptHHS", "FedEmployees", "feddiscussion", "govfire"]
                .map(String::from)
                .to_vec(),
            keywords: ["hiring", "skills", "RIF", "applied", "hired"]
                .map(String::from)
                .to_vec(),
            after: midnight(2024, 1, 1),
            before: midnight(2025, 6, 30),
            limit: 100,
            min_score: 5,
            sleep: Duration::from_secs(1),
        }
    }
}

impl SearchPlan {
    pub fn keeps_submission(&self, submission: &Submission) -> bool {
        let in_window = timestamp::from_epoch(submission.created_utc)
            .map(|ts| self.after <= ts && ts <= self.before)
            .unwrap_or(false);
        in_window && submission.score >= self.min_score
    }

    pub fn keeps_comment(&self, comment: &Comment) -> bool {
        comment.score >= self.min_score
    }
}

/// Collects posts and their comments through the Reddit search API.
pub struct SearchCollector {
    client: RedditClient,
    plan: SearchPlan,
}

impl SearchCollector {
    pub fn new(client: RedditClient, plan: SearchPlan) -> Self {
        Self { client, plan }
    }
}

#[async_trait]
impl Collector for SearchCollector {
    async fn collect(&self) -> Result<Vec<RawRecord>> {
        let plan = &self.plan;
        let pairs = plan.subreddits.len() * plan.keywords.len();
        let pb = progress_bar(pairs as u64, "searches");
        let mut records = Vec::new();

        for subreddit in &plan.subreddits {
            for keyword in &plan.keywords {
                let submissions = self
                    .client
                    .search_subreddit(subreddit, keyword, plan.limit)
                    .await?;

                for submission in submissions.iter().filter(|s| plan.keeps_submission(s)) {
                    records.extend(submission.to_record());

                    let comments = self.client.get_comments(&submission.id).await?;
                    records.extend(
                        comments
                            .iter()
                            .filter(|c| plan.keeps_comment(c))
                            .filter_map(|c| c.to_record(submission)),
                    );

                    tokio::time::sleep(plan.sleep).await;
                }

                pb.inc(1);
            }
        }

        pb.finish_with_message("Search complete");
        tracing::info!("Collected {} records from search", records.len());
        Ok(records)
    }

    fn name(&self) -> &str {
        "search"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(created_utc: f64, score: i64) -> Submission {
        Submission {
            id: "abc".into(),
            title: "Skills-based hiring".into(),
            selftext: String::new(),
            author: None,
            subreddit: "govfire".into(),
            created_utc,
            score,
            num_comments: 0,
        }
    }

    #[test]
    fn test_keeps_submission_window_and_score() {
        let plan = SearchPlan::default();
        // 2024-06-01
        assert!(plan.keeps_submission(&submission(1_717_200_000.0, 5)));
        assert!(!plan.keeps_submission(&submission(1_717_200_000.0, 4)));
        // 2023-06-01
        assert!(!plan.keeps_submission(&submission(1_685_577_600.0, 50)));
        // 2024-01-01 00:00:00 exactly
        assert!(plan.keeps_submission(&submission(1_704_067_200.0, 5)));
    }

    #[test]
    fn test_keeps_comment_min_score() {
        let plan = SearchPlan::default();
        let mut comment = Comment {
            id: "c".into(),
            body: "ok".into(),
            author: None,
            created_utc: 0.0,
            score: 5,
        };
        assert!(plan.keeps_comment(&comment));
        comment.score = 4;
        assert!(!plan.keeps_comment(&comment));
    }
}
