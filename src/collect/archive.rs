use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::collect::collector::Collector;
use crate::config::midnight;
use crate::error::Result;
use crate::models::RawRecord;
use crate::reddit::{ArchiveClient, ArchiveQuery};

#[derive(Debug, Clone)]
pub struct ArchivePlan {
    pub subreddits: Vec<String>,
    pub keywords: Vec<String>,
    pub after: NaiveDateTime,
    pub before: NaiveDateTime,
    pub limit: usize,
}

impl Default for ArchivePlan {
    fn default() -> Self {
        Self {
            subreddits: ["humanresources", "recruiting", "jobs", "careerguidance"]
                .map(String::from)
                .to_vec(),
            keywords: ["hiring", "skills"].map(String::from).to_vec(),
            after: midnight(2022, 1, 1),
            before: midnight(2025, 7, 24),
            limit: 500,
        }
    }
}

impl ArchivePlan {
    pub fn to_query(&self) -> ArchiveQuery {
        ArchiveQuery {
            subreddits: self.subreddits.clone(),
            query: self.keywords.join(" OR "),
            after: self.after,
            before: self.before,
            fields: ["id", "title", "selftext", "created_utc", "score", "subreddit", "author"]
                .map(String::from)
                .to_vec(),
            limit: self.limit,
        }
    }
}

/// Historical submissions from the archival search API. Posts only.
pub struct ArchiveCollector {
    client: ArchiveClient,
    plan: ArchivePlan,
}

impl ArchiveCollector {
    pub fn new(client: ArchiveClient, plan: ArchivePlan) -> Self {
        Self { client, plan }
    }
}

#[async_trait]
impl Collector for ArchiveCollector {
    async fn collect(&self) -> Result<Vec<RawRecord>> {
        let submissions = self.client.search_submissions(&self.plan.to_query()).await?;
        Ok(submissions.iter().filter_map(|s| s.to_record()).collect())
    }

    fn name(&self) -> &str {
        "archive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        let query = ArchivePlan::default().to_query();
        assert_eq!(query.query, "hiring OR skills");
        assert_eq!(query.limit, 500);
        assert_eq!(query.subreddits.len(), 4);
        assert!(query.fields.iter().any(|f| f == "selftext"));
    }
}
