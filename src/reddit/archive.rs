use chrono::NaiveDateTime;
use reqwest::{header, Client};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::models::reddit::{ArchiveResponse, ArchiveSubmission};
use crate::reddit::rate_limiter::RateLimiter;

pub const DEFAULT_ARCHIVE_URL: &str = "https://api.pushshift.io/reddit";
const PAGE_SIZE: usize = 100;

#[derive(Debug, Clone)]
pub struct ArchiveQuery {
    pub subreddits: Vec<String>,
    pub query: String,
    pub after: NaiveDateTime,
    pub before: NaiveDateTime,
    pub fields: Vec<String>,
    pub limit: usize,
}

/// Client for the Pushshift-style archival submission search.
pub struct ArchiveClient {
    client: Client,
    rate_limiter: RateLimiter,
    base_url: String,
}

impl ArchiveClient {
    /// Consecutive page requests are kept `request_delay` apart.
    pub fn new(base_url: &str, request_delay: Duration) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::USER_AGENT, header::HeaderValue::from_static("Mozilla/5.0"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(60))
            .build()?;

        Ok(Self {
            client,
            rate_limiter: RateLimiter::with_min_interval(30, request_delay),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Pages backwards from `before`, newest first, until `limit` or the window is exhausted.
    pub async fn search_submissions(&self, query: &ArchiveQuery) -> Result<Vec<ArchiveSubmission>> {
        let url = format!("{}/search/submission", self.base_url);
        let after = query.after.and_utc().timestamp();
        let mut before = query.before.and_utc().timestamp();
        let mut all_items: Vec<ArchiveSubmission> = Vec::new();

        while all_items.len() < query.limit {
            self.rate_limiter.wait().await;

            let size = (query.limit - all_items.len()).min(PAGE_SIZE);
            let params = page_params(query, after, before, size);

            tracing::debug!("Fetching archive page before={}", before);
            let response = self.client.get(&url).query(&params).send().await?;
            self.rate_limiter.update_from_headers(response.headers()).await;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(Error::ArchiveApi(format!(
                    "Submission search failed: {} - {}",
                    status, body
                )));
            }

            let page: ArchiveResponse = response.json().await?;
            let Some(oldest) = next_cursor(&page.data) else {
                break;
            };
            all_items.extend(page.data);

            if oldest >= before {
                break;
            }
            before = oldest;
        }

        all_items.truncate(query.limit);
        tracing::info!("Archive search returned {} submissions", all_items.len());
        Ok(all_items)
    }
}

fn page_params(query: &ArchiveQuery, after: i64, before: i64, size: usize) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("subreddit", query.subreddits.join(",")),
        ("q", query.query.clone()),
        ("after", after.to_string()),
        ("before", before.to_string()),
        ("size", size.to_string()),
        ("sort", "desc".to_string()),
        ("sort_type", "created_utc".to_string()),
    ];
    if !query.fields.is_empty() {
        params.push(("fields", query.fields.join(",")));
    }
    params
}

/// Oldest timestamp in a page, which becomes the next `before` bound.
fn next_cursor(page: &[ArchiveSubmission]) -> Option<i64> {
    page.iter().map(|s| s.created_utc.trunc() as i64).min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::midnight;

    fn submission(id: &str, created_utc: f64) -> ArchiveSubmission {
        ArchiveSubmission {
            id: id.into(),
            title: None,
            selftext: None,
            author: None,
            created_utc,
            score: 1,
            subreddit: "jobs".into(),
        }
    }

    #[test]
    fn test_next_cursor_is_oldest() {
        let page = vec![submission("a", 300.0), submission("b", 100.9), submission("c", 200.0)];
        assert_eq!(next_cursor(&page), Some(100));
        assert_eq!(next_cursor(&[]), None);
    }

    #[test]
    fn test_page_params() {
        let query = ArchiveQuery {
            subreddits: vec!["jobs".into(), "recruiting".into()],
            query: "hiring OR skills".into(),
            after: midnight(2022, 1, 1),
            before: midnight(2025, 7, 24),
            fields: vec!["id".into(), "title".into()],
            limit: 500,
        };
        let params = page_params(&query, 1, 2, 100);
        assert!(params.contains(&("subreddit", "jobs,recruiting".to_string())));
        assert!(params.contains(&("fields", "id,title".to_string())));
        assert!(params.contains(&("size", "100".to_string())));
        assert!(params.contains(&("before", "2".to_string())));
    }
}
