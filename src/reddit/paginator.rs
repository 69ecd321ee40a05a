use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::models::reddit::Listing;
use crate::reddit::rate_limiter::RateLimiter;

/// Reddit caps a listing page at 100 children.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Walks a listing endpoint by its `after` cursor.
pub struct Paginator<'a> {
    client: &'a Client,
    rate_limiter: &'a RateLimiter,
    token: &'a str,
}

impl<'a> Paginator<'a> {
    pub fn new(client: &'a Client, rate_limiter: &'a RateLimiter, token: &'a str) -> Self {
        Self {
            client,
            rate_limiter,
            token,
        }
    }

    pub async fn fetch_limited<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
        max_items: u32,
    ) -> Result<Vec<T>> {
        let mut all_items = Vec::new();
        let mut after: Option<String> = None;

        loop {
            self.rate_limiter.wait().await;

            let remaining = max_items.saturating_sub(all_items.len() as u32);
            let page_size = remaining.min(MAX_PAGE_SIZE).to_string();

            let mut request = self
                .client
                .get(url)
                .bearer_auth(self.token)
                .query(params)
                .query(&[("limit", page_size.as_str()), ("raw_json", "1")]);
            if let Some(ref cursor) = after {
                request = request.query(&[("after", cursor.as_str())]);
            }

            tracing::debug!("Fetching: {} (after={:?})", url, after);
            let response = request.send().await?;
            self.rate_limiter.update_from_headers(response.headers()).await;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(Error::RedditApi(format!(
                    "Listing request to {} failed: {} - {}",
                    url, status, body
                )));
            }

            let listing: Listing<T> = response.json().await?;
            let items_count = listing.data.children.len();
            all_items.extend(listing.data.children.into_iter().map(|c| c.data));

            after = listing.data.after;
            if all_items.len() >= max_items as usize || after.is_none() || items_count == 0 {
                break;
            }
        }

        all_items.truncate(max_items as usize);
        Ok(all_items)
    }
}
