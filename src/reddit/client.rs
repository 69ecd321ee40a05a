use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::models::reddit::{flatten_comment_tree, Comment, Submission};
use crate::reddit::paginator::Paginator;
use crate::reddit::rate_limiter::RateLimiter;

pub const AUTH_URL: &str = "https://www.reddit.com/api/v1/access_token";
pub const API_BASE: &str = "https://oauth.reddit.com";

/// Where to request tokens and where to send authenticated API calls.
#[derive(Debug, Clone)]
pub struct RedditEndpoints {
    pub auth_url: String,
    pub api_base: String,
}

impl Default for RedditEndpoints {
    fn default() -> Self {
        Self {
            auth_url: AUTH_URL.to_string(),
            api_base: API_BASE.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Application-only OAuth client for subreddit search and comment trees.
pub struct RedditClient {
    client: Client,
    rate_limiter: RateLimiter,
    base_url: String,
    token: String,
}

impl RedditClient {
    /// Connects to reddit.com. Consecutive requests are kept `request_delay` apart.
    pub async fn connect(
        client_id: &str,
        client_secret: &str,
        user_agent: &str,
        request_delay: Duration,
    ) -> Result<Self> {
        Self::connect_to(
            &RedditEndpoints::default(),
            client_id,
            client_secret,
            user_agent,
            request_delay,
        )
        .await
    }

    pub async fn connect_to(
        endpoints: &RedditEndpoints,
        client_id: &str,
        client_secret: &str,
        user_agent: &str,
        request_delay: Duration,
    ) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(user_agent)?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()?;

        let token = Self::fetch_token(&client, &endpoints.auth_url, client_id, client_secret).await?;
        tracing::info!("Authenticated with Reddit API");

        Ok(Self {
            client,
            rate_limiter: RateLimiter::with_min_interval(60, request_delay),
            base_url: endpoints.api_base.trim_end_matches('/').to_string(),
            token,
        })
    }

    async fn fetch_token(
        client: &Client,
        auth_url: &str,
        client_id: &str,
        client_secret: &str,
    ) -> Result<String> {
        let response = client
            .post(auth_url)
            .basic_auth(client_id, Some(client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::RedditApi(format!(
                "Token request failed: {} - {}",
                status, body
            )));
        }

        let token: TokenResponse = response.json().await?;
        match (token.access_token, token.error) {
            (Some(access_token), _) => Ok(access_token),
            (None, Some(err)) => Err(Error::RedditApi(format!("Token request rejected: {}", err))),
            (None, None) => Err(Error::ParseError("token response had no access_token".into())),
        }
    }

    /// Searches one subreddit for a keyword, most relevant first, across all time.
    pub async fn search_subreddit(
        &self,
        subreddit: &str,
        keyword: &str,
        limit: u32,
    ) -> Result<Vec<Submission>> {
        let url = format!("{}/r/{}/search", self.base_url, subreddit);
        let params = [
            ("q", keyword),
            ("restrict_sr", "1"),
            ("sort", "relevance"),
            ("t", "all"),
            ("type", "link"),
        ];
        tracing::debug!("Searching r/{} for {:?}", subreddit, keyword);

        let paginator = Paginator::new(&self.client, &self.rate_limiter, &self.token);
        paginator.fetch_limited(&url, &params, limit).await
    }

    /// Loaded comments of a submission; collapsed "load more" branches are not expanded.
    pub async fn get_comments(&self, submission_id: &str) -> Result<Vec<Comment>> {
        self.rate_limiter.wait().await;
        let url = format!("{}/comments/{}", self.base_url, submission_id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(&[("limit", "500"), ("raw_json", "1")])
            .send()
            .await?;
        self.rate_limiter.update_from_headers(response.headers()).await;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("x-ratelimit-reset")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
                .unwrap_or(60);
            return Err(Error::RateLimited(retry_after));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::RedditApi(format!(
                "Failed to fetch comments for {}: {} - {}",
                submission_id, status, body
            )));
        }

        let payload: Value = response.json().await?;
        Ok(flatten_comment_tree(&payload))
    }
}
