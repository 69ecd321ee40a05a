use reqwest::header::HeaderMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tokio::time::{sleep, Duration};

pub struct RateLimiter {
    state: Arc<Mutex<RateLimitState>>,
    requests_per_minute: u32,
    min_interval: Duration,
}

struct RateLimitState {
    remaining: Option<u32>,
    reset_at: Option<Instant>,
    requests_this_minute: u32,
    minute_start: Instant,
    last_request: Option<Instant>,
}

impl RateLimiter {
    pub fn new(requests_per_minute: u32) -> Self {
        Self::with_min_interval(requests_per_minute, Duration::ZERO)
    }

    /// Like `new`, but also keeps consecutive requests at least
    /// `min_interval` apart.
    pub fn with_min_interval(requests_per_minute: u32, min_interval: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(RateLimitState {
                remaining: None,
                reset_at: None,
                requests_this_minute: 0,
                minute_start: Instant::now(),
                last_request: None,
            })),
            requests_per_minute: requests_per_minute.max(1),
            min_interval,
        }
    }

    pub async fn wait(&self) {
        let mut state = self.state.lock().await;

        // Server said we are out of requests until the window resets
        if state.remaining == Some(0) {
            if let Some(reset_at) = state.reset_at {
                let now = Instant::now();
                if reset_at > now {
                    let wait_duration = reset_at - now;
                    drop(state);
                    tracing::info!("Rate limited, waiting {:?}", wait_duration);
                    sleep(wait_duration).await;
                    state = self.state.lock().await;
                }
                state.remaining = None;
                state.reset_at = None;
            }
        }

        let minute_elapsed = state.minute_start.elapsed();
        if minute_elapsed < Duration::from_secs(60) {
            if state.requests_this_minute >= self.requests_per_minute {
                let wait_time = Duration::from_secs(60) - minute_elapsed;
                drop(state);
                tracing::debug!("Soft rate limiting, waiting {:?}", wait_time);
                sleep(wait_time).await;
                state = self.state.lock().await;
                state.requests_this_minute = 0;
                state.minute_start = Instant::now();
            }
        } else {
            state.requests_this_minute = 0;
            state.minute_start = Instant::now();
        }

        if let Some(last) = state.last_request {
            let since_last = last.elapsed();
            if since_last < self.min_interval {
                let wait_time = self.min_interval - since_last;
                tracing::debug!("Spacing requests, waiting {:?}", wait_time);
                sleep(wait_time).await;
            }
        }

        state.requests_this_minute += 1;
        state.last_request = Some(Instant::now());
    }

    pub async fn update_from_headers(&self, headers: &HeaderMap) {
        if let Some((remaining, reset_secs)) = parse_rate_headers(headers) {
            let mut state = self.state.lock().await;
            state.remaining = Some(remaining);
            state.reset_at = reset_secs.map(|secs| Instant::now() + Duration::from_secs(secs));
        }
    }
}

/// Reddit reports `x-ratelimit-remaining` as a float and `x-ratelimit-reset`
/// as seconds until the window resets.
pub fn parse_rate_headers(headers: &HeaderMap) -> Option<(u32, Option<u64>)> {
    let remaining = headers
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<f64>().ok())?;

    let reset = headers
        .get("x-ratelimit-reset")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());

    Some((remaining.max(0.0).floor() as u32, reset))
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(30)
    }
}
