pub mod client;
pub mod archive;
pub mod rate_limiter;
pub mod paginator;

pub use client::{RedditClient, RedditEndpoints};
pub use archive::{ArchiveClient, ArchiveQuery};
pub use rate_limiter::RateLimiter;
pub use paginator::Paginator;
