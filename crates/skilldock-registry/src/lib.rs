//! Registry access layer for the Skilldock catalog client.
//!
//! Every network call made by the UI goes through this crate. The
//! `RegistryClient` mediates paginated and searchable fetches of plugins and
//! skills with a request-resilience core built from small, composable parts:
//!
//! - `cache`: TTL result cache with deterministic key generation
//! - `dedupe`: single-flight deduplication of identical in-flight requests
//! - `limiter`: FIFO admission control bounding simultaneous requests
//! - `rate`: per-key sliding-window rate limiting for scroll pagination
//! - `timeout`: deadline racing without cancelling the underlying request
//! - `counter`: per-endpoint success/failure tallies for diagnostics
//! - `fallback`: bundled static dataset served when the registry is down

pub mod api;
pub mod cache;
pub mod client;
pub mod counter;
pub mod dedupe;
pub mod fallback;
pub mod limiter;
pub mod rate;
pub mod timeout;

// Re-export main types
pub use cache::{CacheEntry, CacheStats, TtlCache};
pub use client::{ApiStats, RegistryClient, RegistryConfig, PLUGIN_PAGE_SIZE, SKILL_PAGE_SIZE};
pub use counter::{EndpointCounts, RequestCounter};
pub use dedupe::RequestDeduplicator;
pub use limiter::{ConcurrencyLimiter, LimiterPermit, LimiterStats};
pub use rate::RateLimiter;
pub use timeout::with_timeout;

use skilldock_core::DockError;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, DockError>;
