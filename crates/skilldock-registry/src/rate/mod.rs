//! Per-key sliding-window rate limiting.
//!
//! Distinct from the global concurrency limiter: this gate bounds how often
//! a specific logical stream (for example `plugins-scroll`) may start new
//! network requests within a trailing time window. Denial is soft; callers
//! answer with an empty page instead of an error.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use dashmap::DashMap;

/// Sliding-window request gate, keyed by stream name
#[derive(Debug)]
pub struct RateLimiter {
    /// Maximum admitted requests per window
    max_requests: usize,
    /// Trailing window length
    window: Duration,
    /// Admission timestamps per key, oldest first
    windows: DashMap<String, VecDeque<Instant>>,
}

impl RateLimiter {
    /// Create a limiter admitting `max_requests` per `window` for each key
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            windows: DashMap::new(),
        }
    }

    /// Would admitting one more request for this key stay within the limit?
    ///
    /// Timestamps older than the window are pruned lazily on each check.
    pub fn can_request(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut stamps = self.windows.entry(key.to_string()).or_default();

        while let Some(oldest) = stamps.front() {
            if now.duration_since(*oldest) >= self.window {
                stamps.pop_front();
            } else {
                break;
            }
        }

        stamps.len() < self.max_requests
    }

    /// Record that a request for this key was admitted now
    pub fn record_request(&self, key: &str) {
        self.windows
            .entry(key.to_string())
            .or_default()
            .push_back(Instant::now());
    }
}
