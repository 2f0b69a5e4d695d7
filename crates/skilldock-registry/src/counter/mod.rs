//! Per-endpoint success/failure tallies for diagnostics.
//!
//! Process-lifetime scoped: counts only ever increment and reset with the
//! process.

use std::collections::HashMap;

use dashmap::DashMap;
use serde::Serialize;

/// Success/failure counts for one endpoint
#[derive(Debug, Clone, Default, Serialize)]
pub struct EndpointCounts {
    pub success: u64,
    pub failure: u64,
}

/// Tallies request outcomes per endpoint name
#[derive(Debug, Default)]
pub struct RequestCounter {
    counts: DashMap<String, EndpointCounts>,
}

impl RequestCounter {
    /// Create an empty counter
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one request outcome for an endpoint
    pub fn record(&self, endpoint: &str, succeeded: bool) {
        let mut counts = self.counts.entry(endpoint.to_string()).or_default();
        if succeeded {
            counts.success += 1;
        } else {
            counts.failure += 1;
        }
    }

    /// Read-only snapshot of all endpoint counts
    pub fn stats(&self) -> HashMap<String, EndpointCounts> {
        self.counts
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests;
