//! Single-flight deduplication of identical in-flight requests.
//!
//! At most one producer runs per cache key. The first caller for a key
//! becomes the leader and executes the factory; every caller that arrives
//! before the leader settles subscribes to the same outcome. The in-flight
//! registration is cleared before the result fans out, so a caller arriving
//! after settlement starts fresh work (and may hit the cache instead).
//!
//! Failures are delivered to all attached callers and never cached; the
//! next call for the same key retries from scratch.

use std::future::Future;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tokio::sync::broadcast;
use tracing::debug;

use skilldock_core::{DockError, DockResult};

type ResultSender<V> = broadcast::Sender<DockResult<V>>;

enum Flight<V: Clone> {
    Leader(ResultSender<V>),
    Follower(broadcast::Receiver<DockResult<V>>),
}

/// Guarantees at most one concurrent producer per cache key
#[derive(Debug)]
pub struct RequestDeduplicator<V: Clone> {
    in_flight: DashMap<String, ResultSender<V>>,
}

impl<V: Clone> RequestDeduplicator<V> {
    /// Create a deduplicator with an empty in-flight map
    pub fn new() -> Self {
        Self {
            in_flight: DashMap::new(),
        }
    }

    /// Number of operations currently in flight
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    /// Run `factory` for this key, or attach to the in-flight run
    ///
    /// Exactly one factory invocation happens per key while any number of
    /// callers are waiting; all of them observe the same resolved value or
    /// the same failure.
    pub async fn dedupe<F, Fut>(&self, key: &str, factory: F) -> DockResult<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = DockResult<V>>,
    {
        let flight = match self.in_flight.entry(key.to_string()) {
            Entry::Occupied(entry) => {
                debug!(key, "attaching to in-flight request");
                Flight::Follower(entry.get().subscribe())
            }
            Entry::Vacant(entry) => {
                // Capacity 1 is enough: exactly one result is ever sent
                let (tx, _rx) = broadcast::channel(1);
                entry.insert(tx.clone());
                Flight::Leader(tx)
            }
        };

        match flight {
            Flight::Follower(mut rx) => match rx.recv().await {
                Ok(result) => result,
                // The leader was dropped before settling
                Err(_) => Err(DockError::Network {
                    message: "deduplicated request was abandoned before completing".to_string(),
                }),
            },
            Flight::Leader(tx) => {
                let result = factory().await;

                // Clear the registration before fanning out so a caller
                // arriving after settlement starts fresh work.
                self.in_flight.remove(key);
                let _ = tx.send(result.clone());
                result
            }
        }
    }
}

impl<V: Clone> Default for RequestDeduplicator<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
