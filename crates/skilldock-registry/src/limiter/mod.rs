//! Admission control for simultaneous outbound requests.
//!
//! Bounds how many network operations run at once. Waiters are admitted in
//! strict arrival order; tokio's semaphore is FIFO-fair, so the longest
//! blocked caller gets the next released permit.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

#[derive(Debug)]
struct LimiterGauges {
    active: AtomicUsize,
    queued: AtomicUsize,
}

/// Permit-counting gate bounding concurrent operations
#[derive(Debug, Clone)]
pub struct ConcurrencyLimiter {
    semaphore: Arc<Semaphore>,
    gauges: Arc<LimiterGauges>,
    max_concurrent: usize,
}

/// RAII permit; the slot is released when this is dropped
#[derive(Debug)]
pub struct LimiterPermit {
    _permit: OwnedSemaphorePermit,
    gauges: Arc<LimiterGauges>,
}

/// Snapshot of limiter occupancy for diagnostics
#[derive(Debug, Clone, Serialize)]
pub struct LimiterStats {
    pub active: usize,
    pub queued: usize,
    pub max_concurrent: usize,
}

impl ConcurrencyLimiter {
    /// Create a limiter admitting at most `max_concurrent` operations
    pub fn new(max_concurrent: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(max_concurrent)),
            gauges: Arc::new(LimiterGauges {
                active: AtomicUsize::new(0),
                queued: AtomicUsize::new(0),
            }),
            max_concurrent,
        }
    }

    /// Reserve a slot, waiting FIFO if the limiter is at capacity
    pub async fn acquire(&self) -> LimiterPermit {
        let permit = match self.semaphore.clone().try_acquire_owned() {
            Ok(permit) => permit,
            Err(_) => {
                self.gauges.queued.fetch_add(1, Ordering::SeqCst);
                // The semaphore is never closed, so acquisition only
                // completes with a permit.
                let permit = self
                    .semaphore
                    .clone()
                    .acquire_owned()
                    .await
                    .expect("limiter semaphore closed");
                self.gauges.queued.fetch_sub(1, Ordering::SeqCst);
                permit
            }
        };

        self.gauges.active.fetch_add(1, Ordering::SeqCst);
        LimiterPermit {
            _permit: permit,
            gauges: Arc::clone(&self.gauges),
        }
    }

    /// Snapshot of current occupancy
    pub fn stats(&self) -> LimiterStats {
        LimiterStats {
            active: self.gauges.active.load(Ordering::SeqCst),
            queued: self.gauges.queued.load(Ordering::SeqCst),
            max_concurrent: self.max_concurrent,
        }
    }
}

impl Drop for LimiterPermit {
    fn drop(&mut self) {
        self.gauges.active.fetch_sub(1, Ordering::SeqCst);
    }
}
