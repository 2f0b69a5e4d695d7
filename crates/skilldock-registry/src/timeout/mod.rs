//! Deadline racing for asynchronous operations.
//!
//! Bounds the caller-visible latency of a request without cancelling the
//! work itself: the operation is detached onto the runtime and keeps running
//! after the deadline fires, its eventual outcome discarded. This preserves
//! the legacy behavior where a slow response may still land in the cache
//! after the caller has already received a timeout.

use std::future::Future;
use std::time::Duration;

use tokio::time;
use tracing::warn;

use skilldock_core::{DockError, DockResult};

/// Race `operation` against a deadline
///
/// Returns the operation's outcome if it settles within `deadline`,
/// otherwise a `DockError::Timeout` carrying `message`.
pub async fn with_timeout<T, F>(operation: F, deadline: Duration, message: &str) -> DockResult<T>
where
    F: Future<Output = DockResult<T>> + Send + 'static,
    T: Send + 'static,
{
    let mut handle = tokio::spawn(operation);

    tokio::select! {
        joined = &mut handle => match joined {
            Ok(outcome) => outcome,
            Err(join_error) => Err(DockError::network("Request task failed", join_error)),
        },
        _ = time::sleep(deadline) => {
            warn!("{}", message);
            Err(DockError::Timeout {
                message: message.to_string(),
            })
        }
    }
}
