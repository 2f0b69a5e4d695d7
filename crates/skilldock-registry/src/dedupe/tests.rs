//! Unit tests for single-flight deduplication

use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::sleep;

#[tokio::test]
async fn test_concurrent_callers_share_one_factory_run() {
    let dedup = RequestDeduplicator::<u32>::new();
    let calls = AtomicUsize::new(0);

    let (a, b, c) = tokio::join!(
        dedup.dedupe("key", || async {
            calls.fetch_add(1, Ordering::SeqCst);
            sleep(Duration::from_millis(20)).await;
            Ok(1)
        }),
        dedup.dedupe("key", || async {
            calls.fetch_add(1, Ordering::SeqCst);
            sleep(Duration::from_millis(20)).await;
            Ok(2)
        }),
        dedup.dedupe("key", || async {
            calls.fetch_add(1, Ordering::SeqCst);
            sleep(Duration::from_millis(20)).await;
            Ok(3)
        }),
    );

    // The first caller's factory runs; everyone gets its value
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(a.unwrap(), 1);
    assert_eq!(b.unwrap(), 1);
    assert_eq!(c.unwrap(), 1);
}

#[tokio::test]
async fn test_failure_is_shared_and_not_cached() {
    let dedup = RequestDeduplicator::<u32>::new();
    let calls = AtomicUsize::new(0);

    let (a, b) = tokio::join!(
        dedup.dedupe("key", || async {
            calls.fetch_add(1, Ordering::SeqCst);
            sleep(Duration::from_millis(10)).await;
            Err(DockError::HttpStatus { status: 502 })
        }),
        dedup.dedupe("key", || async {
            calls.fetch_add(1, Ordering::SeqCst);
            sleep(Duration::from_millis(10)).await;
            Err(DockError::HttpStatus { status: 503 })
        }),
    );

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(a.unwrap_err(), DockError::HttpStatus { status: 502 });
    assert_eq!(b.unwrap_err(), DockError::HttpStatus { status: 502 });

    // A later call for the same key retries from scratch
    let retry = dedup.dedupe("key", || async { Ok(7) }).await;
    assert_eq!(retry.unwrap(), 7);
    assert_eq!(calls.load(Ordering::SeqCst), 1); // retry used its own factory
}

#[tokio::test]
async fn test_different_keys_run_independently() {
    let dedup = RequestDeduplicator::<u32>::new();
    let calls = AtomicUsize::new(0);

    let (a, b) = tokio::join!(
        dedup.dedupe("plugins?offset=0", || async {
            calls.fetch_add(1, Ordering::SeqCst);
            sleep(Duration::from_millis(10)).await;
            Ok(1)
        }),
        dedup.dedupe("skills?offset=0", || async {
            calls.fetch_add(1, Ordering::SeqCst);
            sleep(Duration::from_millis(10)).await;
            Ok(2)
        }),
    );

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(a.unwrap(), 1);
    assert_eq!(b.unwrap(), 2);
}

#[tokio::test]
async fn test_sequential_calls_each_invoke_factory() {
    let dedup = RequestDeduplicator::<u32>::new();
    let calls = AtomicUsize::new(0);

    for _ in 0..3 {
        let result = dedup
            .dedupe("key", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(0)
            })
            .await;
        assert!(result.is_ok());
    }

    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(dedup.in_flight_count(), 0);
}

#[tokio::test]
async fn test_in_flight_count_tracks_registration() {
    let dedup = std::sync::Arc::new(RequestDeduplicator::<u32>::new());

    let leader = {
        let dedup = std::sync::Arc::clone(&dedup);
        tokio::spawn(async move {
            dedup
                .dedupe("key", || async {
                    sleep(Duration::from_millis(50)).await;
                    Ok(1)
                })
                .await
        })
    };

    sleep(Duration::from_millis(10)).await;
    assert_eq!(dedup.in_flight_count(), 1);

    assert_eq!(leader.await.unwrap().unwrap(), 1);
    assert_eq!(dedup.in_flight_count(), 0);
}
