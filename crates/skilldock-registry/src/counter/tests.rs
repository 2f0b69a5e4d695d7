//! Unit tests for the request counter

use super::*;

#[test]
fn test_record_success_and_failure() {
    let counter = RequestCounter::new();

    counter.record("plugins", true);
    counter.record("plugins", true);
    counter.record("plugins", false);
    counter.record("skills", true);

    let stats = counter.stats();
    assert_eq!(stats["plugins"].success, 2);
    assert_eq!(stats["plugins"].failure, 1);
    assert_eq!(stats["skills"].success, 1);
    assert_eq!(stats["skills"].failure, 0);
}

#[test]
fn test_unseen_endpoint_absent_from_snapshot() {
    let counter = RequestCounter::new();
    counter.record("plugins", true);

    let stats = counter.stats();
    assert!(!stats.contains_key("skills"));
}

#[test]
fn test_snapshot_is_detached() {
    let counter = RequestCounter::new();
    counter.record("plugins", true);

    let stats = counter.stats();
    counter.record("plugins", true);

    // Earlier snapshot is unaffected by later increments
    assert_eq!(stats["plugins"].success, 1);
    assert_eq!(counter.stats()["plugins"].success, 2);
}
