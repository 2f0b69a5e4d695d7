//! Unit tests for the TTL cache

use super::*;
use proptest::prelude::*;

fn test_cache() -> TtlCache<String> {
    TtlCache::new(Duration::from_secs(60))
}

#[test]
fn test_cache_entry_freshness() {
    let entry = CacheEntry::new("value".to_string(), Duration::from_secs(60));
    assert!(entry.is_fresh());

    let age = entry.age();
    assert!(age.is_some());
    assert!(age.unwrap() < Duration::from_millis(100));
}

#[test]
fn test_set_and_get() {
    let cache = test_cache();
    let key = cache.generate_key("plugins", &[("offset", "0".into()), ("limit", "20".into())]);

    cache.set(&key, "page-1".to_string());
    assert_eq!(cache.get(&key), Some("page-1".to_string()));
}

#[test]
fn test_get_nonexistent() {
    let cache = test_cache();
    assert_eq!(cache.get("plugins?offset=0"), None);
}

#[test]
fn test_set_overwrites() {
    let cache = test_cache();
    cache.set("key", "old".to_string());
    cache.set("key", "new".to_string());
    assert_eq!(cache.get("key"), Some("new".to_string()));
}

#[test]
fn test_has() {
    let cache = test_cache();
    assert!(!cache.has("key"));

    cache.set("key", "value".to_string());
    assert!(cache.has("key"));
}

#[test]
fn test_ttl_expiry_behaves_as_miss() {
    let cache = TtlCache::new(Duration::from_nanos(1));
    cache.set("key", "value".to_string());

    // Wait a bit to ensure the entry is stale
    std::thread::sleep(Duration::from_millis(1));

    assert_eq!(cache.get("key"), None);
    // Stale entry was evicted by the failed lookup
    assert_eq!(cache.stats().total_entries, 0);
}

#[test]
fn test_stale_has_is_false() {
    let cache = TtlCache::new(Duration::from_nanos(1));
    cache.set("key", "value".to_string());
    std::thread::sleep(Duration::from_millis(1));
    assert!(!cache.has("key"));
}

#[test]
fn test_generate_key_is_order_independent() {
    let cache = test_cache();
    let a = cache.generate_key(
        "plugins",
        &[("offset", "0".into()), ("limit", "20".into()), ("q", "rust".into())],
    );
    let b = cache.generate_key(
        "plugins",
        &[("q", "rust".into()), ("offset", "0".into()), ("limit", "20".into())],
    );
    assert_eq!(a, b);
}

#[test]
fn test_generate_key_namespaces_do_not_collide() {
    let cache = test_cache();
    let plugins = cache.generate_key("plugins", &[("offset", "0".into())]);
    let skills = cache.generate_key("skills", &[("offset", "0".into())]);
    assert_ne!(plugins, skills);
}

#[test]
fn test_invalidate_pattern() {
    let cache = test_cache();
    cache.set("plugins?limit=20&offset=0&q=", "p0".to_string());
    cache.set("plugins?limit=20&offset=20&q=", "p1".to_string());
    cache.set("skills?limit=20&offset=0&q=", "s0".to_string());

    cache.invalidate_pattern("plugins");

    assert!(!cache.has("plugins?limit=20&offset=0&q="));
    assert!(!cache.has("plugins?limit=20&offset=20&q="));
    assert!(cache.has("skills?limit=20&offset=0&q="));
}

#[test]
fn test_stats_and_clear() {
    let cache = test_cache();
    let stats = cache.stats();
    assert_eq!(stats.total_entries, 0);

    cache.set("a", "1".to_string());
    cache.set("b", "2".to_string());

    let stats = cache.stats();
    assert_eq!(stats.total_entries, 2);
    assert_eq!(stats.fresh_entries, 2);
    assert_eq!(stats.stale_entries, 0);

    cache.clear();
    assert_eq!(cache.stats().total_entries, 0);
}

proptest! {
    /// Any permutation of the same parameter set yields the same key
    #[test]
    fn prop_key_stability(params in proptest::collection::hash_map("[a-z]{1,8}", "[a-z0-9]{0,8}", 1..6)) {
        let cache = TtlCache::<String>::new(Duration::from_secs(1));

        let mut pairs: Vec<(&str, String)> = params
            .iter()
            .map(|(name, value)| (name.as_str(), value.clone()))
            .collect();
        let key_forward = cache.generate_key("ns", &pairs);

        pairs.reverse();
        let key_reversed = cache.generate_key("ns", &pairs);

        prop_assert_eq!(key_forward, key_reversed);
    }
}
