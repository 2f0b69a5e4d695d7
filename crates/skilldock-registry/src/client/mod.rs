//! Registry client orchestration.
//!
//! Every UI-driven fetch runs the same state machine: cache check, scroll
//! rate check, then a deduplicated network call behind the concurrency
//! limiter and deadline race. Paginated fetches never surface raw errors;
//! they degrade to the bundled fallback dataset (first unfiltered page) or
//! an empty page. Only single-resource content fetches propagate failures,
//! since no meaningful default content exists.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use skilldock_core::types::{PaginatedResponse, Plugin, Skill};
use skilldock_core::DockError;

use crate::api;
use crate::cache::{CacheStats, TtlCache};
use crate::counter::{EndpointCounts, RequestCounter};
use crate::dedupe::RequestDeduplicator;
use crate::fallback;
use crate::limiter::{ConcurrencyLimiter, LimiterStats};
use crate::rate::RateLimiter;
use crate::timeout::with_timeout;
use crate::RegistryResult;

/// Page size for plugin listings
pub const PLUGIN_PAGE_SIZE: u64 = 20;
/// Page size for skill listings
pub const SKILL_PAGE_SIZE: u64 = 20;

/// Tuning knobs for the registry client
///
/// Every limit the resilience core enforces is set here, so tests can
/// construct a client with tight windows and a mock server URL.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Registry base URL
    pub base_url: String,
    /// Deadline for any single request
    pub request_timeout: Duration,
    /// TTL for unfiltered listing pages and skill content
    pub listing_ttl: Duration,
    /// TTL for search-query results
    pub search_ttl: Duration,
    /// Cap on simultaneous outbound requests
    pub max_concurrent_requests: usize,
    /// Sliding window for scroll-triggered pagination
    pub scroll_window: Duration,
    /// Admitted scroll requests per window, per resource kind
    pub scroll_max_requests: usize,
    /// Delay before a speculative next-page fetch starts
    pub prefetch_delay: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://claude-plugins.dev".to_string(),
            request_timeout: Duration::from_millis(15_000),
            listing_ttl: Duration::from_secs(300),
            search_ttl: Duration::from_secs(120),
            max_concurrent_requests: 6,
            scroll_window: Duration::from_secs(10),
            scroll_max_requests: 8,
            prefetch_delay: Duration::from_millis(100),
        }
    }
}

/// Value stored in the result caches and shared through the deduplicator
///
/// Keys are namespaced per resource kind, so a key only ever maps to one
/// variant; the accessors exist to unpack that invariant without panicking.
#[derive(Debug, Clone)]
enum CachedValue {
    PluginPage(PaginatedResponse<Plugin>),
    SkillPage(PaginatedResponse<Skill>),
    SkillContent(String),
}

impl CachedValue {
    fn into_plugin_page(self) -> Option<PaginatedResponse<Plugin>> {
        match self {
            CachedValue::PluginPage(page) => Some(page),
            _ => None,
        }
    }

    fn into_skill_page(self) -> Option<PaginatedResponse<Skill>> {
        match self {
            CachedValue::SkillPage(page) => Some(page),
            _ => None,
        }
    }

    fn into_skill_content(self) -> Option<String> {
        match self {
            CachedValue::SkillContent(content) => Some(content),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct ClientInner {
    http: Client,
    config: RegistryConfig,
    /// Unfiltered listing pages and skill content
    listing_cache: TtlCache<CachedValue>,
    /// Search-query results; separate key domain from the listing cache
    search_cache: TtlCache<CachedValue>,
    dedup: RequestDeduplicator<CachedValue>,
    limiter: ConcurrencyLimiter,
    scroll_gate: RateLimiter,
    counter: RequestCounter,
}

impl ClientInner {
    /// A page with a query lives in the search cache, everything else in
    /// the listing cache; the two never share keys.
    fn select_cache(&self, query: Option<&str>) -> &TtlCache<CachedValue> {
        if query.is_some() {
            &self.search_cache
        } else {
            &self.listing_cache
        }
    }

    /// Consult and update the scroll gate for one stream
    fn admit_scroll(&self, stream: &str) -> bool {
        if self.scroll_gate.can_request(stream) {
            self.scroll_gate.record_request(stream);
            true
        } else {
            debug!(stream, "scroll rate limited, returning soft empty page");
            false
        }
    }
}

/// Read-only diagnostics snapshot
#[derive(Debug, Clone, Serialize)]
pub struct ApiStats {
    pub cache: CacheSectionStats,
    pub requests: HashMap<String, EndpointCounts>,
    pub concurrency: LimiterStats,
}

/// Per-instance cache statistics
#[derive(Debug, Clone, Serialize)]
pub struct CacheSectionStats {
    pub api: CacheStats,
    pub search: CacheStats,
}

/// Client for the plugin/skill registry
///
/// Cheap to clone; all state is shared, so prefetch tasks and UI callers
/// observe the same caches and limits.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    inner: Arc<ClientInner>,
}

impl RegistryClient {
    /// Create a client with default configuration
    pub fn new() -> RegistryResult<Self> {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: RegistryConfig) -> RegistryResult<Self> {
        let http = Client::builder()
            // Connection pooling configuration
            .pool_max_idle_per_host(50)
            .pool_idle_timeout(Duration::from_secs(90))
            // Enable gzip compression
            .gzip(true)
            // User agent
            .user_agent(concat!("skilldock/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DockError::network("Failed to create HTTP client", e))?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                listing_cache: TtlCache::new(config.listing_ttl),
                search_cache: TtlCache::new(config.search_ttl),
                dedup: RequestDeduplicator::new(),
                limiter: ConcurrencyLimiter::new(config.max_concurrent_requests),
                scroll_gate: RateLimiter::new(config.scroll_max_requests, config.scroll_window),
                counter: RequestCounter::new(),
                config,
            }),
        })
    }

    /// Fetch one page of plugins, optionally filtered by a search query
    ///
    /// Never fails: network errors degrade to the fallback dataset on the
    /// first unfiltered page and to an empty page everywhere else.
    pub async fn fetch_plugins_paginated(
        &self,
        offset: u64,
        limit: u64,
        query: Option<&str>,
    ) -> PaginatedResponse<Plugin> {
        let query = normalize_query(query);
        let inner = &self.inner;
        let cache = inner.select_cache(query);
        let key = cache.generate_key("plugins", &page_params(offset, limit, query));

        if let Some(page) = cache.get(&key).and_then(CachedValue::into_plugin_page) {
            debug!(key = %key, "cache hit for plugins");
            return page;
        }

        // Infinite-scroll continuations go through the scroll gate
        if offset > 0 && query.is_none() && !inner.admit_scroll("plugins-scroll") {
            return PaginatedResponse::empty(true);
        }

        let fetched = inner
            .dedup
            .dedupe(&key, || async {
                let _permit = inner.limiter.acquire().await;
                let url = self.page_url("plugins", offset, limit, query);
                let body = self.get_json(&url).await;
                inner.counter.record("plugins", body.is_ok());

                let page = api::parse_plugin_page(&body?, offset);
                let value = CachedValue::PluginPage(page);
                cache.set(&key, value.clone());
                Ok(value)
            })
            .await;

        match fetched.map(CachedValue::into_plugin_page) {
            Ok(Some(page)) => page,
            Ok(None) => {
                warn!(key = %key, "mismatched cached value kind for plugins");
                PaginatedResponse::empty(false)
            }
            Err(error) => {
                warn!(error = %error, "failed to fetch plugins from registry");
                if offset == 0 && query.is_none() {
                    fallback::plugin_page()
                } else {
                    PaginatedResponse::empty(false)
                }
            }
        }
    }

    /// Fetch one page of skills, optionally filtered by a search query
    ///
    /// Same degradation contract as [`fetch_plugins_paginated`].
    ///
    /// [`fetch_plugins_paginated`]: RegistryClient::fetch_plugins_paginated
    pub async fn fetch_skills_paginated(
        &self,
        offset: u64,
        limit: u64,
        query: Option<&str>,
    ) -> PaginatedResponse<Skill> {
        let query = normalize_query(query);
        let inner = &self.inner;
        let cache = inner.select_cache(query);
        let key = cache.generate_key("skills", &page_params(offset, limit, query));

        if let Some(page) = cache.get(&key).and_then(CachedValue::into_skill_page) {
            debug!(key = %key, "cache hit for skills");
            return page;
        }

        if offset > 0 && query.is_none() && !inner.admit_scroll("skills-scroll") {
            return PaginatedResponse::empty(true);
        }

        let fetched = inner
            .dedup
            .dedupe(&key, || async {
                let _permit = inner.limiter.acquire().await;
                let url = self.page_url("skills", offset, limit, query);
                let body = self.get_json(&url).await;
                inner.counter.record("skills", body.is_ok());

                let page = api::parse_skill_page(&body?, offset);
                let value = CachedValue::SkillPage(page);
                cache.set(&key, value.clone());
                Ok(value)
            })
            .await;

        match fetched.map(CachedValue::into_skill_page) {
            Ok(Some(page)) => page,
            Ok(None) => {
                warn!(key = %key, "mismatched cached value kind for skills");
                PaginatedResponse::empty(false)
            }
            Err(error) => {
                warn!(error = %error, "failed to fetch skills from registry");
                if offset == 0 && query.is_none() {
                    fallback::skill_page()
                } else {
                    PaginatedResponse::empty(false)
                }
            }
        }
    }

    /// Fetch the raw content of a skill definition file
    ///
    /// No fallback exists for content, so failures propagate to the caller.
    pub async fn fetch_skill_content(&self, url: &str) -> RegistryResult<String> {
        let inner = &self.inner;
        let cache = &inner.listing_cache;
        let key = cache.generate_key("skill-content", &[("url", url.to_string())]);

        if let Some(content) = cache.get(&key).and_then(CachedValue::into_skill_content) {
            debug!(key = %key, "cache hit for skill content");
            return Ok(content);
        }

        let value = inner
            .dedup
            .dedupe(&key, || async {
                let _permit = inner.limiter.acquire().await;
                let content = self.get_text(url).await;
                inner.counter.record("skill-content", content.is_ok());

                let value = CachedValue::SkillContent(content?);
                cache.set(&key, value.clone());
                Ok(value)
            })
            .await?;

        value.into_skill_content().ok_or_else(|| DockError::Decode {
            message: "mismatched cached value kind for skill content".to_string(),
        })
    }

    /// Speculatively warm the cache for the next plugin page
    ///
    /// Fire-and-forget: never blocks the caller, and a failed prefetch
    /// degrades internally without surfacing anywhere.
    pub fn prefetch_plugins_next_page(&self, current_offset: u64, limit: u64, query: Option<&str>) {
        let query = normalize_query(query);
        let next_offset = current_offset + limit;
        let cache = self.inner.select_cache(query);
        let key = cache.generate_key("plugins", &page_params(next_offset, limit, query));

        if cache.has(&key) {
            return;
        }

        let client = self.clone();
        let query = query.map(str::to_string);
        tokio::spawn(async move {
            tokio::time::sleep(client.inner.config.prefetch_delay).await;
            let _ = client
                .fetch_plugins_paginated(next_offset, limit, query.as_deref())
                .await;
        });
    }

    /// Speculatively warm the cache for the next skill page
    pub fn prefetch_skills_next_page(&self, current_offset: u64, limit: u64, query: Option<&str>) {
        let query = normalize_query(query);
        let next_offset = current_offset + limit;
        let cache = self.inner.select_cache(query);
        let key = cache.generate_key("skills", &page_params(next_offset, limit, query));

        if cache.has(&key) {
            return;
        }

        let client = self.clone();
        let query = query.map(str::to_string);
        tokio::spawn(async move {
            tokio::time::sleep(client.inner.config.prefetch_delay).await;
            let _ = client
                .fetch_skills_paginated(next_offset, limit, query.as_deref())
                .await;
        });
    }

    /// Drop every cached plugin page, listing and search alike
    pub fn clear_plugins_cache(&self) {
        self.inner.listing_cache.invalidate_pattern("plugins");
        self.inner.search_cache.invalidate_pattern("plugins");
    }

    /// Drop every cached skill page, listing and search alike
    pub fn clear_skills_cache(&self) {
        self.inner.listing_cache.invalidate_pattern("skills");
        self.inner.search_cache.invalidate_pattern("skills");
    }

    /// Diagnostics snapshot of caches, request counts, and concurrency
    pub fn api_stats(&self) -> ApiStats {
        ApiStats {
            cache: CacheSectionStats {
                api: self.inner.listing_cache.stats(),
                search: self.inner.search_cache.stats(),
            },
            requests: self.inner.counter.stats(),
            concurrency: self.inner.limiter.stats(),
        }
    }

    /// First hundred plugins, unfiltered
    pub async fn fetch_plugins(&self) -> Vec<Plugin> {
        self.fetch_plugins_paginated(0, 100, None).await.items
    }

    /// First hundred skills, unfiltered
    pub async fn fetch_skills(&self) -> Vec<Skill> {
        self.fetch_skills_paginated(0, 100, None).await.items
    }

    /// First hundred plugins matching a query
    pub async fn search_plugins(&self, query: &str) -> Vec<Plugin> {
        self.fetch_plugins_paginated(0, 100, Some(query)).await.items
    }

    /// First hundred skills matching a query
    pub async fn search_skills(&self, query: &str) -> Vec<Skill> {
        self.fetch_skills_paginated(0, 100, Some(query)).await.items
    }

    fn page_url(&self, kind: &str, offset: u64, limit: u64, query: Option<&str>) -> String {
        let mut request_url = format!(
            "{}/api/{}?limit={}&offset={}",
            self.inner.config.base_url, kind, limit, offset
        );
        if let Some(q) = query {
            let encoded: String = url::form_urlencoded::byte_serialize(q.as_bytes()).collect();
            request_url.push_str("&q=");
            request_url.push_str(&encoded);
        }
        request_url
    }

    /// GET a JSON body with the request deadline applied
    ///
    /// The wire work is detached so a deadline miss does not abort the
    /// request itself; see the `timeout` module.
    async fn get_json(&self, url: &str) -> RegistryResult<Value> {
        let http = self.inner.http.clone();
        let request_url = url.to_string();
        let operation = async move {
            let response = http
                .get(&request_url)
                .send()
                .await
                .map_err(|e| DockError::network("Request failed", e))?;

            let status = response.status();
            if !status.is_success() {
                return Err(DockError::HttpStatus {
                    status: status.as_u16(),
                });
            }

            response
                .json::<Value>()
                .await
                .map_err(|e| DockError::decode("Invalid JSON body", e))
        };

        with_timeout(
            operation,
            self.inner.config.request_timeout,
            &format!("Request to {} timed out", url),
        )
        .await
    }

    /// GET a text body with the request deadline applied
    async fn get_text(&self, url: &str) -> RegistryResult<String> {
        let http = self.inner.http.clone();
        let request_url = url.to_string();
        let operation = async move {
            let response = http
                .get(&request_url)
                .send()
                .await
                .map_err(|e| DockError::network("Request failed", e))?;

            let status = response.status();
            if !status.is_success() {
                return Err(DockError::HttpStatus {
                    status: status.as_u16(),
                });
            }

            response
                .text()
                .await
                .map_err(|e| DockError::decode("Unreadable response body", e))
        };

        with_timeout(
            operation,
            self.inner.config.request_timeout,
            &format!("Request to {} timed out", url),
        )
        .await
    }
}

/// An empty query string selects the listing cache, same as no query
fn normalize_query(query: Option<&str>) -> Option<&str> {
    query.filter(|q| !q.is_empty())
}

fn page_params(offset: u64, limit: u64, query: Option<&str>) -> [(&'static str, String); 3] {
    [
        ("offset", offset.to_string()),
        ("limit", limit.to_string()),
        ("q", query.unwrap_or_default().to_string()),
    ]
}
