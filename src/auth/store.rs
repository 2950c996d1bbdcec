//! Per-tenant token caching with moka.
//!
//! Provides the in-memory [`TokenStore`] that answers "is there a currently
//! valid token for tenant T?". Entries are stored with a time-to-live equal to
//! the token's remaining lifetime at write time, so the cache entry and the
//! token's real expiry stay in lockstep.
//!
//! # Architecture
//!
//! - **Keying**: entries are keyed by [`TenantId`], preventing cross-tenant
//!   token leakage within one process.
//! - **Expiry**: the backing cache purges entries past their per-entry TTL;
//!   [`TokenStore::lookup`] additionally treats a record whose `expires_at`
//!   is already in the past as a miss, guarding against clock skew between
//!   the component and the cache.
//! - **Lifecycle**: constructed once per process and shared by reference
//!   (cheap `Clone`) with every client; no other component writes this
//!   keyspace.

use crate::auth::token::TokenRecord;
use crate::config::TenantId;
use moka::sync::Cache;
use moka::Expiry;
use std::fmt;
use std::time::{Duration, Instant};

/// Default max number of tenants tracked by the cache.
pub const DEFAULT_MAX_TENANTS: u64 = 1024;

/// Expiry policy: each entry lives exactly as long as its token.
struct RemainingLifetime;

impl Expiry<TenantId, TokenRecord> for RemainingLifetime {
    fn expire_after_create(
        &self,
        _key: &TenantId,
        record: &TokenRecord,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(record.remaining_lifetime())
    }

    fn expire_after_update(
        &self,
        _key: &TenantId,
        record: &TokenRecord,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(record.remaining_lifetime())
    }
}

/// Cache of the current bearer token per tenant.
///
/// `TokenStore` is an injected capability: construct one per process and hand
/// clones to every client that needs it. Clones share the same underlying
/// cache.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use nexar_api::{ClientId, ClientSecret, TenantId, TokenRecord, TokenStore};
///
/// let store = TokenStore::new();
/// let record = TokenRecord::issue(
///     TenantId::default(),
///     ClientId::new("id").unwrap(),
///     ClientSecret::new("secret").unwrap(),
///     "abc123".to_string(),
///     3600,
///     Utc::now(),
/// );
///
/// store.store(record);
/// assert!(store.lookup(&TenantId::default()).is_some());
/// ```
#[derive(Clone)]
pub struct TokenStore {
    cache: Cache<TenantId, TokenRecord>,
}

impl TokenStore {
    /// Creates a store with the default tenant capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_TENANTS)
    }

    /// Creates a store tracking at most `max_tenants` tenants.
    #[must_use]
    pub fn with_capacity(max_tenants: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_tenants)
            .expire_after(RemainingLifetime)
            .build();
        Self { cache }
    }

    /// Returns the cached record for the tenant, or `None` on a miss.
    ///
    /// Entries past their TTL are purged by the backing cache; a record whose
    /// `expires_at` has nevertheless already passed is evicted and treated as
    /// a miss.
    #[must_use]
    pub fn lookup(&self, tenant: &TenantId) -> Option<TokenRecord> {
        let record = self.cache.get(tenant)?;
        if record.expired() {
            tracing::debug!(tenant = %tenant, "cached token past expiry, treating as miss");
            self.cache.invalidate(tenant);
            return None;
        }
        tracing::debug!(tenant = %tenant, "token cache hit");
        Some(record)
    }

    /// Stores a record keyed by its tenant, with TTL equal to the token's
    /// remaining lifetime.
    pub fn store(&self, record: TokenRecord) {
        let ttl = record.remaining_lifetime();
        tracing::debug!(
            tenant = %record.tenant,
            ttl_seconds = ttl.as_secs(),
            "caching token for remaining lifetime"
        );
        self.cache.insert(record.tenant.clone(), record);
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenStore")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

// Verify TokenStore is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TokenStore>();
};
