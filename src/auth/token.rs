//! Issued bearer token records.
//!
//! This module provides the [`TokenRecord`] type representing one token
//! issued by the identity endpoint, together with its expiry metadata.

use crate::config::{ClientId, ClientSecret, TenantId};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The API scope granted to supply-domain tokens.
pub const SUPPLY_SCOPE: &str = "supply.domain";

/// One bearer token issued by the identity endpoint.
///
/// Records are immutable: a refresh creates a new record rather than mutating
/// an existing one. Expiry decisions always use the absolute [`expires_at`]
/// timestamp; [`expires_in`] is retained for audit and debugging only.
///
/// # Security
///
/// The `Debug` implementation masks the bearer token; the client secret is
/// masked by [`ClientSecret`]'s own `Debug` implementation.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use nexar_api::{ClientId, ClientSecret, TenantId, TokenRecord};
///
/// let record = TokenRecord::issue(
///     TenantId::default(),
///     ClientId::new("client-id").unwrap(),
///     ClientSecret::new("secret").unwrap(),
///     "abc123".to_string(),
///     3600,
///     Utc::now(),
/// );
///
/// assert!(!record.expired());
/// assert_eq!(record.expires_at, record.issued_at + chrono::Duration::seconds(3600));
/// ```
///
/// [`expires_at`]: TokenRecord::expires_at
/// [`expires_in`]: TokenRecord::expires_in
#[derive(Clone, Serialize, Deserialize)]
pub struct TokenRecord {
    /// The tenant (organization) this token is scoped to.
    pub tenant: TenantId,

    /// The client id used to obtain the token (kept for audit).
    pub client_id: ClientId,

    /// The client secret used to obtain the token (kept for audit).
    pub client_secret: ClientSecret,

    /// The opaque bearer string.
    pub access_token: String,

    /// The granted API scope.
    pub scope: String,

    /// When the token was issued.
    pub issued_at: DateTime<Utc>,

    /// When the token stops being valid.
    pub expires_at: DateTime<Utc>,

    /// The lifetime in seconds reported at issuance (audit only; expiry
    /// decisions use `expires_at`).
    pub expires_in: i64,
}

impl TokenRecord {
    /// Creates a record for a token issued at `issued_at` with the given
    /// reported lifetime, computing the absolute expiry.
    #[must_use]
    pub fn issue(
        tenant: TenantId,
        client_id: ClientId,
        client_secret: ClientSecret,
        access_token: String,
        expires_in: i64,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            tenant,
            client_id,
            client_secret,
            access_token,
            scope: SUPPLY_SCOPE.to_string(),
            issued_at,
            expires_at: issued_at + Duration::seconds(expires_in),
            expires_in,
        }
    }

    /// Returns `true` if the token's absolute expiry has passed.
    #[must_use]
    pub fn expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Returns the time remaining until expiry, clamped to zero for records
    /// that have already expired.
    #[must_use]
    pub fn remaining_lifetime(&self) -> std::time::Duration {
        (self.expires_at - Utc::now())
            .to_std()
            .unwrap_or(std::time::Duration::ZERO)
    }
}

impl fmt::Debug for TokenRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRecord")
            .field("tenant", &self.tenant)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret)
            .field("access_token", &"*****")
            .field("scope", &self.scope)
            .field("issued_at", &self.issued_at)
            .field("expires_at", &self.expires_at)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

// Verify TokenRecord is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TokenRecord>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_lifetime(expires_in: i64) -> TokenRecord {
        TokenRecord::issue(
            TenantId::default(),
            ClientId::new("test-client-id").unwrap(),
            ClientSecret::new("test-secret").unwrap(),
            "test-access-token".to_string(),
            expires_in,
            Utc::now(),
        )
    }

    #[test]
    fn test_issue_computes_absolute_expiry_from_lifetime() {
        let issued_at = Utc::now();
        let record = TokenRecord::issue(
            TenantId::default(),
            ClientId::new("id").unwrap(),
            ClientSecret::new("secret").unwrap(),
            "abc123".to_string(),
            3600,
            issued_at,
        );

        assert_eq!(record.expires_at, issued_at + Duration::seconds(3600));
        assert_eq!(record.expires_in, 3600);
        assert_eq!(record.scope, SUPPLY_SCOPE);
    }

    #[test]
    fn test_expired_for_past_and_future_expiry() {
        assert!(record_with_lifetime(-60).expired());
        assert!(!record_with_lifetime(3600).expired());
    }

    #[test]
    fn test_remaining_lifetime_clamps_to_zero_when_expired() {
        assert_eq!(
            record_with_lifetime(-60).remaining_lifetime(),
            std::time::Duration::ZERO
        );

        let remaining = record_with_lifetime(3600).remaining_lifetime();
        assert!(remaining <= std::time::Duration::from_secs(3600));
        assert!(remaining > std::time::Duration::from_secs(3590));
    }

    #[test]
    fn test_debug_masks_bearer_token_and_secret() {
        let record = record_with_lifetime(3600);
        let debug = format!("{record:?}");

        assert!(debug.contains("*****"));
        assert!(!debug.contains("test-access-token"));
        assert!(!debug.contains("test-secret"));
        assert!(debug.contains("test-client-id"));
    }

    #[test]
    fn test_record_round_trips_through_serde() {
        let record = record_with_lifetime(3600);
        let json = serde_json::to_string(&record).unwrap();
        let parsed: TokenRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.access_token, record.access_token);
        assert_eq!(parsed.expires_at, record.expires_at);
        assert_eq!(parsed.tenant, record.tenant);
    }
}
