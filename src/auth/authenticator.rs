//! OAuth 2.0 Client Credentials Grant against the Nexar identity endpoint.
//!
//! This module implements the server-to-server credential exchange used to
//! obtain supply-domain bearer tokens. There is no user interaction: the SDK
//! authenticates with a tenant's client id/secret and a fixed scope.
//!
//! # Overview
//!
//! [`TokenAuthenticator`] guarantees that, after [`authenticate`] returns, the
//! caller holds a usable bearer token for the requested tenant:
//!
//! 1. Query the [`TokenStore`] for a cached, non-expired token.
//! 2. On a hit, adopt the cached token and stop.
//! 3. On a miss, POST a form-encoded client-credentials request to the
//!    identity endpoint and decode `access_token` / `expires_in`.
//! 4. Compute the absolute expiry, append the record to the durable
//!    [`TokenRecordStore`], write it into the cache, and return it.
//!
//! # Concurrency
//!
//! Concurrent authentications for the same tenant collapse into a single
//! exchange: a per-tenant guard serializes the miss path, and waiters re-check
//! the cache once the first exchange lands. Cancelling a caller mid-exchange
//! leaves no partial state, since both writes happen only after a fully
//! decoded response.
//!
//! # No retries
//!
//! Any transport or decode failure surfaces immediately as an [`AuthError`].
//! Callers may retry by authenticating again; the SDK itself never does.
//!
//! [`authenticate`]: TokenAuthenticator::authenticate

use crate::auth::record_store::{RecordStoreError, TokenRecordStore};
use crate::auth::store::TokenStore;
use crate::auth::token::{TokenRecord, SUPPLY_SCOPE};
use crate::config::{ApiEndpoint, TenantCredentials, TenantId};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

/// Grant type for client credentials.
const CLIENT_CREDENTIALS_GRANT_TYPE: &str = "client_credentials";

/// Form body for the client credentials exchange.
#[derive(Debug, Serialize)]
struct ClientCredentialsForm<'a> {
    grant_type: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
    scope: &'a str,
}

/// Successful identity endpoint response.
///
/// Both fields are optional at the serde level so their absence maps to
/// [`AuthError::MissingField`] rather than a generic decode failure.
#[derive(Debug, Deserialize)]
struct AccessTokenResponse {
    access_token: Option<String>,
    expires_in: Option<i64>,
}

/// Errors from the credential exchange.
///
/// All variants are fatal to the authentication attempt; no retry is
/// performed.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The identity endpoint could not be reached.
    #[error("identity endpoint unreachable: {0}")]
    Network(#[from] reqwest::Error),

    /// The identity endpoint answered with a non-2xx status.
    #[error("identity endpoint returned HTTP {status}: {message}")]
    TokenRequestFailed {
        /// The HTTP status code.
        status: u16,
        /// The response body, verbatim.
        message: String,
    },

    /// The identity endpoint response body was not valid JSON.
    #[error("identity endpoint response is not valid JSON: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// A required field was absent from the identity endpoint response.
    #[error("identity endpoint response is missing the '{field}' field")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The durable token record store rejected the audit write.
    #[error(transparent)]
    Record(#[from] RecordStoreError),
}

/// Performs the client-credentials exchange and manages the token cache.
///
/// Construct one per process and share it (behind an `Arc` if needed) across
/// all clients; the per-tenant single-flight guards live here.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use nexar_api::{InMemoryTokenRecordStore, TokenAuthenticator, TokenStore};
///
/// let authenticator = TokenAuthenticator::new(
///     TokenStore::new(),
///     Arc::new(InMemoryTokenRecordStore::new()),
/// );
/// let record = authenticator
///     .authenticate(config.identity_endpoint(), config.active_tenant(), credentials)
///     .await?;
/// println!("token expires at {}", record.expires_at);
/// ```
pub struct TokenAuthenticator {
    /// The internal reqwest HTTP client.
    http: reqwest::Client,
    /// Per-tenant cache of current tokens.
    store: TokenStore,
    /// Durable audit store, appended once per successful exchange.
    records: Arc<dyn TokenRecordStore>,
    /// Per-tenant single-flight guards for the miss path.
    flights: Mutex<HashMap<TenantId, Arc<Mutex<()>>>>,
}

impl TokenAuthenticator {
    /// Creates a new authenticator over the given cache and record store.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(store: TokenStore, records: Arc<dyn TokenRecordStore>) -> Self {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            store,
            records,
            flights: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the token cache this authenticator writes to.
    #[must_use]
    pub const fn token_store(&self) -> &TokenStore {
        &self.store
    }

    /// Resolves a usable bearer token for the tenant.
    ///
    /// Returns the cached record when a valid one exists; otherwise performs
    /// exactly one credential exchange, persists the new record, caches it,
    /// and returns it. Concurrent calls for the same tenant share one
    /// exchange.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Network`] if the identity endpoint is unreachable
    /// - [`AuthError::TokenRequestFailed`] on a non-2xx response
    /// - [`AuthError::InvalidResponse`] / [`AuthError::MissingField`] if the
    ///   response cannot be decoded
    /// - [`AuthError::Record`] if the audit write fails
    pub async fn authenticate(
        &self,
        identity_endpoint: &ApiEndpoint,
        tenant: &TenantId,
        credentials: &TenantCredentials,
    ) -> Result<TokenRecord, AuthError> {
        if let Some(record) = self.store.lookup(tenant) {
            return Ok(record);
        }

        let flight = self.flight_guard(tenant).await;
        let _flight = flight.lock().await;

        // A concurrent exchange may have landed while we waited on the guard.
        if let Some(record) = self.store.lookup(tenant) {
            tracing::debug!(tenant = %tenant, "adopting token from concurrent exchange");
            return Ok(record);
        }

        let record = self.exchange(identity_endpoint, tenant, credentials).await?;
        self.records.append(&record).await?;
        self.store.store(record.clone());
        tracing::info!(
            tenant = %tenant,
            expires_in = record.expires_in,
            "acquired supply token"
        );
        Ok(record)
    }

    /// Returns the single-flight guard for a tenant, creating it on first use.
    async fn flight_guard(&self, tenant: &TenantId) -> Arc<Mutex<()>> {
        let mut flights = self.flights.lock().await;
        flights
            .entry(tenant.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Performs one client-credentials exchange.
    async fn exchange(
        &self,
        identity_endpoint: &ApiEndpoint,
        tenant: &TenantId,
        credentials: &TenantCredentials,
    ) -> Result<TokenRecord, AuthError> {
        let form = ClientCredentialsForm {
            grant_type: CLIENT_CREDENTIALS_GRANT_TYPE,
            client_id: credentials.client_id.as_ref(),
            client_secret: credentials.client_secret.as_ref(),
            scope: SUPPLY_SCOPE,
        };

        tracing::debug!(
            tenant = %tenant,
            endpoint = %identity_endpoint,
            "requesting client credentials token"
        );

        let response = self
            .http
            .post(identity_endpoint.as_str())
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AuthError::TokenRequestFailed {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let payload: AccessTokenResponse = serde_json::from_str(&body)?;
        let access_token = payload
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingField {
                field: "access_token",
            })?;
        let expires_in = payload.expires_in.ok_or(AuthError::MissingField {
            field: "expires_in",
        })?;

        Ok(TokenRecord::issue(
            tenant.clone(),
            credentials.client_id.clone(),
            credentials.client_secret.clone(),
            access_token,
            expires_in,
            Utc::now(),
        ))
    }
}

impl fmt::Debug for TokenAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenAuthenticator")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TokenAuthenticator>();
    assert_send_sync::<ClientCredentialsForm<'_>>();
};
