//! Configuration types for the Nexar API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for communication with the Nexar supply API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`NexarConfig`]: The main configuration struct holding all SDK settings
//! - [`NexarConfigBuilder`]: A builder for constructing [`NexarConfig`] instances
//! - [`TenantCredentials`]: A client id/secret pair for one tenant
//! - [`ClientId`] / [`ClientSecret`]: Validated credential newtypes
//! - [`TenantId`]: A validated tenant (organization) identifier
//! - [`ApiEndpoint`]: A validated endpoint URL
//!
//! # Multi-tenant credentials
//!
//! Credentials are an explicit mapping from tenant identifier to a validated
//! credential pair, registered with [`NexarConfigBuilder::tenant`]. The active
//! tenant selects which pair is used when a client authenticates.
//!
//! # Example
//!
//! ```rust
//! use nexar_api::{ClientId, ClientSecret, NexarConfig, TenantId};
//!
//! let config = NexarConfig::builder()
//!     .tenant(
//!         TenantId::default(),
//!         ClientId::new("my-client-id").unwrap(),
//!         ClientSecret::new("my-secret").unwrap(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint().as_str(), "https://api.nexar.com/graphql/");
//! ```

mod newtypes;

pub use newtypes::{ApiEndpoint, ClientId, ClientSecret, TenantId};

use crate::error::ConfigError;
use std::collections::HashMap;

/// Default Nexar GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.nexar.com/graphql/";

/// Default Nexar identity (token) endpoint.
pub const DEFAULT_IDENTITY_ENDPOINT: &str = "https://identity.nexar.com/connect/token";

/// A client id/secret pair for one tenant.
///
/// The `Debug` output masks the secret via [`ClientSecret`]'s masked
/// implementation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TenantCredentials {
    /// The OAuth2 client id.
    pub client_id: ClientId,
    /// The OAuth2 client secret.
    pub client_secret: ClientSecret,
}

impl TenantCredentials {
    /// Creates a new credential pair.
    #[must_use]
    pub const fn new(client_id: ClientId, client_secret: ClientSecret) -> Self {
        Self {
            client_id,
            client_secret,
        }
    }
}

/// Configuration for the Nexar API SDK.
///
/// This struct holds all configuration needed for SDK operations: endpoint
/// URLs, per-tenant credential pairs, the active tenant, and an optional
/// pre-provisioned static supply token.
///
/// # Thread Safety
///
/// `NexarConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use nexar_api::{ClientId, ClientSecret, NexarConfig, TenantId};
///
/// let config = NexarConfig::builder()
///     .tenant(
///         TenantId::new("acme").unwrap(),
///         ClientId::new("client-id").unwrap(),
///         ClientSecret::new("secret").unwrap(),
///     )
///     .active_tenant(TenantId::new("acme").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.active_tenant().as_ref(), "acme");
/// ```
#[derive(Clone, Debug)]
pub struct NexarConfig {
    endpoint: ApiEndpoint,
    identity_endpoint: ApiEndpoint,
    tenants: HashMap<TenantId, TenantCredentials>,
    active_tenant: TenantId,
    supply_token: Option<String>,
}

impl NexarConfig {
    /// Creates a new builder for constructing a `NexarConfig`.
    #[must_use]
    pub fn builder() -> NexarConfigBuilder {
        NexarConfigBuilder::new()
    }

    /// Loads configuration from environment variables.
    ///
    /// Reads `NEXAR_ENDPOINT` and `NEXAR_IDENTITY_ENDPOINT` (both optional,
    /// falling back to the public Nexar endpoints), plus `NEXAR_CLIENT_ID` /
    /// `NEXAR_CLIENT_SECRET` and/or `NEXAR_SUPPLY_TOKEN`. Credentials are
    /// registered under the default tenant.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an endpoint URL is invalid, if only one
    /// half of the credential pair is set, or if neither credentials nor a
    /// static token are present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Ok(endpoint) = std::env::var("NEXAR_ENDPOINT") {
            builder = builder.endpoint(ApiEndpoint::new(endpoint)?);
        }
        if let Ok(identity) = std::env::var("NEXAR_IDENTITY_ENDPOINT") {
            builder = builder.identity_endpoint(ApiEndpoint::new(identity)?);
        }

        let client_id = std::env::var("NEXAR_CLIENT_ID").ok();
        let client_secret = std::env::var("NEXAR_CLIENT_SECRET").ok();
        match (client_id, client_secret) {
            (Some(id), Some(secret)) => {
                builder = builder.tenant(
                    TenantId::default(),
                    ClientId::new(id)?,
                    ClientSecret::new(secret)?,
                );
            }
            (Some(_), None) => {
                return Err(ConfigError::MissingEnvVar {
                    name: "NEXAR_CLIENT_SECRET",
                });
            }
            (None, Some(_)) => {
                return Err(ConfigError::MissingEnvVar {
                    name: "NEXAR_CLIENT_ID",
                });
            }
            (None, None) => {}
        }

        if let Ok(token) = std::env::var("NEXAR_SUPPLY_TOKEN") {
            builder = builder.supply_token(token);
        }

        builder.build()
    }

    /// Returns the GraphQL endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }

    /// Returns the identity (token) endpoint.
    #[must_use]
    pub const fn identity_endpoint(&self) -> &ApiEndpoint {
        &self.identity_endpoint
    }

    /// Returns the active tenant identifier.
    #[must_use]
    pub const fn active_tenant(&self) -> &TenantId {
        &self.active_tenant
    }

    /// Returns the credential pair registered for the given tenant, if any.
    #[must_use]
    pub fn credentials(&self, tenant: &TenantId) -> Option<&TenantCredentials> {
        self.tenants.get(tenant)
    }

    /// Returns the pre-provisioned static supply token, if configured.
    #[must_use]
    pub fn supply_token(&self) -> Option<&str> {
        self.supply_token.as_deref()
    }
}

/// Builder for [`NexarConfig`].
///
/// Endpoints default to the public Nexar endpoints; the active tenant
/// defaults to [`TenantId::default`].
#[derive(Clone, Debug, Default)]
pub struct NexarConfigBuilder {
    endpoint: Option<ApiEndpoint>,
    identity_endpoint: Option<ApiEndpoint>,
    tenants: HashMap<TenantId, TenantCredentials>,
    active_tenant: Option<TenantId>,
    supply_token: Option<String>,
}

impl NexarConfigBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the GraphQL endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: ApiEndpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the identity (token) endpoint.
    #[must_use]
    pub fn identity_endpoint(mut self, endpoint: ApiEndpoint) -> Self {
        self.identity_endpoint = Some(endpoint);
        self
    }

    /// Registers a credential pair for a tenant.
    ///
    /// Registering the same tenant twice replaces the earlier pair.
    #[must_use]
    pub fn tenant(mut self, tenant: TenantId, client_id: ClientId, secret: ClientSecret) -> Self {
        self.tenants
            .insert(tenant, TenantCredentials::new(client_id, secret));
        self
    }

    /// Selects the active tenant.
    #[must_use]
    pub fn active_tenant(mut self, tenant: TenantId) -> Self {
        self.active_tenant = Some(tenant);
        self
    }

    /// Sets a pre-provisioned static supply token.
    ///
    /// When present, clients adopt this token directly and never perform a
    /// credential exchange.
    #[must_use]
    pub fn supply_token(mut self, token: impl Into<String>) -> Self {
        self.supply_token = Some(token.into());
        self
    }

    /// Builds the configuration, validating it.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NoAuthenticationSource`] if no tenant credentials and
    ///   no static token were provided.
    /// - [`ConfigError::MissingTenantCredentials`] if the active tenant has no
    ///   credential pair and no static token is available to fall back on.
    pub fn build(self) -> Result<NexarConfig, ConfigError> {
        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => ApiEndpoint::new(DEFAULT_ENDPOINT)?,
        };
        let identity_endpoint = match self.identity_endpoint {
            Some(endpoint) => endpoint,
            None => ApiEndpoint::new(DEFAULT_IDENTITY_ENDPOINT)?,
        };
        let active_tenant = self.active_tenant.unwrap_or_default();

        if self.tenants.is_empty() && self.supply_token.is_none() {
            return Err(ConfigError::NoAuthenticationSource);
        }
        if self.supply_token.is_none() && !self.tenants.contains_key(&active_tenant) {
            return Err(ConfigError::MissingTenantCredentials {
                tenant: active_tenant.to_string(),
            });
        }

        Ok(NexarConfig {
            endpoint,
            identity_endpoint,
            tenants: self.tenants,
            active_tenant,
            supply_token: self.supply_token,
        })
    }
}

// Verify config types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NexarConfig>();
    assert_send_sync::<TenantCredentials>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> (ClientId, ClientSecret) {
        (
            ClientId::new("test-client-id").unwrap(),
            ClientSecret::new("test-secret").unwrap(),
        )
    }

    #[test]
    fn test_builder_applies_default_endpoints() {
        let (id, secret) = credentials();
        let config = NexarConfig::builder()
            .tenant(TenantId::default(), id, secret)
            .build()
            .unwrap();

        assert_eq!(config.endpoint().as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.identity_endpoint().as_str(), DEFAULT_IDENTITY_ENDPOINT);
        assert_eq!(config.active_tenant(), &TenantId::default());
    }

    #[test]
    fn test_builder_rejects_empty_configuration() {
        let result = NexarConfig::builder().build();
        assert!(matches!(result, Err(ConfigError::NoAuthenticationSource)));
    }

    #[test]
    fn test_builder_rejects_active_tenant_without_credentials() {
        let (id, secret) = credentials();
        let result = NexarConfig::builder()
            .tenant(TenantId::new("acme").unwrap(), id, secret)
            .active_tenant(TenantId::new("globex").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingTenantCredentials { tenant }) if tenant == "globex"
        ));
    }

    #[test]
    fn test_builder_accepts_static_token_without_credentials() {
        let config = NexarConfig::builder()
            .supply_token("pre-provisioned-token")
            .build()
            .unwrap();

        assert_eq!(config.supply_token(), Some("pre-provisioned-token"));
        assert!(config.credentials(&TenantId::default()).is_none());
    }

    #[test]
    fn test_credentials_lookup_is_tenant_scoped() {
        let acme = TenantId::new("acme").unwrap();
        let globex = TenantId::new("globex").unwrap();
        let config = NexarConfig::builder()
            .tenant(
                acme.clone(),
                ClientId::new("acme-id").unwrap(),
                ClientSecret::new("acme-secret").unwrap(),
            )
            .tenant(
                globex.clone(),
                ClientId::new("globex-id").unwrap(),
                ClientSecret::new("globex-secret").unwrap(),
            )
            .active_tenant(acme.clone())
            .build()
            .unwrap();

        assert_eq!(
            config.credentials(&acme).unwrap().client_id.as_ref(),
            "acme-id"
        );
        assert_eq!(
            config.credentials(&globex).unwrap().client_id.as_ref(),
            "globex-id"
        );
        assert!(config
            .credentials(&TenantId::new("initech").unwrap())
            .is_none());
    }

    #[test]
    fn test_registering_tenant_twice_replaces_pair() {
        let tenant = TenantId::new("acme").unwrap();
        let config = NexarConfig::builder()
            .tenant(
                tenant.clone(),
                ClientId::new("old-id").unwrap(),
                ClientSecret::new("old-secret").unwrap(),
            )
            .tenant(
                tenant.clone(),
                ClientId::new("new-id").unwrap(),
                ClientSecret::new("new-secret").unwrap(),
            )
            .active_tenant(tenant.clone())
            .build()
            .unwrap();

        assert_eq!(
            config.credentials(&tenant).unwrap().client_id.as_ref(),
            "new-id"
        );
    }
}
