//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Nexar application client id.
///
/// This newtype ensures the client id is non-empty and provides type safety
/// to prevent accidental misuse of raw strings.
///
/// # Example
///
/// ```rust
/// use nexar_api::ClientId;
///
/// let id = ClientId::new("my-client-id").unwrap();
/// assert_eq!(id.as_ref(), "my-client-id");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyClientId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ClientId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ClientId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(de::Error::custom)
    }
}

/// A validated Nexar application client secret.
///
/// This newtype ensures the secret is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ClientSecret(*****)` instead of the actual secret.
///
/// # Example
///
/// ```rust
/// use nexar_api::ClientSecret;
///
/// let secret = ClientSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ClientSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Creates a new validated client secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyClientSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(*****)")
    }
}

impl Serialize for ClientSecret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ClientSecret {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(de::Error::custom)
    }
}

/// A validated tenant (organization) identifier.
///
/// Tenants scope credential pairs and cached tokens within one deployment.
/// Single-tenant deployments can rely on [`TenantId::default`], which yields
/// the identifier `"default"`.
///
/// # Example
///
/// ```rust
/// use nexar_api::TenantId;
///
/// let tenant = TenantId::new("Acme-EU").unwrap();
/// assert_eq!(tenant.as_ref(), "acme-eu"); // normalized to lowercase
///
/// assert_eq!(TenantId::default().as_ref(), "default");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TenantId(String);

impl TenantId {
    /// Creates a new validated tenant identifier.
    ///
    /// The identifier is trimmed and normalized to lowercase so that cache
    /// keys are stable regardless of how the tenant was written.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTenantId`] if the identifier is empty
    /// or contains whitespace.
    pub fn new(tenant: impl Into<String>) -> Result<Self, ConfigError> {
        let tenant = tenant.into();
        let normalized = tenant.trim().to_lowercase();
        if normalized.is_empty() || normalized.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidTenantId { tenant });
        }
        Ok(Self(normalized))
    }
}

impl Default for TenantId {
    fn default() -> Self {
        Self("default".to_string())
    }
}

impl AsRef<str> for TenantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for TenantId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TenantId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(de::Error::custom)
    }
}

/// A validated API endpoint URL.
///
/// Used for both the GraphQL endpoint and the identity (token) endpoint.
/// Only absolute `http` and `https` URLs are accepted.
///
/// # Example
///
/// ```rust
/// use nexar_api::ApiEndpoint;
///
/// let endpoint = ApiEndpoint::new("https://api.nexar.com/graphql/").unwrap();
/// assert_eq!(endpoint.as_str(), "https://api.nexar.com/graphql/");
///
/// assert!(ApiEndpoint::new("not-a-url").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiEndpoint(String);

impl ApiEndpoint {
    /// Creates a new validated endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the URL is empty, has a
    /// scheme other than `http`/`https`, or has no host component.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().to_string();

        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"));
        match rest {
            Some(rest) if !rest.is_empty() && !rest.starts_with('/') => Ok(Self(url)),
            _ => Err(ConfigError::InvalidEndpoint { url }),
        }
    }

    /// Returns the endpoint URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ApiEndpoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === ClientId Tests ===

    #[test]
    fn test_client_id_accepts_non_empty_value() {
        let id = ClientId::new("abc-123").unwrap();
        assert_eq!(id.as_ref(), "abc-123");
    }

    #[test]
    fn test_client_id_rejects_empty_value() {
        assert!(matches!(ClientId::new(""), Err(ConfigError::EmptyClientId)));
    }

    #[test]
    fn test_client_id_serializes_as_plain_string() {
        let id = ClientId::new("abc-123").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""abc-123""#);
    }

    // === ClientSecret Tests ===

    #[test]
    fn test_client_secret_rejects_empty_value() {
        assert!(matches!(
            ClientSecret::new(""),
            Err(ConfigError::EmptyClientSecret)
        ));
    }

    #[test]
    fn test_client_secret_debug_masks_value() {
        let secret = ClientSecret::new("super-secret").unwrap();
        let debug = format!("{secret:?}");
        assert_eq!(debug, "ClientSecret(*****)");
        assert!(!debug.contains("super-secret"));
    }

    // === TenantId Tests ===

    #[test]
    fn test_tenant_id_normalizes_case_and_whitespace() {
        let tenant = TenantId::new("  Acme-EU  ").unwrap();
        assert_eq!(tenant.as_ref(), "acme-eu");
    }

    #[test]
    fn test_tenant_id_rejects_empty_and_inner_whitespace() {
        assert!(TenantId::new("").is_err());
        assert!(TenantId::new("   ").is_err());
        assert!(TenantId::new("acme eu").is_err());
    }

    #[test]
    fn test_tenant_id_default_is_default() {
        assert_eq!(TenantId::default().as_ref(), "default");
    }

    #[test]
    fn test_tenant_id_equality_after_normalization() {
        assert_eq!(
            TenantId::new("ACME").unwrap(),
            TenantId::new("acme").unwrap()
        );
    }

    // === ApiEndpoint Tests ===

    #[test]
    fn test_api_endpoint_accepts_https_url() {
        let endpoint = ApiEndpoint::new("https://api.nexar.com/graphql/").unwrap();
        assert_eq!(endpoint.as_str(), "https://api.nexar.com/graphql/");
    }

    #[test]
    fn test_api_endpoint_accepts_http_url() {
        assert!(ApiEndpoint::new("http://127.0.0.1:8080/graphql").is_ok());
    }

    #[test]
    fn test_api_endpoint_rejects_other_schemes_and_bare_strings() {
        assert!(ApiEndpoint::new("ftp://api.nexar.com").is_err());
        assert!(ApiEndpoint::new("api.nexar.com").is_err());
        assert!(ApiEndpoint::new("https://").is_err());
        assert!(ApiEndpoint::new("").is_err());
    }
}
