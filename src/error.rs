//! Error types for SDK configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use nexar_api::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message. Configuration
/// errors are fatal and surface at construction, before any network I/O.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client id cannot be empty.
    #[error("Client id cannot be empty. Please provide a valid Nexar application client id.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error(
        "Client secret cannot be empty. Please provide a valid Nexar application client secret."
    )]
    EmptyClientSecret,

    /// Tenant identifier is invalid.
    #[error("Invalid tenant identifier '{tenant}'. Tenant identifiers must be non-empty and contain no whitespace.")]
    InvalidTenantId {
        /// The invalid tenant identifier that was provided.
        tenant: String,
    },

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Please provide an absolute http(s) URL.")]
    InvalidEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },

    /// No credentials are configured for the given tenant.
    #[error("No credentials configured for tenant '{tenant}'. Register a client id/secret pair for it, or provide a static supply token.")]
    MissingTenantCredentials {
        /// The tenant that has no credential pair.
        tenant: String,
    },

    /// The configuration has neither tenant credentials nor a static token.
    #[error("Configuration must contain at least one tenant credential pair or a static supply token.")]
    NoAuthenticationSource,

    /// A required environment variable is missing.
    #[error("Missing environment variable '{name}'. This variable must be set to load configuration from the environment.")]
    MissingEnvVar {
        /// The name of the missing variable.
        name: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_client_id_error_message() {
        let error = ConfigError::EmptyClientId;
        let message = error.to_string();
        assert!(message.contains("Client id cannot be empty"));
    }

    #[test]
    fn test_invalid_endpoint_error_message() {
        let error = ConfigError::InvalidEndpoint {
            url: "ftp://nope".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp://nope"));
        assert!(message.contains("http(s)"));
    }

    #[test]
    fn test_missing_tenant_credentials_error_message() {
        let error = ConfigError::MissingTenantCredentials {
            tenant: "acme".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("acme"));
        assert!(message.contains("client id/secret"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyClientId;
        let _: &dyn std::error::Error = &error;
    }
}
