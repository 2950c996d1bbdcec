//! # Nexar API Rust SDK
//!
//! A Rust SDK for the Nexar supply (part search) GraphQL API, providing
//! type-safe configuration, OAuth 2.0 client-credentials authentication with
//! per-tenant token caching, and a GraphQL query client.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`NexarConfig`] and [`NexarConfigBuilder`]
//! - Validated newtypes for credentials, tenants, and endpoints
//! - OAuth 2.0 Client Credentials Grant via [`TokenAuthenticator`], with the
//!   issued token cached in a [`TokenStore`] for its validity window
//! - Durable audit storage of issued tokens via the [`TokenRecordStore`] seam
//! - An authenticated GraphQL client ([`NexarClient`]) plus a catalog of
//!   ready-made part-search queries in [`queries`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use nexar_api::{
//!     ClientId, ClientSecret, InMemoryTokenRecordStore, NexarClient, NexarConfig,
//!     TenantId, TokenAuthenticator, TokenStore,
//! };
//!
//! // Configure credentials for the default tenant
//! let config = NexarConfig::builder()
//!     .tenant(
//!         TenantId::default(),
//!         ClientId::new("your-client-id")?,
//!         ClientSecret::new("your-client-secret")?,
//!     )
//!     .build()?;
//!
//! // One authenticator per process; it owns the token cache
//! let authenticator = TokenAuthenticator::new(
//!     TokenStore::new(),
//!     Arc::new(InMemoryTokenRecordStore::new()),
//! );
//!
//! // Construction resolves the token (cached or freshly exchanged)
//! let client = NexarClient::connect(&config, &authenticator).await?;
//!
//! // Every call reuses the resolved token
//! let data = client.basic_mpn_search("NE555", 5, None).await?;
//! println!("{data}");
//! ```
//!
//! ## Multi-tenant deployments
//!
//! Each tenant (organization) registers its own client id/secret pair; tokens
//! are cached per tenant and never leak across tenants. Construct one client
//! per tenant with the matching `active_tenant` in the configuration.
//!
//! ## Error handling
//!
//! Failures surface synchronously to the immediate caller and the SDK never
//! retries:
//! - [`ConfigError`] at construction for invalid or incomplete configuration
//! - [`AuthError`] at construction when the credential exchange fails
//! - [`GraphqlError`] per query call, distinguishing transport failures from
//!   GraphQL-level errors carried inside a 2xx response
//!
//! ## Design Principles
//!
//! - **No global state**: the token cache is an injected capability, not a
//!   hidden singleton
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **Immutable tokens**: a client's token is resolved once at construction

pub mod auth;
pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod queries;

// Re-export public types at crate root for convenience
pub use auth::{
    AuthError, InMemoryTokenRecordStore, RecordStoreError, TokenAuthenticator, TokenRecord,
    TokenRecordStore, TokenStore, SUPPLY_SCOPE,
};
pub use client::{ClientError, NexarClient};
pub use clients::{GraphqlClient, GraphqlError, GraphqlResponseError};
pub use config::{
    ApiEndpoint, ClientId, ClientSecret, NexarConfig, NexarConfigBuilder, TenantCredentials,
    TenantId, DEFAULT_ENDPOINT, DEFAULT_IDENTITY_ENDPOINT,
};
pub use error::ConfigError;
pub use queries::QueryRequest;
