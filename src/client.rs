//! Top-level Nexar API client.
//!
//! [`NexarClient`] resolves a bearer token exactly once at construction and
//! reuses it for every subsequent GraphQL call. To pick up a fresh token
//! after expiry, reconstruct the client; [`TokenAuthenticator`] makes the
//! reconstruction cheap while the cached token is still valid.

use crate::auth::{AuthError, TokenAuthenticator};
use crate::clients::{GraphqlClient, GraphqlError};
use crate::config::NexarConfig;
use crate::error::ConfigError;
use crate::queries::{self, QueryRequest};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while constructing a [`NexarClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configuration is missing something the client needs.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The credential exchange failed.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Authenticated client for the Nexar supply API.
///
/// # Token lifetime
///
/// The token is resolved once in [`connect`] and treated as immutable for the
/// client's lifetime: a pre-provisioned static supply token is adopted
/// directly when configured, otherwise the authenticator returns the cached
/// token for the active tenant or performs one credential exchange. Query
/// calls never trigger a refresh.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use nexar_api::{
///     ClientId, ClientSecret, InMemoryTokenRecordStore, NexarClient, NexarConfig,
///     TenantId, TokenAuthenticator, TokenStore,
/// };
///
/// let config = NexarConfig::builder()
///     .tenant(
///         TenantId::default(),
///         ClientId::new("client-id")?,
///         ClientSecret::new("secret")?,
///     )
///     .build()?;
///
/// let authenticator = TokenAuthenticator::new(
///     TokenStore::new(),
///     Arc::new(InMemoryTokenRecordStore::new()),
/// );
///
/// let client = NexarClient::connect(&config, &authenticator).await?;
/// let attributes = client.list_attributes().await?;
/// println!("{attributes}");
/// ```
///
/// [`connect`]: NexarClient::connect
#[derive(Debug)]
pub struct NexarClient {
    graphql: GraphqlClient,
}

impl NexarClient {
    /// Constructs a client, resolving a bearer token for the active tenant.
    ///
    /// Performs at most one identity-endpoint exchange: none when a static
    /// token is configured or a valid cached token exists.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Config`] if the active tenant has no credential pair
    ///   and no static token is configured
    /// - [`ClientError::Auth`] if the credential exchange fails
    pub async fn connect(
        config: &NexarConfig,
        authenticator: &TokenAuthenticator,
    ) -> Result<Self, ClientError> {
        let access_token = if let Some(token) = config.supply_token() {
            tracing::debug!("using pre-provisioned supply token");
            token.to_string()
        } else {
            let tenant = config.active_tenant();
            let credentials =
                config
                    .credentials(tenant)
                    .ok_or_else(|| ConfigError::MissingTenantCredentials {
                        tenant: tenant.to_string(),
                    })?;
            authenticator
                .authenticate(config.identity_endpoint(), tenant, credentials)
                .await?
                .access_token
        };

        Ok(Self {
            graphql: GraphqlClient::new(config.endpoint().clone(), access_token),
        })
    }

    /// Executes a raw GraphQL document with optional variables.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`]; see [`GraphqlClient::execute`].
    pub async fn execute(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> Result<Value, GraphqlError> {
        self.graphql.execute(query, variables).await
    }

    /// Executes a catalog [`QueryRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`]; see [`GraphqlClient::execute`].
    pub async fn run(&self, request: QueryRequest) -> Result<Value, GraphqlError> {
        self.graphql
            .execute(request.document, Some(request.variables))
            .await
    }

    /// Lists all part attributes.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] on transport or GraphQL-level failure.
    pub async fn list_attributes(&self) -> Result<Value, GraphqlError> {
        self.run(queries::list_attributes()).await
    }

    /// Lists all manufacturers.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] on transport or GraphQL-level failure.
    pub async fn list_manufacturers(&self) -> Result<Value, GraphqlError> {
        self.run(queries::list_manufacturers()).await
    }

    /// Looks up manufacturers by their ids.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] on transport or GraphQL-level failure.
    pub async fn manufacturers_by_ids(&self, ids: &[&str]) -> Result<Value, GraphqlError> {
        self.run(queries::manufacturers_by_ids(ids)).await
    }

    /// Lists all distributors.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] on transport or GraphQL-level failure.
    pub async fn list_distributors(&self) -> Result<Value, GraphqlError> {
        self.run(queries::list_distributors()).await
    }

    /// Looks up distributors by their ids.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] on transport or GraphQL-level failure.
    pub async fn distributors_by_ids(&self, ids: &[&str]) -> Result<Value, GraphqlError> {
        self.run(queries::distributors_by_ids(ids)).await
    }

    /// Lists all part categories.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] on transport or GraphQL-level failure.
    pub async fn list_categories(&self) -> Result<Value, GraphqlError> {
        self.run(queries::list_categories()).await
    }

    /// Looks up categories by their ids.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] on transport or GraphQL-level failure.
    pub async fn categories_by_ids(&self, ids: &[&str]) -> Result<Value, GraphqlError> {
        self.run(queries::categories_by_ids(ids)).await
    }

    /// Looks up categories by their paths.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] on transport or GraphQL-level failure.
    pub async fn categories_by_paths(&self, paths: &[&str]) -> Result<Value, GraphqlError> {
        self.run(queries::categories_by_paths(paths)).await
    }

    /// Free-text part search with paging.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] on transport or GraphQL-level failure.
    pub async fn basic_search(
        &self,
        term: &str,
        limit: i32,
        start: Option<i32>,
    ) -> Result<Value, GraphqlError> {
        self.run(queries::basic_search(term, limit, start)).await
    }

    /// Manufacturer-part-number search with paging.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] on transport or GraphQL-level failure.
    pub async fn basic_mpn_search(
        &self,
        term: &str,
        limit: i32,
        start: Option<i32>,
    ) -> Result<Value, GraphqlError> {
        self.run(queries::basic_mpn_search(term, limit, start)).await
    }

    /// Search-box suggestions for a term.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] on transport or GraphQL-level failure.
    pub async fn search_suggestions(&self, term: &str) -> Result<Value, GraphqlError> {
        self.run(queries::search_suggestions(term)).await
    }

    /// Part-number suggestions restricted to one category.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] on transport or GraphQL-level failure.
    pub async fn part_suggestions_by_category(
        &self,
        term: &str,
        category_id: &str,
    ) -> Result<Value, GraphqlError> {
        self.run(queries::part_suggestions_by_category(term, category_id))
            .await
    }

    /// Category/manufacturer/distributor aggregations for a term.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] on transport or GraphQL-level failure.
    pub async fn basic_aggregations(&self, term: &str) -> Result<Value, GraphqlError> {
        self.run(queries::basic_aggregations(term)).await
    }

    /// Spec-bucket aggregations for the named attributes.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] on transport or GraphQL-level failure.
    pub async fn aggregations_for_specs(
        &self,
        term: &str,
        attributes: &[&str],
    ) -> Result<Value, GraphqlError> {
        self.run(queries::aggregations_for_specs(term, attributes))
            .await
    }

    /// Spelling correction for a search term.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] on transport or GraphQL-level failure.
    pub async fn spelling_correction(&self, term: &str) -> Result<Value, GraphqlError> {
        self.run(queries::spelling_correction(term)).await
    }

    /// MPN search narrowed by a filters map.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] on transport or GraphQL-level failure.
    pub async fn filtered_mpn_search(
        &self,
        term: &str,
        limit: i32,
        filters: Value,
    ) -> Result<Value, GraphqlError> {
        self.run(queries::filtered_mpn_search(term, limit, filters))
            .await
    }

    /// Technical specs for parts matching a term.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] on transport or GraphQL-level failure.
    pub async fn part_specs(&self, term: &str, limit: i32) -> Result<Value, GraphqlError> {
        self.run(queries::part_specs(term, limit)).await
    }

    /// MPN search sorted by a spec attribute.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] on transport or GraphQL-level failure.
    pub async fn sorting_by_spec(
        &self,
        term: &str,
        limit: i32,
        sort_by: &str,
        sort_dir: &str,
    ) -> Result<Value, GraphqlError> {
        self.run(queries::sorting_by_spec(term, limit, sort_by, sort_dir))
            .await
    }

    /// Seller offers and pricing for parts matching a term.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] on transport or GraphQL-level failure.
    pub async fn part_offers(
        &self,
        term: &str,
        limit: i32,
        in_stock_only: bool,
        country: Option<&str>,
        currency: Option<&str>,
    ) -> Result<Value, GraphqlError> {
        self.run(queries::part_offers(
            term,
            limit,
            in_stock_only,
            country,
            currency,
        ))
        .await
    }

    /// Full MPN search with aggregations, specs, and localized pricing.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] on transport or GraphQL-level failure.
    #[allow(clippy::too_many_arguments)]
    pub async fn mpn_search(
        &self,
        term: &str,
        country: &str,
        currency: &str,
        filters: Option<Value>,
        in_stock_only: bool,
        limit: i32,
        start: Option<i32>,
    ) -> Result<Value, GraphqlError> {
        self.run(queries::mpn_search(
            term,
            country,
            currency,
            filters,
            in_stock_only,
            limit,
            start,
        ))
        .await
    }

    /// Matches a batch of part queries in one round trip.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] on transport or GraphQL-level failure.
    pub async fn multi_mpn_search(
        &self,
        country: &str,
        currency: &str,
        require_stock_available: bool,
        filters: Option<Value>,
        batch: Value,
    ) -> Result<Value, GraphqlError> {
        self.run(queries::multi_mpn_search(
            country,
            currency,
            require_stock_available,
            filters,
            batch,
        ))
        .await
    }
}

// Verify NexarClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NexarClient>();
};
