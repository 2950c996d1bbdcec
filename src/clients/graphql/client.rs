//! GraphQL query execution against the Nexar supply endpoint.
//!
//! This module provides the [`GraphqlClient`] type that sends one
//! authenticated GraphQL request per call and returns the decoded `data`
//! payload.

use crate::clients::graphql::errors::{GraphqlError, GraphqlResponseError};
use crate::config::ApiEndpoint;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Wire shape of a GraphQL response body.
#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<Value>,
    errors: Option<Vec<GraphqlResponseError>>,
}

/// Authenticated GraphQL client for the Nexar supply endpoint.
///
/// The client holds the bearer token resolved at construction and reuses it
/// for every call; it never refreshes the token itself. Each call is an
/// independent, live round trip: no result caching, no retries, no
/// throttling.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async
/// tasks; `execute` takes `&self`.
///
/// # Example
///
/// ```rust,ignore
/// use nexar_api::{ApiEndpoint, GraphqlClient};
/// use serde_json::json;
///
/// let client = GraphqlClient::new(
///     ApiEndpoint::new("https://api.nexar.com/graphql/").unwrap(),
///     "bearer-token",
/// );
///
/// // Simple query
/// let data = client
///     .execute("query { supAttributes { id name } }", None)
///     .await?;
///
/// // Query with variables
/// let data = client
///     .execute(
///         "query ($ids: [String!]) { supManufacturers(ids: $ids) { name } }",
///         Some(json!({ "ids": ["123"] })),
///     )
///     .await?;
/// ```
pub struct GraphqlClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The GraphQL endpoint URL.
    endpoint: ApiEndpoint,
    /// The bearer token sent with every request.
    access_token: String,
}

impl GraphqlClient {
    /// Creates a client bound to an endpoint and bearer token.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(endpoint: ApiEndpoint, access_token: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint,
            access_token: access_token.into(),
        }
    }

    /// Returns the endpoint this client posts to.
    #[must_use]
    pub const fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }

    /// Executes one GraphQL query and returns the decoded `data` payload.
    ///
    /// The request body is `{ "query": ..., "variables": ... }`; absent or
    /// `null` variables serialize as an empty object `{}`, which the endpoint
    /// requires even when a document declares no parameters. The `data`
    /// payload is returned as-is — its shape is the caller's concern.
    ///
    /// # Errors
    ///
    /// - [`GraphqlError::Transport`] if the request could not be sent
    /// - [`GraphqlError::Response`] on a non-2xx HTTP status
    /// - [`GraphqlError::Decode`] if a 2xx body is not valid JSON
    /// - [`GraphqlError::Graphql`] if a 2xx body carries an `errors` array;
    ///   partial `data` is preserved on the variant
    pub async fn execute(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> Result<Value, GraphqlError> {
        let variables = match variables {
            None | Some(Value::Null) => Value::Object(serde_json::Map::new()),
            Some(value) => value,
        };
        let body = serde_json::json!({
            "query": query,
            "variables": variables,
        });

        let response = self
            .client
            .post(self.endpoint.as_str())
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GraphqlError::Response {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let payload: GraphqlResponse = serde_json::from_str(&body)?;

        if let Some(errors) = payload.errors.filter(|errors| !errors.is_empty()) {
            tracing::debug!(
                error_count = errors.len(),
                "GraphQL response carried errors"
            );
            return Err(GraphqlError::Graphql {
                errors,
                data: payload.data,
            });
        }

        Ok(payload.data.unwrap_or(Value::Null))
    }
}

impl fmt::Debug for GraphqlClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphqlClient")
            .field("endpoint", &self.endpoint)
            .field("access_token", &"*****")
            .finish_non_exhaustive()
    }
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};
