//! GraphQL-specific error types.
//!
//! Two failure planes exist for a GraphQL call and they are kept distinct:
//!
//! - **Transport-level**: the request never produced a usable HTTP response
//!   ([`GraphqlError::Transport`]) or produced a non-2xx status
//!   ([`GraphqlError::Response`]). Neither invalidates the held token.
//! - **GraphQL-level**: the server answered 2xx but the body carries an
//!   `errors` array ([`GraphqlError::Graphql`]) — business errors ride inside
//!   a successful HTTP response by GraphQL convention. Any partial `data` the
//!   server returned alongside the errors is preserved on the variant.

use serde::Deserialize;
use thiserror::Error;

/// One entry of a GraphQL `errors` array.
///
/// Only the mandatory `message` field is decoded; servers may attach
/// `locations`, `path`, and `extensions`, which the SDK does not interpret.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct GraphqlResponseError {
    /// The human-readable error message.
    pub message: String,
}

/// Error type for GraphQL query execution.
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// The request could not be sent or no response was received.
    #[error("transport error sending GraphQL request: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx HTTP status.
    #[error("GraphQL endpoint returned HTTP {status}: {message}")]
    Response {
        /// The HTTP status code.
        status: u16,
        /// The response body, verbatim.
        message: String,
    },

    /// A 2xx response whose body was not valid JSON.
    #[error("GraphQL response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// A 2xx response whose body carries an `errors` array.
    #[error("GraphQL response carried {} error(s): {}", .errors.len(), format_messages(.errors))]
    Graphql {
        /// The decoded `errors` array entries.
        errors: Vec<GraphqlResponseError>,
        /// Partial `data` returned alongside the errors, if any.
        data: Option<serde_json::Value>,
    },
}

fn format_messages(errors: &[GraphqlResponseError]) -> String {
    errors
        .iter()
        .map(|error| error.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
