//! GraphQL client for the Nexar supply API.
//!
//! The main types in this module are:
//!
//! - [`GraphqlClient`]: executes authenticated queries and decodes responses
//! - [`GraphqlError`]: distinguishes transport failures from GraphQL-level
//!   errors carried inside a 2xx response
//!
//! # Response Structure
//!
//! GraphQL responses contain these fields in the body:
//!
//! - `data`: the query result, returned to the caller undecoded beyond JSON
//! - `errors`: any GraphQL errors (still HTTP 200), surfaced as
//!   [`GraphqlError::Graphql`] with partial `data` preserved

mod client;
mod errors;

pub use client::GraphqlClient;
pub use errors::{GraphqlError, GraphqlResponseError};
