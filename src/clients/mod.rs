//! API clients for the Nexar supply endpoint.

pub mod graphql;

pub use graphql::{GraphqlClient, GraphqlError, GraphqlResponseError};
