//! Authentication for the Nexar supply API.
//!
//! This module covers the full token lifecycle:
//!
//! - [`TokenRecord`]: one issued bearer token with expiry metadata
//! - [`TokenStore`]: per-tenant cache of the current token, TTL-aligned with
//!   the token's real expiry
//! - [`TokenAuthenticator`]: the OAuth 2.0 client-credentials exchange, with
//!   per-tenant single-flight de-duplication
//! - [`TokenRecordStore`]: the durable audit-store seam, written once per
//!   exchange

mod authenticator;
mod record_store;
mod store;
mod token;

pub use authenticator::{AuthError, TokenAuthenticator};
pub use record_store::{InMemoryTokenRecordStore, RecordStoreError, TokenRecordStore};
pub use store::TokenStore;
pub use token::{TokenRecord, SUPPLY_SCOPE};
