//! # jwks-rsa-cache
//!
//! This crate fetches RSA signing keys from a remote JSON Web Key Store and
//! caches them for as long as the endpoint's `Cache-Control: max-age` allows,
//! so a `kid` taken from a JWT header can be resolved to key material without
//! a network round trip on every token validation.
//!
//! Only keys with `kty == "RSA"` and `use == "sig"` are kept. Verifying the
//! token is left to the caller.
//!
//! ## Example
//!
//! ```no_run
//! use jwks_rsa_cache::{KeyStoreClient, KeyStoreConfig, Result};
//!
//! async fn public_key_pem(kid: &str) -> Result<String> {
//!     let config = KeyStoreConfig::new("https://example.auth0.com/.well-known/jwks.json")?;
//!     let client = KeyStoreClient::new(config)?;
//!
//!     let key = client.get_key(kid).await?;
//!     Ok(key.pem())
//! }
//! ```

mod client;
mod error;
mod jwk;

pub use client::*;
pub use error::*;
pub use jwk::{Certs, FetchError, Key, KeyError, KeySet, KeyStoreConfig};
