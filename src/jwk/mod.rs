mod certs;
mod config;
mod error;
mod fetch;
mod key;

pub use error::*;

pub use certs::*;
pub use config::*;
pub use key::*;

pub(crate) use fetch::{fetch_keys, FetchedKeys};

#[cfg(test)]
pub(crate) use key::tests;
