use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::trace;

use super::key::{Key, KeySet};

/// Upper bound on a snapshot's lifetime, whatever the endpoint asks for.
pub(crate) const MAX_CACHE_AGE: Duration =
    Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// An immutable snapshot of the RSA signing keys published by a key store,
/// indexed by `kid`, together with the instant it stops being fresh.
///
/// Only keys with `kty == "RSA"` and `use == "sig"` are ever stored.
#[derive(Debug, Clone)]
pub struct Certs {
    keys: HashMap<String, Key>,
    expiry: Instant,
}

impl Certs {
    /// Builds a snapshot from a decoded key set, expiring `ttl` from now.
    ///
    /// Keys of other types or uses are dropped. If two keys share a `kid`
    /// the later one wins. A `ttl` longer than 100 years is clamped to it.
    pub fn build(key_set: KeySet, ttl: Duration) -> Certs {
        let mut keys = HashMap::with_capacity(key_set.keys.len());
        for key in key_set.keys {
            if key.is_rsa_signing_key() {
                keys.insert(key.kid.clone(), key);
            } else {
                trace!(
                    kid = %key.kid,
                    kty = %key.kty,
                    key_use = %key.key_use,
                    "Skipping unsupported key"
                );
            }
        }

        let now = Instant::now();
        let expiry = now.checked_add(ttl.min(MAX_CACHE_AGE)).unwrap_or(now);

        Certs { keys, expiry }
    }

    /// Returns the key identified by `kid`, if present.
    pub fn get(&self, kid: &str) -> Option<&Key> {
        self.keys.get(kid)
    }

    /// Returns the keys indexed by `kid`.
    pub fn keys(&self) -> &HashMap<String, Key> {
        &self.keys
    }

    /// Returns all keys in no particular order.
    pub fn to_vec(&self) -> Vec<Key> {
        self.keys.values().cloned().collect()
    }

    /// Returns the number of keys held.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the key store published no usable signing key.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the instant from which the snapshot is no longer served.
    pub fn expiry(&self) -> Instant {
        self.expiry
    }

    /// Returns `true` once [`expiry`](Self::expiry) has been reached.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expiry
    }
}
