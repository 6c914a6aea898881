use std::{sync::Arc, time::Duration};

use reqwest::Client;
use tokio::sync::RwLock;
use tracing::*;
use url::Url;

use crate::jwk::{fetch_keys, Certs, FetchedKeys, Key, KeyStoreConfig};

/// `KeyStoreClient` resolves `kid`s to RSA signing keys published by a remote
/// JSON Web Key Store, caching the store for as long as the endpoint's
/// `Cache-Control: max-age` allows (or the configured default when absent).
///
/// Reads share a lock and never touch the network while the cached snapshot
/// is fresh. A refresh holds the write lock for the whole fetch. Callers that
/// queued behind a refresh re-check freshness once they get the lock and reuse
/// the snapshot it installed, so a burst of callers at expiry results in a
/// single fetch.
///
/// Cloning is cheap; clones share the same cache.
#[derive(Clone, Debug)]
pub struct KeyStoreClient {
    jwk_url: Url,
    default_cache_age: Duration,
    http: Client,
    cache: Arc<RwLock<Option<Arc<Certs>>>>,
}

impl KeyStoreClient {
    /// Creates a client with its own HTTP client, using the configured timeout.
    ///
    /// No request is made until the first call to [`get_keys`](Self::get_keys).
    pub fn new(config: KeyStoreConfig) -> crate::Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(crate::Error::HttpClient)?;
        Ok(Self::with_http_client(config, http))
    }

    /// Creates a client that fetches through the given HTTP client.
    ///
    /// The configured timeout is ignored; `http` brings its own.
    pub fn with_http_client(config: KeyStoreConfig, http: Client) -> Self {
        Self {
            jwk_url: config.jwk_url().clone(),
            default_cache_age: config.default_cache_age(),
            http,
            cache: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the current snapshot, fetching a new one first if there is
    /// none yet or it has expired.
    ///
    /// A failed refresh is returned as-is. The previous snapshot stays in
    /// place but is not served once expired, and the next call fetches again.
    pub async fn get_keys(&self) -> crate::Result<Arc<Certs>> {
        if let Some(certs) = self.fresh().await {
            trace!(keys = certs.len(), "Serving cached key store");
            return Ok(certs);
        }

        let mut cached = self.cache.write().await;

        // Another caller may have refreshed while we waited for the lock.
        if let Some(certs) = cached.as_ref().filter(|certs| !certs.is_expired())
        {
            debug!("Key store refreshed by a concurrent caller");
            return Ok(Arc::clone(certs));
        }

        let FetchedKeys { key_set, max_age } =
            fetch_keys(&self.http, &self.jwk_url, self.default_cache_age)
                .await
                .inspect_err(|err| {
                    warn!(url = %self.jwk_url, "Failed to refresh key store: {err}")
                })?;

        let certs = Arc::new(Certs::build(key_set, max_age));
        debug!(
            keys = certs.len(),
            "Refreshed key store. Next refresh in {:?}", max_age
        );

        *cached = Some(Arc::clone(&certs));
        Ok(certs)
    }

    /// Returns the RSA signing key identified by `kid`.
    ///
    /// # Errors
    /// Returns [`Error::KeyNotFound`](crate::Error::KeyNotFound) if the
    /// current snapshot has no such key, or the refresh error if the key
    /// store could not be fetched.
    pub async fn get_key(&self, kid: &str) -> crate::Result<Key> {
        let certs = self.get_keys().await?;
        certs
            .get(kid)
            .cloned()
            .ok_or_else(|| crate::Error::KeyNotFound {
                kid: kid.to_owned(),
            })
    }

    /// Returns the snapshot currently held, fresh or not, without fetching.
    pub async fn cached(&self) -> Option<Arc<Certs>> {
        self.cache.read().await.clone()
    }

    async fn fresh(&self) -> Option<Arc<Certs>> {
        let cached = self.cache.read().await;
        cached
            .as_ref()
            .filter(|certs| !certs.is_expired())
            .cloned()
    }
}
