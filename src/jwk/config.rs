use std::time::Duration;

use url::Url;

/// Settings for a [`KeyStoreClient`](crate::KeyStoreClient).
#[derive(Debug, Clone)]
pub struct KeyStoreConfig {
    jwk_url: Url,
    default_cache_age: Duration,
    timeout: Duration,
}

impl KeyStoreConfig {
    /// Cache lifetime used when the endpoint sends no `max-age` directive.
    ///
    /// Auth0 suggests about 10 hours, see
    /// <https://github.com/auth0/node-jwks-rsa#caching>.
    pub const DEFAULT_CACHE_AGE: Duration = Duration::from_secs(10 * 60 * 60);

    /// Timeout applied to the HTTP client built by [`KeyStoreClient::new`](crate::KeyStoreClient::new).
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration for the key store at `jwk_url`,
    /// e.g. `https://YOUR_AUTH0_DOMAIN/.well-known/jwks.json`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidUrl`](crate::Error::InvalidUrl) if `jwk_url` is not an absolute URL.
    pub fn new(jwk_url: impl AsRef<str>) -> crate::Result<KeyStoreConfig> {
        let jwk_url = Url::parse(jwk_url.as_ref())?;
        Ok(KeyStoreConfig {
            jwk_url,
            default_cache_age: Self::DEFAULT_CACHE_AGE,
            timeout: Self::DEFAULT_TIMEOUT,
        })
    }

    /// Sets the cache lifetime used when the endpoint sends no `max-age`.
    pub fn with_default_cache_age(mut self, age: Duration) -> KeyStoreConfig {
        self.default_cache_age = age;
        self
    }

    /// Sets the request timeout of the HTTP client built by
    /// [`KeyStoreClient::new`](crate::KeyStoreClient::new).
    pub fn with_timeout(mut self, timeout: Duration) -> KeyStoreConfig {
        self.timeout = timeout;
        self
    }

    /// The key store URL.
    pub fn jwk_url(&self) -> &Url {
        &self.jwk_url
    }

    /// The cache lifetime used when the endpoint sends no `max-age`.
    pub fn default_cache_age(&self) -> Duration {
        self.default_cache_age
    }

    /// The request timeout of the default HTTP client.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_defaults() {
        let config =
            KeyStoreConfig::new("https://example.com/.well-known/jwks.json")
                .unwrap();
        assert_eq!(config.default_cache_age(), Duration::from_secs(36_000));
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.jwk_url().path(), "/.well-known/jwks.json");
    }

    #[test]
    fn overrides_defaults() {
        let config = KeyStoreConfig::new("https://example.com/jwks")
            .unwrap()
            .with_default_cache_age(Duration::from_secs(60))
            .with_timeout(Duration::from_secs(2));
        assert_eq!(config.default_cache_age(), Duration::from_secs(60));
        assert_eq!(config.timeout(), Duration::from_secs(2));
    }

    #[test]
    fn rejects_relative_url() {
        let result = KeyStoreConfig::new("/.well-known/jwks.json");
        assert!(
            matches!(result, Err(crate::Error::InvalidUrl(_))),
            "Expected InvalidUrl error, got {result:?}"
        );
    }
}
