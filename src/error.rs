/// A crate-wide result type alias using the custom [`Error`] enum.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for key store failures.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Errors that occur while fetching or decoding the key store.
    #[error(transparent)]
    FetchError(#[from] crate::jwk::FetchError),

    /// Errors that occur while converting key material.
    #[error(transparent)]
    KeyError(#[from] crate::jwk::KeyError),

    /// The key store holds no RSA signing key with the requested `kid`.
    #[error("unable to find a key for kid '{kid}'")]
    KeyNotFound {
        /// The requested key identifier.
        kid: String,
    },

    /// The configured key store URL could not be parsed.
    #[error("invalid key store URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The default HTTP client could not be built.
    #[error("failed to build the HTTP client: {0}")]
    HttpClient(reqwest::Error),
}
