use thiserror::Error;

/// Errors raised while refreshing the key store from the remote endpoint.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request failed or the response body could not be read.
    #[error("failed to fetch the JSON Web Key Store: {0}")]
    Request(reqwest::Error),

    /// The `Cache-Control` header holds non-ASCII bytes.
    #[error("the 'Cache-Control' header is not valid visible ASCII")]
    InvalidCacheControl,

    /// The `max-age` directive is not a non-negative integer.
    #[error("the 'max-age' directive is not a valid number: {value:?}")]
    InvalidMaxAge {
        /// The rejected directive value.
        value: String,
    },

    /// The body is not a JSON Web Key Store document.
    #[error("failed to decode the JSON Web Key Store: {0}")]
    Decode(serde_json::Error),
}

/// Errors raised while turning a JWK's `n`/`e` fields into usable key material.
#[derive(Debug, Error)]
pub enum KeyError {
    /// The modulus is not valid unpadded base64url.
    #[error("invalid RSA modulus: {0}")]
    InvalidModulus(base64::DecodeError),

    /// The exponent is not valid unpadded base64url.
    #[error("invalid RSA exponent: {0}")]
    InvalidExponent(base64::DecodeError),

    /// The decoded integers do not form an acceptable RSA public key.
    #[error("invalid RSA public key components: {0}")]
    InvalidComponents(rsa::Error),

    /// `jsonwebtoken` rejected the RSA components.
    #[error("could not build a decoding key: {0}")]
    DecodingKey(jsonwebtoken::errors::Error),
}
