use base64::prelude::BASE64_URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::DecodingKey;
use rsa::{BigUint, RsaPublicKey};
use serde::{Deserialize, Deserializer, Serialize};

use super::error::KeyError;

const PEM_HEADER: &str = "-----BEGIN CERTIFICATE-----\n";
const PEM_FOOTER: &str = "\n-----END CERTIFICATE-----";

/// Body of a JSON Web Key Store response.
#[derive(Debug, Default, Deserialize)]
pub struct KeySet {
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) keys: Vec<Key>,
}

/// A single JSON Web Key as published by the key store.
///
/// Only the members needed for RSA signing keys are kept. Every member
/// defaults to empty when missing or `null` so that other key types still
/// decode; they are filtered out when a [`Certs`](super::Certs) snapshot is
/// built.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Key {
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) alg: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) kty: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) kid: String,
    #[serde(rename = "use", deserialize_with = "null_as_default")]
    pub(crate) key_use: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) n: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) e: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) x5c: Vec<String>,
}

impl Key {
    /// The algorithm the key is intended for, e.g. `"RS256"`.
    pub fn alg(&self) -> &str {
        &self.alg
    }

    /// The key type, `"RSA"` for every key held in a snapshot.
    pub fn kty(&self) -> &str {
        &self.kty
    }

    /// The key identifier matched against a JWT's `kid` header.
    pub fn kid(&self) -> &str {
        &self.kid
    }

    /// The declared public key use, `"sig"` for signing keys.
    pub fn key_use(&self) -> &str {
        &self.key_use
    }

    /// RSA modulus, base64url encoded without padding.
    pub fn n(&self) -> &str {
        &self.n
    }

    /// RSA exponent, base64url encoded without padding.
    pub fn e(&self) -> &str {
        &self.e
    }

    /// X.509 certificate chain, leaf certificate first.
    pub fn x5c(&self) -> &[String] {
        &self.x5c
    }

    /// Returns `true` if the record carries no algorithm tag.
    pub fn is_empty(&self) -> bool {
        self.alg.is_empty()
    }

    pub(crate) fn is_rsa_signing_key(&self) -> bool {
        self.key_use == "sig" && self.kty == "RSA"
    }

    /// Returns the leaf certificate wrapped in PEM headers.
    ///
    /// The base64 body is not line-wrapped and no trailing newline is added.
    /// Returns an empty string if the key has no certificate.
    pub fn pem(&self) -> String {
        self.x5c
            .first()
            .map(|cert| with_pem_headers(cert))
            .unwrap_or_default()
    }

    /// Reconstructs the RSA public key from the `n` and `e` members.
    ///
    /// # Errors
    /// Returns [`KeyError`] if either member is not unpadded base64url or
    /// the decoded integers are rejected as RSA parameters.
    pub fn rsa(&self) -> Result<RsaPublicKey, KeyError> {
        let n = BASE64_URL_SAFE_NO_PAD
            .decode(&self.n)
            .map_err(KeyError::InvalidModulus)?;
        let e = BASE64_URL_SAFE_NO_PAD
            .decode(&self.e)
            .map_err(KeyError::InvalidExponent)?;

        RsaPublicKey::new(BigUint::from_bytes_be(&n), BigUint::from_bytes_be(&e))
            .map_err(KeyError::InvalidComponents)
    }

    /// Builds a `jsonwebtoken` decoding key from the RSA components.
    pub fn decoding_key(&self) -> Result<DecodingKey, KeyError> {
        DecodingKey::from_rsa_components(&self.n, &self.e)
            .map_err(KeyError::DecodingKey)
    }
}

/// Treats an explicit `null` like a missing member.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn with_pem_headers(cert: &str) -> String {
    let mut pem =
        String::with_capacity(PEM_HEADER.len() + cert.len() + PEM_FOOTER.len());
    pem.push_str(PEM_HEADER);
    pem.push_str(cert);
    pem.push_str(PEM_FOOTER);
    pem
}
