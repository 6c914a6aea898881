use std::time::Duration;

use reqwest::header::CACHE_CONTROL;
use reqwest::Client;
use tracing::*;
use url::Url;

use super::error::FetchError;
use super::key::KeySet;

/// A decoded key set and the cache lifetime the endpoint asked for.
#[derive(Debug)]
pub(crate) struct FetchedKeys {
    pub(crate) key_set: KeySet,
    pub(crate) max_age: Duration,
}

/// Fetches the key store at `url` and derives its cache lifetime from the
/// `Cache-Control` header, using `default_cache_age` when the header or its
/// `max-age` directive is missing.
///
/// The response status is not checked: any body that decodes as a key
/// store is accepted.
pub(crate) async fn fetch_keys(
    client: &Client,
    url: &Url,
    default_cache_age: Duration,
) -> Result<FetchedKeys, FetchError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(FetchError::Request)?;

    let status = response.status();
    if !status.is_success() {
        warn!(%url, %status, "Key store responded with a non-success status");
    }

    let max_age = match response.headers().get(CACHE_CONTROL) {
        Some(value) => {
            let value =
                value.to_str().map_err(|_| FetchError::InvalidCacheControl)?;
            parse_max_age_value(value)?.unwrap_or(default_cache_age)
        }
        None => default_cache_age,
    };

    let body = response.bytes().await.map_err(FetchError::Request)?;
    let key_set =
        serde_json::from_slice::<KeySet>(&body).map_err(FetchError::Decode)?;

    Ok(FetchedKeys { key_set, max_age })
}

/// Parses the `max-age` directive from a Cache-Control header string.
///
/// Returns `Ok(None)` if there is no `max-age=<seconds>` directive. A bare
/// `max-age` without `=` counts as absent.
pub(crate) fn parse_max_age_value(
    value: &str,
) -> Result<Option<Duration>, FetchError> {
    for directive in value.split(',') {
        let Some((key, val)) = directive.split_once('=') else {
            continue;
        };
        let (key, val) = (key.trim(), val.trim());

        if key.eq_ignore_ascii_case("max-age") {
            let secs =
                val.parse::<u64>().map_err(|_| FetchError::InvalidMaxAge {
                    value: val.to_owned(),
                })?;
            return Ok(Some(Duration::from_secs(secs)));
        }
    }

    Ok(None)
}
