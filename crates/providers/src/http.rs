//! Request plumbing shared by the provider adapters.

use flightmcp_core::error::ProviderError;
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;

/// Longest error body kept in a [`ProviderError::Status`].
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Parse a configured provider base URL.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url, ProviderError> {
    let url = Url::parse(raw).map_err(|e| ProviderError::InvalidUrl(format!("{raw}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(ProviderError::InvalidUrl(raw.to_string()));
    }
    Ok(url)
}

/// Append percent-encoded path segments to `base`.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, ProviderError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| ProviderError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Send a request and decode a 2xx JSON body into `T`.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    request: RequestBuilder,
) -> Result<T, ProviderError> {
    let response = request.send().await.map_err(transport_error)?;
    let status = response.status();
    let body = response.bytes().await.map_err(transport_error)?;

    if !status.is_success() {
        let text: String = String::from_utf8_lossy(&body)
            .chars()
            .take(MAX_ERROR_BODY_CHARS)
            .collect();
        return Err(ProviderError::Status {
            status: status.as_u16(),
            body: text,
        });
    }

    serde_json::from_slice(&body).map_err(|e| ProviderError::Decode(e.to_string()))
}

/// Map a reqwest error without its URL, which carries the access key.
fn transport_error(err: reqwest::Error) -> ProviderError {
    ProviderError::Transport(err.without_url().to_string())
}
