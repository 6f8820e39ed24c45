//! Browser-side HTTP helper for the meteor backend.
//!
//! The fetch itself only exists on wasm32; the error type is target-neutral
//! so game logic and native tests can consume fetch outcomes.

use thiserror::Error;

/// What went wrong while talking to the backend. All variants are
/// recoverable: they surface as an overlay message, never a panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never completed (connection refused, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("server returned HTTP {0}")]
    BadStatus(u16),
    /// The body is not JSON (e.g. an HTML error page).
    #[error("unexpected content type {0:?}")]
    BadContentType(String),
}

/// GET `url` and return the body text.
///
/// Non-2xx statuses and non-JSON content types are errors; the body is
/// returned undecoded so the caller owns the record-level validation.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_json_text(url: &str) -> Result<String, FetchError> {
    use gloo_net::http::Request;

    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(FetchError::BadStatus(resp.status()));
    }

    let content_type = resp
        .headers()
        .get("content-type")
        .unwrap_or_default();
    if !content_type.contains("application/json") {
        return Err(FetchError::BadContentType(content_type));
    }

    let text = resp
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    log::debug!("fetched {} bytes from {url}", text.len());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_human_readable() {
        assert_eq!(
            FetchError::BadStatus(404).to_string(),
            "server returned HTTP 404"
        );
        assert!(FetchError::BadContentType("text/html".into())
            .to_string()
            .contains("text/html"));
    }
}
