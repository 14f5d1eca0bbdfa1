//! Individual fetch strategies
//!
//! Each function attempts exactly one retrieval and reports failure as a
//! detail string; escalation between strategies lives in the parent
//! module.

use gloo_net::http::Request;

use duodoc_shared::RelayConfig;

use super::{FetchOutcome, FetchStrategy};

/// Read a local blob handle directly. The response carries the blob's
/// own type as its content type.
pub(super) async fn read_blob(blob_url: &str) -> Result<FetchOutcome, String> {
    let response = Request::get(blob_url)
        .send()
        .await
        .map_err(|e| format!("blob fetch failed: {e}"))?;

    if !response.ok() {
        return Err(format!(
            "blob fetch failed: HTTP {} {}",
            response.status(),
            response.status_text()
        ));
    }

    let declared_type = response.headers().get("content-type");
    let bytes = response
        .binary()
        .await
        .map_err(|e| format!("blob body unreadable: {e}"))?;

    Ok(FetchOutcome {
        bytes,
        declared_type,
        strategy: FetchStrategy::BlobRead,
    })
}

/// Fetch a remote URL through the relay's proxy endpoint. The relay
/// reports the payload's content type; a missing header falls back to
/// generic binary.
pub(super) async fn relay_fetch(
    relay: &RelayConfig,
    target: &str,
) -> Result<FetchOutcome, String> {
    let response = Request::get(&relay.proxy_url(target))
        .send()
        .await
        .map_err(|e| format!("proxy fetch failed: {e}"))?;

    if !response.ok() {
        return Err(format!(
            "proxy fetch failed: HTTP {} {}",
            response.status(),
            response.status_text()
        ));
    }

    let declared_type = response
        .headers()
        .get("content-type")
        .or_else(|| Some("application/octet-stream".to_string()));
    let bytes = response
        .binary()
        .await
        .map_err(|e| format!("proxy body unreadable: {e}"))?;

    Ok(FetchOutcome {
        bytes,
        declared_type,
        strategy: FetchStrategy::RelayProxy,
    })
}

/// Degraded fallback: a credential-less no-cors request straight to the
/// origin. Opaque responses report status 0 and hide their body and
/// headers, so the outcome is a generic payload with no declared type;
/// the status is deliberately not checked.
pub(super) async fn opaque_fetch(target: &str) -> Result<FetchOutcome, String> {
    let response = Request::get(target)
        .mode(web_sys::RequestMode::NoCors)
        .send()
        .await
        .map_err(|e| format!("direct fetch failed: {e}"))?;

    let bytes = response.binary().await.unwrap_or_default();

    Ok(FetchOutcome {
        bytes,
        declared_type: None,
        strategy: FetchStrategy::DirectOpaque,
    })
}
