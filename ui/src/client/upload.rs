//! Upload client
//!
//! Sends a locally selected file to the relay's upload endpoint and
//! returns a reference string for the stored copy. Depending on the
//! relay deployment the response is either the stored file's bytes
//! (wrapped into a local object URL) or a JSON `{fileUrl}` pointing at
//! it; both shapes are accepted.

use gloo_net::http::Request;
use serde::Deserialize;

use duodoc_shared::RelayConfig;

use crate::object_url;

/// Error types for upload operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadError {
    #[error("upload failed: {0}")]
    Transport(String),

    #[error("upload rejected: HTTP {0}")]
    Rejected(u16),

    #[error("invalid upload response: {0}")]
    InvalidResponse(String),
}

/// JSON response shape used by some relay deployments
#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(rename = "fileUrl")]
    file_url: String,
}

/// Upload a file and return the reference string to display it under.
pub async fn upload_file(
    relay: &RelayConfig,
    file: web_sys::File,
) -> Result<String, UploadError> {
    let form = web_sys::FormData::new()
        .map_err(|e| UploadError::Transport(format!("{e:?}")))?;
    form.append_with_blob("file", &file)
        .map_err(|e| UploadError::Transport(format!("{e:?}")))?;

    let response = Request::post(&relay.upload_url())
        .body(form)
        .map_err(|e| UploadError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| UploadError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(UploadError::Rejected(response.status()));
    }

    let content_type = response.headers().get("content-type").unwrap_or_default();
    if content_type.contains("application/json") {
        let parsed: UploadResponse = response
            .json()
            .await
            .map_err(|e| UploadError::InvalidResponse(e.to_string()))?;
        tracing::info!(url = %parsed.file_url, "upload stored remotely");
        return Ok(parsed.file_url);
    }

    // Binary deployment: the body is the stored file itself
    let bytes = response
        .binary()
        .await
        .map_err(|e| UploadError::InvalidResponse(e.to_string()))?;
    let mime = (!content_type.is_empty()).then_some(content_type.as_str());
    let url = object_url::create(&bytes, mime).map_err(UploadError::InvalidResponse)?;
    tracing::info!(bytes = bytes.len(), "upload stored as local object");
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_deployment_response_parses() {
        let parsed: UploadResponse =
            serde_json::from_str(r#"{"fileUrl":"http://relay/files/1"}"#).unwrap();
        assert_eq!(parsed.file_url, "http://relay/files/1");
    }
}
