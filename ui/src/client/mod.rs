//! Content Fetch Layer
//!
//! This module turns a [`ContentReference`] into bytes plus a declared
//! type. Retrieval is an explicit ordered list of strategies attempted in
//! sequence, each producing a typed outcome:
//!
//! - **BlobRead**: a local blob handle is read directly, no network. A
//!   failure here has no fallback.
//! - **RelayProxy**: a remote URL is fetched through the relay's proxy
//!   endpoint, which reports the payload's content type.
//! - **DirectOpaque**: if the relay fails, one degraded credential-less
//!   no-cors request goes straight to the origin. The response is opaque,
//!   so the payload is generic binary with no declared type.
//!
//! Escalation never retries a strategy; when the list is exhausted the
//! pane gets a [`FetchError`].

mod relay;
mod upload;

pub use upload::{upload_file, UploadError};

use duodoc_shared::{ContentReference, RelayConfig};

/// Error types for content retrieval
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    /// A local blob handle could not be read; there is no fallback
    #[error("blob-read-failed: {0}")]
    BlobRead(String),

    /// Every network strategy failed
    #[error("network-unreachable: {detail}")]
    NetworkUnreachable { detail: String },
}

/// How a payload was (or would be) retrieved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStrategy {
    BlobRead,
    RelayProxy,
    DirectOpaque,
}

/// The product of exactly one successful fetch strategy
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub bytes: Vec<u8>,
    /// Reported content type; absent for opaque responses
    pub declared_type: Option<String>,
    /// The strategy that produced this outcome
    pub strategy: FetchStrategy,
}

/// The ordered escalation plan for a reference. Patent tokens are
/// delegated to the external collaborator and never fetched here.
pub fn strategies_for(reference: &ContentReference) -> &'static [FetchStrategy] {
    match reference {
        ContentReference::LocalBlob(_) => &[FetchStrategy::BlobRead],
        ContentReference::Remote(_) => &[FetchStrategy::RelayProxy, FetchStrategy::DirectOpaque],
        ContentReference::Patent(_) => &[],
    }
}

/// Retrieve the bytes for a reference, walking the escalation plan.
pub async fn fetch_reference(
    relay: &RelayConfig,
    reference: &ContentReference,
) -> Result<FetchOutcome, FetchError> {
    let plan = strategies_for(reference);
    let mut last_detail = String::from("no fetch strategy applies");

    for strategy in plan {
        tracing::debug!(?strategy, reference = %reference, "attempting fetch strategy");
        let attempt = match strategy {
            FetchStrategy::BlobRead => relay::read_blob(reference.as_str()).await,
            FetchStrategy::RelayProxy => relay::relay_fetch(relay, reference.as_str()).await,
            FetchStrategy::DirectOpaque => relay::opaque_fetch(reference.as_str()).await,
        };
        match attempt {
            Ok(outcome) => {
                tracing::debug!(
                    ?strategy,
                    bytes = outcome.bytes.len(),
                    declared = outcome.declared_type.as_deref().unwrap_or("<absent>"),
                    "fetch strategy succeeded"
                );
                return Ok(outcome);
            }
            Err(detail) => {
                tracing::warn!(?strategy, %detail, "fetch strategy failed");
                if *strategy == FetchStrategy::BlobRead {
                    // Blob reads have no further fallback for this path
                    return Err(FetchError::BlobRead(detail));
                }
                last_detail = detail;
            }
        }
    }

    Err(FetchError::NetworkUnreachable {
        detail: last_detail,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blob_references_read_directly_with_no_fallback() {
        let reference = ContentReference::LocalBlob("blob:abc".into());
        assert_eq!(strategies_for(&reference), &[FetchStrategy::BlobRead]);
    }

    #[test]
    fn remote_references_escalate_from_relay_to_opaque() {
        let reference = ContentReference::Remote("https://example.com/x".into());
        assert_eq!(
            strategies_for(&reference),
            &[FetchStrategy::RelayProxy, FetchStrategy::DirectOpaque]
        );
    }

    #[test]
    fn patent_references_are_delegated_not_fetched() {
        let reference = ContentReference::Patent("US1".into());
        assert!(strategies_for(&reference).is_empty());
    }
}
