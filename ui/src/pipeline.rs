//! Per-pane load driver
//!
//! Drives one pane through `Loading -> {Loaded | Errored}` for its
//! current reference: fetch through the strategy selector, resolve the
//! declared type, decode structured payloads, and hand the selected
//! presentation to the pane controller. The controller's generation
//! token makes a late outcome for a superseded reference inert
//! (last-reference-wins); any object URLs such an outcome carried are
//! revoked here.

use leptos::spawn_local;
use leptos::{SignalGetUntracked, SignalUpdate};

use duodoc_shared::{
    content_type, decode_tabular, ApplyResult, ContentReference, LoadedDocument, PaneFailure,
    RelayConfig, RenderCategory, TabularKind,
};

use crate::client::{self, FetchError, FetchOutcome};
use crate::object_url;
use crate::state::PaneState;

/// Start (or restart) the load for the pane's current reference.
///
/// Clears prior payload state immediately; the asynchronous outcome is
/// applied only if no newer load has started for this pane in the
/// meantime.
pub fn load_pane(relay: RelayConfig, pane: PaneState) {
    let Some(reference) = pane.reference.get_untracked() else {
        return;
    };

    if reference.is_patent() {
        // Symbolic tokens are delegated to the external patent
        // collaborator; the pane renders a delegation slot instead.
        if let Some(release) = pane.controller.try_update(|c| c.reset()) {
            object_url::revoke_all(release);
        }
        return;
    }

    let Some((generation, release)) = pane.controller.try_update(|c| c.begin_load()) else {
        return;
    };
    object_url::revoke_all(release);

    tracing::info!(pane = pane.side.label(), reference = %reference, generation, "loading");

    spawn_local(async move {
        let outcome = resolve_reference(&relay, &reference).await;
        let applied = pane
            .controller
            .try_update(|c| c.apply(generation, outcome))
            .unwrap_or(ApplyResult::Applied);

        if let ApplyResult::Stale { release } = applied {
            tracing::debug!(
                pane = pane.side.label(),
                generation,
                "discarding stale outcome"
            );
            object_url::revoke_all(release);
        }
    });
}

/// Fetch and decode one reference into its presentation.
async fn resolve_reference(
    relay: &RelayConfig,
    reference: &ContentReference,
) -> Result<LoadedDocument, PaneFailure> {
    let outcome = client::fetch_reference(relay, reference)
        .await
        .map_err(|e| fetch_failure(relay, &e))?;
    select_presentation(outcome)
}

/// Map a resolved category and payload to the final presentation mode.
fn select_presentation(outcome: FetchOutcome) -> Result<LoadedDocument, PaneFailure> {
    let declared = outcome.declared_type.as_deref();
    let category = content_type::resolve(declared);
    tracing::debug!(category = category.label(), "selected render category");

    match category {
        RenderCategory::Pdf => Ok(LoadedDocument::Pdf {
            object_url: allocate(&outcome)?,
        }),
        RenderCategory::Image => Ok(LoadedDocument::Image {
            object_url: allocate(&outcome)?,
        }),
        RenderCategory::Tabular => decode_tabular_payload(&outcome),
        RenderCategory::Html => {
            let text = String::from_utf8_lossy(&outcome.bytes);
            // Untrusted markup crosses an isolation boundary here:
            // scripts and event handlers are stripped before embedding.
            Ok(LoadedDocument::Html {
                markup: ammonia::clean(&text),
            })
        }
        RenderCategory::Download | RenderCategory::Error => Ok(LoadedDocument::Download {
            object_url: allocate(&outcome)?,
            message: content_type::download_hint(declared).to_string(),
        }),
    }
}

/// Decode a tabular payload, falling back to an errored state that still
/// offers the raw bytes when the structure is invalid.
fn decode_tabular_payload(outcome: &FetchOutcome) -> Result<LoadedDocument, PaneFailure> {
    let declared = outcome.declared_type.as_deref().unwrap_or_default();
    let Some(kind) = TabularKind::from_declared(declared) else {
        return Ok(LoadedDocument::Download {
            object_url: allocate(outcome)?,
            message: content_type::download_hint(Some(declared)).to_string(),
        });
    };

    match decode_tabular(&outcome.bytes, kind) {
        Ok(workbook) => {
            let active_sheet = workbook
                .first_sheet_name()
                .unwrap_or("Sheet1")
                .to_string();
            tracing::info!(sheets = workbook.sheets.len(), "tabular payload decoded");
            Ok(LoadedDocument::Tabular {
                workbook,
                active_sheet,
            })
        }
        Err(e) => {
            // The bytes were retrievable, so keep the escape hatch
            let download_url = object_url::create(&outcome.bytes, Some(declared)).ok();
            Err(PaneFailure {
                message: format!("Failed to read tabular content: {e}."),
                download_url,
            })
        }
    }
}

fn allocate(outcome: &FetchOutcome) -> Result<String, PaneFailure> {
    object_url::create(&outcome.bytes, outcome.declared_type.as_deref()).map_err(|detail| {
        PaneFailure {
            message: format!("Failed to prepare content for display: {detail}."),
            download_url: None,
        }
    })
}

fn fetch_failure(relay: &RelayConfig, error: &FetchError) -> PaneFailure {
    let message = match error {
        FetchError::BlobRead(_) => format!("Failed to load content: {error}."),
        FetchError::NetworkUnreachable { .. } => format!(
            "Failed to load content: {error}. Ensure the relay server is running at {}.",
            relay.base_url()
        ),
    };
    PaneFailure {
        message,
        download_url: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::FetchStrategy;

    fn outcome(bytes: &[u8], declared: Option<&str>) -> FetchOutcome {
        FetchOutcome {
            bytes: bytes.to_vec(),
            declared_type: declared.map(str::to_string),
            strategy: FetchStrategy::RelayProxy,
        }
    }

    #[test]
    fn html_payloads_are_sanitized_before_embedding() {
        let selected = select_presentation(outcome(
            b"<p onclick=\"steal()\">hi</p><script>alert(1)</script><a href=\"http://x\">go</a>",
            Some("text/html"),
        ))
        .unwrap();

        match selected {
            LoadedDocument::Html { markup } => {
                assert!(!markup.contains("script"));
                assert!(!markup.contains("onclick"));
                assert!(markup.contains("hi"));
                assert!(markup.contains("href"));
            }
            other => panic!("unexpected selection: {other:?}"),
        }
    }

    #[test]
    fn csv_payloads_decode_into_the_sheet_model() {
        let selected =
            select_presentation(outcome(b"a,b\n1,2", Some("text/csv"))).unwrap();
        match selected {
            LoadedDocument::Tabular {
                workbook,
                active_sheet,
            } => {
                assert_eq!(active_sheet, "Sheet1");
                assert_eq!(workbook.sheets.len(), 1);
            }
            other => panic!("unexpected selection: {other:?}"),
        }
    }

    #[test]
    fn network_failure_message_names_the_relay() {
        let relay = RelayConfig::default();
        let failure = fetch_failure(
            &relay,
            &FetchError::NetworkUnreachable {
                detail: "HTTP 500".into(),
            },
        );
        assert!(failure.message.contains("http://localhost:5001"));
        assert!(failure.download_url.is_none());
    }
}
