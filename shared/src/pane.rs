//! Per-pane view state machine
//!
//! Each pane owns one [`PaneController`]: the single owner of that pane's
//! [`DocumentViewState`] transitions. The controller also does the
//! bookkeeping the browser layer needs but cannot decide on its own:
//!
//! - **Last-reference-wins.** Every load bumps a generation token; an
//!   outcome is applied only if its token still matches, so a fetch that
//!   completes after a newer request has started for the same pane is
//!   discarded instead of clobbering fresher content.
//! - **Object-URL accounting.** States that embed fetched bytes hold
//!   transient object URLs. Whenever a state is torn down (new load,
//!   stale outcome, reset) the controller hands the URLs back to the
//!   caller for revocation.
//!
//! Panes are fully independent; controllers are never shared.

use crate::content_type::RenderCategory;
use crate::table::Workbook;

/// A loaded document, ready for presentation
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedDocument {
    Pdf {
        object_url: String,
    },
    Image {
        object_url: String,
    },
    Tabular {
        workbook: Workbook,
        /// Name of the worksheet currently shown; defaults to the first
        active_sheet: String,
    },
    Html {
        /// Sanitized markup for structural embedding
        markup: String,
    },
    Download {
        object_url: String,
        message: String,
    },
}

impl LoadedDocument {
    pub fn category(&self) -> RenderCategory {
        match self {
            Self::Pdf { .. } => RenderCategory::Pdf,
            Self::Image { .. } => RenderCategory::Image,
            Self::Tabular { .. } => RenderCategory::Tabular,
            Self::Html { .. } => RenderCategory::Html,
            Self::Download { .. } => RenderCategory::Download,
        }
    }

    fn object_urls(&self) -> Vec<String> {
        match self {
            Self::Pdf { object_url }
            | Self::Image { object_url }
            | Self::Download { object_url, .. } => vec![object_url.clone()],
            Self::Tabular { .. } | Self::Html { .. } => Vec::new(),
        }
    }
}

/// Failure surfaced at the pane boundary
#[derive(Debug, Clone, PartialEq)]
pub struct PaneFailure {
    /// Human-readable message
    pub message: String,
    /// Offered when the underlying bytes were still retrievable
    pub download_url: Option<String>,
}

/// View state of one pane
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DocumentViewState {
    #[default]
    Idle,
    Loading,
    Loaded(LoadedDocument),
    Errored {
        message: String,
        download_url: Option<String>,
    },
}

impl DocumentViewState {
    /// Category for status display; errored panes report
    /// [`RenderCategory::Error`].
    pub fn category(&self) -> Option<RenderCategory> {
        match self {
            Self::Idle | Self::Loading => None,
            Self::Loaded(doc) => Some(doc.category()),
            Self::Errored { .. } => Some(RenderCategory::Error),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    fn object_urls(&self) -> Vec<String> {
        match self {
            Self::Idle | Self::Loading => Vec::new(),
            Self::Loaded(doc) => doc.object_urls(),
            Self::Errored { download_url, .. } => download_url.clone().into_iter().collect(),
        }
    }
}

/// Result of applying an asynchronous outcome to a pane
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyResult {
    /// The outcome belonged to the pane's current load and was applied
    Applied,
    /// A newer load had already started; the outcome was discarded and
    /// any object URLs it carried must be revoked
    Stale { release: Vec<String> },
}

/// Single owner of one pane's view state transitions
#[derive(Debug, Clone, Default)]
pub struct PaneController {
    generation: u64,
    state: DocumentViewState,
}

impl PaneController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DocumentViewState {
        &self.state
    }

    /// Enter `Loading` for a new reference. Clears all prior payload
    /// state and returns the load's generation token together with the
    /// object URLs the previous state held, which the caller must revoke.
    pub fn begin_load(&mut self) -> (u64, Vec<String>) {
        let release = self.state.object_urls();
        self.generation += 1;
        self.state = DocumentViewState::Loading;
        (self.generation, release)
    }

    /// Apply the outcome of the load identified by `generation`.
    pub fn apply(
        &mut self,
        generation: u64,
        outcome: Result<LoadedDocument, PaneFailure>,
    ) -> ApplyResult {
        if generation != self.generation {
            let release = match outcome {
                Ok(doc) => doc.object_urls(),
                Err(failure) => failure.download_url.into_iter().collect(),
            };
            return ApplyResult::Stale { release };
        }
        self.state = match outcome {
            Ok(doc) => DocumentViewState::Loaded(doc),
            Err(failure) => DocumentViewState::Errored {
                message: failure.message,
                download_url: failure.download_url,
            },
        };
        ApplyResult::Applied
    }

    /// Switch the worksheet shown by a tabular pane. Pure state mutation,
    /// no re-fetch. Returns false when the pane is not tabular or the
    /// name is unknown.
    pub fn set_active_sheet(&mut self, name: &str) -> bool {
        if let DocumentViewState::Loaded(LoadedDocument::Tabular {
            workbook,
            active_sheet,
        }) = &mut self.state
        {
            if workbook.sheet(name).is_some() {
                *active_sheet = name.to_string();
                return true;
            }
        }
        false
    }

    /// Return to `Idle` (reference cleared or pane unmounted), releasing
    /// any held object URLs.
    pub fn reset(&mut self) -> Vec<String> {
        let release = self.state.object_urls();
        self.generation += 1;
        self.state = DocumentViewState::Idle;
        release
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Sheet, SheetTable};

    fn workbook(names: &[&str]) -> Workbook {
        Workbook {
            sheets: names
                .iter()
                .map(|name| Sheet {
                    name: name.to_string(),
                    table: SheetTable::default(),
                })
                .collect(),
        }
    }

    fn pdf(url: &str) -> LoadedDocument {
        LoadedDocument::Pdf {
            object_url: url.to_string(),
        }
    }

    #[test]
    fn begin_load_clears_prior_payload_and_releases_urls() {
        let mut pane = PaneController::new();
        let (generation, _) = pane.begin_load();
        assert_eq!(pane.apply(generation, Ok(pdf("blob:a"))), ApplyResult::Applied);

        let (_, release) = pane.begin_load();
        assert_eq!(release, vec!["blob:a".to_string()]);
        assert!(pane.state().is_loading());
    }

    #[test]
    fn stale_outcome_is_discarded_and_its_urls_surfaced() {
        let mut pane = PaneController::new();
        let (first, _) = pane.begin_load();
        let (second, _) = pane.begin_load();

        // Outcome A arrives after B's load has started: must not apply.
        let result = pane.apply(first, Ok(pdf("blob:late")));
        assert_eq!(
            result,
            ApplyResult::Stale {
                release: vec!["blob:late".to_string()]
            }
        );
        assert!(pane.state().is_loading());

        // Only B's outcome is shown.
        assert_eq!(pane.apply(second, Ok(pdf("blob:current"))), ApplyResult::Applied);
        assert_eq!(
            pane.state().category(),
            Some(crate::content_type::RenderCategory::Pdf)
        );
    }

    #[test]
    fn stale_failure_surfaces_its_download_url() {
        let mut pane = PaneController::new();
        let (first, _) = pane.begin_load();
        let (_second, _) = pane.begin_load();

        let result = pane.apply(
            first,
            Err(PaneFailure {
                message: "gone".into(),
                download_url: Some("blob:fallback".into()),
            }),
        );
        assert_eq!(
            result,
            ApplyResult::Stale {
                release: vec!["blob:fallback".to_string()]
            }
        );
    }

    #[test]
    fn errored_state_reports_the_error_category_and_keeps_the_escape_hatch() {
        let mut pane = PaneController::new();
        let (generation, _) = pane.begin_load();
        pane.apply(
            generation,
            Err(PaneFailure {
                message: "Failed to load content".into(),
                download_url: Some("blob:bytes".into()),
            }),
        );

        assert_eq!(
            pane.state().category(),
            Some(crate::content_type::RenderCategory::Error)
        );
        match pane.state() {
            DocumentViewState::Errored { download_url, .. } => {
                assert_eq!(download_url.as_deref(), Some("blob:bytes"));
            }
            other => panic!("unexpected state: {other:?}"),
        }

        // Retrying the same reference re-enters Loading and releases the
        // fallback URL.
        let (_, release) = pane.begin_load();
        assert_eq!(release, vec!["blob:bytes".to_string()]);
    }

    #[test]
    fn sheet_switching_is_a_pure_state_mutation() {
        let mut pane = PaneController::new();
        let (generation, _) = pane.begin_load();
        pane.apply(
            generation,
            Ok(LoadedDocument::Tabular {
                workbook: workbook(&["First", "Second"]),
                active_sheet: "First".into(),
            }),
        );

        assert!(pane.set_active_sheet("Second"));
        assert!(!pane.set_active_sheet("Missing"));
        match pane.state() {
            DocumentViewState::Loaded(LoadedDocument::Tabular { active_sheet, .. }) => {
                assert_eq!(active_sheet, "Second");
            }
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn sheet_switching_outside_tabular_is_rejected() {
        let mut pane = PaneController::new();
        assert!(!pane.set_active_sheet("Sheet1"));
    }

    #[test]
    fn reset_releases_everything_and_invalidates_inflight_loads() {
        let mut pane = PaneController::new();
        let (generation, _) = pane.begin_load();
        pane.apply(generation, Ok(pdf("blob:doc")));

        let (in_flight, _) = pane.begin_load();
        let release = pane.reset();
        assert_eq!(release, Vec::<String>::new());
        assert_eq!(pane.state(), &DocumentViewState::Idle);

        // An outcome from before the reset is stale.
        assert!(matches!(
            pane.apply(in_flight, Ok(pdf("blob:late"))),
            ApplyResult::Stale { .. }
        ));
    }
}
