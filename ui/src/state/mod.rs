//! Global State Management
//!
//! This module manages the application state for one viewing session:
//! - The two independent pane states (reference + view state machine)
//! - The dual-pane layout state
//! - The relay configuration (the only persisted preference)
//!
//! Panes share no mutable state with each other; the layout is mutated
//! only by the user's own drag/selection input. Everything except the
//! relay endpoint is discarded when the session ends.

use gloo_storage::{LocalStorage, Storage};
use leptos::*;

use duodoc_shared::{ContentReference, PaneController, RelayConfig, SplitLayout};

/// Local-storage key for the relay endpoint preference
const RELAY_STORAGE_KEY: &str = "duodoc.relay";

/// Which pane a control or pipeline run belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneSide {
    Left,
    Right,
}

impl PaneSide {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// State of one pane: the current reference and the view state machine
#[derive(Clone, Copy)]
pub struct PaneState {
    pub side: PaneSide,

    /// The reference currently assigned to this pane, if any
    pub reference: RwSignal<Option<ContentReference>>,

    /// Single owner of this pane's view state transitions
    pub controller: RwSignal<PaneController>,
}

impl PaneState {
    fn new(side: PaneSide) -> Self {
        Self {
            side,
            reference: create_rw_signal(None),
            controller: create_rw_signal(PaneController::new()),
        }
    }

    /// Assign a new reference, replacing whatever was shown before. A
    /// `None` assignment tears the pane down (the pane component
    /// releases whatever the controller held).
    pub fn assign(&self, reference: Option<ContentReference>) {
        self.reference.set(reference);
    }
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Relay endpoint configuration
    pub relay: RwSignal<RelayConfig>,

    /// Dual-pane layout: split ratio, mode, drag session
    pub layout: RwSignal<SplitLayout>,

    pub left: PaneState,
    pub right: PaneState,

    /// Shell-level error banner (upload failures etc.), distinct from
    /// per-pane errored states
    pub banner: RwSignal<Option<String>>,
}

impl AppState {
    /// Create the app state, restoring the relay preference if present.
    pub fn new() -> Self {
        let relay = LocalStorage::get::<RelayConfig>(RELAY_STORAGE_KEY).unwrap_or_default();
        Self {
            relay: create_rw_signal(relay),
            layout: create_rw_signal(SplitLayout::new()),
            left: PaneState::new(PaneSide::Left),
            right: PaneState::new(PaneSide::Right),
            banner: create_rw_signal(None),
        }
    }

    pub fn pane(&self, side: PaneSide) -> PaneState {
        match side {
            PaneSide::Left => self.left,
            PaneSide::Right => self.right,
        }
    }

    /// Persist the relay endpoint preference.
    pub fn save_preferences(&self) {
        let relay = self.relay.get_untracked();
        if let Err(e) = LocalStorage::set(RELAY_STORAGE_KEY, &relay) {
            tracing::warn!(error = %e, "failed to persist relay preference");
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
