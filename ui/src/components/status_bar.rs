//! Status Bar Component
//!
//! Bottom status line showing each pane's render category, the current
//! split, and the relay endpoint in use.

use leptos::*;

use duodoc_shared::SplitMode;

use crate::state::{AppState, PaneState};

/// Session status line
#[component]
pub fn StatusBar() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    view! {
        <footer class="h-8 border-t border-theme-border bg-theme-bg flex items-center px-4 text-xs text-theme-muted">
            <div class="flex items-center gap-4">
                <PaneStatus label="Left" pane=app_state.left />
                <PaneStatus label="Right" pane=app_state.right />
            </div>

            // Spacer
            <div class="flex-1" />

            <span>
                {move || app_state.layout.with(|l| match l.mode() {
                    SplitMode::Both => format!("Split {:.0}/{:.0}", l.ratio(), 100.0 - l.ratio()),
                    SplitMode::LeftOnly => "Left only".to_string(),
                    SplitMode::RightOnly => "Right only".to_string(),
                })}
            </span>

            <span class="ml-4">
                {move || app_state.relay.with(|r| r.base_url().to_string())}
            </span>
        </footer>
    }
}

/// Category readout for one pane
#[component]
fn PaneStatus(label: &'static str, pane: PaneState) -> impl IntoView {
    view! {
        <span>
            {label}
            ": "
            {move || {
                pane.controller.with(|c| {
                    c.state()
                        .category()
                        .map(|category| category.label())
                        .unwrap_or(if c.state().is_loading() { "loading" } else { "idle" })
                })
            }}
        </span>
    }
}
