//! Root Application Component
//!
//! The viewer shell: provides the global state, lays out the input
//! controls and the dual-pane comparison view, and wires each pane into
//! its own content pipeline. The shell itself is thin - it only produces
//! references and layout changes; everything content-related happens in
//! the pipeline and pane components.

use leptos::*;

use crate::components::inputs::{ModeSelect, PaneControls, RelaySetting};
use crate::components::split::SplitScreen;
use crate::components::status_bar::StatusBar;
use crate::components::viewer::DocumentPane;
use crate::state::{AppState, PaneSide};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Initialize global state
    let app_state = AppState::new();
    provide_context(app_state);

    view! {
        <main class="h-screen flex flex-col bg-theme-bg text-theme overflow-hidden">
            // Header
            <header class="flex items-center justify-between px-4 py-2 border-b border-theme-border">
                <h1 class="text-lg font-semibold text-theme">"DuoDoc"</h1>
                <div class="flex items-center gap-4">
                    <RelaySetting />
                    <ModeSelect />
                </div>
            </header>

            // Reference inputs, one row per pane
            <div class="flex flex-col gap-2 p-3 bg-theme-bg border-b border-theme-border flex-shrink-0">
                <PaneControls side=PaneSide::Left />
                <PaneControls side=PaneSide::Right />
            </div>

            // Shell-level error banner (distinct from per-pane errors)
            {move || app_state.banner.get().map(|message| view! {
                <div class="mx-3 mt-2 p-2 rounded bg-red-900/30 border border-red-800 text-red-400 text-sm text-center">
                    {message}
                </div>
            })}

            // The comparison view itself
            <SplitScreen
                left=view! { <DocumentPane side=PaneSide::Left /> }.into_view()
                right=view! { <DocumentPane side=PaneSide::Right /> }.into_view()
            />

            <StatusBar />
        </main>
    }
}
