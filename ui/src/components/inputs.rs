//! Reference Input Controls
//!
//! The shell's input row: per-pane URL input, file upload, patent token
//! input, plus the display mode selector and the relay endpoint setting.
//! These controls only produce references and layout changes; all
//! content handling happens in the pipeline.

use leptos::*;
use web_sys::HtmlInputElement;

use duodoc_shared::{ContentReference, SplitMode};

use crate::client;
use crate::state::{AppState, PaneSide};

/// Input row for one pane: URL, file upload, patent token
#[component]
pub fn PaneControls(side: PaneSide) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let pane = app_state.pane(side);

    let (url_input, set_url_input) = create_signal(String::new());
    let (patent_input, set_patent_input) = create_signal(String::new());
    let (selected_file, set_selected_file) = create_signal(Option::<web_sys::File>::None);
    let (uploading, set_uploading) = create_signal(false);

    let load_url = move |_| {
        pane.assign(ContentReference::parse(&url_input.get_untracked()));
    };

    let on_file_change = move |e: ev::Event| {
        let input: HtmlInputElement = event_target(&e);
        set_selected_file.set(input.files().and_then(|files| files.get(0)));
    };

    let upload = move |_| {
        let Some(file) = selected_file.get_untracked() else {
            app_state.banner.set(Some("No file selected".to_string()));
            return;
        };
        set_uploading.set(true);
        app_state.banner.set(None);
        spawn_local(async move {
            let relay = app_state.relay.get_untracked();
            match client::upload_file(&relay, file).await {
                Ok(url) => {
                    pane.assign(ContentReference::parse(&url));
                }
                Err(e) => {
                    tracing::warn!(pane = side.label(), error = %e, "upload failed");
                    app_state
                        .banner
                        .set(Some(format!("Failed to process file: {e}")));
                }
            }
            set_uploading.set(false);
        });
    };

    let fetch_patent = move |_| {
        let number = patent_input.get_untracked().trim().to_string();
        if number.is_empty() {
            return;
        }
        pane.assign(ContentReference::parse(&format!("patent:{number}")));
    };

    view! {
        <div class="flex items-center gap-2 flex-wrap">
            <input
                type="text"
                class="flex-1 px-3 py-2 text-sm rounded bg-theme-surface border border-theme-border text-theme placeholder:text-theme-muted focus:outline-none focus:ring-1 focus:ring-accent"
                placeholder=move || format!("Enter {} URL", side.label())
                prop:value=move || url_input.get()
                on:input=move |e| set_url_input.set(event_target_value(&e))
            />
            <button class="btn-primary text-sm" on:click=load_url>
                "Load"
            </button>

            <input
                type="file"
                class="text-sm text-theme-secondary"
                on:change=on_file_change
            />
            <button
                class="btn-primary text-sm"
                disabled=move || selected_file.get().is_none() || uploading.get()
                on:click=upload
            >
                {move || if uploading.get() { "Uploading..." } else { "Upload File" }}
            </button>

            <input
                type="text"
                class="w-44 px-3 py-2 text-sm rounded bg-theme-surface border border-theme-border text-theme placeholder:text-theme-muted focus:outline-none focus:ring-1 focus:ring-accent"
                placeholder="Enter patent number"
                prop:value=move || patent_input.get()
                on:input=move |e| set_patent_input.set(event_target_value(&e))
            />
            <button class="btn-primary text-sm" on:click=fetch_patent>
                "Fetch Patent"
            </button>
        </div>
    }
}

/// Tri-state display mode selector
#[component]
pub fn ModeSelect() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let layout = app_state.layout;

    view! {
        <select
            class="px-2 py-1 text-sm rounded bg-theme-surface border border-theme-border text-theme focus:outline-none focus:ring-1 focus:ring-accent"
            on:change=move |e| {
                let mode = match event_target_value(&e).as_str() {
                    "left" => SplitMode::LeftOnly,
                    "right" => SplitMode::RightOnly,
                    _ => SplitMode::Both,
                };
                layout.update(|l| l.set_mode(mode));
            }
        >
            <option value="both" selected=move || layout.with(|l| l.mode() == SplitMode::Both)>
                "Both Screen"
            </option>
            <option value="left" selected=move || layout.with(|l| l.mode() == SplitMode::LeftOnly)>
                "Left Screen"
            </option>
            <option value="right" selected=move || layout.with(|l| l.mode() == SplitMode::RightOnly)>
                "Right Screen"
            </option>
        </select>
    }
}

/// Relay endpoint setting, persisted as a preference
#[component]
pub fn RelaySetting() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let (relay_input, set_relay_input) =
        create_signal(app_state.relay.get_untracked().base_url().to_string());

    let apply = move |_| {
        let url = relay_input.get_untracked();
        if url.trim().is_empty() {
            return;
        }
        app_state
            .relay
            .set(duodoc_shared::RelayConfig::new(&url));
        app_state.save_preferences();
    };

    view! {
        <div class="flex items-center gap-2">
            <label class="text-xs text-theme-muted">"Relay:"</label>
            <input
                type="text"
                class="w-56 px-2 py-1 text-xs rounded bg-theme-surface border border-theme-border text-theme focus:outline-none focus:ring-1 focus:ring-accent"
                prop:value=move || relay_input.get()
                on:input=move |e| set_relay_input.set(event_target_value(&e))
            />
            <button
                class="px-2 py-1 text-xs rounded bg-theme-surface hover:bg-theme-surface-hover text-theme-secondary"
                on:click=apply
            >
                "Apply"
            </button>
        </div>
    }
}
