//! Document Pane Components
//!
//! One [`DocumentPane`] per side. The pane watches its reference signal,
//! drives the load pipeline, and renders whatever view state the
//! controller is in: a loading placeholder, an errored state with retry
//! and download escape hatches, or the loaded presentation (PDF embed,
//! image, sheet table, sanitized markup, or a download link).

mod html_view;
mod sheet_view;

pub use html_view::HtmlView;
pub use sheet_view::SheetView;

use leptos::*;

use duodoc_shared::{ContentReference, DocumentViewState, LoadedDocument};

use crate::object_url;
use crate::pipeline;
use crate::state::{AppState, PaneSide, PaneState};

/// One independent content slot of the comparison view
#[component]
pub fn DocumentPane(side: PaneSide) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let pane = app_state.pane(side);

    // Re-run the pipeline whenever the pane's reference changes. The
    // pipeline discards outcomes of superseded references on its own. A
    // cleared reference tears the pane down and releases what it held.
    create_effect(move |_| {
        if pane.reference.get().is_some() {
            pipeline::load_pane(app_state.relay.get_untracked(), pane);
        } else if let Some(release) = pane.controller.try_update(|c| c.reset()) {
            object_url::revoke_all(release);
        }
    });

    // Link activations inside embedded markup become navigation intents
    // that stay inside the comparison view: the target loads in this
    // same pane.
    let on_navigate = Callback::new(move |href: String| {
        tracing::info!(pane = side.label(), %href, "navigation intent from embedded markup");
        pane.assign(ContentReference::parse(&href));
    });

    view! {
        <div class="h-full w-full overflow-auto">
            {move || {
                let Some(reference) = pane.reference.get() else {
                    return view! { <EmptyPane /> }.into_view();
                };
                if let ContentReference::Patent(id) = reference {
                    return view! { <PatentSlot patent_id=id /> }.into_view();
                }

                pane.controller.with(|controller| match controller.state() {
                    DocumentViewState::Idle | DocumentViewState::Loading => {
                        view! { <LoadingPane /> }.into_view()
                    }
                    DocumentViewState::Errored {
                        message,
                        download_url,
                    } => view! {
                        <ErroredPane
                            pane=pane
                            message=message.clone()
                            download_url=download_url.clone()
                        />
                    }
                    .into_view(),
                    DocumentViewState::Loaded(doc) => match doc {
                        LoadedDocument::Pdf { object_url } => view! {
                            <embed
                                src=object_url.clone()
                                type="application/pdf"
                                class="w-full h-full"
                            />
                        }
                        .into_view(),
                        LoadedDocument::Image { object_url } => view! {
                            <img
                                src=object_url.clone()
                                alt="Fetched document"
                                class="max-w-full max-h-full"
                            />
                        }
                        .into_view(),
                        LoadedDocument::Tabular { .. } => view! {
                            <SheetView controller=pane.controller />
                        }
                        .into_view(),
                        LoadedDocument::Html { markup } => view! {
                            <HtmlView markup=markup.clone() on_navigate=on_navigate />
                        }
                        .into_view(),
                        LoadedDocument::Download {
                            object_url,
                            message,
                        } => view! {
                            <DownloadPane
                                object_url=object_url.clone()
                                message=message.clone()
                            />
                        }
                        .into_view(),
                    },
                })
            }}
        </div>
    }
}

/// Hint shown before a pane has any reference
#[component]
fn EmptyPane() -> impl IntoView {
    view! {
        <div class="h-full flex items-center justify-center p-6 text-theme-muted text-center">
            <p>"Enter a URL, upload a file, or enter a patent number to view content"</p>
        </div>
    }
}

/// Placeholder while a fetch/decode is outstanding
#[component]
fn LoadingPane() -> impl IntoView {
    view! {
        <div class="h-full flex items-center justify-center p-6 text-theme-muted text-center">
            <p>"Loading content, please wait..."</p>
        </div>
    }
}

/// Errored state: message, manual retry, and a download link whenever
/// the bytes were still retrievable
#[component]
fn ErroredPane(
    pane: PaneState,
    message: String,
    download_url: Option<String>,
) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let retry = move |_| {
        pipeline::load_pane(app_state.relay.get_untracked(), pane);
    };

    view! {
        <div class="m-4 p-3 rounded-lg bg-red-900/30 border border-red-800 text-red-400 text-sm text-center">
            <p>{message}</p>
            {download_url.map(|url| view! {
                <a href=url download="" class="text-accent hover:text-accent/80 mr-3">
                    "Download File"
                </a>
            })}
            <button
                class="px-3 py-1 mt-2 rounded bg-theme-surface hover:bg-theme-surface-hover text-theme-secondary"
                on:click=retry
            >
                "Reload"
            </button>
        </div>
    }
}

/// Recognized but non-renderable payload: retrieval link only
#[component]
fn DownloadPane(object_url: String, message: String) -> impl IntoView {
    view! {
        <div class="h-full flex flex-col items-center justify-center p-6 text-center">
            <p class="text-theme-secondary mb-3">{message}</p>
            <a href=object_url download="" class="text-accent hover:text-accent/80">
                "Download File"
            </a>
        </div>
    }
}

/// Delegation slot for symbolic patent tokens. Resolution belongs to the
/// external patent collaborator; this core only recognizes the prefix.
#[component]
fn PatentSlot(patent_id: String) -> impl IntoView {
    view! {
        <div class="h-full flex flex-col items-center justify-center p-6 text-center">
            <h3 class="text-lg font-medium text-theme mb-2">
                "Patent " {patent_id}
            </h3>
            <p class="text-sm text-theme-secondary max-w-xs">
                "Patent documents are resolved by the patent data service."
            </p>
        </div>
    }
}
