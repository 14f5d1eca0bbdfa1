//! Embedded Markup View
//!
//! Structurally embeds markup that was sanitized by the pipeline
//! (scripts and event handlers stripped). Hyperlink activation inside
//! the markup is intercepted and forwarded as a navigation intent so a
//! click can never escape the comparison view.

use leptos::wasm_bindgen::JsCast;
use leptos::*;
use web_sys::MouseEvent;

/// Sanitized-markup pane content with link interception
#[component]
pub fn HtmlView(
    markup: String,
    #[prop(into)] on_navigate: Callback<String>,
) -> impl IntoView {
    let on_click = move |e: MouseEvent| {
        let Some(target) = e.target() else {
            return;
        };
        let Ok(element) = target.dyn_into::<web_sys::Element>() else {
            return;
        };
        // The click may land on a child of the anchor
        if let Ok(Some(anchor)) = element.closest("a") {
            if let Some(anchor) = anchor.dyn_ref::<web_sys::HtmlAnchorElement>() {
                let href = anchor.href();
                if !href.is_empty() {
                    e.prevent_default();
                    on_navigate.call(href);
                }
            }
        }
    };

    view! {
        <div
            class="p-5 overflow-auto max-h-full"
            on:click=on_click
            inner_html=markup
        />
    }
}
