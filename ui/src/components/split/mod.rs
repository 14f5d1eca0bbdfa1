//! Split Screen Component
//!
//! The dual-pane layout engine's DOM side. Owns the two content slots and
//! the draggable divider; all sizing decisions live in
//! [`duodoc_shared::SplitLayout`]. Pointer moves are tracked at the
//! window level so a drag session survives the pointer leaving the
//! divider's narrow hit area.

use leptos::wasm_bindgen::JsCast;
use leptos::*;
use web_sys::MouseEvent;

use crate::state::AppState;

/// Resizable two-pane container with a draggable divider
#[component]
pub fn SplitScreen(left: View, right: View) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let layout = app_state.layout;
    let container_ref = create_node_ref::<html::Div>();

    let on_divider_down = move |e: MouseEvent| {
        e.prevent_default();
        layout.update(|l| {
            l.begin_drag();
        });
    };

    // Window-level drag tracking, registered once for the component's
    // lifetime. The move handler is a no-op outside a drag session.
    create_effect(move |registered: Option<bool>| {
        if registered == Some(true) {
            return true;
        }

        let on_move = wasm_bindgen::closure::Closure::wrap(Box::new(move |e: MouseEvent| {
            if !layout.with_untracked(|l| l.is_dragging()) {
                return;
            }
            let Some(container) = container_ref.get_untracked() else {
                return;
            };
            let rect = container.get_bounding_client_rect();
            layout.update(|l| l.drag_to(e.client_x() as f64, rect.left(), rect.width()));
        }) as Box<dyn FnMut(MouseEvent)>);

        let on_up = wasm_bindgen::closure::Closure::wrap(Box::new(move |_: MouseEvent| {
            if layout.with_untracked(|l| l.is_dragging()) {
                layout.update(|l| l.end_drag());
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        let window = web_sys::window().unwrap();
        window
            .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
            .unwrap();
        window
            .add_event_listener_with_callback("mouseup", on_up.as_ref().unchecked_ref())
            .unwrap();
        on_move.forget();
        on_up.forget();

        true
    });

    view! {
        <div
            node_ref=container_ref
            class="relative flex flex-1 h-full overflow-hidden"
        >
            // Left pane
            <div
                class="h-full overflow-auto border border-theme-border bg-theme-surface"
                style=move || {
                    layout.with(|l| format!(
                        "width: {}%; display: {};",
                        l.left_width_pct(),
                        if l.left_visible() { "block" } else { "none" }
                    ))
                }
            >
                {left}
            </div>

            // Divider (hidden whenever a single pane fills the view)
            <Show when=move || layout.with(|l| l.divider_visible())>
                <div
                    class="absolute top-0 bottom-0 w-1 -translate-x-1/2 cursor-col-resize bg-theme-border hover:bg-accent z-10"
                    style=move || format!("left: {}%;", layout.with(|l| l.ratio()))
                    on:mousedown=on_divider_down
                />
            </Show>

            // Right pane
            <div
                class="h-full overflow-auto border border-theme-border bg-theme-surface"
                style=move || {
                    layout.with(|l| format!(
                        "width: {}%; display: {};",
                        l.right_width_pct(),
                        if l.right_visible() { "block" } else { "none" }
                    ))
                }
            >
                {right}
            </div>
        </div>
    }
}
