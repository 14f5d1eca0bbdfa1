//! Sheet Table View
//!
//! Renders the active worksheet of a tabular pane: a worksheet selector
//! on top and the normalized sheet table below. Switching the worksheet
//! is a pure state mutation on the pane controller, with no re-fetch.

use leptos::*;

use duodoc_shared::{DocumentViewState, LoadedDocument, PaneController, Sheet};

/// Worksheet selector plus table rendering for a tabular pane
#[component]
pub fn SheetView(controller: RwSignal<PaneController>) -> impl IntoView {
    // Snapshot of (sheet names, active name, active sheet) for rendering
    let snapshot = move || {
        controller.with(|c| match c.state() {
            DocumentViewState::Loaded(LoadedDocument::Tabular {
                workbook,
                active_sheet,
            }) => {
                let names: Vec<String> =
                    workbook.sheets.iter().map(|s| s.name.clone()).collect();
                let sheet = workbook.sheet(active_sheet).cloned();
                Some((names, active_sheet.clone(), sheet))
            }
            _ => None,
        })
    };

    view! {
        {move || {
            let Some((names, active, sheet)) = snapshot() else {
                return view! {}.into_view();
            };
            view! {
                <div class="h-full w-full flex flex-col bg-theme-surface">
                    // Worksheet selector
                    <div class="p-2 text-center border-b border-theme-border bg-theme-bg flex-shrink-0">
                        <select
                            class="px-2 py-1 text-sm rounded bg-theme-surface border border-theme-border text-theme focus:outline-none focus:ring-1 focus:ring-accent"
                            on:change=move |e| {
                                let name = event_target_value(&e);
                                controller.update(|c| {
                                    c.set_active_sheet(&name);
                                });
                            }
                        >
                            {names.iter().map(|name| {
                                let name = name.clone();
                                let selected = name == active;
                                view! {
                                    <option value=name.clone() selected=selected>
                                        {name.clone()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    // Active worksheet
                    <div class="flex-1 overflow-auto">
                        {sheet.map(|sheet| view! { <SheetTableView sheet=sheet /> })}
                    </div>
                </div>
            }
            .into_view()
        }}
    }
}

/// Plain table rendering of one worksheet
#[component]
fn SheetTableView(sheet: Sheet) -> impl IntoView {
    let columns = sheet.table.columns.clone();
    let header_columns = columns.clone();

    view! {
        <table class="w-full text-sm border-collapse">
            <thead class="sticky top-0 bg-accent text-white text-left z-10">
                <tr>
                    {header_columns.iter().map(|column| {
                        view! {
                            <th class="px-3 py-2 font-bold border border-theme-border whitespace-nowrap">
                                {column.display_name.clone()}
                            </th>
                        }
                    }).collect_view()}
                </tr>
            </thead>
            <tbody>
                {sheet.table.rows.iter().enumerate().map(|(index, row)| {
                    let class = if index % 2 == 0 {
                        "bg-theme-surface-alt"
                    } else {
                        "bg-theme-surface"
                    };
                    view! {
                        <tr class=class>
                            {columns.iter().map(|column| {
                                let value = row.get(&column.key).cloned().unwrap_or_default();
                                view! {
                                    <td
                                        class="px-3 py-2 border border-theme-border whitespace-pre-wrap max-w-xs overflow-hidden text-ellipsis"
                                        title=value.clone()
                                    >
                                        {value}
                                    </td>
                                }
                            }).collect_view()}
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
    }
}
