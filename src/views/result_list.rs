use dioxus::prelude::*;

use crate::domain::AnalysisResult;
use crate::io::HttpGateway;
use crate::views::{run_detached, LatestResultCard, Route};
use crate::workspace::{self, ViewNavigator, WorkspaceState};

#[component]
pub fn ResultList() -> Element {
    let state = use_context::<Signal<WorkspaceState>>();
    let mut navigator = use_context::<Signal<ViewNavigator>>();
    let gateway = use_context::<HttpGateway>();
    let mut url = use_signal(String::new);

    // Coming back from a detail view asks for exactly one refresh.
    let refresh_gateway = gateway.clone();
    use_effect(move || {
        if navigator.with_mut(ViewNavigator::arrive_list) {
            let gateway = refresh_gateway.clone();
            run_detached(async move {
                let _ = workspace::refresh(&state, &gateway).await;
            });
        }
    });

    let submit_gateway = gateway.clone();
    let fetch_gateway = gateway.clone();
    let reanalyze_gateway = gateway;

    let latest = state.read().repository.latest().cloned();
    let rows: Vec<(String, AnalysisResult, bool)> = {
        let ws = state.read();
        ws.repository
            .results()
            .iter()
            .enumerate()
            .map(|(idx, r)| {
                let key = row_key(idx, r);
                let selected = r.id.is_some_and(|id| ws.selection.contains(id));
                (key, r.clone(), selected)
            })
            .collect()
    };
    let show_bulk = state.read().bulk_actions_available();

    rsx! {
        div {
            class: "w-full max-w-2xl space-y-6 bg-card",

            h1 {
                class: "text-3xl font-semibold tracking-tight",
                "🔎 URL Analyzer"
            }

            div {
                class: "flex flex-row gap-2 items-center",
                input {
                    class: "w-full px-4 py-2 bg-input text-foreground border border-border rounded-lg focus:outline-none focus:ring-2 focus:ring-ring transition",
                    r#type: "url",
                    placeholder: "Enter a URL (e.g. https://example.com)",
                    value: "{url()}",
                    oninput: move |e| url.set(e.value()),
                }

                button {
                    class: "bg-primary text-primary-foreground px-4 py-2 rounded-lg hover:bg-primary/90 transition",
                    onclick: move |_| {
                        let input = url();
                        let gateway = submit_gateway.clone();
                        run_detached(async move {
                            let _ = workspace::submit(&state, &gateway, &input).await;
                        });
                    },
                    "Analyze"
                }

                button {
                    class: "border border-border px-4 py-2 rounded-lg hover:bg-muted transition",
                    onclick: move |_| {
                        let gateway = fetch_gateway.clone();
                        run_detached(async move {
                            let _ = workspace::refresh(&state, &gateway).await;
                        });
                    },
                    "Fetch All"
                }
            }

            if let Some(result) = latest {
                LatestResultCard { result }
            }

            if show_bulk {
                div {
                    class: "flex flex-row gap-2 mt-4 mb-2",
                    button {
                        class: "bg-red-600 text-white px-4 py-2 rounded-lg hover:bg-red-700 transition",
                        onclick: move |_| {
                            workspace::delete_selected(&state);
                        },
                        "🗑️ Delete Selected"
                    }
                    button {
                        class: "border border-primary text-primary px-4 py-2 rounded-lg hover:bg-primary/10 transition",
                        onclick: move |_| {
                            let gateway = reanalyze_gateway.clone();
                            run_detached(async move {
                                workspace::reanalyze_selected(&state, &gateway).await;
                            });
                        },
                        "🔁 Re-analyze Selected"
                    }
                }
            }

            div {
                class: "mt-4 space-y-2",
                for (key, result, selected) in rows {
                    ResultRow {
                        key: "{key}",
                        result,
                        selected,
                    }
                }
            }
        }
    }
}

/// One listing row: selection checkbox plus a clickable label that opens
/// the detail view with this row as payload.
#[component]
pub fn ResultRow(result: AnalysisResult, selected: bool) -> Element {
    let mut state = use_context::<Signal<WorkspaceState>>();
    let mut navigator = use_context::<Signal<ViewNavigator>>();
    let router = use_navigator();
    let label = result.row_label();
    let id = result.id;

    rsx! {
        div {
            class: "result-box flex flex-row items-center gap-2 p-2 rounded border border-border",

            input {
                r#type: "checkbox",
                checked: selected,
                disabled: id.is_none(),
                onclick: move |e: MouseEvent| e.stop_propagation(),
                onchange: move |_| {
                    if let Some(id) = id {
                        state.write().selection.toggle(id);
                    }
                },
            }

            div {
                class: "cursor-pointer text-primary",
                onclick: move |_| {
                    navigator.write().open_detail(result.clone());
                    router.push(Route::ResultDetail {});
                },
                "{label}"
            }
        }
    }
}

/// Stable key for a listing row: the remote id when there is one, so a
/// row keeps its checkbox state when rows above it are hidden or refreshed.
fn row_key(idx: usize, result: &AnalysisResult) -> String {
    match result.id {
        Some(id) => format!("id-{}", id),
        None => format!("unsaved-{}", idx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::result_with_id;

    #[test]
    fn row_key_follows_id_not_position() {
        let row = result_with_id(7);
        assert_eq!(row_key(0, &row), row_key(3, &row));
        assert_eq!(row_key(0, &row), "id-7");
        assert_ne!(row_key(0, &result_with_id(8)), row_key(0, &row));
    }

    #[test]
    fn unsaved_rows_fall_back_to_position() {
        let row = AnalysisResult::default();
        assert_eq!(row_key(2, &row), "unsaved-2");
    }
}
