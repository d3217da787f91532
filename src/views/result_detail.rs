use dioxus::prelude::*;

use crate::domain::AnalysisResult;
use crate::views::Route;
use crate::workspace::projector::{RingGeometry, NO_BROKEN_LINKS, NO_LINKS};
use crate::workspace::{project, BrokenLinkListing, DetailScreen, ViewNavigator};

#[component]
pub fn ResultDetail() -> Element {
    let mut navigator = use_context::<Signal<ViewNavigator>>();
    let router = use_navigator();

    // Covers detail reached by address rather than by a row click.
    use_effect(move || navigator.with_mut(ViewNavigator::enter_detail_directly));

    let payload = match navigator.read().detail() {
        DetailScreen::Result(result) => Some(result.clone()),
        DetailScreen::NoResult => None,
    };

    let back = move |_: MouseEvent| {
        navigator.write().back();
        router.push(Route::ResultList {});
    };

    let Some(result) = payload else {
        return rsx! {
            div {
                class: "w-full max-w-2xl space-y-6 bg-card",
                p { "No result data provided. Please go back and select a result." }
                button {
                    class: "border border-border px-4 py-2 rounded-lg",
                    onclick: back,
                    "⬅ Back"
                }
            }
        };
    };

    rsx! {
        div {
            class: "w-full max-w-2xl space-y-6 bg-card",
            h2 { class: "text-2xl font-semibold", "{result.title}" }
            button {
                class: "border border-border px-4 py-2 rounded-lg",
                onclick: back,
                "⬅ Back"
            }
            DetailBody { result }
        }
    }
}

#[component]
fn DetailBody(result: AnalysisResult) -> Element {
    let projection = project(&result);
    let distribution = projection.distribution;
    let segments = distribution.segments(RingGeometry::default());
    let legend: Vec<(String, &'static str)> = distribution
        .slices()
        .iter()
        .map(|slice| {
            let share = distribution.share(slice);
            (
                format!("{}: {} ({:.0}%)", slice.label, slice.value, share),
                slice.color,
            )
        })
        .collect();

    rsx! {
        div {
            class: "mt-5",
            style: "max-width: 300px",
            if segments.is_empty() {
                p { class: "text-muted-foreground", "{NO_LINKS}" }
            } else {
                svg {
                    width: "200",
                    height: "200",
                    view_box: "0 0 200 200",
                    for segment in segments {
                        path {
                            key: "{segment.label}",
                            d: "{segment.path}",
                            fill: "{segment.color}",
                            stroke: "#ffffff",
                            stroke_width: "1",
                        }
                    }
                }
            }
            ul {
                class: "mt-2",
                for (text, color) in legend {
                    li {
                        key: "{color}",
                        span { style: "color: {color}", "■ " }
                        "{text}"
                    }
                }
            }
        }

        h3 { class: "text-xl font-medium mt-8", "Broken Links" }
        {
            match projection.broken_links {
                BrokenLinkListing::Empty => rsx! {
                    p { "{NO_BROKEN_LINKS}" }
                },
                BrokenLinkListing::Links(links) => rsx! {
                    ul {
                        for (idx, link) in links.iter().enumerate() {
                            li {
                                key: "{idx}",
                                "{link.url} → "
                                strong { "{link.status}" }
                            }
                        }
                    }
                },
            }
        }
    }
}
