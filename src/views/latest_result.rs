use dioxus::prelude::*;

use crate::domain::AnalysisResult;

#[component]
pub fn LatestResultCard(result: AnalysisResult) -> Element {
    let login_form = if result.has_login_form { "Yes" } else { "No" };

    rsx! {
        div {
            class: "w-full max-w-2xl space-y-6 bg-card",
            h2 { class: "text-xl font-medium", "Latest Result" }

            div {
                class: "latest-result-card p-4 rounded-lg border border-border space-y-1",
                p { strong { "URL: " } "{result.url}" }
                p { strong { "Title: " } "{result.title}" }
                p { strong { "HTML Version: " } "{result.html_version}" }
                p { strong { "Login Form Detected: " } "{login_form}" }

                div {
                    class: "mt-2",
                    h3 { class: "font-semibold", "Headings Count:" }
                    for (label, count) in result.heading_counts() {
                        p { key: "{label}", "{label}: {count}" }
                    }
                }

                div {
                    class: "mt-2",
                    h3 { class: "font-semibold", "Links:" }
                    p { "Internal: {result.internal_links}" }
                    p { "External: {result.external_links}" }
                }
            }
        }
    }
}
