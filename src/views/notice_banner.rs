use dioxus::prelude::*;

use crate::workspace::{NoticeLevel, WorkspaceState};

/// Front-of-queue notice with a dismiss button.
#[component]
pub fn NoticeBanner() -> Element {
    let mut state = use_context::<Signal<WorkspaceState>>();
    let Some(notice) = state.read().notices.current().cloned() else {
        return rsx! {};
    };

    let (class, icon) = match notice.level {
        NoticeLevel::Blocking => (
            "w-full max-w-2xl mb-4 px-4 py-3 rounded-lg border border-red-300 bg-red-50 text-red-800",
            "❌",
        ),
        NoticeLevel::Info => (
            "w-full max-w-2xl mb-4 px-4 py-3 rounded-lg border border-blue-300 bg-blue-50 text-blue-800",
            "ℹ️",
        ),
    };

    rsx! {
        div {
            class: "{class}",
            role: "alert",
            span { "{icon} {notice.message}" }
            button {
                class: "ml-4 underline",
                onclick: move |_| {
                    state.write().notices.dismiss();
                },
                "OK"
            }
        }
    }
}
