//! Dioxus views over the result workspace.
//!
//! Shared state is injected through context, never module globals:
//! - `Signal<WorkspaceState>`: collection, selection and notices
//! - `Signal<ViewNavigator>`: list/detail handoff
//! - `HttpGateway`: provided by the launcher

mod latest_result;
mod notice_banner;
mod result_detail;
mod result_list;

use std::future::Future;

use dioxus::prelude::*;

use crate::workspace::{StateHandle, ViewNavigator, WorkspaceState};

pub use latest_result::LatestResultCard;
pub use notice_banner::NoticeBanner;
pub use result_detail::ResultDetail;
pub use result_list::{ResultList, ResultRow};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    ResultList {},
    #[route("/detail")]
    ResultDetail {},
}

impl StateHandle for Signal<WorkspaceState> {
    fn update<R>(&self, f: impl FnOnce(&mut WorkspaceState) -> R) -> R {
        let mut signal = *self;
        signal.with_mut(f)
    }
}

/// Runs a workspace action on the root scope.
///
/// Actions started from the list must finish even when the list unmounts
/// (a row click routes to the detail view mid-sweep), so they are never
/// tied to the scope that started them.
pub(crate) fn run_detached(action: impl Future<Output = ()> + 'static) {
    if spawn_forever(action).is_none() {
        tracing::warn!("[VIEWS] No runtime available, action dropped");
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(WorkspaceState::new()));
    use_context_provider(|| Signal::new(ViewNavigator::new()));

    rsx! {
        div {
            class: "min-h-screen p-8 flex flex-col items-center justify-start",
            NoticeBanner {}
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::result_with_id;
    use crate::test_utils::{GatewayCall, RecordingGateway};
    use crate::workspace;
    use dioxus::dioxus_core::{NoOpMutations, ScopeId, VirtualDom};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;
    use tokio::sync::Notify;

    #[derive(Clone)]
    struct Harness {
        state: Rc<RefCell<WorkspaceState>>,
        gateway: Rc<RecordingGateway>,
        show_list: Rc<Cell<bool>>,
    }

    #[component]
    fn HarnessRoot() -> Element {
        let harness = use_context::<Harness>();
        if harness.show_list.get() {
            rsx! { SweepingList {} }
        } else {
            rsx! {}
        }
    }

    /// Starts a reanalysis sweep on mount, the way the bulk button does.
    #[component]
    fn SweepingList() -> Element {
        let harness = use_context::<Harness>();
        use_hook(move || {
            run_detached(async move {
                workspace::reanalyze_selected(&harness.state, &*harness.gateway).await;
            });
        });
        rsx! { div {} }
    }

    async fn settle(dom: &mut VirtualDom) {
        for _ in 0..10 {
            let _ = tokio::time::timeout(Duration::from_millis(10), dom.wait_for_work()).await;
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    #[tokio::test]
    async fn test_sweep_finishes_after_list_unmounts() {
        let gate = Rc::new(Notify::new());
        let gateway = Rc::new(RecordingGateway::gated(gate.clone()));
        let mut ws = WorkspaceState::new();
        ws.repository.set_all(vec![result_with_id(1), result_with_id(2)]);
        ws.selection.toggle(1);
        ws.selection.toggle(2);
        let harness = Harness {
            state: Rc::new(RefCell::new(ws)),
            gateway: gateway.clone(),
            show_list: Rc::new(Cell::new(true)),
        };

        let mut dom = VirtualDom::new(HarnessRoot).with_root_context(harness.clone());
        dom.rebuild_in_place();
        settle(&mut dom).await;
        assert_eq!(gateway.analyzed_urls(), ["https://site-1.example"]);

        harness.show_list.set(false);
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate(&mut NoOpMutations);

        gate.notify_one();
        settle(&mut dom).await;

        assert_eq!(
            gateway.calls(),
            [
                GatewayCall::Analyze("https://site-1.example".into()),
                GatewayCall::Analyze("https://site-2.example".into()),
                GatewayCall::ListResults,
            ]
        );
        assert!(harness.state.borrow().selection.is_empty());
    }
}
