//! Result workspace state and the actions that drive it.
//!
//! State is owned by whoever holds a [`StateHandle`]: a Dioxus signal in
//! the app, a plain `RefCell` in tests. Actions only touch state inside
//! `update` closures, so no borrow is ever held while a gateway call is
//! pending.

pub mod actions;
pub mod bulk;
pub mod navigator;
pub mod notice;
pub mod projector;
pub mod repository;
pub mod selection;

use std::cell::RefCell;
use std::rc::Rc;

pub use actions::{refresh, submit, validate_url};
pub use bulk::{delete_selected, reanalyze_selected, ItemOutcome, ReanalyzeReport};
pub use navigator::{DetailScreen, View, ViewNavigator};
pub use notice::{Notice, NoticeLevel, Notices};
pub use projector::{project, BrokenLinkListing, DetailProjection, LinkDistribution};
pub use repository::ResultRepository;
pub use selection::Selection;

/// Everything the list view owns for its lifetime.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkspaceState {
    pub repository: ResultRepository,
    pub selection: Selection,
    pub notices: Notices,
}

impl WorkspaceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk controls are offered only while something is selected.
    pub fn bulk_actions_available(&self) -> bool {
        !self.selection.is_empty()
    }
}

/// Short-lived mutable access to a [`WorkspaceState`].
pub trait StateHandle {
    fn update<R>(&self, f: impl FnOnce(&mut WorkspaceState) -> R) -> R;
}

impl StateHandle for RefCell<WorkspaceState> {
    fn update<R>(&self, f: impl FnOnce(&mut WorkspaceState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

impl StateHandle for Rc<RefCell<WorkspaceState>> {
    fn update<R>(&self, f: impl FnOnce(&mut WorkspaceState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}
