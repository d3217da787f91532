//! List/detail navigation with a payload carried across one transition.
//!
//! The detail view is hydrated from the result handed over by the list
//! view; nothing is re-fetched by id. Returning to the list drops the
//! payload and leaves a one-shot flag asking the list to refresh.

use crate::domain::AnalysisResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    List,
    Detail,
}

/// What the detail route should render right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailScreen<'a> {
    Result(&'a AnalysisResult),
    /// Degraded state: detail reached without a payload.
    NoResult,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewNavigator {
    view: View,
    payload: Option<AnalysisResult>,
    refresh_on_return: bool,
}

impl ViewNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// List -> Detail carrying the chosen row.
    pub fn open_detail(&mut self, result: AnalysisResult) {
        tracing::debug!("[NAV] Opening detail for {}", result.url);
        self.view = View::Detail;
        self.payload = Some(result);
    }

    /// Detail reached without going through a row (e.g. a typed address).
    pub fn enter_detail_directly(&mut self) {
        if self.view != View::Detail {
            self.view = View::Detail;
            self.payload = None;
        }
    }

    /// Detail -> List. Raises the refresh flag only when a payload was
    /// actually being shown.
    pub fn back(&mut self) {
        if self.view == View::Detail && self.payload.take().is_some() {
            self.refresh_on_return = true;
        }
        self.view = View::List;
        tracing::debug!("[NAV] Back to list (refresh pending: {})", self.refresh_on_return);
    }

    /// The list view mounted, however it was reached (in-app back, browser
    /// history, typed address). Drops any payload still held and returns
    /// whether the list should refresh, consuming the flag.
    pub fn arrive_list(&mut self) -> bool {
        if self.payload.take().is_some() {
            self.refresh_on_return = true;
        }
        self.view = View::List;
        self.take_refresh()
    }

    pub fn detail(&self) -> DetailScreen<'_> {
        match (&self.view, &self.payload) {
            (View::Detail, Some(result)) => DetailScreen::Result(result),
            _ => DetailScreen::NoResult,
        }
    }

    /// Consumes the return-triggered refresh flag.
    pub fn take_refresh(&mut self) -> bool {
        std::mem::take(&mut self.refresh_on_return)
    }
}
