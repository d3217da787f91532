//! Actions applied to every selected result.

use std::collections::HashSet;

use crate::domain::ResultId;
use crate::error::AppError;
use crate::io::Gateway;
use crate::workspace::{actions, Notice, StateHandle};

/// Hides the selected rows locally and clears the selection.
///
/// Nothing is deleted remotely: the next refresh brings the rows back.
pub fn delete_selected<S>(state: &S) -> usize
where
    S: StateHandle + ?Sized,
{
    state.update(|ws| {
        let ids: HashSet<ResultId> = ws.selection.ids().iter().copied().collect();
        let removed = ws.repository.remove(&ids);
        ws.selection.clear();
        tracing::info!("[BULK] Hid {} of {} selected results", removed, ids.len());
        removed
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemOutcome {
    Reanalyzed { id: ResultId, url: String },
    Failed { id: ResultId, error: AppError },
}

impl ItemOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ItemOutcome::Reanalyzed { .. })
    }
}

/// Per-item record of one reanalysis sweep.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReanalyzeReport {
    /// In submission order.
    pub outcomes: Vec<ItemOutcome>,
    /// Selected ids that no longer resolved against the collection.
    pub skipped: usize,
    /// Whether the closing refresh succeeded.
    pub refreshed: bool,
}

impl ReanalyzeReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn summary(&self) -> String {
        format!(
            "Reanalyzed {}, {} failed, {} skipped",
            self.succeeded(),
            self.failed(),
            self.skipped
        )
    }
}

/// Re-submits every selected result, one request at a time.
///
/// Targets are resolved against the collection as it is when the sweep
/// starts, in collection order; stale ids are skipped. A failed item is
/// reported and the sweep moves on. Afterwards the selection is cleared
/// and the collection refreshed exactly once.
pub async fn reanalyze_selected<S, G>(state: &S, gateway: &G) -> ReanalyzeReport
where
    S: StateHandle + ?Sized,
    G: Gateway + ?Sized,
{
    let (targets, skipped) = state.update(|ws| {
        let targets: Vec<(ResultId, String)> = ws
            .repository
            .results()
            .iter()
            .filter_map(|r| {
                r.id.filter(|id| ws.selection.contains(*id))
                    .map(|id| (id, r.url.clone()))
            })
            .collect();
        let skipped = ws.selection.len().saturating_sub(targets.len());
        (targets, skipped)
    });

    tracing::info!(
        "[BULK] Reanalyzing {} results ({} stale ids skipped)",
        targets.len(),
        skipped
    );

    let mut report = ReanalyzeReport {
        skipped,
        ..Default::default()
    };

    for (id, url) in targets {
        let outcome = match gateway.analyze(&url).await {
            Ok(_) => {
                tracing::debug!("[BULK] Reanalyzed {}", url);
                ItemOutcome::Reanalyzed { id, url }
            }
            Err(err) => {
                let error = AppError::reanalyze_item(&url, &err);
                tracing::warn!("[BULK] {}", error);
                state.update(|ws| ws.notices.report(&error));
                ItemOutcome::Failed { id, error }
            }
        };
        report.outcomes.push(outcome);
    }

    state.update(|ws| ws.selection.clear());
    report.refreshed = actions::refresh(state, gateway).await.is_ok();

    let summary = report.summary();
    tracing::info!("[BULK] {}", summary);
    state.update(|ws| ws.notices.push(Notice::info(summary)));
    report
}
