//! In-memory result collection plus the latest-submission slot.

use std::collections::HashSet;

use crate::domain::{AnalysisResult, ResultId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultRepository {
    results: Vec<AnalysisResult>,
    latest: Option<AnalysisResult>,
}

impl ResultRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the collection wholesale. The latest slot is untouched.
    pub fn set_all(&mut self, results: Vec<AnalysisResult>) {
        tracing::debug!("[REPOSITORY] Replacing collection with {} results", results.len());
        self.results = results;
    }

    /// Removes every entry whose id is in `ids` and returns how many went.
    ///
    /// Entries without an id are never matched.
    pub fn remove(&mut self, ids: &HashSet<ResultId>) -> usize {
        let before = self.results.len();
        self.results
            .retain(|r| r.id.map_or(true, |id| !ids.contains(&id)));
        let removed = before - self.results.len();
        tracing::debug!("[REPOSITORY] Removed {} of {} requested ids", removed, ids.len());
        removed
    }

    pub fn set_latest(&mut self, result: AnalysisResult) {
        self.latest = Some(result);
    }

    pub fn latest(&self) -> Option<&AnalysisResult> {
        self.latest.as_ref()
    }

    pub fn results(&self) -> &[AnalysisResult] {
        &self.results
    }

    pub fn get(&self, id: ResultId) -> Option<&AnalysisResult> {
        self.results.iter().find(|r| r.id == Some(id))
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
