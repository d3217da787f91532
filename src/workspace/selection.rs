//! Ids currently marked for a bulk action.
//!
//! The set does not track which results exist; stale ids stay until the
//! next bulk action clears them.

use crate::domain::ResultId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    // Toggle order is kept so the bulk bar can report ids predictably.
    ids: Vec<ResultId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` if absent, removes it if present.
    pub fn toggle(&mut self, id: ResultId) {
        if let Some(pos) = self.ids.iter().position(|&i| i == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: ResultId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[ResultId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
