//! The set of team members picked for a meeting.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Selected member ids. Owned by the caller and changed one toggle at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSelection {
    ids: BTreeSet<String>,
}

impl MemberSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent, remove it if present. Returns whether it is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn select(&mut self, id: &str) {
        self.ids.insert(id.to_string());
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for MemberSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        MemberSelection {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}
