//! The workspace document: team, meetings, tasks, notes and important dates.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dates::DateBook;
use crate::error::{PlanError, PlanResult};
use crate::meeting::MeetingBook;
use crate::note::NoteBoard;
use crate::task::TaskList;
use crate::team::Roster;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(default)]
    pub team: Roster,
    #[serde(default)]
    pub meetings: MeetingBook,
    #[serde(default)]
    pub tasks: TaskList,
    #[serde(default)]
    pub notes: NoteBoard,
    #[serde(default)]
    pub dates: DateBook,
}

impl Workspace {
    /// The data a fresh install starts with.
    pub fn seed() -> Self {
        Workspace {
            team: Roster::seed(),
            meetings: MeetingBook::seed(),
            tasks: TaskList::seed(),
            notes: NoteBoard::seed(),
            dates: DateBook::seed(),
        }
    }

    /// Load from `path`, falling back to the seed data if it doesn't exist yet.
    pub fn load(path: &Path) -> PlanResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no workspace file, using seed data");
            return Ok(Workspace::seed());
        }

        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| PlanError::Serialization(format!("{}: {e}", path.display())))
    }

    pub fn save(&self, path: &Path) -> PlanResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| PlanError::Serialization(e.to_string()))?;
        std::fs::write(path, content)?;

        tracing::debug!(path = %path.display(), "saved workspace");
        Ok(())
    }
}
