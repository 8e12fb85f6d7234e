//! Sticky notes.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PlanError, PlanResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    #[default]
    Purple,
    Blue,
    Green,
    Yellow,
    Pink,
}

impl NoteColor {
    pub const ALL: [NoteColor; 5] = [
        NoteColor::Purple,
        NoteColor::Blue,
        NoteColor::Green,
        NoteColor::Yellow,
        NoteColor::Pink,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteColor::Purple => "purple",
            NoteColor::Blue => "blue",
            NoteColor::Green => "green",
            NoteColor::Yellow => "yellow",
            NoteColor::Pink => "pink",
        }
    }
}

impl fmt::Display for NoteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteColor {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_lowercase();
        NoteColor::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| PlanError::Validation(format!("Unknown note color '{s}'")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub color: NoteColor,
    pub created_at: DateTime<Utc>,
}

impl Note {
    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }
}

/// Notes, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteBoard {
    #[serde(default)]
    notes: Vec<Note>,
}

impl NoteBoard {
    pub fn new(notes: Vec<Note>) -> Self {
        NoteBoard { notes }
    }

    /// Both title and content are required.
    pub fn add(&mut self, title: &str, content: &str, color: NoteColor) -> PlanResult<&Note> {
        if title.trim().is_empty() || content.trim().is_empty() {
            return Err(PlanError::Validation(
                "Note needs both a title and some text".into(),
            ));
        }

        let note = Note {
            id: Uuid::new_v4().to_string(),
            title: title.trim().to_string(),
            content: content.trim().to_string(),
            color,
            created_at: Utc::now(),
        };

        tracing::debug!(id = %note.id, "added note");
        self.notes.insert(0, note);
        Ok(&self.notes[0])
    }

    pub fn delete(&mut self, id: &str) -> PlanResult<Note> {
        let index = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| PlanError::NoteNotFound(id.to_string()))?;

        Ok(self.notes.remove(index))
    }

    /// Case-insensitive match on title or content. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        let needle = query.trim().to_lowercase();
        self.notes.iter().filter(|n| n.matches(&needle)).collect()
    }

    pub fn all(&self) -> &[Note] {
        &self.notes
    }

    pub fn seed() -> Self {
        let at = |d: u32, h: u32, m: u32| {
            Utc.with_ymd_and_hms(2026, 1, d, h, m, 0)
                .single()
                .unwrap_or_default()
        };
        NoteBoard::new(vec![
            Note {
                id: "1".into(),
                title: "Идея для проекта".into(),
                content: "Добавить интеграцию с календарями Google и Outlook для автоматической синхронизации событий".into(),
                color: NoteColor::Purple,
                created_at: at(15, 10, 30),
            },
            Note {
                id: "2".into(),
                title: "Список покупок".into(),
                content: "Молоко, хлеб, яйца, сыр, овощи на неделю".into(),
                color: NoteColor::Green,
                created_at: at(14, 15, 20),
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_puts_newest_first() {
        let mut board = NoteBoard::seed();
        let id = board.add("Звонок", "Перезвонить в 15:00", NoteColor::Blue).unwrap().id.clone();
        assert_eq!(board.all()[0].id, id);
        assert_eq!(board.all().len(), 3);
    }

    #[test]
    fn add_requires_title_and_content() {
        let mut board = NoteBoard::default();
        assert!(matches!(
            board.add("", "text", NoteColor::Purple),
            Err(PlanError::Validation(_))
        ));
        assert!(matches!(
            board.add("title", "  ", NoteColor::Purple),
            Err(PlanError::Validation(_))
        ));
        assert!(board.all().is_empty());
    }

    #[test]
    fn delete_removes_note() {
        let mut board = NoteBoard::seed();
        let removed = board.delete("2").unwrap();
        assert_eq!(removed.title, "Список покупок");
        assert!(matches!(board.delete("2"), Err(PlanError::NoteNotFound(_))));
    }

    #[test]
    fn search_is_case_insensitive() {
        let board = NoteBoard::seed();
        let hits = board.search("GOOGLE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
        assert_eq!(board.search("").len(), 2);
    }

    #[test]
    fn color_parsing() {
        assert_eq!("Pink".parse::<NoteColor>().unwrap(), NoteColor::Pink);
        assert!("orange".parse::<NoteColor>().is_err());
    }
}
