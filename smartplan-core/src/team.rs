//! Team roster and per-member availability.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};

/// Free slots of one member on one day.
///
/// Both the day and the slots are display labels ("16 янв", "10:00"), not
/// normalized dates. Matching between members is exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub day: String,
    pub slots: Vec<String>,
}

impl DayAvailability {
    pub fn new<S: Into<String>>(day: &str, slots: impl IntoIterator<Item = S>) -> Self {
        DayAvailability {
            day: day.to_string(),
            slots: slots.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    /// Short label shown in place of an avatar
    pub initials: String,
    #[serde(default)]
    pub availability: Vec<DayAvailability>,
}

impl TeamMember {
    /// Slots for `day`, or an empty slice if the member has no entry for it.
    pub fn slots_on(&self, day: &str) -> &[String] {
        self.availability
            .iter()
            .find(|a| a.day == day)
            .map(|a| a.slots.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of free slots across all days.
    pub fn free_slot_count(&self) -> usize {
        self.availability.iter().map(|a| a.slots.len()).sum()
    }
}

/// The full list of team members under consideration for scheduling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

impl Roster {
    pub fn new(members: Vec<TeamMember>) -> Self {
        Roster { members }
    }

    pub fn get(&self, id: &str) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TeamMember> {
        self.members.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Load a roster from a TOML file with `[[members]]` tables.
    pub fn load(path: &Path) -> PlanResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let roster: Roster = toml::from_str(&content)
            .map_err(|e| PlanError::Config(format!("{}: {e}", path.display())))?;

        tracing::debug!(path = %path.display(), members = roster.members.len(), "loaded roster");
        Ok(roster)
    }

    /// The team the planner ships with.
    pub fn seed() -> Self {
        Roster::new(vec![
            TeamMember {
                id: "1".into(),
                name: "Анна Смирнова".into(),
                initials: "АС".into(),
                availability: vec![
                    DayAvailability::new("16 янв", ["10:00", "14:00", "16:00"]),
                    DayAvailability::new("17 янв", ["11:00", "15:00"]),
                ],
            },
            TeamMember {
                id: "2".into(),
                name: "Максим Петров".into(),
                initials: "МП".into(),
                availability: vec![
                    DayAvailability::new("16 янв", ["10:00", "11:00", "14:00"]),
                    DayAvailability::new("17 янв", ["10:00", "14:00", "16:00"]),
                ],
            },
            TeamMember {
                id: "3".into(),
                name: "Елена Иванова".into(),
                initials: "ЕИ".into(),
                availability: vec![
                    DayAvailability::new("16 янв", ["10:00", "14:00"]),
                    DayAvailability::new("17 янв", ["11:00", "15:00", "16:00"]),
                ],
            },
        ])
    }
}
