//! Core types for smartplan.
//!
//! - `team` / `selection` / `availability` for finding common meeting slots
//! - `meeting`, `task`, `note`, `dates` for the workspace contents
//! - `config` / `store` for configuration and UI preferences

pub mod availability;
pub mod config;
pub mod dates;
pub mod error;
pub mod meeting;
pub mod note;
pub mod selection;
pub mod store;
pub mod task;
pub mod team;
pub mod theme;
pub mod workspace;

pub use availability::{SlotSuggestion, find_common_slots};
pub use error::{PlanError, PlanResult};
pub use selection::MemberSelection;
pub use team::{DayAvailability, Roster, TeamMember};
