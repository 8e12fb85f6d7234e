//! Colour themes and menu placement.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};

pub const DEFAULT_THEME: &str = "cosmic-purple";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

const fn theme(
    id: &'static str,
    name: &'static str,
    primary: &'static str,
    secondary: &'static str,
    accent: &'static str,
) -> Theme {
    Theme {
        id,
        name,
        primary,
        secondary,
        accent,
    }
}

pub static THEMES: [Theme; 10] = [
    theme("cosmic-purple", "Космический пурпур", "#a855f7", "#7c3aed", "#ec4899"),
    theme("ocean-blue", "Океанский синий", "#0ea5e9", "#0284c7", "#06b6d4"),
    theme("forest-green", "Лесной зелёный", "#22c55e", "#16a34a", "#84cc16"),
    theme("sunset-orange", "Закатный оранж", "#f97316", "#ea580c", "#fb923c"),
    theme("ruby-red", "Рубиновый красный", "#ef4444", "#dc2626", "#f87171"),
    theme("lavender-dream", "Лавандовый сон", "#c084fc", "#a855f7", "#e879f9"),
    theme("mint-fresh", "Свежая мята", "#34d399", "#10b981", "#6ee7b7"),
    theme("golden-hour", "Золотой час", "#fbbf24", "#f59e0b", "#fcd34d"),
    theme("royal-indigo", "Королевский индиго", "#6366f1", "#4f46e5", "#818cf8"),
    theme("cherry-blossom", "Сакура", "#f472b6", "#ec4899", "#f9a8d4"),
];

impl Theme {
    pub fn find(id: &str) -> PlanResult<&'static Theme> {
        THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| PlanError::UnknownTheme(id.to_string()))
    }

    pub fn all() -> &'static [Theme] {
        &THEMES
    }
}

/// Where the navigation menu is docked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuPosition {
    #[default]
    Left,
    Right,
    Top,
    Bottom,
}

impl MenuPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuPosition::Left => "left",
            MenuPosition::Right => "right",
            MenuPosition::Top => "top",
            MenuPosition::Bottom => "bottom",
        }
    }
}

impl fmt::Display for MenuPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuPosition {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(MenuPosition::Left),
            "right" => Ok(MenuPosition::Right),
            "top" => Ok(MenuPosition::Top),
            "bottom" => Ok(MenuPosition::Bottom),
            other => Err(PlanError::Validation(format!(
                "Invalid menu position '{other}'. Expected left, right, top or bottom"
            ))),
        }
    }
}
