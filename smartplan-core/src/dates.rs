//! Important dates: birthdays, holidays, anniversaries with a countdown.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PlanError, PlanResult};

/// A date this close (in days) or closer is flagged as coming up soon.
pub const SOON_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateKind {
    #[default]
    Birthday,
    Holiday,
    Anniversary,
    Other,
}

impl DateKind {
    pub const ALL: [DateKind; 4] = [
        DateKind::Birthday,
        DateKind::Holiday,
        DateKind::Anniversary,
        DateKind::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateKind::Birthday => "birthday",
            DateKind::Holiday => "holiday",
            DateKind::Anniversary => "anniversary",
            DateKind::Other => "other",
        }
    }
}

impl fmt::Display for DateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateKind {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_lowercase();
        DateKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| {
                PlanError::Validation(format!(
                    "Unknown date kind '{s}'. Expected birthday, holiday, anniversary or other"
                ))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportantDate {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub kind: DateKind,
}

impl ImportantDate {
    /// Whole days from `today` to the date; negative once it has passed.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.date - today).num_days()
    }

    pub fn is_soon(&self, today: NaiveDate) -> bool {
        (0..=SOON_DAYS).contains(&self.days_until(today))
    }
}

/// Important dates, kept in calendar order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBook {
    #[serde(default)]
    dates: Vec<ImportantDate>,
}

impl DateBook {
    pub fn new(mut dates: Vec<ImportantDate>) -> Self {
        dates.sort_by_key(|d| d.date);
        DateBook { dates }
    }

    /// Add a date given as `YYYY-MM-DD`. Both title and date are required.
    pub fn add(&mut self, title: &str, date: &str, kind: DateKind) -> PlanResult<&ImportantDate> {
        let (title, date) = (title.trim(), date.trim());
        if title.is_empty() || date.is_empty() {
            return Err(PlanError::Validation(
                "Important date needs both a title and a date".into(),
            ));
        }

        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
            PlanError::Validation(format!("Invalid date '{date}'. Expected YYYY-MM-DD"))
        })?;

        // After any entries on the same day, so equal dates keep insertion order.
        let index = self.dates.partition_point(|d| d.date <= date);
        self.dates.insert(
            index,
            ImportantDate {
                id: Uuid::new_v4().to_string(),
                title: title.to_string(),
                date,
                kind,
            },
        );

        tracing::debug!(id = %self.dates[index].id, %date, "added important date");
        Ok(&self.dates[index])
    }

    pub fn delete(&mut self, id: &str) -> PlanResult<ImportantDate> {
        let index = self
            .dates
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| PlanError::DateNotFound(id.to_string()))?;

        Ok(self.dates.remove(index))
    }

    pub fn all(&self) -> &[ImportantDate] {
        &self.dates
    }

    /// Dates on or after `today`, nearest first.
    pub fn upcoming(&self, today: NaiveDate) -> Vec<&ImportantDate> {
        self.dates.iter().filter(|d| d.date >= today).collect()
    }

    pub fn seed() -> Self {
        let date = |m: u32, d: u32| NaiveDate::from_ymd_opt(2026, m, d).unwrap_or_default();
        DateBook::new(vec![
            ImportantDate {
                id: "1".into(),
                title: "День рождения мамы".into(),
                date: date(2, 15),
                kind: DateKind::Birthday,
            },
            ImportantDate {
                id: "2".into(),
                title: "Годовщина свадьбы".into(),
                date: date(3, 20),
                kind: DateKind::Anniversary,
            },
            ImportantDate {
                id: "3".into(),
                title: "День рождения коллеги".into(),
                date: date(1, 25),
                kind: DateKind::Birthday,
            },
        ])
    }
}
