use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Subcommand;
use owo_colors::OwoColorize;
use smartplan_core::dates::DateKind;
use smartplan_core::workspace::Workspace;

use crate::render::{Render, render_date};

#[derive(Subcommand)]
pub enum DateAction {
    /// List important dates with a countdown (default)
    List {
        /// Hide dates that have already passed
        #[arg(long)]
        upcoming: bool,

        /// Count days from this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
    },
    /// Add an important date
    Add {
        title: String,

        /// The date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// birthday, holiday, anniversary or other
        #[arg(short, long, default_value = "birthday")]
        kind: DateKind,
    },
    /// Delete an important date
    Rm { id: String },
}

pub fn run(workspace_path: &Path, action: Option<DateAction>) -> Result<()> {
    let mut workspace = Workspace::load(workspace_path)?;

    match action.unwrap_or(DateAction::List {
        upcoming: false,
        today: None,
    }) {
        DateAction::List { upcoming, today } => {
            let today = match today {
                Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                    .with_context(|| format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))?,
                None => Local::now().date_naive(),
            };

            let dates = if upcoming {
                workspace.dates.upcoming(today)
            } else {
                workspace.dates.all().iter().collect()
            };

            if dates.is_empty() {
                println!("{}", "No important dates".dimmed());
                return Ok(());
            }
            for date in dates {
                println!("{}", render_date(date, today));
            }
        }
        DateAction::Add { title, date, kind } => {
            let date = workspace.dates.add(&title, &date, kind)?;
            println!(
                "{} {} {}",
                "Added".green(),
                date.kind.render(),
                date.title.bold()
            );
            workspace.save(workspace_path)?;
        }
        DateAction::Rm { id } => {
            let date = workspace.dates.delete(&id)?;
            println!("{} {}", "Deleted".red(), date.title);
            workspace.save(workspace_path)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_remove() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workspace.json");

        run(
            &path,
            Some(DateAction::Add {
                title: "День рождения Марии".into(),
                date: "2026-04-02".into(),
                kind: DateKind::Birthday,
            }),
        )
        .unwrap();

        let workspace = Workspace::load(&path).unwrap();
        let added = workspace.dates.all().last().unwrap();
        assert_eq!(added.title, "День рождения Марии");
        assert_eq!(added.date, NaiveDate::from_ymd_opt(2026, 4, 2).unwrap());

        run(&path, Some(DateAction::Rm { id: added.id.clone() })).unwrap();
        assert_eq!(Workspace::load(&path).unwrap().dates.all().len(), 3);
    }

    #[test]
    fn missing_date_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workspace.json");

        let result = run(
            &path,
            Some(DateAction::Add {
                title: "Отпуск".into(),
                date: "".into(),
                kind: DateKind::Other,
            }),
        );
        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn list_with_fixed_today() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workspace.json");

        run(
            &path,
            Some(DateAction::List {
                upcoming: true,
                today: Some("2026-01-15".into()),
            }),
        )
        .unwrap();

        let err = run(
            &path,
            Some(DateAction::List {
                upcoming: false,
                today: Some("15 января".into()),
            }),
        )
        .unwrap_err();
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn unknown_date_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workspace.json");

        assert!(run(&path, Some(DateAction::Rm { id: "nope".into() })).is_err());
        assert!(!path.exists());
    }
}
