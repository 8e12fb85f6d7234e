//! TUI rendering traits for smartplan types.
//!
//! Extension traits that add colored terminal rendering to smartplan-core
//! types using owo_colors.

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use smartplan_core::dates::{DateKind, ImportantDate};
use smartplan_core::meeting::{Meeting, SuggestedBy};
use smartplan_core::note::{Note, NoteColor};
use smartplan_core::task::{Priority, Task};
use smartplan_core::theme::Theme;
use smartplan_core::{Roster, SlotSuggestion, TeamMember};

pub trait Render {
    fn render(&self) -> String;
}

impl Render for TeamMember {
    fn render(&self) -> String {
        let count = self.free_slot_count();
        format!(
            "{} {} {} {}",
            format!("[{}]", self.id).dimmed(),
            self.initials.bold(),
            self.name,
            format!("({} free {})", count, pluralize("slot", count)).dimmed()
        )
    }
}

impl Render for SlotSuggestion {
    fn render(&self) -> String {
        format!("{} {}", self.day, self.time.bold())
    }
}

impl Render for Priority {
    fn render(&self) -> String {
        let label = self.to_string();
        match self {
            Priority::High => label.red().to_string(),
            Priority::Medium => label.yellow().to_string(),
            Priority::Low => label.green().to_string(),
        }
    }
}

impl Render for Task {
    fn render(&self) -> String {
        let check = if self.is_completed() { "[x]".green().to_string() } else { "[ ]".to_string() };
        let title = if self.is_completed() {
            self.title.strikethrough().dimmed().to_string()
        } else {
            self.title.clone()
        };

        format!(
            "{} {} {} {} {}",
            check,
            title,
            self.deadline.format("%d.%m.%Y").to_string().dimmed(),
            self.priority.render(),
            format!("#{}", self.id).dimmed()
        )
    }
}

impl Render for NoteColor {
    fn render(&self) -> String {
        let dot = "●";
        match self {
            NoteColor::Purple => dot.purple().to_string(),
            NoteColor::Blue => dot.blue().to_string(),
            NoteColor::Green => dot.green().to_string(),
            NoteColor::Yellow => dot.yellow().to_string(),
            NoteColor::Pink => dot.bright_magenta().to_string(),
        }
    }
}

impl Render for Note {
    fn render(&self) -> String {
        format!(
            "{} {} {}\n    {}",
            self.color.render(),
            self.title.bold(),
            self.created_at.format("%Y-%m-%d %H:%M").to_string().dimmed(),
            self.content
        )
    }
}

impl Render for Theme {
    fn render(&self) -> String {
        let swatch: String = [self.primary, self.secondary, self.accent]
            .iter()
            .map(|hex| match parse_hex(hex) {
                Some((r, g, b)) => "●".truecolor(r, g, b).to_string(),
                None => "●".to_string(),
            })
            .collect();

        format!("{} {:<16} {}", swatch, self.id, self.name.dimmed())
    }
}

impl Render for DateKind {
    fn render(&self) -> String {
        match self {
            DateKind::Birthday => "✦".bright_magenta().to_string(),
            DateKind::Holiday => "✦".purple().to_string(),
            DateKind::Anniversary => "♥".red().to_string(),
            DateKind::Other => "●".blue().to_string(),
        }
    }
}

/// Important date line with a countdown relative to `today`.
pub fn render_date(date: &ImportantDate, today: NaiveDate) -> String {
    let label = countdown(date.days_until(today));
    let label = if date.is_soon(today) {
        label.red().bold().to_string()
    } else {
        label.dimmed().to_string()
    };

    format!(
        "{} {} {} {} {}",
        date.kind.render(),
        date.title.bold(),
        date.date.format("%d.%m.%Y"),
        label,
        format!("#{}", date.id).dimmed()
    )
}

fn countdown(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        d if d > 1 => format!("in {d} days"),
        -1 => "yesterday".to_string(),
        d => format!("{} days ago", -d),
    }
}

/// Meeting line with participants shown by initials.
pub fn render_meeting(meeting: &Meeting, roster: &Roster) -> String {
    let participants: Vec<&str> = meeting
        .participants
        .iter()
        .map(|id| roster.get(id).map(|m| m.initials.as_str()).unwrap_or(id.as_str()))
        .collect();

    let tag = match meeting.suggested_by {
        SuggestedBy::Ai => "ai".purple().to_string(),
        SuggestedBy::Manual => "manual".dimmed().to_string(),
    };

    format!(
        "{} {} {} {}",
        meeting.time.bold(),
        meeting.title,
        participants.join(", ").dimmed(),
        tag
    )
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_hex("#a855f7"), Some((0xa8, 0x55, 0xf7)));
        assert_eq!(parse_hex("a855f7"), None);
        assert_eq!(parse_hex("#fff"), None);
    }

    #[test]
    fn pluralizes() {
        assert_eq!(pluralize("slot", 1), "slot");
        assert_eq!(pluralize("slot", 0), "slots");
    }

    #[test]
    fn countdown_wording() {
        assert_eq!(countdown(0), "today");
        assert_eq!(countdown(1), "tomorrow");
        assert_eq!(countdown(31), "in 31 days");
        assert_eq!(countdown(-1), "yesterday");
        assert_eq!(countdown(-4), "4 days ago");
    }

    #[test]
    fn date_line_has_countdown() {
        let date = ImportantDate {
            id: "3".into(),
            title: "День рождения коллеги".into(),
            date: NaiveDate::from_ymd_opt(2026, 1, 25).unwrap(),
            kind: DateKind::Birthday,
        };

        let line = render_date(&date, NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
        assert!(line.contains("25.01.2026"));
        assert!(line.contains("in 10 days"));
        assert!(line.contains("#3"));
    }

    #[test]
    fn meeting_shows_initials_and_unknown_ids() {
        let roster = Roster::seed();
        let meeting = Meeting {
            id: "m".into(),
            title: "Sync".into(),
            day: "16 янв".into(),
            time: "10:00".into(),
            participants: vec!["1".into(), "9".into()],
            suggested_by: SuggestedBy::Manual,
        };

        let line = render_meeting(&meeting, &roster);
        assert!(line.contains("АС"));
        assert!(line.contains('9'));
    }
}
