use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use smartplan_core::meeting::Meeting;
use smartplan_core::workspace::Workspace;
use smartplan_core::{MemberSelection, PlanError, Roster, SlotSuggestion, find_common_slots};

use crate::render::{Render, pluralize};

pub struct SlotsArgs {
    pub members: Vec<String>,
    pub roster: Option<PathBuf>,
    pub json: bool,
    pub book: Option<String>,
    pub pick: usize,
}

/// What `--json` prints: the suggestions and, when booking, the new meeting.
#[derive(Serialize)]
struct SlotsReport<'a> {
    suggestions: &'a [SlotSuggestion],
    #[serde(skip_serializing_if = "Option::is_none")]
    booked: Option<&'a Meeting>,
}

pub fn run(workspace_path: &Path, args: SlotsArgs) -> Result<()> {
    let mut workspace = Workspace::load(workspace_path)?;

    let roster = match &args.roster {
        Some(path) => Roster::load(path)
            .with_context(|| format!("Failed to load roster from {}", path.display()))?,
        None => workspace.team.clone(),
    };

    let selection: MemberSelection = args.members.iter().map(String::as_str).collect();

    let suggestions = match find_common_slots(&roster, &selection) {
        Ok(suggestions) => suggestions,
        Err(PlanError::NoSelection) => {
            tracing::warn!("slot search without selected members");
            anyhow::bail!(
                "Select at least one team member.\n\n\
                Example:\n  \
                smartplan slots -m 1 -m 2"
            )
        }
        Err(e) => return Err(e.into()),
    };

    let booked = match &args.book {
        Some(title) => {
            let slot = pick_slot(&suggestions, args.pick)?;
            let meeting = workspace.meetings.book(title, slot, &selection)?.clone();
            workspace.save(workspace_path)?;
            Some(meeting)
        }
        None => None,
    };

    if args.json {
        println!("{}", json_report(&suggestions, booked.as_ref())?);
    } else {
        print_suggestions(&suggestions);
        if let Some(meeting) = &booked {
            println!(
                "{} {} {} {}",
                "Booked".green(),
                meeting.title.bold(),
                meeting.day,
                meeting.time.bold()
            );
        }
    }

    Ok(())
}

fn print_suggestions(suggestions: &[SlotSuggestion]) {
    if suggestions.is_empty() {
        println!("{}", "No common free slots for the selected members".red());
        return;
    }

    println!(
        "{}",
        format!(
            "Found {} common {}",
            suggestions.len(),
            pluralize("slot", suggestions.len())
        )
        .green()
    );
    for (i, slot) in suggestions.iter().enumerate() {
        println!("  {} {}", format!("{}.", i + 1).dimmed(), slot.render());
    }
}

fn json_report(suggestions: &[SlotSuggestion], booked: Option<&Meeting>) -> Result<String> {
    let report = SlotsReport {
        suggestions,
        booked,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn pick_slot(suggestions: &[SlotSuggestion], pick: usize) -> Result<&SlotSuggestion> {
    if suggestions.is_empty() {
        anyhow::bail!("Nothing to book: the selected members have no common free slot");
    }

    pick.checked_sub(1)
        .and_then(|i| suggestions.get(i))
        .with_context(|| {
            format!(
                "No suggestion #{pick}. Choose between 1 and {}",
                suggestions.len()
            )
        })
}
