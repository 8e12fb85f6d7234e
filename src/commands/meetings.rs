use std::path::Path;

use anyhow::Result;
use clap::Subcommand;
use owo_colors::OwoColorize;
use smartplan_core::meeting::Meeting;
use smartplan_core::workspace::Workspace;
use smartplan_core::{MemberSelection, PlanError};

use crate::render::render_meeting;

#[derive(Subcommand)]
pub enum MeetingAction {
    /// Show scheduled meetings grouped by day (default)
    List {
        /// Only meetings on this day label (e.g. "16 янв")
        #[arg(long)]
        day: Option<String>,
    },
    /// Schedule a meeting at a time you choose
    Add {
        title: String,

        /// Day label, as in the team availability (e.g. "16 янв")
        #[arg(long)]
        day: String,

        /// Start time (e.g. "15:00")
        #[arg(long)]
        time: String,

        /// Participant member id (repeat for each member)
        #[arg(short, long = "member")]
        members: Vec<String>,
    },
}

pub fn run(workspace_path: &Path, action: Option<MeetingAction>) -> Result<()> {
    let mut workspace = Workspace::load(workspace_path)?;

    match action.unwrap_or(MeetingAction::List { day: None }) {
        MeetingAction::List { day } => list(&workspace, day.as_deref()),
        MeetingAction::Add {
            title,
            day,
            time,
            members,
        } => {
            if let Some(unknown) = members.iter().find(|id| workspace.team.get(id).is_none()) {
                return Err(PlanError::UnknownMember(unknown.clone()).into());
            }

            let selection: MemberSelection = members.iter().map(String::as_str).collect();
            let meeting = workspace
                .meetings
                .add_manual(&title, &day, &time, &selection)?;
            println!(
                "{} {} {}",
                "Scheduled".green(),
                meeting.day,
                render_meeting(meeting, &workspace.team)
            );
            workspace.save(workspace_path)?;
            Ok(())
        }
    }
}

fn list(workspace: &Workspace, day: Option<&str>) -> Result<()> {
    let meetings: Vec<&Meeting> = match day {
        Some(day) => workspace.meetings.for_day(day).collect(),
        None => workspace.meetings.all().iter().collect(),
    };

    if meetings.is_empty() {
        println!("{}", "No meetings found".dimmed());
        return Ok(());
    }

    // Group by day label, keeping first-seen order
    let mut current_day: Option<&str> = None;
    for meeting in meetings {
        if current_day != Some(meeting.day.as_str()) {
            if current_day.is_some() {
                println!();
            }
            println!("{}", meeting.day.bold());
            current_day = Some(meeting.day.as_str());
        }
        println!("  {}", render_meeting(meeting, &workspace.team));
    }

    Ok(())
}
