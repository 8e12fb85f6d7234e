use anyhow::Result;
use owo_colors::OwoColorize;
use smartplan_core::workspace::Workspace;

use crate::render::Render;

pub fn run(workspace: &Workspace) -> Result<()> {
    if workspace.team.is_empty() {
        println!("{}", "No team members".dimmed());
        return Ok(());
    }

    for member in workspace.team.iter() {
        println!("{}", member.render());
        for day in &member.availability {
            println!("    {:<8} {}", day.day, day.slots.join("  ").dimmed());
        }
    }

    Ok(())
}
