use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Subcommand;
use owo_colors::OwoColorize;
use smartplan_core::task::Priority;
use smartplan_core::workspace::Workspace;

use crate::render::Render;

#[derive(Subcommand)]
pub enum TaskAction {
    /// List tasks (default)
    List {
        /// Only tasks that are not completed
        #[arg(long)]
        open: bool,
    },
    /// Add a task
    Add {
        title: String,

        /// high, medium or low
        #[arg(short, long, default_value = "medium")]
        priority: Priority,

        /// Deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: String,
    },
    /// Mark a task done, or reopen a done task
    Toggle { id: String },
    /// Move a task to a new deadline
    Reschedule {
        id: String,

        /// New deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: String,
    },
}

pub fn run(workspace_path: &Path, action: Option<TaskAction>) -> Result<()> {
    let mut workspace = Workspace::load(workspace_path)?;

    match action.unwrap_or(TaskAction::List { open: false }) {
        TaskAction::List { open } => {
            let tasks = if open {
                workspace.tasks.pending()
            } else {
                workspace.tasks.all().iter().collect()
            };

            if tasks.is_empty() {
                println!("{}", "No tasks".dimmed());
                return Ok(());
            }
            for task in tasks {
                println!("{}", task.render());
            }
            println!(
                "{}",
                format!(
                    "{}/{} completed",
                    workspace.tasks.completed_count(),
                    workspace.tasks.all().len()
                )
                .dimmed()
            );
        }
        TaskAction::Add {
            title,
            priority,
            deadline,
        } => {
            let deadline = parse_deadline(&deadline)?;
            let task = workspace.tasks.add(&title, priority, deadline)?;
            println!("{} {}", "Added".green(), task.render());
            workspace.save(workspace_path)?;
        }
        TaskAction::Toggle { id } => {
            let task = workspace.tasks.toggle(&id)?;
            println!("{}", task.render());
            workspace.save(workspace_path)?;
        }
        TaskAction::Reschedule { id, deadline } => {
            let deadline = parse_deadline(&deadline)?;
            let task = workspace.tasks.reschedule(&id, deadline)?;
            println!("{} {}", "Rescheduled".green(), task.render());
            workspace.save(workspace_path)?;
        }
    }

    Ok(())
}

fn parse_deadline(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}
