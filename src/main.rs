mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use smartplan_core::config::{Preferences, SmartplanConfig};
use smartplan_core::store::PreferencesStore;
use smartplan_core::workspace::Workspace;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "smartplan")]
#[command(about = "Plan tasks, notes and team meetings from the terminal")]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List team members and how many free slots each has
    Team,
    /// Find times when all selected members are free
    Slots {
        /// Member id to include (repeat for each member)
        #[arg(short, long = "member")]
        members: Vec<String>,

        /// Use this TOML roster instead of the workspace team
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Print suggestions as JSON
        #[arg(long)]
        json: bool,

        /// Book a meeting with this title at one of the suggestions
        #[arg(long)]
        book: Option<String>,

        /// Which suggestion to book (1-based)
        #[arg(long, default_value_t = 1, requires = "book")]
        pick: usize,
    },
    /// Show or schedule meetings
    Meetings {
        #[command(subcommand)]
        action: Option<commands::meetings::MeetingAction>,
    },
    /// Manage tasks
    Tasks {
        #[command(subcommand)]
        action: Option<commands::tasks::TaskAction>,
    },
    /// Manage notes
    Notes {
        #[command(subcommand)]
        action: Option<commands::notes::NoteAction>,
    },
    /// Birthdays, holidays and other dates to count down to
    Dates {
        #[command(subcommand)]
        action: Option<commands::dates::DateAction>,
    },
    /// List available colour themes
    Themes,
    /// Show paths and preferences, or change a preference
    Config {
        #[command(subcommand)]
        action: Option<commands::config::ConfigAction>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = SmartplanConfig::load()?;
    let prefs = PreferencesStore::open(&Preferences::path()?)?;
    tracing::debug!(
        workspace = %config.workspace_path().display(),
        prefs = %prefs.path().display(),
        "starting smartplan"
    );

    match cli.command {
        Commands::Team => {
            let workspace = Workspace::load(&config.workspace_path())?;
            commands::team::run(&workspace)
        }
        Commands::Slots {
            members,
            roster,
            json,
            book,
            pick,
        } => {
            let args = commands::slots::SlotsArgs {
                members,
                roster: roster.or_else(|| config.roster_path()),
                json,
                book,
                pick,
            };
            commands::slots::run(&config.workspace_path(), args)
        }
        Commands::Meetings { action } => commands::meetings::run(&config.workspace_path(), action),
        Commands::Tasks { action } => commands::tasks::run(&config.workspace_path(), action),
        Commands::Notes { action } => commands::notes::run(&config.workspace_path(), action),
        Commands::Dates { action } => commands::dates::run(&config.workspace_path(), action),
        Commands::Themes => commands::themes::run(&prefs.get()),
        Commands::Config { action } => commands::config::run(&config, &prefs, action),
    }
}
