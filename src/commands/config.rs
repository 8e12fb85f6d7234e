use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use smartplan_core::config::{Preferences, SmartplanConfig};
use smartplan_core::store::PreferencesStore;
use smartplan_core::theme::{MenuPosition, Theme};

use crate::render::Render;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show config paths and current preferences (default)
    Show,
    /// Switch colour theme (see `smartplan themes`)
    Theme { id: String },
    /// Move the navigation menu
    Menu { position: MenuPosition },
    /// Collapse or expand the sidebar
    Sidebar { state: SidebarState },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SidebarState {
    Collapsed,
    Expanded,
}

pub fn run(config: &SmartplanConfig, store: &PreferencesStore, action: Option<ConfigAction>) -> Result<()> {
    let action = match action.unwrap_or(ConfigAction::Show) {
        ConfigAction::Show => return show(config, store),
        other => other,
    };

    let mut rx = store.subscribe();
    let changed = store.update(|prefs| match action {
        ConfigAction::Theme { id } => prefs.theme = id,
        ConfigAction::Menu { position } => prefs.menu_position = position,
        ConfigAction::Sidebar { state } => {
            prefs.sidebar_collapsed = matches!(state, SidebarState::Collapsed)
        }
        ConfigAction::Show => {}
    })?;

    if !changed {
        println!("{}", "Nothing changed".dimmed());
        return Ok(());
    }

    let prefs = rx.borrow_and_update().clone();
    println!("{}", "Preferences saved".green());
    print_preferences(&prefs)?;

    Ok(())
}

fn show(config: &SmartplanConfig, store: &PreferencesStore) -> Result<()> {
    let config_path = SmartplanConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:       {}", config_path.display());
    println!("  Preferences:  {}", store.path().display());
    println!("  Workspace:    {}", config.workspace_path().display());
    if let Some(roster) = config.roster_path() {
        println!("  Roster:       {}", roster.display());
    }

    println!();
    print_preferences(&store.get())
}

fn print_preferences(prefs: &Preferences) -> Result<()> {
    let theme: &Theme = prefs.theme()?;

    println!("{}", "Preferences".bold());
    println!("  Theme:    {}", theme.render());
    println!("  Menu:     {}", prefs.menu_position);
    println!(
        "  Sidebar:  {}",
        if prefs.sidebar_collapsed { "collapsed" } else { "expanded" }
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_change_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        let store = PreferencesStore::open(&path).unwrap();

        run(
            &SmartplanConfig::default(),
            &store,
            Some(ConfigAction::Theme { id: "golden-hour".into() }),
        )
        .unwrap();

        assert_eq!(Preferences::load(&path).unwrap().theme, "golden-hour");
    }

    #[test]
    fn sidebar_collapse() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferencesStore::open(&dir.path().join("preferences.toml")).unwrap();

        run(
            &SmartplanConfig::default(),
            &store,
            Some(ConfigAction::Sidebar { state: SidebarState::Collapsed }),
        )
        .unwrap();

        assert!(store.get().sidebar_collapsed);
    }

    #[test]
    fn unknown_theme_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferencesStore::open(&dir.path().join("preferences.toml")).unwrap();

        let result = run(
            &SmartplanConfig::default(),
            &store,
            Some(ConfigAction::Theme { id: "neon".into() }),
        );

        assert!(result.is_err());
        assert_eq!(store.get(), Preferences::default());
    }
}
