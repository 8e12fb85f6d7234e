use anyhow::Result;
use owo_colors::OwoColorize;
use smartplan_core::config::Preferences;
use smartplan_core::theme::Theme;

use crate::render::Render;

pub fn run(prefs: &Preferences) -> Result<()> {
    for theme in Theme::all() {
        let marker = if theme.id == prefs.theme { "*".green().to_string() } else { " ".to_string() };
        println!("{} {}", marker, theme.render());
    }

    Ok(())
}
