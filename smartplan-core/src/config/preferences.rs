//! UI preferences stored at ~/.config/smartplan/preferences.toml

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};
use crate::theme::{DEFAULT_THEME, MenuPosition, Theme};

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Theme id from the catalog
    #[serde(default = "default_theme")]
    pub theme: String,

    #[serde(default)]
    pub menu_position: MenuPosition,

    #[serde(default)]
    pub sidebar_collapsed: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            theme: default_theme(),
            menu_position: MenuPosition::default(),
            sidebar_collapsed: false,
        }
    }
}

impl Preferences {
    pub fn path() -> PlanResult<PathBuf> {
        Ok(super::config_dir()?.join("preferences.toml"))
    }

    /// Read preferences from `path`. A missing file means defaults.
    ///
    /// A theme id that is no longer in the catalog is replaced with the
    /// default theme, so a stale file never blocks start-up.
    pub fn load(path: &Path) -> PlanResult<Self> {
        if !path.exists() {
            return Ok(Preferences::default());
        }

        let content = std::fs::read_to_string(path)?;
        let mut prefs: Preferences =
            toml::from_str(&content).map_err(|e| PlanError::Config(e.to_string()))?;

        if prefs.validate().is_err() {
            tracing::warn!(
                path = %path.display(),
                theme = %prefs.theme,
                fallback = DEFAULT_THEME,
                "unknown theme in preferences, using default"
            );
            prefs.theme = default_theme();
        }

        Ok(prefs)
    }

    pub fn save(&self, path: &Path) -> PlanResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| PlanError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn theme(&self) -> PlanResult<&'static Theme> {
        Theme::find(&self.theme)
    }

    pub fn validate(&self) -> PlanResult<()> {
        self.theme().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load(&dir.path().join("preferences.toml")).unwrap();
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.theme().unwrap().id, "cosmic-purple");
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub/preferences.toml");
        let prefs = Preferences {
            theme: "ocean-blue".into(),
            menu_position: MenuPosition::Top,
            sidebar_collapsed: true,
        };

        prefs.save(&path).unwrap();
        assert_eq!(Preferences::load(&path).unwrap(), prefs);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "menu_position = \"right\"\n").unwrap();

        let prefs = Preferences::load(&path).unwrap();
        assert_eq!(prefs.menu_position, MenuPosition::Right);
        assert_eq!(prefs.theme, DEFAULT_THEME);
        assert!(!prefs.sidebar_collapsed);
    }

    #[test]
    fn unknown_theme_in_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "theme = \"neon\"\nsidebar_collapsed = true\n").unwrap();

        let prefs = Preferences::load(&path).unwrap();
        assert_eq!(prefs.theme, DEFAULT_THEME);
        assert!(prefs.sidebar_collapsed);
        assert!(prefs.validate().is_ok());
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "menu_position = \"diagonal\"\n").unwrap();

        assert!(matches!(Preferences::load(&path), Err(PlanError::Config(_))));
    }
}
