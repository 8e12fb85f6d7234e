//! Global smartplan configuration.

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};

static DEFAULT_DATA_DIR: &str = "~/.local/share/smartplan";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

/// Global configuration at ~/.config/smartplan/config.toml
///
/// UI preferences live in their own file, see [`super::Preferences`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SmartplanConfig {
    /// Where the workspace document is kept
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,

    /// Optional TOML roster replacing the workspace team when scheduling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roster: Option<PathBuf>,
}

impl Default for SmartplanConfig {
    fn default() -> Self {
        SmartplanConfig {
            data_dir: default_data_dir(),
            roster: None,
        }
    }
}

impl SmartplanConfig {
    pub fn config_path() -> PlanResult<PathBuf> {
        Ok(super::config_dir()?.join("config.toml"))
    }

    /// Load ~/.config/smartplan/config.toml, writing a commented default on first run.
    pub fn load() -> PlanResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> PlanResult<Self> {
        let config: SmartplanConfig = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .build()
            .map_err(|e| PlanError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PlanError::Config(e.to_string()))?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand(&self.data_dir)
    }

    pub fn workspace_path(&self) -> PathBuf {
        self.data_path().join("workspace.json")
    }

    pub fn roster_path(&self) -> Option<PathBuf> {
        self.roster.as_deref().map(expand)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> PlanResult<()> {
        let contents = format!(
            "\
# smartplan configuration

# Where the workspace (tasks, notes, meetings, team) is stored:
# data_dir = \"{}\"

# Team roster used for finding meeting slots:
# roster = \"~/team.toml\"
",
            DEFAULT_DATA_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PlanError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| PlanError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");

        SmartplanConfig::create_default_config(&path).unwrap();
        let config = SmartplanConfig::load_from(&path).unwrap();

        assert_eq!(config, SmartplanConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = \"/tmp/plan\"\nroster = \"/tmp/team.toml\"\n").unwrap();

        let config = SmartplanConfig::load_from(&path).unwrap();
        assert_eq!(config.workspace_path(), PathBuf::from("/tmp/plan/workspace.json"));
        assert_eq!(config.roster_path(), Some(PathBuf::from("/tmp/team.toml")));
    }

    #[test]
    fn tilde_is_expanded() {
        let config = SmartplanConfig {
            data_dir: PathBuf::from("~/x"),
            roster: None,
        };

        // Without a home directory the path is left as written.
        match dirs::home_dir() {
            Some(home) => assert_eq!(config.data_path(), home.join("x")),
            None => assert_eq!(config.data_path(), PathBuf::from("~/x")),
        }
    }

    #[test]
    fn absolute_data_dir_is_untouched() {
        let config = SmartplanConfig {
            data_dir: PathBuf::from("/srv/smartplan"),
            roster: None,
        };
        assert_eq!(config.data_path(), PathBuf::from("/srv/smartplan"));
        assert_eq!(
            config.workspace_path(),
            PathBuf::from("/srv/smartplan/workspace.json")
        );
    }
}
