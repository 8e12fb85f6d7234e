//! Configuration types for smartplan.

mod preferences;
mod smartplan_config;

pub use preferences::Preferences;
pub use smartplan_config::SmartplanConfig;

use std::path::PathBuf;

use crate::error::{PlanError, PlanResult};

/// ~/.config/smartplan
pub fn config_dir() -> PlanResult<PathBuf> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlanError::Config("Could not determine config directory".into()))?
        .join("smartplan"))
}
