//! Configuration System
//!
//! Layered configuration for the dispatcher: built-in defaults, the global
//! config file, an explicit file (`--config` / `CXL_CONFIG`), then `CXL__`
//! environment overrides. Validated once on load.

use crate::error::CxlError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CxlConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Execution context settings
    #[serde(default)]
    pub context: ContextConfig,

    /// Help and manual page settings
    #[serde(default)]
    pub help: HelpConfig,
}

/// Where the execution context finds the device subsystem
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextConfig {
    /// CXL bus root in sysfs
    #[serde(default = "default_sysfs_root")]
    pub sysfs_root: PathBuf,
}

fn default_sysfs_root() -> PathBuf {
    PathBuf::from("/sys/bus/cxl")
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            sysfs_root: default_sysfs_root(),
        }
    }
}

/// Manual page viewer settings used by `cxl help <topic>`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpConfig {
    /// Viewer used when the environment names none
    #[serde(default = "default_man_viewer")]
    pub man_viewer: String,

    /// Environment variable naming the preferred viewer
    #[serde(default = "default_viewer_env")]
    pub viewer_env: String,

    /// Directory with the tool's manual pages, prepended to MANPATH
    #[serde(default)]
    pub man_path: Option<PathBuf>,
}

fn default_man_viewer() -> String {
    "man".to_string()
}

fn default_viewer_env() -> String {
    "CXL_MAN_VIEWER".to_string()
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            man_viewer: default_man_viewer(),
            viewer_env: default_viewer_env(),
            man_path: None,
        }
    }
}

impl CxlConfig {
    /// Validate the loaded configuration
    pub fn validate(&self) -> Result<(), CxlError> {
        self.logging.validate()?;
        if self.help.man_viewer.trim().is_empty() {
            return Err(CxlError::ConfigError(
                "help.man_viewer cannot be empty".to_string(),
            ));
        }
        if self.help.viewer_env.trim().is_empty() {
            return Err(CxlError::ConfigError(
                "help.viewer_env cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
