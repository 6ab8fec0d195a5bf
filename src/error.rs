//! Error types for the cxl command dispatcher.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while opening the execution context
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("CXL sysfs root must be an absolute path: {0}")]
    RelativeRoot(PathBuf),

    #[error("CXL sysfs root is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to inspect CXL sysfs root {path}: {source}")]
    Inspect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("A CXL context is already open for this process")]
    AlreadyOpen,
}

/// Crate-level errors surfaced by the CLI
#[derive(Debug, Error)]
pub enum CxlError {
    #[error("Failed to create CXL context: {0}")]
    Context(#[from] ContextError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to launch man viewer '{viewer}': {source}")]
    ViewerLaunch {
        viewer: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No man viewer handled the request for '{page}'")]
    NoViewer { page: String },
}

impl From<config::ConfigError> for CxlError {
    fn from(err: config::ConfigError) -> Self {
        CxlError::ConfigError(err.to_string())
    }
}
