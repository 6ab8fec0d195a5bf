//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::CxlError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &CxlError) -> String {
    match e {
        CxlError::NoViewer { page } => format!(
            "No man viewer handled the request for '{}'. Set CXL_MAN_VIEWER or install man.",
            page
        ),
        other => other.to_string(),
    }
}
