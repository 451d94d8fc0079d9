//! Error types for the tabimap CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for tabimap operations.
///
/// Read and write failures are fatal and exit with code 1. A missing marker
/// substring in the input SVG is deliberately *not* an error: those cases
/// degrade to warnings and the build proceeds without the skipped edit.
#[derive(Error, Debug)]
pub enum TabimapError {
    /// The input SVG could not be read.
    #[error("failed to read '{path}': {message}")]
    Read { path: String, message: String },

    /// The output page could not be written.
    #[error("failed to write '{path}': {message}")]
    Write { path: String, message: String },

    /// The config file could not be parsed or failed validation.
    #[error("{0}")]
    Config(String),

    /// The page template could not be rendered.
    #[error("failed to render page: {0}")]
    Render(String),

    /// `check` found issues that would block a correct build.
    #[error("check failed: {0}")]
    CheckFailed(String),
}

impl TabimapError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TabimapError::Read { .. } => exit_codes::BUILD_FAILURE,
            TabimapError::Write { .. } => exit_codes::BUILD_FAILURE,
            TabimapError::Config(_) => exit_codes::BUILD_FAILURE,
            TabimapError::Render(_) => exit_codes::BUILD_FAILURE,
            TabimapError::CheckFailed(_) => exit_codes::CHECK_FAILURE,
        }
    }
}

/// Result type alias for tabimap operations.
pub type Result<T> = std::result::Result<T, TabimapError>;
