//! CLI-specific error types and mappings.
//!
//! Maps core, catalog and screen errors to exit codes and user-facing
//! messages.

use recipebox_core::{LookupError, SettingsError};
use recipebox_screen::ScreenError;
use recipebox_voice::NarrationError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Argument error (unknown recipe id, bad value).
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The recipe catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// The speech engine refused the narration.
    #[error("Speech error: {0}")]
    Speech(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Catalog(_) => 65,  // EX_DATAERR
            Self::Speech(_) => 69,   // EX_UNAVAILABLE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<LookupError> for CliError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::Io(e) => Self::Io(e.to_string()),
            LookupError::RecipeNotFound(id) => {
                Self::Arguments(format!("no recipe with id '{id}' (see `recipebox list`)"))
            }
            other => Self::Catalog(other.to_string()),
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<ScreenError> for CliError {
    fn from(err: ScreenError) -> Self {
        match err {
            ScreenError::Narration(NarrationError::StartFailed(e)) => Self::Speech(e.to_string()),
            other => Self::Core(other.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Core(format!("JSON output failed: {err}"))
    }
}
