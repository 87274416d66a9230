use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow build scripts to distinguish between a name collision
/// in the generated hierarchy and any other failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - mapping generated (or printed)
    Success = 0,
    /// Two dependencies formatted to the same generated name
    NameCollision = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (network error, file I/O error, bad config, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code matching an error returned by the application
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<MapperError>() {
            Some(MapperError::DuplicateFieldName { .. }) => ExitCode::NameCollision,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::NameCollision => write!(f, "Name Collision (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency mapping.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum MapperError {
    #[error("Invalid dependency notation: `{notation}`\nReason: {reason}\n\n💡 Hint: Notations must look like `group:artifact` (e.g. `com.squareup.okio:okio`)")]
    InvalidNotation { notation: String, reason: String },

    #[error("Duplicate field name `{name}` in `{container}`\nExisting: {existing}\nIncoming: {incoming}\n\n💡 Hint: Add a name replacement or an explicit mapping so both dependencies stay reachable")]
    DuplicateFieldName {
        container: String,
        name: String,
        existing: String,
        incoming: String,
    },

    #[error("Failed to fetch dependencies of `{group}` from {repository}\nDetails: {details}\n\n💡 Hint: Please check your internet connection")]
    FetchFailure {
        repository: String,
        group: String,
        details: String,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for requests and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl MapperError {
    pub fn invalid_notation(notation: &str, reason: impl Into<String>) -> Self {
        MapperError::InvalidNotation {
            notation: notation.to_string(),
            reason: reason.into(),
        }
    }
}
