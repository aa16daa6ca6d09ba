use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts distinguish a bad station id from a broken
/// dataset or an I/O failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// A station id given on the command line does not exist in the dataset
    UnknownStation = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (dataset load, network, file I/O, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code matching an error chain.
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<HideoutError>() {
            Some(HideoutError::UnknownStation { .. }) => ExitCode::UnknownStation,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::UnknownStation => write!(f, "Unknown Station (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the hideout planner.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HideoutError {
    #[error("Unknown station: {id}\n\n💡 Hint: Run `hideout-planner stations` to list the valid station ids")]
    UnknownStation { id: String },

    #[error("Hideout dataset not found: {path}\n\n💡 Hint: Pass the dataset location with --dataset or set `dataset` in the config file")]
    DatasetNotFound { path: PathBuf },

    #[error("Failed to parse hideout dataset: {source_name}\nDetails: {details}\n\n💡 Hint: The dataset must be a JSON object mapping station ids to station definitions")]
    DatasetParseError { source_name: String, details: String },

    #[error("Invalid station '{station}' in hideout dataset: {reason}")]
    InvalidStation { station: String, reason: String },

    #[error("Station '{station}' requires unknown station '{prerequisite}'")]
    DanglingPrerequisite {
        station: String,
        prerequisite: String,
    },

    #[error("Station '{station}' depends on itself through its prerequisite stations")]
    CyclicDependency { station: String },

    #[error("Cannot {transition} while {state}")]
    IllegalTransition {
        transition: &'static str,
        state: &'static str,
    },

    #[error("Hideout data has not finished loading")]
    NotReady,

    #[error("Failed to fetch hideout dataset from {url}\nDetails: {details}\n\n💡 Hint: Check the URL and your network connection")]
    DatasetFetchError { url: String, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for value objects and config
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
