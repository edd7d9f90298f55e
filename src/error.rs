//! Error types for passive browser selection.
//!
//! This module defines [`PassiveBrowsersError`], the error type used by
//! configuration parsing and the CLI, and a [`Result`] type alias.
//!
//! Directive registration, passive browser resolution and test disablement
//! never fail: by the time they run every input has been validated.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for passive browser selection.
#[derive(Debug, Error)]
pub enum PassiveBrowsersError {
    /// An option holds a value of the wrong type.
    #[error("\"{option}\" option must be: {}, but got {actual}", .expected.join(" or "))]
    InvalidOptionType {
        option: String,
        expected: Vec<&'static str>,
        actual: String,
    },

    /// An environment variable or command-line value could not be decoded.
    #[error("Invalid value for \"{option}\" from {origin}: {message}")]
    InvalidOptionValue {
        option: String,
        origin: String,
        message: String,
    },

    /// A required option has no value in any configuration source.
    #[error("\"{option}\" option is required")]
    MissingOption { option: String },

    /// A regular expression matcher failed to compile.
    #[error("Invalid pattern /{pattern}/: {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Options file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse an options file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Failed to parse a test tree description.
    #[error("Failed to parse test tree at {path}: {message}")]
    TreeParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PassiveBrowsersError {
    /// Build an [`InvalidOptionType`](Self::InvalidOptionType) error.
    pub fn invalid_type(
        option: impl Into<String>,
        expected: &[&'static str],
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidOptionType {
            option: option.into(),
            expected: expected.to_vec(),
            actual: actual.into(),
        }
    }
}

/// Result type alias for passive browser operations.
pub type Result<T> = std::result::Result<T, PassiveBrowsersError>;
