//! Error handling for fcgenerator.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading configuration or generating output.
///
/// Most of them are reported and skipped by the generator rather than
/// aborting the whole run; see [`crate::generator::Generator`].
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// No configuration file with a supported extension was found
    #[error("Configuration file not found: '{}' (tried: {tried}).", dir.display())]
    ConfigNotFoundError { dir: PathBuf, tried: String },

    /// The configuration file exists but could not be deserialized
    #[error("Invalid configuration in '{}': {reason}.", path.display())]
    ConfigParseError { path: PathBuf, reason: String },

    /// A custom recipe names a tool that has no known tool action
    #[error(
        "Unknown tool '{tool}' in custom recipe '{filename}' (expected one of: knife, axe, axe_strip, pickaxe)."
    )]
    UnknownToolError { tool: String, filename: String },

    /// Writing a generated document failed
    #[error("Failed to write '{}': {source}.", path.display())]
    WriteError { path: PathBuf, source: io::Error },

    /// Removing a stale output directory failed
    #[error("Failed to remove '{}': {source}.", path.display())]
    CleanupError { path: PathBuf, source: io::Error },

    /// A mod selection pattern could not be compiled
    #[error("Invalid mod filter: {0}.")]
    FilterError(#[from] globset::Error),

    /// Serializing a generated document failed
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
