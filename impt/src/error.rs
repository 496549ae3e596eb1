//! Error handling module for the impt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use std::path::PathBuf;

use impc_lex::DecodingError;
use thiserror::Error;

/// Main error type for the impt CLI application.
#[derive(Error, Debug)]
pub enum ImptError {
    /// Error when configuration cannot be loaded or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when a source file is not UTF-8 text.
    #[error("Cannot decode {}: {source}", path.display())]
    Decoding {
        path: PathBuf,
        #[source]
        source: DecodingError,
    },

    /// `check` found lexical errors.
    #[error("{0} lexical error(s) found")]
    LexicalErrors(usize),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when TOML parsing fails.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias using ImptError.
pub type Result<T> = std::result::Result<T, ImptError>;
