//! Core error types for impc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for source file lookups
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    /// Invalid line number
    #[error("Invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber {
        /// Requested line (1-based)
        line: usize,
        /// Number of lines in the file
        max_lines: usize,
    },
}

/// Result type alias for source file operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;
