//! Common types and utilities for impt commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::path::{Path, PathBuf};

use impc_lex::report::{ErrorRow, TableRow};
use impc_lex::{decode_source, tokenize, LexOutput};
use impc_util::SourceFile;
use serde::{Deserialize, Serialize};

use crate::error::{ImptError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for analysis results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Results table plus error panel
    #[default]
    Table,
    /// One JSON object per file
    Json,
}

// ============================================================================
// Source Files
// ============================================================================

/// A source file that has been read and scanned.
#[derive(Debug)]
pub struct AnalyzedFile {
    pub path: PathBuf,
    pub source: SourceFile,
    pub output: LexOutput,
}

/// Reads `path`, decodes it as UTF-8 and runs the lexer over it.
pub fn analyze_file(path: &Path) -> Result<AnalyzedFile> {
    if !path.is_file() {
        return Err(ImptError::FileOperation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    let bytes = std::fs::read(path)?;
    let text = decode_source(&bytes).map_err(|source| ImptError::Decoding {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(AnalyzedFile {
        path: path.to_path_buf(),
        source: SourceFile::new(path.display().to_string(), text),
        output: tokenize(text),
    })
}

// ============================================================================
// Rendering
// ============================================================================

const TABLE_HEADERS: [&str; 4] = ["Line", "Lexeme", "Token-type", "Attribute"];

/// Makes control characters visible so every row stays on one line.
fn display_cell(text: &str) -> String {
    text.chars()
        .flat_map(|c| match c {
            '\n' => vec!['\\', 'n'],
            '\r' => vec!['\\', 'r'],
            '\t' => vec!['\\', 't'],
            other => vec![other],
        })
        .collect()
}

/// Renders the results table with aligned columns.
pub fn render_table(rows: &[TableRow]) -> String {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            [
                row.line.to_string(),
                display_cell(&row.lexeme),
                row.token_kind.clone(),
                display_cell(&row.attribute),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |row: &[&str]| -> String {
        row.iter()
            .zip(widths)
            .map(|(cell, width)| {
                let pad = width - cell.chars().count();
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_row(&TABLE_HEADERS)];
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &cells {
        let refs: Vec<&str> = row.iter().map(String::as_str).collect();
        lines.push(format_row(&refs));
    }
    lines.join("\n")
}

/// Renders the error panel shown under the results table.
pub fn render_error_panel(rows: &[ErrorRow]) -> String {
    let mut lines = vec![format!("Errors ({}):", rows.len())];
    for row in rows {
        lines.push(format!(
            "  {}:{}  {}: {} `{}`",
            row.line,
            row.column,
            row.kind,
            row.message,
            display_cell(&row.text)
        ));
    }
    lines.join("\n")
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when input path does not exist or is not a regular file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when target path is not a directory.
    pub const TARGET_NOT_DIR: &str = "Target path is not a directory:";

    /// Error when the configuration file is already present.
    pub const CONFIG_EXISTS: &str = "Configuration file already exists (use --force to overwrite):";
}
