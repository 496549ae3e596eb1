//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, formatting, and collecting
//! toolchain diagnostics (errors, warnings, notes, and help messages).
//!
//! # Examples
//!
//! ```
//! use impc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use impc_util::span::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character `@`")
//!     .code(DiagnosticCode::E_LEXER_INVALID_CHAR)
//!     .span(Span::DUMMY)
//!     .help("remove the character")
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::span::{SourceFile, Span};
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use impc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// An error in the analyzed source
    Error,
    /// Suspicious but accepted source
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl Level {
    /// Returns true if this level represents an error
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Render the diagnostic for a terminal.
    ///
    /// With a source file the output carries a `--> name:line:col` locator
    /// and a caret snippet of the primary span's first line. Spans running
    /// over several lines are underlined to the end of their first line.
    ///
    /// # Examples
    ///
    /// ```
    /// use impc_util::diagnostic::Diagnostic;
    /// use impc_util::span::{SourceFile, SourcePosition, Span};
    ///
    /// let file = SourceFile::new("main.imp", "x = 3.;");
    /// let at = SourcePosition::new(1, 6, 5);
    /// let diag = Diagnostic::error("malformed number literal", Span::new(at, at.advanced_over(".")));
    ///
    /// assert_eq!(
    ///     diag.render(Some(&file)),
    ///     "error: malformed number literal\n  --> main.imp:1:6\n  1 | x = 3.;\n    |      ^"
    /// );
    /// ```
    pub fn render(&self, file: Option<&SourceFile>) -> String {
        let mut out = match self.code {
            Some(code) => format!("{}[{}]: {}", self.level, code, self.message),
            None => format!("{}: {}", self.level, self.message),
        };

        if let Some(file) = file {
            out.push_str(&format!("\n  --> {}:{}", file.name(), self.span.start));

            let line_number = self.span.start.line as usize;
            if let Ok(line) = file.line(line_number) {
                let start_column = self.span.start.column as usize;
                let end_column = if self.span.end.line == self.span.start.line {
                    self.span.end.column as usize
                } else {
                    line.chars().count() + 1
                };
                let snippet = SourceSnippet::new(line, line_number, start_column, end_column);
                out.push('\n');
                out.push_str(&snippet.format());
            }
        }

        for note in &self.notes {
            out.push_str(&format!("\n   = {}: {}", Level::Note, note));
        }
        for help in &self.helps {
            out.push_str(&format!("\n   = {}: {}", Level::Help, help));
        }

        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

/// Handler for collecting and reporting diagnostics
///
/// # Examples
///
/// ```
/// use impc_util::diagnostic::{Diagnostic, Handler};
/// use impc_util::span::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("unexpected character", Span::DUMMY));
///
/// if handler.has_errors() {
///     eprintln!("analysis found {} errors", handler.error_count());
/// }
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Render every collected diagnostic, separated by blank lines
    pub fn render_all(&self, file: Option<&SourceFile>) -> String {
        self.diagnostics
            .borrow()
            .iter()
            .map(|d| d.render(file))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
