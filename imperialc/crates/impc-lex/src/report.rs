//! Results-table rows for display.
//!
//! The editor shows tokens in a four-column table (Line, Lexeme,
//! Token-type, Attribute) and errors in a separate panel. This module
//! flattens tokens and errors into those rows; how they are drawn is up to
//! the host.

use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// Attribute shown for tokens that carry no decoded value.
pub const NO_ATTRIBUTE: &str = "None";

/// Which tokens become table rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowFilter {
    /// Include `Comment` tokens.
    pub include_comments: bool,
}

impl Default for RowFilter {
    fn default() -> Self {
        Self {
            include_comments: true,
        }
    }
}

/// One row of the results table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableRow {
    pub line: u32,
    pub lexeme: String,
    /// Bare variant name: `Keyword`, `IntegerLiteral`, ...
    pub token_kind: String,
    /// Decoded literal value, or `"None"`.
    pub attribute: String,
}

impl From<&Token> for TableRow {
    fn from(token: &Token) -> Self {
        Self {
            line: token.start.line,
            lexeme: token.lexeme.clone(),
            token_kind: token.kind.name().to_string(),
            attribute: token
                .value
                .as_ref()
                .map_or_else(|| NO_ATTRIBUTE.to_string(), ToString::to_string),
        }
    }
}

/// One row of the error panel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ErrorRow {
    pub line: u32,
    pub column: u32,
    /// Bare variant name: `UnterminatedString`, ...
    pub kind: String,
    pub text: String,
    pub message: String,
}

impl From<&LexError> for ErrorRow {
    fn from(error: &LexError) -> Self {
        Self {
            line: error.position.line,
            column: error.position.column,
            kind: error.kind.name().to_string(),
            text: error.text.clone(),
            message: error.kind.to_string(),
        }
    }
}

/// Builds table rows for `tokens`, skipping `EndOfFile`.
///
/// # Example
///
/// ```
/// use impc_lex::report::{token_rows, RowFilter};
/// use impc_lex::tokenize;
///
/// let output = tokenize("let x = 1.5;");
/// let rows = token_rows(&output.tokens, &RowFilter::default());
/// assert_eq!(rows.len(), 5);
/// assert_eq!(rows[0].token_kind, "Keyword");
/// assert_eq!(rows[0].attribute, "None");
/// assert_eq!(rows[3].attribute, "1.5");
/// ```
pub fn token_rows(tokens: &[Token], filter: &RowFilter) -> Vec<TableRow> {
    tokens
        .iter()
        .filter(|token| match token.kind {
            TokenKind::EndOfFile => false,
            TokenKind::Comment => filter.include_comments,
            _ => true,
        })
        .map(TableRow::from)
        .collect()
}

/// Builds error-panel rows, in the order the errors were found.
pub fn error_rows(errors: &[LexError]) -> Vec<ErrorRow> {
    errors.iter().map(ErrorRow::from).collect()
}
