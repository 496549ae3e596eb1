//! Lexical errors.
//!
//! Scanning never aborts on bad input: every problem becomes a [`LexError`]
//! value next to the token stream. The only fatal condition is input that
//! is not text at all, reported by [`DecodingError`] before scanning starts.

use std::fmt;

use impc_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, SourcePosition, Span};
use thiserror::Error;

/// What went wrong while scanning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// A string literal reached end-of-line or end-of-input before its closing quote.
    UnterminatedString,
    /// A block comment reached end-of-input before its closing `*/`.
    UnterminatedComment,
    /// A character that starts no token.
    InvalidCharacter,
    /// A number literal cut short (`3.`) or out of range.
    MalformedNumber,
    /// An unknown or malformed escape sequence inside a string literal.
    InvalidEscape,
}

impl LexErrorKind {
    /// The variant name, as shown in the error panel.
    pub const fn name(&self) -> &'static str {
        match self {
            LexErrorKind::UnterminatedString => "UnterminatedString",
            LexErrorKind::UnterminatedComment => "UnterminatedComment",
            LexErrorKind::InvalidCharacter => "InvalidCharacter",
            LexErrorKind::MalformedNumber => "MalformedNumber",
            LexErrorKind::InvalidEscape => "InvalidEscape",
        }
    }

    /// Stable diagnostic code for the kind.
    pub const fn code(&self) -> DiagnosticCode {
        match self {
            LexErrorKind::InvalidCharacter => DiagnosticCode::E_LEXER_INVALID_CHAR,
            LexErrorKind::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexErrorKind::MalformedNumber => DiagnosticCode::E_LEXER_MALFORMED_NUMBER,
            LexErrorKind::UnterminatedComment => DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
            LexErrorKind::InvalidEscape => DiagnosticCode::E_LEXER_INVALID_ESCAPE,
        }
    }

    fn note(&self) -> Option<&'static str> {
        match self {
            LexErrorKind::UnterminatedString => Some("string literals cannot span lines"),
            LexErrorKind::UnterminatedComment => {
                Some("block comments nest, so every `/*` needs its own `*/`")
            },
            _ => None,
        }
    }

    fn help(&self) -> &'static str {
        match self {
            LexErrorKind::UnterminatedString => "close the string with a matching quote on the same line",
            LexErrorKind::UnterminatedComment => "close the block comment with `*/`",
            LexErrorKind::InvalidCharacter => "remove the character or put it inside a string",
            LexErrorKind::MalformedNumber => "write digits after the decimal point, e.g. `3.0`",
            LexErrorKind::InvalidEscape => {
                "valid escapes are \\n \\t \\r \\0 \\\\ \\\" \\' and \\u{...}"
            },
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            LexErrorKind::UnterminatedString => "unterminated string literal",
            LexErrorKind::UnterminatedComment => "unterminated block comment",
            LexErrorKind::InvalidCharacter => "invalid character",
            LexErrorKind::MalformedNumber => "malformed number literal",
            LexErrorKind::InvalidEscape => "invalid escape sequence",
        };
        f.write_str(message)
    }
}

/// A positioned lexical error.
///
/// `position` is where the problem starts (the opening quote of an
/// unterminated string, the `.` of `3.`, the invalid character itself) and
/// `text` is the offending source text beginning there.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at {position}: `{text}`")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub position: SourcePosition,
    pub text: String,
}

impl LexError {
    pub fn new(kind: LexErrorKind, position: SourcePosition, text: impl Into<String>) -> Self {
        Self {
            kind,
            position,
            text: text.into(),
        }
    }

    /// The source range of the offending text.
    pub fn span(&self) -> Span {
        Span::new(self.position, self.position.advanced_over(&self.text))
    }

    /// Converts the error into a coded diagnostic for rendering.
    ///
    /// # Example
    ///
    /// ```
    /// use impc_lex::tokenize;
    ///
    /// let output = tokenize("x = @;");
    /// let diag = output.errors[0].to_diagnostic();
    /// assert_eq!(diag.code.unwrap().as_str(), "E1001");
    /// assert_eq!(diag.message, "invalid character `@`");
    /// ```
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut builder =
            DiagnosticBuilder::error(format!("{} `{}`", self.kind, self.text.escape_debug()))
                .code(self.kind.code())
                .span(self.span());
        if let Some(note) = self.kind.note() {
            builder = builder.note(note);
        }
        builder.help(self.kind.help()).build()
    }
}

/// Input bytes that are not valid UTF-8 text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("source is not valid UTF-8: invalid byte sequence at offset {valid_up_to}")]
pub struct DecodingError {
    /// Byte offset of the first bad byte in the input.
    pub valid_up_to: usize,
    #[source]
    pub source: std::str::Utf8Error,
}

impl From<std::str::Utf8Error> for DecodingError {
    fn from(source: std::str::Utf8Error) -> Self {
        Self {
            valid_up_to: source.valid_up_to(),
            source,
        }
    }
}
