//! impc-lex - Lexical Analyzer for the ImperialCode Language
//!
//! This crate provides the lexer (tokenizer) for ImperialCode. It turns
//! source text into a stream of classified, positioned tokens that a parser
//! can consume, together with any lexical errors found along the way.
//!
//! # Overview
//!
//! Lexical analysis is the first phase of compilation. It transforms a stream
//! of characters into a stream of tokens. This process is also called
//! "tokenization" or "scanning".
//!
//! Bad input never stops the scan. Each problem is recorded as a
//! [`LexError`] and the lexer carries on, so callers always get a token
//! stream that ends in `EndOfFile`.
//!
//! # Example Usage
//!
//! ```
//! use impc_lex::token::{Keyword, TokenKind};
//! use impc_lex::{tokenize, Lexer};
//!
//! let output = tokenize("let x = 42;");
//! assert!(!output.has_errors());
//! assert_eq!(output.tokens[0].kind, TokenKind::Keyword(Keyword::Let));
//! assert_eq!(output.tokens.last().map(|t| t.kind), Some(TokenKind::EndOfFile));
//!
//! // Or get tokens one at a time
//! let mut lexer = Lexer::new("let x = 42;");
//! assert_eq!(lexer.next_token().lexeme, "let");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`error`] - Lexical and decoding errors
//! - [`report`] - Results-table rows
//! - [`unicode`] - Character classification
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `let`, `const`, `fn`, `return`, `if`, `else`, `elif`, `while`, `for`,
//! `in`, `break`, `continue`, `true`, `false`, `null`, `struct`, `import`
//!
//! ## Identifiers
//!
//! A letter or `_`, then letters, digits or `_`. Letters include any
//! Unicode alphabetic character.
//!
//! ## Literals
//!
//! - **Integer**: `42`
//! - **Float**: `3.14`
//! - **String**: `"hello"`, `'world\n'`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`, `**`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Logical**: `&&`, `||`, `!`
//! - **Assignment**: `=`, `+=`, `-=`, `*=`, `/=`, `%=`
//! - **Arrow**: `->`
//!
//! ## Punctuation
//!
//! `(`, `)`, `{`, `}`, `[`, `]`, `,`, `;`, `:`, `.`
//!
//! ## Comments
//!
//! `// line` and `/* block */` (nesting). Both are emitted as `Comment`
//! tokens; [`LexOutput::significant`] filters them out.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod report;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{DecodingError, LexError, LexErrorKind};
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Keyword, LiteralValue, Operator, Punctuation, Token, TokenKind};

/// UTF-8 byte-order mark, dropped from the start of byte input.
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Everything one scan produces.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LexOutput {
    /// Tokens in source order, ending with `EndOfFile`.
    pub tokens: Vec<Token>,
    /// Errors in source order.
    pub errors: Vec<LexError>,
}

impl LexOutput {
    /// Splits into the `(tokens, errors)` pair.
    pub fn into_parts(self) -> (Vec<Token>, Vec<LexError>) {
        (self.tokens, self.errors)
    }

    /// Tokens a parser consumes: everything except comments.
    pub fn significant(&self) -> impl Iterator<Item = &Token> + '_ {
        self.tokens.iter().filter(|token| !token.is_trivia())
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scans `source` into tokens and errors.
///
/// Pure and deterministic: the same input always gives the same output.
/// Empty input gives a single `EndOfFile` at 1:1.
///
/// # Example
///
/// ```
/// use impc_lex::{tokenize, LexErrorKind, TokenKind};
///
/// let output = tokenize("@");
/// assert_eq!(output.tokens.len(), 1);
/// assert_eq!(output.tokens[0].kind, TokenKind::EndOfFile);
/// assert_eq!(output.tokens[0].start.column, 2);
/// assert_eq!(output.errors[0].kind, LexErrorKind::InvalidCharacter);
/// ```
pub fn tokenize(source: &str) -> LexOutput {
    let mut lexer = Lexer::new(source);
    let tokens: Vec<Token> = lexer.by_ref().collect();
    LexOutput {
        tokens,
        errors: lexer.into_errors(),
    }
}

/// Decodes `bytes` as UTF-8 source text.
///
/// A leading byte-order mark is skipped, so token positions count from the
/// first byte after it.
///
/// # Errors
///
/// Returns [`DecodingError`] if the bytes are not valid UTF-8. Its
/// `valid_up_to` is an offset into `bytes` as given, BOM included.
pub fn decode_source(bytes: &[u8]) -> Result<&str, DecodingError> {
    let (body, skipped) = match bytes.strip_prefix(&UTF8_BOM) {
        Some(rest) => (rest, UTF8_BOM.len()),
        None => (bytes, 0),
    };
    std::str::from_utf8(body).map_err(|source| {
        let mut err = DecodingError::from(source);
        err.valid_up_to += skipped;
        err
    })
}

/// Decodes `bytes` with [`decode_source`] and scans them.
///
/// # Errors
///
/// Returns [`DecodingError`] before scanning if the bytes are not valid
/// UTF-8.
pub fn tokenize_bytes(bytes: &[u8]) -> Result<LexOutput, DecodingError> {
    decode_source(bytes).map(tokenize)
}
