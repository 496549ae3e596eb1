//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use impc_util::SourcePosition;

use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind};
use crate::token::{LiteralValue, Token, TokenKind};
use crate::unicode::is_ident_start;

/// Lexer for the ImperialCode language.
///
/// The lexer makes a single left-to-right pass over an immutable buffer.
/// Each call to [`Lexer::next_token`] skips whitespace, then consumes the
/// longest lexeme that forms a token. Problems are recorded as
/// [`LexError`]s and scanning carries on, so the token stream always runs
/// through to `EndOfFile`.
///
/// # Example
///
/// ```
/// use impc_lex::token::{Keyword, TokenKind};
/// use impc_lex::Lexer;
///
/// let mut lexer = Lexer::new("let x = 42;");
/// assert_eq!(lexer.next_token().kind, TokenKind::Keyword(Keyword::Let));
/// assert_eq!(lexer.next_token().lexeme, "x");
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Byte position (within the cursor's source) where the current token starts.
    pub(crate) token_start: usize,

    /// Line/column/offset where the current token starts.
    pub(crate) token_start_pos: SourcePosition,

    /// Errors recorded so far, in source order.
    pub(crate) errors: Vec<LexError>,

    /// Set once `EndOfFile` has been produced.
    pub(crate) finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self::with_origin(source, SourcePosition::START)
    }

    /// Creates a lexer for a chunk of a larger buffer.
    ///
    /// `origin` is the position of the chunk's first character in the whole
    /// buffer; every reported position is relative to the whole buffer.
    /// Chunks should be split at line starts so no token straddles two
    /// chunks.
    ///
    /// # Example
    ///
    /// ```
    /// use impc_lex::Lexer;
    /// use impc_util::SourcePosition;
    ///
    /// let mut lexer = Lexer::with_origin("y", SourcePosition::new(2, 1, 6));
    /// let token = lexer.next_token();
    /// assert_eq!(token.start, SourcePosition::new(2, 1, 6));
    /// ```
    pub fn with_origin(source: &'a str, origin: SourcePosition) -> Self {
        Self {
            cursor: Cursor::with_origin(source, origin),
            token_start: 0,
            token_start_pos: origin,
            errors: Vec::new(),
            finished: false,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace, then dispatches on the current character. Characters
    /// that start no token are reported and skipped one at a time, so every
    /// call makes progress. At end of input returns `EndOfFile`, again on
    /// every further call.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();

            self.token_start = self.cursor.position();
            self.token_start_pos = self.cursor.location();

            if self.cursor.is_at_end() {
                self.finished = true;
                return self.make_token(TokenKind::EndOfFile, None);
            }

            match self.cursor.current_char() {
                '/' if matches!(self.cursor.peek_char(1), '/' | '*') => return self.lex_comment(),
                '"' | '\'' => return self.lex_string(),
                c if c.is_ascii_digit() => return self.lex_number(),
                c if is_ident_start(c) => return self.lex_identifier(),
                _ => {
                    if let Some(token) = self.lex_symbol() {
                        return token;
                    }
                    self.skip_invalid_character();
                },
            }
        }
    }

    /// Builds a token spanning from the current token start to the cursor.
    pub(crate) fn make_token(&self, kind: TokenKind, value: Option<LiteralValue>) -> Token {
        Token {
            kind,
            lexeme: self.cursor.slice_from(self.token_start).to_string(),
            start: self.token_start_pos,
            end: self.cursor.location(),
            value,
        }
    }

    /// Records a lexical error.
    pub(crate) fn report_error(
        &mut self,
        kind: LexErrorKind,
        position: SourcePosition,
        text: impl Into<String>,
    ) {
        self.errors.push(LexError::new(kind, position, text));
    }

    /// Text of the token scanned so far.
    pub(crate) fn current_lexeme(&self) -> &'a str {
        self.cursor.slice_from(self.token_start)
    }

    /// Returns the position of the next character to be lexed.
    pub fn location(&self) -> SourcePosition {
        self.cursor.location()
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Consumes the lexer, returning the recorded errors.
    pub fn into_errors(self) -> Vec<LexError> {
        self.errors
    }
}

/// Yields every token including the final `EndOfFile`, then `None`.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            None
        } else {
            Some(self.next_token())
        }
    }
}
