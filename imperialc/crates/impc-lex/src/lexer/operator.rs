//! Operator and punctuation lexing.
//!
//! This module handles lexing of operators and punctuation, and the
//! fallback for characters that start no token.

use crate::error::LexErrorKind;
use crate::token::{Operator, Punctuation, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an operator or punctuation character.
    ///
    /// Operators are matched longest first, so `<=` wins over `<` and `**`
    /// over `*`.
    ///
    /// # Returns
    ///
    /// `None` when the current character is neither, with the cursor
    /// left where it was.
    pub(crate) fn lex_symbol(&mut self) -> Option<Token> {
        if let Some((op, len)) = Operator::longest_match(self.cursor.remaining()) {
            // Operator spellings are ASCII, so byte length equals char count.
            self.cursor.advance_n(len);
            return Some(self.make_token(TokenKind::Operator(op), None));
        }

        let punct = Punctuation::from_char(self.cursor.current_char())?;
        self.cursor.advance();
        Some(self.make_token(TokenKind::Punctuation(punct), None))
    }

    /// Reports and consumes exactly one character that starts no token.
    pub(crate) fn skip_invalid_character(&mut self) {
        let c = self.cursor.current_char();
        self.cursor.advance();
        self.report_error(LexErrorKind::InvalidCharacter, self.token_start_pos, c.to_string());
    }
}
