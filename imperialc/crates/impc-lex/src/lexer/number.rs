//! Number literal lexing.
//!
//! This module handles lexing of integer and floating-point literals.

use crate::error::LexErrorKind;
use crate::token::{LiteralValue, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// # Number Formats
    ///
    /// - Integer: `0`, `42`, `18446744073709551615`
    /// - Float: `3.14`, `0.5`
    ///
    /// A `.` not followed by a digit ends the literal. It is reported as
    /// `MalformedNumber` and left in place to lex as punctuation.
    ///
    /// # Returns
    ///
    /// Either an `IntegerLiteral` carrying a `u64` or a `FloatLiteral`
    /// carrying an `f64`. Out-of-range literals carry no value.
    pub(crate) fn lex_number(&mut self) -> Token {
        self.cursor.eat_while(|c| c.is_ascii_digit());

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());
            return self.finish_float();
        }

        // The literal's own error sits before the dot in the source.
        let token = self.finish_integer();
        if self.cursor.current_char() == '.' {
            let dot = self.cursor.location();
            self.report_error(LexErrorKind::MalformedNumber, dot, ".");
        }
        token
    }

    fn finish_integer(&mut self) -> Token {
        let text = self.current_lexeme();
        let value = match text.parse::<u64>() {
            Ok(n) => Some(LiteralValue::Integer(n)),
            Err(_) => {
                self.report_error(LexErrorKind::MalformedNumber, self.token_start_pos, text);
                None
            },
        };
        self.make_token(TokenKind::IntegerLiteral, value)
    }

    fn finish_float(&mut self) -> Token {
        let text = self.current_lexeme();
        let value = match text.parse::<f64>() {
            Ok(f) if f.is_finite() => Some(LiteralValue::Float(f)),
            _ => {
                self.report_error(LexErrorKind::MalformedNumber, self.token_start_pos, text);
                None
            },
        };
        self.make_token(TokenKind::FloatLiteral, value)
    }
}
