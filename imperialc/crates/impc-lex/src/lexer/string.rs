//! String literal lexing.
//!
//! Strings open with `"` or `'` and close with the same quote. They may not
//! span lines.

use crate::error::{LexError, LexErrorKind};
use crate::token::{LiteralValue, Token, TokenKind};
use crate::unicode::char_from_hex;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// Parses a string enclosed in matching quotes, handling escape
    /// sequences. A string cut off by end-of-line or end-of-input is
    /// reported at its opening quote; the newline is left for the next
    /// token.
    ///
    /// # Returns
    ///
    /// A `StringLiteral` whose value is the decoded content
    pub(crate) fn lex_string(&mut self) -> Token {
        let quote = self.cursor.current_char();
        self.cursor.advance();

        let mut content = String::new();
        // Escape errors found below sit after the opening quote.
        let first_error = self.errors.len();

        loop {
            if self.cursor.is_at_end() || self.cursor.current_char() == '\n' {
                let text = self.current_lexeme();
                self.errors.insert(
                    first_error,
                    LexError::new(LexErrorKind::UnterminatedString, self.token_start_pos, text),
                );
                break;
            }

            let c = self.cursor.current_char();

            if c == quote {
                self.cursor.advance();
                break;
            }

            if c == '\\' {
                self.lex_escape(&mut content);
            } else {
                content.push(c);
                self.cursor.advance();
            }
        }

        self.make_token(TokenKind::StringLiteral, Some(LiteralValue::Str(content)))
    }

    /// Decodes one escape sequence starting at the backslash into `content`.
    ///
    /// # Escape Sequences
    ///
    /// - `\n` - Newline
    /// - `\t` - Tab
    /// - `\r` - Carriage return
    /// - `\0` - Null
    /// - `\\` - Backslash
    /// - `\"` - Double quote
    /// - `\'` - Single quote
    /// - `\u{XXXX}` - Unicode scalar value (1-6 hex digits)
    ///
    /// Anything else is an `InvalidEscape`; its raw text is kept.
    fn lex_escape(&mut self, content: &mut String) {
        let backslash = self.cursor.location();
        let escape_start = self.cursor.position();
        self.cursor.advance();

        if self.cursor.is_at_end() || self.cursor.current_char() == '\n' {
            content.push('\\');
            return;
        }

        let decoded = match self.cursor.current_char() {
            'n' => Some('\n'),
            't' => Some('\t'),
            'r' => Some('\r'),
            '0' => Some('\0'),
            '\\' => Some('\\'),
            '"' => Some('"'),
            '\'' => Some('\''),
            'u' => {
                self.cursor.advance();
                match self.lex_unicode_escape() {
                    Some(c) => {
                        content.push(c);
                        return;
                    },
                    None => None,
                }
            },
            _ => {
                self.cursor.advance();
                None
            },
        };

        match decoded {
            Some(c) => {
                content.push(c);
                self.cursor.advance();
            },
            None => {
                let raw = self.cursor.slice_from(escape_start);
                self.report_error(LexErrorKind::InvalidEscape, backslash, raw);
                content.push_str(raw);
            },
        }
    }

    /// Parses the `{XXXX}` part of a `\u` escape.
    fn lex_unicode_escape(&mut self) -> Option<char> {
        if !self.cursor.match_char('{') {
            return None;
        }
        let digits_start = self.cursor.position();
        self.cursor.eat_while(|c| c.is_ascii_hexdigit());
        let digits = self.cursor.slice_from(digits_start);
        if !self.cursor.match_char('}') {
            return None;
        }
        char_from_hex(digits)
    }
}
