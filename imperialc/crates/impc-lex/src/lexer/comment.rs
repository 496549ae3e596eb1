//! Whitespace and comment lexing.
//!
//! Whitespace is skipped. Comments become `Comment` tokens so that
//! highlighting can see them; the parser drops them.

use crate::error::LexErrorKind;
use crate::token::{Token, TokenKind};
use crate::unicode::is_whitespace;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips spaces, tabs, carriage returns and newlines.
    pub(crate) fn skip_whitespace(&mut self) {
        self.cursor.eat_while(is_whitespace);
    }

    /// Lexes a `//` line comment or a `/* */` block comment.
    ///
    /// The cursor must be on the `/` of the opening marker.
    pub(crate) fn lex_comment(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('/') {
            self.cursor.eat_while(|c| c != '\n');
        } else {
            self.cursor.advance();
            self.skip_block_comment_body();
        }
        self.make_token(TokenKind::Comment, None)
    }

    /// Consumes a block comment body after its opening `/*`.
    ///
    /// Block comments nest. Without a matching close the comment runs to
    /// end of input and `UnterminatedComment` is reported at the opening
    /// marker.
    fn skip_block_comment_body(&mut self) {
        let mut depth = 1u32;

        while depth > 0 {
            if self.cursor.is_at_end() {
                let text = self.current_lexeme();
                self.report_error(LexErrorKind::UnterminatedComment, self.token_start_pos, text);
                return;
            }

            if self.cursor.current_char() == '/' && self.cursor.peek_char(1) == '*' {
                self.cursor.advance_n(2);
                depth += 1;
            } else if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance_n(2);
                depth -= 1;
            } else {
                self.cursor.advance();
            }
        }
    }
}
