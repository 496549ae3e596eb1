//! Identifier and keyword lexing.
//!
//! This module handles lexing of identifiers and keywords.

use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::unicode::is_ident_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with a letter or underscore, followed by letters,
    /// digits or underscores. After reading the identifier, checks if it
    /// matches a reserved keyword exactly.
    ///
    /// # Returns
    ///
    /// Either a `Keyword` token (e.g., `Keyword(let)`) or an `Identifier`
    pub(crate) fn lex_identifier(&mut self) -> Token {
        self.cursor.eat_while(is_ident_continue);

        let kind = keyword_from_ident(self.current_lexeme())
            .map_or(TokenKind::Identifier, TokenKind::Keyword);

        self.make_token(kind, None)
    }
}
