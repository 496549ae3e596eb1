//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for every token and error
//! the lexer produces.

use impc_util::SourcePosition;

/// A cursor for traversing source code character by character.
///
/// The cursor keeps a byte position into its source slice plus the
/// line/column of that position. Each character, whatever its encoded
/// width, advances the column by one; `'\n'` moves to the next line.
///
/// A cursor can start at an arbitrary origin (see [`Cursor::with_origin`]),
/// in which case the positions it reports are shifted by that origin while
/// slicing still works on the local source.
///
/// # Example
///
/// ```
/// use impc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x = 42;");
///
/// assert_eq!(cursor.current_char(), 'l');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'e');
/// assert_eq!(cursor.location().column, 2);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in `source`.
    position: usize,

    /// Byte offset of `source` within the whole buffer.
    base_offset: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at line 1, column 1 of `source`.
    pub fn new(source: &'a str) -> Self {
        Self::with_origin(source, SourcePosition::START)
    }

    /// Creates a cursor whose first character sits at `origin`.
    ///
    /// # Example
    ///
    /// ```
    /// use impc_lex::cursor::Cursor;
    /// use impc_util::SourcePosition;
    ///
    /// let cursor = Cursor::with_origin("b", SourcePosition::new(2, 1, 2));
    /// assert_eq!(cursor.location(), SourcePosition::new(2, 1, 2));
    /// ```
    pub fn with_origin(source: &'a str, origin: SourcePosition) -> Self {
        Self {
            source,
            position: 0,
            base_offset: origin.offset,
            line: origin.line,
            column: origin.column,
        }
    }

    /// Returns the current character at the cursor position.
    ///
    /// Returns '\0' (null character) if at the end of the source.
    #[inline]
    pub fn current_char(&self) -> char {
        self.remaining().chars().next().unwrap_or('\0')
    }

    /// Returns the character `offset` characters ahead (0 = current).
    ///
    /// Returns '\0' past the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use impc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("aé1");
    /// assert_eq!(cursor.peek_char(0), 'a');
    /// assert_eq!(cursor.peek_char(1), 'é');
    /// assert_eq!(cursor.peek_char(2), '1');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.remaining().chars().nth(offset).unwrap_or('\0')
    }

    /// Advances the cursor to the next character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.remaining().chars().next() else {
            return;
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advances the cursor by the given number of characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    /// Advances while `predicate` holds for the current character.
    ///
    /// # Example
    ///
    /// ```
    /// use impc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123abc");
    /// cursor.eat_while(|c| c.is_ascii_digit());
    /// assert_eq!(cursor.current_char(), 'a');
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Matches and consumes the expected character if present.
    ///
    /// Returns true if the character was matched and consumed, false otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use impc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("*/");
    /// assert!(cursor.match_char('*'));
    /// assert!(!cursor.match_char('*'));
    /// assert_eq!(cursor.current_char(), '/');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the position of the current character in the whole buffer.
    #[inline]
    pub fn location(&self) -> SourcePosition {
        SourcePosition::new(self.line, self.column, self.base_offset + self.position)
    }

    /// Returns the current byte position within this cursor's source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text from `start` (a local byte position) up to
    /// the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text not yet consumed.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("hello");
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.location(), SourcePosition::START);
        assert_eq!(cursor.current_char(), 'h');
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = Cursor::new("日本");
        cursor.advance();
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.location().column, 2);
        assert_eq!(cursor.current_char(), '本');
    }

    #[test]
    fn test_advance_at_end_is_noop() {
        let mut cursor = Cursor::new("a");
        cursor.advance();
        assert!(cursor.is_at_end());
        cursor.advance();
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.location().column, 2);
        assert_eq!(cursor.current_char(), '\0');
    }

    #[test]
    fn test_line_column_tracking() {
        let mut cursor = Cursor::new("ab\ncd");
        cursor.eat_while(|c| c != 'd');
        assert_eq!(cursor.location(), SourcePosition::new(2, 2, 4));
    }

    #[test]
    fn test_slice_and_remaining() {
        let mut cursor = Cursor::new("let x");
        cursor.eat_while(|c| c.is_alphabetic());
        assert_eq!(cursor.slice_from(0), "let");
        assert_eq!(cursor.remaining(), " x");
    }

    #[test]
    fn test_origin_shifts_offsets_only_in_reports() {
        let origin = SourcePosition::new(10, 4, 200);
        let mut cursor = Cursor::with_origin("xy\nz", origin);
        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.location(), SourcePosition::new(11, 1, 203));
        assert_eq!(cursor.slice_from(0), "xy\n");
    }

    #[test]
    fn test_match_char_at_end() {
        let mut cursor = Cursor::new("");
        assert!(!cursor.match_char('\0'));
    }
}
