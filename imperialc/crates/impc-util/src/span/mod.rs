//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations:
//! a [`SourcePosition`] is a single point (line, column and byte offset),
//! a [`Span`] is a half-open range between two positions.
//!
//! # Examples
//!
//! ```
//! use impc_util::span::{SourcePosition, Span};
//!
//! let start = SourcePosition::START;
//! let end = start.advanced_over("let");
//! let span = Span::new(start, end);
//!
//! assert_eq!(span.len(), 3);
//! assert_eq!(end.column, 4);
//! ```

mod source_map;

pub use source_map::SourceFile;

use std::fmt;

/// A point in source text.
///
/// Lines and columns are 1-based. Every scanned character advances the
/// column by one regardless of its encoded width; a newline moves to the
/// next line and resets the column. `offset` is the byte offset from the
/// start of the buffer.
///
/// # Examples
///
/// ```
/// use impc_util::span::SourcePosition;
///
/// let pos = SourcePosition::new(2, 5, 14);
/// assert_eq!(pos.to_string(), "2:5");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourcePosition {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
    /// Byte offset in source
    pub offset: usize,
}

impl SourcePosition {
    /// The position of the first character of a buffer.
    pub const START: SourcePosition = SourcePosition {
        line: 1,
        column: 1,
        offset: 0,
    };

    /// Create a new position
    #[inline]
    pub const fn new(line: u32, column: u32, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Returns the position reached after scanning `text` from here.
    ///
    /// Uses the same rules as the lexer cursor: `'\n'` starts a new line,
    /// every other character advances the column by one.
    ///
    /// # Examples
    ///
    /// ```
    /// use impc_util::span::SourcePosition;
    ///
    /// let end = SourcePosition::START.advanced_over("ab\ncdé");
    /// assert_eq!((end.line, end.column, end.offset), (2, 4, 7));
    /// ```
    pub fn advanced_over(self, text: &str) -> Self {
        let mut pos = self;
        for c in text.chars() {
            pos.offset += c.len_utf8();
            if c == '\n' {
                pos.line += 1;
                pos.column = 1;
            } else {
                pos.column += 1;
            }
        }
        pos
    }
}

impl Default for SourcePosition {
    #[inline]
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Source location span
///
/// A `Span` covers the text from `start` up to, but not including, `end`.
///
/// # Examples
///
/// ```
/// use impc_util::span::{SourcePosition, Span};
///
/// let start = SourcePosition::new(1, 5, 4);
/// let span = Span::new(start, start.advanced_over("x"));
/// assert_eq!(span.len(), 1);
/// assert_eq!(span.end.column, 6);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// First position covered by the span
    pub start: SourcePosition,
    /// Position just past the last covered character
    pub end: SourcePosition,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        start: SourcePosition::START,
        end: SourcePosition::START,
    };

    /// Create a new span
    #[inline]
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self { start, end }
    }

    /// Create an empty span at a single position
    ///
    /// # Examples
    ///
    /// ```
    /// use impc_util::span::{SourcePosition, Span};
    ///
    /// let point = Span::point(SourcePosition::new(3, 1, 20));
    /// assert!(point.is_empty());
    /// ```
    #[inline]
    pub fn point(at: SourcePosition) -> Self {
        Self { start: at, end: at }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
