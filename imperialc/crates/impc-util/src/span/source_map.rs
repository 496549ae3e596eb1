//! Source files and their line tables.
//!
//! The lexer computes positions while scanning; [`SourceFile`] is what
//! diagnostic rendering uses to get back from a position to the text of
//! the line it sits on.

use std::sync::Arc;

use crate::error::{SourceError, SourceResult};

/// A source file with its content and precomputed line starts
///
/// # Examples
///
/// ```
/// use impc_util::span::SourceFile;
///
/// let file = SourceFile::new("main.imp", "let x = 1;\nlet y = 2;");
/// assert_eq!(file.name(), "main.imp");
/// assert_eq!(file.line_count(), 2);
/// assert_eq!(file.line(2).unwrap(), "let y = 2;");
/// ```
#[derive(Clone, Debug)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Byte offset at which each line starts
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// A trailing newline starts a final, empty line.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the text of a line (1-based), without its line terminator
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidLineNumber`] when `line` is zero or
    /// past the last line.
    pub fn line(&self, line: usize) -> SourceResult<&str> {
        let index = line
            .checked_sub(1)
            .filter(|&i| i < self.line_starts.len())
            .ok_or(SourceError::InvalidLineNumber {
                line,
                max_lines: self.line_starts.len(),
            })?;

        let start = self.line_starts[index];
        let end = self
            .line_starts
            .get(index + 1)
            .map(|&next| next - 1)
            .unwrap_or(self.content.len());
        let text = &self.content[start..end];
        Ok(text.strip_suffix('\r').unwrap_or(text))
    }
}
