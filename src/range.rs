//! Position and location tracking for source text
//!
//! - [`Position`] - A zero-based line:column position
//! - [`Range`] - A byte span together with its start/end positions
//! - [`SourceLocation`] - Converts byte offsets to positions
//!
//! Columns count characters, not bytes, so multi-byte UTF-8 input reports the
//! column a reader would expect. Range ends are exclusive.

use serde::Serialize;
use std::fmt;
use std::ops::Range as ByteRange;

/// A position in source text (zero-based line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A location in source text (byte span plus start and end positions)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Range {
    pub span: ByteRange<usize>,
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(span: ByteRange<usize>, start: Position, end: Position) -> Self {
        Self { span, start, end }
    }

    /// The `(line, column, line, column)` form used by token consumers.
    pub fn as_tuple(&self) -> (usize, usize, usize, usize) {
        (
            self.start.line,
            self.start.column,
            self.end.line,
            self.end.column,
        )
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Provides fast conversion from byte offsets to line/column positions
#[derive(Debug, Clone)]
pub struct SourceLocation {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceLocation {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        let mut chars = source.char_indices().peekable();

        // A bare '\r' ends a line too; "\r\n" counts once.
        while let Some((byte_pos, ch)) = chars.next() {
            let ends_line = match ch {
                '\n' => true,
                '\r' => !matches!(chars.peek(), Some((_, '\n'))),
                _ => false,
            };
            if ends_line {
                line_starts.push(byte_pos + 1);
            }
        }

        Self { line_starts }
    }

    /// Convert a byte offset to a line/column position.
    ///
    /// `source` must be the text this locator was built from.
    pub fn byte_to_position(&self, source: &str, byte_offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        let line_start = self.line_starts[line];
        let column = source
            .get(line_start..byte_offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(byte_offset - line_start);

        Position::new(line, column)
    }

    pub fn byte_range_to_range(&self, source: &str, range: ByteRange<usize>) -> Range {
        let start = self.byte_to_position(source, range.start);
        let end = self.byte_to_position(source, range.end);
        Range::new(range, start, end)
    }
}
