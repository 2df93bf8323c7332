//! Span and position types for source locations.
//!
//! All offsets are counted in Unicode scalar values (code points), never in
//! UTF-8 bytes, so that reported positions match user-perceived character
//! counts regardless of how the text is stored.

use std::ops::Range;
use std::str::CharIndices;

use serde::{Deserialize, Serialize};

/// A position in source text.
///
/// Lines and columns are both 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number in code points (1-indexed).
    pub column: u32,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// A half-open range `[start, end)` of code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    /// Start code-point offset (0-indexed, inclusive).
    pub start: u32,
    /// End code-point offset (0-indexed, exclusive).
    pub end: u32,
}

impl Span {
    /// Creates a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns the length of the span in code points.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns true if the span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if this span contains the given offset.
    #[inline]
    pub const fn contains(&self, offset: u32) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Returns true if `other` lies entirely within this span.
    #[inline]
    pub const fn encloses(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns true if the two spans share at least one code point.
    #[inline]
    pub const fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Converts this span into a byte range of `text`.
    ///
    /// Returns `None` when the span reaches past the end of `text` or is
    /// inverted. Converting many spans of one text should go through a single
    /// [`ByteCursor`] instead.
    pub fn byte_range(&self, text: &str) -> Option<Range<usize>> {
        ByteCursor::new(text).byte_range(*self)
    }
}

/// Converts non-decreasing code-point offsets of one text to byte offsets in a
/// single forward walk.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    chars: CharIndices<'a>,
    offset: u32,
    byte: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.char_indices(),
            offset: 0,
            byte: 0,
        }
    }

    /// Byte offset of code point `n`, allowing `n == char count`.
    ///
    /// Returns `None` when `n` is past the end of the text or behind an offset
    /// already visited.
    pub fn byte_offset(&mut self, n: u32) -> Option<usize> {
        if n < self.offset {
            return None;
        }
        while self.offset < n {
            let (_, c) = self.chars.next()?;
            self.byte += c.len_utf8();
            self.offset += 1;
        }
        Some(self.byte)
    }

    /// Byte range of `span`. Spans must be visited in ascending, non-overlapping order.
    pub fn byte_range(&mut self, span: Span) -> Option<Range<usize>> {
        if span.start > span.end {
            return None;
        }
        let start = self.byte_offset(span.start)?;
        let end = self.byte_offset(span.end)?;
        Some(start..end)
    }
}

/// Number of code points in `text`, as used by [`Span`].
#[inline]
pub fn char_len(text: &str) -> u32 {
    text.chars().count() as u32
}

/// Location information combining start and end positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    /// Start position.
    pub start: Position,
    /// End position.
    pub end: Position,
}

impl Location {
    /// Creates a new location.
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// Maps code-point offsets to line/column positions.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Code-point offset at which each line starts.
    line_starts: Vec<u32>,
}

impl LineIndex {
    /// Builds the index for `text`. Lines are separated by `\n`.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (offset, c) in text.chars().enumerate() {
            if c == '\n' {
                line_starts.push(offset as u32 + 1);
            }
        }
        Self { line_starts }
    }

    /// Returns the position of a code-point offset.
    pub fn position(&self, offset: u32) -> Position {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        Position::new(line as u32, offset - line_start + 1)
    }

    /// Returns the location covered by a span.
    pub fn location(&self, span: Span) -> Location {
        Location::new(self.position(span.start), self.position(span.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_span() {
        let span = Span::new(10, 20);
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
        assert!(span.contains(15));
        assert!(!span.contains(5));
        assert!(!span.contains(20));
    }

    #[test]
    fn test_empty_span() {
        let span = Span::new(5, 5);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
        assert!(!span.contains(5));
    }

    #[test]
    fn test_span_encloses() {
        let outer = Span::new(0, 10);
        assert!(outer.encloses(&Span::new(9, 10)));
        assert!(outer.encloses(&outer));
        assert!(!outer.encloses(&Span::new(9, 11)));
    }

    #[test]
    fn test_span_overlaps() {
        let span = Span::new(10, 20);
        assert!(span.overlaps(&Span::new(15, 25)));
        assert!(!span.overlaps(&Span::new(20, 25)));
        assert!(!span.overlaps(&Span::new(0, 10)));
    }

    #[test]
    fn test_byte_range_counts_code_points() {
        // Each Arabic letter takes two bytes in UTF-8.
        let text = "أهلا ً";
        let span = Span::new(4, 6);
        let range = span.byte_range(text).unwrap();
        assert_eq!(&text[range], " \u{064B}");
    }

    #[test]
    fn test_byte_range_at_end_of_text() {
        let text = "abc";
        assert_eq!(Span::new(3, 3).byte_range(text), Some(3..3));
        assert_eq!(Span::new(0, 3).byte_range(text), Some(0..3));
    }

    #[test]
    fn test_byte_range_out_of_bounds() {
        assert_eq!(Span::new(0, 4).byte_range("abc"), None);
        assert_eq!(Span::new(5, 6).byte_range("abc"), None);
    }

    #[test]
    fn test_byte_range_with_astral_characters() {
        // U+1F600 is four bytes in UTF-8 and two units in UTF-16, one code point.
        let text = "\u{1F600}a\u{064B}";
        let range = Span::new(1, 3).byte_range(text).unwrap();
        assert_eq!(&text[range], "a\u{064B}");
    }

    #[test]
    fn test_byte_cursor_walks_forward() {
        let text = "أهلا ً وسهلا ً";
        let mut cursor = ByteCursor::new(text);

        let first = cursor.byte_range(Span::new(4, 6)).unwrap();
        let second = cursor.byte_range(Span::new(12, 14)).unwrap();

        assert_eq!(&text[first], " \u{064B}");
        assert_eq!(&text[second], " \u{064B}");
        assert_eq!(cursor.byte_offset(14), Some(text.len()));
    }

    #[test]
    fn test_byte_cursor_rejects_offsets_behind_it() {
        let mut cursor = ByteCursor::new("abcdef");
        assert_eq!(cursor.byte_offset(4), Some(4));
        assert_eq!(cursor.byte_offset(2), None);
        assert_eq!(cursor.byte_range(Span::new(5, 4)), None);
        assert_eq!(cursor.byte_offset(7), None);
    }

    #[test]
    fn test_char_len() {
        assert_eq!(char_len(""), 0);
        assert_eq!(char_len("الآن"), 4);
    }

    #[test]
    fn test_line_index_single_line() {
        let index = LineIndex::new("ضيّْق");
        assert_eq!(index.position(0), Position::new(1, 1));
        assert_eq!(index.position(2), Position::new(1, 3));
    }

    #[test]
    fn test_line_index_multiple_lines() {
        let index = LineIndex::new("ab\ncd\n\nef");
        assert_eq!(index.position(1), Position::new(1, 2));
        assert_eq!(index.position(2), Position::new(1, 3));
        assert_eq!(index.position(3), Position::new(2, 1));
        assert_eq!(index.position(6), Position::new(3, 1));
        assert_eq!(index.position(8), Position::new(4, 2));
    }

    #[test]
    fn test_line_index_location() {
        let index = LineIndex::new("x\nyz");
        let loc = index.location(Span::new(2, 4));
        assert_eq!(loc, Location::new(Position::new(2, 1), Position::new(2, 3)));
    }

    #[test]
    fn test_span_serialization() {
        let span = Span::new(10, 20);
        let json = serde_json::to_string(&span).unwrap();
        assert_eq!(json, r#"{"start":10,"end":20}"#);
    }

    #[test]
    fn test_span_deserialization() {
        let json = r#"{"start": 5, "end": 15}"#;
        let span: Span = serde_json::from_str(json).unwrap();
        assert_eq!(span, Span::new(5, 15));
    }
}
