//! Lazy regex scanning that reports code-point spans.
//!
//! The `regex` crate works on byte offsets and has no look-around. This module
//! adds three things on top of it: code-point offsets, a self-overlapping
//! iteration mode, and a "lookahead tail" that must match after a head without
//! being consumed.

use regex::Regex;

use crate::span::Span;

/// Error returned when a pattern fails to compile.
pub use regex::Error as PatternError;

/// How the scanner resumes after a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Standard leftmost, non-overlapping iteration: resume at the match end.
    Disjoint,
    /// Resume one code point after the match *start*, so matches may overlap.
    SelfOverlapping,
}

/// A compiled scan pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    mode: ScanMode,
    /// When set, only capture group 1 is reported and scanning resumes at its end.
    lookahead: bool,
}

impl Pattern {
    /// Compiles a disjoint pattern.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            mode: ScanMode::Disjoint,
            lookahead: false,
        })
    }

    /// Compiles a self-overlapping pattern.
    pub fn self_overlapping(pattern: &str) -> Result<Self, PatternError> {
        Ok(Self {
            mode: ScanMode::SelfOverlapping,
            ..Self::new(pattern)?
        })
    }

    /// Compiles `head(?=tail)`: reports `head` only when `tail` follows it.
    ///
    /// The tail is matched but not consumed, so a later head may start inside
    /// an earlier tail.
    pub fn with_lookahead(head: &str, tail: &str) -> Result<Self, PatternError> {
        Ok(Self {
            regex: Regex::new(&format!("({head}){tail}"))?,
            mode: ScanMode::Disjoint,
            lookahead: true,
        })
    }

    /// Returns the scan mode.
    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    /// Returns the underlying regex source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Scans `text` lazily.
    pub fn find_matches<'p, 't>(&'p self, text: &'t str) -> Matches<'p, 't> {
        Matches {
            pattern: self,
            text,
            pos: 0,
            counted_bytes: 0,
            counted_chars: 0,
        }
    }

    /// Byte range of the next reported match at or after `pos`.
    fn next_range(&self, text: &str, pos: usize) -> Option<(usize, usize)> {
        if self.lookahead {
            let caps = self.regex.captures_at(text, pos)?;
            let head = caps.get(1)?;
            Some((head.start(), head.end()))
        } else {
            let m = self.regex.find_at(text, pos)?;
            Some((m.start(), m.end()))
        }
    }
}

/// Scans `text` for `pattern`, yielding code-point spans.
pub fn find_matches<'p, 't>(text: &'t str, pattern: &'p Pattern) -> Matches<'p, 't> {
    pattern.find_matches(text)
}

/// Iterator over the spans matched by a [`Pattern`].
#[derive(Debug)]
pub struct Matches<'p, 't> {
    pattern: &'p Pattern,
    text: &'t str,
    /// Byte offset where the next search starts.
    pos: usize,
    /// Code points in `text[..counted_bytes]`.
    counted_bytes: usize,
    counted_chars: u32,
}

impl Matches<'_, '_> {
    /// Code-point offset of a byte offset. Callers only move forward.
    fn code_point_offset(&mut self, byte: usize) -> u32 {
        debug_assert!(byte >= self.counted_bytes, "scanner offsets must not move backwards");
        self.counted_chars += self.text[self.counted_bytes..byte].chars().count() as u32;
        self.counted_bytes = byte;
        self.counted_chars
    }

    /// Byte offset one code point after `byte`.
    fn step_over(&self, byte: usize) -> usize {
        byte + self.text[byte..].chars().next().map_or(1, char::len_utf8)
    }
}

impl Iterator for Matches<'_, '_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        if self.pos > self.text.len() {
            return None;
        }

        let Some((start, end)) = self.pattern.next_range(self.text, self.pos) else {
            self.pos = self.text.len() + 1;
            return None;
        };

        self.pos = match self.pattern.mode {
            ScanMode::SelfOverlapping => self.step_over(start),
            ScanMode::Disjoint if end > start => end,
            ScanMode::Disjoint => self.step_over(start),
        };

        let start_cp = self.code_point_offset(start);
        let end_cp = start_cp + self.text[start..end].chars().count() as u32;
        Some(Span::new(start_cp, end_cp))
    }
}
