//! Immutable sets of Unicode code points.

use std::fmt::Write;
use std::ops::RangeInclusive;

/// An immutable set of Unicode scalar values.
///
/// Stored as sorted, merged, non-overlapping inclusive ranges so membership is
/// a binary search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePointSet {
    ranges: Vec<RangeInclusive<char>>,
}

impl CodePointSet {
    /// Builds a set from inclusive ranges and single code points.
    pub fn new(ranges: &[RangeInclusive<char>], chars: &[char]) -> Self {
        let mut all: Vec<RangeInclusive<char>> = ranges
            .iter()
            .filter(|r| r.start() <= r.end())
            .cloned()
            .chain(chars.iter().map(|&c| c..=c))
            .collect();
        all.sort_by_key(|r| *r.start());

        let mut merged: Vec<RangeInclusive<char>> = Vec::with_capacity(all.len());
        for range in all {
            if let Some(last) = merged.last_mut()
                && (*range.start() as u32) <= (*last.end() as u32).saturating_add(1)
            {
                if range.end() > last.end() {
                    *last = *last.start()..=*range.end();
                }
                continue;
            }
            merged.push(range);
        }

        Self { ranges: merged }
    }

    /// Builds a set from single code points.
    pub fn from_chars(chars: &[char]) -> Self {
        Self::new(&[], chars)
    }

    /// Returns the union of several sets.
    pub fn union(sets: &[&CodePointSet]) -> Self {
        let ranges: Vec<RangeInclusive<char>> = sets
            .iter()
            .flat_map(|set| set.ranges.iter().cloned())
            .collect();
        Self::new(&ranges, &[])
    }

    /// Returns true if `c` is a member of the set.
    pub fn contains(&self, c: char) -> bool {
        let idx = self.ranges.partition_point(|r| *r.end() < c);
        self.ranges.get(idx).is_some_and(|r| r.contains(&c))
    }

    /// Returns true if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Iterates over every member in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.ranges.iter().flat_map(|r| r.clone())
    }

    /// Renders the set as a regex character class, e.g. `[\x{64B}-\x{653}]`.
    pub fn to_regex_class(&self) -> String {
        format!("[{}]", self.regex_class_body())
    }

    /// Renders the set as the inside of a regex character class, so callers
    /// can combine it with other class syntax such as `--` subtraction.
    pub fn regex_class_body(&self) -> String {
        let mut body = String::new();
        for range in &self.ranges {
            if range.start() == range.end() {
                let _ = write!(body, "{}", escape(*range.start()));
            } else {
                let _ = write!(body, "{}-{}", escape(*range.start()), escape(*range.end()));
            }
        }
        body
    }
}

/// Regex escape for a single code point.
pub(crate) fn escape(c: char) -> String {
    format!("\\x{{{:X}}}", c as u32)
}
