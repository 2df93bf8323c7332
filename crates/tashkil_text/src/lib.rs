//! # tashkil_text
//!
//! Text primitives for Tashkil:
//! - [`CodePointSet`] and the named Arabic character classes in [`classes`]
//! - the presentation-form [`normalize`] table
//! - the [`scanner`], which reports regex matches as code-point [`Span`]s

mod charset;
pub mod classes;
pub mod normalize;
pub mod scanner;
mod span;

pub use charset::CodePointSet;
pub use normalize::{NORMALIZATION_TABLE, NormalizationEntry};
pub use scanner::{Matches, Pattern, PatternError, ScanMode, find_matches};
pub use span::{ByteCursor, LineIndex, Location, Position, Span, char_len};
