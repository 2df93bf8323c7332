//! Auto-fix functionality for applying diagnostic fixes.

use std::fs;
use std::path::Path;

use tashkil_text::{ByteCursor, char_len};
use tracing::{debug, warn};

use crate::LinterError;
use crate::diagnostic::{Diagnostic, Fix};

/// Result of applying one pass of fixes.
#[derive(Debug)]
pub struct FixerResult {
    /// Number of fixes applied.
    pub fixes_applied: usize,
    /// The fixed content.
    pub fixed_content: String,
    /// Whether the content was modified.
    pub modified: bool,
}

impl FixerResult {
    /// Creates a new fixer result.
    pub fn new(fixes_applied: usize, fixed_content: String, modified: bool) -> Self {
        Self {
            fixes_applied,
            fixed_content,
            modified,
        }
    }

    /// Creates a result indicating no changes were made.
    pub fn unchanged(content: String) -> Self {
        Self {
            fixes_applied: 0,
            fixed_content: content,
            modified: false,
        }
    }
}

/// Applies the fixes attached to `diagnostics` to `content`.
///
/// Fix spans are code points. Overlapping fixes are dropped first, then the
/// accepted fixes are resolved to byte ranges and spliced into a new string in
/// one forward walk over `content`. A fix that rewrites the whole text takes
/// precedence: it is applied alone and every other fix is dropped.
pub fn apply_fixes_to_content(content: &str, diagnostics: &[Diagnostic]) -> FixerResult {
    let fixes: Vec<&Fix> = diagnostics.iter().filter_map(|d| d.fix.as_ref()).collect();

    if fixes.is_empty() {
        return FixerResult::unchanged(content.to_string());
    }

    let len = char_len(content);
    if let Some(whole) = fixes.iter().find(|f| f.rewrites_whole_text(len)) {
        let dropped = fixes.iter().filter(|f| *f != whole).count();
        if dropped > 0 {
            debug!("Whole-text fix supersedes {} other fix(es) in this pass", dropped);
        }
        let modified = whole.text != content;
        return FixerResult::new(1, whole.text.clone(), modified);
    }

    let mut sorted_fixes = fixes;
    sorted_fixes.sort_by(|a, b| b.span.start.cmp(&a.span.start).then_with(|| a.cmp(b)));
    sorted_fixes.dedup();

    let mut accepted = filter_overlapping_fixes(sorted_fixes);
    accepted.sort_by_key(|fix| (fix.span.start, fix.span.end));

    let mut cursor = ByteCursor::new(content);
    let mut result = String::with_capacity(content.len());
    let mut copied = 0;
    let mut applied = 0;

    for fix in accepted {
        let Some(range) = cursor.byte_range(fix.span) else {
            warn!(
                "Invalid fix span: start={}, end={}, content_len={}",
                fix.span.start, fix.span.end, len
            );
            continue;
        };

        debug!(
            "Applying fix: replace [{}..{}] with {:?}",
            fix.span.start, fix.span.end, fix.text
        );

        result.push_str(&content[copied..range.start]);
        result.push_str(&fix.text);
        copied = range.end;
        applied += 1;
    }
    result.push_str(&content[copied..]);

    let modified = result != content;
    FixerResult::new(applied, result, modified)
}

/// Filters out overlapping fixes, keeping the one that starts later.
///
/// **Note:** This function expects `fixes` to be sorted by `start` position in descending order.
pub(crate) fn filter_overlapping_fixes(fixes: Vec<&Fix>) -> Vec<&Fix> {
    if fixes.len() <= 1 {
        return fixes;
    }

    #[cfg(debug_assertions)]
    {
        for window in fixes.windows(2) {
            debug_assert!(
                window[0].span.start >= window[1].span.start,
                "Fixes must be sorted by start descending for filter_overlapping_fixes"
            );
        }
    }

    let mut result: Vec<&Fix> = Vec::with_capacity(fixes.len());

    for fix in fixes {
        // `result.last()` has the smallest start accepted so far, so it is the
        // only accepted fix the candidate can overlap.
        let overlaps = result.last().is_some_and(|last| {
            !(fix.span.end <= last.span.start || fix.span.start >= last.span.end)
        });

        if overlaps {
            warn!(
                "Skipping overlapping fix at [{}, {}]",
                fix.span.start, fix.span.end
            );
        } else {
            result.push(fix);
        }
    }

    result
}

/// Applies fixes to a file and writes the result.
pub fn apply_fixes_to_file(
    path: &Path,
    diagnostics: &[Diagnostic],
) -> Result<FixerResult, LinterError> {
    let content = fs::read_to_string(path)
        .map_err(|e| LinterError::file(format!("Failed to read {}: {}", path.display(), e)))?;

    let result = apply_fixes_to_content(&content, diagnostics);

    if result.modified {
        fs::write(path, &result.fixed_content)
            .map_err(|e| LinterError::file(format!("Failed to write {}: {}", path.display(), e)))?;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tashkil_text::Span;

    fn make_diagnostic_with_fix(start: u32, end: u32, replacement: &str) -> Diagnostic {
        Diagnostic::new("test_rule", "Test message", Span::new(start, end))
            .with_fix(Fix::new(Span::new(start, end), replacement))
    }

    fn make_diagnostic_without_fix(start: u32, end: u32) -> Diagnostic {
        Diagnostic::new("test_rule", "Test message", Span::new(start, end))
    }

    #[test]
    fn apply_single_fix() {
        let content = "Hello World";
        let diagnostics = vec![make_diagnostic_with_fix(0, 5, "Hi")];

        let result = apply_fixes_to_content(content, &diagnostics);

        assert_eq!(result.fixed_content, "Hi World");
        assert_eq!(result.fixes_applied, 1);
        assert!(result.modified);
    }

    #[test]
    fn apply_multiple_fixes() {
        let content = "Hello World";
        let diagnostics = vec![
            make_diagnostic_with_fix(0, 5, "Hi"),
            make_diagnostic_with_fix(6, 11, "Earth"),
        ];

        let result = apply_fixes_to_content(content, &diagnostics);

        assert_eq!(result.fixed_content, "Hi Earth");
        assert_eq!(result.fixes_applied, 2);
    }

    #[test]
    fn spans_are_code_points() {
        // Each Arabic letter and mark is two bytes in UTF-8.
        let content = "أهلا ً وسهلا ً بكم.";
        let diagnostics = vec![
            make_diagnostic_with_fix(5, 6, ""),
            make_diagnostic_with_fix(13, 14, ""),
        ];

        let result = apply_fixes_to_content(content, &diagnostics);

        assert_eq!(result.fixed_content, "أهلا  وسهلا  بكم.");
        assert_eq!(result.fixes_applied, 2);
    }

    #[test]
    fn no_fixes_returns_unchanged() {
        let result = apply_fixes_to_content("Hello World", &[]);

        assert_eq!(result.fixed_content, "Hello World");
        assert_eq!(result.fixes_applied, 0);
        assert!(!result.modified);
    }

    #[test]
    fn diagnostics_without_fix_are_skipped() {
        let diagnostics = vec![
            make_diagnostic_without_fix(0, 5),
            make_diagnostic_with_fix(6, 11, "Earth"),
        ];

        let result = apply_fixes_to_content("Hello World", &diagnostics);

        assert_eq!(result.fixed_content, "Hello Earth");
        assert_eq!(result.fixes_applied, 1);
    }

    #[test]
    fn overlapping_fixes_are_filtered() {
        let diagnostics = vec![
            make_diagnostic_with_fix(0, 5, "Hi"),
            make_diagnostic_with_fix(3, 8, "XXX"),
        ];

        let result = apply_fixes_to_content("Hello World", &diagnostics);

        // [3, 8) starts later, so it wins.
        assert_eq!(result.fixes_applied, 1);
        assert_eq!(result.fixed_content, "HelXXXrld");
    }

    #[test]
    fn identical_fixes_apply_once() {
        let diagnostics = vec![
            make_diagnostic_with_fix(1, 2, ""),
            make_diagnostic_with_fix(1, 2, ""),
        ];

        let result = apply_fixes_to_content("abc", &diagnostics);

        assert_eq!(result.fixed_content, "ac");
        assert_eq!(result.fixes_applied, 1);
    }

    #[test]
    fn whole_text_fix_takes_precedence() {
        let content = "abc";
        let diagnostics = vec![
            make_diagnostic_with_fix(1, 2, ""),
            make_diagnostic_with_fix(0, 3, "xyz"),
            make_diagnostic_with_fix(0, 3, "xyz"),
        ];

        let result = apply_fixes_to_content(content, &diagnostics);

        assert_eq!(result.fixed_content, "xyz");
        assert_eq!(result.fixes_applied, 1);
        assert!(result.modified);
    }

    #[test]
    fn many_fixes_apply_in_one_pass() {
        let pairs = 200_000;
        let content = " \u{064E}".repeat(pairs);
        let diagnostics: Vec<_> = (0..pairs as u32)
            .map(|i| make_diagnostic_with_fix(2 * i + 1, 2 * i + 2, ""))
            .collect();

        let result = apply_fixes_to_content(&content, &diagnostics);

        assert_eq!(result.fixes_applied, pairs);
        assert_eq!(result.fixed_content, " ".repeat(pairs));
    }

    #[test]
    fn insertion_next_to_replacement() {
        let diagnostics = vec![
            make_diagnostic_with_fix(2, 2, "+"),
            make_diagnostic_with_fix(2, 4, "XY"),
        ];

        let result = apply_fixes_to_content("abcdef", &diagnostics);

        assert_eq!(result.fixed_content, "ab+XYef");
        assert_eq!(result.fixes_applied, 2);
    }

    #[test]
    fn invalid_span_is_skipped() {
        let diagnostics = vec![make_diagnostic_with_fix(2, 100, "Hi")];

        let result = apply_fixes_to_content("Hello", &diagnostics);

        assert_eq!(result.fixed_content, "Hello");
        assert_eq!(result.fixes_applied, 0);
        assert!(!result.modified);
    }

    #[test]
    fn filter_overlapping_fixes_adjacent() {
        let f1 = Fix::new(Span::new(10, 15), "f1");
        let f2 = Fix::new(Span::new(5, 10), "f2");

        let result = filter_overlapping_fixes(vec![&f1, &f2]);

        assert_eq!(result.len(), 2);
    }

    #[test]
    fn filter_overlapping_fixes_nested() {
        let f1 = Fix::new(Span::new(0, 20), "outer");
        let f2 = Fix::new(Span::new(5, 15), "inner");

        let result = filter_overlapping_fixes(vec![&f2, &f1]);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "inner");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Fixes must be sorted")]
    fn filter_overlapping_fixes_panic_unsorted() {
        let f1 = Fix::new(Span::new(0, 5), "f1");
        let f2 = Fix::new(Span::new(10, 15), "f2");

        let _ = filter_overlapping_fixes(vec![&f1, &f2]);
    }

    #[test]
    fn apply_fixes_to_file_writes_result() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("text.txt");
        fs::write(&path, "ab").unwrap();

        let result = apply_fixes_to_file(&path, &[make_diagnostic_with_fix(1, 2, "")]).unwrap();

        assert!(result.modified);
        assert_eq!(fs::read_to_string(&path).unwrap(), "a");
    }
}
