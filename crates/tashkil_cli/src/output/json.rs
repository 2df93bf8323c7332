//! JSON output formatter

use miette::{IntoDiagnostic, Result};
use tashkil_core::LintResult;

pub fn output_json(results: &[LintResult]) -> Result<()> {
    println!("{}", render_json(results).into_diagnostic()?);
    Ok(())
}

fn render_json(results: &[LintResult]) -> serde_json::Result<String> {
    let output: Vec<_> = results
        .iter()
        .map(|r| {
            serde_json::json!({
                "path": r.path.display().to_string(),
                "diagnostics": r.diagnostics,
            })
        })
        .collect();
    serde_json::to_string_pretty(&output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tashkil_core::{Diagnostic, Span};

    #[test]
    fn renders_path_and_diagnostics() {
        let results = vec![LintResult::new(
            PathBuf::from("a.txt"),
            vec![Diagnostic::new("no_shadda_with_sukun", "msg", Span::new(2, 4))],
        )];

        let value: serde_json::Value =
            serde_json::from_str(&render_json(&results).unwrap()).unwrap();

        assert_eq!(value[0]["path"], "a.txt");
        assert_eq!(value[0]["diagnostics"][0]["rule_id"], "no_shadda_with_sukun");
        assert_eq!(value[0]["diagnostics"][0]["span"]["start"], 2);
    }
}
