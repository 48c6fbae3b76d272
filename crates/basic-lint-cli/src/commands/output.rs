//! Shared output formatting for lint results.

use anyhow::Result;
use basic_lint_core::LintResult;
use std::fmt::Write;

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
    }
    Ok(())
}

/// `path: problem` for a single entry, an indented block for several.
fn render_text(result: &LintResult) -> String {
    let mut out = String::new();
    for report in &result.reports {
        let descriptions = report.descriptions();
        if let [only] = descriptions.as_slice() {
            let _ = writeln!(out, "{}: {only}", report.path);
        } else {
            let _ = writeln!(out, "{}:", report.path);
            for description in &descriptions {
                let _ = writeln!(out, "  {description}");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use basic_lint_core::{FileReport, LineEnding, LintViolation};
    use indexmap::IndexSet;

    fn sample() -> LintResult {
        let mut result = LintResult::new();
        result.files_checked = 3;
        result.reports.push(FileReport::violations(
            "./a.txt",
            IndexSet::from([LintViolation::TrailingWhitespace]),
        ));
        result.reports.push(FileReport::violations(
            "./b.txt",
            IndexSet::from([
                LintViolation::LineEndingMismatch {
                    expected: LineEnding::Unix,
                },
                LintViolation::MissingTrailingNewline,
            ]),
        ));
        result
            .reports
            .push(FileReport::error("./c.bin", "Not valid UTF-8"));
        result
    }

    #[test]
    fn text_output_layout() {
        insta::assert_snapshot!(render_text(&sample()), @r"
        ./a.txt: Trailing Whitespace
        ./b.txt:
          Line Ending (Expected \n)
          Needs trailing new line
        ./c.bin: Not valid UTF-8
        ");
    }

    #[test]
    fn text_output_empty_when_clean() {
        assert_eq!(render_text(&LintResult::new()), "");
    }

    #[test]
    fn json_output_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["files_checked"], 3);
        assert_eq!(json["reports"][0]["path"], "./a.txt");
        assert_eq!(
            json["reports"][0]["violations"][0]["kind"],
            "trailing-whitespace"
        );
        assert_eq!(
            json["reports"][1]["violations"][0]["expected"],
            "unix"
        );
        assert_eq!(json["reports"][2]["error"], "Not valid UTF-8");
        assert!(json["reports"][0].get("error").is_none());
    }
}
