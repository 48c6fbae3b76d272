//! Single-pass line scanner.
//!
//! [`scan`] is a pure function over the decoded file text. It either
//! collects violations (report mode) or builds the corrected text (fix
//! mode), never both.
//!
//! A physical line runs up to and including its terminator: `\r\n`, `\n`
//! or a lone `\r`. The final run of a file may have no terminator at all.
//! Treating a lone `\r` as a terminator means a stray carriage return in a
//! unix file is reported as a line-ending mismatch and fixed into `\n`.
//!
//! End-of-file checks look at the last physical line only. A missing
//! terminator takes precedence over trailing blank lines, so a file whose
//! last line is unterminated never reports
//! [`LintViolation::ExcessTrailingNewlines`].

use crate::types::{LineEnding, LintViolation};
use indexmap::IndexSet;

/// Outcome of scanning one file's text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    /// Violations found in report mode. Always empty in fix mode.
    pub violations: IndexSet<LintViolation>,
    /// Corrected text in fix mode, `None` in report mode.
    pub fixed: Option<String>,
}

#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    body: &'a str,
    terminator: &'a str,
}

impl Line<'_> {
    fn is_blank(&self) -> bool {
        self.body.trim_end().is_empty()
    }
}

struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Line<'a>> {
        if self.rest.is_empty() {
            return None;
        }
        let line = match self.rest.find(|c: char| c == '\n' || c == '\r') {
            None => Line {
                body: self.rest,
                terminator: "",
            },
            Some(i) => {
                let end = if self.rest[i..].starts_with("\r\n") {
                    i + 2
                } else {
                    i + 1
                };
                Line {
                    body: &self.rest[..i],
                    terminator: &self.rest[i..end],
                }
            }
        };
        self.rest = &self.rest[line.body.len() + line.terminator.len()..];
        Some(line)
    }
}

fn lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

/// Scans `text` for line-level violations.
///
/// In fix mode the returned [`Scan::fixed`] holds the text with every
/// violation corrected: terminators rewritten to `ending`, trailing
/// whitespace stripped, trailing blank lines dropped and a final
/// terminator added.
#[must_use]
pub fn scan(text: &str, ending: LineEnding, fix: bool) -> Scan {
    let expected = ending.as_str();
    let mut violations = IndexSet::new();
    let mut output: Vec<(&str, &str)> = Vec::new();
    let mut last: Option<Line<'_>> = None;

    for line in lines(text) {
        let mut terminator = line.terminator;
        if !terminator.is_empty() && terminator != expected {
            if fix {
                terminator = expected;
            } else {
                violations.insert(LintViolation::LineEndingMismatch { expected: ending });
            }
        }

        let mut body = line.body;
        let trimmed = body.trim_end();
        if trimmed.len() != body.len() {
            if fix {
                body = trimmed;
            } else {
                violations.insert(LintViolation::TrailingWhitespace);
            }
        }

        if fix {
            output.push((body, terminator));
        }
        last = Some(line);
    }

    if fix {
        // Bodies are already trimmed, so a blank line has an empty body.
        while output.last().is_some_and(|(body, _)| body.is_empty()) {
            output.pop();
        }
        if let Some(tail) = output.last_mut() {
            if tail.1.is_empty() {
                tail.1 = expected;
            }
        }
        let mut fixed = String::with_capacity(text.len() + expected.len());
        for (body, terminator) in output {
            fixed.push_str(body);
            fixed.push_str(terminator);
        }
        return Scan {
            violations,
            fixed: Some(fixed),
        };
    }

    if let Some(last) = last {
        if last.terminator.is_empty() {
            violations.insert(LintViolation::MissingTrailingNewline);
        } else if last.is_blank() {
            violations.insert(LintViolation::ExcessTrailingNewlines);
        }
    }

    Scan {
        violations,
        fixed: None,
    }
}
