//! Line-oriented scripts of list expressions.
//!
//! Every non-blank line that does not start with `#` is evaluated on its own.
//! A line whose top-level expression is an equality is an assertion: it fails
//! when the two sides resolve to different values.

use std::fmt;

use tylist_core::Diagnostic;

use crate::expr::{ExprKind, Value};
use crate::parser::parse_expr;
use crate::resolver::resolve_with_diagnostics;

/// What happened to a single script line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The rendered value of the line.
    Value(String),
    AssertionFailed,
    Failed(Vec<Diagnostic>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineReport {
    /// 1-based line number in the script.
    pub line: usize,
    pub source: String,
    pub outcome: Outcome,
}

impl LineReport {
    pub fn is_failure(&self) -> bool {
        !matches!(self.outcome, Outcome::Value(_))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptReport {
    pub lines: Vec<LineReport>,
}

impl ScriptReport {
    /// Number of lines that failed to resolve or whose assertion did not hold.
    pub fn failures(&self) -> usize {
        self.lines.iter().filter(|line| line.is_failure()).count()
    }
}

impl fmt::Display for ScriptReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for report in &self.lines {
            match &report.outcome {
                Outcome::Value(value) => {
                    writeln!(f, "{}: {} => {}", report.line, report.source, value)?
                }
                Outcome::AssertionFailed => {
                    writeln!(f, "{}: {} => assertion failed", report.line, report.source)?
                }
                Outcome::Failed(diagnostics) => {
                    writeln!(f, "{}: {}", report.line, report.source)?;
                    for diagnostic in diagnostics {
                        writeln!(f, "  {diagnostic}")?;
                    }
                }
            }
        }
        let failures = self.failures();
        if failures == 0 {
            write!(f, "ok: {} lines", self.lines.len())
        } else {
            write!(f, "{failures} of {} lines failed", self.lines.len())
        }
    }
}

/// Evaluate every line of `text` against one database, so lines share
/// interned lists and memoized results.
pub fn run_script(db: &dyn salsa::Database, text: &str) -> ScriptReport {
    let mut report = ScriptReport::default();
    for (index, raw) in text.lines().enumerate() {
        let source = raw.trim();
        if source.is_empty() || source.starts_with('#') {
            continue;
        }

        let outcome = match parse_expr(db, source) {
            Ok(expr) => {
                let resolution = resolve_with_diagnostics(db, expr);
                match resolution.value {
                    Some(Value::Bool(false)) if matches!(expr.kind(db), ExprKind::Equal(..)) => {
                        Outcome::AssertionFailed
                    }
                    Some(value) => Outcome::Value(value.render(db)),
                    None => Outcome::Failed(resolution.diagnostics),
                }
            }
            Err(err) => Outcome::Failed(vec![err.into()]),
        };
        if !matches!(outcome, Outcome::Value(_)) {
            tracing::info!(line = index + 1, source, "script line failed");
        }
        report.lines.push(LineReport {
            line: index + 1,
            source: source.to_owned(),
            outcome,
        });
    }
    report
}
