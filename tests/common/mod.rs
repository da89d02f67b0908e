//! Common test utilities for the evaluator tests.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;
use tylist::{Diagnostic, evaluate};

/// Evaluate `source` and render the value, panicking with the diagnostics if
/// resolution fails.
#[allow(dead_code)]
pub fn eval(db: &dyn salsa::Database, source: &str) -> String {
    let resolution = evaluate(db, source);
    match resolution.value {
        Some(value) => value.render(db),
        None => panic!("`{source}` failed: {:?}", resolution.diagnostics),
    }
}

/// Evaluate `source`, expecting it to fail, and return the diagnostics.
#[allow(dead_code)]
pub fn eval_err(db: &dyn salsa::Database, source: &str) -> Vec<Diagnostic> {
    let resolution = evaluate(db, source);
    assert_eq!(resolution.value, None, "`{source}` unexpectedly resolved");
    resolution.diagnostics
}

/// Write `text` to a temporary script file.
#[allow(dead_code)]
pub fn script_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".tyl").expect("Failed to create temp file");
    file.write_all(text.as_bytes())
        .expect("Failed to write script");
    file
}

/// Run the `tylist` binary with `args`.
#[allow(dead_code)]
pub fn run_cli<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_tylist"))
        .args(args)
        .env_remove("TYLIST_LOG")
        .output()
        .expect("Failed to execute tylist")
}
