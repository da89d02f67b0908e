//! Script runner and command-line tests.

mod common;

use std::ffi::OsStr;

use common::{run_cli, script_file};
use insta::assert_snapshot;
use salsa::Database as _;
use tylist::{Outcome, TylistDatabase, run_script};

#[test]
fn test_demo_script_passes() {
    let text = include_str!("../demos/laws.tyl");
    TylistDatabase::default().attach(|db| {
        let report = run_script(db, text);
        assert_eq!(report.failures(), 0, "{report}");
        assert_eq!(report.lines.len(), 16);
        assert_eq!(report.lines[0].outcome, Outcome::Value("[A, B, C]".to_owned()));
    });
}

#[test]
fn test_script_report_display() {
    let text = "\
reverse([A, B])
first(1, [A]) == [B]
len(A)
";
    TylistDatabase::default().attach(|db| {
        let report = run_script(db, text);
        assert_snapshot!(report.to_string(), @r"
        1: reverse([A, B]) => [B, A]
        2: first(1, [A]) == [B] => assertion failed
        3: len(A)
          resolve error: expected a type list, found `A`
        2 of 3 lines failed
        ");
    });
}

#[test]
fn test_cli_eval() {
    let output = run_cli(["eval", "intersperse(X, [A, B])"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "[A, X, B]\n");

    let output = run_cli(["eval", "--cons", "first(2, [A, B, C])"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Node(A, Node(B, Empty))\n"
    );
}

#[test]
fn test_cli_eval_failure() {
    let output = run_cli(["eval", "last(5, [A])"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "resolve error: `last` of 5 elements is out of range for a list of length 1\n"
    );
}

#[test]
fn test_cli_run() {
    let passing = script_file("# ok\nreverse([A, B]) == [B, A]\n");
    let output = run_cli([OsStr::new("run"), passing.path().as_os_str()]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "2: reverse([A, B]) == [B, A] => true\nok: 1 lines\n"
    );

    let failing = script_file("tail([A]) == [A]\n");
    let output = run_cli([OsStr::new("run"), failing.path().as_os_str()]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_cli_rejects_deep_nesting() {
    let mut source = "nil".to_owned();
    for _ in 0..2000 {
        source = format!("front(A, {source})");
    }
    let output = run_cli(["eval", source.as_str()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(
        String::from_utf8_lossy(&output.stderr)
            .starts_with("parse error: expression nested too deeply"),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
}
