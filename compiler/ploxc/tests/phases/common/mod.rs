//! Helpers for running whole programs.

use plox_diagnostic::ErrorCode;
use ploxc::{run_source, RunError};

/// Run a program that must succeed and return its output.
pub fn run_ok(source: &str) -> String {
    match run_source(source) {
        Ok(output) => output,
        Err(err) => panic!("program failed: {err}\n--- source ---\n{source}"),
    }
}

/// Run a program that must fail.
pub fn run_fail(source: &str) -> RunError {
    run_source(source).expect_err("program should fail")
}

/// Run a failing program and check its error code and exit code.
pub fn assert_fails_with(source: &str, code: ErrorCode, exit: u8) {
    let err = run_fail(source);
    let diagnostic = err.to_diagnostic().expect("phase errors render");
    assert_eq!(diagnostic.code, code, "wrong code for {source:?}: {err}");
    assert_eq!(err.exit_code(), exit, "wrong exit code for {source:?}: {err}");
}
