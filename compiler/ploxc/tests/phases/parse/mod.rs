//! Programs rejected before they run.

use plox_diagnostic::ErrorCode;
use plox_eval::buffer_handler;
use plox_parse::MAX_PARAMS;
use ploxc::{RunError, Session};
use pretty_assertions::assert_eq;

use crate::common::{assert_fails_with, run_fail};

#[test]
fn scan_errors_exit_65() {
    assert_fails_with("print \"unterminated;", ErrorCode::E0001, 65);
    assert_fails_with("var a = #;", ErrorCode::E0002, 65);
    assert_fails_with("print 1; /* open", ErrorCode::E0003, 65);
    assert_fails_with("print 9223372036854775808;", ErrorCode::E0004, 65);
}

#[test]
fn scan_error_display_names_the_line() {
    let err = run_fail("print 1;\nprint 2;\nprint \"oops;");
    assert!(matches!(err, RunError::Lex(_)));
    assert_eq!(err.to_string(), "[line 3] Error: unterminated string");
}

#[test]
fn syntax_errors_exit_68() {
    assert_fails_with("print 1 +;", ErrorCode::E1001, 68);
    assert_fails_with("var = 3;", ErrorCode::E1001, 68);
    assert_fails_with("if 1 print 2;", ErrorCode::E1001, 68);
    assert_fails_with("(a) = 3;", ErrorCode::E1002, 68);
}

#[test]
fn too_many_parameters() {
    let params: Vec<String> = (0..=MAX_PARAMS).map(|i| format!("p{i}")).collect();
    let source = format!("fun f({}) {{}}", params.join(", "));
    assert_fails_with(&source, ErrorCode::E1003, 68);
}

#[test]
fn parse_error_display_names_the_token() {
    let err = run_fail("print (1;");
    assert!(matches!(err, RunError::Parse(_)));
    assert!(err.to_string().starts_with("[line 1] Error at ';': "), "{err}");
}

#[test]
fn nothing_runs_when_parsing_fails() {
    let mut session = Session::with_print_handler(buffer_handler());
    let err = session.run_source("print 1;\nprint ;").unwrap_err();
    assert_eq!(err.exit_code(), 68);
    assert_eq!(session.output(), "");
}
