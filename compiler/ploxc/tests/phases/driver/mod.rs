//! Sessions, exit codes and loading scripts from disk.

use std::path::Path;

use plox_eval::buffer_handler;
use ploxc::{read_source, RunError, Session};
use pretty_assertions::assert_eq;

fn session() -> Session {
    Session::with_print_handler(buffer_handler())
}

#[test]
fn definitions_persist_across_inputs() {
    let mut session = session();
    session.run_source("var greeting = \"hi\";").unwrap();
    session.run_source("fun shout(s) { return s + \"!\"; }").unwrap();
    session.run_source("print shout(greeting);").unwrap();
    assert_eq!(session.output(), "hi!\n");
}

#[test]
fn session_survives_errors() {
    let mut session = session();
    session.run_source("var a = 1;").unwrap();
    assert!(session.run_source("print a +;").is_err());
    assert!(session.run_source("print b;").is_err());
    session.run_source("print a;").unwrap();
    assert_eq!(session.output(), "1\n");
}

#[test]
fn dump_env_lists_user_bindings() {
    let mut session = session();
    session.run_source("var a = 1; var b = \"two\";").unwrap();
    assert_eq!(
        session.dump_env(),
        "frame 0: a = 1, b = two\n\
         frame 1 (global): clock = <native fn clock>, sqrt = <native fn sqrt>\n"
    );
}

#[test]
fn reading_a_missing_file() {
    let err = read_source(Path::new("/nonexistent/plox/missing.lox")).unwrap_err();
    assert!(matches!(err, RunError::Io { .. }));
    assert_eq!(err.exit_code(), 66);
}

#[test]
fn reading_and_running_a_file() {
    let path = std::env::temp_dir().join(format!("plox_driver_{}.lox", std::process::id()));
    std::fs::write(&path, "var x = 2;\nprint x * 21;\n").unwrap();

    let source = read_source(&path).unwrap();
    let output = ploxc::run_source(&source).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(output, "42\n");
}
