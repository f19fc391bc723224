//! plox command line.
//!
//! `plox` starts a REPL, `plox FILE` runs a script.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;
use std::process::ExitCode;

use plox_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use ploxc::{init_tracing, read_source, RunError, Session};

const PROMPT: &str = ">>> ";

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => {
            repl();
            ExitCode::SUCCESS
        }
        [path] => run_file(Path::new(path)),
        _ => {
            eprintln!("Usage: plox [script]");
            ExitCode::from(64)
        }
    }
}

fn run_file(path: &Path) -> ExitCode {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(err) => return fail(&err, ""),
    };

    let mut session = Session::new();
    match session.run_source(&source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&err, &source),
    }
}

fn fail(err: &RunError, source: &str) -> ExitCode {
    report(err, source);
    ExitCode::from(err.exit_code())
}

/// Read-eval-print loop. Bindings persist between lines.
fn repl() {
    let mut session = Session::new();
    let mut lines = io::stdin().lock().lines();

    loop {
        print!("{PROMPT}");
        let _ = io::stdout().flush();

        let Some(Ok(line)) = lines.next() else {
            println!();
            break;
        };

        match line.trim() {
            "" => continue,
            ":quit" => break,
            ":env" => {
                print!("{}", session.dump_env());
                continue;
            }
            _ => {}
        }

        if let Err(err) = session.run_source(&line) {
            report(&err, &line);
        }
    }
}

fn report(err: &RunError, source: &str) {
    let Some(diagnostic) = err.to_diagnostic() else {
        eprintln!("error: {err}");
        return;
    };
    let mut emitter =
        TerminalEmitter::stderr(ColorMode::Auto, io::stderr().is_terminal()).with_source(source);
    emitter.emit(&diagnostic);
    emitter.flush();
}
