//! Driver for the plox interpreter.
//!
//! [`Session`] owns one interpreter and feeds it source text, so globals
//! defined by one [`Session::run_source`] call stay visible to the next.
//! Each phase failure comes back as a [`RunError`], which knows its process
//! exit code and how to render itself as a [`Diagnostic`].

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod problem;
mod session;

pub use session::{run_source, Session};

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Once;

use plox_diagnostic::Diagnostic;
use plox_eval::{ErrorCategory, EvalError};
use plox_lexer::LexError;
use plox_parse::ParseError;
use thiserror::Error;

use problem::{render_eval_error, render_lex_error, render_parse_error};

/// Why running a script failed.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("{0}")]
    Lex(#[from] LexError),
    #[error("{0}")]
    Parse(#[from] ParseError),
    #[error("{0}")]
    Eval(#[from] EvalError),
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RunError {
    /// Process exit code for a failed file run.
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::Lex(_) => 65,
            RunError::Io { .. } => 66,
            RunError::Parse(_) => 68,
            RunError::Eval(err) if err.category() == ErrorCategory::NameError => 70,
            RunError::Eval(_) => 69,
        }
    }

    /// `None` for I/O failures, which have no source location.
    pub fn to_diagnostic(&self) -> Option<Diagnostic> {
        match self {
            RunError::Lex(err) => Some(render_lex_error(err)),
            RunError::Parse(err) => Some(render_parse_error(err)),
            RunError::Eval(err) => Some(render_eval_error(err)),
            RunError::Io { .. } => None,
        }
    }
}

/// Read a script from disk.
pub fn read_source(path: &Path) -> Result<String, RunError> {
    std::fs::read_to_string(path).map_err(|source| RunError::Io {
        path: path.to_path_buf(),
        source,
    })
}

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once. Enable with e.g. `RUST_LOG=plox_eval=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(io::stderr))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
