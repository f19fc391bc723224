//! Phase errors rendered as [`Diagnostic`]s.
//!
//! Each phase owns its error type; conversion lives here because the
//! driver is the one crate that sees both the error and the diagnostic
//! types. One renderer per phase:
//!
//! - [`render_lex_error`]: scan errors (E0xxx)
//! - [`render_parse_error`]: syntax errors (E1xxx)
//! - [`render_eval_error`]: runtime errors (E6xxx)

mod eval;
mod lex;
mod parse;

pub use eval::render_eval_error;
pub use lex::render_lex_error;
pub use parse::render_parse_error;
