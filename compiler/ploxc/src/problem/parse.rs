//! Syntax error rendering.

use plox_diagnostic::Diagnostic;
use plox_parse::ParseError;

/// The parser already picked the code; this only adds location context.
#[cold]
pub fn render_parse_error(err: &ParseError) -> Diagnostic {
    let found = match &err.found {
        Some(lexeme) => format!("found '{lexeme}'"),
        None => "found end of input".to_string(),
    };
    Diagnostic::error(err.code)
        .with_message(&err.message)
        .with_label(err.span, found)
        .with_note(format!("parse error on line {}", err.line))
}
