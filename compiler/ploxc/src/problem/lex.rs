//! Scan error rendering.

use plox_diagnostic::{Diagnostic, ErrorCode};
use plox_lexer::{LexError, LexErrorKind};

fn code_for_kind(kind: &LexErrorKind) -> ErrorCode {
    match kind {
        LexErrorKind::UnterminatedString => ErrorCode::E0001,
        LexErrorKind::UnexpectedCharacter(_) => ErrorCode::E0002,
        LexErrorKind::UnterminatedComment => ErrorCode::E0003,
        LexErrorKind::IntegerTooLarge => ErrorCode::E0004,
    }
}

fn label_for_kind(kind: &LexErrorKind) -> &'static str {
    match kind {
        LexErrorKind::UnterminatedString => "string starts here",
        LexErrorKind::UnterminatedComment => "comment starts here",
        LexErrorKind::UnexpectedCharacter(_) => "not valid here",
        LexErrorKind::IntegerTooLarge => "does not fit in 64 bits",
    }
}

#[cold]
pub fn render_lex_error(err: &LexError) -> Diagnostic {
    Diagnostic::error(code_for_kind(&err.kind))
        .with_message(err.kind.to_string())
        .with_label(err.span, label_for_kind(&err.kind))
        .with_note(format!("scan error on line {}", err.line))
}
