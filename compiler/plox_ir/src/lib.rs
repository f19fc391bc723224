//! Shared data types for the plox pipeline.
//!
//! Everything the lexer, parser and evaluator pass between each other lives
//! here: byte spans, interned identifiers, tokens and the flat AST.
//!
//! # Layout
//!
//! - [`Span`]: byte range into the source text
//! - [`Name`] / [`StringInterner`]: 32-bit interned identifiers
//! - [`Token`] / [`TokenKind`]: lexer output
//! - [`ast`]: expression and statement nodes stored in an [`ExprArena`]

pub mod ast;
mod interner;
mod name;
mod span;
mod token;

pub use ast::{
    BinaryOp, Expr, ExprArena, ExprId, ExprKind, ExprRange, Literal, LogicalOp, Module, ParamRange,
    SharedArena, Stmt, StmtId, StmtKind, StmtRange, UnaryOp,
};
pub use interner::{SharedInterner, StringInterner};
pub use name::Name;
pub use span::Span;
pub use token::{Token, TokenKind, TokenLiteral};
