//! Recursive-descent parser for plox.
//!
//! Consumes the lexer's token slice through a [`Cursor`] and builds an
//! [`ExprArena`] plus the ordered list of top-level statements. The first
//! error aborts the parse; there is no recovery.
//!
//! # Grammar
//!
//! ```text
//! declaration → varDecl | funDecl | classDecl | statement
//! statement   → print | block | if | while | return | break | exprStmt
//! expression  → assignment
//! assignment  → ( call "." )? IDENTIFIER "=" assignment | logic_or
//! logic_or    → logic_and ( "or" logic_and )*
//! logic_and   → bitwise ( "and" bitwise )*
//! bitwise     → equality ( ( "&" | "|" | "^" | "<<" | ">>" ) equality )*
//! equality    → comparison ( ( "==" | "!=" ) comparison )*
//! comparison  → term ( ( ">" | ">=" | "<" | "<=" ) term )*
//! term        → factor ( ( "+" | "-" ) factor )*
//! factor      → unary ( ( "*" | "/" ) unary )*
//! unary       → ( "!" | "-" | "~" ) unary | call
//! call        → primary ( "(" arguments? ")" | "." IDENTIFIER )*
//! primary     → literal | IDENTIFIER | "(" expression ")" | "fun" lambda
//! ```

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::ParseError;

use plox_ir::{ExprArena, Module, Span, StringInterner, Token, TokenKind};

/// Maximum number of parameters in a function or lambda.
pub const MAX_PARAMS: usize = 100;

/// Successful parse: the statements and the arena they live in.
#[derive(Debug)]
pub struct ParseOutput {
    pub module: Module,
    pub arena: ExprArena,
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
    interner: &'a StringInterner,
}

impl<'a> Parser<'a> {
    /// `tokens` must end with an `Eof` token, as produced by the lexer.
    pub fn new(tokens: &'a [Token], interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            arena: ExprArena::new(),
            interner,
        }
    }

    // Cursor delegation

    #[inline]
    fn current(&self) -> &'a Token {
        self.cursor.current()
    }

    #[inline]
    fn previous(&self) -> &'a Token {
        self.cursor.previous()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> &'a Token {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    #[inline]
    fn expect(&mut self, kind: TokenKind, message: &str) -> Result<&'a Token, ParseError> {
        self.cursor.expect(kind, message)
    }

    /// Span from `start` to the end of the last consumed token.
    #[inline]
    fn span_from(&self, start: Span) -> Span {
        start.merge(self.previous().span)
    }

    /// Parse declarations until end of input.
    pub fn parse_module(mut self) -> Result<ParseOutput, ParseError> {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            statements.push(self.parse_declaration()?);
        }
        tracing::debug!(
            statements = statements.len(),
            exprs = self.arena.expr_count(),
            "parsed module"
        );
        Ok(ParseOutput {
            module: Module { statements },
            arena: self.arena,
        })
    }
}

/// Parse a token stream produced by `plox_lexer::lex`.
pub fn parse(tokens: &[Token], interner: &StringInterner) -> Result<ParseOutput, ParseError> {
    if tokens.is_empty() {
        return Ok(ParseOutput {
            module: Module::default(),
            arena: ExprArena::new(),
        });
    }
    Parser::new(tokens, interner).parse_module()
}
