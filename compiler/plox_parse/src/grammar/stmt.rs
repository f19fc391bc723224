//! Declarations and statements.

use plox_ir::{Name, ParamRange, Stmt, StmtId, StmtKind, StmtRange, TokenKind};
use plox_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser, MAX_PARAMS};

impl Parser<'_> {
    /// Parse one declaration or statement.
    pub(crate) fn parse_declaration(&mut self) -> Result<StmtId, ParseError> {
        ensure_sufficient_stack(|| self.parse_declaration_inner())
    }

    fn parse_declaration_inner(&mut self) -> Result<StmtId, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Var => self.parse_var_decl(),
            TokenKind::Class => self.parse_class_decl(),
            // `fun (` in statement position is a lambda expression statement
            TokenKind::Fun if self.cursor.peek_kind() == TokenKind::Identifier => {
                self.parse_fun_decl()
            }
            _ => self.parse_statement(),
        }
    }

    fn parse_var_decl(&mut self) -> Result<StmtId, ParseError> {
        let start = self.advance().span; // 'var'
        let name = self.parse_ident("expected variable name")?;
        let init = if self.eat(TokenKind::Equal) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.expect(
            TokenKind::Semicolon,
            "expected ';' after variable declaration",
        )?;
        Ok(self.alloc_stmt(StmtKind::Var { name, init }, start))
    }

    fn parse_fun_decl(&mut self) -> Result<StmtId, ParseError> {
        let start = self.advance().span; // 'fun'
        let name = self.parse_ident("expected function name")?;
        let (params, body) = self.parse_function_rest()?;
        Ok(self.alloc_stmt(StmtKind::Function { name, params, body }, start))
    }

    fn parse_class_decl(&mut self) -> Result<StmtId, ParseError> {
        let start = self.advance().span; // 'class'
        let name = self.parse_ident("expected class name")?;
        self.expect(TokenKind::LeftBrace, "expected '{' before class body")?;
        self.expect(TokenKind::RightBrace, "expected '}' after class body")?;
        Ok(self.alloc_stmt(StmtKind::Class { name }, start))
    }

    /// Parameter list and body shared by declarations and lambdas:
    /// `( params ) { body }`.
    pub(crate) fn parse_function_rest(&mut self) -> Result<(ParamRange, StmtRange), ParseError> {
        self.expect(TokenKind::LeftParen, "expected '(' before parameters")?;
        let mut params: Vec<Name> = Vec::new();
        if !self.check(TokenKind::RightParen) {
            loop {
                if params.len() >= MAX_PARAMS {
                    return Err(ParseError::too_many_parameters(self.current(), MAX_PARAMS));
                }
                params.push(self.parse_ident("expected parameter name")?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RightParen, "expected ')' after parameters")?;
        self.expect(TokenKind::LeftBrace, "expected '{' before function body")?;
        let body = self.parse_block_body()?;

        let params = self.arena.alloc_params(params);
        Ok((params, body))
    }

    fn parse_statement(&mut self) -> Result<StmtId, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Print => self.parse_print(),
            TokenKind::LeftBrace => {
                let start = self.advance().span;
                let body = self.parse_block_body()?;
                Ok(self.alloc_stmt(StmtKind::Block(body), start))
            }
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Return => self.parse_return(),
            TokenKind::Break => self.parse_break(),
            _ => self.parse_expr_stmt(),
        }
    }

    fn parse_print(&mut self) -> Result<StmtId, ParseError> {
        let start = self.advance().span; // 'print'
        let value = self.parse_expr()?;
        self.expect(TokenKind::Semicolon, "expected ';' after value")?;
        Ok(self.alloc_stmt(StmtKind::Print(value), start))
    }

    /// Statements up to the closing `}`; the `{` is already consumed.
    fn parse_block_body(&mut self) -> Result<StmtRange, ParseError> {
        let mut stmts = Vec::new();
        while !self.check(TokenKind::RightBrace) && !self.cursor.is_at_end() {
            stmts.push(self.parse_declaration()?);
        }
        self.expect(TokenKind::RightBrace, "expected '}' after block")?;
        Ok(self.arena.alloc_stmt_list(stmts))
    }

    fn parse_if(&mut self) -> Result<StmtId, ParseError> {
        let start = self.advance().span; // 'if'
        self.expect(TokenKind::LeftParen, "expected '(' after 'if'")?;
        let condition = self.parse_expr()?;
        self.expect(TokenKind::RightParen, "expected ')' after if condition")?;

        let then_branch = self.parse_declaration()?;
        let else_branch = if self.eat(TokenKind::Else) {
            Some(self.parse_declaration()?)
        } else {
            None
        };

        Ok(self.alloc_stmt(
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            },
            start,
        ))
    }

    fn parse_while(&mut self) -> Result<StmtId, ParseError> {
        let start = self.advance().span; // 'while'
        self.expect(TokenKind::LeftParen, "expected '(' after 'while'")?;
        let condition = self.parse_expr()?;
        self.expect(TokenKind::RightParen, "expected ')' after condition")?;
        let body = self.parse_declaration()?;
        Ok(self.alloc_stmt(StmtKind::While { condition, body }, start))
    }

    fn parse_return(&mut self) -> Result<StmtId, ParseError> {
        let start = self.advance().span; // 'return'
        let value = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(TokenKind::Semicolon, "expected ';' after return value")?;
        Ok(self.alloc_stmt(StmtKind::Return(value), start))
    }

    fn parse_break(&mut self) -> Result<StmtId, ParseError> {
        let start = self.advance().span; // 'break'
        let value = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(TokenKind::Semicolon, "expected ';' after 'break'")?;
        Ok(self.alloc_stmt(StmtKind::Break(value), start))
    }

    fn parse_expr_stmt(&mut self) -> Result<StmtId, ParseError> {
        let start = self.current().span;
        let expr = self.parse_expr()?;
        self.expect(TokenKind::Semicolon, "expected ';' after expression")?;
        Ok(self.alloc_stmt(StmtKind::Expression(expr), start))
    }

    // Helpers

    pub(crate) fn parse_ident(&mut self, message: &str) -> Result<Name, ParseError> {
        let token = self.expect(TokenKind::Identifier, message)?;
        Ok(self.interner.intern(&token.lexeme))
    }

    fn alloc_stmt(&mut self, kind: StmtKind, start: plox_ir::Span) -> StmtId {
        let span = self.span_from(start);
        self.arena.alloc_stmt(Stmt::new(kind, span))
    }
}
