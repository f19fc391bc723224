//! Expression parsing.
//!
//! One method per precedence level, lowest first. Every binary level is
//! left-associative: `a - b - c` parses as `(a - b) - c`.

use plox_ir::{
    BinaryOp, Expr, ExprId, ExprKind, Literal, LogicalOp, Span, TokenKind, TokenLiteral, UnaryOp,
};
use plox_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

type LevelFn<'a> = fn(&mut Parser<'a>) -> Result<ExprId, ParseError>;

impl<'a> Parser<'a> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested input grows the stack
    /// instead of overflowing it.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    /// `target = value`, right-associative. Only variables and property
    /// accesses are valid targets.
    fn parse_assignment(&mut self) -> Result<ExprId, ParseError> {
        let left = self.parse_or()?;

        if !self.check(TokenKind::Equal) {
            return Ok(left);
        }
        let equals = self.advance();
        let value = self.parse_expr()?;

        let target = self.arena.get_expr(left);
        let kind = match target.kind {
            ExprKind::Variable(name) => ExprKind::Assign { name, value },
            ExprKind::Get { object, name } => ExprKind::Set {
                object,
                name,
                value,
            },
            _ => return Err(ParseError::invalid_assignment_target(equals)),
        };
        let span = target.span.merge(self.span_of(value));
        Ok(self.alloc(kind, span))
    }

    fn parse_or(&mut self) -> Result<ExprId, ParseError> {
        self.parse_logical(TokenKind::Or, LogicalOp::Or, Self::parse_and)
    }

    fn parse_and(&mut self) -> Result<ExprId, ParseError> {
        self.parse_logical(TokenKind::And, LogicalOp::And, Self::parse_bitwise)
    }

    fn parse_bitwise(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_equality, |kind| match kind {
            TokenKind::Amp => Some(BinaryOp::BitAnd),
            TokenKind::Pipe => Some(BinaryOp::BitOr),
            TokenKind::Caret => Some(BinaryOp::BitXor),
            TokenKind::Shl => Some(BinaryOp::Shl),
            TokenKind::Shr => Some(BinaryOp::Shr),
            _ => None,
        })
    }

    fn parse_equality(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_comparison, |kind| match kind {
            TokenKind::EqualEqual => Some(BinaryOp::Eq),
            TokenKind::BangEqual => Some(BinaryOp::NotEq),
            _ => None,
        })
    }

    fn parse_comparison(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_term, |kind| match kind {
            TokenKind::Greater => Some(BinaryOp::Gt),
            TokenKind::GreaterEqual => Some(BinaryOp::GtEq),
            TokenKind::Less => Some(BinaryOp::Lt),
            TokenKind::LessEqual => Some(BinaryOp::LtEq),
            _ => None,
        })
    }

    fn parse_term(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_factor, |kind| match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        })
    }

    fn parse_factor(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_unary, |kind| match kind {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            _ => None,
        })
    }

    /// One left-associative binary level: `operand (op operand)*`.
    fn parse_binary_level(
        &mut self,
        operand: LevelFn<'a>,
        match_op: fn(TokenKind) -> Option<BinaryOp>,
    ) -> Result<ExprId, ParseError> {
        let mut left = operand(self)?;

        while let Some(op) = match_op(self.cursor.current_kind()) {
            self.advance();
            let right = operand(self)?;
            let span = self.span_of(left).merge(self.span_of(right));
            left = self.alloc(ExprKind::Binary { left, op, right }, span);
        }

        Ok(left)
    }

    fn parse_logical(
        &mut self,
        token: TokenKind,
        op: LogicalOp,
        operand: LevelFn<'a>,
    ) -> Result<ExprId, ParseError> {
        let mut left = operand(self)?;

        while self.eat(token) {
            let right = operand(self)?;
            let span = self.span_of(left).merge(self.span_of(right));
            left = self.alloc(ExprKind::Logical { left, op, right }, span);
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<ExprId, ParseError> {
        let op = match self.cursor.current_kind() {
            TokenKind::Bang => UnaryOp::Not,
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Tilde => UnaryOp::BitNot,
            _ => return self.parse_call(),
        };
        let start = self.advance().span;
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        let span = start.merge(self.span_of(operand));
        Ok(self.alloc(ExprKind::Unary { op, operand }, span))
    }

    /// Calls and property reads, chained left to right: `f(1)(2).x`.
    fn parse_call(&mut self) -> Result<ExprId, ParseError> {
        let mut expr = self.parse_primary()?;

        loop {
            if self.eat(TokenKind::LeftParen) {
                let mut args = Vec::new();
                if !self.check(TokenKind::RightParen) {
                    loop {
                        args.push(self.parse_expr()?);
                        if !self.eat(TokenKind::Comma) {
                            break;
                        }
                    }
                }
                self.expect(TokenKind::RightParen, "expected ')' after arguments")?;
                let span = self.span_from(self.span_of(expr));
                let args = self.arena.alloc_expr_list(args);
                expr = self.alloc(ExprKind::Call { callee: expr, args }, span);
            } else if self.eat(TokenKind::Dot) {
                let name = self.parse_ident("expected property name after '.'")?;
                let span = self.span_from(self.span_of(expr));
                expr = self.alloc(ExprKind::Get { object: expr, name }, span);
            } else {
                break;
            }
        }

        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let token = self.current();
        let literal = match (token.kind, &token.literal) {
            (TokenKind::True, _) => Literal::Bool(true),
            (TokenKind::False, _) => Literal::Bool(false),
            (TokenKind::Nil, _) => Literal::Nil,
            (TokenKind::Int, Some(TokenLiteral::Int(n))) => Literal::Int(*n),
            (TokenKind::Float, Some(TokenLiteral::Float(f))) => Literal::Float(*f),
            (TokenKind::String, Some(TokenLiteral::Str(s))) => {
                Literal::Str(self.interner.intern(s))
            }
            (TokenKind::Identifier, _) => {
                let name = self.parse_ident("expected identifier")?;
                return Ok(self.alloc(ExprKind::Variable(name), token.span));
            }
            (TokenKind::LeftParen, _) => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RightParen, "expected ')' after expression")?;
                let span = self.span_from(token.span);
                return Ok(self.alloc(ExprKind::Grouping(inner), span));
            }
            (TokenKind::Fun, _) => {
                self.advance();
                let (params, body) = self.parse_function_rest()?;
                let span = self.span_from(token.span);
                return Ok(self.alloc(ExprKind::Lambda { params, body }, span));
            }
            _ => return Err(ParseError::unexpected(token, "expected expression")),
        };
        self.advance();
        Ok(self.alloc(ExprKind::Literal(literal), token.span))
    }

    // Helpers

    #[inline]
    fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, span))
    }

    #[inline]
    fn span_of(&self, id: ExprId) -> Span {
        self.arena.get_expr(id).span
    }
}
