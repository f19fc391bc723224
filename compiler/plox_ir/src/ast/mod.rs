//! Flat AST for plox programs.
//!
//! Nodes live in an [`ExprArena`] and refer to their children through
//! [`ExprId`]/[`StmtId`] indices. Every child is referenced from exactly one
//! parent, so the arena encodes a tree.
//!
//! # Expressions
//! Literal, Grouping, Unary, Binary, Logical, Variable, Assign, Call,
//! Lambda (anonymous function), Get (property read), Set (property write).
//!
//! # Statements
//! Expression, Print, Var, Block, If, While, Function, Return, Break, Class.

mod arena;
mod operators;

use std::fmt;

pub use arena::{ExprArena, SharedArena};
pub use operators::{BinaryOp, LogicalOp, UnaryOp};

use crate::{Name, Span};

/// Index into the expression arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Index into the statement arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct StmtId(u32);

impl StmtId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        StmtId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for StmtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StmtId({})", self.0)
    }
}

macro_rules! define_range {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
        pub struct $name {
            pub start: u32,
            pub len: u32,
        }

        impl $name {
            pub const EMPTY: $name = $name { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u32) -> Self {
                $name { start, len }
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            fn to_range(self) -> std::ops::Range<usize> {
                let start = self.start as usize;
                start..start + self.len as usize
            }
        }
    };
}

define_range!(
    /// Range of argument expressions in the arena.
    ExprRange
);
define_range!(
    /// Range of statements forming a block body.
    StmtRange
);
define_range!(
    /// Range of parameter names.
    ParamRange
);

/// Literal value stored in the AST.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Literal {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Interned string contents.
    Str(Name),
}

/// Expression node.
#[derive(Clone, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    Literal(Literal),
    /// `( expr )`
    Grouping(ExprId),
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    Binary {
        left: ExprId,
        op: BinaryOp,
        right: ExprId,
    },
    /// Short-circuit `and` / `or`.
    Logical {
        left: ExprId,
        op: LogicalOp,
        right: ExprId,
    },
    Variable(Name),
    Assign {
        name: Name,
        value: ExprId,
    },
    Call {
        callee: ExprId,
        args: ExprRange,
    },
    /// `fun (params) { body }`
    Lambda {
        params: ParamRange,
        body: StmtRange,
    },
    /// `object.name`
    Get {
        object: ExprId,
        name: Name,
    },
    /// `object.name = value`
    Set {
        object: ExprId,
        name: Name,
        value: ExprId,
    },
}

/// Statement node.
#[derive(Clone, PartialEq, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum StmtKind {
    Expression(ExprId),
    Print(ExprId),
    Var {
        name: Name,
        init: Option<ExprId>,
    },
    Block(StmtRange),
    If {
        condition: ExprId,
        then_branch: StmtId,
        else_branch: Option<StmtId>,
    },
    While {
        condition: ExprId,
        body: StmtId,
    },
    Function {
        name: Name,
        params: ParamRange,
        body: StmtRange,
    },
    Return(Option<ExprId>),
    /// Exits the nearest enclosing loop. The operand, if any, is evaluated
    /// for its side effects only.
    Break(Option<ExprId>),
    Class {
        name: Name,
    },
}

/// Top-level statements of one parsed source, in source order.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Module {
    pub statements: Vec<StmtId>,
}
