//! Arena storage for the flat AST.
//!
//! - Contiguous storage for all expressions and statements of one parse
//! - Child references are `ExprId`/`StmtId` indices
//! - Argument, parameter and block lists are ranges into flattened vectors

use std::sync::Arc;

use super::{Expr, ExprId, ExprRange, ParamRange, Stmt, StmtId, StmtRange};
use crate::Name;

#[inline]
fn to_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("AST arena exceeded {} entries", u32::MAX))
}

/// Contiguous storage for every node produced by one parse.
///
/// The arena is append-only. Evaluation reads it through shared references,
/// so evaluating a node never changes it.
#[derive(Clone, Default, Debug)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
    /// Flattened call argument lists.
    expr_lists: Vec<ExprId>,
    /// Flattened block bodies.
    stmt_lists: Vec<StmtId>,
    /// Flattened parameter lists.
    params: Vec<Name>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Expressions =====

    /// Allocate expression, return ID.
    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_index(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    /// Get expression by ID.
    ///
    /// # Panics
    /// Panics if `id` was not allocated in this arena.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = to_index(self.expr_lists.len());
        self.expr_lists.extend(exprs);
        ExprRange::new(start, to_index(self.expr_lists.len()) - start)
    }

    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.to_range()]
    }

    // ===== Statements =====

    /// Allocate statement, return ID.
    #[inline]
    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(to_index(self.stmts.len()));
        self.stmts.push(stmt);
        id
    }

    /// Get statement by ID.
    ///
    /// # Panics
    /// Panics if `id` was not allocated in this arena.
    #[inline]
    #[track_caller]
    pub fn get_stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    #[inline]
    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }

    pub fn alloc_stmt_list(&mut self, stmts: impl IntoIterator<Item = StmtId>) -> StmtRange {
        let start = to_index(self.stmt_lists.len());
        self.stmt_lists.extend(stmts);
        StmtRange::new(start, to_index(self.stmt_lists.len()) - start)
    }

    #[inline]
    pub fn get_stmt_list(&self, range: StmtRange) -> &[StmtId] {
        &self.stmt_lists[range.to_range()]
    }

    // ===== Parameters =====

    pub fn alloc_params(&mut self, params: impl IntoIterator<Item = Name>) -> ParamRange {
        let start = to_index(self.params.len());
        self.params.extend(params);
        ParamRange::new(start, to_index(self.params.len()) - start)
    }

    #[inline]
    pub fn get_params(&self, range: ParamRange) -> &[Name] {
        &self.params[range.to_range()]
    }
}

/// Reference-counted, read-only arena.
///
/// Function values keep the arena their body was parsed into alive, so a
/// closure created on one REPL line can still run after later lines were
/// parsed into fresh arenas.
#[derive(Clone, Debug)]
pub struct SharedArena(Arc<ExprArena>);

impl SharedArena {
    pub fn new(arena: ExprArena) -> Self {
        SharedArena(Arc::new(arena))
    }

    /// Whether both handles point at the same arena.
    pub fn ptr_eq(&self, other: &SharedArena) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for SharedArena {
    type Target = ExprArena;

    fn deref(&self) -> &ExprArena {
        &self.0
    }
}
