//! Stack growth for deeply nested plox programs.
//!
//! The parser recurses once per precedence level and the evaluator once per
//! nested expression, block and call. A script like `((((...))))` or a deep
//! user recursion would otherwise overflow the host thread's stack before the
//! interpreter gets a chance to report anything.
//!
//! Wrap each recursive entry point with [`ensure_sufficient_stack`]:
//!
//! ```text
//! fn eval(&mut self, id: ExprId) -> EvalResult {
//!     ensure_sufficient_stack(|| self.eval_inner(id))
//! }
//! ```

/// Grow the stack when less than this much remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if fewer than `RED_ZONE` bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
