//! Native functions pre-registered in the global frame.

use std::time::{SystemTime, UNIX_EPOCH};

use plox_ir::StringInterner;

use crate::errors::invalid_argument;
use crate::{Environment, EvalResult, NativeFn, Value};

/// Name, arity and implementation of every built-in.
const BUILTINS: &[(&str, usize, NativeFn)] = &[("clock", 0, clock), ("sqrt", 1, sqrt)];

/// Bind every built-in in the global frame of `env`.
pub(crate) fn register(env: &mut Environment, interner: &StringInterner) {
    for &(name, arity, func) in BUILTINS {
        let key = interner.intern(name);
        env.define_global(key, Value::native(interner.lookup(key), arity, func));
    }
}

/// `sqrt(x)`: square root of a number, always a float.
fn sqrt(args: &[Value]) -> EvalResult {
    match args {
        [x] => x
            .as_number()
            .map(|n| Value::Float(n.sqrt()))
            .ok_or_else(|| invalid_argument("sqrt", "a number", x)),
        _ => Err(crate::errors::arity_mismatch(1, args.len())),
    }
}

/// `clock()`: seconds since the Unix epoch.
#[expect(
    clippy::unnecessary_wraps,
    reason = "every native shares the fallible NativeFn signature"
)]
fn clock(_args: &[Value]) -> EvalResult {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0.0, |d| d.as_secs_f64());
    Ok(Value::Float(secs))
}
