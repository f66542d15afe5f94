//! Stack growth for deep recursion.
//!
//! The parser recurses once per nesting level of an expression and the
//! evaluator once per nested expression or call, so inputs such as
//! `((((((...))))))` or a deeply recursive Monkey function would otherwise
//! overflow the native stack and abort the process.
//!
//! On native targets [`ensure_sufficient_stack`] grows the stack through
//! `stacker` whenever the remaining space drops under the red zone. On
//! `wasm32` it simply calls the closure.

/// Grow when less than this much stack is left (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment (2MB).
const STACK_SEGMENT: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if the red zone has been reached.
///
/// Wrap the body of every recursive entry point:
///
/// ```text
/// fn eval_expr(&mut self, expr: &Expr) -> Result<Value, Error> {
///     ensure_sufficient_stack(|| self.eval_expr_inner(expr))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
