//! Monkey Eval - tree-walking evaluator for Monkey programs.
//!
//! # Architecture
//!
//! - `Interpreter`: walks a parsed `Program` and produces a [`Value`]
//! - `Environment`: chained, reference-counted scopes; closures keep theirs
//!   alive after the block that created them has finished
//! - `evaluate_binary` / `evaluate_unary`: direct enum dispatch for operators
//! - `Builtin`: `len` and `puts`, bound in a prelude scope
//! - `SharedPrintHandler`: where `puts` writes (stdout, or a buffer in tests)

mod builtins;
mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use builtins::{prelude, Builtin};
pub use environment::{Environment, LocalScope, Scope};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterConfig, DEFAULT_MAX_CALL_DEPTH};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::{FunctionValue, Value};
