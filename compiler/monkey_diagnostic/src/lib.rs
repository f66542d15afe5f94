//! Diagnostics for the Monkey front end and evaluator.
//!
//! Every error the interpreter reports is turned into a [`Diagnostic`]:
//! an [`ErrorCode`] for searchability, a one-line message and, when the
//! error came from source text, the [`Position`](monkey_ir::Position) it
//! points at. Diagnostics render as `line:column: message`.
//!
//! `ErrorDocs` carries longer explanations for each code, shown by
//! `monkey explain <code>`.

mod diagnostic;
mod error_code;
pub mod errors;

pub use diagnostic::Diagnostic;
pub use error_code::{ErrorCode, UnknownErrorCode};
pub use errors::ErrorDocs;
