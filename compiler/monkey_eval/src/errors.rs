//! Evaluation errors.
//!
//! `EvalErrorKind` is the typed category; `EvalError` adds the chain of
//! function calls that were active when it was raised. Factory functions
//! (`name_not_found()`, `division_by_zero()`, ...) are the way the
//! evaluator builds errors; they are `#[cold]` so the happy path stays tight.

use std::fmt;

use monkey_diagnostic::{Diagnostic, ErrorCode};

use crate::Value;

/// Result of evaluating one node.
pub type EvalResult<'ast> = Result<Value<'ast>, EvalError>;

/// Frames kept in a backtrace; deeper ones are dropped.
const MAX_BACKTRACE_FRAMES: usize = 32;

/// Typed category of a runtime failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("missing variable: {name}")]
    NameNotFound { name: String },

    #[error("type mismatch for {context}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Operator symbol or builtin name that rejected the operand.
        context: String,
        expected: String,
        found: String,
    },

    #[error("{}", arity_message(callee, *expected, *got))]
    ArityMismatch {
        callee: String,
        expected: usize,
        got: usize,
    },

    #[error("non-bool result in conditional expression: found {found}")]
    NonBooleanCondition { found: String },

    #[error("non-function object in call expression: {found}")]
    NonCallableValue { found: String },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in {op}")]
    IntegerOverflow { op: String },

    #[error("maximum call depth exceeded (limit: {limit})")]
    StackOverflow { limit: usize },
}

fn arity_message(callee: &str, expected: usize, got: usize) -> String {
    let amount = if got > expected {
        "too many"
    } else {
        "not enough"
    };
    format!("{amount} arguments in call to {callee}: expected {expected}, got {got}")
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::NameNotFound { .. } => ErrorCode::E2001,
            EvalErrorKind::TypeMismatch { .. } => ErrorCode::E2002,
            EvalErrorKind::ArityMismatch { .. } => ErrorCode::E2003,
            EvalErrorKind::NonBooleanCondition { .. } => ErrorCode::E2004,
            EvalErrorKind::NonCallableValue { .. } => ErrorCode::E2005,
            EvalErrorKind::DivisionByZero => ErrorCode::E2006,
            EvalErrorKind::IntegerOverflow { .. } => ErrorCode::E2007,
            EvalErrorKind::StackOverflow { .. } => ErrorCode::E2008,
        }
    }
}

/// A runtime failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Names of the functions being called, innermost first.
    pub backtrace: Vec<String>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            backtrace: Vec::new(),
        }
    }

    /// Record that the error passed out of a call to `callee`.
    #[must_use]
    pub fn in_call(mut self, callee: &str) -> Self {
        if self.backtrace.len() < MAX_BACKTRACE_FRAMES {
            self.backtrace.push(callee.to_string());
        }
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Runtime errors carry no source position; notes list the calls.
    pub fn to_diagnostic(&self) -> Diagnostic {
        self.backtrace.iter().fold(
            Diagnostic::error(self.code()).with_message(self.kind.to_string()),
            |diag, frame| diag.with_note(format!("in call to {frame}")),
        )
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for EvalError {}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

// Factories

#[cold]
pub fn name_not_found(name: &str) -> EvalError {
    EvalErrorKind::NameNotFound {
        name: name.to_string(),
    }
    .into()
}

#[cold]
pub fn type_mismatch(context: &str, expected: &str, found: &Value<'_>) -> EvalError {
    EvalErrorKind::TypeMismatch {
        context: context.to_string(),
        expected: expected.to_string(),
        found: found.type_name().to_string(),
    }
    .into()
}

/// Mismatch between the two operands of a binary operator.
#[cold]
pub fn operand_mismatch(op: &str, left: &Value<'_>, right: &Value<'_>) -> EvalError {
    EvalErrorKind::TypeMismatch {
        context: format!("`{op}`"),
        expected: format!("{} operand", left.type_name()),
        found: right.type_name().to_string(),
    }
    .into()
}

#[cold]
pub fn arity_mismatch(callee: &str, expected: usize, got: usize) -> EvalError {
    EvalErrorKind::ArityMismatch {
        callee: callee.to_string(),
        expected,
        got,
    }
    .into()
}

#[cold]
pub fn non_boolean_condition(found: &Value<'_>) -> EvalError {
    EvalErrorKind::NonBooleanCondition {
        found: found.type_name().to_string(),
    }
    .into()
}

#[cold]
pub fn non_callable(found: &Value<'_>) -> EvalError {
    EvalErrorKind::NonCallableValue {
        found: found.type_name().to_string(),
    }
    .into()
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalErrorKind::DivisionByZero.into()
}

#[cold]
pub fn integer_overflow(op: &str) -> EvalError {
    EvalErrorKind::IntegerOverflow { op: op.to_string() }.into()
}

#[cold]
pub fn stack_overflow(limit: usize) -> EvalError {
    EvalErrorKind::StackOverflow { limit }.into()
}
