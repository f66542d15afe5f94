//! Runtime values.
//!
//! Composite values share their immutable contents (`Rc<str>`, `Rc<[Value]>`)
//! instead of copying them. Nothing in the language mutates a string or an
//! array in place, so sharing is indistinguishable from copying.
//!
//! The `'ast` lifetime ties function values to the program they were
//! created from: a closure points at its [`FunctionLiteral`] in the AST.

use std::fmt;
use std::rc::Rc;

use monkey_ir::FunctionLiteral;

use crate::{Builtin, Environment};

/// A runtime value.
#[derive(Clone, Default)]
pub enum Value<'ast> {
    #[default]
    Null,
    Integer(i64),
    Boolean(bool),
    String(Rc<str>),
    Array(Rc<[Value<'ast>]>),
    Function(FunctionValue<'ast>),
    Builtin(Builtin),
}

impl<'ast> Value<'ast> {
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::String(s.into())
    }

    pub fn array(elements: Vec<Value<'ast>>) -> Self {
        Value::Array(elements.into())
    }

    /// Type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Integer(_) => "integer",
            Value::Boolean(_) => "boolean",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Function(_) => "function",
            Value::Builtin(_) => "builtin",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// Structural equality. Values of different types are never equal;
/// functions are equal only to the same closure.
impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.same_closure(b),
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            _ => false,
        }
    }
}

/// Textual form used by `puts` and the CLI.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::String(s) => f.write_str(s),
            Value::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            Value::Function(function) => write!(f, "{function}"),
            Value::Builtin(builtin) => write!(f, "builtin {}", builtin.name()),
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Integer(n) => write!(f, "Integer({n})"),
            Value::Boolean(b) => write!(f, "Boolean({b})"),
            Value::String(s) => write!(f, "String({s:?})"),
            Value::Array(elements) => f.debug_tuple("Array").field(elements).finish(),
            Value::Function(function) => write!(f, "Function({function})"),
            Value::Builtin(builtin) => write!(f, "Builtin({})", builtin.name()),
        }
    }
}

/// A closure: the function literal plus the scope it was evaluated in.
#[derive(Clone)]
pub struct FunctionValue<'ast> {
    pub literal: &'ast FunctionLiteral,
    pub env: Environment<'ast>,
}

impl<'ast> FunctionValue<'ast> {
    pub fn new(literal: &'ast FunctionLiteral, env: Environment<'ast>) -> Self {
        FunctionValue { literal, env }
    }

    pub fn parameters(&self) -> &'ast [String] {
        &self.literal.parameters
    }

    /// Same literal closed over the same scope.
    pub fn same_closure(&self, other: &Self) -> bool {
        std::ptr::eq(self.literal, other.literal) && self.env.ptr_eq(&other.env)
    }
}

/// `fn(x, y) {...}`; the body is elided.
impl fmt::Display for FunctionValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn({}) {{...}}", self.literal.parameters.join(", "))
    }
}
