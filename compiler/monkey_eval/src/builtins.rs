//! Native functions available to every program.
//!
//! Builtins are bound in the prelude scope before the program runs, so a
//! user `let len = ...` shadows them instead of replacing them.

use crate::errors::{arity_mismatch, type_mismatch, EvalResult};
use crate::print_handler::PrintHandlerImpl;
use crate::{Environment, Value};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Builtin {
    /// `len(x)`: characters in a string, elements in an array.
    Len,
    /// `puts(x)`: print the textual form of `x`, yield null.
    Puts,
}

impl Builtin {
    pub const ALL: [Builtin; 2] = [Builtin::Len, Builtin::Puts];

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Len => "len",
            Builtin::Puts => "puts",
        }
    }

    /// Every builtin takes exactly one argument.
    pub fn arity(self) -> usize {
        1
    }

    pub fn call<'ast>(self, args: &[Value<'ast>], print: &PrintHandlerImpl) -> EvalResult<'ast> {
        let [arg] = args else {
            return Err(arity_mismatch(self.name(), self.arity(), args.len()));
        };
        match self {
            Builtin::Len => len(arg),
            Builtin::Puts => {
                print.println(&arg.to_string());
                Ok(Value::Null)
            }
        }
    }
}

fn len<'ast>(arg: &Value<'ast>) -> EvalResult<'ast> {
    let count = match arg {
        Value::String(s) => s.chars().count(),
        Value::Array(elements) => elements.len(),
        other => return Err(type_mismatch("len", "string or array", other)),
    };
    // A string or array long enough to overflow i64 cannot be allocated.
    Ok(Value::Integer(i64::try_from(count).unwrap_or(i64::MAX)))
}

/// Root scope holding every builtin.
pub fn prelude<'ast>() -> Environment<'ast> {
    let env = Environment::new();
    for builtin in Builtin::ALL {
        env.define(builtin.name(), Value::Builtin(builtin));
    }
    env
}
