//! Function call evaluation.

use monkey_ir::Expr;

use super::{Flow, Interpreter, Unwind};
use crate::errors::{arity_mismatch, non_callable, stack_overflow, EvalError, EvalResult};
use crate::{Environment, FunctionValue, Value};

/// Name used for a callee in error messages and backtraces.
fn callee_name(callee: &Expr) -> &str {
    match callee {
        Expr::Identifier(name) => name.as_str(),
        _ => "anonymous function",
    }
}

fn check_arity(callee: &str, expected: usize, got: usize) -> Result<(), EvalError> {
    if expected == got {
        Ok(())
    } else {
        Err(arity_mismatch(callee, expected, got))
    }
}

impl<'ast> Interpreter<'ast> {
    /// Evaluate `callee(arguments)` in `env`.
    ///
    /// The arity is checked before any argument is evaluated, so a call with
    /// the wrong number of arguments has no side effects of its own.
    pub(super) fn eval_call(
        &mut self,
        callee: &'ast Expr,
        arguments: &'ast [Expr],
        env: &Environment<'ast>,
    ) -> Flow<'ast> {
        let target = self.eval_expr(callee, env)?;
        match &target {
            Value::Function(function) => {
                let name = callee_name(callee);
                check_arity(name, function.parameters().len(), arguments.len())?;
                // Arguments see the caller's scope, never the new one.
                let args = self.eval_expr_list(arguments, env)?;
                Ok(self.call_function(function, name, args)?)
            }
            Value::Builtin(builtin) => {
                check_arity(builtin.name(), builtin.arity(), arguments.len())?;
                let args = self.eval_expr_list(arguments, env)?;
                Ok(builtin.call(&args, &self.print)?)
            }
            other => Err(non_callable(other).into()),
        }
    }

    /// Run a closure body with `args` bound to its parameters.
    ///
    /// The call scope is a child of the scope the closure captured, not of
    /// the caller's. A `return` inside the body ends here.
    #[tracing::instrument(level = "debug", skip_all, fields(callee = name))]
    fn call_function(
        &mut self,
        function: &FunctionValue<'ast>,
        name: &str,
        args: Vec<Value<'ast>>,
    ) -> EvalResult<'ast> {
        if self.call_depth >= self.config.max_call_depth {
            return Err(stack_overflow(self.config.max_call_depth));
        }

        let call_env = function.env.child();
        for (param, arg) in function.parameters().iter().zip(args) {
            call_env.define(param.as_str(), arg);
        }
        tracing::trace!(depth = self.call_depth, scopes = call_env.depth(), "call scope");

        let literal = function.literal;
        self.call_depth += 1;
        let result = self.eval_block(&literal.body, &call_env);
        self.call_depth -= 1;

        match result {
            Ok(value) | Err(Unwind::Return(value)) => Ok(value),
            Err(Unwind::Error(err)) => Err(err.in_call(name)),
        }
    }
}
