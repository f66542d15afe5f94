//! Tree-walking interpreter.
//!
//! Evaluation borrows the program: function values point into the AST, so
//! an `Interpreter<'ast>` cannot outlive the `Program` it runs.
//!
//! `return` is not an error, but it travels the same road: internally every
//! node yields `Result<Value, Unwind>`, and `Unwind::Return` is caught at the
//! nearest function call (or at the top of the program). Only
//! `Unwind::Error` ever reaches the caller, as an [`EvalError`].

mod function_call;

use monkey_ir::{Block, Expr, Program, Stmt};
use monkey_stack::ensure_sufficient_stack;

use crate::errors::{name_not_found, non_boolean_condition, EvalError, EvalResult};
use crate::operators::evaluate_binary;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::unary_operators::evaluate_unary;
use crate::{prelude, Environment, FunctionValue, Value};

/// Default cap on nested function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Tunables for one interpreter.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct InterpreterConfig {
    /// Calls nested deeper than this fail with `StackOverflow`.
    pub max_call_depth: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }
}

/// Why evaluation of a node stopped early.
enum Unwind<'ast> {
    /// A `return` statement, carrying its value to the enclosing call.
    Return(Value<'ast>),
    Error(EvalError),
}

impl From<EvalError> for Unwind<'_> {
    fn from(err: EvalError) -> Self {
        Unwind::Error(err)
    }
}

type Flow<'ast> = Result<Value<'ast>, Unwind<'ast>>;

pub struct Interpreter<'ast> {
    /// Program scope. Its parent is the prelude holding the builtins.
    globals: Environment<'ast>,
    print: SharedPrintHandler,
    config: InterpreterConfig,
    call_depth: usize,
}

impl<'ast> Interpreter<'ast> {
    /// An interpreter printing to stdout.
    pub fn new() -> Self {
        Self::with_print_handler(stdout_handler())
    }

    pub fn with_print_handler(print: SharedPrintHandler) -> Self {
        Interpreter {
            globals: prelude().child(),
            print,
            config: InterpreterConfig::default(),
            call_depth: 0,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: InterpreterConfig) -> Self {
        self.config = config;
        self
    }

    /// Run every statement in order and yield the value of the last one.
    ///
    /// A top-level `return` stops the program early with its value. The
    /// first runtime error aborts the run.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn eval_program(&mut self, program: &'ast Program) -> EvalResult<'ast> {
        let env = self.globals.clone();
        let mut result = Value::Null;
        for stmt in &program.statements {
            match self.eval_statement(stmt, &env) {
                Ok(value) => result = value,
                Err(Unwind::Return(value)) => return Ok(value),
                Err(Unwind::Error(err)) => {
                    tracing::debug!(error = %err, "evaluation failed");
                    return Err(err);
                }
            }
        }
        Ok(result)
    }

    /// Statements run in `env` itself; the caller decides whether that is
    /// a fresh scope.
    fn eval_block(&mut self, block: &'ast Block, env: &Environment<'ast>) -> Flow<'ast> {
        let mut result = Value::Null;
        for stmt in &block.statements {
            result = self.eval_statement(stmt, env)?;
        }
        Ok(result)
    }

    fn eval_statement(&mut self, stmt: &'ast Stmt, env: &Environment<'ast>) -> Flow<'ast> {
        match stmt {
            Stmt::Let { name, value } => {
                let value = self.eval_expr(value, env)?;
                env.define(name.as_str(), value);
                Ok(Value::Null)
            }
            Stmt::Return(expr) => {
                let value = self.eval_expr(expr, env)?;
                Err(Unwind::Return(value))
            }
            Stmt::Expression(expr) => self.eval_expr(expr, env),
        }
    }

    fn eval_expr(&mut self, expr: &'ast Expr, env: &Environment<'ast>) -> Flow<'ast> {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr, env))
    }

    fn eval_expr_inner(&mut self, expr: &'ast Expr, env: &Environment<'ast>) -> Flow<'ast> {
        match expr {
            Expr::Integer(n) => Ok(Value::Integer(*n)),
            Expr::Boolean(b) => Ok(Value::Boolean(*b)),
            Expr::String(s) => Ok(Value::string(s.as_str())),
            Expr::Identifier(name) => env
                .lookup(name)
                .ok_or_else(|| Unwind::from(name_not_found(name))),
            Expr::Prefix { op, operand } => {
                let operand = self.eval_expr(operand, env)?;
                Ok(evaluate_unary(*op, &operand)?)
            }
            Expr::Infix { op, left, right } => {
                let left = self.eval_expr(left, env)?;
                let right = self.eval_expr(right, env)?;
                Ok(evaluate_binary(&left, &right, *op)?)
            }
            Expr::Conditional {
                condition,
                consequence,
                alternate,
            } => self.eval_conditional(condition, consequence, alternate.as_ref(), env),
            Expr::Function(literal) => {
                Ok(Value::Function(FunctionValue::new(literal, env.clone())))
            }
            Expr::Call { callee, arguments } => self.eval_call(callee, arguments, env),
            Expr::Array(elements) => {
                let values = self.eval_expr_list(elements, env)?;
                Ok(Value::array(values))
            }
        }
    }

    fn eval_conditional(
        &mut self,
        condition: &'ast Expr,
        consequence: &'ast Block,
        alternate: Option<&'ast Block>,
        env: &Environment<'ast>,
    ) -> Flow<'ast> {
        let chosen = match self.eval_expr(condition, env)? {
            Value::Boolean(b) => b,
            other => return Err(non_boolean_condition(&other).into()),
        };
        let branch = if chosen { Some(consequence) } else { alternate };
        match branch {
            // Bindings made inside a branch stay inside it.
            Some(block) => self.eval_block(block, &env.child()),
            None => Ok(Value::Null),
        }
    }

    /// Left to right; stops at the first failure.
    fn eval_expr_list(
        &mut self,
        exprs: &'ast [Expr],
        env: &Environment<'ast>,
    ) -> Result<Vec<Value<'ast>>, Unwind<'ast>> {
        exprs.iter().map(|expr| self.eval_expr(expr, env)).collect()
    }
}

impl Default for Interpreter<'_> {
    fn default() -> Self {
        Self::new()
    }
}
