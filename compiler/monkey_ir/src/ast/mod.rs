//! Abstract syntax tree.
//!
//! Compound nodes own their children. The tree is built once by the parser
//! and never mutated afterwards; the evaluator borrows it for the lifetime
//! of a run.

mod operators;
mod printer;

use monkey_stack::ensure_sufficient_stack;

pub use operators::{BinaryOp, Precedence, UnaryOp};

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expr {
    /// Integer literal: `42`. The parser produces a negative literal only
    /// for `i64::MIN`; any other `-42` is a prefix negation.
    Integer(i64),
    /// `true` / `false`
    Boolean(bool),
    /// String literal contents, without quotes.
    String(String),
    /// Variable reference
    Identifier(String),
    /// `-x`, `!x`
    Prefix { op: UnaryOp, operand: Box<Expr> },
    /// `left op right`
    Infix {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `if (condition) { .. } else { .. }`
    Conditional {
        condition: Box<Expr>,
        consequence: Block,
        alternate: Option<Block>,
    },
    /// `fn(params) { body }`
    Function(FunctionLiteral),
    /// `callee(arguments)`
    Call {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },
    /// `[a, b, c]`
    Array(Vec<Expr>),
}

impl Expr {
    /// Convenience constructor used by the parser and by tests.
    pub fn infix(op: BinaryOp, left: Expr, right: Expr) -> Expr {
        Expr::Infix {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn prefix(op: UnaryOp, operand: Expr) -> Expr {
        Expr::Prefix {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn call(callee: Expr, arguments: Vec<Expr>) -> Expr {
        Expr::Call {
            callee: Box::new(callee),
            arguments,
        }
    }

    pub fn ident(name: impl Into<String>) -> Expr {
        Expr::Identifier(name.into())
    }
}

/// Children are detached and released on a guarded stack, so dropping a
/// tree nested as deeply as the parser accepts cannot overflow.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut exprs = Vec::new();
        let mut blocks = Vec::new();
        match self {
            Expr::Integer(_) | Expr::Boolean(_) | Expr::String(_) | Expr::Identifier(_) => return,
            Expr::Prefix { operand, .. } => exprs.push(detach(operand)),
            Expr::Infix { left, right, .. } => {
                exprs.push(detach(left));
                exprs.push(detach(right));
            }
            Expr::Conditional {
                condition,
                consequence,
                alternate,
            } => {
                exprs.push(detach(condition));
                blocks.push(std::mem::take(consequence));
                blocks.extend(alternate.take());
            }
            Expr::Function(literal) => blocks.push(std::mem::take(&mut literal.body)),
            Expr::Call { callee, arguments } => {
                exprs.push(detach(callee));
                exprs.append(arguments);
            }
            Expr::Array(elements) => exprs.append(elements),
        }
        ensure_sufficient_stack(move || std::mem::drop((exprs, blocks)));
    }
}

/// Take a boxed child, leaving a leaf behind.
fn detach(slot: &mut Box<Expr>) -> Expr {
    std::mem::replace(&mut **slot, Expr::Boolean(false))
}

/// Function literal: parameter names and a body.
///
/// Runtime function values point back at this node, so it is the unit of
/// code a closure carries.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionLiteral {
    pub parameters: Vec<String>,
    pub body: Block,
}

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Stmt {
    /// `let name = value;`
    Let { name: String, value: Expr },
    /// `return value;`
    Return(Expr),
    /// Bare expression, value is the statement's result.
    Expression(Expr),
}

/// `{ statements }`: function bodies and conditional branches.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Block { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// A parsed source file: the top-level statements in order.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
