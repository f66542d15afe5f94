//! Canonical source printing.
//!
//! Output is fully parenthesised so that printing and re-parsing yields the
//! same tree regardless of precedence: `(a + (b * c))`, `(-x)`.

use std::fmt::{self, Display, Formatter};

use monkey_stack::ensure_sufficient_stack;

use super::{Block, Expr, FunctionLiteral, Program, Stmt};

fn write_list<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| self.write_canonical(f))
    }
}

impl Expr {
    fn write_canonical(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Integer(n) => write!(f, "{n}"),
            Expr::Boolean(b) => write!(f, "{b}"),
            Expr::String(s) => write!(f, "\"{s}\""),
            Expr::Identifier(name) => f.write_str(name),
            Expr::Prefix { op, operand } => write!(f, "({op}{operand})"),
            Expr::Infix { op, left, right } => write!(f, "({left} {op} {right})"),
            Expr::Conditional {
                condition,
                consequence,
                alternate,
            } => {
                write!(f, "if ({condition}) {consequence}")?;
                if let Some(alternate) = alternate {
                    write!(f, " else {alternate}")?;
                }
                Ok(())
            }
            Expr::Function(literal) => write!(f, "{literal}"),
            Expr::Call { callee, arguments } => {
                write!(f, "{callee}(")?;
                write_list(f, arguments)?;
                f.write_str(")")
            }
            Expr::Array(elements) => {
                f.write_str("[")?;
                write_list(f, elements)?;
                f.write_str("]")
            }
        }
    }
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        write_list(f, &self.parameters)?;
        write!(f, ") {}", self.body)
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let { name, value } => write!(f, "let {name} = {value};"),
            Stmt::Return(value) => write!(f, "return {value};"),
            Stmt::Expression(value) => write!(f, "{value};"),
        }
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for stmt in &self.statements {
            write!(f, " {stmt}")?;
        }
        f.write_str(" }")
    }
}

/// One statement per line.
impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}
