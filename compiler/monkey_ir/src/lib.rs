//! Monkey IR - syntax types shared by every phase.
//!
//! This crate contains the data the front end hands around:
//! - `Position` for line/column source locations
//! - `Token` and `TokenKind` for lexer output
//! - AST nodes (`Program`, `Stmt`, `Block`, `Expr`)
//! - Operators and their binding precedence
//!
//! The AST owns its children exclusively (`Box`/`Vec`); nothing in the tree
//! is shared, so dropping a `Program` drops everything below it.
//!
//! Every AST node implements `Display`, producing canonical source text that
//! parses back to an identical tree.

pub mod ast;
mod position;
mod token;

pub use ast::{BinaryOp, Block, Expr, FunctionLiteral, Precedence, Program, Stmt, UnaryOp};
pub use position::Position;
pub use token::{Token, TokenKind};
