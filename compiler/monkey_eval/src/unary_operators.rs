//! Unary operator evaluation. No coercion: `-` takes an integer, `!` a
//! boolean.

use monkey_ir::UnaryOp;

use crate::errors::{integer_overflow, type_mismatch, EvalResult};
use crate::Value;

pub fn evaluate_unary<'ast>(op: UnaryOp, operand: &Value<'ast>) -> EvalResult<'ast> {
    match (op, operand) {
        (UnaryOp::Neg, Value::Integer(n)) => n
            .checked_neg()
            .map(Value::Integer)
            .ok_or_else(|| integer_overflow(op.as_symbol())),
        (UnaryOp::Not, Value::Boolean(b)) => Ok(Value::Boolean(!b)),
        (UnaryOp::Neg, other) => Err(type_mismatch("`-`", "integer", other)),
        (UnaryOp::Not, other) => Err(type_mismatch("`!`", "boolean", other)),
    }
}
