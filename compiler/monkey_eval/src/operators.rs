//! Binary operator evaluation.
//!
//! Direct dispatch on the operand pair. Equality is defined for every pair
//! of values; everything else needs two integers, except `+` which also
//! concatenates two strings.

use monkey_ir::BinaryOp;

use crate::errors::{
    division_by_zero, integer_overflow, operand_mismatch, type_mismatch, EvalResult,
};
use crate::Value;

/// Checked arithmetic; `None` means overflow.
#[inline]
fn checked_arith<'ast>(result: Option<i64>, op: BinaryOp) -> EvalResult<'ast> {
    result
        .map(Value::Integer)
        .ok_or_else(|| integer_overflow(op.as_symbol()))
}

/// Apply `op` to two already-evaluated operands.
pub fn evaluate_binary<'ast>(
    left: &Value<'ast>,
    right: &Value<'ast>,
    op: BinaryOp,
) -> EvalResult<'ast> {
    match op {
        BinaryOp::Eq => return Ok(Value::Boolean(left == right)),
        BinaryOp::NotEq => return Ok(Value::Boolean(left != right)),
        _ => {}
    }

    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => eval_int_binary(*a, *b, op),
        (Value::String(a), Value::String(b)) if op == BinaryOp::Add => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::string(joined))
        }
        (Value::Integer(_), _) => Err(operand_mismatch(op.as_symbol(), left, right)),
        (Value::String(_), _) if op == BinaryOp::Add => {
            Err(operand_mismatch(op.as_symbol(), left, right))
        }
        _ => Err(type_mismatch(&format!("`{op}`"), "integer", left)),
    }
}

fn eval_int_binary<'ast>(a: i64, b: i64, op: BinaryOp) -> EvalResult<'ast> {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), op),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), op),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), op),
        BinaryOp::Div => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                // i64::MIN / -1
                checked_arith(a.checked_div(b), op)
            }
        }
        BinaryOp::Lt => Ok(Value::Boolean(a < b)),
        BinaryOp::LtEq => Ok(Value::Boolean(a <= b)),
        BinaryOp::Gt => Ok(Value::Boolean(a > b)),
        BinaryOp::GtEq => Ok(Value::Boolean(a >= b)),
        BinaryOp::Eq => Ok(Value::Boolean(a == b)),
        BinaryOp::NotEq => Ok(Value::Boolean(a != b)),
    }
}
