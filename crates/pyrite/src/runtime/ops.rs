//! Arithmetic operators with interpreter promotion rules.
//!
//! Integer operands stay integers (`1 - 2` is an int), any int/float mix
//! promotes to float, and true division always yields a float (`2 / 3` is a
//! float) regardless of operand kinds. Booleans participate as the integers
//! 0 and 1. Integer arithmetic is overflow-checked; the runtime never wraps
//! silently.
//!
//! `add` additionally concatenates like-kinded sequences (`str`, `tuple`,
//! `list`, `bytes`).

use crate::error::{Error, Result};
use crate::runtime::Value;
use crate::runtime::value::Number;

/// Binary addition.
///
/// Numeric addition with int/float promotion, or concatenation when both
/// operands are the same sequence kind.
pub fn add(lhs: &Value, rhs: &Value) -> Result<Value> {
    match (lhs, rhs) {
        (Value::Str(a), Value::Str(b)) => {
            let mut s = String::with_capacity(a.len() + b.len());
            s.push_str(a);
            s.push_str(b);
            Ok(Value::str(s))
        }
        (Value::Bytes(a), Value::Bytes(b)) => {
            let mut data = Vec::with_capacity(a.len() + b.len());
            data.extend_from_slice(a);
            data.extend_from_slice(b);
            Ok(Value::bytes(data))
        }
        (Value::Tuple(a), Value::Tuple(b)) => {
            Ok(Value::tuple(a.iter().chain(b.iter()).cloned().collect()))
        }
        (Value::List(a), Value::List(b)) => {
            Ok(Value::list(a.iter().chain(b.iter()).cloned().collect()))
        }
        _ => numeric_binop(lhs, rhs, "+", i64::checked_add, |a, b| a + b),
    }
}

/// Binary subtraction. Two integers yield an integer.
pub fn sub(lhs: &Value, rhs: &Value) -> Result<Value> {
    numeric_binop(lhs, rhs, "-", i64::checked_sub, |a, b| a - b)
}

/// Binary multiplication.
pub fn mul(lhs: &Value, rhs: &Value) -> Result<Value> {
    numeric_binop(lhs, rhs, "*", i64::checked_mul, |a, b| a * b)
}

/// True division. Numeric operands always yield a float.
pub fn div(lhs: &Value, rhs: &Value) -> Result<Value> {
    let (a, b) = numeric_operands(lhs, rhs, "/")?;
    let a = widen(a);
    let b = widen(b);
    if b == 0.0 {
        return Err(Error::DivisionByZero);
    }
    Ok(Value::Float(a / b))
}

/// Numeric negation.
pub fn neg(value: &Value) -> Result<Value> {
    match value.as_number() {
        Some(Number::Int(n)) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or(Error::IntOverflow { op: "-" }),
        Some(Number::Float(f)) => Ok(Value::Float(-f)),
        None => Err(Error::UnsupportedOperand {
            op: "-",
            lhs: value.type_of(),
            rhs: value.type_of(),
        }),
    }
}

/// Applies a binary operator with int/float promotion.
fn numeric_binop(
    lhs: &Value,
    rhs: &Value,
    op: &'static str,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Result<Value> {
    let (a, b) = numeric_operands(lhs, rhs, op)?;
    match (a, b) {
        (Number::Int(a), Number::Int(b)) => {
            int_op(a, b).map(Value::Int).ok_or(Error::IntOverflow { op })
        }
        (a, b) => Ok(Value::Float(float_op(widen(a), widen(b)))),
    }
}

/// Extracts numeric payloads or reports the unsupported combination.
fn numeric_operands(
    lhs: &Value,
    rhs: &Value,
    op: &'static str,
) -> Result<(Number, Number)> {
    match (lhs.as_number(), rhs.as_number()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(Error::UnsupportedOperand {
            op,
            lhs: lhs.type_of(),
            rhs: rhs.type_of(),
        }),
    }
}

const fn widen(n: Number) -> f64 {
    match n {
        Number::Int(i) => i as f64,
        Number::Float(f) => f,
    }
}
