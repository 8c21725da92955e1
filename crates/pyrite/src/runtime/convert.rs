//! Built-in conversion constructors.
//!
//! These free functions are the runtime entry points for the interpreter's
//! `int()`, `float()` and `bytes()` builtins. Each takes the builtin's
//! optional argument and either produces a new [`Value`] or reports why the
//! conversion is impossible.
//!
//! # Semantics
//!
//! - `int` truncates floats toward zero and parses decimal string literals;
//!   with no argument it yields `0`.
//! - `float` widens integers exactly; with no argument it yields `0.0`.
//! - `bytes` validates that every source element is an integer in `0..=255`
//!   and refuses anything else; a failed construction produces no value.
//!
//! # Example
//!
//! ```rust
//! use pyrite::runtime::{Value, convert};
//!
//! assert_eq!(convert::int(Some(&Value::float(1.2))).unwrap(), Value::int(1));
//! assert_eq!(convert::int(None).unwrap(), Value::int(0));
//!
//! let b = convert::bytes(Some(&Value::list(vec![
//!     Value::int(1),
//!     Value::int(2),
//!     Value::int(3),
//! ])))
//! .unwrap();
//! assert_eq!(b, Value::bytes([1, 2, 3]));
//! ```

use std::rc::Rc;

use pyrite_log::trace;

use crate::error::{Error, Result};
use crate::runtime::{TypeTag, Value};

/// The `int()` builtin.
///
/// With no argument yields `Int(0)`. Floats truncate toward zero; NaN and
/// infinities are rejected, as are magnitudes that do not fit the machine
/// integer. Strings parse as optionally whitespace-padded decimal literals.
pub fn int(arg: Option<&Value>) -> Result<Value> {
    let Some(value) = arg else {
        return Ok(Value::Int(0));
    };

    match value {
        Value::Int(n) => Ok(Value::Int(*n)),
        Value::Bool(b) => Ok(Value::Int(i64::from(*b))),
        Value::Float(f) => int_from_float(*f),
        Value::Str(s) => {
            let trimmed = s.trim();
            trimmed.parse::<i64>().map(Value::Int).map_err(|_| {
                Error::InvalidLiteral {
                    literal: trimmed.to_string(),
                    target: TypeTag::Int,
                }
            })
        }
        other => Err(Error::TypeMismatch {
            expected: TypeTag::Int,
            got: other.type_of(),
        }),
    }
}

/// Truncates a float toward zero, checking representability.
fn int_from_float(f: f64) -> Result<Value> {
    if !f.is_finite() {
        return Err(Error::NonFiniteFloat { value: f });
    }
    let truncated = f.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is out of range, so the
    // comparison must be exclusive on the high end.
    if truncated >= -(2f64.powi(63)) && truncated < 2f64.powi(63) {
        trace!("int({f}) -> {}", truncated as i64);
        Ok(Value::Int(truncated as i64))
    } else {
        Err(Error::IntOverflow { op: "int" })
    }
}

/// The `float()` builtin.
///
/// With no argument yields `Float(0.0)`. Integers widen exactly.
pub fn float(arg: Option<&Value>) -> Result<Value> {
    let Some(value) = arg else {
        return Ok(Value::Float(0.0));
    };

    match value {
        Value::Float(f) => Ok(Value::Float(*f)),
        Value::Int(n) => Ok(Value::Float(*n as f64)),
        Value::Bool(b) => Ok(Value::Float(if *b { 1.0 } else { 0.0 })),
        Value::Str(s) => {
            let trimmed = s.trim();
            trimmed.parse::<f64>().map(Value::Float).map_err(|_| {
                Error::InvalidLiteral {
                    literal: trimmed.to_string(),
                    target: TypeTag::Float,
                }
            })
        }
        other => Err(Error::TypeMismatch {
            expected: TypeTag::Float,
            got: other.type_of(),
        }),
    }
}

/// The `bytes()` builtin.
///
/// With no argument yields an empty sequence. An integer count `n` yields
/// `n` zero bytes. A tuple or list source must contain only integers in
/// `0..=255`; a non-integer element is a type mismatch and an out-of-range
/// integer is a value error. Text without an encoding is rejected.
pub fn bytes(arg: Option<&Value>) -> Result<Value> {
    let Some(value) = arg else {
        return Ok(Value::bytes(Vec::new()));
    };

    match value {
        Value::Bytes(data) => Ok(Value::Bytes(Rc::clone(data))),
        Value::Int(n) => {
            if *n < 0 {
                return Err(Error::NegativeCount { count: *n });
            }
            Ok(Value::bytes(vec![0u8; *n as usize]))
        }
        Value::Tuple(elements) => bytes_from_elements(elements),
        Value::List(elements) => bytes_from_elements(elements),
        other => Err(Error::TypeMismatch {
            expected: TypeTag::Bytes,
            got: other.type_of(),
        }),
    }
}

/// Validates and copies a value sequence into a byte payload.
fn bytes_from_elements(elements: &[Value]) -> Result<Value> {
    let mut data = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        match element {
            Value::Int(n) => {
                if (0..=255).contains(n) {
                    data.push(*n as u8);
                } else {
                    return Err(Error::ByteOutOfRange {
                        value: *n,
                        index,
                    });
                }
            }
            other => {
                trace!(
                    "bytes(): rejecting {} element at index {index}",
                    other.type_of()
                );
                return Err(Error::TypeMismatch {
                    expected: TypeTag::Int,
                    got: other.type_of(),
                });
            }
        }
    }
    Ok(Value::bytes(data))
}
