//! Length and indexed access for sequence values.
//!
//! Tuples, lists, strings, and byte sequences support `len` and read-only
//! indexed access. Indices may be negative, counting from the end, as in the
//! interpreter.

use crate::error::{Error, Result};
use crate::runtime::Value;

/// Returns the length of a sequence value.
///
/// Strings report their character count, not their byte count.
pub fn len(value: &Value) -> Result<usize> {
    match value {
        Value::Str(s) => Ok(s.chars().count()),
        Value::Tuple(elements) => Ok(elements.len()),
        Value::List(elements) => Ok(elements.len()),
        Value::Bytes(data) => Ok(data.len()),
        other => Err(Error::NotSized {
            kind: other.type_of(),
        }),
    }
}

/// Reads the element at `index`.
///
/// Tuples and lists yield a clone of the element, byte sequences yield the
/// byte as an integer, and strings yield a one-character string. A negative
/// index counts from the end.
pub fn index(value: &Value, index: i64) -> Result<Value> {
    match value {
        Value::Tuple(elements) => {
            let pos = resolve_index(index, elements.len())?;
            Ok(elements[pos].clone())
        }
        Value::List(elements) => {
            let pos = resolve_index(index, elements.len())?;
            Ok(elements[pos].clone())
        }
        Value::Bytes(data) => {
            let pos = resolve_index(index, data.len())?;
            Ok(Value::Int(i64::from(data[pos])))
        }
        Value::Str(s) => {
            let count = s.chars().count();
            let pos = resolve_index(index, count)?;
            let ch = s.chars().nth(pos).ok_or(Error::IndexOutOfRange {
                index,
                len: count,
            })?;
            Ok(Value::str(ch.to_string()))
        }
        other => Err(Error::NotIndexable {
            kind: other.type_of(),
        }),
    }
}

/// Maps a possibly negative index onto `0..len`.
fn resolve_index(index: i64, len: usize) -> Result<usize> {
    // checked_add keeps i64::MIN from wrapping before the range test.
    let adjusted = if index < 0 {
        index.checked_add(len as i64)
    } else {
        Some(index)
    };
    match adjusted {
        Some(pos) if pos >= 0 && (pos as usize) < len => Ok(pos as usize),
        _ => Err(Error::IndexOutOfRange { index, len }),
    }
}

/// Elementwise equality of two value slices.
///
/// Shared by the tuple and list arms of the `Value` equality impl.
#[must_use]
pub fn seq_equal(lhs: &[Value], rhs: &[Value]) -> bool {
    lhs.len() == rhs.len() && lhs.iter().zip(rhs.iter()).all(|(a, b)| a == b)
}
