//! Dynamic value representation.
//!
//! A [`Value`] is the runtime's unit of data: one enum covering every
//! built-in kind the interpreter core knows about. Sequence and string
//! payloads sit behind `Rc`, so cloning a value hands out another reference
//! to the same payload rather than copying it, the way the original runtime
//! passes object handles around.
//!
//! Type identity is answered by [`TypeTag`]: `value.type_of()` returns a
//! `Copy + Eq` tag, so the interpreter-level check `type(x) is int` becomes
//! `x.type_of() == TypeTag::Int`.
//!
//! # Example
//!
//! ```rust
//! use pyrite::runtime::{TypeTag, Value};
//!
//! let pair = Value::tuple(vec![Value::int(1), Value::int(2)]);
//! assert_eq!(pair.type_of(), TypeTag::Tuple);
//! assert_eq!(pair.repr(), "(1, 2)");
//! ```

use std::rc::Rc;

/// The runtime type of a [`Value`].
///
/// Tags display as the interpreter's type names (`int`, `float`, `str`,
/// `tuple`, `list`, `bytes`, `bool`, `NoneType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// The type of `Value::None`.
    NoneType,
    /// Boolean.
    Bool,
    /// Machine integer.
    Int,
    /// Double-precision float.
    Float,
    /// Immutable text.
    Str,
    /// Fixed-length sequence.
    Tuple,
    /// Variable-length sequence.
    List,
    /// Immutable byte sequence.
    Bytes,
}

impl TypeTag {
    /// The interpreter-facing name of this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TypeTag::NoneType => "NoneType",
            TypeTag::Bool => "bool",
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::Str => "str",
            TypeTag::Tuple => "tuple",
            TypeTag::List => "list",
            TypeTag::Bytes => "bytes",
        }
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dynamically typed runtime value.
///
/// Cloning is always cheap: scalar variants are `Copy`-sized and sequence
/// variants bump a reference count.
#[derive(Debug, Clone)]
pub enum Value {
    /// The singleton none value.
    None,
    /// Boolean.
    Bool(bool),
    /// Machine integer.
    Int(i64),
    /// Double-precision float.
    Float(f64),
    /// Immutable text.
    Str(Rc<str>),
    /// Fixed-length sequence of values.
    Tuple(Rc<[Value]>),
    /// Variable-length sequence of values.
    List(Rc<Vec<Value>>),
    /// Immutable byte sequence; every element is in `0..=255` by
    /// construction.
    Bytes(Rc<[u8]>),
}

impl Value {
    /// Creates the none value.
    #[must_use]
    pub const fn none() -> Self {
        Value::None
    }

    /// Creates a boolean value.
    #[must_use]
    pub const fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    /// Creates an integer value.
    #[must_use]
    pub const fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Creates a float value.
    #[must_use]
    pub const fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Creates a string value from any string-like input.
    #[must_use]
    pub fn str(s: impl AsRef<str>) -> Self {
        Value::Str(Rc::from(s.as_ref()))
    }

    /// Creates a tuple value from its elements.
    #[must_use]
    pub fn tuple(elements: Vec<Value>) -> Self {
        Value::Tuple(Rc::from(elements))
    }

    /// Creates a list value from its elements.
    #[must_use]
    pub fn list(elements: Vec<Value>) -> Self {
        Value::List(Rc::new(elements))
    }

    /// Creates a byte-sequence value from raw bytes.
    ///
    /// This is the trusted constructor for payloads already known to be
    /// bytes; the validating path from arbitrary values is
    /// [`convert::bytes`](crate::runtime::convert::bytes).
    #[must_use]
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(Rc::from(data.into()))
    }

    /// Returns the runtime type of this value.
    #[must_use]
    pub const fn type_of(&self) -> TypeTag {
        match self {
            Value::None => TypeTag::NoneType,
            Value::Bool(_) => TypeTag::Bool,
            Value::Int(_) => TypeTag::Int,
            Value::Float(_) => TypeTag::Float,
            Value::Str(_) => TypeTag::Str,
            Value::Tuple(_) => TypeTag::Tuple,
            Value::List(_) => TypeTag::List,
            Value::Bytes(_) => TypeTag::Bytes,
        }
    }

    /// Whether this value is the none value.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Whether this value is an integer.
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Whether this value is a float.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// The integer payload, if this is an integer.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The float payload, if this is a float.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// The boolean payload, if this is a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The string payload, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The byte payload, if this is a byte sequence.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// The elements, if this is a tuple or a list.
    #[must_use]
    pub fn as_elements(&self) -> Option<&[Value]> {
        match self {
            Value::Tuple(elements) => Some(elements),
            Value::List(elements) => Some(elements),
            _ => None,
        }
    }

    /// Numeric view of this value, coercing booleans to integers.
    ///
    /// Used by the arithmetic and equality paths; non-numeric values return
    /// `None`.
    #[must_use]
    pub(crate) const fn as_number(&self) -> Option<Number> {
        match self {
            Value::Bool(b) => Some(Number::Int(*b as i64)),
            Value::Int(n) => Some(Number::Int(*n)),
            Value::Float(f) => Some(Number::Float(*f)),
            _ => None,
        }
    }
}

/// Numeric payload shared by the arithmetic and equality paths.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Number {
    Int(i64),
    Float(f64),
}

impl PartialEq for Value {
    /// Interpreter equality semantics.
    ///
    /// Numeric values (`bool`, `int`, `float`) compare by numeric value, so
    /// `1 == 1.0` holds. Byte sequences compare elementwise. Tuples and
    /// lists compare recursively but never equal each other. Everything else
    /// requires matching kinds.
    fn eq(&self, other: &Value) -> bool {
        use crate::runtime::sequence::seq_equal;

        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => seq_equal(a, b),
            (Value::List(a), Value::List(b)) => seq_equal(a, b),
            (a, b) => match (a.as_number(), b.as_number()) {
                (Some(Number::Int(x)), Some(Number::Int(y))) => x == y,
                (Some(Number::Int(x)), Some(Number::Float(y)))
                | (Some(Number::Float(y)), Some(Number::Int(x))) => int_eq_float(x, y),
                (Some(Number::Float(x)), Some(Number::Float(y))) => x == y,
                _ => false,
            },
        }
    }
}

/// Exact integer/float comparison.
///
/// Widening the integer to `f64` would be lossy above 2^53, so the float is
/// tested for integrality and machine-integer range instead and compared in
/// the integer domain.
fn int_eq_float(x: i64, y: f64) -> bool {
    if !y.is_finite() || y.trunc() != y {
        return false;
    }
    // i64::MAX as f64 rounds up to 2^63, so the high end is exclusive.
    if y >= -(2f64.powi(63)) && y < 2f64.powi(63) {
        y as i64 == x
    } else {
        false
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_of() {
        assert_eq!(Value::none().type_of(), TypeTag::NoneType);
        assert_eq!(Value::int(1).type_of(), TypeTag::Int);
        assert_eq!(Value::float(1.1).type_of(), TypeTag::Float);
        assert_eq!(Value::str("abc").type_of(), TypeTag::Str);
        assert_eq!(Value::tuple(vec![]).type_of(), TypeTag::Tuple);
        assert_eq!(Value::list(vec![]).type_of(), TypeTag::List);
        assert_eq!(Value::bytes([1, 2, 3]).type_of(), TypeTag::Bytes);
    }

    #[test]
    fn test_type_tag_names() {
        assert_eq!(TypeTag::Int.as_str(), "int");
        assert_eq!(TypeTag::NoneType.as_str(), "NoneType");
        assert_eq!(format!("{}", TypeTag::Bytes), "bytes");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::int(7).as_int(), Some(7));
        assert_eq!(Value::float(2.5).as_float(), Some(2.5));
        assert_eq!(Value::int(7).as_float(), None);
        assert_eq!(Value::str("abc").as_str(), Some("abc"));
        assert_eq!(Value::bytes([1, 2]).as_bytes(), Some(&[1u8, 2][..]));
    }

    #[test]
    fn test_numeric_equality_crosses_kinds() {
        assert_eq!(Value::int(1), Value::float(1.0));
        assert_eq!(Value::bool(true), Value::int(1));
        assert_ne!(Value::int(1), Value::float(1.5));
    }

    #[test]
    fn test_numeric_equality_is_exact_above_2_pow_53() {
        let pow53 = 1i64 << 53;
        assert_eq!(Value::int(pow53), Value::float(pow53 as f64));
        // 2^53 + 1 has no exact f64 representation; a lossy widening would
        // report equality here.
        assert_ne!(Value::int(pow53 + 1), Value::float(pow53 as f64));

        // 9.223372036854776e18 is exactly 2^63, one past i64::MAX.
        assert_ne!(Value::int(i64::MAX), Value::float(9.223372036854776e18));
        assert_eq!(Value::int(i64::MIN), Value::float(-9.223372036854776e18));

        assert_ne!(Value::int(0), Value::float(f64::INFINITY));
        assert_ne!(Value::int(0), Value::float(f64::NAN));
    }

    #[test]
    fn test_sequence_equality() {
        let a = Value::tuple(vec![Value::int(1), Value::int(2)]);
        let b = Value::tuple(vec![Value::int(1), Value::int(2)]);
        assert_eq!(a, b);

        // A tuple never equals a list with the same elements.
        let l = Value::list(vec![Value::int(1), Value::int(2)]);
        assert_ne!(a, l);
    }

    #[test]
    fn test_bytes_equality_is_elementwise() {
        assert_eq!(Value::bytes([1, 2, 3]), Value::bytes([1, 2, 3]));
        assert_ne!(Value::bytes([1, 2, 3]), Value::bytes([1, 2, 4]));
        assert_ne!(Value::bytes([1, 2]), Value::bytes([1, 2, 3]));
    }

    #[test]
    fn test_clone_shares_payload() {
        let a = Value::bytes(vec![0u8; 64]);
        let b = a.clone();
        match (&a, &b) {
            (Value::Bytes(x), Value::Bytes(y)) => {
                assert!(std::ptr::eq(x.as_ptr(), y.as_ptr()));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_none_equals_only_none() {
        assert_eq!(Value::none(), Value::none());
        assert_ne!(Value::none(), Value::int(0));
        assert_ne!(Value::none(), Value::bool(false));
    }
}
