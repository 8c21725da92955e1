//! Error types for the Pyrite runtime.
//!
//! This module defines the errors raised by the built-in conversion
//! constructors, arithmetic operators, and sequence accessors. Each variant
//! carries the structured data needed to render the interpreter-facing
//! message.

use std::fmt;

use crate::runtime::TypeTag;

/// Errors that can occur in the Pyrite runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A value of the wrong runtime type was supplied.
    TypeMismatch {
        /// The type that was required.
        expected: TypeTag,
        /// The type that was actually supplied.
        got: TypeTag,
    },

    /// A byte-sequence element is outside `0..=255`.
    ByteOutOfRange {
        /// The offending integer.
        value: i64,
        /// Position of the element in the source sequence.
        index: usize,
    },

    /// A negative count was given where a length was required.
    NegativeCount {
        /// The offending count.
        count: i64,
    },

    /// A sequence index is out of range.
    IndexOutOfRange {
        /// The requested index (possibly negative).
        index: i64,
        /// Length of the sequence.
        len: usize,
    },

    /// Indexed access was attempted on a non-sequence value.
    NotIndexable {
        /// The runtime type of the value.
        kind: TypeTag,
    },

    /// Length was requested for a value without one.
    NotSized {
        /// The runtime type of the value.
        kind: TypeTag,
    },

    /// Division or modulo by zero.
    DivisionByZero,

    /// Integer arithmetic overflowed the machine representation.
    IntOverflow {
        /// The operation that overflowed.
        op: &'static str,
    },

    /// A NaN or infinite float cannot be converted to an integer.
    NonFiniteFloat {
        /// The offending float.
        value: f64,
    },

    /// A string literal could not be parsed as the target type.
    InvalidLiteral {
        /// The literal as supplied.
        literal: String,
        /// The conversion target.
        target: TypeTag,
    },

    /// The operator is not defined for this operand combination.
    UnsupportedOperand {
        /// Operator symbol.
        op: &'static str,
        /// Left operand type.
        lhs: TypeTag,
        /// Right operand type.
        rhs: TypeTag,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TypeMismatch { expected, got } => {
                write!(f, "expected {expected}, got {got}")
            }
            Error::ByteOutOfRange { value, index } => {
                write!(
                    f,
                    "byte value {value} at index {index} is out of range (0..=255)"
                )
            }
            Error::NegativeCount { count } => {
                write!(f, "negative count: {count}")
            }
            Error::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Error::NotIndexable { kind } => {
                write!(f, "'{kind}' value is not indexable")
            }
            Error::NotSized { kind } => {
                write!(f, "'{kind}' value has no length")
            }
            Error::DivisionByZero => write!(f, "division by zero"),
            Error::IntOverflow { op } => {
                write!(f, "integer overflow in '{op}'")
            }
            Error::NonFiniteFloat { value } => {
                write!(f, "cannot convert {value} to an integer")
            }
            Error::InvalidLiteral { literal, target } => {
                write!(f, "invalid literal for {target}: '{literal}'")
            }
            Error::UnsupportedOperand { op, lhs, rhs } => {
                write!(f, "unsupported operand types for '{op}': {lhs} and {rhs}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result type for Pyrite runtime operations.
pub type Result<T> = std::result::Result<T, Error>;
