//! Pyrite runtime module.
//!
//! The runtime is the value layer of a Python-like interpreter: the dynamic
//! value representation and the built-in semantics a conformance script
//! exercises against it.
//!
//! # Architecture
//!
//! - [`value`]: the [`Value`] enum and [`TypeTag`] type identity
//! - [`convert`]: the `int()` / `float()` / `bytes()` builtins
//! - [`ops`]: arithmetic with int/float promotion and true division
//! - [`sequence`]: `len` and indexed access for sequence kinds
//! - [`repr`]: `repr()` and `str()` rendering
//! - [`context`]: value factory with string interning
//!
//! # Example
//!
//! ```rust
//! use pyrite::runtime::{TypeTag, Value, convert, ops};
//!
//! let quotient = ops::div(&Value::int(2), &Value::int(3)).unwrap();
//! assert_eq!(quotient.type_of(), TypeTag::Float);
//!
//! let truncated = convert::int(Some(&Value::float(1.2))).unwrap();
//! assert_eq!(truncated, Value::int(1));
//! ```

pub mod context;
pub mod convert;
pub mod ops;
pub mod repr;
pub mod sequence;
pub mod value;

pub use context::Context;
pub use value::{TypeTag, Value};
