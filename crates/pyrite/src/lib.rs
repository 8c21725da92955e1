//! Pyrite: a dynamic value runtime for a Python-like interpreter.
//!
//! This crate implements the value layer an interpreter front end would sit
//! on top of: a reference-counted [`Value`](runtime::Value) representation
//! covering the built-in kinds (`None`, `bool`, `int`, `float`, `str`,
//! `tuple`, `list`, `bytes`), the conversion builtins with their truncation
//! and validation rules, arithmetic with interpreter promotion semantics,
//! sequence access, and `repr`/`str` rendering.
//!
//! # Example
//!
//! ```rust
//! use pyrite::runtime::{Context, TypeTag, Value, convert, ops, sequence};
//!
//! let mut ctx = Context::new();
//!
//! // type(1 - 2) is int
//! let n = ops::sub(&ctx.new_int(1), &ctx.new_int(2)).unwrap();
//! assert_eq!(n.type_of(), TypeTag::Int);
//!
//! // (1, 2)[0] == 1
//! let pair = ctx.new_tuple(vec![ctx.new_int(1), ctx.new_int(2)]);
//! assert_eq!(sequence::index(&pair, 0).unwrap(), Value::int(1));
//!
//! // bytes([1, 2, 3]) == bytes([1, 2, 3])
//! let source = ctx.new_list(vec![ctx.new_int(1), ctx.new_int(2), ctx.new_int(3)]);
//! let a = convert::bytes(Some(&source)).unwrap();
//! let b = convert::bytes(Some(&source)).unwrap();
//! assert_eq!(a, b);
//! ```

pub mod error;
pub mod runtime;

pub use error::{Error, Result};
