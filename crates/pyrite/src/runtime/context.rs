//! Runtime context with string interning.
//!
//! A [`Context`] is the factory an embedder or evaluator uses to mint
//! values. Its one piece of state is a string interner: constructing the
//! same text twice through [`Context::new_str`] yields two handles to one
//! shared allocation, so identical literals across a script cost one
//! allocation and compare without walking their bytes in the common case.
//!
//! # Example
//!
//! ```rust
//! use pyrite::runtime::Context;
//!
//! let mut ctx = Context::new();
//! let a = ctx.new_str("abc");
//! let b = ctx.new_str("abc");
//! assert_eq!(a, b);
//! assert_eq!(ctx.interned_count(), 1);
//! ```

use std::rc::Rc;

use fxhash::FxHashMap;
use pyrite_log::{debug, trace};

use crate::runtime::Value;

/// Value factory with an interned string table.
#[derive(Debug, Default)]
pub struct Context {
    strings: FxHashMap<Rc<str>, ()>,
}

impl Context {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        debug!("runtime context created");
        Context {
            strings: FxHashMap::default(),
        }
    }

    /// The none value.
    #[must_use]
    pub const fn none(&self) -> Value {
        Value::None
    }

    /// Creates a boolean value.
    #[must_use]
    pub const fn new_bool(&self, b: bool) -> Value {
        Value::Bool(b)
    }

    /// Creates an integer value.
    #[must_use]
    pub const fn new_int(&self, n: i64) -> Value {
        Value::Int(n)
    }

    /// Creates a float value.
    #[must_use]
    pub const fn new_float(&self, f: f64) -> Value {
        Value::Float(f)
    }

    /// Creates a string value, sharing the allocation with any previously
    /// interned equal string.
    pub fn new_str(&mut self, s: &str) -> Value {
        Value::Str(self.intern(s))
    }

    /// Creates a tuple value.
    #[must_use]
    pub fn new_tuple(&self, elements: Vec<Value>) -> Value {
        Value::tuple(elements)
    }

    /// Creates a list value.
    #[must_use]
    pub fn new_list(&self, elements: Vec<Value>) -> Value {
        Value::list(elements)
    }

    /// Creates a byte-sequence value from raw bytes.
    #[must_use]
    pub fn new_bytes(&self, data: impl Into<Vec<u8>>) -> Value {
        Value::bytes(data)
    }

    /// Interns `s`, returning the shared allocation.
    pub fn intern(&mut self, s: &str) -> Rc<str> {
        if let Some((interned, ())) = self.strings.get_key_value(s) {
            trace!("interner hit: {s:?}");
            return Rc::clone(interned);
        }
        trace!("interner miss: {s:?}");
        let interned: Rc<str> = Rc::from(s);
        self.strings.insert(Rc::clone(&interned), ());
        interned
    }

    /// Number of distinct strings interned so far.
    #[must_use]
    pub fn interned_count(&self) -> usize {
        self.strings.len()
    }
}
