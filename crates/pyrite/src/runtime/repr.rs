//! Textual rendering of values.
//!
//! [`Value::repr`] produces the interpreter's `repr()` form; the `Display`
//! impl produces the `str()` form used by `print`. The two differ only for
//! strings, which display their raw content but repr as a quoted, escaped
//! literal. Container elements always render in repr form, matching the
//! interpreter.

use std::fmt;
use std::fmt::Write as _;

use crate::runtime::Value;

impl Value {
    /// Renders this value in `repr()` form.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pyrite::runtime::Value;
    ///
    /// assert_eq!(Value::none().repr(), "None");
    /// assert_eq!(Value::float(1.0).repr(), "1.0");
    /// assert_eq!(Value::str("abc").repr(), "'abc'");
    /// assert_eq!(Value::bytes([1, 2, 3]).repr(), r"b'\x01\x02\x03'");
    /// ```
    #[must_use]
    pub fn repr(&self) -> String {
        match self {
            Value::None => "None".to_string(),
            Value::Bool(true) => "True".to_string(),
            Value::Bool(false) => "False".to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(f) => repr_float(*f),
            Value::Str(s) => repr_str(s),
            Value::Tuple(elements) => {
                if elements.len() == 1 {
                    format!("({},)", elements[0].repr())
                } else {
                    format!("({})", join_reprs(elements))
                }
            }
            Value::List(elements) => format!("[{}]", join_reprs(elements)),
            Value::Bytes(data) => repr_bytes(data),
        }
    }
}

impl fmt::Display for Value {
    /// The `str()` form: identical to [`Value::repr`] except that a string
    /// renders its raw content.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            other => f.write_str(&other.repr()),
        }
    }
}

/// Floats always render with a decimal point or exponent, so `float(1)`
/// prints as `1.0` and stays visually distinct from the integer `1`.
///
/// Integral floats at or above 1e16 switch to exponent notation (`1e+16`),
/// matching the interpreter's repr; smaller integral floats get a trailing
/// `.0`.
fn repr_float(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if f == f.trunc() {
        if f.abs() < 1e16 {
            return format!("{f:.1}");
        }
        // Rust's `{e}` writes `1e16`; the interpreter writes `1e+16`.
        let mut out = format!("{f:e}");
        if let Some(pos) = out.find('e') {
            if out.as_bytes().get(pos + 1) != Some(&b'-') {
                out.insert(pos + 1, '+');
            }
        }
        return out;
    }
    format!("{f}")
}

fn repr_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Printable ASCII renders literally, everything else as a `\xNN` escape.
fn repr_bytes(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 4 + 3);
    out.push_str("b'");
    for &byte in data {
        match byte {
            b'\'' => out.push_str("\\'"),
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            0x20..=0x7e => out.push(byte as char),
            _ => {
                let _ = write!(out, "\\x{byte:02x}");
            }
        }
    }
    out.push('\'');
    out
}

fn join_reprs(elements: &[Value]) -> String {
    elements
        .iter()
        .map(Value::repr)
        .collect::<Vec<_>>()
        .join(", ")
}
