//! Argument-count and -type checking helpers for native functions.
//!
//! Grounded on the teacher crate's `ArgValues` arity-checking methods
//! (`args.rs`): each native validates its own argument list and returns
//! a `Value::Error` with a message shaped like the original's
//! `match_types`/arity checks on mismatch, rather than panicking.

use crate::Value;

/// Checks that `args` has exactly `n` elements, returning a
/// `Value::Error` (shaped like the original's arity-check messages)
/// otherwise.
pub(crate) fn require_arity<'a>(name: &str, args: &'a [Value], n: usize) -> Result<&'a [Value], Value> {
    if args.len() == n {
        Ok(args)
    } else {
        Err(Value::error(format!(
            "{name} requires {n} argument{}, got {}",
            if n == 1 { "" } else { "s" },
            args.len()
        )))
    }
}

/// Checks that `args` has between `min` and `max` elements, inclusive.
pub(crate) fn require_arity_range<'a>(
    name: &str,
    args: &'a [Value],
    min: usize,
    max: usize,
) -> Result<&'a [Value], Value> {
    if args.len() >= min && args.len() <= max {
        Ok(args)
    } else {
        Err(Value::error(format!(
            "{name} requires {min}-{max} arguments, got {}",
            args.len()
        )))
    }
}

pub(crate) fn expect_int(name: &str, v: &Value) -> Result<i64, Value> {
    match v {
        Value::Int(i) => Ok(*i),
        other => Err(Value::error(format!(
            "{name} expects an int, got {}",
            other.type_name()
        ))),
    }
}

/// Coerces an `Int` or `Float` to `f64`. The math builtins read their
/// argument as a float either way — the original C reads the union's
/// `.f` field unconditionally, which is undefined behavior when the
/// stored value is actually an `Int`. A safe port cannot replicate that
/// directly, so `Int` arguments are coerced rather than misread; see
/// `DESIGN.md` for this Open Question's resolution.
pub(crate) fn expect_number(name: &str, v: &Value) -> Result<f64, Value> {
    match v {
        Value::Int(i) => Ok(*i as f64),
        Value::Float(f) => Ok(*f),
        other => Err(Value::error(format!(
            "{name} expects a number, got {}",
            other.type_name()
        ))),
    }
}

pub(crate) fn expect_string(name: &str, v: &Value) -> Result<String, Value> {
    match v {
        Value::String(s) => Ok(s.borrow().clone()),
        other => Err(Value::error(format!(
            "{name} expects a string, got {}",
            other.type_name()
        ))),
    }
}

/// Collapses a `Result<Value, Value>` where both arms are already the
/// right representation — native functions return `Value` either way
/// (an error is just a `Value::Error`), so this is purely for ergonomic
/// `?`-based early returns inside a native's body.
pub(crate) fn unwrap_or_error(r: Result<Value, Value>) -> Value {
    match r {
        Ok(v) | Err(v) => v,
    }
}
