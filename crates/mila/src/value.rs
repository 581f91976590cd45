//! The dynamically-typed value every MiLa expression produces.
//!
//! `Value` carries both the ordinary data types (`Null`, `None`, `Int`,
//! `Float`, `Bool`, `String`, `Function`, `Native`, `Opaque`) and the
//! control-flow sentinels (`Return`, `Break`, `Continue`, `Error`) that
//! let `return`/`break`/`continue`/error-propagation travel through the
//! same evaluator paths as any other value (see `SPEC_FULL.md` §4.5).
//!
//! `Value` is `Clone`; cloning a heap-backed variant is the safe-Rust
//! analogue of the original interpreter's `val_retain`, and dropping one
//! is `val_release`. There is no separate refcount field to maintain by
//! hand.

use std::{cell::RefCell, fmt, rc::Rc};

use crate::EnvHandle;

/// Behavior a host-managed opaque payload (array, dict, file handle)
/// supplies to participate in MiLa's generic display/repr machinery.
///
/// This replaces the original interpreter's raw `void*` payload plus a
/// `Printer` function pointer: the payload and its formatting behavior
/// travel together as a trait object instead of two separately-tracked
/// fields.
pub trait OpaqueHandle: fmt::Debug {
    /// The tag shown in the default `<opaque:PTR TAG>` rendering, e.g.
    /// `"array"` or `"dict"`. Empty means no tag is shown.
    fn type_name(&self) -> &str {
        ""
    }

    /// A custom textual rendering, if this payload wants one (arrays and
    /// dicts do; a bare file handle does not and falls back to the
    /// default `<opaque:PTR TAG>` form).
    fn display(&self) -> Option<String> {
        None
    }

    /// Exposes the concrete payload type for the handful of native
    /// functions (`array.*`, `dict.*`, `file.*`) that need to recover
    /// their specific handle type out of an opaque `Value`. There is no
    /// reflection here beyond this explicit opt-in — it replaces the
    /// original's `void*` cast, which had no type safety at all.
    fn as_any(&self) -> &dyn std::any::Any;
}

/// A native function's signature: the interpreter handle (for print
/// output, search paths, and loaded libraries), the calling environment,
/// and the fully-evaluated argument list.
pub type NativeFn = Rc<dyn Fn(&mut crate::Interpreter, &crate::Env, &[Value]) -> Value>;

/// A script-defined function's body, captured the first time it is
/// evaluated as a `fn(...) { ... }` literal.
#[derive(Debug)]
pub struct FunctionData {
    pub params: Vec<String>,
    /// The literal source text from `{` through the matching `}`,
    /// inclusive. Re-parsed from scratch on every call — see
    /// `SPEC_FULL.md` §9, "re-parsing on each call".
    pub body: Rc<str>,
    /// Debug name, set either at definition (`let f = fn(...) {...}`
    /// tags `f` onto the function the moment it's bound) or left empty
    /// for an anonymous function passed directly as an argument.
    pub name: RefCell<Option<Rc<str>>>,
    pub closure: EnvHandle,
}

#[derive(Clone)]
pub enum Value {
    Null,
    None,
    Int(i64),
    Float(f64),
    Bool(bool),
    String(Rc<RefCell<String>>),
    Function(Rc<FunctionData>),
    Native { func: NativeFn, name: Rc<str> },
    Opaque(Rc<dyn OpaqueHandle>),
    Return(Box<Value>),
    Break,
    Continue,
    Error(Rc<str>),
}

impl Value {
    #[must_use]
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(Rc::new(RefCell::new(s.into())))
    }

    #[must_use]
    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(Rc::from(msg.into()))
    }

    /// Truthiness per `SPEC_FULL.md`/original `is_truthy`: `Null`,
    /// `None`, `false`, integer `0`, float `0.0`, and the empty string
    /// are falsy; everything else (including every `Function`/`Native`/
    /// `Opaque`) is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null | Self::None => false,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::Bool(b) => *b,
            Self::String(s) => !s.borrow().is_empty(),
            Self::Function(_) | Self::Native { .. } | Self::Opaque(_) => true,
            Self::Return(_) | Self::Break | Self::Continue | Self::Error(_) => true,
        }
    }

    #[must_use]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Null | Self::None)
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::None => "none",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::String(_) => "string",
            Self::Function(_) => "function",
            Self::Native { .. } => "native",
            Self::Opaque(_) => "opaque",
            Self::Return(_) => "return",
            Self::Break => "break",
            Self::Continue => "continue",
            Self::Error(_) => "error",
        }
    }

    /// The `%f`-style rendering used by both [`Self::display`] and
    /// [`Self::repr`] — ported to match C's always-six-decimal-digit
    /// `%f` format (`SPEC_FULL.md` §4.2), not Rust's trailing-zero-
    /// trimming default `Display`.
    fn fmt_float(f: f64) -> String {
        format!("{f:.6}")
    }

    /// The bare textual rendering used by `print`/string concatenation —
    /// `as_c_string` in the original.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::None => "none".to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => Self::fmt_float(*f),
            Self::Bool(b) => b.to_string(),
            Self::String(s) => s.borrow().clone(),
            Self::Function(f) => {
                let name = f.name.borrow();
                format!(
                    "<function:{} at {:p}>",
                    name.as_deref().unwrap_or("anonymous"),
                    Rc::as_ptr(f)
                )
            }
            Self::Native { name, func } => {
                format!("<native:{name} at {:p}>", Rc::as_ptr(func))
            }
            Self::Opaque(o) => {
                if let Some(s) = o.display() {
                    s
                } else {
                    let tag = o.type_name();
                    if tag.is_empty() {
                        format!("<opaque:{:p}>", Rc::as_ptr(o))
                    } else {
                        format!("<opaque:{:p} {tag}>", Rc::as_ptr(o))
                    }
                }
            }
            Self::Return(inner) => format!("<return:{}>", inner.display()),
            Self::Break => "<break>".to_string(),
            Self::Continue => "<continue>".to_string(),
            Self::Error(msg) => format!("<error:{msg}>"),
        }
    }

    /// The "repr"-style rendering used inside collections (e.g. a
    /// `Dict`'s display) — `as_c_string_repr` in the original, which
    /// differs from [`Self::display`] only for strings (quoted) and
    /// otherwise delegates.
    #[must_use]
    pub fn repr(&self) -> String {
        match self {
            Self::String(s) => format!("\"{}\"", s.borrow()),
            other => other.display(),
        }
    }
}

/// Recovers a concrete opaque payload type out of an `Opaque` value's
/// trait object, for the handful of native functions that need to see
/// past `OpaqueHandle` to their own handle struct (e.g. `array.push`
/// needs the actual `Vec` behind an `array()` value).
#[must_use]
pub(crate) fn downcast_opaque<T: 'static>(o: &Rc<dyn OpaqueHandle>) -> Option<&T> {
    o.as_any().downcast_ref::<T>()
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value({})", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_display_always_shows_six_decimals() {
        assert_eq!(Value::Float(1.0).display(), "1.000000");
        assert_eq!(Value::Float(3.14).display(), "3.140000");
    }

    #[test]
    fn falsy_values() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::Int(0).is_truthy());
        assert!(!Value::Float(0.0).is_truthy());
        assert!(!Value::string("").is_truthy());
        assert!(!Value::Bool(false).is_truthy());
    }

    #[test]
    fn truthy_values() {
        assert!(Value::Int(-1).is_truthy());
        assert!(Value::string("0").is_truthy());
        assert!(Value::Break.is_truthy());
    }

    #[test]
    fn repr_quotes_strings_but_display_does_not() {
        let s = Value::string("hi");
        assert_eq!(s.display(), "hi");
        assert_eq!(s.repr(), "\"hi\"");
    }

    #[test]
    fn null_and_none_are_distinct_types_but_both_nullish() {
        assert!(Value::Null.is_nullish());
        assert!(Value::None.is_nullish());
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::None.type_name(), "none");
    }
}
