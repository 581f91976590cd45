//! The `array` opaque type: `array()`, `array.push`, `array.pop`,
//! `array.get`, `array.set`, `array.len`, `array.free`.
//!
//! The original's concrete `array_printer`/array-manipulation bodies
//! were not among the files retrieved from `original_source/` (only
//! referenced by name from `mila.c`'s `main`, which builds one directly
//! via `native_new_array` for `argv`). This module is therefore written
//! from the external-interface contract rather than ported line for
//! line, modeled on `ml_dict.c`'s display conventions for the sibling
//! `dict` opaque type — see `DESIGN.md`.

use std::{cell::RefCell, rc::Rc};

use super::reg;
use crate::{
    args,
    args::{expect_int, require_arity},
    env::Env,
    value::{downcast_opaque, OpaqueHandle},
    Value,
};

#[derive(Debug)]
pub(crate) struct ArrayHandle(pub(crate) RefCell<Vec<Value>>);

impl OpaqueHandle for ArrayHandle {
    fn type_name(&self) -> &str {
        "array"
    }

    fn display(&self) -> Option<String> {
        let items = self.0.borrow();
        let rendered: Vec<String> = items.iter().map(Value::repr).collect();
        Some(format!("[{}]", rendered.join(", ")))
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Builds an `array` value directly from `items`, for host code that
/// needs to hand a script a pre-populated array (the CLI's `argv`
/// binding, an embedder's setup code) without going through `push` in
/// a loop.
#[must_use]
pub(crate) fn make(items: Vec<Value>) -> Value {
    Value::Opaque(Rc::new(ArrayHandle(RefCell::new(items))))
}

pub(super) fn register(env: &Env) {
    reg(env, "array", |_interp, _env, _args| make(Vec::new()));

    reg(env, "array.push", |_interp, _env, args| {
        let args = match require_arity("array.push", args, 2) {
            Ok(a) => a,
            Err(e) => return e,
        };
        match with_array(&args[0], "array.push", |a| {
            a.0.borrow_mut().push(args[1].clone());
            Value::Null
        }) {
            Ok(v) => v,
            Err(e) => e,
        }
    });

    reg(env, "array.pop", |_interp, _env, args| {
        let args = match require_arity("array.pop", args, 1) {
            Ok(a) => a,
            Err(e) => return e,
        };
        match with_array(&args[0], "array.pop", |a| a.0.borrow_mut().pop().unwrap_or(Value::Null)) {
            Ok(v) => v,
            Err(e) => e,
        }
    });

    reg(env, "array.get", |_interp, _env, args| {
        let args = match require_arity("array.get", args, 2) {
            Ok(a) => a,
            Err(e) => return e,
        };
        let idx = match expect_int("array.get", &args[1]) {
            Ok(i) => i,
            Err(e) => return e,
        };
        match with_array(&args[0], "array.get", |a| {
            let items = a.0.borrow();
            usize::try_from(idx)
                .ok()
                .and_then(|i| items.get(i).cloned())
                .unwrap_or(Value::Null)
        }) {
            Ok(v) => v,
            Err(e) => e,
        }
    });

    reg(env, "array.set", |_interp, _env, args| {
        let args = match require_arity("array.set", args, 3) {
            Ok(a) => a,
            Err(e) => return e,
        };
        let idx = match expect_int("array.set", &args[1]) {
            Ok(i) => i,
            Err(e) => return e,
        };
        match with_array(&args[0], "array.set", |a| {
            let mut items = a.0.borrow_mut();
            if let Ok(i) = usize::try_from(idx) {
                while items.len() <= i {
                    items.push(Value::Null);
                }
                items[i] = args[2].clone();
            }
            Value::Null
        }) {
            Ok(v) => v,
            Err(e) => e,
        }
    });

    reg(env, "array.len", |_interp, _env, args| {
        let args = match require_arity("array.len", args, 1) {
            Ok(a) => a,
            Err(e) => return e,
        };
        match with_array(&args[0], "array.len", |a| Value::Int(a.0.borrow().len() as i64)) {
            Ok(v) => v,
            Err(e) => e,
        }
    });

    reg(env, "array.free", |_interp, _env, args| {
        let args = match require_arity("array.free", args, 1) {
            Ok(a) => a,
            Err(e) => return e,
        };
        args::unwrap_or_error(with_array(&args[0], "array.free", |a| {
            a.0.borrow_mut().clear();
            Value::Null
        }))
    });
}

/// Runs `f` against the `ArrayHandle` behind `v`, or returns a type
/// error.
fn with_array<R>(v: &Value, name: &str, f: impl FnOnce(&ArrayHandle) -> R) -> Result<R, Value>
where
    R: Into<Value>,
{
    match v {
        Value::Opaque(o) => match downcast_opaque::<ArrayHandle>(o) {
            Some(a) => Ok(f(a)),
            None => Err(Value::error(format!("{name} expects an array"))),
        },
        _ => Err(Value::error(format!("{name} expects an array"))),
    }
}
