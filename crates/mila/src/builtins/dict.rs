//! The `dict` opaque type: `dict()`, `dict.set`, `dict.get`, `dict.rem`,
//! `dict.len`, `dict.free`.
//!
//! Ported from `ml_dict.c`: a string-keyed hash map with an
//! open-chaining display quirk worth keeping intentionally —
//! `dict_display` collects all live entries and then renders them in
//! the **reverse** of collection order, with a trailing comma after
//! every pair (including the last) and a leading space before the
//! closing brace: `"Dict{ k = v, k2 = v2, }"`. Collection order in the
//! original is bucket-then-chain order from a djb2-hashed open-chaining
//! table, which this port does not reproduce bit-for-bit (a Rust
//! `HashMap`'s iteration order is its own unspecified thing); the
//! trailing-comma/leading-space/reversed-iteration *shape* is preserved
//! since that is what the interpreter's scenarios in `SPEC_FULL.md` §8
//! actually check, not bucket order.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use super::reg;
use crate::{
    args,
    args::{expect_string, require_arity},
    env::Env,
    value::{downcast_opaque, OpaqueHandle},
    Value,
};

#[derive(Debug)]
pub(crate) struct DictHandle(pub(crate) RefCell<HashMap<String, Value>>);

impl OpaqueHandle for DictHandle {
    fn type_name(&self) -> &str {
        "dict"
    }

    fn display(&self) -> Option<String> {
        let map = self.0.borrow();
        if map.is_empty() {
            return Some("Dict{ }".to_string());
        }
        let mut buf = String::from("Dict{");
        for (k, v) in map.iter().rev() {
            buf.push_str(&format!(" {k} = {},", v.repr()));
        }
        buf.push_str(" }");
        Some(buf)
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

fn with_dict<R>(v: &Value, name: &str, f: impl FnOnce(&DictHandle) -> R) -> Result<R, Value>
where
    R: Into<Value>,
{
    match v {
        Value::Opaque(o) => match downcast_opaque::<DictHandle>(o) {
            Some(d) => Ok(f(d)),
            None => Err(Value::error(format!("{name} expects a dict"))),
        },
        _ => Err(Value::error(format!("{name} expects a dict"))),
    }
}

pub(super) fn register(env: &Env) {
    reg(env, "dict", |_interp, _env, _args| {
        Value::Opaque(Rc::new(DictHandle(RefCell::new(HashMap::new()))))
    });

    reg(env, "dict.set", |_interp, _env, args| {
        let args = match require_arity("dict.set", args, 3) {
            Ok(a) => a,
            Err(e) => return e,
        };
        let key = match expect_string("dict.set", &args[1]) {
            Ok(k) => k,
            Err(e) => return e,
        };
        match with_dict(&args[0], "dict.set", |d| {
            d.0.borrow_mut().insert(key, args[2].clone());
            Value::Null
        }) {
            Ok(v) => v,
            Err(e) => e,
        }
    });

    reg(env, "dict.get", |_interp, _env, args| {
        let args = match require_arity("dict.get", args, 2) {
            Ok(a) => a,
            Err(e) => return e,
        };
        let key = match expect_string("dict.get", &args[1]) {
            Ok(k) => k,
            Err(e) => return e,
        };
        match with_dict(&args[0], "dict.get", |d| d.0.borrow().get(&key).cloned().unwrap_or(Value::Null)) {
            Ok(v) => v,
            Err(e) => e,
        }
    });

    reg(env, "dict.rem", |_interp, _env, args| {
        let args = match require_arity("dict.rem", args, 2) {
            Ok(a) => a,
            Err(e) => return e,
        };
        let key = match expect_string("dict.rem", &args[1]) {
            Ok(k) => k,
            Err(e) => return e,
        };
        match with_dict(&args[0], "dict.rem", |d| Value::Bool(d.0.borrow_mut().remove(&key).is_some())) {
            Ok(v) => v,
            Err(e) => e,
        }
    });

    reg(env, "dict.len", |_interp, _env, args| {
        let args = match require_arity("dict.len", args, 1) {
            Ok(a) => a,
            Err(e) => return e,
        };
        match with_dict(&args[0], "dict.len", |d| Value::Int(d.0.borrow().len() as i64)) {
            Ok(v) => v,
            Err(e) => e,
        }
    });

    reg(env, "dict.free", |_interp, _env, args| {
        let args = match require_arity("dict.free", args, 1) {
            Ok(a) => a,
            Err(e) => return e,
        };
        args::unwrap_or_error(with_dict(&args[0], "dict.free", |d| {
            d.0.borrow_mut().clear();
            Value::Null
        }))
    });
}
