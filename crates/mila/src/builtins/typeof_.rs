//! `typeof` and `_typeof`.
//!
//! `typeof` returns the value's *coarse* type name: `native_type_of` in
//! the original collapses both `T_FUNCTION` and `T_NATIVE` down to
//! `"function"` and, for an opaque payload, reports its finer sub-tag
//! (`"array"`/`"dict"`) ahead of the bare `"opaque"`. `_typeof` is the
//! one that keeps script function and native distinct — it reports the
//! raw type tag instead (`SPEC_FULL.md` §6).

use super::reg;
use crate::{args::require_arity, env::Env, Value};

/// The opaque sub-tag if present, else `"opaque"`.
fn opaque_type_name(o: &std::rc::Rc<dyn crate::OpaqueHandle>) -> &str {
    let tag = o.type_name();
    if tag.is_empty() {
        "opaque"
    } else {
        tag
    }
}

pub(super) fn register(env: &Env) {
    reg(env, "typeof", |_interp, _env, args| match require_arity("typeof", args, 1) {
        Ok(args) => Value::string(match &args[0] {
            Value::Function(_) | Value::Native { .. } => "function",
            Value::Opaque(o) => opaque_type_name(o),
            other => other.type_name(),
        }),
        Err(e) => e,
    });

    reg(env, "_typeof", |_interp, _env, args| match require_arity("_typeof", args, 1) {
        Ok(args) => Value::string(match &args[0] {
            Value::Opaque(o) => opaque_type_name(o),
            other => other.type_name(),
        }),
        Err(e) => e,
    });
}
