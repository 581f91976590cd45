//! `cast.int`, `cast.float`, `cast.string`, `cast.bool`.
//!
//! The original's `cast.int`/`cast.float` have a dead `return` inside
//! their failure branch followed by an unreachable fallthrough
//! `return` on the next line (the `if` already exited) — meaningless
//! in a ported form, so this is a single early return with no
//! behavioral change (`SPEC_FULL.md` §6).

use super::reg;
use crate::{args::require_arity, env::Env, Value};

pub(super) fn register(env: &Env) {
    reg(env, "cast.int", |_interp, _env, args| match require_arity("cast.int", args, 1) {
        Ok(args) => match &args[0] {
            Value::Int(i) => Value::Int(*i),
            Value::Float(f) => Value::Int(*f as i64),
            Value::Bool(b) => Value::Int(i64::from(*b)),
            Value::String(s) => match s.borrow().trim().parse::<i64>() {
                Ok(i) => Value::Int(i),
                Err(_) => Value::error(format!("cannot cast '{}' to int", s.borrow())),
            },
            other => Value::error(format!("cannot cast {} to int", other.type_name())),
        },
        Err(e) => e,
    });

    reg(env, "cast.float", |_interp, _env, args| match require_arity("cast.float", args, 1) {
        Ok(args) => match &args[0] {
            Value::Int(i) => Value::Float(*i as f64),
            Value::Float(f) => Value::Float(*f),
            Value::Bool(b) => Value::Float(if *b { 1.0 } else { 0.0 }),
            Value::String(s) => match s.borrow().trim().parse::<f64>() {
                Ok(f) => Value::Float(f),
                Err(_) => Value::error(format!("cannot cast '{}' to float", s.borrow())),
            },
            other => Value::error(format!("cannot cast {} to float", other.type_name())),
        },
        Err(e) => e,
    });

    reg(env, "cast.string", |_interp, _env, args| match require_arity("cast.string", args, 1) {
        Ok(args) => Value::string(args[0].display()),
        Err(e) => e,
    });

    reg(env, "cast.bool", |_interp, _env, args| match require_arity("cast.bool", args, 1) {
        Ok(args) => Value::Bool(args[0].is_truthy()),
        Err(e) => e,
    });
}
