//! `ascii.to` and `ascii.from`: single-byte/single-character conversion.
//!
//! Ported from `native_to_ascii`/`native_from_ascii` in
//! `original_source/ml_builtins.c`: both silently return `Value::Null`
//! on a type mismatch (the original's `match_types` convention) rather
//! than an `Error`, preserved per `SPEC_FULL.md` §7's "type-silent
//! results" taxonomy.

use super::reg;
use crate::{env::Env, Value};

pub(super) fn register(env: &Env) {
    reg(env, "ascii.to", |_interp, _env, args| {
        if args.len() != 1 {
            return Value::Null;
        }
        match &args[0] {
            Value::Int(i) => match u8::try_from(*i) {
                Ok(b) => Value::string((b as char).to_string()),
                Err(_) => Value::Null,
            },
            _ => Value::Null,
        }
    });

    reg(env, "ascii.from", |_interp, _env, args| {
        if args.len() != 1 {
            return Value::Null;
        }
        match &args[0] {
            Value::String(s) => {
                let s = s.borrow();
                if s.chars().count() == 1 {
                    Value::Int(i64::from(s.chars().next().unwrap() as u32))
                } else {
                    Value::Null
                }
            }
            _ => Value::Null,
        }
    });
}
