//! String natives: `str.length`, `str.slice`, `str.index`, `str.patch`,
//! `str.upper`, `str.lower`, `str.pop_f`, `str.pop_b`.
//!
//! `str.pop_f`/`str.pop_b` mutate their first argument **in place**
//! (removing and returning the first/last character) — the one place
//! besides array/dict mutation where MiLa's `Rc<RefCell<String>>`
//! representation earns its keep, matching the original's
//! `native_pop_start`/`native_pop_end` replacing `argv[0]->v.s` in
//! place (`SPEC_FULL.md` §5).

use super::reg;
use crate::{
    args::{expect_int, expect_string, require_arity},
    env::Env,
    Value,
};

pub(super) fn register(env: &Env) {
    reg(env, "str.length", |_interp, _env, args| match require_arity("str.length", args, 1) {
        Ok(args) => match expect_string("str.length", &args[0]) {
            Ok(s) => Value::Int(s.chars().count() as i64),
            Err(e) => e,
        },
        Err(e) => e,
    });

    reg(env, "str.slice", |_interp, _env, args| match require_arity("str.slice", args, 3) {
        Ok(args) => {
            let s = match expect_string("str.slice", &args[0]) {
                Ok(s) => s,
                Err(e) => return e,
            };
            let start = match expect_int("str.slice", &args[1]) {
                Ok(i) => i,
                Err(e) => return e,
            };
            let end = match expect_int("str.slice", &args[2]) {
                Ok(i) => i,
                Err(e) => return e,
            };
            let chars: Vec<char> = s.chars().collect();
            let len = chars.len() as i64;
            let start = start.clamp(0, len) as usize;
            let end = end.clamp(0, len) as usize;
            if start >= end {
                Value::string("")
            } else {
                Value::string(chars[start..end].iter().collect::<String>())
            }
        }
        Err(e) => e,
    });

    reg(env, "str.index", |_interp, _env, args| match require_arity("str.index", args, 2) {
        Ok(args) => {
            let haystack = match expect_string("str.index", &args[0]) {
                Ok(s) => s,
                Err(e) => return e,
            };
            let needle = match expect_string("str.index", &args[1]) {
                Ok(s) => s,
                Err(e) => return e,
            };
            match haystack.find(&needle) {
                Some(byte_idx) => Value::Int(haystack[..byte_idx].chars().count() as i64),
                None => Value::Int(-1),
            }
        }
        Err(e) => e,
    });

    reg(env, "str.patch", |_interp, _env, args| match require_arity("str.patch", args, 3) {
        Ok(args) => {
            let s = match expect_string("str.patch", &args[0]) {
                Ok(s) => s,
                Err(e) => return e,
            };
            let from = match expect_string("str.patch", &args[1]) {
                Ok(s) => s,
                Err(e) => return e,
            };
            let to = match expect_string("str.patch", &args[2]) {
                Ok(s) => s,
                Err(e) => return e,
            };
            Value::string(s.replace(&from, &to))
        }
        Err(e) => e,
    });

    reg(env, "str.upper", |_interp, _env, args| match require_arity("str.upper", args, 1) {
        Ok(args) => match expect_string("str.upper", &args[0]) {
            Ok(s) => Value::string(s.to_uppercase()),
            Err(e) => e,
        },
        Err(e) => e,
    });

    reg(env, "str.lower", |_interp, _env, args| match require_arity("str.lower", args, 1) {
        Ok(args) => match expect_string("str.lower", &args[0]) {
            Ok(s) => Value::string(s.to_lowercase()),
            Err(e) => e,
        },
        Err(e) => e,
    });

    reg(env, "str.pop_f", |_interp, _env, args| pop(args, true));
    reg(env, "str.pop_b", |_interp, _env, args| pop(args, false));
}

fn pop(args: &[Value], front: bool) -> Value {
    let args = match require_arity("str.pop_f/str.pop_b", args, 1) {
        Ok(args) => args,
        Err(e) => return e,
    };
    let Value::String(cell) = &args[0] else {
        return Value::error("str.pop_f/str.pop_b expects a string");
    };
    let mut s = cell.borrow_mut();
    if s.is_empty() {
        return Value::Null;
    }
    let popped = if front {
        let ch = s.chars().next().unwrap();
        let first_len = ch.len_utf8();
        s.drain(..first_len);
        ch
    } else {
        s.pop().unwrap()
    };
    Value::string(popped.to_string())
}
