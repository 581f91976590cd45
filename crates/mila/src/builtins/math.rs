//! `floor`, `ceil`, `sqrt`, `sin`, `cos`, `tan`, `atan2`, `abs`, `pow`.
//!
//! The original reads each argument's `.f` union field directly,
//! without checking `type == T_FLOAT` first — passing an `Int` reads
//! the wrong union member, undefined behavior in C. A safe port cannot
//! reproduce that: every math native here coerces `Int` arguments to
//! `f64` via [`crate::args::expect_number`] instead, the resolution
//! recorded for this Open Question in `DESIGN.md`.

use super::reg;
use crate::{
    args::{expect_number, require_arity},
    env::Env,
    Value,
};

fn unary(name: &'static str, f: fn(f64) -> f64) -> impl Fn(&mut crate::Interpreter, &Env, &[Value]) -> Value {
    move |_interp, _env, args| match require_arity(name, args, 1) {
        Ok(args) => match expect_number(name, &args[0]) {
            Ok(x) => Value::Float(f(x)),
            Err(e) => e,
        },
        Err(e) => e,
    }
}

pub(super) fn register(env: &Env) {
    reg(env, "floor", unary("floor", f64::floor));
    reg(env, "ceil", unary("ceil", f64::ceil));
    reg(env, "sqrt", unary("sqrt", f64::sqrt));
    reg(env, "sin", unary("sin", f64::sin));
    reg(env, "cos", unary("cos", f64::cos));
    reg(env, "tan", unary("tan", f64::tan));
    reg(env, "abs", unary("abs", f64::abs));

    reg(env, "atan2", |_interp, _env, args| match require_arity("atan2", args, 2) {
        Ok(args) => {
            let a = match expect_number("atan2", &args[0]) {
                Ok(x) => x,
                Err(e) => return e,
            };
            let b = match expect_number("atan2", &args[1]) {
                Ok(x) => x,
                Err(e) => return e,
            };
            Value::Float(a.atan2(b))
        }
        Err(e) => e,
    });

    reg(env, "pow", |_interp, _env, args| match require_arity("pow", args, 2) {
        Ok(args) => {
            let a = match expect_number("pow", &args[0]) {
                Ok(x) => x,
                Err(e) => return e,
            };
            let b = match expect_number("pow", &args[1]) {
                Ok(x) => x,
                Err(e) => return e,
            };
            Value::Float(a.powf(b))
        }
        Err(e) => e,
    });
}
