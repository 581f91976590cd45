//! `and`, `or`, `xor`, and `not`.
//!
//! `and`/`or`/`xor` are **bitwise** integer operators (`&`/`|`/`^`),
//! despite reading as logical connectives — this matches the original
//! interpreter's actual implementation, not its prose naming. `not` is
//! the one genuinely logical operator in this family: it negates
//! truthiness, not bits.

use super::reg;
use crate::{args::require_arity, env::Env, Value};

fn int_pair(name: &str, args: &[Value]) -> Result<(i64, i64), Value> {
    let args = require_arity(name, args, 2)?;
    match (&args[0], &args[1]) {
        (Value::Int(a), Value::Int(b)) => Ok((*a, *b)),
        _ => Err(Value::error(format!("{name} expects two ints"))),
    }
}

pub(super) fn register(env: &Env) {
    reg(env, "and", |_interp, _env, args| match int_pair("and", args) {
        Ok((a, b)) => Value::Int(a & b),
        Err(e) => e,
    });
    reg(env, "or", |_interp, _env, args| match int_pair("or", args) {
        Ok((a, b)) => Value::Int(a | b),
        Err(e) => e,
    });
    reg(env, "xor", |_interp, _env, args| match int_pair("xor", args) {
        Ok((a, b)) => Value::Int(a ^ b),
        Err(e) => e,
    });
    reg(env, "not", |_interp, _env, args| match require_arity("not", args, 1) {
        Ok(args) => Value::Bool(!args[0].is_truthy()),
        Err(e) => e,
    });
}
