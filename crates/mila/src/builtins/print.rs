//! `print`, `println`, `printr`, and `input`.
//!
//! `print`/`println` render each argument via [`Value::display`],
//! separated by a single space; `println` appends a trailing newline,
//! `print` does not. `printr` is ported verbatim from `native_printr`
//! (`ml_builtins.c`): it also calls `print_value` per argument — the
//! same plain rendering as `print`, with **no** separators and **no**
//! trailing newline. It is not a "print repr" despite the name.

use super::reg;
use crate::{args::require_arity_range, env::Env, Value};

fn write_args(interp: &mut crate::Interpreter, args: &[Value], separated: bool, newline: bool) -> Value {
    let out = interp.print_mut();
    for (i, arg) in args.iter().enumerate() {
        if separated && i > 0 {
            out.push(' ');
        }
        out.write(&arg.display());
    }
    if newline {
        out.push('\n');
    }
    Value::Null
}

pub(super) fn register(env: &Env) {
    reg(env, "print", |interp, _env, args| write_args(interp, args, true, false));
    reg(env, "println", |interp, _env, args| write_args(interp, args, true, true));
    reg(env, "printr", |interp, _env, args| write_args(interp, args, false, false));
    reg(env, "input", |_interp, _env, args| {
        use std::io::Write as _;
        let args = match require_arity_range("input", args, 0, 1) {
            Ok(a) => a,
            Err(e) => return e,
        };
        if let Some(prompt) = args.first() {
            print!("{}", prompt.display());
            let _ = std::io::stdout().flush();
        }
        let mut line = String::new();
        match std::io::stdin().read_line(&mut line) {
            Ok(0) => Value::Null,
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Value::string(line)
            }
            Err(_) => Value::Null,
        }
    });
}
