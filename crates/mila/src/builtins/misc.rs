//! Control and host-integration natives that don't fit any other
//! family: `report`, `exit`, `get_time`, `system`, `run`, `load`,
//! `eval`.
//!
//! Ported from `native_report`/`native_exit`/`native_get_time`/
//! `native_system`/`native_run`/`native_load`/`native_eval` in
//! `original_source/ml_builtins.c`.

use std::time::{SystemTime, UNIX_EPOCH};

use super::reg;
use crate::{args::require_arity, cursor::Cursor, env::Env, eval, native::load_library, paths, Interpreter, Value};

pub(super) fn register(env: &Env) {
    reg(env, "report", |_interp, _env, args| report(args));
    reg(env, "exit", |_interp, _env, args| exit(args));
    reg(env, "get_time", |_interp, _env, args| get_time(args));
    reg(env, "system", |_interp, _env, args| system(args));
    reg(env, "run", |interp, env, args| run(interp, env, args));
    reg(env, "load", |interp, env, args| load(interp, env, args));
    reg(env, "eval", |interp, env, args| eval_native(interp, env, args));
}

/// `report(message)`: always yields an `Error` — it exists so script
/// code can signal a failure condition deliberately (the source of
/// every `block NAME { ... }`/`catch { ... }` example in `SPEC_FULL.md`
/// §8). The embedded trailing newline in the one-argument message and
/// the exact wording of the other two arities are ported verbatim from
/// `native_report`.
fn report(args: &[Value]) -> Value {
    match args {
        [Value::String(s)] => Value::error(format!("report(message): {}\n", s.borrow())),
        [] => Value::error("report(message) - No details given."),
        _ => Value::error("report(message): Invalid number of arguments given."),
    }
}

fn exit(args: &[Value]) -> Value {
    match args {
        [Value::Int(code)] => std::process::exit(*code as i32),
        [] => std::process::exit(0),
        _ => Value::error("invalid number of arguments given."),
    }
}

fn get_time(args: &[Value]) -> Value {
    if !args.is_empty() {
        return Value::error("invalid number of arguments given.");
    }
    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
    Value::Float(now.as_secs_f64())
}

fn system(args: &[Value]) -> Value {
    let args = match require_arity("system(command)", args, 1) {
        Ok(a) => a,
        Err(e) => return e,
    };
    let Value::String(cmd) = &args[0] else {
        return Value::error("invalid number of arguments given or incorrect types.");
    };
    let cmd = cmd.borrow().clone();
    let status = if cfg!(windows) {
        std::process::Command::new("cmd").arg("/C").arg(&cmd).status()
    } else {
        std::process::Command::new("sh").arg("-c").arg(&cmd).status()
    };
    match status {
        Ok(status) => Value::Int(i64::from(status.code().unwrap_or(-1))),
        Err(_) => Value::Int(-1),
    }
}

/// `run(filename)`: evaluates `filename`'s contents as a top-level
/// program **in the calling environment** `env` (not a fresh one) —
/// matching `native_run`'s `run_file(path, env)`, which lets a run file
/// see and extend the caller's bindings.
fn run(interp: &mut Interpreter, env: &Env, args: &[Value]) -> Value {
    let args = match require_arity("run(filename)", args, 1) {
        Ok(a) => a,
        Err(e) => return e,
    };
    let Value::String(path) = &args[0] else {
        return Value::error("invalid number of arguments given or incorrect types.");
    };
    let path = path.borrow().clone();
    let resolved = paths::resolve(&path, interp.search_path());
    let Some(resolved) = resolved else {
        return Value::error("run(filename) did not find the file.");
    };
    match std::fs::read_to_string(&resolved) {
        Ok(source) => {
            let mut cursor = Cursor::new(&source);
            let result = eval::eval_block_top_level(&mut cursor, env, interp);
            if let Value::Error(msg) = result {
                Value::error(format!("problem running file {path}: {msg}"))
            } else {
                Value::Null
            }
        }
        Err(_) => Value::error(format!("problem running file {path}")),
    }
}

/// `load(path)`: loads a native library and binds every function it
/// exports into the calling environment `env`, matching
/// `load_library(env, path)` in the original.
fn load(interp: &mut Interpreter, env: &Env, args: &[Value]) -> Value {
    let args = match require_arity("load(filename)", args, 1) {
        Ok(a) => a,
        Err(e) => return e,
    };
    let Value::String(path) = &args[0] else {
        return Value::error("invalid number of arguments given or incorrect types.");
    };
    let path = path.borrow().clone();
    match load_library(&path) {
        Ok((lib, functions)) => {
            for (name, func) in functions {
                env.set_local(&name, Value::Native { func, name: name.as_str().into() });
            }
            interp.keep_library_alive(lib);
            Value::Null
        }
        Err(e) => Value::error(format!("problem loading file {path}: {e}")),
    }
}

/// `eval(code)`: evaluates `code` as a run of statements against the
/// calling environment `env`, returning the last statement's value —
/// matches `native_eval`'s `eval_str(argv[0]->v.s, env)`.
fn eval_native(interp: &mut Interpreter, env: &Env, args: &[Value]) -> Value {
    let args = match require_arity("eval(code)", args, 1) {
        Ok(a) => a,
        Err(e) => return e,
    };
    let Value::String(code) = &args[0] else {
        return Value::error("invalid number of arguments given or incorrect types.");
    };
    let code = code.borrow().clone();
    let mut cursor = Cursor::new(&code);
    eval::eval_block_top_level(&mut cursor, env, interp)
}
