//! The native function set every fresh [`crate::Interpreter`] starts
//! with. One submodule per builtin family, matching the teacher crate's
//! own per-builtin-file-plus-registration-function organization
//! (`crates/ouros/src/builtins/mod.rs`): each family owns its natives'
//! implementations, and [`register_all`] is the single place that binds
//! every name into a fresh global environment — the direct analogue of
//! the original's `env_register_builtins`.

mod array;
mod ascii;
mod cast;
mod dict;
mod file;
mod logic;
mod math;
mod misc;
mod print;
mod strops;
mod typeof_;

use std::rc::Rc;

use crate::{env::Env, value::NativeFn, Value};

/// Binds `name` to a native function in `env`.
pub(crate) fn reg(
    env: &Env,
    name: &str,
    f: impl Fn(&mut crate::Interpreter, &Env, &[Value]) -> Value + 'static,
) {
    let func: NativeFn = Rc::new(f);
    env.set_local(name, Value::Native { func, name: Rc::from(name) });
}

/// Builds an `array` value pre-populated with `items` — exposed for
/// host code (the CLI's `argv` binding) that needs to construct an
/// array without going through the `array`/`array.push` native calls.
#[must_use]
pub fn array_from(items: Vec<Value>) -> Value {
    array::make(items)
}

/// Registers the complete standard native set in `env`. Called once per
/// [`crate::Interpreter::new`].
pub fn register_all(env: &Env) {
    print::register(env);
    logic::register(env);
    strops::register(env);
    array::register(env);
    dict::register(env);
    cast::register(env);
    typeof_::register(env);
    math::register(env);
    ascii::register(env);
    file::register(env);
    misc::register(env);
}
