//! MiLa is a small embeddable interpreter for a dynamically-typed,
//! expression-oriented scripting language. Programs are evaluated by a
//! fused parser/evaluator: there is no separate lexing pass and no
//! materialized AST. A [`cursor::Cursor`] walks the source text once per
//! evaluation, and grammar productions in [`eval`] consume bytes and
//! produce [`value::Value`]s in the same step.
//!
//! The crate is organized the way an embedder actually uses it:
//!
//! - [`Interpreter`] bundles the global environment, the configured print
//!   sink, the library search path, and any dynamically loaded native
//!   libraries.
//! - [`value::Value`] is the dynamically-typed value every MiLa
//!   expression produces, including the control-flow sentinels
//!   (`Return`/`Break`/`Continue`/`Error`) that make `return`, `break`,
//!   `continue`, and error propagation ordinary data flow rather than
//!   special control paths.
//! - [`env::Env`] is the lexically-scoped binding chain shared by
//!   closures and blocks.
//! - [`builtins`] registers the native function set every fresh
//!   [`Interpreter`] starts with.

mod args;
pub mod builtins;
mod cursor;
pub mod env;
mod error;
mod eval;
pub mod io;
mod native;
pub mod paths;
mod value;

pub use crate::{
    cursor::Cursor,
    env::Env,
    error::{CliError, LoadError},
    eval::needs_more_input,
    io::{CollectStringPrint, NoPrint, PrintWriter, StdPrint},
    native::NativeLibrary,
    value::{OpaqueHandle, Value},
};

/// The host-facing entry point: bundles everything a running MiLa
/// program needs beyond the text of the program itself.
///
/// Kept alive for as long as any value produced by it might still be
/// used, since native function pointers loaded via [`NativeLibrary`]
/// borrow from the libraries it owns.
pub struct Interpreter {
    global: Env,
    print: Box<dyn PrintWriter>,
    search_path: Vec<String>,
    libraries: Vec<NativeLibrary>,
}

impl Interpreter {
    /// Creates an interpreter with the standard built-in function set
    /// registered in a fresh global environment, printing to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_print(Box::new(StdPrint))
    }

    /// Creates an interpreter with a custom print sink.
    #[must_use]
    pub fn with_print(print: Box<dyn PrintWriter>) -> Self {
        let global = Env::root();
        builtins::register_all(&global);
        Self {
            global,
            print,
            search_path: Vec::new(),
            libraries: Vec::new(),
        }
    }

    /// Returns the global environment, for binding host values before
    /// running a program (mirrors `env_set`/`env_set_local` in an
    /// embedding's setup code).
    #[must_use]
    pub fn global(&self) -> &Env {
        &self.global
    }

    /// Appends a root directory to the library/script search path
    /// consulted by `open`, `run`, and `load`.
    pub fn add_search_root(&mut self, root: impl Into<String>) {
        self.search_path.push(root.into());
    }

    #[must_use]
    pub(crate) fn search_path(&self) -> &[String] {
        &self.search_path
    }

    pub(crate) fn print_mut(&mut self) -> &mut dyn PrintWriter {
        &mut *self.print
    }

    pub(crate) fn keep_library_alive(&mut self, lib: NativeLibrary) {
        self.libraries.push(lib);
    }

    /// Evaluates `source` as a top-level program in the global
    /// environment, returning the value of the last statement.
    ///
    /// A top-level `Value::Error` is reported to stderr (matching the
    /// original interpreter's "`= Error: <message>`" diagnostic) and
    /// `Value::Null` is returned in its place, per [`eval::eval_source`].
    pub fn eval(&mut self, source: &str) -> Value {
        eval::eval_source(source, &self.global, self)
    }

    /// Evaluates `source` without the top-level error-reporting
    /// convention, returning whatever sentinel value the evaluation
    /// actually produced (including a `Value::Error`). Useful for REPLs
    /// and tests that want to inspect the raw result.
    pub fn eval_raw(&mut self, source: &str) -> Value {
        let mut cursor = Cursor::new(source);
        eval::eval_block_top_level(&mut cursor, &self.global, self)
    }

    /// Reads `path` and evaluates its contents as a top-level program.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn run_file(&mut self, path: &str) -> std::io::Result<Value> {
        let source = std::fs::read_to_string(path)?;
        Ok(self.eval(&source))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared owner of an [`Env`] frame, used for closures and for the
/// parent-chain links between nested blocks.
///
/// This is the safe-Rust analogue of the original interpreter's manual
/// reference counting: cloning an `Env` handle is `val_retain`, and a
/// frame going out of scope is `val_release`. See `SPEC_FULL.md` §3 for
/// the full reasoning. A function closing back over a frame that
/// (directly or transitively) holds that very function is an
/// intentional, accepted reference cycle — not collected, matching the
/// interpreter's own stated non-goal of garbage-collecting cycles.
pub(crate) type EnvHandle = env::Env;
