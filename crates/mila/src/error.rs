//! Host-API-level failures that are **not** script errors.
//!
//! A malformed script condition becomes a `Value::Error` and flows
//! through the ordinary control-flow-sentinel machinery (`SPEC_FULL.md`
//! §7) — it is data, not a Rust `Result::Err`. These two types instead
//! cover failures that happen *before* or *around* script evaluation:
//! a bad CLI invocation, or a native library that can't be loaded at
//! all. Plain hand-written `Display` impls, matching the ambient style
//! of the rest of this crate's (and its teacher's) error types — no
//! `thiserror`/`anyhow` dependency is pulled in for this.

use std::fmt;

/// An error raised by the `mila` command-line front end before any
/// script has run.
#[derive(Debug)]
pub enum CliError {
    /// The named file does not exist or could not be read.
    FileNotFound { path: String, source: std::io::Error },
    /// An unrecognized flag was passed.
    UnknownFlag(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound { path, source } => {
                write!(f, "cannot read '{path}': {source}")
            }
            Self::UnknownFlag(flag) => write!(f, "unknown option '{flag}'"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileNotFound { source, .. } => Some(source),
            Self::UnknownFlag(_) => None,
        }
    }
}

/// An error raised while loading a native function library (the
/// `load(path)` builtin).
#[derive(Debug)]
pub enum LoadError {
    /// The shared object itself could not be opened.
    Open { path: String, message: String },
    /// The well-known `lib_functions` symbol table is missing.
    MissingSymbolTable { path: String },
    /// A name listed in `lib_functions` has no matching exported symbol.
    /// Matches the original's behavior: this is a warning, not a hard
    /// failure — the rest of the library's functions still load.
    UnresolvedSymbol { path: String, name: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, message } => write!(f, "failed to load library '{path}': {message}"),
            Self::MissingSymbolTable { path } => {
                write!(f, "library '{path}' does not export 'lib_functions'")
            }
            Self::UnresolvedSymbol { path, name } => {
                write!(f, "warning: '{path}' lists '{name}' but it could not be resolved")
            }
        }
    }
}

impl std::error::Error for LoadError {}
