//! Pluggable output sink for the `print`/`println`/`printr` builtins.
//!
//! Ported from the teacher crate's `PrintWriter` trait: an embedder can
//! swap in a custom sink (to capture output, suppress it in tests, or
//! route it somewhere other than the process's stdout) without the
//! interpreter core needing to know about it.

use std::io::{self, Write as _};

/// Receives the text `print`-family builtins produce.
///
/// `write` is called once per formatted argument (with no separator or
/// trailing newline added by the caller); `push` adds a single
/// separator or terminator character. Splitting the two mirrors how the
/// `print` builtin itself works: one argument at a time, with `" "`
/// between arguments and a configurable `end` character afterward.
pub trait PrintWriter {
    fn write(&mut self, text: &str);
    fn push(&mut self, ch: char);
}

impl std::fmt::Debug for dyn PrintWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<dyn PrintWriter>")
    }
}

/// Default sink: writes straight to the process's stdout.
#[derive(Debug, Default)]
pub struct StdPrint;

impl PrintWriter for StdPrint {
    fn write(&mut self, text: &str) {
        let _ = io::stdout().write_all(text.as_bytes());
    }

    fn push(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        let _ = io::stdout().write_all(ch.encode_utf8(&mut buf).as_bytes());
    }
}

/// Collects all output into an in-memory string. Useful for embedding
/// tests that want to assert on what a script printed.
#[derive(Debug, Default)]
pub struct CollectStringPrint(String);

impl CollectStringPrint {
    #[must_use]
    pub fn new() -> Self {
        Self(String::new())
    }

    #[must_use]
    pub fn output(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_output(self) -> String {
        self.0
    }
}

impl PrintWriter for CollectStringPrint {
    fn write(&mut self, text: &str) {
        self.0.push_str(text);
    }

    fn push(&mut self, ch: char) {
        self.0.push(ch);
    }
}

/// Discards all output. Useful for benchmarks or fuzzing where print
/// output is never inspected.
#[derive(Debug, Default)]
pub struct NoPrint;

impl PrintWriter for NoPrint {
    fn write(&mut self, _text: &str) {}
    fn push(&mut self, _ch: char) {}
}
