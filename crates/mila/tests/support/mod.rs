//! Shared test scaffolding: a `PrintWriter` that hands its captured text
//! back to the test after the `Interpreter` that owns it is done with it.

use std::{cell::RefCell, rc::Rc};

use mila::{Interpreter, PrintWriter, Value};

pub struct SharedPrint(pub Rc<RefCell<String>>);

impl PrintWriter for SharedPrint {
    fn write(&mut self, text: &str) {
        self.0.borrow_mut().push_str(text);
    }

    fn push(&mut self, ch: char) {
        self.0.borrow_mut().push(ch);
    }
}

/// Evaluates `source` with [`Interpreter::eval`] (the top-level,
/// error-reporting-to-stderr entry point) and returns the printed output
/// alongside the top-level result.
pub fn eval_capture(source: &str) -> (Value, String) {
    let buf = Rc::new(RefCell::new(String::new()));
    let mut interp = Interpreter::with_print(Box::new(SharedPrint(buf.clone())));
    let result = interp.eval(source);
    let out = buf.borrow().clone();
    (result, out)
}

/// Evaluates `source` with [`Interpreter::eval_raw`] (no top-level error
/// reporting — the raw sentinel value, including a bare `Error`, comes
/// straight back).
pub fn eval_raw_capture(source: &str) -> (Value, String) {
    let buf = Rc::new(RefCell::new(String::new()));
    let mut interp = Interpreter::with_print(Box::new(SharedPrint(buf.clone())));
    let result = interp.eval_raw(source);
    let out = buf.borrow().clone();
    (result, out)
}

pub fn assert_error_containing(v: &Value, needle: &str) {
    match v {
        Value::Error(msg) => assert!(
            msg.contains(needle),
            "expected error message to contain {needle:?}, got {msg:?}"
        ),
        other => panic!("expected Value::Error containing {needle:?}, got {other:?}"),
    }
}
