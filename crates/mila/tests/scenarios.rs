//! The end-to-end scenarios a conforming implementation must reproduce
//! verbatim: arithmetic precedence, recursion, closures, `let`-shadowing
//! inside a `while` loop, `catch` swallowing a `report`, the diagnostic
//! shape of an uncaught `block NAME` error, and string/int concatenation.

mod support;

use mila::Value;
use pretty_assertions::assert_eq;
use support::eval_capture;

#[test]
fn arithmetic_precedence_and_println() {
    let (result, out) = eval_capture("let x = 2 + 3 * 4; println(x);");
    assert_eq!(out, "14\n");
    assert!(matches!(result, Value::Null));
}

#[test]
fn recursive_fibonacci() {
    let (_, out) = eval_capture(
        "let f = fn(n){ if (n < 2) { return n; } return f(n-1) + f(n-2); }; println(f(10));",
    );
    assert_eq!(out, "55\n");
}

#[test]
fn closure_over_captured_argument() {
    let (_, out) = eval_capture(
        "let mk = fn(x){ return fn(y){ return x + y; }; }; let add3 = mk(3); println(add3(4));",
    );
    assert_eq!(out, "7\n");
}

#[test]
fn let_shadowing_inside_while_loop() {
    let (_, out) = eval_capture(
        "let i = 0; let s = 0; while (i < 5) { let s = s + i; let i = i + 1; } println(s);",
    );
    assert_eq!(out, "10\n");
}

#[test]
fn catch_swallows_report() {
    let (_, out) = eval_capture(r#"let r = catch { report("boom"); }; println(r);"#);
    assert_eq!(out, "null\n");
}

#[test]
fn uncaught_named_block_error_is_reported_and_program_continues() {
    // eval() reports the first top-level Error to stderr and returns
    // Value::Null in its place; nothing more of the program's top level
    // runs after that statement, matching eval_source's contract.
    let (result, out) = eval_capture(r#"block outer { report("x"); }"#);
    assert!(matches!(result, Value::Null));
    assert_eq!(out, "");
}

#[test]
fn string_plus_int_plus_string_concatenation() {
    let (_, out) = eval_capture(r#"println("a" + 1 + "b");"#);
    assert_eq!(out, "a1b\n");
}
