//! Operator-level boundary properties from the testable-properties list:
//! integer division always promotes to a float, `%`/`<<`/`>>` on
//! non-integer operands are silently `Null` rather than an error,
//! string `+` anything is always a string, and `&&`/`||` evaluate both
//! operands unconditionally (no short-circuiting).

mod support;

use mila::Value;
use pretty_assertions::assert_eq;
use support::{eval_capture, eval_raw_capture};

#[test]
fn integer_division_always_yields_a_float() {
    let (result, out) = eval_capture("println(7 / 2);");
    assert_eq!(out, "3.500000\n");
    assert!(matches!(result, Value::Null));
}

#[test]
fn division_by_zero_is_an_error_not_a_panic() {
    let (result, _) = eval_raw_capture("5 / 0");
    support::assert_error_containing(&result, "division by zero");
}

#[test]
fn modulo_by_zero_is_an_error() {
    let (result, _) = eval_raw_capture("5 % 0");
    support::assert_error_containing(&result, "modulo by zero");
}

#[test]
fn modulo_on_floats_is_null_not_an_error() {
    let (result, _) = eval_raw_capture("1.5 % 2");
    assert!(matches!(result, Value::Null), "expected Null, got {result:?}");
}

#[test]
fn shift_operators_on_non_integers_are_null() {
    let (lhs, _) = eval_raw_capture("1.0 << 2");
    let (rhs, _) = eval_raw_capture("1 >> 2.0");
    assert!(matches!(lhs, Value::Null));
    assert!(matches!(rhs, Value::Null));
}

#[test]
fn shift_operators_on_integers_work() {
    let (result, _) = eval_raw_capture("1 << 4");
    match result {
        Value::Int(n) => assert_eq!(n, 16),
        other => panic!("expected Int(16), got {other:?}"),
    }
}

#[test]
fn string_plus_any_always_yields_a_string() {
    let (int_side, _) = eval_raw_capture(r#"1 + "a""#);
    let (float_side, _) = eval_raw_capture(r#""a" + 2.5"#);
    let (bool_side, _) = eval_raw_capture(r#""a" + true"#);
    assert!(matches!(int_side, Value::String(_)));
    assert!(matches!(float_side, Value::String(_)));
    assert!(matches!(bool_side, Value::String(_)));
}

#[test]
fn both_operands_of_or_are_always_evaluated() {
    let (_, out) = eval_capture(
        "let log = array();\
         let mark = fn(tag, v){ array.push(log, tag); return v; };\
         let r = mark(1, true) || mark(2, false);\
         println(array.len(log));",
    );
    assert_eq!(out, "2\n");
}

#[test]
fn both_operands_of_and_are_always_evaluated() {
    let (_, out) = eval_capture(
        "let log = array();\
         let mark = fn(tag, v){ array.push(log, tag); return v; };\
         let r = mark(1, false) && mark(2, true);\
         println(array.len(log));",
    );
    assert_eq!(out, "2\n");
}

#[test]
fn nullish_equality_treats_null_and_none_as_equal() {
    let (result, _) = eval_raw_capture("null == none");
    assert!(matches!(result, Value::Bool(true)));
}

#[test]
fn int_float_numeric_equality_compares_by_value() {
    let (result, _) = eval_raw_capture("2 == 2.0");
    assert!(matches!(result, Value::Bool(true)));
}
