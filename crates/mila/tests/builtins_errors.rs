//! Arity and type-check error paths across the native function
//! families: each either yields a `Value::Error` with a message naming
//! the native, or (where the contract documents it) silently yields
//! `Null` instead.

mod support;

use mila::Value;
use support::eval_raw_capture;

#[test]
fn str_length_wrong_arity_is_an_error() {
    let (result, _) = eval_raw_capture(r#"str.length("a", "b")"#);
    support::assert_error_containing(&result, "str.length");
}

#[test]
fn str_length_wrong_type_is_an_error() {
    let (result, _) = eval_raw_capture("str.length(5)");
    support::assert_error_containing(&result, "str.length");
}

#[test]
fn str_slice_extracts_a_substring_by_char_index() {
    let (result, _) = eval_raw_capture(r#"str.slice("hello world", 6, 11)"#);
    match result {
        Value::String(s) => assert_eq!(*s.borrow(), "world"),
        other => panic!("expected a string, got {other:?}"),
    }
}

#[test]
fn array_get_wrong_type_first_arg_is_an_error() {
    let (result, _) = eval_raw_capture("array.get(5, 0)");
    support::assert_error_containing(&result, "array.get");
}

#[test]
fn array_push_then_get_round_trips() {
    let (result, _) =
        eval_raw_capture(r#"let a = array(); array.push(a, "x"); array.push(a, "y"); array.get(a, 1)"#);
    match result {
        Value::String(s) => assert_eq!(*s.borrow(), "y"),
        other => panic!("expected a string, got {other:?}"),
    }
}

#[test]
fn array_get_out_of_bounds_is_null_not_an_error() {
    let (result, _) = eval_raw_capture("let a = array(); array.get(a, 9)");
    assert!(matches!(result, Value::Null));
}

#[test]
fn dict_rem_reports_whether_a_key_was_present() {
    let (present, _) = eval_raw_capture(r#"let d = dict(); dict.set(d, "k", 1); dict.rem(d, "k")"#);
    let (absent, _) = eval_raw_capture(r#"let d = dict(); dict.rem(d, "k")"#);
    assert!(matches!(present, Value::Bool(true)));
    assert!(matches!(absent, Value::Bool(false)));
}

#[test]
fn dict_get_missing_key_is_null() {
    let (result, _) = eval_raw_capture(r#"let d = dict(); dict.get(d, "missing")"#);
    assert!(matches!(result, Value::Null));
}

#[test]
fn cast_int_on_an_unparseable_string_is_an_error() {
    let (result, _) = eval_raw_capture(r#"cast.int("not a number")"#);
    support::assert_error_containing(&result, "cast");
}

#[test]
fn cast_string_renders_an_int() {
    let (result, _) = eval_raw_capture("cast.string(42)");
    match result {
        Value::String(s) => assert_eq!(*s.borrow(), "42"),
        other => panic!("expected a string, got {other:?}"),
    }
}

#[test]
fn cast_bool_follows_truthiness() {
    let (zero, _) = eval_raw_capture("cast.bool(0)");
    let (one, _) = eval_raw_capture("cast.bool(1)");
    assert!(matches!(zero, Value::Bool(false)));
    assert!(matches!(one, Value::Bool(true)));
}

#[test]
fn math_native_wrong_arity_is_an_error() {
    let (result, _) = eval_raw_capture("sqrt(4, 9)");
    support::assert_error_containing(&result, "sqrt");
}

#[test]
fn math_native_coerces_int_to_float() {
    let (result, _) = eval_raw_capture("sqrt(9)");
    match result {
        Value::Float(f) => assert!((f - 3.0).abs() < 1e-9),
        other => panic!("expected a float, got {other:?}"),
    }
}

#[test]
fn and_or_xor_are_bitwise_not_logical() {
    let (and_r, _) = eval_raw_capture("and(6, 3)");
    let (or_r, _) = eval_raw_capture("or(6, 1)");
    let (xor_r, _) = eval_raw_capture("xor(6, 3)");
    match (and_r, or_r, xor_r) {
        (Value::Int(a), Value::Int(o), Value::Int(x)) => {
            assert_eq!(a, 2);
            assert_eq!(o, 7);
            assert_eq!(x, 5);
        }
        other => panic!("expected three ints, got {other:?}"),
    }
}

#[test]
fn ascii_to_and_from_round_trip() {
    let (result, _) = eval_raw_capture(r#"ascii.from(ascii.to(65))"#);
    match result {
        Value::Int(n) => assert_eq!(n, 65),
        other => panic!("expected Int(65), got {other:?}"),
    }
}

#[test]
fn ascii_to_on_a_string_is_null() {
    let (result, _) = eval_raw_capture(r#"ascii.to("not an int")"#);
    assert!(matches!(result, Value::Null));
}

#[test]
fn typeof_reports_the_coarse_type_name() {
    let (result, _) = eval_raw_capture(r#"typeof("hi")"#);
    match result {
        Value::String(s) => assert_eq!(*s.borrow(), "string"),
        other => panic!("expected a string, got {other:?}"),
    }
}

#[test]
fn underscore_typeof_reports_the_opaque_subtag() {
    let (arr, _) = eval_raw_capture("_typeof(array())");
    let (dct, _) = eval_raw_capture("_typeof(dict())");
    match (arr, dct) {
        (Value::String(a), Value::String(d)) => {
            assert_eq!(*a.borrow(), "array");
            assert_eq!(*d.borrow(), "dict");
        }
        other => panic!("expected two strings, got {other:?}"),
    }
}

#[test]
fn typeof_collapses_script_functions_and_natives_to_function() {
    let (script_fn, _) = eval_raw_capture("typeof(fn(){ return 1; })");
    let (native_fn, _) = eval_raw_capture("typeof(println)");
    match (script_fn, native_fn) {
        (Value::String(a), Value::String(b)) => {
            assert_eq!(*a.borrow(), "function");
            assert_eq!(*b.borrow(), "function");
        }
        other => panic!("expected two strings, got {other:?}"),
    }
}

#[test]
fn underscore_typeof_distinguishes_script_functions_from_natives() {
    let (script_fn, _) = eval_raw_capture("_typeof(fn(){ return 1; })");
    let (native_fn, _) = eval_raw_capture("_typeof(println)");
    match (script_fn, native_fn) {
        (Value::String(a), Value::String(b)) => {
            assert_eq!(*a.borrow(), "function");
            assert_eq!(*b.borrow(), "native");
        }
        other => panic!("expected two strings, got {other:?}"),
    }
}

#[test]
fn report_with_no_arguments_has_the_documented_message() {
    let (result, _) = eval_raw_capture("report()");
    support::assert_error_containing(&result, "No details given");
}

#[test]
fn report_with_too_many_arguments_has_the_documented_message() {
    let (result, _) = eval_raw_capture(r#"report("a", "b")"#);
    support::assert_error_containing(&result, "Invalid number of arguments");
}
