//! `load(path)` surfaces a failure to open a native library as a
//! `Value::Error`, never a panic.

mod support;

use support::eval_raw_capture;

#[test]
fn loading_a_missing_library_is_an_error_not_a_panic() {
    let (result, _) = eval_raw_capture(r#"load("/definitely/does/not/exist.so")"#);
    support::assert_error_containing(&result, "problem loading file");
}

#[test]
fn load_wrong_arity_is_an_error() {
    let (result, _) = eval_raw_capture("load()");
    support::assert_error_containing(&result, "load(filename)");
}

#[test]
fn run_on_a_missing_file_is_an_error() {
    let (result, _) = eval_raw_capture(r#"run("/definitely/does/not/exist.mila")"#);
    support::assert_error_containing(&result, "did not find the file");
}

#[test]
fn eval_native_runs_code_in_the_calling_environment() {
    let (result, _) = eval_raw_capture(r#"let x = 1; eval("x + 41")"#);
    match result {
        mila::Value::Int(n) => assert_eq!(n, 42),
        other => panic!("expected Int(42), got {other:?}"),
    }
}
