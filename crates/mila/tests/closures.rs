//! A closure keeps its defining frame alive (and reachable) after that
//! frame's syntactic scope has exited, and a recursive `let`-bound
//! function can see itself by name through its own closure.

mod support;

use pretty_assertions::assert_eq;
use support::eval_capture;

#[test]
fn closure_outlives_its_defining_block() {
    let (_, out) = eval_capture(
        "let make_counter = fn(){\
           let n = 0;\
           return fn(){ let n = n + 1; return n; };\
         };\
         let counter = make_counter();\
         println(counter());\
         println(counter());\
         println(counter());",
    );
    assert_eq!(out, "1\n2\n3\n");
}

#[test]
fn independent_closures_do_not_share_state() {
    let (_, out) = eval_capture(
        "let make_counter = fn(){\
           let n = 0;\
           return fn(){ let n = n + 1; return n; };\
         };\
         let a = make_counter();\
         let b = make_counter();\
         println(a());\
         println(a());\
         println(b());",
    );
    assert_eq!(out, "1\n2\n1\n");
}

#[test]
fn recursive_function_sees_itself_through_its_own_closure() {
    let (_, out) = eval_capture(
        "let fact = fn(n){ if (n < 2) { return 1; } return n * fact(n - 1); };\
         println(fact(5));",
    );
    assert_eq!(out, "120\n");
}

#[test]
fn function_passed_as_argument_displays_as_anonymous() {
    let (_, out) = eval_capture(
        r#"let apply = fn(f, x){ return f(x); };
           println(apply(fn(y){ return y * 2; }, 21));"#,
    );
    assert_eq!(out, "42\n");
}
