//! Direct tests of [`mila::Env`]'s binding-chain semantics: identity
//! stability across lookups, `set_local`'s current-frame-only scoping
//! versus `set`'s walk-the-parent-chain scoping, and `unset`.

use mila::{Env, Value};

fn int_of(v: &Value) -> i64 {
    match v {
        Value::Int(i) => *i,
        other => panic!("expected Int, got {other:?}"),
    }
}

#[test]
fn get_on_an_undefined_name_is_null_not_a_panic() {
    let root = Env::root();
    assert!(matches!(root.get("nope"), Value::Null));
}

#[test]
fn child_scope_sees_parent_bindings() {
    let root = Env::root();
    root.set_local("x", Value::Int(7));
    let child = root.child();
    assert_eq!(int_of(&child.get("x")), 7);
}

#[test]
fn set_local_shadows_in_the_current_frame_only() {
    let root = Env::root();
    root.set_local("x", Value::Int(1));
    let child = root.child();
    child.set_local("x", Value::Int(2));
    assert_eq!(int_of(&child.get("x")), 2);
    assert_eq!(int_of(&root.get("x")), 1);
}

#[test]
fn set_walks_up_to_the_nearest_frame_that_already_has_the_name() {
    let root = Env::root();
    root.set_local("x", Value::Int(1));
    let child = root.child();
    child.set("x", Value::Int(99));
    assert_eq!(int_of(&root.get("x")), 99, "set should have updated the parent's binding in place");
    assert_eq!(int_of(&child.get("x")), 99);
}

#[test]
fn set_creates_a_local_binding_when_the_name_is_new() {
    let root = Env::root();
    let child = root.child();
    child.set("fresh", Value::Int(5));
    assert_eq!(int_of(&child.get("fresh")), 5);
    assert!(matches!(root.get("fresh"), Value::Null), "a brand-new name should not leak into the parent");
}

#[test]
fn unset_removes_only_from_the_current_frame() {
    let root = Env::root();
    root.set_local("x", Value::Int(1));
    let child = root.child();
    child.set_local("x", Value::Int(2));
    child.unset("x");
    assert_eq!(int_of(&child.get("x")), 1, "unset should reveal the parent's binding again");
}

#[test]
fn re_letting_the_same_name_in_one_frame_replaces_rather_than_duplicates() {
    let root = Env::root();
    root.set_local("x", Value::Int(1));
    root.set_local("x", Value::Int(2));
    root.unset("x");
    assert!(matches!(root.get("x"), Value::Null), "a single unset should clear a re-declared binding entirely");
}
