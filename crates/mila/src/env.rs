//! Lexically-scoped environments: a chain of frames, newest first.
//!
//! A frame is a flat list of `(name, Value)` slots searched
//! newest-to-oldest (so shadowing a name by re-`let`-ing it in the same
//! block works without removing the old slot), plus a link to the
//! enclosing frame. Closures capture an [`Env`] by cloning the handle —
//! cheap, since `Env` is a reference-counted pointer to its frame.

use std::{cell::RefCell, rc::Rc};

use crate::value::Value;

/// The data behind an [`Env`] handle. Not exposed directly: all access
/// goes through `Env`'s methods so the newest-first search order and the
/// function-name-tagging side effect stay in one place.
struct Frame {
    vars: RefCell<Vec<(String, Value)>>,
    parent: Option<Env>,
}

/// A cheap-to-clone handle to a lexical scope.
///
/// This is the safe-Rust stand-in for the original interpreter's
/// `Env*`/parent-pointer chain: cloning an `Env` is exactly as cheap as
/// copying the original's raw pointer, but drops the frame automatically
/// once the last handle (a caller's local variable, a closure, a nested
/// block) goes away.
#[derive(Clone)]
pub struct Env(Rc<Frame>);

impl Env {
    /// Creates a new root environment with no parent, as used for an
    /// [`crate::Interpreter`]'s global scope.
    #[must_use]
    pub fn root() -> Self {
        Self(Rc::new(Frame {
            vars: RefCell::new(Vec::new()),
            parent: None,
        }))
    }

    /// Creates a new child scope parented on `self` — used when
    /// entering a block (`eval_block`) or a function call's frame
    /// (parented on the function's closure, not the caller).
    #[must_use]
    pub fn child(&self) -> Self {
        Self(Rc::new(Frame {
            vars: RefCell::new(Vec::new()),
            parent: Some(self.clone()),
        }))
    }

    /// Looks up `name`, searching the current frame then each enclosing
    /// frame in turn. Returns `Value::Null` if not found, matching the
    /// original's `env_get` (an undefined variable reads as null rather
    /// than erroring).
    #[must_use]
    pub fn get(&self, name: &str) -> Value {
        let mut frame = Some(self.clone());
        while let Some(Env(f)) = frame {
            if let Some((_, v)) = f.vars.borrow().iter().rev().find(|(n, _)| n == name) {
                return v.clone();
            }
            frame = f.parent.clone();
        }
        Value::Null
    }

    /// Binds `name` to `value` in the **current** frame only: replaces
    /// an existing slot in this frame if present, otherwise prepends a
    /// new one. Used by `let`.
    pub fn set_local(&self, name: &str, value: Value) {
        tag_function_name(&value, name);
        let mut vars = self.0.vars.borrow_mut();
        if let Some(slot) = vars.iter_mut().rev().find(|(n, _)| n == name) {
            slot.1 = value;
        } else {
            vars.push((name.to_string(), value));
        }
    }

    /// Binds `name` to `value`, searching the current frame and each
    /// enclosing frame for an existing binding to update in place;
    /// falls back to [`Self::set_local`] on the starting frame if no
    /// existing binding is found anywhere in the chain. Used for plain
    /// (non-`let`) assignment.
    pub fn set(&self, name: &str, value: Value) {
        tag_function_name(&value, name);
        let mut frame = Some(self.clone());
        while let Some(Env(f)) = frame {
            let mut vars = f.vars.borrow_mut();
            if let Some(slot) = vars.iter_mut().rev().find(|(n, _)| n == name) {
                slot.1 = value;
                return;
            }
            drop(vars);
            frame = f.parent.clone();
        }
        self.set_local(name, value);
    }

    /// Removes `name` from the current frame, if present. The embedding
    /// analogue of `env_set(e, name, NULL)` in the original's host API
    /// (see `test.c`).
    pub fn unset(&self, name: &str) {
        let mut vars = self.0.vars.borrow_mut();
        if let Some(idx) = vars.iter().rposition(|(n, _)| n == name) {
            vars.remove(idx);
        }
    }
}

/// If `value` is an as-yet-unnamed function, tag it with `name` the
/// moment it's bound — matches `env_set_local`/`env_set`'s side effect
/// in the original, which is what makes a recursive `let fact = fn(n) {
/// ... fact(n - 1) ... }` display as `<function:fact at ...>` instead of
/// `<function:anonymous at ...>`.
fn tag_function_name(value: &Value, name: &str) {
    if let Value::Function(f) = value {
        let mut slot = f.name.borrow_mut();
        if slot.is_none() {
            *slot = Some(Rc::from(name));
        }
    }
}
