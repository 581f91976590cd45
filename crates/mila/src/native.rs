//! Dynamic-library loading for the `load(path)` builtin.
//!
//! A native library exports a well-known symbol, `lib_functions`: a
//! null-terminated array of C-string names. Each name is re-resolved as
//! its own exported symbol and bound into the calling environment under
//! that name, with the standard native-function signature
//! `(env, argc, argv) -> Value` (ported here as the same `NativeFn`
//! closures the built-in natives use).
//!
//! The original interpreter hand-rolls this with `dlopen`/`dlsym` vs.
//! `LoadLibraryA`/`GetProcAddress` behind a `#ifdef _WIN32`. The port
//! uses the `libloading` crate instead (the same crate a sibling
//! interpreter in this pack's reference set uses for its own native
//! plugin loading) — it is exactly the safe, cross-platform wrapper
//! around that POSIX/Win32 pair, so there's no reason to hand-roll the
//! `cfg` branches again.

use std::{ffi::CStr, os::raw::c_char};

use libloading::{Library, Symbol};

use crate::{env::Env, error::LoadError, value::NativeFn, Value};

/// The exported symbol every MiLa native library must provide: a
/// null-terminated array of null-terminated C-string function names.
const SYMBOL_TABLE_NAME: &[u8] = b"lib_functions\0";

/// Raw C ABI shape a loaded native function must have — mirrors the
/// original's `NativeFn` typedef as actually used (the header's
/// `line_pos` parameter is declared but never read by any real native;
/// the port follows the 3-argument contract every implementation
/// actually has, see `SPEC_FULL.md` §4.6).
pub type RawNativeFn = unsafe extern "C" fn(argc: i32, argv: *const *const Value) -> *mut Value;

/// A loaded native library, kept alive for as long as any function it
/// exported might still be called.
pub struct NativeLibrary {
    #[expect(dead_code, reason = "kept only to extend the dlopen handle's lifetime")]
    lib: Library,
    pub names: Vec<String>,
}

/// Loads `path` as a native library and returns the `(name, NativeFn)`
/// pairs it exports via `lib_functions`, along with the handle that
/// must be kept alive afterward.
///
/// # Errors
/// Returns a [`LoadError`] if the library cannot be opened or does not
/// export `lib_functions`. An individual unresolved name inside the
/// table is a warning (the rest of the table still loads), matching
/// the original's behavior.
pub fn load_library(path: &str) -> Result<(NativeLibrary, Vec<(String, NativeFn)>), LoadError> {
    // Safety: `Library::new` executes the target's static initializers;
    // this is inherently unsafe for any dlopen-style API. Confined to
    // this one call, matching how `libloading` itself recommends using it.
    let lib = unsafe { Library::new(path) }.map_err(|e| LoadError::Open {
        path: path.to_string(),
        message: e.to_string(),
    })?;

    // Safety: reading the raw `lib_functions` symbol as a
    // null-terminated C-string-pointer array is exactly the contract
    // the library author is expected to uphold; there is no way to
    // verify this from the Rust side any more than the original's
    // `dlsym`-based loader could.
    let names: Vec<String> = unsafe {
        let table: Symbol<'_, *const *const c_char> = lib
            .get(SYMBOL_TABLE_NAME)
            .map_err(|_| LoadError::MissingSymbolTable {
                path: path.to_string(),
            })?;
        let mut out = Vec::new();
        let mut p = *table;
        while !p.is_null() && !(*p).is_null() {
            out.push(CStr::from_ptr(*p).to_string_lossy().into_owned());
            p = p.add(1);
        }
        out
    };

    let mut functions = Vec::new();
    for name in &names {
        let mut symbol_name = name.clone().into_bytes();
        symbol_name.push(0);
        // Safety: resolving each listed name as a function symbol with
        // the documented `(argc, argv) -> *mut Value` ABI; a mismatched
        // signature here is a contract violation by the library author.
        let resolved: Result<Symbol<'_, RawNativeFn>, _> = unsafe { lib.get(&symbol_name) };
        match resolved {
            Ok(sym) => {
                let raw: RawNativeFn = *sym;
                let func: NativeFn = wrap_raw_native(raw);
                functions.push((name.clone(), func));
            }
            Err(_) => {
                eprintln!(
                    "{}",
                    LoadError::UnresolvedSymbol {
                        path: path.to_string(),
                        name: name.clone(),
                    }
                );
            }
        }
    }

    Ok((
        NativeLibrary {
            lib,
            names: names.clone(),
        },
        functions,
    ))
}

fn wrap_raw_native(raw: RawNativeFn) -> NativeFn {
    std::rc::Rc::new(move |_interp: &mut crate::Interpreter, _env: &Env, args: &[Value]| -> Value {
        let ptrs: Vec<*const Value> = args.iter().map(|v| v as *const Value).collect();
        // Safety: `raw` is the library-exported function resolved above;
        // it is called with the argument count matching `ptrs.len()` and
        // a pointer valid for that many reads, per the documented ABI.
        let result = unsafe { raw(ptrs.len() as i32, ptrs.as_ptr()) };
        if result.is_null() {
            Value::Null
        } else {
            // Safety: a non-null result is a library-owned `Value` the
            // author is contractually returning by value semantics; we
            // immediately clone out of it and never retain the pointer.
            unsafe { (*result).clone() }
        }
    })
}
