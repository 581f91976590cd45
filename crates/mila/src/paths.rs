//! Path resolution for `open`, `run`, and `load`: `~`/`$VAR` expansion,
//! separator normalization, then a verbatim-path-first, search-roots-
//! fallback lookup.
//!
//! The original's actual `path_list_find` implementation was not among
//! the files retrieved from `original_source/` (only the `path_list`
//! struct declaration survived the retrieval's filtering), so this is
//! written directly from the external-interface contract rather than
//! ported line-for-line. See `DESIGN.md` for the resulting Open
//! Question: the original's *call sites* for this search (`native_open`,
//! `native_run`) check a global that's always non-null by the time
//! `main` has run, making the original's search-roots fallback
//! effectively dead code in practice. This port implements the full
//! verbatim-then-search-roots algorithm rather than reproducing that
//! dead branch, since the fuller algorithm is what the interpreter's
//! contract actually documents.

use std::path::{Path, PathBuf};

/// Expands a leading `~` to `$HOME`, expands `$VAR`/`${VAR}` references,
/// and normalizes path separators (collapsing duplicates, mapping `/`
/// to the platform separator).
///
/// Tilde and environment expansion are both done by hand here, reading
/// `std::env::var` directly — matching the teacher crate's own
/// `expanduser`-style helper, which likewise reads `$HOME` manually
/// rather than pulling in a `dirs` dependency for it.
#[must_use]
pub fn expand_path(raw: &str) -> String {
    let mut s = raw.to_string();
    if let Some(rest) = s.strip_prefix('~') {
        if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') {
            if let Ok(home) = std::env::var("HOME") {
                s = format!("{home}{rest}");
            }
        }
    }
    s = expand_env_vars(&s);
    normalize_separators(&s)
}

fn expand_env_vars(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'$' && i + 1 < bytes.len() {
            if bytes[i + 1] == b'{' {
                if let Some(end) = input[i + 2..].find('}') {
                    let name = &input[i + 2..i + 2 + end];
                    out.push_str(&std::env::var(name).unwrap_or_default());
                    i += 2 + end + 1;
                    continue;
                }
            } else if is_env_ident_start(bytes[i + 1]) {
                let start = i + 1;
                let mut end = start;
                while end < bytes.len() && is_env_ident_continue(bytes[end]) {
                    end += 1;
                }
                let name = &input[start..end];
                out.push_str(&std::env::var(name).unwrap_or_default());
                i = end;
                continue;
            }
        }
        // Advance by one full UTF-8 char, not one byte, so a `$` test
        // against a multi-byte character's lead byte never splits it.
        let rest = &input[i..];
        let ch = rest.chars().next().expect("i < bytes.len() so a char remains");
        out.push(ch);
        i += ch.len_utf8();
    }
    out
}

fn is_env_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_env_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn normalize_separators(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last_was_sep = false;
    for ch in input.chars() {
        let is_sep = ch == '/' || ch == '\\';
        if is_sep {
            if !last_was_sep {
                out.push(std::path::MAIN_SEPARATOR);
            }
            last_was_sep = true;
        } else {
            out.push(ch);
            last_was_sep = false;
        }
    }
    out
}

/// Resolves `name` against an ordered list of search roots: the
/// expanded path is tried verbatim first, then each root joined with
/// it in order. Returns the first candidate that exists on disk, or
/// `None` if none do.
#[must_use]
pub fn resolve(name: &str, search_roots: &[String]) -> Option<PathBuf> {
    let expanded = expand_path(name);
    let verbatim = PathBuf::from(&expanded);
    if verbatim.exists() {
        return Some(verbatim);
    }
    for root in search_roots {
        let candidate = Path::new(&expand_path(root)).join(&expanded);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}
