//! The Source Cursor: a byte-indexed read head over program text.
//!
//! There is no separate lexer. Every grammar production in [`crate::eval`]
//! advances a `Cursor` directly, so the cursor's position doubles as the
//! program counter: saving a `usize` and rewinding to it later (as
//! `while`-loops and `if`/`elif` chains do) is how MiLa re-executes or
//! skips source text without ever building an AST.

/// A read head over a single borrowed source string.
///
/// `Cursor`s are cheap to create and cheap to rewind — a loop body is
/// re-evaluated by resetting `pos`, and a function call re-parses its
/// saved body text from scratch via a brand-new `Cursor` each time it is
/// invoked (see `SPEC_FULL.md` §9, "re-parsing on each call").
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    #[must_use]
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
            line: 1,
        }
    }

    #[must_use]
    pub fn source(&self) -> &'a str {
        self.src
    }

    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos;
    }

    #[must_use]
    pub fn eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    #[must_use]
    pub fn peek(&self) -> u8 {
        self.peek_at(0)
    }

    #[must_use]
    pub fn peek_at(&self, offset: usize) -> u8 {
        self.bytes.get(self.pos + offset).copied().unwrap_or(0)
    }

    /// Consumes and returns the current byte, tracking newlines.
    pub fn get(&mut self) -> u8 {
        let b = self.peek();
        if b == b'\n' {
            self.line += 1;
        }
        if !self.eof() {
            self.pos += 1;
        }
        b
    }

    /// Consumes the current byte without returning it.
    pub fn advance(&mut self) {
        self.get();
    }

    /// Consumes `byte` if it is the current byte, returning whether it
    /// matched.
    pub fn match_char(&mut self, byte: u8) -> bool {
        self.skip_ws();
        if self.peek() == byte {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips whitespace, `//` line comments, and `/* */` block comments.
    pub fn skip_ws(&mut self) {
        loop {
            match self.peek() {
                b' ' | b'\t' | b'\r' | b'\n' => {
                    self.advance();
                }
                b'/' if self.peek_at(1) == b'/' => {
                    while !self.eof() && self.peek() != b'\n' {
                        self.advance();
                    }
                }
                b'/' if self.peek_at(1) == b'*' => {
                    self.advance();
                    self.advance();
                    while !self.eof() && !(self.peek() == b'*' && self.peek_at(1) == b'/') {
                        self.advance();
                    }
                    if !self.eof() {
                        self.advance();
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    #[must_use]
    pub fn is_ident_start(b: u8) -> bool {
        b.is_ascii_alphabetic() || b == b'_'
    }

    #[must_use]
    pub fn is_ident_continue(b: u8) -> bool {
        b.is_ascii_alphanumeric() || b == b'_' || b == b'.'
    }

    /// Parses a bare identifier (or dotted namespace path such as
    /// `array.push`) starting at the current position.
    pub fn parse_ident(&mut self) -> String {
        let start = self.pos;
        while Self::is_ident_continue(self.peek()) {
            self.advance();
        }
        self.src[start..self.pos].to_string()
    }

    /// Matches a keyword at the current position. A keyword only
    /// matches if followed by end-of-input or any non-identifier byte —
    /// `letter` is an identifier, not the `let` keyword followed by
    /// `ter`, but `break;`/`true)` still match `break`/`true` with no
    /// space before the following punctuation (`SPEC_FULL.md` §4.1).
    #[must_use]
    pub fn is_keyword_at(&self, kw: &str) -> bool {
        let rest = &self.src[self.pos..];
        if !rest.starts_with(kw) {
            return false;
        }
        match rest.as_bytes().get(kw.len()) {
            None => true,
            Some(&b) => !Self::is_ident_continue(b),
        }
    }

    /// Consumes a keyword previously confirmed with [`Self::is_keyword_at`].
    pub fn consume_keyword(&mut self, kw: &str) {
        for _ in 0..kw.len() {
            self.advance();
        }
    }

    /// Skips a brace-delimited `{ ... }` block, honoring string literals,
    /// `//` line comments, and balanced nesting. Assumes the cursor is
    /// positioned at the opening `{`.
    pub fn skip_block(&mut self) {
        self.skip_ws();
        if self.peek() != b'{' {
            self.skip_stmt();
            return;
        }
        self.advance();
        self.skip_to_block_end();
    }

    /// Scans forward from a position already one level inside a `{ ... }`
    /// block (i.e. the opening brace has already been consumed) to the
    /// matching closing brace, honoring string literals and `//` line
    /// comments. Used to keep the cursor synchronized with the source
    /// when a block's evaluation stops early on a control-flow sentinel
    /// (`return`/`break`/`continue`/an uncaught error) partway through.
    pub fn skip_to_block_end(&mut self) {
        let mut depth: i32 = 1;
        while !self.eof() && depth > 0 {
            match self.peek() {
                b'"' => self.skip_string(),
                b'/' if self.peek_at(1) == b'/' => {
                    while !self.eof() && self.peek() != b'\n' {
                        self.advance();
                    }
                }
                b'{' => {
                    depth += 1;
                    self.advance();
                }
                b'}' => {
                    depth -= 1;
                    self.advance();
                }
                _ => self.advance(),
            }
        }
    }

    /// Skips a parenthesized `( ... )` expression, honoring string
    /// literals. Assumes the cursor is positioned at the opening `(`.
    pub fn skip_expr(&mut self) {
        self.skip_ws();
        if self.peek() != b'(' {
            return;
        }
        self.advance();
        let mut depth: i32 = 1;
        while !self.eof() && depth > 0 {
            match self.peek() {
                b'"' => self.skip_string(),
                b'(' => {
                    depth += 1;
                    self.advance();
                }
                b')' => {
                    depth -= 1;
                    self.advance();
                }
                _ => self.advance(),
            }
        }
    }

    /// Skips a single statement up to (and including) its terminating
    /// `;`, honoring string literals and nested braces/parens.
    pub fn skip_stmt(&mut self) {
        self.skip_ws();
        let mut depth: i32 = 0;
        loop {
            if self.eof() {
                return;
            }
            match self.peek() {
                b'"' => self.skip_string(),
                b'{' | b'(' => {
                    depth += 1;
                    self.advance();
                }
                b'}' | b')' => {
                    depth -= 1;
                    self.advance();
                }
                b';' if depth <= 0 => {
                    self.advance();
                    return;
                }
                _ => self.advance(),
            }
        }
    }

    /// Skips a double-quoted string literal, including its closing
    /// quote. Assumes the cursor is positioned at the opening `"`.
    fn skip_string(&mut self) {
        self.advance();
        while !self.eof() {
            let b = self.peek();
            if b == b'\\' {
                self.advance();
                if !self.eof() {
                    self.advance();
                }
                continue;
            }
            self.advance();
            if b == b'"' {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_must_not_match_a_longer_identifier() {
        let c = Cursor::new("letter");
        assert!(!c.is_keyword_at("let"));
    }

    #[test]
    fn keyword_matches_when_followed_by_a_paren_or_brace() {
        assert!(Cursor::new("if(true){}").is_keyword_at("if"));
        assert!(Cursor::new("while(true){}").is_keyword_at("while"));
    }

    #[test]
    fn keyword_matches_at_end_of_input() {
        assert!(Cursor::new("break").is_keyword_at("break"));
    }

    #[test]
    fn keyword_matches_when_immediately_followed_by_punctuation() {
        assert!(Cursor::new("break;").is_keyword_at("break"));
        assert!(Cursor::new("continue;").is_keyword_at("continue"));
        assert!(Cursor::new("true)").is_keyword_at("true"));
        assert!(Cursor::new("null,").is_keyword_at("null"));
    }

    #[test]
    fn skip_block_honors_nested_braces_and_strings() {
        let mut c = Cursor::new(r#"{ if (x) { "a}" } } rest"#);
        c.skip_block();
        assert_eq!(&c.source()[c.pos()..], " rest");
    }

    #[test]
    fn parse_ident_includes_dotted_namespace_paths() {
        let mut c = Cursor::new("array.push(a, b)");
        assert_eq!(c.parse_ident(), "array.push");
    }
}
