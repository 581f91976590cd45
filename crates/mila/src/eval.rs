//! The fused parser/evaluator: every grammar production both consumes
//! source text from a [`Cursor`] and produces a [`Value`] in the same
//! step. There is no intermediate AST — a `while` loop re-evaluates its
//! condition by rewinding the cursor to a saved position, and a
//! function call re-parses its saved body text from scratch.
//!
//! Grammar (see `SPEC_FULL.md` §4.4 for the full prose):
//!
//! ```text
//! statement := let | break | continue | return | if | while
//!            | "block" IDENT block | catch | block | expr ";"?
//! let       := "let" IDENT ("=" expr | ":" statement)? ";"?
//! if        := "if" "(" expr ")" body ("elif" "(" expr ")" body)* ("else" body)?
//! while     := "while" "(" expr ")" "{" statement* "}"
//! block     := "{" statement* "}"
//! ```
//!
//! Binary operator precedence (1 lowest .. 8 highest, all left-assoc):
//! `||`(1) `&&`(2) `?`(3, reserved) `==`/`!=`(4) `<<`/`>>`(5)
//! `<`/`>`/`<=`/`>=`(6) `+`/`-`(7) `*`/`/`/`%`(8). Both operands of `||`
//! and `&&` are always evaluated — there is no short-circuiting
//! (`SPEC_FULL.md` §9).

use std::{cell::RefCell, rc::Rc};

use crate::{cursor::Cursor, env::Env, value::FunctionData, Interpreter, Value};

/// Evaluates `source` as a top-level program: statements run in
/// sequence against `env` (no fresh child frame — top-level `let`s land
/// directly in `env`). The first top-level statement that evaluates to
/// `Value::Error` is reported to stderr as `= Error: <message>` and
/// `Value::Null` is returned immediately, matching the original
/// interpreter's `eval_source`. Any other sentinel (`Return`/`Break`/
/// `Continue`) occurring at top level is treated as an ordinary value
/// and does not stop the program.
pub fn eval_source(source: &str, env: &Env, interp: &mut Interpreter) -> Value {
    let mut cursor = Cursor::new(source);
    let mut last = Value::Null;
    loop {
        cursor.skip_ws();
        if cursor.eof() {
            break;
        }
        let v = eval_statement(&mut cursor, env, interp);
        if let Value::Error(msg) = &v {
            eprintln!("\n= Error: {msg}");
            return Value::Null;
        }
        last = v;
    }
    last
}

/// Evaluates `cursor`'s remaining text as a flat run of statements
/// against `env`, with no special top-level error reporting — used by
/// [`crate::Interpreter::eval_raw`] and the REPL, which want to inspect
/// whatever value (including a raw `Error`) evaluation produced.
pub(crate) fn eval_block_top_level(cursor: &mut Cursor<'_>, env: &Env, interp: &mut Interpreter) -> Value {
    let mut last = Value::Null;
    loop {
        cursor.skip_ws();
        if cursor.eof() {
            break;
        }
        last = eval_statement(cursor, env, interp);
    }
    last
}

/// Returns whether `buffer` looks like an incomplete program: inside an
/// unterminated string literal, or with more `(`/`{` opened than closed.
/// Used by a REPL to decide whether to keep accumulating lines before
/// evaluating. Ported from the original's `needs_more` heuristic,
/// including its quirk of not understanding an escaped backslash
/// immediately before a quote — see `SPEC_FULL.md` §4.7.
#[must_use]
pub fn needs_more_input(buffer: &str) -> bool {
    let bytes = buffer.as_bytes();
    let mut parens = 0i32;
    let mut braces = 0i32;
    let mut in_string = false;
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'"' && (i == 0 || bytes[i - 1] != b'\\') {
            in_string = !in_string;
        } else if !in_string {
            match b {
                b'(' => parens += 1,
                b')' => parens -= 1,
                b'{' => braces += 1,
                b'}' => braces -= 1,
                _ => {}
            }
        }
    }
    in_string || parens > 0 || braces > 0
}

fn is_sentinel(v: &Value) -> bool {
    matches!(v, Value::Return(_) | Value::Break | Value::Continue | Value::Error(_))
}

/// Evaluates a `{ ... }` block body (cursor already past the opening
/// `{`): statements run in sequence until the closing `}` (or, for a
/// non-block caller, end of input). The first sentinel value produced
/// stops evaluation immediately, and the cursor is advanced past the
/// rest of the block's source so the caller's position stays correct.
fn eval_statements(cursor: &mut Cursor<'_>, env: &Env, interp: &mut Interpreter, in_block: bool) -> Value {
    let mut result = Value::Null;
    loop {
        cursor.skip_ws();
        if cursor.eof() {
            break;
        }
        if in_block && cursor.peek() == b'}' {
            cursor.advance();
            break;
        }
        let v = eval_statement(cursor, env, interp);
        let sentinel = is_sentinel(&v);
        result = v;
        if sentinel {
            if in_block {
                cursor.skip_to_block_end();
            }
            break;
        }
    }
    result
}

fn eval_brace_block(cursor: &mut Cursor<'_>, env: &Env, interp: &mut Interpreter) -> Value {
    cursor.skip_ws();
    cursor.match_char(b'{');
    let child = env.child();
    eval_statements(cursor, &child, interp, true)
}

// ---------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------

fn eval_statement(cursor: &mut Cursor<'_>, env: &Env, interp: &mut Interpreter) -> Value {
    cursor.skip_ws();
    if cursor.eof() {
        return Value::Null;
    }
    if cursor.is_keyword_at("let") {
        return eval_let(cursor, env, interp);
    }
    if cursor.is_keyword_at("break") {
        cursor.consume_keyword("break");
        cursor.skip_ws();
        cursor.match_char(b';');
        return Value::Break;
    }
    if cursor.is_keyword_at("continue") {
        cursor.consume_keyword("continue");
        cursor.skip_ws();
        cursor.match_char(b';');
        return Value::Continue;
    }
    if cursor.is_keyword_at("return") {
        cursor.consume_keyword("return");
        cursor.skip_ws();
        let v = if cursor.peek() == b';' || cursor.peek() == b'}' {
            Value::Null
        } else {
            eval_expr(cursor, env, interp)
        };
        cursor.skip_ws();
        cursor.match_char(b';');
        return Value::Return(Box::new(v));
    }
    if cursor.is_keyword_at("if") {
        return eval_if(cursor, env, interp);
    }
    if cursor.is_keyword_at("while") {
        return eval_while(cursor, env, interp);
    }
    if cursor.is_keyword_at("block") {
        return eval_named_block(cursor, env, interp);
    }
    if cursor.is_keyword_at("catch") {
        return eval_catch(cursor, env, interp);
    }
    if cursor.peek() == b'{' {
        return eval_brace_block(cursor, env, interp);
    }
    let v = eval_expr(cursor, env, interp);
    cursor.skip_ws();
    cursor.match_char(b';');
    v
}

fn eval_let(cursor: &mut Cursor<'_>, env: &Env, interp: &mut Interpreter) -> Value {
    cursor.consume_keyword("let");
    cursor.skip_ws();
    let name = cursor.parse_ident();
    cursor.skip_ws();
    let result = match cursor.peek() {
        b'=' => {
            cursor.advance();
            let v = eval_expr(cursor, env, interp);
            cursor.skip_ws();
            cursor.match_char(b';');
            v
        }
        b':' => {
            cursor.advance();
            eval_statement(cursor, env, interp)
        }
        _ => {
            cursor.skip_ws();
            cursor.match_char(b';');
            Value::None
        }
    };
    let bound = match result {
        Value::Return(inner) => *inner,
        other => other,
    };
    // Matches the original's `let`: it calls `env_set`, not
    // `env_set_local` — a `let` inside a nested block/loop body updates
    // an existing binding in the nearest enclosing frame that has one,
    // and only creates a new local slot when no such binding exists
    // anywhere up the chain. See `SPEC_FULL.md` §8 scenario 4 (the
    // `while`-loop accumulator), whose `10` result depends on this.
    env.set(&name, bound.clone());
    bound
}

fn eval_expr_in_parens(cursor: &mut Cursor<'_>, env: &Env, interp: &mut Interpreter) -> Value {
    cursor.skip_ws();
    cursor.match_char(b'(');
    let v = eval_expr(cursor, env, interp);
    cursor.skip_ws();
    cursor.match_char(b')');
    v
}

fn eval_branch_body(cursor: &mut Cursor<'_>, env: &Env, interp: &mut Interpreter) -> Value {
    cursor.skip_ws();
    if cursor.peek() == b'{' {
        eval_brace_block(cursor, env, interp)
    } else {
        eval_statement(cursor, env, interp)
    }
}

fn skip_branch_body(cursor: &mut Cursor<'_>) {
    cursor.skip_ws();
    if cursor.peek() == b'{' {
        cursor.skip_block();
    } else {
        cursor.skip_stmt();
    }
}

/// After a branch of an `if`/`elif`/`else` chain has been taken and
/// evaluated, textually skips every remaining `elif`/`else` clause so
/// the cursor lands just past the whole chain.
fn clean_elif_chain(cursor: &mut Cursor<'_>) {
    loop {
        cursor.skip_ws();
        if cursor.is_keyword_at("elif") {
            cursor.consume_keyword("elif");
            cursor.skip_ws();
            cursor.skip_expr();
            skip_branch_body(cursor);
            continue;
        }
        if cursor.is_keyword_at("else") {
            cursor.consume_keyword("else");
            skip_branch_body(cursor);
        }
        break;
    }
}

fn eval_if(cursor: &mut Cursor<'_>, env: &Env, interp: &mut Interpreter) -> Value {
    cursor.consume_keyword("if");
    cursor.skip_ws();
    let cond = eval_expr_in_parens(cursor, env, interp);
    if cond.is_truthy() {
        let result = eval_branch_body(cursor, env, interp);
        clean_elif_chain(cursor);
        return result;
    }
    skip_branch_body(cursor);
    loop {
        cursor.skip_ws();
        if cursor.is_keyword_at("elif") {
            cursor.consume_keyword("elif");
            cursor.skip_ws();
            let cond = eval_expr_in_parens(cursor, env, interp);
            if cond.is_truthy() {
                let result = eval_branch_body(cursor, env, interp);
                clean_elif_chain(cursor);
                return result;
            }
            skip_branch_body(cursor);
            continue;
        }
        if cursor.is_keyword_at("else") {
            cursor.consume_keyword("else");
            return eval_branch_body(cursor, env, interp);
        }
        break;
    }
    Value::Null
}

/// `while`'s cursor-rewind loop discipline: the condition-start,
/// body-start, and body-end positions are each recorded once, up
/// front, and the loop rewinds to them directly rather than
/// re-discovering them every iteration (`SPEC_FULL.md` §9).
///
/// A `continue` inside the body is **not** restarted from the top of
/// the loop: it is retained and returned as-is after rewinding past the
/// body, meaning `continue` in a `while` loop actually exits the loop
/// and propagates a `Continue` sentinel outward. This is the original
/// interpreter's real, load-bearing behavior, not a bug to "fix" here.
fn eval_while(cursor: &mut Cursor<'_>, env: &Env, interp: &mut Interpreter) -> Value {
    cursor.consume_keyword("while");
    cursor.skip_ws();
    let cond_start = cursor.pos();
    cursor.skip_expr();
    cursor.skip_ws();
    let body_start = cursor.pos();
    cursor.skip_block();
    let body_end = cursor.pos();

    loop {
        cursor.set_pos(cond_start);
        let cond = eval_expr_in_parens(cursor, env, interp);
        if !cond.is_truthy() {
            cursor.set_pos(body_end);
            return Value::Null;
        }
        cursor.set_pos(body_start);
        cursor.skip_ws();
        cursor.match_char(b'{');
        let child = env.child();
        let result = eval_statements(cursor, &child, interp, true);
        match result {
            Value::Break => {
                cursor.set_pos(body_end);
                return Value::Null;
            }
            Value::Continue | Value::Return(_) | Value::Error(_) => {
                cursor.set_pos(body_end);
                return result;
            }
            _ => {}
        }
    }
}

fn eval_named_block(cursor: &mut Cursor<'_>, env: &Env, interp: &mut Interpreter) -> Value {
    cursor.consume_keyword("block");
    cursor.skip_ws();
    let name = cursor.parse_ident();
    let result = eval_brace_block(cursor, env, interp);
    match result {
        Value::Error(msg) => Value::error(format!("Block {name} reported an error: {msg}")),
        other => other,
    }
}

fn eval_catch(cursor: &mut Cursor<'_>, env: &Env, interp: &mut Interpreter) -> Value {
    cursor.consume_keyword("catch");
    let result = eval_brace_block(cursor, env, interp);
    match result {
        Value::Error(_) => Value::Null,
        other => other,
    }
}

// ---------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------

fn precedence_of(op: &str) -> i32 {
    match op {
        "||" => 1,
        "&&" => 2,
        "?" => 3,
        "==" | "!=" => 4,
        "<<" | ">>" => 5,
        "<" | ">" | "<=" | ">=" => 6,
        "+" | "-" => 7,
        "*" | "/" | "%" => 8,
        _ => -1,
    }
}

const TWO_CHAR_OPS: [&str; 8] = ["||", "&&", "==", "!=", "<<", ">>", "<=", ">="];

fn parse_op(cursor: &mut Cursor<'_>) -> Option<&'static str> {
    cursor.skip_ws();
    let two = [cursor.peek(), cursor.peek_at(1)];
    for op in TWO_CHAR_OPS {
        if two[0] == op.as_bytes()[0] && two[1] == op.as_bytes()[1] {
            cursor.advance();
            cursor.advance();
            return Some(op);
        }
    }
    let found = match cursor.peek() {
        b'<' => Some("<"),
        b'>' => Some(">"),
        b'+' => Some("+"),
        b'-' => Some("-"),
        b'*' => Some("*"),
        b'/' => Some("/"),
        b'%' => Some("%"),
        b'?' => Some("?"),
        _ => None,
    };
    if found.is_some() {
        cursor.advance();
    }
    found
}

pub(crate) fn eval_expr(cursor: &mut Cursor<'_>, env: &Env, interp: &mut Interpreter) -> Value {
    eval_expr_prec(cursor, env, interp, 1)
}

fn eval_expr_prec(cursor: &mut Cursor<'_>, env: &Env, interp: &mut Interpreter, min_prec: i32) -> Value {
    let mut lhs = eval_primary(cursor, env, interp);
    loop {
        let save = cursor.clone();
        let Some(op) = parse_op(cursor) else { break };
        let prec = precedence_of(op);
        if prec < min_prec {
            *cursor = save;
            break;
        }
        let rhs = eval_expr_prec(cursor, env, interp, prec + 1);
        lhs = binary_op(op, lhs, rhs);
    }
    lhs
}

fn numeric_pair(lhs: &Value, rhs: &Value) -> Option<(f64, f64, bool)> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => Some((*a as f64, *b as f64, true)),
        (Value::Int(a), Value::Float(b)) => Some((*a as f64, *b, false)),
        (Value::Float(a), Value::Int(b)) => Some((*a, *b as f64, false)),
        (Value::Float(a), Value::Float(b)) => Some((*a, *b, false)),
        _ => None,
    }
}

fn as_ints(lhs: &Value, rhs: &Value) -> Option<(i64, i64)> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => Some((*a, *b)),
        _ => None,
    }
}

fn values_equal(lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Float(a), Value::Float(b)) => a == b,
        (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => (*a as f64) == *b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::String(a), Value::String(b)) => *a.borrow() == *b.borrow(),
        (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
        (Value::Native { func: a, .. }, Value::Native { func: b, .. }) => Rc::ptr_eq(a, b),
        (Value::Opaque(a), Value::Opaque(b)) => Rc::ptr_eq(a, b),
        _ => false,
    }
}

/// Combines two already-evaluated operands. Both sides of `&&`/`||` are
/// always fully evaluated by the caller before this runs — there is no
/// short-circuiting (`SPEC_FULL.md` §9). An operator/type combination
/// this function doesn't recognize silently produces `Value::Null`,
/// matching the original's taxonomy of "unsupported combos are not an
/// error."
fn binary_op(op: &str, lhs: Value, rhs: Value) -> Value {
    if (op == "==" || op == "!=") && (lhs.is_nullish() || rhs.is_nullish()) {
        let eq = lhs.is_nullish() && rhs.is_nullish();
        return Value::Bool(if op == "==" { eq } else { !eq });
    }
    match op {
        "||" => Value::Bool(lhs.is_truthy() || rhs.is_truthy()),
        "&&" => Value::Bool(lhs.is_truthy() && rhs.is_truthy()),
        "+" => {
            if matches!(lhs, Value::String(_)) || matches!(rhs, Value::String(_)) {
                Value::string(format!("{}{}", lhs.display(), rhs.display()))
            } else if let Some((a, b, both_int)) = numeric_pair(&lhs, &rhs) {
                if both_int {
                    Value::Int((a as i64).wrapping_add(b as i64))
                } else {
                    Value::Float(a + b)
                }
            } else {
                Value::Null
            }
        }
        "-" => match numeric_pair(&lhs, &rhs) {
            Some((a, b, true)) => Value::Int((a as i64).wrapping_sub(b as i64)),
            Some((a, b, false)) => Value::Float(a - b),
            None => Value::Null,
        },
        "*" => match numeric_pair(&lhs, &rhs) {
            Some((a, b, true)) => Value::Int((a as i64).wrapping_mul(b as i64)),
            Some((a, b, false)) => Value::Float(a * b),
            None => Value::Null,
        },
        "/" => match numeric_pair(&lhs, &rhs) {
            Some((_, b, _)) if b == 0.0 => Value::error("division by zero"),
            Some((a, b, _)) => Value::Float(a / b),
            None => Value::Null,
        },
        "%" => match as_ints(&lhs, &rhs) {
            Some((_, 0)) => Value::error("modulo by zero"),
            Some((a, b)) => Value::Int(a % b),
            None => Value::Null,
        },
        "<<" => match as_ints(&lhs, &rhs) {
            Some((a, b)) => Value::Int(a.wrapping_shl(b as u32)),
            None => Value::Null,
        },
        ">>" => match as_ints(&lhs, &rhs) {
            Some((a, b)) => Value::Int(a.wrapping_shr(b as u32)),
            None => Value::Null,
        },
        "<" | ">" | "<=" | ">=" => match numeric_pair(&lhs, &rhs) {
            Some((a, b, _)) => Value::Bool(match op {
                "<" => a < b,
                ">" => a > b,
                "<=" => a <= b,
                _ => a >= b,
            }),
            None => Value::Null,
        },
        "==" => Value::Bool(values_equal(&lhs, &rhs)),
        "!=" => Value::Bool(!values_equal(&lhs, &rhs)),
        _ => Value::Null,
    }
}

// ---------------------------------------------------------------------
// Primaries, literals, calls
// ---------------------------------------------------------------------

fn parse_number(cursor: &mut Cursor<'_>) -> Value {
    let start = cursor.pos();
    if cursor.peek() == b'-' || cursor.peek() == b'+' {
        cursor.advance();
    }
    while cursor.peek().is_ascii_digit() {
        cursor.advance();
    }
    let mut is_float = false;
    if cursor.peek() == b'.' && cursor.peek_at(1).is_ascii_digit() {
        is_float = true;
        cursor.advance();
        while cursor.peek().is_ascii_digit() {
            cursor.advance();
        }
    }
    let text = &cursor.source()[start..cursor.pos()];
    if is_float {
        Value::Float(text.parse().unwrap_or(0.0))
    } else {
        Value::Int(text.parse().unwrap_or(0))
    }
}

fn parse_string(cursor: &mut Cursor<'_>) -> Value {
    cursor.advance(); // opening quote
    let mut buf: Vec<u8> = Vec::new();
    loop {
        if cursor.eof() {
            break;
        }
        let b = cursor.get();
        if b == b'"' {
            break;
        }
        if b == b'\\' {
            let esc = cursor.get();
            match esc {
                b'n' => buf.push(b'\n'),
                b't' => buf.push(b'\t'),
                b'r' => buf.push(b'\r'),
                b'\\' => buf.push(b'\\'),
                b'"' => buf.push(b'"'),
                other => {
                    buf.push(b'\\');
                    buf.push(other);
                }
            }
        } else {
            buf.push(b);
        }
    }
    Value::string(String::from_utf8_lossy(&buf).into_owned())
}

fn parse_param_list(cursor: &mut Cursor<'_>) -> Vec<String> {
    cursor.skip_ws();
    cursor.match_char(b'(');
    let mut params = Vec::new();
    cursor.skip_ws();
    if cursor.peek() != b')' {
        loop {
            cursor.skip_ws();
            params.push(cursor.parse_ident());
            cursor.skip_ws();
            if cursor.peek() == b',' {
                cursor.advance();
                continue;
            }
            break;
        }
    }
    cursor.skip_ws();
    cursor.match_char(b')');
    params
}

fn parse_call_args(cursor: &mut Cursor<'_>, env: &Env, interp: &mut Interpreter) -> Vec<Value> {
    cursor.advance(); // opening '('
    let mut args = Vec::new();
    cursor.skip_ws();
    if cursor.peek() != b')' {
        loop {
            args.push(eval_expr(cursor, env, interp));
            cursor.skip_ws();
            if cursor.peek() == b',' {
                cursor.advance();
                continue;
            }
            break;
        }
    }
    cursor.skip_ws();
    cursor.match_char(b')');
    args
}

fn call_value(callee: Value, name: &str, args: Vec<Value>, env: &Env, interp: &mut Interpreter) -> Value {
    match callee {
        Value::Native { func, .. } => func(interp, env, &args),
        Value::Function(f) => call_script_function(&f, args, interp),
        Value::Null => Value::error(format!("Undefined function '{name}'")),
        _ => Value::Null,
    }
}

pub(crate) fn call_script_function(f: &Rc<FunctionData>, args: Vec<Value>, interp: &mut Interpreter) -> Value {
    let frame = f.closure.child();
    for (i, param) in f.params.iter().enumerate() {
        frame.set_local(param, args.get(i).cloned().unwrap_or(Value::Null));
    }
    let mut cursor = Cursor::new(&f.body);
    cursor.match_char(b'{');
    let result = eval_statements(&mut cursor, &frame, interp, true);
    match result {
        Value::Return(inner) => *inner,
        other => other,
    }
}

fn eval_primary(cursor: &mut Cursor<'_>, env: &Env, interp: &mut Interpreter) -> Value {
    cursor.skip_ws();
    if cursor.eof() {
        return Value::Null;
    }
    let b = cursor.peek();
    if b == b'"' {
        return parse_string(cursor);
    }
    if b == b'(' {
        cursor.advance();
        let v = eval_expr(cursor, env, interp);
        cursor.skip_ws();
        cursor.match_char(b')');
        return v;
    }
    if b == b'.' && cursor.peek_at(1) == b'{' {
        cursor.advance();
        return eval_brace_block(cursor, env, interp);
    }
    if b.is_ascii_digit() || ((b == b'-' || b == b'+') && cursor.peek_at(1).is_ascii_digit()) {
        return parse_number(cursor);
    }
    if Cursor::is_ident_start(b) {
        if cursor.is_keyword_at("fn") {
            cursor.consume_keyword("fn");
            cursor.skip_ws();
            let params = parse_param_list(cursor);
            cursor.skip_ws();
            let body_start = cursor.pos();
            cursor.skip_block();
            let body_text = &cursor.source()[body_start..cursor.pos()];
            return Value::Function(Rc::new(FunctionData {
                params,
                body: Rc::from(body_text),
                name: RefCell::new(None),
                closure: env.clone(),
            }));
        }
        if cursor.is_keyword_at("null") {
            cursor.consume_keyword("null");
            return Value::Null;
        }
        if cursor.is_keyword_at("none") {
            cursor.consume_keyword("none");
            return Value::None;
        }
        if cursor.is_keyword_at("true") {
            cursor.consume_keyword("true");
            return Value::Bool(true);
        }
        if cursor.is_keyword_at("false") {
            cursor.consume_keyword("false");
            return Value::Bool(false);
        }
        let id = cursor.parse_ident();
        cursor.skip_ws();
        if cursor.peek() == b'(' {
            let callee = env.get(&id);
            let args = parse_call_args(cursor, env, interp);
            return call_value(callee, &id, args, env, interp);
        }
        return env.get(&id);
    }
    // Unrecognized byte: consume it so callers never spin in place.
    cursor.advance();
    Value::Null
}
