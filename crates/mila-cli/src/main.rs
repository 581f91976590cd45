//! The `mila` command-line front door: runs a script file, or drops
//! into a REPL when given none.
//!
//! Ported from `main` in `original_source/mila.c`: `--info`/
//! `--version`/`-v`/`--help`/`-h` short-circuit before any file is
//! touched, a bare file argument runs that script with the remaining
//! arguments (the file path included, matching the original's own
//! off-by-one-looking-but-intentional `argv` slice) bound to `argv`,
//! and no arguments at all starts the read/accumulate/evaluate REPL
//! built on [`mila::needs_more_input`]'s bracket-balance probe.

use std::{
    env,
    io::{self, Write as _},
    process::ExitCode,
};

use mila::{Interpreter, Value};

const VERSION_TEXT: &str = "MiLa Specification v1.0\nCLI v1.0\nAPI v1.0\n";

const HELP_TEXT: &str = "MiLa v1.0\n\
  --info         = For internal info as well as version info\n\
  --version | -v = Prints version\n\
  --help    | -h = Prints this list\n";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.len() == 2 {
        match args[1].as_str() {
            "--info" => {
                print_info();
                return ExitCode::SUCCESS;
            }
            "--version" | "-v" => {
                print!("{VERSION_TEXT}");
                return ExitCode::SUCCESS;
            }
            "--help" | "-h" => {
                print!("{HELP_TEXT}");
                return ExitCode::SUCCESS;
            }
            _ => {}
        }
    }

    if args.len() >= 2 {
        run_file(&args[1..])
    } else {
        run_repl();
        ExitCode::SUCCESS
    }
}

/// `--info`: an internal diagnostic dump. Reports the size of
/// [`mila::Value`] and this port's number-literal scratch constant, the
/// analogues of the original's `sizeof(Value)`/`MAX_NUMBER_DIGITS` —
/// see `SPEC_FULL.md` §6 for why these aren't claimed to be byte-for-
/// byte identical to the C struct layout.
fn print_info() {
    println!(
        "MiLa - Info\nVersion: 1.0\n\nVariable size: {} Bytes\nMax num digits: {}\n",
        std::mem::size_of::<Value>(),
        MAX_NUMBER_DIGITS
    );
}

/// Matches the original's `MAX_NUMBER_DIGITS` (the size of its
/// number-parsing scratch buffer); this port's number literal parsing
/// has no fixed-size buffer to overflow, so this is reported purely for
/// `--info` parity, not enforced anywhere.
const MAX_NUMBER_DIGITS: i32 = 32;

fn run_file(file_args: &[String]) -> ExitCode {
    let path = &file_args[0];
    let source = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(_) => {
            eprintln!("Cannot open {path}");
            return ExitCode::FAILURE;
        }
    };

    let mut interp = Interpreter::new();
    if let Ok(cwd) = env::current_dir() {
        interp.add_search_root(cwd.to_string_lossy().into_owned());
    }
    interp.add_search_root("~/mila_lib");

    let argv = mila::builtins::array_from(file_args.iter().map(|a| Value::string(a.clone())).collect());
    interp.global().set_local("argv", argv);

    interp.eval(&source);
    ExitCode::SUCCESS
}

fn run_repl() {
    println!("MiLa 1.0 - REPL");
    let mut interp = Interpreter::new();
    if let Ok(cwd) = env::current_dir() {
        interp.add_search_root(cwd.to_string_lossy().into_owned());
    }
    interp.add_search_root("~/mila_lib");

    let mut buffer = String::new();
    print!(">>> ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    loop {
        line.clear();
        if io::stdin().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        buffer.push_str(&line);

        if mila::needs_more_input(&buffer) {
            print!("... ");
        } else {
            let result = interp.eval_raw(&buffer);
            if !matches!(result, Value::Null) {
                print!("  : ");
                println!("{}", result.display());
            }
            buffer.clear();
            print!(">>> ");
        }
        let _ = io::stdout().flush();
    }
}
