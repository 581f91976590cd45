//! `open`/`fprint`/`fread`/`fseek`/`ftell`/`fclose` against a real file
//! on disk, plus `open`'s `Null`-on-failure contract for an unknown
//! mode or missing path.

mod support;

use mila::Value;
use support::eval_raw_capture;

fn temp_path(name: &str) -> String {
    std::env::temp_dir().join(name).to_string_lossy().into_owned()
}

#[test]
fn write_then_read_back_round_trips() {
    let path = temp_path("mila_file_io_roundtrip.txt");
    let _ = std::fs::remove_file(&path);

    let script = format!(
        r#"let f = open("{path}", "w");
           fprint(f, "hello");
           fclose(f);
           let g = open("{path}", "r");
           let text = fread(g, 5);
           fclose(g);
           text"#
    );
    let (result, _) = eval_raw_capture(&script);
    match result {
        Value::String(s) => assert_eq!(*s.borrow(), "hello"),
        other => panic!("expected a string, got {other:?}"),
    }

    std::fs::remove_file(&path).ok();
}

#[test]
fn seek_then_tell_reports_the_new_position() {
    let path = temp_path("mila_file_io_seek.txt");
    std::fs::write(&path, "0123456789").unwrap();

    let script = format!(
        r#"let f = open("{path}", "r");
           fseek(f, 4, SEEK_SET);
           let pos = ftell(f);
           fclose(f);
           pos"#
    );
    let (result, _) = eval_raw_capture(&script);
    match result {
        Value::Int(n) => assert_eq!(n, 4),
        other => panic!("expected Int(4), got {other:?}"),
    }

    std::fs::remove_file(&path).ok();
}

#[test]
fn opening_a_missing_file_for_reading_is_null() {
    let (result, _) = eval_raw_capture(r#"open("/definitely/does/not/exist.txt", "r")"#);
    assert!(matches!(result, Value::Null));
}

#[test]
fn opening_with_an_unrecognized_mode_is_null() {
    let path = temp_path("mila_file_io_badmode.txt");
    std::fs::write(&path, "").unwrap();
    let script = format!(r#"open("{path}", "nonsense")"#);
    let (result, _) = eval_raw_capture(&script);
    assert!(matches!(result, Value::Null));
    std::fs::remove_file(&path).ok();
}

#[test]
fn fprint_to_stdout_returns_bytes_written() {
    let (result, out) = eval_raw_capture(r#"fprint(stdout, "hi")"#);
    match result {
        Value::Int(n) => assert_eq!(n, 2),
        other => panic!("expected Int(2), got {other:?}"),
    }
    // fprint writes straight to the process's real stdout, not through
    // the configured print sink, so the captured sink sees nothing.
    assert_eq!(out, "");
}
