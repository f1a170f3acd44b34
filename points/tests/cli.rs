use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_points(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_points"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(stdin.as_bytes()).unwrap();
    child.wait_with_output().unwrap()
}

const BRANCHES: &str = "5\n2 2 3\n2 4 5\n0\n0\n0\n5\n5\n4\n5\n0\n6\n";

#[test]
fn answers_on_stdout() {
    let out = run_points(&[], BRANCHES);
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "1\n1\n1\n-1\n-1\n");
    assert!(out.stderr.is_empty());
}

#[test]
fn trace_stays_on_stderr() {
    let out = run_points(&["-vv"], BRANCHES);
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "1\n1\n1\n-1\n-1\n");
    let err = String::from_utf8(out.stderr).unwrap();
    assert!(err.contains("city 2: children: 4 5 (switch -> 4), parent: 1"));
    assert!(err.contains("path: 1 2 5"));
}

#[test]
fn input_and_output_files() {
    let dir = std::env::temp_dir();
    let input = dir.join(format!("points-cli-{}.in", std::process::id()));
    let output = dir.join(format!("points-cli-{}.out", std::process::id()));
    std::fs::write(&input, BRANCHES).unwrap();
    let out = run_points(&[input.to_str().unwrap(), "-o", output.to_str().unwrap()], "");
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "1\n1\n1\n-1\n-1\n");
    let _ = std::fs::remove_file(&input);
    let _ = std::fs::remove_file(&output);
}

#[test]
fn text_after_last_query_is_ignored() {
    let out = run_points(&[], &format!("{}end\n", BRANCHES));
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "1\n1\n1\n-1\n-1\n");
    let err = String::from_utf8(out.stderr).unwrap();
    assert!(err.contains("Ignoring input after the last query."));
}

#[test]
fn malformed_input_fails() {
    let out = run_points(&[], "3\n1 2\n1 2\n0\n1\n1\n");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let err = String::from_utf8(out.stderr).unwrap();
    assert!(err.contains("city 2 lists itself as a child"));
}
