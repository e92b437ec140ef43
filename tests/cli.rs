use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

const SAMPLE: &str = "10.32.89.34 x\n10.32.89.34 y\n10.0.0.1 z\n172.32.9.12 w\n";

fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_ipcount"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn ipcount");

    // The process may exit before reading stdin, e.g. on a usage error.
    let mut stdin = child.stdin.take().expect("stdin is piped");
    let _ = stdin.write_all(input.as_bytes());
    drop(stdin);

    child.wait_with_output().expect("failed to wait for ipcount")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is utf-8")
}

fn temp_log(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("ipcount-{}-{}.log", name, std::process::id()));
    fs::write(&path, contents).expect("failed to write temp log");
    path
}

#[test]
fn default_report_from_stdin() {
    let output = run_with_stdin(&[], SAMPLE);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "2 10.32.89.34\n1 10.0.0.1\n1 172.32.9.12\n");
}

#[test]
fn sort_by_ip_ignores_case() {
    let output = run_with_stdin(&["--sort", "IP"], SAMPLE);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "1 10.0.0.1\n2 10.32.89.34\n1 172.32.9.12\n");
}

#[test]
fn top_and_file_input() {
    let path = temp_log("top", SAMPLE);
    let output = run_with_stdin(&["--file", path.to_str().unwrap(), "--top", "1"], "");
    fs::remove_file(&path).ok();

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "2 10.32.89.34\n");
}

#[test]
fn strict_mode_can_empty_the_report() {
    let output = run_with_stdin(&["--strict"], "999.999.999.999 bad\n");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let output = run_with_stdin(&["--strict", "--no-strict"], "999.999.999.999 bad\n");
    assert_eq!(stdout_of(&output), "1 999.999.999.999\n");
}

#[test]
fn empty_input_prints_nothing() {
    let output = run_with_stdin(&[], "");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let output = run_with_stdin(&["--top", "-1"], "no addresses here\n");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_file_fails_before_scanning() {
    let output = run_with_stdin(&["--file", "/nonexistent/ipcount/input.log"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR"), "not logged: {}", stderr);
    assert!(stderr.contains("Input file not found"));
}

#[test]
fn bad_sort_mode_is_a_usage_error() {
    let output = run_with_stdin(&["--sort", "size"], SAMPLE);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
