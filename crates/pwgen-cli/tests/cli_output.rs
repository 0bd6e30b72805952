use std::process::{Command, Output};

fn pwgen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pwgen"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run pwgen")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .expect("utf8 stdout")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn seeded_run_prints_one_password_per_line() {
    let output = pwgen(&["--seed", "11", "-1", "12", "4"]);
    assert!(output.status.success(), "{output:?}");
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 4);
    for line in &lines {
        assert_eq!(line.len(), 12);
        assert!(line.chars().any(|ch| ch.is_ascii_digit()), "{line}");
        assert!(line.chars().any(|ch| ch.is_ascii_uppercase()), "{line}");
    }

    let again = pwgen(&["--seed", "11", "-1", "12", "4"]);
    assert_eq!(stdout_lines(&again), lines);
}

#[test]
fn column_mode_packs_rows() {
    let output = pwgen(&["--seed", "3", "-C", "8", "30"]);
    assert!(output.status.success(), "{output:?}");
    let lines = stdout_lines(&output);
    let total: usize = lines.iter().map(|line| line.split(' ').count()).sum();
    assert_eq!(total, 30);
    for line in &lines {
        assert!(line.split(' ').all(|password| password.len() == 8), "{line}");
    }
}

#[test]
fn secure_mode_without_vowels() {
    let output = pwgen(&["--seed", "5", "-1", "-v", "16", "20"]);
    assert!(output.status.success(), "{output:?}");
    for line in stdout_lines(&output) {
        assert!(!line.chars().any(|ch| "01aeiouyAEIOUY".contains(ch)), "{line}");
    }
}

#[test]
fn print_config_emits_toml() {
    let output = pwgen(&["--print-config", "-y", "14"]);
    assert!(output.status.success(), "{output:?}");
    let text = String::from_utf8(output.stdout).expect("utf8");
    assert!(text.contains("policy_version = \"0.1\""), "{text}");
    assert!(text.contains("[policy]"), "{text}");
    assert!(text.contains("length = 14"), "{text}");
    assert!(text.contains("require_symbol = true"), "{text}");
}

#[test]
fn zero_length_fails() {
    let output = pwgen(&["--seed", "1", "0"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn zero_count_fails() {
    let output = pwgen(&["--seed", "1", "10", "0"]);
    assert!(!output.status.success());
}

#[test]
fn report_goes_to_stderr() {
    let output = pwgen(&["--seed", "2", "--report", "-1", "10", "2"]);
    assert!(output.status.success(), "{output:?}");
    let stderr = String::from_utf8(output.stderr.clone()).expect("utf8");
    assert!(stderr.contains("\"attempts\""), "{stderr}");
    assert_eq!(stdout_lines(&output).len(), 2);
}
