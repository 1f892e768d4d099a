use std::path::PathBuf;
use std::process::{Command, Output};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn run(file: &str, date: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_most-active-cookie"))
        .env_remove("RUST_LOG")
        .arg("-f")
        .arg(fixture(file))
        .arg("-d")
        .arg(date)
        .output()
        .expect("failed to run most-active-cookie")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn prints_most_active_cookie() {
    let output = run("basic_functionality_test.csv", "2018-12-09");
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["AtY0laUfhglK3lC7"]);
}

#[test]
fn prints_all_tied_cookies() {
    let output = run("basic_functionality_test.csv", "2018-12-08");
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        ["SAZuXPGUrfbcn5UA", "4sMM2LxV07bPJzwf", "fbcn5UAVanZf6UtG"]
    );

    let output = run("multiple_active_cookies_test.csv", "2018-12-09");
    assert_eq!(stdout_lines(&output), ["cookieA", "cookieB"]);
}

#[test]
fn header_only_file_prints_nothing() {
    let output = run("empty_file_test.csv", "2018-12-09");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn no_matching_date_prints_nothing() {
    let output = run("no_matching_date_test.csv", "2018-12-09");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn single_entry() {
    let output = run("single_entry_test.csv", "2018-12-09");
    assert_eq!(stdout_lines(&output), ["singleCookie"]);
}

#[test]
fn boundary_timestamps_stay_on_their_day() {
    let output = run("boundary_date_test.csv", "2018-12-09");
    assert_eq!(stdout_lines(&output), ["cookieCorrect"]);
}

#[test]
fn malformed_rows_warn_on_stderr_only() {
    let output = run("invalid_format_test.csv", "2018-12-09");
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["validCookie"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid date format in row"));
    assert!(stderr.contains("brokenCookie"));
}

#[test]
fn extra_trailing_field_still_counts() {
    let output = run("extra_field_test.csv", "2018-12-09");
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["cookieB"]);
}

#[test]
fn short_row_stops_without_printing_a_partial_answer() {
    let output = run("short_row_test.csv", "2018-12-09");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Stopped reading cookie log"));
}

#[test]
fn padded_date_is_rejected() {
    let output = run("single_entry_test.csv", " 2018-12-09 ");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_file_fails() {
    let output = run("nonexistent.csv", "2018-12-09");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid file path"));
}

#[test]
fn bad_date_fails_before_reading() {
    let output = run("nonexistent.csv", "12-09-2018");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid date format"));
}

#[test]
fn missing_flags_is_a_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_most-active-cookie"))
        .arg("-d")
        .arg("2018-12-09")
        .output()
        .expect("failed to run most-active-cookie");
    assert!(!output.status.success());
}

#[test]
fn generated_log_round_trips_through_the_analyzer() {
    let path = std::env::temp_dir().join(format!("cookie_gen_{}.csv", std::process::id()));
    let status = Command::new(env!("CARGO_BIN_EXE_cookie-gen"))
        .env_remove("RUST_LOG")
        .arg("-o")
        .arg(&path)
        .args(["--days", "3", "--per-day", "6", "--cookies", "2", "--seed", "11"])
        .status()
        .expect("failed to run cookie-gen");
    assert!(status.success());

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("cookie,timestamp\n"));
    assert_eq!(contents.lines().count(), 19);

    let first_row = contents.lines().nth(1).unwrap();
    let first_day = &first_row.split(',').nth(1).unwrap()[..10];
    let output = Command::new(env!("CARGO_BIN_EXE_most-active-cookie"))
        .env_remove("RUST_LOG")
        .arg("-f")
        .arg(&path)
        .arg("-d")
        .arg(first_day)
        .output()
        .expect("failed to run most-active-cookie");
    std::fs::remove_file(&path).ok();

    assert!(output.status.success());
    let winners = stdout_lines(&output);
    assert!(!winners.is_empty() && winners.len() <= 2);
}
