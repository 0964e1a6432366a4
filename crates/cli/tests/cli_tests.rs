//! CLI integration tests
use std::io::Write;

use predicates::prelude::*;
use tempfile::NamedTempFile;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("examen").unwrap()
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn checks_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_cli_file_input() {
    cmd()
        .args(["-c", &get_fixture_path("checks.json")])
        .args(["-f", &get_fixture_path("sample.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Results from:"));
}

#[test]
fn test_cli_json_output_values() {
    cmd()
        .args(["-c", &get_fixture_path("checks.json")])
        .args(["-f", &get_fixture_path("sample.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""h1": true"#))
        .stdout(predicate::str::contains(r#""span": false"#));
}

#[test]
fn test_cli_text_format() {
    cmd()
        .args(["-c", &get_fixture_path("checks.json")])
        .args(["-f", &get_fixture_path("sample.html")])
        .args(["-o", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pass  h1"))
        .stdout(predicate::str::contains("fail  span"));
}

#[test]
fn test_cli_format_case_insensitive() {
    cmd()
        .args(["-c", &get_fixture_path("checks.json")])
        .args(["-f", &get_fixture_path("sample.html")])
        .args(["-o", "JSON"])
        .assert()
        .success();
}

#[test]
fn test_cli_unknown_format() {
    cmd()
        .args(["-c", &get_fixture_path("checks.json")])
        .args(["-f", &get_fixture_path("sample.html")])
        .args(["-o", "yaml"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("json, text"));
}

#[test]
fn test_cli_missing_checks_file() {
    cmd()
        .args(["-c", "nonexistent_checks.json"])
        .args(["-f", &get_fixture_path("sample.html")])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Checks file not found"));
}

#[test]
fn test_cli_invalid_checks_file() {
    cmd()
        .args(["-c", &get_fixture_path("checks_invalid.json")])
        .args(["-f", &get_fixture_path("sample.html")])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not a JSON array"));
}

#[test]
fn test_cli_no_input() {
    cmd()
        .args(["-c", &get_fixture_path("checks.json")])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No valid input given."));
}

#[test]
fn test_cli_missing_html_file() {
    cmd()
        .args(["-c", &get_fixture_path("checks.json")])
        .args(["-f", "nonexistent.html"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_cli_stdin_input() {
    cmd()
        .args(["-c", &get_fixture_path("checks.json")])
        .args(["-f", "-"])
        .write_stdin(r#"<html><body><h1>Hi</h1><div id="main"></div></body></html>"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Results from: -"))
        .stdout(predicate::str::contains(r#""h1": true"#));
}

#[test]
fn test_cli_invalid_selector_in_checks() {
    let checks = checks_file(r##"["div", "#@!"]"##);

    cmd()
        .args(["-c", checks.path().to_str().unwrap()])
        .args(["-f", &get_fixture_path("sample.html")])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid selector"));
}

#[test]
fn test_cli_duplicate_selectors_collapse() {
    let checks = checks_file(r#"["div", "div"]"#);

    cmd()
        .args(["-c", checks.path().to_str().unwrap()])
        .args(["-f", &get_fixture_path("sample.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""div""#).count(1));
}

#[test]
fn test_cli_malformed_html() {
    let checks = checks_file(r#"["p"]"#);

    cmd()
        .args(["-c", checks.path().to_str().unwrap()])
        .args(["-f", &get_fixture_path("malformed.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""p": true"#));
}

#[test]
fn test_cli_invalid_url() {
    cmd()
        .args(["-c", &get_fixture_path("checks.json")])
        .args(["-u", "not-a-url"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid URL"));
}

#[test]
fn test_cli_unreachable_url_with_good_file_still_succeeds() {
    cmd()
        .args(["-c", &get_fixture_path("checks.json")])
        .args(["-f", &get_fixture_path("sample.html")])
        .args(["-u", "http://127.0.0.1:9/"])
        .args(["--timeout", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Results from:"))
        .stderr(predicate::str::contains("127.0.0.1"));
}

#[test]
fn test_cli_verbose() {
    cmd()
        .args(["-v"])
        .args(["-c", &get_fixture_path("checks.json")])
        .args(["-f", &get_fixture_path("sample.html")])
        .assert()
        .success()
        .stderr(predicate::str::contains("Examen"));
}

#[test]
fn test_cli_json_output_is_valid_json() {
    let output = cmd()
        .args(["-c", &get_fixture_path("checks.json")])
        .args(["-f", &get_fixture_path("sample.html")])
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let body = stdout.splitn(2, '\n').nth(1).unwrap();

    let value: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(value["h1"], true);
    assert_eq!(value["span"], false);
}

#[test]
fn test_cli_empty_checks_list() {
    let checks = checks_file("[]");

    cmd()
        .args(["-c", checks.path().to_str().unwrap()])
        .args(["-f", &get_fixture_path("sample.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("{}"));
}
