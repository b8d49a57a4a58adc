use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_translates_file_to_xml() {
    let file = config_file("set defaultAge = 25\nname = @\"Иван\"\nage = [defaultAge]\n");

    Command::cargo_bin("cfgml")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(
            "<config><name type=\"string\">Иван</name><age type=\"number\">25</age></config>\n",
        );
}

#[test]
fn test_parse_error_is_printed_to_stdout_with_success_status() {
    let file = config_file("foo bar\n");

    Command::cargo_bin("cfgml")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error: "))
        .stdout(predicate::str::contains("Syntax error: foo bar"))
        .stdout(predicate::str::contains("<config").not());
}

#[test]
fn test_missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("cfgml")
        .unwrap()
        .arg(dir.path().join("nope.cfg"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error: File error"));
}

#[test]
fn test_missing_argument_is_a_usage_error() {
    Command::cargo_bin("cfgml").unwrap().assert().failure();
}

#[test]
fn test_pretty_and_declaration() {
    let file = config_file("xs = << 1 >>");

    Command::cargo_bin("cfgml")
        .unwrap()
        .arg(file.path())
        .arg("--declaration")
        .arg("--pretty")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"))
        .stdout(predicate::str::contains("\n    <item type=\"number\">1</item>"));
}

#[test]
fn test_pretty_before_input_keeps_the_input() {
    let file = config_file("xs = << 1 >>");

    Command::cargo_bin("cfgml")
        .unwrap()
        .arg("--pretty")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<config>"))
        .stdout(predicate::str::contains("\n    <item type=\"number\">1</item>"));
}

#[test]
fn test_pretty_with_explicit_width() {
    let file = config_file("xs = << 1 >>");

    Command::cargo_bin("cfgml")
        .unwrap()
        .arg("--pretty=4")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\n        <item type=\"number\">1</item>"));
}

#[test]
fn test_json_format() {
    let file = config_file("user = struct { name = @\"a\", age = 3 }");

    Command::cargo_bin("cfgml")
        .unwrap()
        .arg(file.path())
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"age\": 3"));
}
