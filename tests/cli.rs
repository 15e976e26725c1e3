use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;

fn sample_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("samples")
        .join(name)
}

#[test]
fn volumes_for_a_sample() {
    let mut cmd = cargo_bin_cmd!("traindown");
    cmd.arg(sample_path("units.traindown"))
        .arg("--format")
        .arg("volumes");

    cmd.assert().success().stdout("your: 2000\n");
}

#[test]
fn canonical_is_the_default_format() {
    let mut cmd = cargo_bin_cmd!("traindown");
    cmd.arg(sample_path("basic.traindown"));

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("@ 2020-01-01 1:23\r\n\r\nsquat:"));
}

#[test]
fn reads_stdin() {
    let mut cmd = cargo_bin_cmd!("traindown");
    cmd.arg("-")
        .arg("--format")
        .arg("json")
        .write_stdin("+ lunge:\n  20 10r");

    cmd.assert().success().stdout(
        predicate::str::contains("\"name\": \"lunge\"")
            .and(predicate::str::contains("\"superSet\": true")),
    );
}

#[test]
fn list_formats() {
    let mut cmd = cargo_bin_cmd!("traindown");
    cmd.arg("--list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("canonical")
            .and(predicate::str::contains("token-json"))
            .and(predicate::str::contains("volumes")),
    );
}

#[test]
fn unknown_format_fails() {
    let mut cmd = cargo_bin_cmd!("traindown");
    cmd.arg(sample_path("basic.traindown"))
        .arg("--format")
        .arg("xml");

    cmd.assert()
        .failure()
        .stderr(
            predicate::str::contains("unknown format 'xml'")
                .and(predicate::str::contains("token-simple")),
        );
}

#[test]
fn lexical_errors_fail() {
    let mut cmd = cargo_bin_cmd!("traindown");
    cmd.arg("-").write_stdin("squat\n  100");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("missing a ':'"));
}

#[test]
fn semantic_errors_are_warnings() {
    let mut cmd = cargo_bin_cmd!("traindown");
    cmd.arg(sample_path("errors.traindown"))
        .arg("--format")
        .arg("volumes");

    cmd.assert()
        .success()
        .stdout("unknown unit: 370\n")
        .stderr(predicate::str::contains("warning: failed to parse reps \"100.5\""));
}

#[test]
fn config_file_overrides_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[output]\npretty = false\n\n[formatting]\nline_ending = \"\\n\"")
        .expect("write config");

    let mut cmd = cargo_bin_cmd!("traindown");
    cmd.arg("-")
        .arg("--config")
        .arg(file.path())
        .arg("--format")
        .arg("json")
        .write_stdin("squat:\n100");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("{\"date\":null,"));
}

#[test]
fn missing_config_file_fails() {
    let mut cmd = cargo_bin_cmd!("traindown");
    cmd.arg(sample_path("basic.traindown"))
        .arg("--config")
        .arg("/nonexistent/traindown.toml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn missing_document_fails() {
    let mut cmd = cargo_bin_cmd!("traindown");
    cmd.arg("/nonexistent/session.traindown");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error reading /nonexistent/session.traindown"));
}
