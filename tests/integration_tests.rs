//! Integration tests for the sbomcmp CLI tool.
//!
//! These tests verify the complete end-to-end behavior of the CLI,
//! including argument parsing, file loading, comparison, and output
//! formatting.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to create a Command for the sbomcmp binary
fn sbomcmp() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("sbomcmp"))
}

#[test]
fn test_identical_files_exit_0() {
    sbomcmp()
        .arg("tests/fixtures/base.json")
        .arg("tests/fixtures/base.json")
        .assert()
        .success()
        .code(0)
        .stdout(predicate::str::contains("no error found"));
}

#[test]
fn test_different_files_exit_1() {
    sbomcmp()
        .arg("tests/fixtures/base.json")
        .arg("tests/fixtures/bumped.json")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("guava"));
}

#[test]
fn test_version_mismatch_line() {
    sbomcmp()
        .arg("tests/fixtures/base.json")
        .arg("tests/fixtures/bumped.json")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Component guava has different versions: 32.1.2-jre (in tests/fixtures/base.json) \
             and 33.0.0-jre (in tests/fixtures/bumped.json)",
        ));
}

#[test]
fn test_one_sided_component_lines() {
    sbomcmp()
        .arg("tests/fixtures/base.json")
        .arg("tests/fixtures/bumped.json")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Component jackson-databind is in the first file (tests/fixtures/base.json) \
             but not in the second (tests/fixtures/bumped.json)",
        ))
        .stdout(predicate::str::contains(
            "Component slf4j-api is in the second file (tests/fixtures/bumped.json) \
             but not in the first (tests/fixtures/base.json)",
        ));
}

#[test]
fn test_summary_line_with_accuracy() {
    sbomcmp()
        .arg("tests/fixtures/base.json")
        .arg("tests/fixtures/bumped.json")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "3 errors found, tool accuracy 0.00 (first file has 3 components, \
             second file has 3 components)",
        ));
}

#[test]
fn test_non_maven_components_are_ignored() {
    // base.json carries an npm left-pad and base_reformatted.json a cargo
    // left-pad at another version; neither may surface as a discrepancy.
    sbomcmp()
        .arg("tests/fixtures/base.json")
        .arg("tests/fixtures/base_reformatted.json")
        .assert()
        .success()
        .code(0)
        .stdout(predicate::str::contains("left-pad").not())
        .stdout(predicate::str::contains("no error found"));
}

#[test]
fn test_swapped_inputs_swap_categories() {
    sbomcmp()
        .arg("tests/fixtures/bumped.json")
        .arg("tests/fixtures/base.json")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Component jackson-databind is in the second file (tests/fixtures/base.json) \
             but not in the first (tests/fixtures/bumped.json)",
        ))
        .stdout(predicate::str::contains("3 errors found"));
}

#[test]
fn test_empty_components_exit_0() {
    sbomcmp()
        .arg("tests/fixtures/empty.json")
        .arg("tests/fixtures/empty.json")
        .assert()
        .success()
        .code(0)
        .stdout(predicate::str::contains("no error found"));
}

#[test]
fn test_null_version_reported_as_mismatch() {
    sbomcmp()
        .arg("tests/fixtures/base.json")
        .arg("tests/fixtures/null_version.json")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Component guava has different versions: 32.1.2-jre",
        ))
        .stdout(predicate::str::contains("(none)"));
}

#[test]
fn test_file_not_found_exit_2() {
    sbomcmp()
        .arg("tests/fixtures/nonexistent.json")
        .arg("tests/fixtures/base.json")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_malformed_json_exit_2() {
    sbomcmp()
        .arg("tests/fixtures/malformed.json")
        .arg("tests/fixtures/base.json")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid JSON"));
}

#[test]
fn test_missing_components_exit_2() {
    sbomcmp()
        .arg("tests/fixtures/no_components.json")
        .arg("tests/fixtures/base.json")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("No components array"));
}

#[test]
fn test_wrong_argument_count_usage_exit_1() {
    sbomcmp()
        .arg("tests/fixtures/base.json")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_no_arguments_usage_exit_1() {
    sbomcmp()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_json_output_format() {
    sbomcmp()
        .arg("tests/fixtures/base.json")
        .arg("tests/fixtures/bumped.json")
        .arg("--format=json")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"findings\""))
        .stdout(predicate::str::contains("\"stats\""))
        .stdout(predicate::str::contains("\"version_mismatch\""));
}

#[test]
fn test_plain_output_format() {
    sbomcmp()
        .arg("tests/fixtures/base.json")
        .arg("tests/fixtures/bumped.json")
        .arg("--format=plain")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("guava"));
}

#[test]
fn test_quiet_flag() {
    sbomcmp()
        .arg("tests/fixtures/base.json")
        .arg("tests/fixtures/bumped.json")
        .arg("--quiet")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("errors found").not());
}

#[test]
fn test_verbose_flag() {
    sbomcmp()
        .arg("tests/fixtures/base.json")
        .arg("tests/fixtures/base.json")
        .arg("--verbose")
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Loading"))
        .stderr(predicate::str::contains("Comparing"));
}

#[test]
fn test_help_flag() {
    sbomcmp()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Compare Maven components"))
        .stdout(predicate::str::contains("FIRST"))
        .stdout(predicate::str::contains("SECOND"));
}

#[test]
fn test_version_flag() {
    sbomcmp()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sbomcmp"));
}

#[test]
fn test_output_is_idempotent() {
    let first = sbomcmp()
        .arg("tests/fixtures/base.json")
        .arg("tests/fixtures/bumped.json")
        .arg("--format=plain")
        .output()
        .unwrap();
    let second = sbomcmp()
        .arg("tests/fixtures/base.json")
        .arg("tests/fixtures/bumped.json")
        .arg("--format=plain")
        .output()
        .unwrap();
    assert_eq!(first.stdout, second.stdout);
}
