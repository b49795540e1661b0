// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests that run the `trx-triage` binary against checked-in TRX files.

use indoc::indoc;
use pretty_assertions::assert_eq;

mod fixtures;
mod trx_triage_cli;

use fixtures::ResultsDir;
use trx_triage_cli::TrxTriageCli;

#[test]
fn passed_and_failed() {
    let dir = ResultsDir::new().with_fixture("foo-bar.trx", "foo-bar.trx");

    let output = TrxTriageCli::new().args(dir.args()).output();

    assert_eq!(output.exit_status.code(), Some(0), "{output}");
    assert_eq!(output.stdout_as_str(), "");
    assert_eq!(output.stderr_as_str(), "");
    assert_eq!(
        dir.read_md(),
        indoc! {"
            # Test failures

            - `Bar`
            ```
            Assert.Equal() Failure
            Expected: 1
            Actual:   2
            at Foo.Bar() in /src/FooTests.cs:line 12
            ```
        "}
    );
    assert_eq!(dir.read_filter(), "FullyQualifiedName=Foo.Bar\n");
}

#[test]
fn no_trx_files() {
    let dir = ResultsDir::new();

    let output = TrxTriageCli::new().args(dir.args()).output();

    assert_eq!(output.exit_status.code(), Some(0), "{output}");
    assert_eq!(dir.read_md(), "# Test failures\n\nNo failed tests found.\n");
    assert_eq!(dir.read_filter(), "\n");
}

#[test]
fn missing_results_dir() {
    let dir = ResultsDir::new();
    let [_, output_md, output_filter] = dir.args();

    let output = TrxTriageCli::new()
        .arg(dir.path().join("does-not-exist").into_string())
        .args([output_md, output_filter])
        .output();

    assert_eq!(output.exit_status.code(), Some(0), "{output}");
    assert_eq!(dir.read_md(), "# Test failures\n\nNo failed tests found.\n");
    assert_eq!(dir.read_filter(), "\n");
}

#[test]
fn results_dir_is_a_file() {
    let dir = ResultsDir::new().with_fixture("foo-bar.trx", "foo-bar.trx");
    let [_, output_md, output_filter] = dir.args();

    let output = TrxTriageCli::new()
        .arg(dir.path().join("foo-bar.trx").into_string())
        .args([output_md, output_filter])
        .output();

    assert_eq!(output.exit_status.code(), Some(0), "{output}");
    assert!(
        output
            .stderr_as_str()
            .contains("warning: cannot read results directory"),
        "{output}"
    );
    assert_eq!(dir.read_md(), "# Test failures\n\nNo failed tests found.\n");
    assert_eq!(dir.read_filter(), "\n");
}

#[test]
fn failures_across_files_in_name_order() {
    // theory.trx sorts after foo-bar.trx and repeats its failure, which is listed twice in the
    // summary but filtered on once.
    let dir = ResultsDir::new()
        .with_fixture("theory.trx", "theory.trx")
        .with_fixture("foo-bar.trx", "foo-bar.trx");

    let output = TrxTriageCli::new().args(dir.args()).output();

    assert_eq!(output.exit_status.code(), Some(0), "{output}");
    let md = dir.read_md();
    let bullets: Vec<_> = md.lines().filter(|line| line.starts_with("- ")).collect();
    assert_eq!(
        bullets,
        [
            "- `Bar`",
            "- `Foo.Parse(input: \"a\")`",
            "- `Foo.Parse(input: \"b\")`",
            "- `Bar`",
        ]
    );
    assert!(md.contains("```\nExpected <a> to parse\n```\n"), "{md}");
    assert_eq!(
        dir.read_filter(),
        "FullyQualifiedName=Foo.Bar|FullyQualifiedName=Foo.Parse\n"
    );
}

#[test]
fn malformed_file_is_reported_and_skipped() {
    let dir = ResultsDir::new()
        .with_fixture("foo-bar.trx", "a.trx")
        .with_fixture("malformed.trx", "b.trx");

    let output = TrxTriageCli::new().args(dir.args()).output();

    assert_eq!(output.exit_status.code(), Some(0), "{output}");
    let expected_prefix = format!("Failed to parse TRX {}: ", dir.path().join("b.trx"));
    let stderr = output.stderr_as_str();
    assert!(
        stderr.lines().any(|line| line.starts_with(&expected_prefix)),
        "stderr should name the malformed file: {output}"
    );
    assert!(!dir.read_md().contains("Lost"));
    assert_eq!(dir.read_filter(), "FullyQualifiedName=Foo.Bar\n");
}

#[test]
fn two_arguments_is_a_usage_error() {
    let dir = ResultsDir::new().with_fixture("foo-bar.trx", "foo-bar.trx");
    let [results_dir, output_md, _] = dir.args();

    let output = TrxTriageCli::new()
        .args([results_dir, output_md])
        .unchecked(true)
        .output();

    assert_eq!(output.exit_status.code(), Some(2), "{output}");
    assert!(
        output
            .stdout_as_str()
            .contains("Usage: trx-triage [OPTIONS] <RESULTS_DIR> <OUTPUT_MD> <OUTPUT_FILTER>"),
        "usage should be printed to stdout: {output}"
    );
    assert!(!dir.output_md().exists(), "no markdown summary is written");
    assert!(!dir.output_filter().exists(), "no filter expression is written");
}

#[test]
fn help_is_printed_to_stdout() {
    let output = TrxTriageCli::new().arg("--help").output();

    assert_eq!(output.exit_status.code(), Some(0), "{output}");
    assert!(output.stdout_as_str().contains("<OUTPUT_FILTER>"), "{output}");
}

#[test]
fn unwritable_output_is_an_error() {
    let dir = ResultsDir::new().with_fixture("foo-bar.trx", "foo-bar.trx");
    let output_md = dir.path().join("missing/failures.md");

    let output = TrxTriageCli::new()
        .args([
            dir.path().to_string(),
            output_md.to_string(),
            dir.output_filter().into_string(),
        ])
        .unchecked(true)
        .output();

    assert_eq!(output.exit_status.code(), Some(1), "{output}");
    let stderr = output.stderr_as_str();
    assert!(
        stderr.contains(&format!(
            "error: error writing markdown summary to `{output_md}`"
        )),
        "{output}"
    );
    assert!(stderr.contains("Caused by:"), "{output}");
}

#[test]
fn verbose_prints_a_summary() {
    let dir = ResultsDir::new()
        .with_fixture("foo-bar.trx", "a.trx")
        .with_fixture("malformed.trx", "b.trx");

    let output = TrxTriageCli::new()
        .args(dir.args())
        .env("TRX_TRIAGE_VERBOSE", "1")
        .output();

    assert_eq!(output.exit_status.code(), Some(0), "{output}");
    assert!(
        output.stderr_as_str().contains(
            "info: read 1 of 2 TRX files, found 1 failed result across 1 distinct test\n"
        ),
        "{output}"
    );
}
