// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collect failures across all TRX files in a directory and write the outputs.

use crate::{
    discovery::discover_result_files,
    errors::WriteReportError,
    extract::{Failure, report_unreadable, try_extract_failures},
    reporter::{distinct_test_names, write_reports},
};
use camino::{Utf8Path, Utf8PathBuf};

/// Failures collected from a list of TRX files.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectedFailures {
    /// Failures in file order, then document order within each file.
    pub failures: Vec<Failure>,

    /// Files that could not be read or parsed, and so contributed no failures.
    pub skipped: Vec<Utf8PathBuf>,
}

/// Extracts the failures from each of `files` in turn.
///
/// Files that cannot be read or parsed are reported on the diagnostic stream and skipped.
pub fn collect_failures(files: &[Utf8PathBuf]) -> CollectedFailures {
    let mut collected = CollectedFailures::default();
    for path in files {
        match try_extract_failures(path) {
            Ok(failures) => collected.failures.extend(failures),
            Err(error) => {
                report_unreadable(path, &error);
                collected.skipped.push(path.clone());
            }
        }
    }
    collected
}

/// Statistics about a completed triage run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TriageSummary {
    /// The number of TRX files found in the results directory.
    pub files_found: usize,

    /// The number of those files that could not be read or parsed.
    pub files_skipped: usize,

    /// The number of failed test results.
    pub failures: usize,

    /// The number of distinct tests in the filter expression.
    pub distinct_tests: usize,
}

/// Runs the whole pipeline: finds the TRX files in `results_dir`, collects their failures, and
/// writes the markdown summary to `output_md` and the filter expression to `output_filter`.
///
/// Both outputs are written even if the results directory could not be listed or every TRX file
/// was skipped, so the only failure is failing to write them.
pub fn triage(
    results_dir: &Utf8Path,
    output_md: &Utf8Path,
    output_filter: &Utf8Path,
) -> Result<TriageSummary, WriteReportError> {
    let files = discover_result_files(results_dir);
    let collected = collect_failures(&files);
    write_reports(&collected.failures, output_md, output_filter)?;

    Ok(TriageSummary {
        files_found: files.len(),
        files_skipped: collected.skipped.len(),
        failures: collected.failures.len(),
        distinct_tests: distinct_test_names(&collected.failures).len(),
    })
}
