// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extract failed tests from a single TRX file.

use crate::{NO_HEADING_TARGET, errors::DisplayErrorChain, snippet::build_snippet};
use camino::Utf8Path;
use quick_trx::{ReadError, TrxDocument, UNKNOWN_TEST_NAME};
use std::collections::HashMap;

/// A failed test, as it appears in the outputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    /// The name shown in the markdown summary.
    pub display: String,

    /// The fully-qualified name used in the filter expression.
    pub fqn: String,

    /// The error output shown under the test. Never empty.
    pub snippet: String,
}

/// Reads the TRX file at `path` and returns its failed tests, in document order.
///
/// If the file cannot be read or is not well-formed XML, the problem is reported on the
/// diagnostic stream and no failures are returned.
pub fn extract_failures(path: &Utf8Path) -> Vec<Failure> {
    match try_extract_failures(path) {
        Ok(failures) => failures,
        Err(error) => {
            report_unreadable(path, &error);
            Vec::new()
        }
    }
}

/// Like [`extract_failures`], but returns read and parse errors to the caller instead of
/// reporting them.
pub fn try_extract_failures(path: &Utf8Path) -> Result<Vec<Failure>, ReadError> {
    let document = TrxDocument::from_path(path)?;
    let failures = failures_from_document(&document);
    tracing::debug!(
        "{path}: {} results, {} failed",
        document.results.len(),
        failures.len(),
    );
    Ok(failures)
}

/// Reports a TRX file that could not be read or parsed.
pub(crate) fn report_unreadable(path: &Utf8Path, error: &ReadError) {
    tracing::error!(
        target: NO_HEADING_TARGET,
        "Failed to parse TRX {path}: {}",
        DisplayErrorChain::new(error),
    );
}

/// Collects the failed tests from a parsed TRX document, in the order of their results.
pub fn failures_from_document(document: &TrxDocument) -> Vec<Failure> {
    // Later declarations with the same id replace earlier ones.
    let declared_names: HashMap<&str, String> = document
        .unit_tests
        .iter()
        .filter_map(|unit_test| {
            let id = unit_test.id.as_deref()?;
            Some((id, unit_test.fully_qualified_name()))
        })
        .collect();

    document
        .results
        .iter()
        .filter(|result| result.is_failed())
        .map(|result| {
            let declared = result
                .test_id
                .as_deref()
                .and_then(|id| declared_names.get(id));
            let display = result
                .test_name
                .as_ref()
                .or(declared)
                .map_or(UNKNOWN_TEST_NAME, String::as_str)
                .to_owned();
            let fqn = declared.unwrap_or(&display).clone();
            let snippet =
                build_snippet(result.message.as_deref(), result.stack_trace.as_deref());

            Failure {
                display,
                fqn,
                snippet,
            }
        })
        .collect()
}
