// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Render and write the markdown summary and the test filter expression.

use crate::{
    errors::{ReportKind, WriteReportError},
    extract::Failure,
};
use atomicwrites::{AtomicFile, OverwriteBehavior};
use camino::Utf8Path;
use indexmap::IndexSet;
use itertools::Itertools;
use std::{fs, io::Write};
use swrite::{SWrite, swriteln};

/// The heading at the top of the markdown summary.
pub const MARKDOWN_HEADING: &str = "# Test failures";

/// The line written instead of a list when there are no failures.
pub const NO_FAILURES_LINE: &str = "No failed tests found.";

/// The test property each clause of the filter expression matches on.
pub const FILTER_PROPERTY: &str = "FullyQualifiedName";

/// Renders the markdown summary: a heading, then one bullet per failure with its snippet in a
/// fenced code block.
pub fn render_markdown(failures: &[Failure]) -> String {
    let mut out = String::new();
    swriteln!(out, "{MARKDOWN_HEADING}");
    out.push('\n');

    if failures.is_empty() {
        swriteln!(out, "{NO_FAILURES_LINE}");
        return out;
    }

    for failure in failures {
        swriteln!(out, "- `{}`", failure.display);
        swriteln!(out, "```");
        swriteln!(out, "{}", failure.snippet);
        swriteln!(out, "```");
    }
    out
}

/// Returns the distinct fully-qualified names of `failures`, in the order they first appear.
///
/// Empty names are skipped.
pub fn distinct_test_names(failures: &[Failure]) -> IndexSet<&str> {
    failures
        .iter()
        .map(|failure| failure.fqn.as_str())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Renders the filter expression: `FullyQualifiedName=<name>` for every distinct failed test,
/// joined with `|`, followed by a newline.
///
/// With no failures, this is a lone newline.
pub fn render_filter(failures: &[Failure]) -> String {
    let mut expr = distinct_test_names(failures)
        .into_iter()
        .map(|name| format!("{FILTER_PROPERTY}={name}"))
        .join("|");
    expr.push('\n');
    expr
}

/// Writes both documents for `failures`.
///
/// A new or existing regular file is replaced atomically, so a failed write leaves any previous
/// contents in place. Symlinks and special files such as `/dev/stdout` are written through
/// instead.
pub fn write_reports(
    failures: &[Failure],
    output_md: &Utf8Path,
    output_filter: &Utf8Path,
) -> Result<(), WriteReportError> {
    write_document(ReportKind::Markdown, output_md, &render_markdown(failures))?;
    write_document(ReportKind::Filter, output_filter, &render_filter(failures))?;
    Ok(())
}

fn write_document(
    kind: ReportKind,
    path: &Utf8Path,
    contents: &str,
) -> Result<(), WriteReportError> {
    if !replaces_atomically(path) {
        fs::write(path, contents).map_err(|error| WriteReportError::new(kind, path, error))?;
        tracing::debug!("wrote {kind} through `{path}`");
        return Ok(());
    }

    AtomicFile::new(path, OverwriteBehavior::AllowOverwrite)
        .write(|file| file.write_all(contents.as_bytes()))
        .map_err(|error| {
            let error = match error {
                atomicwrites::Error::Internal(error) | atomicwrites::Error::User(error) => error,
            };
            WriteReportError::new(kind, path, error)
        })?;
    tracing::debug!("wrote {kind} to `{path}`");
    Ok(())
}

/// Returns true if `path` is missing or a regular file, so a renamed temporary file can take its
/// place.
fn replaces_atomically(path: &Utf8Path) -> bool {
    match path.symlink_metadata() {
        Ok(metadata) => metadata.is_file(),
        Err(_) => true,
    }
}
