// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Find TRX files in a results directory.

use crate::errors::DisplayErrorChain;
use camino::{Utf8Path, Utf8PathBuf};
use globset::{GlobBuilder, GlobMatcher};
use std::{io, sync::LazyLock};

/// The file name pattern result files are matched against.
pub const RESULT_FILE_GLOB: &str = "*.trx";

static RESULT_FILE_MATCHER: LazyLock<GlobMatcher> = LazyLock::new(|| {
    GlobBuilder::new(RESULT_FILE_GLOB)
        .literal_separator(true)
        .build()
        .expect("result file glob is valid")
        .compile_matcher()
});

/// Returns the TRX files directly inside `dir`, sorted by path.
///
/// Matching follows shell globbing: the pattern is case-sensitive, and hidden files (whose names
/// start with `.`) are not matched. Subdirectories are not searched.
///
/// A results directory that cannot be listed, because it does not exist, is not a directory or
/// is not readable, contains no files.
pub fn discover_result_files(dir: &Utf8Path) -> Vec<Utf8PathBuf> {
    let entries = match dir.read_dir_utf8() {
        Ok(entries) => entries,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("results directory `{dir}` does not exist, no result files found");
            return Vec::new();
        }
        Err(error) => {
            tracing::warn!(
                "cannot read results directory `{dir}`, no result files found: {}",
                DisplayErrorChain::new(error)
            );
            return Vec::new();
        }
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                tracing::warn!(
                    "skipping entry in `{dir}`: {}",
                    DisplayErrorChain::new(error)
                );
                continue;
            }
        };
        let file_name = entry.file_name();
        if file_name.starts_with('.') || !RESULT_FILE_MATCHER.is_match(file_name) {
            continue;
        }
        // Follow symlinks, so a link to a report counts as a report.
        if !entry.path().is_file() {
            tracing::debug!("skipping `{}`: not a file", entry.path());
            continue;
        }
        files.push(entry.into_path());
    }

    files.sort_unstable_by(|a, b| a.as_str().cmp(b.as_str()));
    tracing::debug!("found {} result files in `{dir}`", files.len());
    files
}
