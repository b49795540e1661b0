// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Documented exit codes for `trx-triage`.
///
/// Failing to parse an individual TRX file is not an error: the file is reported on standard
/// error and skipped, and the run still exits with [`OK`](Self::OK). So does a results directory
/// that cannot be read, which contributes no files.
pub enum TriageExitCode {}

impl TriageExitCode {
    /// Both output files were written. This includes runs that found no failed tests.
    pub const OK: i32 = 0;

    /// An output file could not be written.
    pub const IO_ERROR: i32 = 1;

    /// The command line was invalid, for example because the wrong number of arguments was
    /// passed.
    pub const USAGE_ERROR: i32 = 2;
}
