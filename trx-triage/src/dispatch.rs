// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    errors::Result,
    output::{OutputContext, OutputOpts, OutputWriter, clap_styles},
};
use camino::Utf8PathBuf;
use clap::Parser;
use std::{ffi::OsString, io::Write};
use trx_triage_runner::{
    TriageExitCode,
    aggregator::{TriageSummary, triage},
};

/// Collect failed tests from .NET TRX test reports.
///
/// Reads every `*.trx` file directly inside RESULTS_DIR, writes a markdown summary of the failed
/// tests and their error output to OUTPUT_MD, and writes a `dotnet test --filter` expression that
/// re-runs exactly those tests to OUTPUT_FILTER.
///
/// Files that are not well-formed XML are reported on stderr and skipped.
#[derive(Debug, Parser)]
#[command(
    version,
    bin_name = "trx-triage",
    styles = clap_styles::style(),
    max_term_width = 100
)]
pub struct TrxTriageApp {
    /// Directory containing the TRX files
    results_dir: Utf8PathBuf,

    /// Where to write the markdown summary
    output_md: Utf8PathBuf,

    /// Where to write the test filter expression
    output_filter: Utf8PathBuf,

    #[clap(flatten)]
    output: OutputOpts,
}

impl TrxTriageApp {
    /// Parses the command line.
    ///
    /// Usage errors, `--help` and `--version` are all written to stdout. In those cases the exit
    /// code the process should end with is returned as the error.
    pub fn parse_from_args<I, T>(args: I, writer: &mut OutputWriter) -> Result<Self, i32>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|error| {
            let exit_code = if error.use_stderr() {
                TriageExitCode::USAGE_ERROR
            } else {
                TriageExitCode::OK
            };

            let mut stdout = writer.stdout_writer();
            // There's nowhere left to report a failure to write the message.
            let _ = write!(stdout, "{}", error.render()).and_then(|()| stdout.flush());
            exit_code
        })
    }

    /// Initializes the output context.
    pub fn init_output(&self) -> OutputContext {
        self.output.init()
    }

    /// Executes the app.
    ///
    /// Returns the exit code.
    pub fn exec(self, output: OutputContext) -> Result<i32> {
        let summary = triage(&self.results_dir, &self.output_md, &self.output_filter)?;
        log_summary(&summary, output);
        Ok(TriageExitCode::OK)
    }
}

fn log_summary(summary: &TriageSummary, output: OutputContext) {
    let TriageSummary {
        files_found,
        files_skipped,
        failures,
        distinct_tests,
    } = *summary;
    let message = format!(
        "read {} of {files_found} TRX {}, found {failures} failed {} across {distinct_tests} distinct {}",
        files_found - files_skipped,
        plural(files_found, "file", "files"),
        plural(failures, "result", "results"),
        plural(distinct_tests, "test", "tests"),
    );

    if output.verbose {
        tracing::info!("{message}");
    } else {
        tracing::debug!("{message}");
    }
}

fn plural(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}
