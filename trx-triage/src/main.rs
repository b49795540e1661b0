// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use color_eyre::Result;
use trx_triage::{OutputWriter, TrxTriageApp};

fn main() -> Result<()> {
    color_eyre::install()?;
    let _ = enable_ansi_support::enable_ansi_support();

    let app = match TrxTriageApp::parse_from_args(std::env::args_os(), &mut OutputWriter::default())
    {
        Ok(app) => app,
        Err(code) => std::process::exit(code),
    };
    let output = app.init_output();

    match app.exec(output) {
        Ok(code) => std::process::exit(code),
        Err(error) => {
            error.display_to_stderr(&output.stderr_styles());
            std::process::exit(error.process_exit_code())
        }
    }
}
