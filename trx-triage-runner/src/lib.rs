// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core logic for `trx-triage`.
//!
//! `trx-triage` scans a directory of TRX test result reports, collects every failed test, and
//! writes two documents: a markdown summary of the failures with their error output, and a
//! `dotnet test --filter` expression that re-runs only the failed tests.
//!
//! The pipeline is:
//!
//! 1. [`discovery`]: find the `*.trx` files in a directory.
//! 2. [`extract`]: parse each file and turn its failed results into [`Failure`](extract::Failure)s.
//! 3. [`reporter`]: render and write the markdown summary and the filter expression.
//!
//! [`aggregator::triage`] runs all three.

#![warn(missing_docs)]

pub mod aggregator;
pub mod discovery;
pub mod errors;
mod exit_codes;
pub mod extract;
pub mod reporter;
pub mod snippet;

pub use exit_codes::TriageExitCode;

/// The `tracing` target for events that should be printed without a level heading.
///
/// Subscribers installed by the `trx-triage` binary print events with this target verbatim.
pub const NO_HEADING_TARGET: &str = "trx_triage::no_heading";
