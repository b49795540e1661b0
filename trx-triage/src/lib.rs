// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collect failed tests from .NET TRX test reports.
//!
//! `trx-triage <RESULTS_DIR> <OUTPUT_MD> <OUTPUT_FILTER>` reads every `*.trx` file in
//! `RESULTS_DIR` and writes:
//!
//! * `OUTPUT_MD`: a markdown summary with one bullet per failed test, followed by its error
//!   message and stack trace (truncated) in a code block.
//! * `OUTPUT_FILTER`: a `dotnet test --filter` expression, such as
//!   `FullyQualifiedName=Foo.Bar|FullyQualifiedName=Foo.Baz`, that re-runs only the failed tests.
//!
//! The core logic lives in the `trx-triage-runner` crate.

#![warn(missing_docs)]

mod dispatch;
mod errors;
mod output;

#[doc(hidden)]
pub use dispatch::*;
#[doc(hidden)]
pub use errors::*;
#[doc(hidden)]
pub use output::OutputWriter;
