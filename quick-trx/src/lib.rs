// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read TRX (Visual Studio test results) reports in Rust.
//!
//! TRX files are XML documents, usually written by `dotnet test --logger trx`. This crate parses
//! them into a small element tree and exposes the parts of the schema that describe test
//! declarations (`UnitTest`) and their outcomes (`UnitTestResult`).

mod errors;
pub mod names;
mod report;
mod tree;

pub use errors::*;
pub use report::*;
pub use tree::*;
