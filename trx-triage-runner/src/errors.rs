// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors produced by trx-triage.

use camino::Utf8PathBuf;
use std::{error::Error, fmt, io};
use thiserror::Error;

/// An error that occurred while writing one of the output documents.
#[derive(Debug, Error)]
#[error("error writing {kind} to `{path}`")]
pub struct WriteReportError {
    kind: ReportKind,
    path: Utf8PathBuf,
    #[source]
    error: io::Error,
}

impl WriteReportError {
    pub(crate) fn new(kind: ReportKind, path: impl Into<Utf8PathBuf>, error: io::Error) -> Self {
        Self {
            kind,
            path: path.into(),
            error,
        }
    }

    /// Returns the kind of document that could not be written.
    pub fn kind(&self) -> ReportKind {
        self.kind
    }

    /// Returns the path that could not be written.
    pub fn path(&self) -> &Utf8PathBuf {
        &self.path
    }
}

/// One of the two documents trx-triage produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportKind {
    /// The markdown summary.
    Markdown,

    /// The test filter expression.
    Filter,
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown summary"),
            Self::Filter => write!(f, "filter expression"),
        }
    }
}

/// Displays an error along with the chain of errors that caused it.
///
/// Used for messages that have to fit on a single logical line, where printing the top-level error
/// alone would hide the reason for the failure.
pub struct DisplayErrorChain<E> {
    error: E,
}

impl<E: Error> DisplayErrorChain<E> {
    /// Creates a new `DisplayErrorChain`.
    pub fn new(error: E) -> Self {
        Self { error }
    }
}

impl<E: Error> fmt::Display for DisplayErrorChain<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        let mut source = self.error.source();
        while let Some(error) = source {
            write!(f, ": {error}")?;
            source = error.source();
        }

        Ok(())
    }
}
