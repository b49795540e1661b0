// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::io;
use thiserror::Error;

/// An error that occurs while parsing an XML document into an [`Element`](crate::Element) tree.
///
/// The line and column are 1-based and point at the byte where the problem was detected.
#[derive(Debug, Error)]
#[error("{kind}: line {line}, column {column}")]
pub struct ParseError {
    line: usize,
    column: usize,
    kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(input: &str, position: u64, kind: impl Into<ParseErrorKind>) -> Self {
        let mut offset = usize::try_from(position)
            .unwrap_or(usize::MAX)
            .min(input.len());
        while !input.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &input[..offset];
        let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
        let line = before.matches('\n').count() + 1;
        // Columns count characters, not bytes.
        let column = before[line_start..].chars().count() + 1;
        Self {
            line,
            column,
            kind: kind.into(),
        }
    }

    /// Returns the 1-based line the error was detected on.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 1-based column (in characters) the error was detected at.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

/// The kind of [`ParseError`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The underlying XML reader rejected the input.
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    /// The input did not contain any element.
    #[error("no element found")]
    NoRootElement,

    /// The input ended while an element was still open.
    #[error("unclosed element `{tag}`")]
    UnclosedElement {
        /// The tag of the innermost open element.
        tag: String,
    },

    /// An element started after the root element was closed.
    #[error("junk after document element")]
    ContentAfterRoot,

    /// Non-whitespace text appeared outside the root element.
    #[error("text outside the document element")]
    TextOutsideRoot,

    /// A tag or attribute used a namespace prefix that was never declared.
    #[error("unbound namespace prefix `{prefix}`")]
    UnboundPrefix {
        /// The undeclared prefix.
        prefix: String,
    },
}

/// An error that occurs while reading a TRX file from disk.
///
/// Returned by [`TrxDocument::from_path`](crate::TrxDocument::from_path). The path is not part
/// of the message, since callers already know which file they asked for.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The file could not be read, or was not valid UTF-8.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The file was read but is not well-formed XML.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
