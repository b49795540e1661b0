// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error snippets shown for each failed test.

use itertools::Itertools;
use std::iter;

/// The maximum number of lines kept in a snippet.
pub const MAX_SNIPPET_LINES: usize = 20;

/// The maximum number of characters kept in a snippet, after lines have been truncated.
pub const MAX_SNIPPET_CHARS: usize = 2000;

/// The snippet used when a failed test has neither a message nor a stack trace.
pub const NO_OUTPUT_PLACEHOLDER: &str = "(no error output captured)";

/// Marks the point where a snippet was truncated.
pub const TRUNCATION_MARKER: &str = "...";

/// Builds the error snippet for a failed test from its failure message and stack trace.
///
/// The non-empty parts are joined with a newline and trimmed. If nothing is left,
/// [`NO_OUTPUT_PLACEHOLDER`] is returned. Otherwise the snippet is truncated twice, in this order:
///
/// 1. to [`MAX_SNIPPET_LINES`] lines, followed by a [`TRUNCATION_MARKER`] line if any were dropped;
/// 2. to [`MAX_SNIPPET_CHARS`] characters, followed by [`TRUNCATION_MARKER`] if any were dropped.
///
/// The second step can cut a line in the middle.
pub fn build_snippet(message: Option<&str>, stack_trace: Option<&str>) -> String {
    let raw = [message, stack_trace]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .join("\n");
    let raw = raw.trim_matches(is_blank);
    if raw.is_empty() {
        return NO_OUTPUT_PLACEHOLDER.to_owned();
    }

    let lines = split_lines(raw);
    let mut snippet = if lines.len() > MAX_SNIPPET_LINES {
        lines[..MAX_SNIPPET_LINES]
            .iter()
            .copied()
            .chain(iter::once(TRUNCATION_MARKER))
            .join("\n")
    } else {
        lines.join("\n")
    };

    if let Some((cut, _)) = snippet.char_indices().nth(MAX_SNIPPET_CHARS) {
        snippet.truncate(cut);
        snippet.push_str(TRUNCATION_MARKER);
    }
    snippet
}

/// Whitespace as far as trimming is concerned. This includes the information separators
/// `\x1c..=\x1f`, some of which also end a line, so a trimmed snippet never starts or ends with
/// an empty line.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

/// Characters that end a line, in addition to `\r\n`.
const LINE_TERMINATORS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Splits text into lines. `\r\n` counts as a single terminator.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(idx) = rest.find(LINE_TERMINATORS) {
        lines.push(&rest[..idx]);
        let tail = &rest[idx..];
        let terminator_len = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[terminator_len..];
    }
    if !rest.is_empty() {
        lines.push(rest);
    }
    lines
}
