// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Namespace-qualified tag names.
//!
//! Tags in an [`Element`](crate::Element) tree are stored in Clark notation: an element
//! `<TestRun xmlns="urn:x">` has the tag `{urn:x}TestRun`, while an element without a namespace
//! keeps its bare local name. Lookups must therefore qualify the local names they search for with
//! the namespace of the document.

/// Returns the namespace URI of a tag in Clark notation, or `""` if the tag has none.
pub fn namespace_of(tag: &str) -> &str {
    tag.strip_prefix('{')
        .and_then(|rest| rest.split_once('}'))
        .map_or("", |(namespace, _)| namespace)
}

/// Returns the local part of a tag in Clark notation.
pub fn local_name_of(tag: &str) -> &str {
    tag.strip_prefix('{')
        .and_then(|rest| rest.split_once('}'))
        .map_or(tag, |(_, local)| local)
}

/// Qualifies `local` with `namespace`, producing `{namespace}local`, or `local` unchanged if the
/// namespace is empty.
pub fn qualify(namespace: &str, local: &str) -> String {
    if namespace.is_empty() {
        local.to_owned()
    } else {
        format!("{{{namespace}}}{local}")
    }
}
