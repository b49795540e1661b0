// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A minimal, namespace-aware XML element tree.

use crate::{ParseError, ParseErrorKind, names};
use quick_xml::{
    NsReader,
    escape::unescape,
    events::{BytesStart, Event},
    name::ResolveResult,
};
use std::{borrow::Cow, slice};

/// An XML element: a tag in Clark notation, its attributes, its leading text and its children.
///
/// Like most element-tree models, only the character data that appears *before* the first child
/// element is kept as the element's text. Text that follows a child element is discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// Parses a complete XML document and returns its root element.
    ///
    /// A leading byte-order mark is ignored. Comments, processing instructions and the document
    /// type declaration are skipped.
    pub fn parse_str(input: &str) -> Result<Self, ParseError> {
        let input = input.strip_prefix('\u{feff}').unwrap_or(input);
        TreeBuilder::new(input).build()
    }

    /// Returns the tag of this element, in Clark notation.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the namespace URI of this element, or `""` if it has none.
    pub fn namespace(&self) -> &str {
        names::namespace_of(&self.tag)
    }

    /// Returns the local name of this element.
    pub fn local_name(&self) -> &str {
        names::local_name_of(&self.tag)
    }

    /// Returns the value of the attribute `name`, if present.
    ///
    /// Unprefixed attributes are looked up by their bare name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over the attributes of this element, in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Returns the text that precedes the first child element, if there is any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns the direct children of this element.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Returns the first direct child with the given (qualified) tag.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.tag == tag)
    }

    /// Follows a path of qualified tags through direct children, taking the first match at each
    /// step.
    pub fn find_path<'p>(&self, path: impl IntoIterator<Item = &'p str>) -> Option<&Element> {
        path.into_iter()
            .try_fold(self, |element, tag| element.find(tag))
    }

    /// Iterates over all descendants of this element (not including the element itself),
    /// depth-first in document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![self.children.iter()],
        }
    }
}

/// Iterator returned by [`Element::descendants`].
#[derive(Clone, Debug)]
pub struct Descendants<'a> {
    stack: Vec<slice::Iter<'a, Element>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let siblings = self.stack.last_mut()?;
            match siblings.next() {
                Some(element) => {
                    self.stack.push(element.children.iter());
                    return Some(element);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

struct TreeBuilder<'a> {
    input: &'a str,
    reader: NsReader<&'a [u8]>,
    stack: Vec<Element>,
    root: Option<Element>,
}

impl<'a> TreeBuilder<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            reader: NsReader::from_str(input),
            stack: Vec::new(),
            root: None,
        }
    }

    fn build(mut self) -> Result<Element, ParseError> {
        loop {
            let (namespace, event) =
                next_event(&mut self.reader).map_err(|error| self.error(error))?;
            match event {
                Event::Start(start) => {
                    let element = namespace
                        .and_then(|namespace| self.open(&namespace, &start))
                        .map_err(|kind| self.error(kind))?;
                    self.stack.push(element);
                }
                Event::Empty(start) => {
                    let element = namespace
                        .and_then(|namespace| self.open(&namespace, &start))
                        .map_err(|kind| self.error(kind))?;
                    self.close(element);
                }
                Event::End(_) => {
                    // The reader has already checked that the end tag matches.
                    if let Some(element) = self.stack.pop() {
                        self.close(element);
                    }
                }
                Event::Text(text) => {
                    let text = text.unescape().map_err(|error| self.error(error))?;
                    self.push_text(&text).map_err(|kind| self.error(kind))?;
                }
                Event::CData(cdata) => {
                    let text = String::from_utf8_lossy(&cdata).into_owned();
                    self.push_text(&text).map_err(|kind| self.error(kind))?;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = self.stack.last() {
            let tag = open.tag.clone();
            return Err(self.error(ParseErrorKind::UnclosedElement { tag }));
        }
        match self.root.take() {
            Some(root) => Ok(root),
            None => Err(self.error(ParseErrorKind::NoRootElement)),
        }
    }

    fn open(&self, namespace: &str, start: &BytesStart<'_>) -> Result<Element, ParseErrorKind> {
        if self.stack.is_empty() && self.root.is_some() {
            return Err(ParseErrorKind::ContentAfterRoot);
        }

        let local = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            // Namespace declarations are consumed by the reader, not exposed.
            if attr.key.as_namespace_binding().is_some() {
                continue;
            }
            let (resolved, attr_local) = self.reader.resolve_attribute(attr.key);
            let key = names::qualify(
                &resolve_namespace(resolved)?,
                &String::from_utf8_lossy(attr_local.as_ref()),
            );
            let raw = String::from_utf8_lossy(&attr.value);
            let value = unescape(&normalize_attribute_value(&raw))
                .map_err(quick_xml::Error::from)?
                .into_owned();
            attributes.push((key, value));
        }

        Ok(Element {
            tag: names::qualify(namespace, &local),
            attributes,
            text: None,
            children: Vec::new(),
        })
    }

    fn close(&mut self, element: Element) {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(element),
            None => self.root = Some(element),
        }
    }

    fn push_text(&mut self, text: &str) -> Result<(), ParseErrorKind> {
        match self.stack.last_mut() {
            Some(current) => {
                if current.children.is_empty() {
                    current.text.get_or_insert_with(String::new).push_str(text);
                }
                Ok(())
            }
            None if text.trim().is_empty() => Ok(()),
            None => Err(ParseErrorKind::TextOutsideRoot),
        }
    }

    fn error(&self, kind: impl Into<ParseErrorKind>) -> ParseError {
        let kind = kind.into();
        let position = match kind {
            ParseErrorKind::Xml(_) => self.reader.error_position(),
            _ => self.reader.buffer_position(),
        };
        ParseError::new(self.input, position, kind)
    }
}

/// Reads the next event along with the namespace its name resolves to.
fn next_event<'i>(
    reader: &mut NsReader<&'i [u8]>,
) -> quick_xml::Result<(Result<String, ParseErrorKind>, Event<'i>)> {
    let (resolved, event) = reader.read_resolved_event()?;
    Ok((resolve_namespace(resolved), event))
}

/// Replaces literal tabs and line breaks in a raw attribute value with spaces, as XML attribute
/// value normalization does. `\r\n` counts as one line break. Character references such as
/// `&#10;` are expanded afterwards and so survive.
fn normalize_attribute_value(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['\t', '\r', '\n']) {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(raw.replace("\r\n", " ").replace(['\t', '\r', '\n'], " "))
}

fn resolve_namespace(resolved: ResolveResult<'_>) -> Result<String, ParseErrorKind> {
    match resolved {
        ResolveResult::Bound(namespace) => {
            Ok(String::from_utf8_lossy(namespace.as_ref()).into_owned())
        }
        ResolveResult::Unbound => Ok(String::new()),
        ResolveResult::Unknown(prefix) => Err(ParseErrorKind::UnboundPrefix {
            prefix: String::from_utf8_lossy(&prefix).into_owned(),
        }),
    }
}
