// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{Element, ParseError, ReadError, names};
use camino::Utf8Path;
use std::fs;

/// The outcome recorded for tests that failed.
pub const FAILED_OUTCOME: &str = "Failed";

/// The name used for a test when a report does not say what the test is called.
pub const UNKNOWN_TEST_NAME: &str = "UnknownTest";

static UNIT_TEST_TAG: &str = "UnitTest";
static TEST_METHOD_TAG: &str = "TestMethod";
static UNIT_TEST_RESULT_TAG: &str = "UnitTestResult";
static OUTPUT_TAG: &str = "Output";
static ERROR_INFO_TAG: &str = "ErrorInfo";
static MESSAGE_TAG: &str = "Message";
static STACK_TRACE_TAG: &str = "StackTrace";

/// The parts of a TRX report that describe which tests exist and how they turned out.
///
/// Attributes that are missing or empty are represented as `None`, and text content is trimmed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrxDocument {
    /// The default namespace declared on the root element, or `""` if there is none.
    pub namespace: String,

    /// Every `UnitTest` element in the document, in document order.
    pub unit_tests: Vec<UnitTest>,

    /// Every `UnitTestResult` element in the document, in document order.
    pub results: Vec<UnitTestResult>,
}

impl TrxDocument {
    /// Reads and parses the TRX file at `path`.
    pub fn from_path(path: impl AsRef<Utf8Path>) -> Result<Self, ReadError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Ok(Self::parse(&contents)?)
    }

    /// Parses a TRX document from a string.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let root = Element::parse_str(input)?;
        Ok(Self::from_root(&root))
    }

    /// Collects the TRX data model from an already-parsed element tree.
    ///
    /// `UnitTest` and `UnitTestResult` elements are found at any depth below `root`, qualified
    /// with the namespace of `root`.
    pub fn from_root(root: &Element) -> Self {
        let namespace = root.namespace().to_owned();
        let unit_test_tag = names::qualify(&namespace, UNIT_TEST_TAG);
        let result_tag = names::qualify(&namespace, UNIT_TEST_RESULT_TAG);

        let unit_tests = root
            .descendants()
            .filter(|element| element.tag() == unit_test_tag)
            .map(|element| UnitTest::from_element(element, &namespace))
            .collect();
        let results = root
            .descendants()
            .filter(|element| element.tag() == result_tag)
            .map(|element| UnitTestResult::from_element(element, &namespace))
            .collect();

        Self {
            namespace,
            unit_tests,
            results,
        }
    }
}

/// A test declaration: the `UnitTest` element in a TRX file's `TestDefinitions`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitTest {
    /// The identifier results refer to this test by.
    pub id: Option<String>,

    /// The declared name of the test.
    pub name: Option<String>,

    /// The method implementing the test, if declared.
    pub test_method: Option<TestMethod>,
}

impl UnitTest {
    fn from_element(element: &Element, namespace: &str) -> Self {
        let test_method = element
            .find(&names::qualify(namespace, TEST_METHOD_TAG))
            .map(|method| TestMethod {
                class_name: non_empty(method.attribute("className")),
                name: non_empty(method.attribute("name")),
            });
        Self {
            id: non_empty(element.attribute("id")),
            name: non_empty(element.attribute("name")),
            test_method,
        }
    }

    /// Returns the fully-qualified name of this test.
    ///
    /// This is `ClassName.MethodName` if the test method declares both. Otherwise the first of
    /// the test's own name, the method name and the class name that is available is used, and
    /// [`UNKNOWN_TEST_NAME`] if none is.
    pub fn fully_qualified_name(&self) -> String {
        let method = self.test_method.as_ref();
        if let Some(TestMethod {
            class_name: Some(class_name),
            name: Some(method_name),
        }) = method
        {
            return format!("{class_name}.{method_name}");
        }

        self.name
            .as_deref()
            .or_else(|| method.and_then(|method| method.name.as_deref()))
            .or_else(|| method.and_then(|method| method.class_name.as_deref()))
            .unwrap_or(UNKNOWN_TEST_NAME)
            .to_owned()
    }
}

/// The method a [`UnitTest`] runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestMethod {
    /// The fully-qualified name of the class containing the method.
    pub class_name: Option<String>,

    /// The name of the method.
    pub name: Option<String>,
}

/// The outcome of a single test execution: the `UnitTestResult` element in a TRX file's
/// `Results`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitTestResult {
    /// The [`UnitTest::id`] of the test this result is for.
    pub test_id: Option<String>,

    /// The display name of the test, as recorded by the test adapter.
    pub test_name: Option<String>,

    /// The outcome, for example `Passed`, `Failed` or `NotExecuted`.
    pub outcome: Option<String>,

    /// The text of `Output/ErrorInfo/Message`, trimmed.
    pub message: Option<String>,

    /// The text of `Output/ErrorInfo/StackTrace`, trimmed.
    pub stack_trace: Option<String>,
}

impl UnitTestResult {
    fn from_element(element: &Element, namespace: &str) -> Self {
        let output = names::qualify(namespace, OUTPUT_TAG);
        let error_info = names::qualify(namespace, ERROR_INFO_TAG);
        let read_text = |local: &str| {
            let tag = names::qualify(namespace, local);
            element
                .find_path([output.as_str(), error_info.as_str(), tag.as_str()])
                .and_then(Element::text)
                .map(str::trim)
                .and_then(|text| non_empty(Some(text)))
        };

        Self {
            test_id: non_empty(element.attribute("testId")),
            test_name: non_empty(element.attribute("testName")),
            outcome: non_empty(element.attribute("outcome")),
            message: read_text(MESSAGE_TAG),
            stack_trace: read_text(STACK_TRACE_TAG),
        }
    }

    /// Returns true if this result's outcome is exactly [`FAILED_OUTCOME`].
    pub fn is_failed(&self) -> bool {
        self.outcome.as_deref() == Some(FAILED_OUTCOME)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|value| !value.is_empty()).map(str::to_owned)
}
