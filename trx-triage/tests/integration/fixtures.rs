// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::{Utf8Path, Utf8PathBuf};
use camino_tempfile::Utf8TempDir;

/// A results directory populated with checked-in TRX files, and a separate directory for outputs.
pub struct ResultsDir {
    results: Utf8TempDir,
    outputs: Utf8TempDir,
}

impl ResultsDir {
    pub fn new() -> Self {
        Self {
            results: Utf8TempDir::new().expect("created results dir"),
            outputs: Utf8TempDir::new().expect("created outputs dir"),
        }
    }

    /// Copies the fixture `name` into the results directory as `dest`.
    pub fn with_fixture(self, name: &str, dest: &str) -> Self {
        let source = fixtures_dir().join(name);
        std::fs::copy(&source, self.results.path().join(dest))
            .unwrap_or_else(|error| panic!("copying fixture `{source}` failed: {error}"));
        self
    }

    pub fn path(&self) -> &Utf8Path {
        self.results.path()
    }

    pub fn output_md(&self) -> Utf8PathBuf {
        self.outputs.path().join("failures.md")
    }

    pub fn output_filter(&self) -> Utf8PathBuf {
        self.outputs.path().join("filter.txt")
    }

    /// The three positional arguments for a run over this directory.
    pub fn args(&self) -> [String; 3] {
        [
            self.path().to_string(),
            self.output_md().into_string(),
            self.output_filter().into_string(),
        ]
    }

    pub fn read_md(&self) -> String {
        std::fs::read_to_string(self.output_md()).expect("read markdown summary")
    }

    pub fn read_filter(&self) -> String {
        std::fs::read_to_string(self.output_filter()).expect("read filter expression")
    }
}

fn fixtures_dir() -> Utf8PathBuf {
    Utf8Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}
