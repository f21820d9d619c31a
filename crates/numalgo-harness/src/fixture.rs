//! Fixture retrieval.
//!
//! A fixture is a pair of text blobs named `{prefix}_test.{index}.in` and
//! `{prefix}_test.{index}.out`. The harness only ever reads them.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Why a fixture could not be retrieved.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// No fixture with this name exists.
    #[error("fixture {0} not found")]
    NotFound(String),

    /// The fixture exists but could not be read as UTF-8 text.
    #[error("failed to read fixture {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// Source of named fixture texts.
pub trait FixtureStore {
    /// Fetch the full text of the named fixture.
    fn resolve(&self, name: &str) -> Result<String, FixtureError>;
}

/// Which half of a fixture pair to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureKind {
    Input,
    Expected,
}

impl FixtureKind {
    fn extension(self) -> &'static str {
        match self {
            FixtureKind::Input => "in",
            FixtureKind::Expected => "out",
        }
    }
}

/// Name of one half of the fixture pair at `index`.
#[must_use]
pub fn fixture_name(prefix: &str, index: usize, kind: FixtureKind) -> String {
    format!("{prefix}_test.{index}.{}", kind.extension())
}

/// Fixtures stored as files directly under a root directory.
#[derive(Debug, Clone)]
pub struct DirFixtureStore {
    root: PathBuf,
}

impl DirFixtureStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FixtureStore for DirFixtureStore {
    fn resolve(&self, name: &str) -> Result<String, FixtureError> {
        let path = self.root.join(name);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(FixtureError::NotFound(name.to_string()));
            }
            Err(source) => {
                return Err(FixtureError::Read {
                    name: name.to_string(),
                    source,
                });
            }
        };
        String::from_utf8(bytes).map_err(|e| FixtureError::Read {
            name: name.to_string(),
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })
    }
}

/// In-memory fixtures, mainly for tests.
///
/// An entry registered with [`MemoryFixtureStore::insert_unreadable`] resolves
/// to a read error.
#[derive(Debug, Clone, Default)]
pub struct MemoryFixtureStore {
    entries: HashMap<String, Option<String>>,
}

impl MemoryFixtureStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fixture text.
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.entries.insert(name.into(), Some(text.into()));
        self
    }

    /// Register both halves of the fixture pair at `index`.
    pub fn insert_pair(
        &mut self,
        prefix: &str,
        index: usize,
        input: impl Into<String>,
        expected: impl Into<String>,
    ) -> &mut Self {
        self.insert(fixture_name(prefix, index, FixtureKind::Input), input);
        self.insert(fixture_name(prefix, index, FixtureKind::Expected), expected)
    }

    /// Register a fixture that exists but cannot be read.
    pub fn insert_unreadable(&mut self, name: impl Into<String>) -> &mut Self {
        self.entries.insert(name.into(), None);
        self
    }

    /// Remove a fixture.
    pub fn remove(&mut self, name: &str) -> &mut Self {
        self.entries.remove(name);
        self
    }
}

impl FixtureStore for MemoryFixtureStore {
    fn resolve(&self, name: &str) -> Result<String, FixtureError> {
        match self.entries.get(name) {
            Some(Some(text)) => Ok(text.clone()),
            Some(None) => Err(FixtureError::Read {
                name: name.to_string(),
                source: io::Error::new(io::ErrorKind::InvalidData, "unreadable fixture"),
            }),
            None => Err(FixtureError::NotFound(name.to_string())),
        }
    }
}
