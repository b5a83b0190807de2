/// Line sources: where word list text comes from.

use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

use crate::core::bank::BankError;

/// Produces the lines of a named resource, in file order.
pub trait LineSource {
    fn lines(&self, resource: &str) -> Result<Vec<String>, BankError>;
}

/// Split raw list text into candidate lines.
///
/// Line terminators are stripped and blank or `//` comment lines skipped.
/// Any other whitespace is kept so validation can report it.
pub fn split_lines(text: &str) -> Vec<String> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with("//")
        })
        .map(str::to_string)
        .collect()
}

/// Reads resources as files under a root directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl LineSource for DirSource {
    fn lines(&self, resource: &str) -> Result<Vec<String>, BankError> {
        let path = self.root.join(resource);
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(split_lines(&text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(BankError::MissingResource(path.display().to_string()))
            }
            Err(e) => Err(BankError::Io(e)),
        }
    }
}

/// Serves resources from text held in memory (embedded lists, tests).
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: FxHashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, resource: &str, text: &str) -> Self {
        self.insert(resource, text);
        self
    }

    pub fn insert(&mut self, resource: &str, text: &str) {
        self.files.insert(resource.to_string(), text.to_string());
    }
}

impl LineSource for MemorySource {
    fn lines(&self, resource: &str) -> Result<Vec<String>, BankError> {
        self.files
            .get(resource)
            .map(|text| split_lines(text))
            .ok_or_else(|| BankError::MissingResource(resource.to_string()))
    }
}
