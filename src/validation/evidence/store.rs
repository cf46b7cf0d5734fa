//! Access to the supporting material tree

use anyhow::{Context, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::loader::FileScanner;

/// Where supporting material files are read from.
///
/// The validator only needs to read individual documents and list what is
/// present, which keeps the checks testable without touching the filesystem.
pub trait EvidenceStore {
    /// Directory under which the per-group directories live
    fn root(&self) -> &Path;

    /// Contents of the document, or `None` if it does not exist
    fn read(&self, path: &Path) -> Result<Option<String>>;

    /// Every supporting material file present below the root
    fn evidence_files(&self) -> Result<BTreeSet<PathBuf>>;
}

/// Supporting material read from disk.
pub struct FsEvidenceStore {
    root: PathBuf,
}

impl FsEvidenceStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl EvidenceStore for FsEvidenceStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn read(&self, path: &Path) -> Result<Option<String>> {
        if !path.is_file() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(content))
    }

    fn evidence_files(&self) -> Result<BTreeSet<PathBuf>> {
        Ok(FileScanner::scan_evidence_files(&self.root)?
            .into_iter()
            .collect())
    }
}

/// Supporting material held in memory, keyed by full path.
#[derive(Debug, Clone, Default)]
pub struct MemoryEvidenceStore {
    root: PathBuf,
    files: BTreeMap<PathBuf, String>,
}

impl MemoryEvidenceStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    pub fn get_mut(&mut self, path: &Path) -> Option<&mut String> {
        self.files.get_mut(path)
    }

    pub fn remove(&mut self, path: &Path) -> Option<String> {
        self.files.remove(path)
    }
}

impl EvidenceStore for MemoryEvidenceStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn read(&self, path: &Path) -> Result<Option<String>> {
        Ok(self.files.get(path).cloned())
    }

    fn evidence_files(&self) -> Result<BTreeSet<PathBuf>> {
        Ok(self
            .files
            .keys()
            .filter(|path| path.starts_with(&self.root) && FileScanner::is_evidence_file(path))
            .cloned()
            .collect())
    }
}
