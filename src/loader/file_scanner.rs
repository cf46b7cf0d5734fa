//! File scanning utilities for discovering supporting material files

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extension of supporting material documents
pub const EVIDENCE_EXTENSION: &str = "md";

pub struct FileScanner;

impl FileScanner {
    /// Check if a file has the supporting material extension
    pub fn is_evidence_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext == EVIDENCE_EXTENSION)
            .unwrap_or(false)
    }

    /// Recursively collect every supporting material file below `root`, sorted
    pub fn scan_evidence_files(root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        if !root.exists() {
            return Ok(files);
        }

        for entry in WalkDir::new(root) {
            let entry = entry.with_context(|| format!("Failed to scan {}", root.display()))?;
            if entry.file_type().is_file() && Self::is_evidence_file(entry.path()) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_is_recursive_and_filters_extension() {
        let temp_dir = TempDir::new().unwrap();
        let group_dir = temp_dir.path().join("CD3_AF488");
        fs::create_dir_all(&group_dir).unwrap();
        fs::write(group_dir.join("A.md"), "").unwrap();
        fs::write(group_dir.join("notes.txt"), "").unwrap();
        fs::write(temp_dir.path().join("README.md"), "").unwrap();

        let files = FileScanner::scan_evidence_files(temp_dir.path()).unwrap();
        assert_eq!(
            files,
            vec![group_dir.join("A.md"), temp_dir.path().join("README.md")]
        );
    }

    #[test]
    fn test_missing_root_has_no_files() {
        let temp_dir = TempDir::new().unwrap();
        let files = FileScanner::scan_evidence_files(&temp_dir.path().join("absent")).unwrap();
        assert!(files.is_empty());
    }
}
