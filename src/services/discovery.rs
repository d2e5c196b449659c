//! Notebook discovery
//!
//! Recursively enumerates notebooks below a root directory, skipping
//! checkpoint copies. Order follows the filesystem and is not stable.

use crate::domain::{has_notebook_extension, is_checkpoint, validate_directory, CHECKPOINT_DIR};
use crate::error::ValidationError;

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// A filesystem entry found during discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// A notebook file to process
    Notebook(PathBuf),
    /// An entry that could not be read while walking
    Unreadable { path: PathBuf, message: String },
}

impl Candidate {
    /// Path of the entry
    pub fn path(&self) -> &Path {
        match self {
            Self::Notebook(path) | Self::Unreadable { path, .. } => path,
        }
    }
}

/// Find every notebook below `root`
///
/// Checkpoint directories are not descended into, and every candidate is
/// checked against the checkpoint filter, root included. Walk errors
/// are returned as [`Candidate::Unreadable`] so the batch can continue.
pub fn discover(root: &Path) -> Result<Vec<Candidate>, ValidationError> {
    validate_directory(root)?;

    let mut found = Vec::new();
    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_checkpoint_dir(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                log::warn!("Cannot read {}: {}", path.display(), e);
                found.push(Candidate::Unreadable {
                    path,
                    message: e.to_string(),
                });
                continue;
            }
        };

        let path = entry.path();

        if !has_notebook_extension(path) || !path.is_file() {
            continue;
        }

        if is_checkpoint(path) {
            log::debug!("Skipping checkpoint copy {}", path.display());
            continue;
        }

        found.push(Candidate::Notebook(path.to_path_buf()));
    }

    Ok(found)
}

fn is_checkpoint_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name() == CHECKPOINT_DIR
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;
    use tempfile::TempDir;

    fn names(root: &Path, found: &[Candidate]) -> BTreeSet<String> {
        found
            .iter()
            .map(|c| {
                c.path()
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_discovers_nested_notebooks() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("docs/deep")).unwrap();
        fs::write(dir.path().join("a.ipynb"), "{}").unwrap();
        fs::write(dir.path().join("docs/deep/b.ipynb"), "{}").unwrap();
        fs::write(dir.path().join("docs/readme.md"), "").unwrap();

        let found = discover(dir.path()).unwrap();
        assert_eq!(
            names(dir.path(), &found),
            BTreeSet::from(["a.ipynb".to_string(), "docs/deep/b.ipynb".to_string()])
        );
    }

    #[test]
    fn test_skips_checkpoint_copies() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(".ipynb_checkpoints")).unwrap();
        fs::create_dir_all(dir.path().join("sub/.ipynb_checkpoints")).unwrap();
        fs::write(dir.path().join("a.ipynb"), "{}").unwrap();
        fs::write(dir.path().join(".ipynb_checkpoints/a-checkpoint.ipynb"), "{}").unwrap();
        fs::write(dir.path().join("sub/.ipynb_checkpoints/b.ipynb"), "{}").unwrap();

        let found = discover(dir.path()).unwrap();
        assert_eq!(
            names(dir.path(), &found),
            BTreeSet::from(["a.ipynb".to_string()])
        );
    }

    #[test]
    fn test_root_inside_checkpoint_dir_yields_nothing() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("docs/.ipynb_checkpoints");
        fs::create_dir_all(root.join("nested")).unwrap();
        fs::write(root.join("a-checkpoint.ipynb"), "{}").unwrap();
        fs::write(root.join("nested/b.ipynb"), "{}").unwrap();

        assert!(discover(&root).unwrap().is_empty());
    }

    #[test]
    fn test_directory_named_like_notebook_ignored() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("odd.ipynb")).unwrap();

        assert!(discover(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert!(discover(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_root_rejected() {
        let dir = TempDir::new().unwrap();
        let err = discover(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, ValidationError::NotADirectory(_)));
    }
}
