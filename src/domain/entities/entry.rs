//! Entry entity - one filesystem object discovered during a scan

use std::path::{Path, PathBuf};

/// A single filesystem entry discovered during scanning.
///
/// `depth` is the depth of the *parent* directory relative to the scan
/// root, so direct children of the root have depth 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Absolute path of the entry
    pub path: PathBuf,
    /// Basename of the entry
    pub name: String,
    /// Whether the entry is a directory (symlinks are never directories)
    pub is_dir: bool,
    /// Parent directory depth from the scan root
    pub depth: usize,
    /// Absolute path of the parent directory
    pub parent_path: PathBuf,
}

impl Entry {
    /// Create an entry for `name` inside `parent`.
    pub fn new(parent: &Path, name: impl Into<String>, is_dir: bool, depth: usize) -> Self {
        let name = name.into();
        Self {
            path: parent.join(&name),
            name,
            is_dir,
            depth,
            parent_path: parent.to_path_buf(),
        }
    }

    /// Shorthand for a file entry.
    pub fn file(parent: &Path, name: impl Into<String>, depth: usize) -> Self {
        Self::new(parent, name, false, depth)
    }

    /// Shorthand for a directory entry.
    pub fn dir(parent: &Path, name: impl Into<String>, depth: usize) -> Self {
        Self::new(parent, name, true, depth)
    }
}
