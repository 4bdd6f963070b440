//! Directory scanner
//!
//! Walks a directory tree depth-first with an explicit stack and returns a
//! flat, deterministic list of [`Entry`] values. Children of every
//! directory are sorted by name before they are emitted.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::Entry;

/// Options controlling scanner behavior
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Maximum parent depth to read. `None` means unlimited.
    pub max_depth: Option<usize>,
    /// Include only directories
    pub dirs_only: bool,
    /// Include hidden (dot) entries
    pub all_files: bool,
    /// Omit directory entries but still descend into them
    pub files_only: bool,
}

/// A directory child offered to an [`EntryFilter`] before it becomes an entry.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// Absolute path of the child
    pub path: &'a Path,
    /// Basename of the child
    pub name: &'a str,
    pub is_dir: bool,
}

/// Decides which children are excluded from a scan.
///
/// An excluded directory is not descended into.
pub trait EntryFilter {
    fn should_exclude(&self, candidate: &Candidate<'_>) -> bool;
}

/// Pass-through filter that excludes nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullFilter;

impl EntryFilter for NullFilter {
    fn should_exclude(&self, _candidate: &Candidate<'_>) -> bool {
        false
    }
}

/// Scan `root` and return entries in deterministic DFS order.
///
/// All children of a directory are emitted together, then each child
/// directory is visited in name order. A root that does not exist or is not
/// a directory yields no entries.
pub fn scan(root: &Path, options: &ScanOptions, filter: Option<&dyn EntryFilter>) -> Vec<Entry> {
    let filter = filter.unwrap_or(&NullFilter);

    let root = match fs::canonicalize(root) {
        Ok(root) if root.is_dir() => root,
        _ => return Vec::new(),
    };

    let mut result = Vec::new();
    let mut stack: Vec<(PathBuf, usize)> = vec![(root, 0)];

    while let Some((current_dir, depth)) = stack.pop() {
        if options.max_depth.is_some_and(|max| depth > max) {
            continue;
        }

        let children = match read_sorted_children(&current_dir) {
            Ok(children) => children,
            Err(err) => {
                tracing::debug!(dir = %current_dir.display(), error = %err, "cannot read directory");
                continue;
            }
        };

        let mut child_dirs = Vec::new();

        for child in children {
            let name = child.file_name().to_string_lossy().into_owned();
            let child_path = child.path();

            // file_type() does not follow symlinks
            let is_dir = match child.file_type() {
                Ok(file_type) => file_type.is_dir(),
                Err(err) => {
                    tracing::debug!(path = %child_path.display(), error = %err, "cannot stat entry");
                    continue;
                }
            };

            if !options.all_files && name.starts_with('.') {
                continue;
            }

            let candidate = Candidate {
                path: &child_path,
                name: &name,
                is_dir,
            };
            if filter.should_exclude(&candidate) {
                tracing::trace!(path = %child_path.display(), "excluded");
                continue;
            }

            if options.dirs_only && !is_dir {
                continue;
            }

            if is_dir {
                child_dirs.push((child_path.clone(), depth + 1));
            }

            if options.files_only && is_dir {
                continue;
            }

            result.push(Entry {
                path: child_path,
                name,
                is_dir,
                depth,
                parent_path: current_dir.clone(),
            });
        }

        // Reverse so the first directory by name is popped next
        stack.extend(child_dirs.into_iter().rev());
    }

    tracing::info!(entries = result.len(), "scan complete");
    result
}

fn read_sorted_children(dir: &Path) -> std::io::Result<Vec<fs::DirEntry>> {
    let mut children = fs::read_dir(dir)?
        .filter_map(|child| match child {
            Ok(child) => Some(child),
            Err(err) => {
                tracing::debug!(dir = %dir.display(), error = %err, "cannot read directory entry");
                None
            }
        })
        .collect::<Vec<_>>();
    children.sort_by_key(|child| child.file_name());
    Ok(children)
}
