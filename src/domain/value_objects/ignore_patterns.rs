//! Ignore patterns value object
//!
//! Handles loading and matching the root `.gitignore` using gitignore semantics.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the ignore file read from the scan root
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Patterns loaded from a `.gitignore` file.
///
/// Uses the `ignore` crate for gitignore-compatible pattern matching.
#[derive(Debug)]
pub struct IgnorePatterns {
    matcher: Gitignore,
    pattern_count: usize,
}

impl IgnorePatterns {
    /// Load patterns from `<root>/.gitignore`.
    ///
    /// Returns `None` if the file is missing or unreadable. Both cases are
    /// logged at debug level rather than reported to the user.
    pub fn load(root: &Path) -> Option<Self> {
        let ignore_path = root.join(GITIGNORE_FILE);
        let content = match fs::read_to_string(&ignore_path) {
            Ok(content) => content,
            Err(err) => {
                tracing::debug!(path = %ignore_path.display(), error = %err, "cannot read .gitignore");
                return None;
            }
        };

        match Self::from_content(root, &ignore_path, &content) {
            Ok(patterns) => {
                tracing::debug!(
                    path = %ignore_path.display(),
                    patterns = patterns.pattern_count(),
                    "loaded .gitignore"
                );
                Some(patterns)
            }
            Err(err) => {
                tracing::warn!("{err}");
                None
            }
        }
    }

    /// Parse patterns from string content.
    ///
    /// Lines with invalid glob syntax are logged and skipped so that one bad
    /// line does not disable the whole file.
    pub fn from_content(
        root: &Path,
        source_path: &Path,
        content: &str,
    ) -> Result<Self, IgnoreError> {
        let mut builder = GitignoreBuilder::new(root);
        let mut pattern_count = 0;

        for (line_num, line) in content.lines().enumerate() {
            let trimmed = line.trim();

            // Skip empty lines and comments
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            if let Err(e) = builder.add_line(Some(source_path.to_path_buf()), line) {
                let skipped = IgnoreError::InvalidPattern {
                    path: source_path.to_path_buf(),
                    line: line_num + 1,
                    pattern: line.to_string(),
                    message: e.to_string(),
                };
                tracing::warn!("{skipped}");
                continue;
            }
            pattern_count += 1;
        }

        let matcher = builder
            .build()
            .map_err(|e| IgnoreError::BuildFailed(e.to_string()))?;

        Ok(Self {
            matcher,
            pattern_count,
        })
    }

    /// Check if a path relative to the root should be ignored.
    ///
    /// A path is also ignored when one of its parent directories is.
    pub fn is_ignored(&self, rel_path: &Path, is_dir: bool) -> bool {
        if rel_path.as_os_str().is_empty() || rel_path.has_root() {
            return false;
        }
        self.matcher
            .matched_path_or_any_parents(rel_path, is_dir)
            .is_ignore()
    }

    /// Get the number of patterns loaded.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Whether no usable pattern was loaded.
    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }
}

/// Errors that can occur when loading ignore patterns.
#[derive(Debug)]
pub enum IgnoreError {
    /// A pattern has invalid syntax.
    InvalidPattern {
        path: PathBuf,
        line: usize,
        pattern: String,
        message: String,
    },
    /// Failed to build the gitignore matcher.
    BuildFailed(String),
}

impl fmt::Display for IgnoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern {
                path,
                line,
                pattern,
                message,
            } => {
                write!(
                    f,
                    "Invalid pattern at {}:{}: '{}' - {}",
                    path.display(),
                    line,
                    pattern,
                    message
                )
            }
            Self::BuildFailed(msg) => write!(f, "Failed to build ignore matcher: {}", msg),
        }
    }
}

impl std::error::Error for IgnoreError {}
