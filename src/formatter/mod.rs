//! Output formatters
//!
//! Each formatter turns the flat scan result into a single string with no
//! trailing newline. The binary appends the final newline when writing.
//!
//! - `compat` - `tree(1)`-style box drawing with a summary report
//! - `short` - compact lines grouped by directory, with an optional budget
//! - `csv` - one row per entry
//! - `markdown` - wraps compat or short output in a Markdown section

pub mod compat;
pub mod csv;
pub mod markdown;
pub mod short;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::entities::Entry;

pub use self::compat::{format_compat, CompatOptions};
pub use self::csv::{format_csv, CsvColumn, CsvOptions};
pub use self::markdown::{format_markdown, MdMode, MdOptions};
pub use self::short::{format_short, ShortOptions};

/// Group entries by parent path, preserving scan order within each group.
pub(crate) fn group_by_parent(entries: &[Entry]) -> HashMap<&Path, Vec<&Entry>> {
    let mut groups: HashMap<&Path, Vec<&Entry>> = HashMap::new();
    for entry in entries {
        groups
            .entry(entry.parent_path.as_path())
            .or_default()
            .push(entry);
    }
    groups
}

/// Root used when the caller does not supply one: the parent of the first
/// entry, which the scanner guarantees is the scan root.
pub(crate) fn infer_root(entries: &[Entry], root_path: Option<&Path>) -> PathBuf {
    root_path
        .map(Path::to_path_buf)
        .or_else(|| entries.first().map(|e| e.parent_path.clone()))
        .unwrap_or_else(|| PathBuf::from("."))
}
