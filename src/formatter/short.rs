//! Short grouped output formatter
//!
//! Rules:
//! 1. No box drawing, paths only.
//! 2. Files in the same directory are comma-joined on one line.
//! 3. Directories without any children get their own `dir/` line.
//! 4. `--budget N` aggregates groups deepest first until the output fits.
//! 5. `--count` adds `(files: N)` to each group.

use std::collections::{HashMap, HashSet};
use std::path::{Component, Path, PathBuf};

use crate::domain::entities::Entry;
use crate::domain::value_objects::SortOrder;

use super::infer_root;

/// Options for short grouped output
#[derive(Debug, Clone, Default)]
pub struct ShortOptions {
    /// Approximate character budget for the whole output
    pub budget: Option<usize>,
    /// Include per-group file counts
    pub count: bool,
    /// Root used for relative directory keys
    pub root_path: Option<PathBuf>,
    pub order: SortOrder,
}

/// One output group: a directory key and the files directly inside it.
/// A group with no files is a childless directory.
#[derive(Debug)]
struct Group<'a> {
    key: String,
    files: Vec<&'a Entry>,
}

/// Display key for `path` relative to `root`, `/`-separated. The root
/// itself is `.`; paths outside the root fall back to their full form.
pub fn build_relative_dir_key(path: &Path, root: &Path) -> String {
    let Ok(rel) = path.strip_prefix(root) else {
        return path.to_string_lossy().into_owned();
    };
    let parts: Vec<_> = rel
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

/// Group entries by parent directory key in scan order.
fn build_groups<'a>(entries: &'a [Entry], root: &Path) -> Vec<Group<'a>> {
    let dirs_with_children: HashSet<String> = entries
        .iter()
        .map(|entry| build_relative_dir_key(&entry.parent_path, root))
        .collect();

    let mut groups: Vec<Group<'a>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let key = if entry.is_dir {
            let dir_key = build_relative_dir_key(&entry.path, root);
            if dirs_with_children.contains(&dir_key) {
                continue;
            }
            format!("{dir_key}/")
        } else {
            build_relative_dir_key(&entry.parent_path, root)
        };

        let slot = *index.entry(key.clone()).or_insert_with(|| {
            groups.push(Group {
                key,
                files: Vec::new(),
            });
            groups.len() - 1
        });
        if !entry.is_dir {
            groups[slot].files.push(entry);
        }
    }

    groups
}

fn format_group_line(group: &Group<'_>, count: bool) -> String {
    if group.files.is_empty() {
        return group.key.clone();
    }

    let names = group
        .files
        .iter()
        .map(|entry| entry.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    if count {
        format!("{} (files: {}): {}", group.key, group.files.len(), names)
    } else {
        format!("{}: {}", group.key, names)
    }
}

fn format_aggregate_line(group: &Group<'_>) -> String {
    format!(
        "{}/* ({} files)",
        group.key.trim_end_matches('/'),
        group.files.len()
    )
}

/// Characters the lines occupy once joined with newlines.
fn lines_length(lines: &[String]) -> usize {
    lines.iter().map(|line| line.chars().count()).sum::<usize>() + lines.len()
}

/// Aggregate groups deepest first until the output fits within `budget`.
///
/// Depth is the number of `/` in a group key. Groups of equal depth keep
/// their scan order. The length check runs before each group, so a group is
/// only aggregated while the output is still over budget.
fn aggregate_deep_groups(groups: &[Group<'_>], budget: usize, count: bool) -> Vec<String> {
    let mut lines: Vec<String> = groups
        .iter()
        .map(|group| format_group_line(group, count))
        .collect();

    if lines_length(&lines) <= budget {
        return lines;
    }

    let mut candidates: Vec<usize> = (0..groups.len()).collect();
    candidates.sort_by_key(|&i| std::cmp::Reverse(groups[i].key.matches('/').count()));

    let mut aggregated = vec![false; groups.len()];
    for i in candidates {
        if lines_length(&lines) <= budget {
            break;
        }
        if aggregated[i] || groups[i].files.is_empty() {
            continue;
        }
        lines[i] = format_aggregate_line(&groups[i]);
        aggregated[i] = true;
    }

    lines
}

/// Render entries as compact grouped text.
pub fn format_short(entries: &[Entry], options: &ShortOptions) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let root = infer_root(entries, options.root_path.as_deref());
    let mut groups = build_groups(entries, &root);

    if options.order.is_desc() {
        for group in &mut groups {
            group.files.sort_by(|a, b| b.name.cmp(&a.name));
        }
    }

    let lines = match options.budget {
        Some(budget) => aggregate_deep_groups(&groups, budget, options.count),
        None => groups
            .iter()
            .map(|group| format_group_line(group, options.count))
            .collect(),
    };

    lines.join("\n")
}
