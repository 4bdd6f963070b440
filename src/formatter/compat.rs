//! Tree-compatible box-drawing output formatter

use std::path::{Path, PathBuf};

use crate::domain::entities::Entry;
use crate::domain::value_objects::{Charset, SortOrder};

use super::group_by_parent;

/// Options for the compat formatter
#[derive(Debug, Clone, Default)]
pub struct CompatOptions {
    pub charset: Charset,
    /// Sort directories before files at every level
    pub dirs_first: bool,
    /// Print each entry's path relative to the root instead of its name
    pub full_path: bool,
    /// Omit the trailing "N directories, M files" report
    pub no_report: bool,
    /// Root shown on the first line and used for full paths. `None`
    /// prints `.`.
    pub root_path: Option<PathBuf>,
    pub order: SortOrder,
}

/// Sort one directory's children by name, optionally directories first.
fn sort_children<'a>(mut children: Vec<&'a Entry>, dirs_first: bool, order: SortOrder) -> Vec<&'a Entry> {
    children.sort_by(|a, b| {
        let by_kind = if dirs_first {
            b.is_dir.cmp(&a.is_dir)
        } else {
            std::cmp::Ordering::Equal
        };
        by_kind.then_with(|| order.apply(a.name.cmp(&b.name)))
    });
    children
}

/// GNU tree-like summary line with singular/plural inflection.
fn report_line(dir_count: usize, file_count: usize) -> String {
    let dir_word = if dir_count == 1 { "directory" } else { "directories" };
    let file_word = if file_count == 1 { "file" } else { "files" };
    format!("{dir_count} {dir_word}, {file_count} {file_word}")
}

fn display_name(entry: &Entry, options: &CompatOptions, root: &Path) -> String {
    let mut name = if options.full_path {
        let base = options.root_path.as_deref().unwrap_or(root);
        match entry.path.strip_prefix(base) {
            Ok(rel) => rel.to_string_lossy().into_owned(),
            Err(_) => entry.path.to_string_lossy().into_owned(),
        }
    } else {
        entry.name.clone()
    };
    if entry.is_dir {
        name.push('/');
    }
    name
}

/// Render entries as tree-compatible box-drawing text.
///
/// The first line is the root (`.` unless a root path is given), followed
/// by one line per entry and, unless disabled, a blank line and the report.
pub fn format_compat(entries: &[Entry], options: &CompatOptions) -> String {
    let glyphs = options.charset.glyphs();

    let root_display = options
        .root_path
        .as_deref()
        .map(|root| root.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string());

    let mut lines = vec![root_display];
    let mut dir_count = 0;
    let mut file_count = 0;

    if let Some(first) = entries.first() {
        let root_parent = first.parent_path.as_path();
        let mut groups = group_by_parent(entries);

        // Stack items: (entry, prefix, is_last_sibling). Children are pushed
        // in reverse so the first child is popped first.
        let root_children = sort_children(
            groups.remove(root_parent).unwrap_or_default(),
            options.dirs_first,
            options.order,
        );
        let mut stack: Vec<(&Entry, String, bool)> = Vec::new();
        let last = root_children.len().saturating_sub(1);
        for (i, child) in root_children.into_iter().enumerate().rev() {
            stack.push((child, String::new(), i == last));
        }

        while let Some((child, prefix, is_last)) = stack.pop() {
            let connector = if is_last { glyphs.last_branch } else { glyphs.branch };

            if child.is_dir {
                dir_count += 1;
            } else {
                file_count += 1;
            }
            lines.push(format!(
                "{prefix}{connector}{}",
                display_name(child, options, root_parent)
            ));

            if !child.is_dir {
                continue;
            }

            let next_prefix = format!(
                "{prefix}{}",
                if is_last { glyphs.space } else { glyphs.vertical }
            );
            let grandchildren = sort_children(
                groups.remove(child.path.as_path()).unwrap_or_default(),
                options.dirs_first,
                options.order,
            );
            let last = grandchildren.len().saturating_sub(1);
            for (j, grandchild) in grandchildren.into_iter().enumerate().rev() {
                stack.push((grandchild, next_prefix.clone(), j == last));
            }
        }
    }

    if !options.no_report {
        lines.push(String::new());
        lines.push(report_line(dir_count, file_count));
    }

    lines.join("\n")
}
