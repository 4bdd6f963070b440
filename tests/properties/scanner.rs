//! Property tests for the scanner over random on-disk trees.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use proptest::prelude::*;
use tempfile::TempDir;

use neotree::{scan, ScanOptions};

/// Relative paths like `a/b/c.txt`; the last segment is a file.
fn random_tree_case() -> impl Strategy<Value = Vec<String>> {
    let segment = proptest::string::string_regex("[a-z]{1,3}").unwrap();
    let path = proptest::collection::vec(segment, 1..=4).prop_map(|segments| {
        let (last, dirs) = segments.split_last().unwrap();
        let mut parts: Vec<String> = dirs.iter().map(|d| format!("d{d}")).collect();
        parts.push(format!("f{last}.txt"));
        parts.join("/")
    });
    proptest::collection::vec(path, 0..12)
}

fn build_tree(paths: &[String]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for rel in paths {
        let full = dir.path().join(rel);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(&full, "").unwrap();
    }
    dir
}

fn rel_components(path: &Path, root: &Path) -> usize {
    path.strip_prefix(root).unwrap().components().count()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every file on disk appears exactly once, with depth equal to
    /// its parent's distance from the root.
    #[test]
    fn property_scan_finds_every_file(paths in random_tree_case()) {
        let tree = build_tree(&paths);
        let root = fs::canonicalize(tree.path()).unwrap();
        let entries = scan(&root, &ScanOptions::default(), None);

        let expected: BTreeSet<_> = paths.iter().map(|p| root.join(p)).collect();
        let found: BTreeSet<_> = entries
            .iter()
            .filter(|e| !e.is_dir)
            .map(|e| e.path.clone())
            .collect();
        prop_assert_eq!(found, expected);

        for entry in &entries {
            prop_assert_eq!(entry.depth, rel_components(&entry.path, &root) - 1);
            prop_assert_eq!(entry.path.parent().unwrap(), entry.parent_path.as_path());
        }
    }

    /// PROPERTY: siblings are emitted contiguously and in name order.
    #[test]
    fn property_siblings_contiguous_and_sorted(paths in random_tree_case()) {
        let tree = build_tree(&paths);
        let entries = scan(tree.path(), &ScanOptions::default(), None);

        let mut seen_parents = BTreeSet::new();
        for run in entries.chunk_by(|a, b| a.parent_path == b.parent_path) {
            prop_assert!(seen_parents.insert(run[0].parent_path.clone()));
            let names: Vec<&str> = run.iter().map(|e| e.name.as_str()).collect();
            let mut sorted = names.clone();
            sorted.sort_unstable();
            prop_assert_eq!(names, sorted);
        }
    }

    /// PROPERTY: max_depth bounds entry depth.
    #[test]
    fn property_max_depth_bounds_depth(paths in random_tree_case(), max_depth in 0usize..3) {
        let tree = build_tree(&paths);
        let options = ScanOptions { max_depth: Some(max_depth), ..ScanOptions::default() };
        for entry in scan(tree.path(), &options, None) {
            prop_assert!(entry.depth <= max_depth);
        }
    }

    /// PROPERTY: files_only yields exactly the files of a full scan.
    #[test]
    fn property_files_only_matches_file_subset(paths in random_tree_case()) {
        let tree = build_tree(&paths);
        let all = scan(tree.path(), &ScanOptions::default(), None);
        let files_only = scan(
            tree.path(),
            &ScanOptions { files_only: true, ..ScanOptions::default() },
            None,
        );
        let expected: Vec<_> = all.into_iter().filter(|e| !e.is_dir).collect();
        prop_assert_eq!(files_only, expected);
    }
}
