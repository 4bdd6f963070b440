//! Property tests for the compat and short formatters.

use std::path::PathBuf;

use proptest::prelude::*;

use neotree::formatter::{CompatOptions, ShortOptions};
use neotree::{format_compat, format_short, Entry};

/// Flat root listing: unique names with a directory flag.
fn flat_entries_case() -> impl Strategy<Value = Vec<Entry>> {
    proptest::collection::btree_map("[a-z]{1,6}", any::<bool>(), 0..10).prop_map(|names| {
        let root = PathBuf::from("/fake/root");
        names
            .into_iter()
            .map(|(name, is_dir)| Entry::new(&root, name, is_dir, 0))
            .collect()
    })
}

/// Files spread over a few nested directories, in scanner order.
fn grouped_entries_case() -> impl Strategy<Value = Vec<Entry>> {
    proptest::collection::vec(proptest::collection::btree_set("[a-z]{1,5}", 1..4), 1..5).prop_map(
        |groups| {
            let root = PathBuf::from("/fake/root");
            let mut entries = Vec::new();
            let mut parent = root.clone();
            for (depth, files) in groups.into_iter().enumerate() {
                for file in files {
                    entries.push(Entry::file(&parent, format!("{file}.txt"), depth));
                }
                entries.push(Entry::dir(&parent, "sub", depth));
                parent = parent.join("sub");
            }
            entries
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: compat prints one line per entry and an accurate report.
    #[test]
    fn property_compat_line_count_and_report(entries in flat_entries_case()) {
        let output = format_compat(&entries, &CompatOptions::default());
        let lines: Vec<&str> = output.lines().collect();
        prop_assert_eq!(lines.len(), entries.len() + 3);

        let dirs = entries.iter().filter(|e| e.is_dir).count();
        let files = entries.len() - dirs;
        let report = lines[lines.len() - 1];
        let dirs_prefix = format!("{} director", dirs);
        let files_part = format!(", {} file", files);
        prop_assert!(report.starts_with(&dirs_prefix));
        prop_assert!(report.contains(&files_part));
    }

    /// PROPERTY: desc order is the reverse of asc for a flat listing.
    #[test]
    fn property_compat_desc_reverses_asc(entries in flat_entries_case()) {
        let asc = format_compat(&entries, &CompatOptions { no_report: true, ..CompatOptions::default() });
        let desc = format_compat(
            &entries,
            &CompatOptions {
                no_report: true,
                order: neotree::SortOrder::Desc,
                ..CompatOptions::default()
            },
        );
        let strip = |s: &str| -> Vec<String> {
            s.lines().skip(1).map(|l| l.chars().skip(4).collect()).collect()
        };
        let mut reversed = strip(&asc);
        reversed.reverse();
        prop_assert_eq!(strip(&desc), reversed);
    }

    /// PROPERTY: a budget at least as large as the full output changes nothing.
    #[test]
    fn property_short_generous_budget_is_identity(entries in grouped_entries_case()) {
        let plain = format_short(&entries, &ShortOptions::default());
        let budgeted = format_short(
            &entries,
            &ShortOptions { budget: Some(plain.chars().count() + 1), ..ShortOptions::default() },
        );
        prop_assert_eq!(budgeted, plain);
    }

    /// PROPERTY: budgeting never changes the number of lines and only
    /// replaces whole lines with `dir/* (N files)` summaries.
    #[test]
    fn property_short_budget_replaces_whole_lines(
        entries in grouped_entries_case(),
        budget in 1usize..200,
    ) {
        let plain = format_short(&entries, &ShortOptions::default());
        let budgeted = format_short(
            &entries,
            &ShortOptions { budget: Some(budget), ..ShortOptions::default() },
        );
        let plain_lines: Vec<&str> = plain.lines().collect();
        let budget_lines: Vec<&str> = budgeted.lines().collect();
        prop_assert_eq!(plain_lines.len(), budget_lines.len());
        for (before, after) in plain_lines.iter().zip(&budget_lines) {
            prop_assert!(before == after || after.ends_with(" files)"));
        }
    }
}
