//! Common test utilities for ntree integration tests.
//!
//! This module provides:
//! - Fixture trees: `sample_tree`, `noisy_tree`, `gitignore_tree`
//! - `run_tree` helpers that drive the library pipeline
//! - `ntree()` for binary-level tests

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;

use std::path::Path;
use std::process::Command;

use neotree::{run_ntree, NtreeError};
use tempfile::TempDir;

/// Run the pipeline against `tree` with extra args.
pub fn run_tree(tree: &TempDir, args: &[&str]) -> String {
    try_run_tree(tree, args).unwrap()
}

pub fn try_run_tree(tree: &TempDir, args: &[&str]) -> Result<String, NtreeError> {
    let root = tree.path().to_string_lossy().into_owned();
    run_ntree(std::iter::once(root.as_str()).chain(args.iter().copied()))
}

/// Canonical root path as it appears in absolute output
pub fn canonical_root(tree: &TempDir) -> String {
    std::fs::canonicalize(tree.path())
        .unwrap()
        .to_string_lossy()
        .into_owned()
}

/// `ntree` binary with config isolated from the developer's machine.
pub fn ntree(config_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ntree"));
    cmd.env("NTREE_CONFIG", config_dir.join("config.toml"));
    cmd.env_remove("NTREE_CHARSET");
    cmd.env_remove("NTREE_ORDER");
    cmd.env_remove("NTREE_PRESET");
    cmd.env_remove("NTREE_LOG");
    cmd
}

/// Names from compat output, in display order, without tree glyphs.
pub fn names_from_compat(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| {
            line.split_once("── ")
                .or_else(|| line.split_once("-- "))
                .map(|(_, name)| name)
        })
        .map(|name| name.trim_end_matches('/').to_string())
        .collect()
}
