//! neotree - tree-compatible directory structure viewer
//!
//! `ntree` scans a directory into a flat, deterministic list of entries and
//! renders it as a `tree(1)`-style diagram, a compact grouped listing, CSV,
//! or Markdown.
//!
//! The pipeline is `scan` → filter → `format_*`; [`run_ntree`] drives it
//! from command-line arguments.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod filter;
pub mod formatter;
pub mod preset;
pub mod runner;
pub mod scanner;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::Entry;
pub use domain::value_objects::{Charset, SortOrder};
pub use error::{NtreeError, NtreeResult};
pub use filter::{FilterChain, GitignoreFilter, PatternFilter};
pub use formatter::{format_compat, format_csv, format_markdown, format_short};
pub use runner::{run_ntree, run_ntree_with_config};
pub use scanner::{scan, EntryFilter, ScanOptions};
