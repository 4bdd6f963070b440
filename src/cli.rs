//! Command-line interface definition for `ntree`

use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser};

use crate::domain::value_objects::{Charset, SortOrder};

/// ntree - tree-compatible structure viewer with compact grouped output
#[derive(Parser, Debug, Clone)]
#[command(name = "ntree")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Root directory to display
    #[arg(default_value = ".")]
    pub directory: String,

    /// Max display depth of the directory tree
    #[arg(short = 'L', long, allow_negative_numbers = true)]
    pub level: Option<i64>,

    /// Include hidden files (starting with .)
    #[arg(short = 'a', long = "all")]
    pub all_files: bool,

    /// List directories only
    #[arg(short = 'd', long)]
    pub dirs_only: bool,

    /// Exclude entries matching pattern (can be specified multiple times)
    #[arg(short = 'I', long = "exclude", value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// List directories before files
    #[arg(long = "dirsfirst")]
    pub dirs_first: bool,

    /// Omit the file/directory count report at the end
    #[arg(long = "noreport")]
    pub no_report: bool,

    /// Print the full path prefix for each entry
    #[arg(short = 'f', long = "fullpath")]
    pub full_path: bool,

    /// Character set for tree drawing [default: unicode]
    #[arg(long, value_enum)]
    pub charset: Option<Charset>,

    /// Write output to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Compact grouped output by directory
    #[arg(long = "short")]
    pub short_mode: bool,

    /// Wrap output in Markdown format
    #[arg(long = "md")]
    pub md_mode: bool,

    /// Approximate character budget for --short output
    #[arg(long, allow_negative_numbers = true)]
    pub budget: Option<i64>,

    /// Show file counts per directory in --short mode
    #[arg(long)]
    pub count: bool,

    /// Apply exclusion preset (python, node, rust, generic)
    #[arg(long)]
    pub preset: Option<String>,

    /// Output as CSV (parent_dir, filename, fullpath, depth)
    #[arg(long = "csv")]
    pub csv_mode: bool,

    /// Exclude directory entries; show files only (applies to all modes)
    #[arg(short = 'F', long)]
    pub files_only: bool,

    /// Sort direction [default: asc]
    #[arg(long, value_enum)]
    pub order: Option<SortOrder>,

    /// Exclude entries matched by the root .gitignore
    #[arg(long)]
    pub gitignore: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Build the clap command for `ntree`
pub fn build_cli() -> clap::Command {
    Cli::command()
}
