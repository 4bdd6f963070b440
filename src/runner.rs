//! The `ntree` pipeline: resolve, validate, scan, format.
//!
//! Everything here is free of side effects apart from reading the
//! filesystem, so [`run_ntree`] is the main test target for CLI behavior.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::cli::Cli;
use crate::config::Config;
use crate::domain::entities::Entry;
use crate::domain::value_objects::{Charset, SortOrder};
use crate::error::{NtreeError, NtreeResult};
use crate::filter::{FilterChain, GitignoreFilter, PatternFilter};
use crate::formatter::{
    format_compat, format_csv, format_markdown, format_short, CompatOptions, CsvOptions, MdMode,
    MdOptions, ShortOptions,
};
use crate::preset::get_preset_patterns;
use crate::scanner::{scan, EntryFilter, ScanOptions};

/// Display and filter settings after merging CLI flags over configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub charset: Charset,
    pub order: SortOrder,
    pub dirs_first: bool,
    pub no_report: bool,
    pub gitignore: bool,
    pub preset: Option<String>,
}

impl RunSettings {
    /// CLI values win; booleans are enabled by either source.
    pub fn merge(cli: &Cli, config: &Config) -> Self {
        Self {
            charset: cli
                .charset
                .or(config.display.charset)
                .unwrap_or_default(),
            order: cli.order.or(config.display.order).unwrap_or_default(),
            dirs_first: cli.dirs_first || config.display.dirs_first,
            no_report: cli.no_report || config.display.no_report,
            gitignore: cli.gitignore || config.filter.gitignore,
            preset: cli.preset.clone().or_else(|| config.filter.preset.clone()),
        }
    }
}

/// Parse `args` (without the program name) and return the rendered output,
/// using built-in defaults in place of a config file.
pub fn run_ntree<I, T>(args: I) -> NtreeResult<String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    run_ntree_with_config(args, &Config::default())
}

/// Like [`run_ntree`], with settings from a loaded [`Config`].
pub fn run_ntree_with_config<I, T>(args: I, config: &Config) -> NtreeResult<String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv = std::iter::once(OsString::from("ntree")).chain(args.into_iter().map(Into::into));
    let cli = Cli::try_parse_from(argv)?;
    run_with_cli(&cli, config)
}

/// Run the scan and format pipeline for already-parsed arguments.
pub fn run_with_cli(cli: &Cli, config: &Config) -> NtreeResult<String> {
    let settings = RunSettings::merge(cli, config);

    let root = resolve_root(&cli.directory)?;
    let patterns = build_exclude_patterns(
        &config.filter.exclude,
        &cli.patterns,
        settings.preset.as_deref(),
    )?;
    let max_depth = translate_level(cli.level)?;
    validate_option_combinations(cli)?;
    let budget = validate_budget(cli.budget)?;

    let filter = build_filter(patterns, &root, settings.gitignore);

    let scan_options = ScanOptions {
        max_depth,
        dirs_only: cli.dirs_only,
        all_files: cli.all_files,
        // CSV filters directory rows itself
        files_only: cli.files_only && !cli.csv_mode,
    };

    let entries = scan(
        &root,
        &scan_options,
        filter.as_ref().map(|chain| chain as &dyn EntryFilter),
    );
    let output = format_output(cli, &settings, budget, &root, &entries)?;

    if cli.md_mode {
        let md_options = MdOptions {
            mode: if cli.short_mode {
                MdMode::Short
            } else {
                MdMode::Compat
            },
            root: root.display().to_string(),
            budget,
        };
        return Ok(format_markdown(&output, &md_options));
    }

    Ok(output)
}

/// Resolve the directory argument to an absolute path.
pub fn resolve_root(directory: &str) -> NtreeResult<PathBuf> {
    let not_a_directory = || NtreeError::NotADirectory {
        directory: directory.to_string(),
    };
    let root = std::fs::canonicalize(directory).map_err(|_| not_a_directory())?;
    if !root.is_dir() {
        return Err(not_a_directory());
    }
    Ok(root)
}

/// Exclusion patterns in application order: config file, command line,
/// then the preset's patterns.
pub fn build_exclude_patterns(
    config_patterns: &[String],
    cli_patterns: &[String],
    preset: Option<&str>,
) -> NtreeResult<Vec<String>> {
    let mut patterns: Vec<String> = config_patterns
        .iter()
        .chain(cli_patterns)
        .cloned()
        .collect();
    if let Some(name) = preset.filter(|name| !name.is_empty()) {
        patterns.extend(get_preset_patterns(name)?);
    }
    Ok(patterns)
}

/// Check a `-L` value and convert it to a scanner depth.
///
/// `-L 1` shows root children only, which is scanner depth 0.
pub fn validate_level(level: i64) -> NtreeResult<usize> {
    if level < 1 {
        return Err(NtreeError::InvalidLevel);
    }
    usize::try_from(level - 1).map_err(|_| NtreeError::InvalidLevel)
}

/// Translate an optional `-L` value to a scanner depth.
pub fn translate_level(level: Option<i64>) -> NtreeResult<Option<usize>> {
    level.map(validate_level).transpose()
}

/// Check an optional `--budget` value.
pub fn validate_budget(budget: Option<i64>) -> NtreeResult<Option<usize>> {
    match budget {
        None => Ok(None),
        Some(value) if value < 1 => Err(NtreeError::InvalidBudget),
        Some(value) => usize::try_from(value)
            .map(Some)
            .map_err(|_| NtreeError::InvalidBudget),
    }
}

/// Reject incompatible flag combinations. The first violated rule wins.
pub fn validate_option_combinations(cli: &Cli) -> NtreeResult<()> {
    if cli.short_mode && cli.dirs_only {
        return Err(NtreeError::incompatible(
            "--short is incompatible with --dirs-only (-d)",
        ));
    }
    if !cli.short_mode && cli.budget.is_some() {
        return Err(NtreeError::incompatible("--budget requires --short"));
    }
    if !cli.short_mode && cli.count {
        return Err(NtreeError::incompatible("--count requires --short"));
    }
    validate_budget(cli.budget)?;
    if cli.csv_mode && cli.short_mode {
        return Err(NtreeError::incompatible("--csv is incompatible with --short"));
    }
    if cli.csv_mode && cli.md_mode {
        return Err(NtreeError::incompatible("--csv is incompatible with --md"));
    }
    if cli.files_only && cli.dirs_only {
        return Err(NtreeError::incompatible(
            "--files-only (-F) is incompatible with --dirs-only (-d)",
        ));
    }
    if cli.files_only && cli.short_mode {
        return Err(NtreeError::incompatible(
            "--files-only (-F) is incompatible with --short",
        ));
    }
    Ok(())
}

/// Combine the name-pattern and `.gitignore` filters. `None` when neither
/// applies.
pub fn build_filter(patterns: Vec<String>, root: &Path, gitignore: bool) -> Option<FilterChain> {
    let mut chain = FilterChain::new();
    if !patterns.is_empty() {
        chain.push(PatternFilter::new(patterns));
    }
    if gitignore {
        match GitignoreFilter::load(root) {
            Some(filter) => chain.push(filter),
            None => tracing::debug!(root = %root.display(), "no usable .gitignore"),
        }
    }
    if chain.is_empty() {
        None
    } else {
        tracing::debug!(filters = chain.len(), "entry filters active");
        Some(chain)
    }
}

/// Render scanned entries with the formatter the flags select.
pub fn format_output(
    cli: &Cli,
    settings: &RunSettings,
    budget: Option<usize>,
    root: &Path,
    entries: &[Entry],
) -> NtreeResult<String> {
    if cli.csv_mode {
        let options = CsvOptions {
            root_path: Some(root.to_path_buf()),
            files_only: cli.files_only,
            order: settings.order,
            ..CsvOptions::default()
        };
        return format_csv(entries, &options);
    }

    if cli.short_mode {
        let options = ShortOptions {
            budget,
            count: cli.count,
            root_path: Some(root.to_path_buf()),
            order: settings.order,
        };
        return Ok(format_short(entries, &options));
    }

    let options = CompatOptions {
        charset: settings.charset,
        dirs_first: settings.dirs_first,
        full_path: cli.full_path,
        no_report: settings.no_report,
        root_path: cli.full_path.then(|| root.to_path_buf()),
        order: settings.order,
    };
    Ok(format_compat(entries, &options))
}

/// Write `output` plus a trailing newline to `path`, or to stdout.
pub fn write_output(output: &str, path: Option<&Path>) -> NtreeResult<()> {
    let text = format!("{output}\n");
    match path {
        Some(path) => std::fs::write(path, text).map_err(|source| NtreeError::OutputWrite {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
