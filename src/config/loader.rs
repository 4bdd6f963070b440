//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{Charset, SortOrder};
use crate::error::{NtreeError, NtreeResult};

use super::types::Config;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "NTREE_CONFIG";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> NtreeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| NtreeError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the user config (if present) and apply environment overrides.
pub fn load_or_default() -> NtreeResult<Config> {
    let config = match config_path() {
        Some(path) if path.is_file() => {
            let (config, warnings) = load_with_warnings(&path)?;
            for warning in &warnings {
                log_warning(warning);
            }
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        Some(path) => {
            tracing::trace!(path = %path.display(), "no config file");
            Config::default()
        }
        None => Config::default(),
    };

    Ok(config.with_env_overrides())
}

/// Location of the user config file: `$NTREE_CONFIG`, otherwise
/// `ntree/config.toml` under the XDG config directory.
pub fn config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(explicit));
    }
    dirs_config_dir().map(|dir| dir.join("ntree").join("config.toml"))
}

/// Apply `NTREE_*` overrides looked up through `var`.
///
/// Unparseable values are logged and ignored.
pub fn apply_env_overrides<F>(mut config: Config, var: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // NTREE_CHARSET
    if let Some(value) = var("NTREE_CHARSET") {
        match Charset::parse(&value) {
            Some(charset) => config.display.charset = Some(charset),
            None => tracing::warn!(value = %value, "ignoring invalid NTREE_CHARSET"),
        }
    }

    // NTREE_ORDER
    if let Some(value) = var("NTREE_ORDER") {
        match SortOrder::parse(&value) {
            Some(order) => config.display.order = Some(order),
            None => tracing::warn!(value = %value, "ignoring invalid NTREE_ORDER"),
        }
    }

    // NTREE_PRESET
    if let Some(value) = var("NTREE_PRESET") {
        let value = value.trim();
        if !value.is_empty() {
            config.filter.preset = Some(value.to_string());
        }
    }

    config
}

fn log_warning(warning: &ConfigWarning) {
    match (&warning.suggestion, warning.line) {
        (Some(suggestion), Some(line)) => tracing::warn!(
            file = %warning.file.display(),
            line,
            "unknown config key '{}' (did you mean '{}'?)",
            warning.key,
            suggestion
        ),
        (Some(suggestion), None) => tracing::warn!(
            file = %warning.file.display(),
            "unknown config key '{}' (did you mean '{}'?)",
            warning.key,
            suggestion
        ),
        (None, _) => tracing::warn!(
            file = %warning.file.display(),
            line = ?warning.line,
            "unknown config key '{}'",
            warning.key
        ),
    }
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "display",
        "charset",
        "dirs_first",
        "no_report",
        "order",
        "filter",
        "exclude",
        "preset",
        "gitignore",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
