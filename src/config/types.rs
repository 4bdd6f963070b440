//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Charset, SortOrder};
use crate::error::NtreeResult;

use super::loader::{self, ConfigWarning};

/// `[display]` section: defaults for the compat and short renderers
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DisplayConfig {
    #[serde(default)]
    pub charset: Option<Charset>,

    #[serde(default)]
    pub dirs_first: bool,

    #[serde(default)]
    pub no_report: bool,

    #[serde(default)]
    pub order: Option<SortOrder>,
}

/// `[filter]` section: exclusions applied on every run
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Extra `-I` patterns, applied before the command-line ones
    #[serde(default)]
    pub exclude: Vec<String>,

    #[serde(default)]
    pub preset: Option<String>,

    #[serde(default)]
    pub gitignore: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub filter: FilterConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> NtreeResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> NtreeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the user config if one exists, then apply `NTREE_*` overrides.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load_or_default() -> NtreeResult<Self> {
        loader::load_or_default()
    }

    /// Apply environment variable overrides (NTREE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::apply_env_overrides(self, |key| std::env::var(key).ok())
    }
}
