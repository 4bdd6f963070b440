//! Configuration module for ntree
//!
//! Settings are resolved in this order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (NTREE_*)
//! 3. User config (`$NTREE_CONFIG` or `~/.config/ntree/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{apply_env_overrides, config_path, ConfigWarning};
pub use types::{Config, DisplayConfig, FilterConfig};
