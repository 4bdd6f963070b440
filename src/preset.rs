//! Exclusion presets for common project types

use crate::error::{NtreeError, NtreeResult};

/// Built-in presets, sorted by name
pub const PRESETS: &[(&str, &[&str])] = &[
    ("generic", &[".git", ".DS_Store", "Thumbs.db"]),
    ("node", &["node_modules", ".next", "dist", ".cache", "coverage"]),
    (
        "python",
        &[
            "__pycache__",
            ".venv",
            "*.pyc",
            ".pytest_cache",
            "dist",
            "build",
            "*.egg-info",
        ],
    ),
    ("rust", &["target"]),
];

/// Presets applied alongside whichever preset is requested
const ALWAYS_APPLIED: &[&str] = &["generic"];

/// Names of all known presets, sorted
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|(name, _)| *name)
}

fn lookup(name: &str) -> Option<&'static [&'static str]> {
    PRESETS
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, patterns)| *patterns)
}

/// Return exclusion patterns for a named preset.
///
/// The `generic` patterns come first, followed by the requested preset's.
/// Requesting `generic` itself does not duplicate them.
pub fn get_preset_patterns(name: &str) -> NtreeResult<Vec<String>> {
    let requested = lookup(name).ok_or_else(|| NtreeError::UnknownPreset {
        name: name.to_string(),
        known: preset_names().collect::<Vec<_>>().join(", "),
    })?;

    let mut patterns = Vec::new();
    for always in ALWAYS_APPLIED.iter().filter(|always| **always != name) {
        patterns.extend(lookup(always).unwrap_or_default().iter().map(|p| p.to_string()));
    }
    patterns.extend(requested.iter().map(|p| p.to_string()));
    Ok(patterns)
}
