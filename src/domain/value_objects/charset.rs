//! Charset value object - which glyphs draw the compat tree

use serde::{Deserialize, Serialize};

/// Character set for tree drawing
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    /// Box-drawing characters (`├──`)
    #[default]
    Unicode,
    /// Plain ASCII (`|--`)
    Ascii,
}

impl Charset {
    /// Glyph set used by the compat formatter
    pub fn glyphs(&self) -> &'static Glyphs {
        match self {
            Charset::Unicode => &UNICODE_GLYPHS,
            Charset::Ascii => &ASCII_GLYPHS,
        }
    }

    /// Parse a user-supplied name (case-insensitive)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "unicode" | "utf8" | "utf-8" => Some(Charset::Unicode),
            "ascii" => Some(Charset::Ascii),
            _ => None,
        }
    }
}

impl std::fmt::Display for Charset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Charset::Unicode => write!(f, "unicode"),
            Charset::Ascii => write!(f, "ascii"),
        }
    }
}

/// Connector and indent strings for one charset. Every glyph is four
/// columns wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs {
    pub branch: &'static str,
    pub last_branch: &'static str,
    pub vertical: &'static str,
    pub space: &'static str,
}

const UNICODE_GLYPHS: Glyphs = Glyphs {
    branch: "├── ",
    last_branch: "└── ",
    vertical: "│   ",
    space: "    ",
};

const ASCII_GLYPHS: Glyphs = Glyphs {
    branch: "|-- ",
    last_branch: "\\-- ",
    vertical: "|   ",
    space: "    ",
};
