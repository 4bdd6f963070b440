//! Markdown wrapper for compat and short output

/// Which formatter produced the wrapped body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MdMode {
    #[default]
    Compat,
    Short,
}

impl std::fmt::Display for MdMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MdMode::Compat => write!(f, "compat"),
            MdMode::Short => write!(f, "short"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MdOptions {
    pub mode: MdMode,
    /// Root directory shown in the metadata list
    pub root: String,
    pub budget: Option<usize>,
}

/// Wrap rendered output in a Markdown section with a metadata list and a
/// fenced `text` block. The result ends with the closing fence.
pub fn format_markdown(body: &str, options: &MdOptions) -> String {
    let mut lines = vec![
        "## Project structure".to_string(),
        String::new(),
        format!("- root: `{}`", options.root),
        format!("- mode: {}", options.mode),
    ];
    if let Some(budget) = options.budget {
        lines.push(format!("- budget: {budget}"));
    }
    lines.push(String::new());
    lines.push("```text".to_string());
    if !body.is_empty() {
        lines.push(body.to_string());
    }
    lines.push("```".to_string());
    lines.join("\n")
}
