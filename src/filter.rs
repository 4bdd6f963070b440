//! Entry filtering: `-I` wildcard exclusion and `.gitignore` exclusion.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::domain::value_objects::IgnorePatterns;
use crate::scanner::{Candidate, EntryFilter};

/// Filter entries by shell-style wildcard patterns (`-I PATTERN`).
///
/// Patterns are matched against the entry name only, case-sensitively,
/// with `fnmatch` rules: `*`, `?`, `[abc]` and `[!abc]` are wildcards and
/// everything else, including `/`, `\`, `{` and `}`, is literal. An
/// unclosed `[` is a literal bracket.
#[derive(Debug)]
pub struct PatternFilter {
    matcher: GlobSet,
}

impl PatternFilter {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GlobSetBuilder::new();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            if pattern.is_empty() {
                continue;
            }
            let glob = GlobBuilder::new(&translate_wildcard(pattern))
                .literal_separator(false)
                .backslash_escape(false)
                .build();
            match glob {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(err) => {
                    tracing::warn!(pattern = %pattern, error = %err, "skipping invalid exclude pattern");
                }
            }
        }

        let matcher = builder.build().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "cannot build exclude matcher");
            GlobSet::empty()
        });

        Self { matcher }
    }

    /// Whether any configured pattern matches `name`.
    pub fn matches(&self, name: &str) -> bool {
        !name.is_empty() && self.matcher.is_match(name)
    }
}

impl EntryFilter for PatternFilter {
    fn should_exclude(&self, candidate: &Candidate<'_>) -> bool {
        self.matches(candidate.name)
    }
}

/// Rewrite a shell wildcard into globset syntax.
///
/// Braces become single-character classes so they never alternate, and a
/// `[` with no closing `]` becomes `[[]`.
fn translate_wildcard(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 4);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '{' | '}' => {
                out.push('[');
                out.push(c);
                out.push(']');
            }
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    push_class(&mut out, &chars[i..end]);
                    i = end + 1;
                }
                None => out.push_str("[[]"),
            },
            _ => out.push(c),
        }
    }
    out
}

/// Emit a class body. A leading `^` is literal in a shell but negates in
/// globset, so it moves to the end of the body.
fn push_class(out: &mut String, body: &[char]) {
    match body.split_first() {
        Some((&'^', [])) => out.push('^'),
        Some((&'^', rest)) if rest[0] != '!' => {
            out.push('[');
            out.extend(rest);
            out.push_str("^]");
        }
        _ => {
            out.push('[');
            out.extend(body);
            out.push(']');
        }
    }
}

/// Index of the `]` closing a class whose body starts at `start`.
///
/// A leading `!` and a `]` right after it belong to the class body.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    while j < chars.len() && chars[j] != ']' {
        j += 1;
    }
    (j < chars.len()).then_some(j)
}

/// Filter entries matched by the scan root's `.gitignore`.
#[derive(Debug)]
pub struct GitignoreFilter {
    root: PathBuf,
    patterns: IgnorePatterns,
}

impl GitignoreFilter {
    pub fn new(root: impl Into<PathBuf>, patterns: IgnorePatterns) -> Self {
        Self {
            root: root.into(),
            patterns,
        }
    }

    /// Load `<root>/.gitignore`. Returns `None` when the file is missing,
    /// unreadable or holds no patterns.
    pub fn load(root: &Path) -> Option<Self> {
        load_gitignore(root)
            .filter(|patterns| !patterns.is_empty())
            .map(|patterns| Self::new(root, patterns))
    }
}

/// Read the root `.gitignore`. Missing or unreadable files yield `None`.
pub fn load_gitignore(root: &Path) -> Option<IgnorePatterns> {
    IgnorePatterns::load(root)
}

impl EntryFilter for GitignoreFilter {
    fn should_exclude(&self, candidate: &Candidate<'_>) -> bool {
        match candidate.path.strip_prefix(&self.root) {
            Ok(rel_path) => self.patterns.is_ignored(rel_path, candidate.is_dir),
            Err(_) => false,
        }
    }
}

/// Excludes an entry when any contained filter excludes it.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn EntryFilter>>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, filter: impl EntryFilter + 'static) {
        self.filters.push(Box::new(filter));
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }
}

impl EntryFilter for FilterChain {
    fn should_exclude(&self, candidate: &Candidate<'_>) -> bool {
        self.filters
            .iter()
            .any(|filter| filter.should_exclude(candidate))
    }
}
