//! CSV output formatter
//!
//! Columns are described by [`CsvColumn`], which pairs a header with an
//! extractor, so additional metadata columns can be added without touching
//! the writer loop.

use std::path::Path;

use crate::domain::entities::Entry;
use crate::domain::value_objects::SortOrder;
use crate::error::NtreeResult;

use super::infer_root;

/// Extracts one cell from an entry. The second argument is the scan root.
pub type ExtractFn = fn(&Entry, &Path) -> String;

/// A single CSV output column
#[derive(Debug, Clone, Copy)]
pub struct CsvColumn {
    pub name: &'static str,
    pub extract: ExtractFn,
}

/// Immediate parent directory name. Root-level entries report the root's
/// own name.
fn extract_parent_dir(entry: &Entry, _root: &Path) -> String {
    entry
        .parent_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn extract_filename(entry: &Entry, _root: &Path) -> String {
    entry.name.clone()
}

fn extract_fullpath(entry: &Entry, _root: &Path) -> String {
    entry.path.to_string_lossy().into_owned()
}

fn extract_depth(entry: &Entry, _root: &Path) -> String {
    entry.depth.to_string()
}

/// Default column set: `parent_dir,filename,fullpath,depth`
pub const DEFAULT_COLUMNS: &[CsvColumn] = &[
    CsvColumn {
        name: "parent_dir",
        extract: extract_parent_dir,
    },
    CsvColumn {
        name: "filename",
        extract: extract_filename,
    },
    CsvColumn {
        name: "fullpath",
        extract: extract_fullpath,
    },
    CsvColumn {
        name: "depth",
        extract: extract_depth,
    },
];

/// Options controlling CSV output
#[derive(Debug, Clone)]
pub struct CsvOptions {
    pub root_path: Option<std::path::PathBuf>,
    /// Skip directory rows (files inside directories are still listed)
    pub files_only: bool,
    pub columns: Vec<CsvColumn>,
    /// Sort direction within each run of same-parent entries
    pub order: SortOrder,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            root_path: None,
            files_only: false,
            columns: DEFAULT_COLUMNS.to_vec(),
            order: SortOrder::Asc,
        }
    }
}

/// Re-sort each contiguous run of same-parent entries by name, descending.
/// The scanner always emits siblings contiguously.
fn build_desc_order(entries: &[Entry]) -> Vec<&Entry> {
    let mut ordered = Vec::with_capacity(entries.len());
    for run in entries.chunk_by(|a, b| a.parent_path == b.parent_path) {
        let mut run: Vec<&Entry> = run.iter().collect();
        run.sort_by(|a, b| b.name.cmp(&a.name));
        ordered.extend(run);
    }
    ordered
}

/// Render entries as CSV text.
///
/// The header row is always present. Fields are quoted only when needed,
/// records end with LF, and the result has no trailing newline.
pub fn format_csv(entries: &[Entry], options: &CsvOptions) -> NtreeResult<String> {
    let root = infer_root(entries, options.root_path.as_deref());

    let ordered: Vec<&Entry> = if options.order.is_desc() {
        build_desc_order(entries)
    } else {
        entries.iter().collect()
    };

    // CRLF makes the writer quote fields holding a bare `\r` as well as
    // `\n`; each record's terminator is cut back to LF below.
    let mut writer = ::csv::WriterBuilder::new()
        .terminator(::csv::Terminator::CRLF)
        .quote_style(::csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());
    let mut record_ends = Vec::with_capacity(entries.len() + 1);

    writer
        .write_record(options.columns.iter().map(|column| column.name))
        .map_err(csv_error)?;
    writer.flush()?;
    record_ends.push(writer.get_ref().len());

    for entry in ordered {
        if options.files_only && entry.is_dir {
            continue;
        }
        writer
            .write_record(
                options
                    .columns
                    .iter()
                    .map(|column| (column.extract)(entry, &root)),
            )
            .map_err(csv_error)?;
        writer.flush()?;
        record_ends.push(writer.get_ref().len());
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| std::io::Error::other(err.to_string()))?;

    let mut records = Vec::with_capacity(record_ends.len());
    let mut start = 0;
    for end in record_ends {
        let record = &bytes[start..end];
        let record = record.strip_suffix(b"\r\n").unwrap_or(record);
        records.push(String::from_utf8_lossy(record).into_owned());
        start = end;
    }
    Ok(records.join("\n"))
}

fn csv_error(err: ::csv::Error) -> std::io::Error {
    std::io::Error::other(err.to_string())
}
