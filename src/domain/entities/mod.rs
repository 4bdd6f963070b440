//! Domain Entities
//!
//! - `Entry` - A single file or directory found while scanning

mod entry;

pub use entry::Entry;
