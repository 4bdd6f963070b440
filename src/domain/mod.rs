//! Domain Layer
//!
//! The types shared between the scanner and the formatters.
//!
//! ## Structure
//!
//! - `entities/` - Filesystem entries discovered by a scan
//! - `value_objects/` - Immutable value types (Charset, SortOrder, IgnorePatterns)

pub mod entities;
pub mod value_objects;
