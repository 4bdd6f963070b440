//! Domain Value Objects
//!
//! Immutable value types that represent rendering and filtering choices.

mod charset;
mod ignore_patterns;
mod sort_order;

pub use charset::{Charset, Glyphs};
pub use ignore_patterns::{IgnoreError, IgnorePatterns};
pub use sort_order::SortOrder;
