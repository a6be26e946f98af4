//! Core catalog for the utilhint language server
//!
//! This crate owns the fixed set of JavaScript/TypeScript utility helpers
//! the server knows about, independent of any editor protocol.
//!
//! # Features
//!
//! - **Catalog**: ordered entries grouped into string, array, object, number
//!   and date categories
//! - **Lookup**: exact, case-sensitive resolution of a name to its entry
//!
//! # Example
//!
//! ```
//! use utilhint_lsp_core::{all_entries, lookup, Category};
//!
//! println!("Total utilities: {}", all_entries().len());
//!
//! if let Some(entry) = lookup("clamp") {
//!     assert_eq!(entry.category, Category::Number);
//!     println!("{}", entry.documentation);
//! }
//! ```

pub mod builtin;
pub mod catalog;

// Re-export main types for convenience
pub use catalog::{
    all_entries, catalog, lookup, Catalog, CatalogError, Category, UtilityEntry, CATALOG,
};
