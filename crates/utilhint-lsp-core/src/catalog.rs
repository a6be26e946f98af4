//! The utility catalog: ordered entries plus a name index

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;
use thiserror::Error;

use crate::builtin;

/// Category a utility is filed under.
///
/// Variants are ordered; the catalog lists categories in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    String,
    Array,
    Object,
    Number,
    Date,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::String,
        Category::Array,
        Category::Object,
        Category::Number,
        Category::Date,
    ];

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::String => "string",
            Category::Array => "array",
            Category::Object => "object",
            Category::Number => "number",
            Category::Date => "date",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single utility helper known to the server
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UtilityEntry {
    pub name: &'static str,
    pub category: Category,
    pub documentation: &'static str,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("utility `{name}` is declared twice (in the {first} and {second} categories)")]
    DuplicateName {
        name: String,
        first: Category,
        second: Category,
    },
}

/// Immutable, ordered collection of utilities with by-name lookup.
pub struct Catalog {
    entries: Vec<UtilityEntry>,
    index: HashMap<&'static str, usize>,
}

impl Catalog {
    /// Build a catalog, ordering entries by category.
    ///
    /// Entries keep their declaration order within a category. Should a name
    /// appear twice, lookups resolve to the first one in category order;
    /// [`Catalog::validate`] reports the clash.
    pub fn new(mut entries: Vec<UtilityEntry>) -> Self {
        // stable: declaration order survives within a category
        entries.sort_by_key(|e| e.category);

        let mut index = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            index.entry(entry.name).or_insert(pos);
        }

        Self { entries, index }
    }

    /// Every entry, string utilities first and date utilities last
    pub fn all_entries(&self) -> &[UtilityEntry] {
        &self.entries
    }

    /// Exact, case-sensitive lookup by name
    pub fn lookup(&self, name: &str) -> Option<&UtilityEntry> {
        self.index.get(name).map(|&pos| &self.entries[pos])
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &UtilityEntry> + '_ {
        self.entries.iter().filter(move |e| e.category == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check that no two entries share a name, across all categories.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen: HashMap<&str, Category> = HashMap::with_capacity(self.entries.len());
        for entry in &self.entries {
            if let Some(&first) = seen.get(entry.name) {
                return Err(CatalogError::DuplicateName {
                    name: entry.name.to_string(),
                    first,
                    second: entry.category,
                });
            }
            seen.insert(entry.name, entry.category);
        }
        Ok(())
    }
}

/// The builtin catalog, built once on first use
pub static CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog::new(builtin::entries()));

/// Get the process-wide catalog
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Get every builtin utility in catalog order
pub fn all_entries() -> &'static [UtilityEntry] {
    CATALOG.all_entries()
}

/// Look up a builtin utility by exact name
pub fn lookup(name: &str) -> Option<&'static UtilityEntry> {
    CATALOG.lookup(name)
}
