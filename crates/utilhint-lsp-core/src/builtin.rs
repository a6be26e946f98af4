//! Builtin utility tables
//!
//! Completion and hover both read from these tables, so a utility only has
//! to be declared once.

use crate::catalog::{Category, UtilityEntry};

const STRING_UTILITIES: &[(&str, &str)] = &[
    (
        "toTitleCase",
        r#"Converts a string to title case (e.g., "hello world" -> "Hello World")."#,
    ),
    (
        "reverse",
        r#"Reverses the characters in a string (e.g., "hello" -> "olleh")."#,
    ),
    (
        "containsIgnoreCase",
        "Checks if a string contains a substring, ignoring case.",
    ),
    (
        "truncate",
        "Truncates a string to a specified length and adds ellipsis if needed.",
    ),
    ("toSnakeCase", "Converts a string to snake_case."),
    ("toPascalCase", "Converts a string to PascalCase."),
    ("toCamelCase", "Converts a string to camelCase."),
    ("toKebabCase", "Converts a string to kebab-case."),
];

const ARRAY_UTILITIES: &[(&str, &str)] = &[
    ("chunk", "Splits an array into chunks of the specified size."),
    (
        "average",
        "Calculates the average of numerical values in an array.",
    ),
    ("unique", "Removes duplicate elements from an array."),
    ("flatten", "Flattens a nested array into a single-level array."),
    ("groupBy", "Groups array elements by a callback function."),
];

const OBJECT_UTILITIES: &[(&str, &str)] = &[
    ("deepClone", "Creates a deep clone of an object."),
    ("merge", "Merges two objects, combining their properties."),
];

const NUMBER_UTILITIES: &[(&str, &str)] = &[
    ("clamp", "Clamps a number within a specified range."),
    ("isPrime", "Checks if a number is prime."),
    (
        "toOrdinal",
        r#"Converts a number to its ordinal form (e.g., 1 -> "1st")."#,
    ),
    ("toRoman", "Converts a number to Roman numerals."),
];

const DATE_UTILITIES: &[(&str, &str)] = &[
    ("isWeekend", "Checks if a date falls on a weekend."),
    ("addDays", "Adds the specified number of days to a date."),
    ("startOfWeek", "Gets the start of the week for a given date."),
    (
        "format",
        r#"Formats a date into a specified format (default: "yyyy-mm-dd")."#,
    ),
];

/// The declaration table for a category
pub fn table(category: Category) -> &'static [(&'static str, &'static str)] {
    match category {
        Category::String => STRING_UTILITIES,
        Category::Array => ARRAY_UTILITIES,
        Category::Object => OBJECT_UTILITIES,
        Category::Number => NUMBER_UTILITIES,
        Category::Date => DATE_UTILITIES,
    }
}

/// All builtin utilities, category by category
pub fn entries() -> Vec<UtilityEntry> {
    Category::ALL
        .iter()
        .flat_map(|&category| {
            table(category)
                .iter()
                .map(move |&(name, documentation)| UtilityEntry {
                    name,
                    category,
                    documentation,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(table(Category::String).len(), 8);
        assert_eq!(table(Category::Array).len(), 5);
        assert_eq!(table(Category::Object).len(), 2);
        assert_eq!(table(Category::Number).len(), 4);
        assert_eq!(table(Category::Date).len(), 4);
    }

    #[test]
    fn test_entries_carry_their_category() {
        let entries = entries();
        assert_eq!(entries.len(), 23);

        let clamp = entries.iter().find(|e| e.name == "clamp").unwrap();
        assert_eq!(clamp.category, Category::Number);

        let weekend = entries.iter().find(|e| e.name == "isWeekend").unwrap();
        assert_eq!(weekend.category, Category::Date);
    }

    #[test]
    fn test_no_blank_documentation() {
        for entry in entries() {
            assert!(
                !entry.documentation.trim().is_empty(),
                "{} has no documentation",
                entry.name
            );
        }
    }
}
