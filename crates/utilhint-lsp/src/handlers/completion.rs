use once_cell::sync::Lazy;
use tower_lsp::lsp_types::*;
use utilhint_lsp_core::{all_entries, UtilityEntry};

use crate::document::Document;

/// Cached LSP completion items converted from the utility catalog
static UTILITY_COMPLETIONS: Lazy<Vec<CompletionItem>> =
    Lazy::new(|| all_entries().iter().map(convert_to_lsp_completion).collect());

/// Convert a catalog entry to an LSP completion item
fn convert_to_lsp_completion(entry: &UtilityEntry) -> CompletionItem {
    CompletionItem {
        label: entry.name.to_string(),
        kind: Some(CompletionItemKind::FUNCTION),
        detail: Some(format!("{} utility", entry.category)),
        documentation: Some(Documentation::String(entry.documentation.to_string())),
        ..Default::default()
    }
}

/// Get completion items for a position in the document
///
/// The whole catalog is offered wherever completion is requested. Filtering
/// against the typed prefix is left to the client.
pub fn get_completions(_doc: &Document, _position: Position) -> Vec<CompletionItem> {
    UTILITY_COMPLETIONS.clone()
}
