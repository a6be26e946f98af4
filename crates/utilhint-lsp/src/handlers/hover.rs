use tower_lsp::lsp_types::*;
use utilhint_lsp_core::lookup;

use crate::document::Document;

/// Get hover information for a position in the document
pub fn get_hover(doc: &Document, position: Position) -> Option<Hover> {
    let (range, word) = doc.word_at_position(position)?;
    let entry = lookup(&word)?;

    Some(Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::PlainText,
            value: entry.documentation.to_string(),
        }),
        range: Some(range),
    })
}
