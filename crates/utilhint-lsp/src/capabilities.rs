use tower_lsp::lsp_types::*;

/// Define the server capabilities for the utilhint LSP
pub fn server_capabilities() -> ServerCapabilities {
    ServerCapabilities {
        // Full text sync - the hover word lookup needs the current text
        text_document_sync: Some(TextDocumentSyncCapability::Kind(
            TextDocumentSyncKind::FULL,
        )),

        // Utility documentation on hover
        hover_provider: Some(HoverProviderCapability::Simple(true)),

        // Utility names, also requested after a member access
        completion_provider: Some(CompletionOptions {
            trigger_characters: Some(vec![".".to_string()]),
            ..Default::default()
        }),

        ..Default::default()
    }
}
