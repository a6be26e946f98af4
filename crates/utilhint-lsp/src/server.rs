use dashmap::mapref::one::Ref;
use dashmap::DashMap;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};
use utilhint_lsp_core::catalog;

use crate::capabilities;
use crate::config::Config;
use crate::document::Document;
use crate::handlers;

pub struct Backend {
    client: Client,
    documents: DashMap<Url, Document>,
    config: Config,
}

impl Backend {
    pub fn new(client: Client, config: Config) -> Self {
        Self {
            client,
            documents: DashMap::new(),
            config,
        }
    }

    async fn log_debug(&self, message: &str) {
        if self.config.debug {
            self.client
                .log_message(MessageType::INFO, format!("[DEBUG] {}", message))
                .await;
        }
    }

    /// An open document whose language this server is configured for
    fn served_document(&self, uri: &Url) -> Option<Ref<'_, Url, Document>> {
        self.documents
            .get(uri)
            .filter(|doc| self.config.supports(doc.language_id()))
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        self.log_debug("Initializing utilhint LSP server").await;

        if let Err(err) = catalog().validate() {
            self.client
                .log_message(MessageType::ERROR, format!("Utility catalog: {}", err))
                .await;
        }

        Ok(InitializeResult {
            capabilities: capabilities::server_capabilities(),
            server_info: Some(ServerInfo {
                name: "utilhint-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.log_debug("Server initialized successfully").await;
        self.client
            .log_message(
                MessageType::INFO,
                format!(
                    "utilhint LSP server initialized ({} utilities for {})",
                    catalog().len(),
                    self.config.languages.join(", ")
                ),
            )
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        self.log_debug("Shutting down server").await;
        self.documents.clear();
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let item = params.text_document;

        self.log_debug(&format!(
            "Document opened: {} ({}, {} bytes)",
            item.uri,
            item.language_id,
            item.text.len()
        ))
        .await;

        let document = Document::new(item.text, item.language_id, item.version);
        self.documents.insert(item.uri, document);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        // The entry guard must be gone before awaiting on the client
        let summary = self.documents.get_mut(&uri).map(|mut doc| {
            // Full sync: the last change carries the entire text
            for change in params.content_changes {
                doc.update_text(change.text, version);
            }
            format!(
                "Document changed: {} (v{}, {} bytes)",
                uri,
                doc.version(),
                doc.text().len()
            )
        });

        if let Some(summary) = summary {
            self.log_debug(&summary).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        self.log_debug(&format!("Document closed: {}", uri)).await;
        self.documents.remove(&uri);
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        self.log_debug(&format!("Hover request at {:?}", position))
            .await;

        Ok(self
            .served_document(uri)
            .and_then(|doc| handlers::hover::get_hover(&doc, position)))
    }

    async fn completion(
        &self,
        params: CompletionParams,
    ) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        self.log_debug(&format!("Completion request at {:?}", position))
            .await;

        Ok(self.served_document(uri).map(|doc| {
            CompletionResponse::Array(handlers::completion::get_completions(&doc, position))
        }))
    }
}
