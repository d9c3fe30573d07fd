//! The language server behind the tree browser. Speaks standard document
//! synchronization plus one custom request, `syntaxVisualizer/getSyntaxTree`,
//! and pushes `syntaxVisualizer/invalidTree` / `invalidTree2` notifications
//! when the displayed tree goes stale.

mod api;
mod dispatch;
pub mod ext;

use anyhow::Result;
use crossbeam_channel::Receiver;
use lsp_server::{Connection, IoThreads, Message};
use lsp_types::Uri;
use lsp_types::notification::Notification as _;
use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use synvis_distill::{Invalidation, TreeStore};

pub struct Server {
    connection: Connection,
    io_threads: Option<IoThreads>,
    store: TreeStore,
    invalidations: Receiver<Invalidation>,
    /// Last known buffer contents, per open document.
    texts: FxHashMap<Uri, String>,
    /// The document whose tree is currently served. The most recently
    /// opened document wins.
    active: Option<Uri>,
}

impl Server {
    pub fn stdio() -> Result<Self> {
        let (connection, io_threads) = Connection::stdio();
        Self::new(connection, Some(io_threads))
    }

    /// Runs the initialize handshake on `connection` and builds the server
    /// around it.
    pub fn new(connection: Connection, io_threads: Option<IoThreads>) -> Result<Self> {
        let capabilities = serde_json::to_value(Self::capabilities())?;
        connection.initialize(capabilities)?;

        let mut store = TreeStore::new();
        let invalidations = store.subscribe();

        Ok(Self {
            connection,
            io_threads,
            store,
            invalidations,
            texts: FxHashMap::default(),
            active: None,
        })
    }

    fn capabilities() -> lsp_types::ServerCapabilities {
        lsp_types::ServerCapabilities {
            text_document_sync: Some(lsp_types::TextDocumentSyncCapability::Options(
                lsp_types::TextDocumentSyncOptions {
                    open_close: Some(true),
                    change: Some(lsp_types::TextDocumentSyncKind::FULL),
                    save: Some(lsp_types::TextDocumentSyncSaveOptions::SaveOptions(
                        lsp_types::SaveOptions { include_text: Some(true) },
                    )),
                    ..Default::default()
                },
            )),
            ..Default::default()
        }
    }

    /// Serves messages until the client shuts the connection down.
    /// Invalidations raised while handling a message are flushed right
    /// after it, so a client always hears about staleness before its next
    /// round trip completes.
    pub fn run(mut self) -> Result<()> {
        while let Ok(message) = self.connection.receiver.recv() {
            match message {
                Message::Request(request) => {
                    if self.connection.handle_shutdown(&request)? {
                        break;
                    }
                    api::request(&mut self, request);
                }
                Message::Notification(notification) => api::notification(&mut self, notification),
                Message::Response(response) => {
                    eprintln!("unexpected response: {response:?}");
                }
            }
            self.drain_invalidations()?;
        }

        if let Some(io_threads) = self.io_threads.take() {
            io_threads.join()?;
        }
        Ok(())
    }

    fn drain_invalidations(&mut self) -> Result<()> {
        while let Ok(invalidation) = self.invalidations.try_recv() {
            let method = match invalidation {
                Invalidation::Saved => ext::InvalidTree::METHOD,
                Invalidation::Unsaved => ext::InvalidTreeUnsaved::METHOD,
            };
            let notification = lsp_server::Notification::new(method.to_owned(), ());
            self.connection.sender.send(Message::Notification(notification))?;
        }
        Ok(())
    }

    pub(crate) fn respond(&self, response: lsp_server::Response) {
        if let Err(error) = self.connection.sender.send(response.into()) {
            eprintln!("failed to respond: {error}");
        }
    }
}

pub(crate) fn from_json<T: DeserializeOwned>(
    what: &'static str,
    json: &serde_json::Value,
) -> Result<T> {
    serde_json::from_value(json.clone())
        .map_err(|error| anyhow::format_err!("failed to deserialize {what}: {error}; {json}"))
}

pub(crate) fn result_to_response<R>(
    id: lsp_server::RequestId,
    result: Result<R::Result>,
) -> lsp_server::Response
where
    R: lsp_types::request::Request,
{
    match result {
        Ok(result) => lsp_server::Response::new_ok(id, result),
        Err(error) => lsp_server::Response::new_err(
            id,
            lsp_server::ErrorCode::InternalError as i32,
            error.to_string(),
        ),
    }
}
