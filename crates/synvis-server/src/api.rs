use anyhow::Result;
use synvis_distill::Node;

use super::Server;
use super::dispatch::{NotificationDispatcher, RequestDispatcher};
use super::ext::{SyntaxTreeParams, SyntaxTreeRequest};

pub(crate) fn request(server: &mut Server, request: lsp_server::Request) {
    RequestDispatcher::new(request, server).on::<SyntaxTreeRequest>(handle_syntax_tree).finish();
}

fn handle_syntax_tree(
    server: &mut Server,
    params: Option<SyntaxTreeParams>,
) -> Result<Option<Node>> {
    // Absent params or an absent id mean the whole tree. A present id
    // that is malformed or stale names no node in the current revision,
    // so it answers `null` like any other miss.
    Ok(match params.and_then(|params| params.id) {
        Some(id) => id.parse::<u32>().ok().and_then(|id| server.store.subtree(id)),
        None => server.store.whole(),
    })
}

pub(crate) fn notification(server: &mut Server, notification: lsp_server::Notification) {
    NotificationDispatcher::new(notification, server)
        .on::<lsp_types::notification::DidOpenTextDocument>(handle_did_open_text_document)
        .on::<lsp_types::notification::DidChangeTextDocument>(handle_did_change_text_document)
        .on::<lsp_types::notification::DidSaveTextDocument>(handle_did_save_text_document)
        .on::<lsp_types::notification::DidCloseTextDocument>(handle_did_close_text_document)
        .finish();
}

fn handle_did_open_text_document(
    server: &mut Server,
    params: lsp_types::DidOpenTextDocumentParams,
) -> Result<()> {
    let lsp_types::TextDocumentItem { uri, language_id: _, version: _, text } =
        params.text_document;

    server.store.update(&text)?;
    server.texts.insert(uri.clone(), text);
    server.active = Some(uri);
    Ok(())
}

fn handle_did_change_text_document(
    server: &mut Server,
    params: lsp_types::DidChangeTextDocumentParams,
) -> Result<()> {
    // Full sync; the last change carries the whole document.
    let Some(change) = params.content_changes.into_iter().next_back() else {
        return Ok(());
    };

    let uri = params.text_document.uri;
    server.texts.insert(uri.clone(), change.text);
    // The tree is not rebuilt here; it is only flagged. A rebuild waits
    // for the save, when the text is authoritative again.
    if server.active.as_ref() == Some(&uri) {
        server.store.mark_unsaved_change();
    }
    Ok(())
}

fn handle_did_save_text_document(
    server: &mut Server,
    params: lsp_types::DidSaveTextDocumentParams,
) -> Result<()> {
    let uri = params.text_document.uri;
    if let Some(text) = params.text {
        server.texts.insert(uri.clone(), text);
    }
    if server.active.as_ref() == Some(&uri)
        && let Some(text) = server.texts.get(&uri).cloned()
    {
        server.store.update(&text)?;
    }
    Ok(())
}

fn handle_did_close_text_document(
    server: &mut Server,
    params: lsp_types::DidCloseTextDocumentParams,
) -> Result<()> {
    let uri = params.text_document.uri;
    server.texts.remove(&uri);
    if server.active.as_ref() == Some(&uri) {
        server.active = None;
        server.store.reset();
    }
    Ok(())
}
