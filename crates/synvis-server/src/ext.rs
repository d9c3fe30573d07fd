//! The protocol extension the tree browser speaks on top of standard
//! document synchronization.

use serde::{Deserialize, Serialize};
use synvis_distill::Node;

/// Fetches the current tree. Without an `id` (or with no params at all)
/// the whole tree is returned; with one, the subtree below that node. An
/// unknown or stale `id` yields `null`.
pub enum SyntaxTreeRequest {}

impl lsp_types::request::Request for SyntaxTreeRequest {
    type Params = Option<SyntaxTreeParams>;
    type Result = Option<Node>;
    const METHOD: &'static str = "syntaxVisualizer/getSyntaxTree";
}

/// Node ids travel as strings; tree-widget element keys are strings on the
/// client side.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SyntaxTreeParams {
    pub id: Option<String>,
}

/// The source was saved and re-parsed; fetched trees are obsolete.
pub enum InvalidTree {}

impl lsp_types::notification::Notification for InvalidTree {
    type Params = ();
    const METHOD: &'static str = "syntaxVisualizer/invalidTree";
}

/// The buffer changed without a save; positions no longer line up. The
/// `2` suffix is part of the wire protocol.
pub enum InvalidTreeUnsaved {}

impl lsp_types::notification::Notification for InvalidTreeUnsaved {
    type Params = ();
    const METHOD: &'static str = "syntaxVisualizer/invalidTree2";
}
