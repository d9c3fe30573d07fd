use crossbeam_channel::{Receiver, Sender};
use synvis_parse::ParseFailure;

use crate::distiller::distill;
use crate::node::Node;
use crate::tree::{DistilledTree, NodeData, NodeId};

/// How trustworthy the currently distilled tree is relative to the editor
/// buffer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Staleness {
    Fresh,
    /// The buffer changed but was not saved; save, then refresh.
    StaleUnsaved,
    /// The authoritative text changed and was persisted; refresh now.
    StaleSaved,
}

/// Broadcast to subscribers when a displayed tree becomes obsolete.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Invalidation {
    Saved,
    Unsaved,
}

/// Owner of the single authoritative distilled tree.
///
/// All operations run on one request-processing actor; `update` swaps the
/// tree as its last step, so readers never observe a half-built tree.
pub struct TreeStore {
    current: Option<DistilledTree>,
    revision: u64,
    staleness: Staleness,
    subscribers: Vec<Sender<Invalidation>>,
}

impl Default for TreeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeStore {
    pub fn new() -> Self {
        Self { current: None, revision: 0, staleness: Staleness::Fresh, subscribers: Vec::new() }
    }

    /// Parses `text` through the front-end, distills the result and swaps
    /// it in as the authoritative tree. A previously displayed tree is
    /// announced obsolete via [`Invalidation::Saved`].
    ///
    /// On a [`ParseFailure`] the previous tree stays untouched and nothing
    /// is broadcast: no update was performed.
    pub fn update(&mut self, text: &str) -> Result<(), ParseFailure> {
        let parse = synvis_parse::parse(text)?;
        let tree = distill(&parse.root, text);

        let had_tree = self.current.is_some();
        self.current = Some(tree);
        self.revision += 1;
        self.staleness = Staleness::Fresh;

        if had_tree {
            self.broadcast(Invalidation::Saved);
        }
        Ok(())
    }

    /// Flags the displayed tree as out of sync with the (unsaved) buffer.
    /// The tree itself is kept; only a successful `update` clears
    /// staleness. Broadcasts once per Fresh -> StaleUnsaved transition.
    pub fn mark_unsaved_change(&mut self) {
        if self.current.is_none() || self.staleness != Staleness::Fresh {
            return;
        }
        self.staleness = Staleness::StaleUnsaved;
        self.broadcast(Invalidation::Unsaved);
    }

    /// Drops the tree entirely; no document is active anymore.
    pub fn reset(&mut self) {
        self.current = None;
        self.staleness = Staleness::Fresh;
    }

    pub fn tree(&self) -> Option<&DistilledTree> {
        self.current.as_ref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn staleness(&self) -> Staleness {
        self.staleness
    }

    /// Lookup by wire id in the current revision. Ids from superseded
    /// revisions miss here; that is a routine race, not an error.
    pub fn node(&self, id: u32) -> Option<&NodeData> {
        self.current.as_ref()?.node(id)
    }

    /// The whole current tree in wire form, or `None` when no document is
    /// active.
    pub fn whole(&self) -> Option<Node> {
        let tree = self.current.as_ref()?;
        Some(tree.to_node(tree.root()))
    }

    /// The subtree rooted at wire id `id`, or `None` when the id does not
    /// belong to the current revision.
    pub fn subtree(&self, id: u32) -> Option<Node> {
        let tree = self.current.as_ref()?;
        let found = tree.find_node(id, tree.root())?;
        Some(tree.to_node(found))
    }

    pub fn find_node(&self, id: u32, from: NodeId) -> Option<NodeId> {
        self.current.as_ref()?.find_node(id, from)
    }

    /// Registers an invalidation subscriber. Disconnected subscribers are
    /// dropped on the next broadcast.
    pub fn subscribe(&mut self) -> Receiver<Invalidation> {
        let (sender, receiver) = crossbeam_channel::unbounded();
        self.subscribers.push(sender);
        receiver
    }

    fn broadcast(&mut self, invalidation: Invalidation) {
        self.subscribers.retain(|subscriber| subscriber.send(invalidation).is_ok());
    }
}
