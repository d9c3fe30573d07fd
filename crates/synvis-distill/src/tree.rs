use rustc_hash::FxHashMap;

use crate::arena::{Arena, Idx};
use crate::node::{Node, Span};

pub type NodeId = Idx<NodeData>;

/// One element of a distilled tree. Parent and children are arena ids, so
/// parent lookup never re-walks from the root.
#[derive(Debug, Eq, PartialEq)]
pub struct NodeData {
    /// Wire identity, unique within one tree revision. Equal to the arena
    /// index for server-built trees; client-side rebuilds of subtrees keep
    /// whatever ids the wire carried.
    pub id: u32,
    pub kind: String,
    pub type_name: String,
    pub span: Span,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// An immutable distilled tree. Built in one pass and never patched; a new
/// source revision produces a whole new tree with a fresh id namespace.
#[derive(Debug, Default)]
pub struct DistilledTree {
    nodes: Arena<NodeData>,
    by_id: FxHashMap<u32, NodeId>,
    root: Option<NodeId>,
}

impl DistilledTree {
    /// Appends a node; the first one becomes the root.
    pub(crate) fn push(&mut self, data: NodeData) -> NodeId {
        let wire_id = data.id;
        let parent = data.parent;
        let idx = self.nodes.alloc(data);

        self.by_id.insert(wire_id, idx);
        if let Some(parent) = parent {
            self.nodes[parent].children.push(idx);
        }
        if self.root.is_none() {
            self.root = Some(idx);
        }
        idx
    }

    pub fn root(&self) -> NodeId {
        self.root.expect("a distilled tree always has a root")
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> &NodeData {
        &self.nodes[id]
    }

    /// Current-revision lookup by wire id; a stale id is an expected miss,
    /// not an error.
    pub fn lookup(&self, id: u32) -> Option<NodeId> {
        self.by_id.get(&id).copied()
    }

    pub fn node(&self, id: u32) -> Option<&NodeData> {
        self.lookup(id).map(|idx| &self.nodes[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &NodeData)> {
        self.nodes.iter()
    }

    /// Depth-first scan of the subtree under `from` for the node carrying
    /// wire id `id`. Explicit stack; front-end trees can nest arbitrarily
    /// deep.
    pub fn find_node(&self, id: u32, from: NodeId) -> Option<NodeId> {
        let mut stack = vec![from];
        while let Some(current) = stack.pop() {
            let data = &self.nodes[current];
            if data.id == id {
                return Some(current);
            }
            stack.extend(data.children.iter().rev().copied());
        }
        None
    }

    /// Nested wire form of the subtree rooted at `id`.
    pub fn to_node(&self, id: NodeId) -> Node {
        let data = &self.nodes[id];
        Node {
            id: data.id,
            kind: data.kind.clone(),
            type_name: data.type_name.clone(),
            span: data.span.clone(),
            children: data.children.iter().map(|&child| self.to_node(child)).collect(),
        }
    }

    /// Rebuilds an arena from a fetched wire tree, preserving wire ids.
    pub fn from_node(wire: &Node) -> Self {
        let mut tree = Self::default();
        let mut stack: Vec<(&Node, Option<NodeId>)> = vec![(wire, None)];

        while let Some((node, parent)) = stack.pop() {
            let idx = tree.push(NodeData {
                id: node.id,
                kind: node.kind.clone(),
                type_name: node.type_name.clone(),
                span: node.span.clone(),
                parent,
                children: Vec::new(),
            });
            for child in node.children.iter().rev() {
                stack.push((child, Some(idx)));
            }
        }

        tree
    }
}
