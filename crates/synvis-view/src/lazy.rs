use anyhow::Result;
use synvis_distill::{DistilledTree, Node, NodeData, NodeId, Selection, nodes_enclosing_from};

/// Source of wire trees. `id` of `None` asks for the whole tree; a wire id
/// asks for that subtree. `Ok(None)` means the server has no tree to give.
pub trait FetchTree {
    fn fetch(&mut self, id: Option<u32>) -> Result<Option<Node>>;
}

/// One row of the tree browser, shaped for a generic tree widget.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeItem {
    pub id: u32,
    /// The syntax kind, e.g. `ClassDeclaration`.
    pub label: String,
    /// The front-end type behind the kind, e.g. `ClassDeclarationSyntax`.
    pub description: String,
    /// Hover text: the covered positions, plus the value for leaves.
    pub info: String,
    pub has_children: bool,
}

/// Read-through cache over a [`FetchTree`] source.
///
/// The first query pulls the whole tree once and rebuilds it into an
/// arena; every later query answers from that copy until [`refresh`]
/// drops it. Parent navigation therefore never goes back to the server.
///
/// [`refresh`]: LazyTreeView::refresh
pub struct LazyTreeView<F> {
    fetch: F,
    tree: Option<DistilledTree>,
    effective_root: Option<NodeId>,
}

impl<F: FetchTree> LazyTreeView<F> {
    pub fn new(fetch: F) -> Self {
        Self { fetch, tree: None, effective_root: None }
    }

    /// Drops the cached tree. The next query refetches; calling this
    /// repeatedly between queries costs nothing.
    pub fn refresh(&mut self) {
        self.tree = None;
        self.effective_root = None;
    }

    /// The top-level rows: the effective root's children, or nothing when
    /// the server has no tree. The effective root itself is never a row.
    pub fn roots(&mut self) -> Result<Vec<TreeItem>> {
        self.ensure_loaded()?;
        let (Some(tree), Some(root)) = (self.tree.as_ref(), self.effective_root) else {
            return Ok(Vec::new());
        };
        Ok(tree.get(root).children.iter().map(|&child| item(tree, child)).collect())
    }

    /// The child rows of the node carrying wire id `id`. A stale id from a
    /// superseded tree yields no rows rather than an error.
    pub fn children(&mut self, id: u32) -> Result<Vec<TreeItem>> {
        self.ensure_loaded()?;
        let Some(tree) = self.tree.as_ref() else { return Ok(Vec::new()) };
        let Some(idx) = tree.lookup(id) else { return Ok(Vec::new()) };
        Ok(tree.get(idx).children.iter().map(|&child| item(tree, child)).collect())
    }

    /// The parent row of `id`, or `None` for a top-level row. Answered
    /// from the cached arena.
    pub fn parent(&self, id: u32) -> Option<TreeItem> {
        let tree = self.tree.as_ref()?;
        let idx = tree.lookup(id)?;
        if Some(idx) == self.effective_root {
            return None;
        }
        let parent = tree.get(idx).parent?;
        if Some(parent) == self.effective_root {
            return None;
        }
        Some(item(tree, parent))
    }

    pub fn node(&self, id: u32) -> Option<&NodeData> {
        let tree = self.tree.as_ref()?;
        tree.node(id)
    }

    /// The chain of rows enclosing `selection`, outermost first, searched
    /// below the effective root. Empty when the selection sits in a gap.
    pub fn enclosing_items(&mut self, selection: Selection) -> Result<Vec<TreeItem>> {
        self.ensure_loaded()?;
        let (Some(tree), Some(root)) = (self.tree.as_ref(), self.effective_root) else {
            return Ok(Vec::new());
        };
        Ok(nodes_enclosing_from(tree, root, selection)
            .into_iter()
            .map(|idx| item(tree, idx))
            .collect())
    }

    fn ensure_loaded(&mut self) -> Result<()> {
        if self.tree.is_some() {
            return Ok(());
        }
        let Some(wire) = self.fetch.fetch(None)? else { return Ok(()) };
        let tree = DistilledTree::from_node(&wire);

        // A root wrapping a single node is noise in the browser; start the
        // view at that child instead.
        let mut root = tree.root();
        if let [only] = *tree.get(root).children.as_slice() {
            root = only;
        }

        self.effective_root = Some(root);
        self.tree = Some(tree);
        Ok(())
    }
}

fn item(tree: &DistilledTree, idx: NodeId) -> TreeItem {
    let data = tree.get(idx);
    let span = &data.span;
    let mut info =
        format!("{}:{}..{}:{}", span.start_line, span.start_column, span.end_line, span.end_column);
    if data.children.is_empty() && !span.text.is_empty() {
        info.push(' ');
        info.push_str(&span.text);
    }
    TreeItem {
        id: data.id,
        label: data.kind.clone(),
        description: data.type_name.clone(),
        info,
        has_children: !data.children.is_empty(),
    }
}
