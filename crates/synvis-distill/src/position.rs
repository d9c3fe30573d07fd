use crate::node::Selection;
use crate::tree::{DistilledTree, NodeId};

/// Finds the chain of nodes enclosing `selection`, outermost first, the
/// root itself excluded. At every level the first child (in source order)
/// whose span encloses the selection wins and the search descends into it;
/// later siblings are never examined. An empty result means the selection
/// sits in a gap no child covers.
pub fn nodes_enclosing(tree: &DistilledTree, selection: Selection) -> Vec<NodeId> {
    nodes_enclosing_from(tree, tree.root(), selection)
}

/// Same search, but rooted at `from`; `from` itself is excluded.
pub fn nodes_enclosing_from(
    tree: &DistilledTree,
    from: NodeId,
    selection: Selection,
) -> Vec<NodeId> {
    let mut chain = Vec::new();
    let mut current = from;

    loop {
        let matched = tree
            .get(current)
            .children
            .iter()
            .copied()
            .find(|&child| tree.get(child).span.encloses(&selection));

        match matched {
            Some(child) => {
                chain.push(child);
                current = child;
            }
            None => break,
        }
    }

    chain
}
