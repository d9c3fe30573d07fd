use line_index::LineIndex;
use synvis_syntax::{Element, NodeOrToken, SyntaxNode};
use text_size::TextRange;

use crate::node::Span;
use crate::tree::{DistilledTree, NodeData, NodeId};

/// Walks a front-end parse tree and produces the distilled tree: pre-order
/// ids starting at 0, token leaves included, spans in line/column form.
///
/// Pure function of its inputs; tolerates whatever tree the front-end
/// produced, error nodes included.
pub fn distill(root: &SyntaxNode, text: &str) -> DistilledTree {
    let line_index = LineIndex::new(text);
    let mut tree = DistilledTree::default();

    let root_id = tree.push(record_node(root, text, &line_index, 0, None));

    // Explicit stack instead of recursion; front-end trees can nest
    // arbitrarily deep.
    let mut stack: Vec<(&Element, NodeId)> = Vec::new();
    push_children(&mut stack, root, root_id);

    let mut next_id = 1;
    while let Some((element, parent)) = stack.pop() {
        let data = match element {
            NodeOrToken::Node(node) => record_node(node, text, &line_index, next_id, Some(parent)),
            NodeOrToken::Token(token) => NodeData {
                id: next_id,
                kind: token.kind().name().to_string(),
                type_name: token.kind().type_name().to_string(),
                span: span_for(token.range(), token.text(), &line_index),
                parent: Some(parent),
                children: Vec::new(),
            },
        };
        next_id += 1;

        let id = tree.push(data);
        if let NodeOrToken::Node(node) = element {
            push_children(&mut stack, node, id);
        }
    }

    tree
}

fn push_children<'t>(stack: &mut Vec<(&'t Element, NodeId)>, node: &'t SyntaxNode, id: NodeId) {
    // Reversed so that pops come back in source order, keeping ids
    // pre-order and children lists sorted by start position.
    for child in node.children().iter().rev() {
        stack.push((child, id));
    }
}

/// The single place that knows how to read a front-end rule node.
fn record_node(
    node: &SyntaxNode,
    text: &str,
    line_index: &LineIndex,
    id: u32,
    parent: Option<NodeId>,
) -> NodeData {
    NodeData {
        id,
        kind: node.kind().name().to_string(),
        type_name: node.kind().type_name().to_string(),
        span: span_for(node.range(), &text[node.range()], line_index),
        parent,
        children: Vec::new(),
    }
}

fn span_for(range: TextRange, text: &str, line_index: &LineIndex) -> Span {
    let start = line_index.line_col(range.start());
    let end = line_index.line_col(range.end());

    Span {
        text: text.to_string(),
        start_line: start.line,
        start_column: start.col,
        end_line: end.line,
        end_column: end.col,
    }
}
