use std::fmt::Write as _;

use text_size::TextRange;

use crate::SyntaxKind;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeOrToken<N, T> {
    Node(N),
    Token(T),
}

pub type Element = NodeOrToken<SyntaxNode, SyntaxToken>;

impl Element {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            NodeOrToken::Node(node) => node.kind(),
            NodeOrToken::Token(token) => token.kind(),
        }
    }

    pub fn range(&self) -> TextRange {
        match self {
            NodeOrToken::Node(node) => node.range(),
            NodeOrToken::Token(token) => token.range(),
        }
    }
}

/// A rule node. `range` covers the trimmed extent of the node, from the
/// first token's start to the last token's end, trivia excluded.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SyntaxNode {
    kind: SyntaxKind,
    range: TextRange,
    children: Vec<Element>,
}

impl SyntaxNode {
    pub(crate) fn new(kind: SyntaxKind, range: TextRange, children: Vec<Element>) -> Self {
        Self { kind, range, children }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Indented kind/range listing of the whole subtree, for snapshots.
    pub fn debug(&self) -> String {
        let mut out = String::new();
        self.debug_into(&mut out, 0);
        out
    }

    fn debug_into(&self, out: &mut String, depth: usize) {
        let _ = writeln!(out, "{:indent$}{:?}@{:?}", "", self.kind, self.range, indent = depth * 2);
        for child in &self.children {
            match child {
                NodeOrToken::Node(node) => node.debug_into(out, depth + 1),
                NodeOrToken::Token(token) => {
                    let _ = writeln!(
                        out,
                        "{:indent$}{:?}@{:?} {:?}",
                        "",
                        token.kind(),
                        token.range(),
                        token.text(),
                        indent = (depth + 1) * 2
                    );
                }
            }
        }
    }
}

/// A leaf token. `text` is the decoded value text: string literals are
/// unquoted and unescaped, everything else is the literal source slice.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SyntaxToken {
    kind: SyntaxKind,
    range: TextRange,
    text: Box<str>,
}

impl SyntaxToken {
    pub(crate) fn new(kind: SyntaxKind, range: TextRange, text: Box<str>) -> Self {
        Self { kind, range, text }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
