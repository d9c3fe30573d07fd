use text_size::{TextRange, TextSize};

use crate::{Element, NodeOrToken, SyntaxKind, SyntaxNode, SyntaxToken};

/// Builds a `SyntaxNode` from parser events.
///
/// Nodes are opened and closed in nesting order; the builder tracks the open
/// stack and computes every node's trimmed range from its children when the
/// node is finished.
pub struct Builder<'t> {
    text: &'t str,
    stack: Vec<Pending>,
    finished: Option<SyntaxNode>,
    last_end: TextSize,
}

struct Pending {
    kind: SyntaxKind,
    children: Vec<Element>,
}

impl Drop for Builder<'_> {
    fn drop(&mut self) {
        if !std::thread::panicking() && !self.stack.is_empty() {
            panic!("you should call `Builder::finish()`");
        }
    }
}

impl<'t> Builder<'t> {
    pub fn new(text: &'t str) -> Self {
        Self { text, stack: Vec::with_capacity(16), finished: None, last_end: TextSize::new(0) }
    }

    pub fn start_node(&mut self, kind: SyntaxKind) {
        self.stack.push(Pending { kind, children: Vec::new() });
    }

    /// Appends a token to the currently open node. `range` is the token's
    /// trimmed range; the value text is derived from the source slice.
    pub fn token(&mut self, kind: SyntaxKind, range: TextRange) {
        let raw = &self.text[range];
        let text = if kind == SyntaxKind::STRING_LITERAL { decode_string(raw) } else { raw.into() };

        self.last_end = range.end();
        let parent = self.stack.last_mut().expect("token outside of any node");
        parent.children.push(NodeOrToken::Token(SyntaxToken::new(kind, range, text)));
    }

    pub fn finish_node(&mut self) {
        let pending = self.stack.pop().expect("unbalanced `finish_node`");
        let node = self.build(pending);
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(NodeOrToken::Node(node)),
            None => {
                assert!(self.finished.is_none(), "more than one root node");
                self.finished = Some(node);
            }
        }
    }

    /// Returns the root. The root node may have been closed with
    /// `finish_node` or left open; both balance out here.
    pub fn finish(mut self) -> SyntaxNode {
        if let Some(root) = self.finished.take() {
            assert!(self.stack.is_empty(), "unbalanced builder stack");
            return root;
        }
        let root = self.stack.pop().expect("`finish` without a started node");
        assert!(self.stack.is_empty(), "unbalanced builder stack");
        self.build(root)
    }

    fn build(&self, pending: Pending) -> SyntaxNode {
        let range = match (pending.children.first(), pending.children.last()) {
            (Some(first), Some(last)) => TextRange::new(first.range().start(), last.range().end()),
            _ => TextRange::empty(self.last_end),
        };
        SyntaxNode::new(pending.kind, range, pending.children)
    }
}

/// Strips the surrounding quotes and resolves the escapes the tokenizer
/// accepts. Unterminated literals keep whatever text they have.
fn decode_string(raw: &str) -> Box<str> {
    let body = raw.strip_prefix('"').unwrap_or(raw);
    let body = body.strip_suffix('"').unwrap_or(body);

    if !body.contains('\\') {
        return body.into();
    }

    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_ranges_cover_children() {
        let text = "int x";
        let mut builder = Builder::new(text);
        builder.start_node(SyntaxKind::COMPILATION_UNIT);
        builder.start_node(SyntaxKind::PREDEFINED_TYPE);
        builder.token(SyntaxKind::INT_KW, TextRange::new(0.into(), 3.into()));
        builder.finish_node();
        builder.token(SyntaxKind::IDENT, TextRange::new(4.into(), 5.into()));
        let root = builder.finish();

        assert_eq!(root.range(), TextRange::new(0.into(), 5.into()));
        assert_eq!(root.children().len(), 2);
        assert_eq!(root.children()[0].range(), TextRange::new(0.into(), 3.into()));
    }

    #[test]
    fn string_tokens_are_decoded() {
        let text = r#""a\nb""#;
        let mut builder = Builder::new(text);
        builder.start_node(SyntaxKind::LITERAL_EXPRESSION);
        builder.token(SyntaxKind::STRING_LITERAL, TextRange::new(0.into(), 6.into()));
        let node = builder.finish();

        let NodeOrToken::Token(token) = &node.children()[0] else { panic!("expected a token") };
        assert_eq!(token.text(), "a\nb");
    }
}
