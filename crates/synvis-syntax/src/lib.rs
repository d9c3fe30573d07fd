//! Immutable parse tree for the C#-subset front-end.
//!
//! The tree is built once per parse and never mutated afterwards; consumers
//! walk it by reference. Tokens are the leaves and carry their decoded value
//! text, so position mapping downstream stays precise to the token level.

mod builder;
mod syntax_kind;
mod tree;
mod trivia;

/// Constructs a `SyntaxNode` from parser events.
pub use builder::Builder;
/// Token and node kinds used throughout the tree.
pub use syntax_kind::SyntaxKind;
/// Tree element types.
pub use tree::{Element, NodeOrToken, SyntaxNode, SyntaxToken};
/// Trivia pieces collected by the tokenizer.
pub use trivia::{Trivia, TriviaPiece, TriviaPieceKind};
