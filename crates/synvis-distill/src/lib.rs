//! Distillation of front-end parse trees into a serializable, id-addressed
//! form, plus the two queries the tree browser needs: position-to-node
//! search and staleness-aware storage of the authoritative tree.

mod arena;
mod distiller;
mod node;
mod position;
mod store;
mod tree;

pub use arena::{Arena, Idx};
pub use distiller::distill;
pub use node::{Node, Selection, Span};
pub use position::{nodes_enclosing, nodes_enclosing_from};
pub use store::{Invalidation, Staleness, TreeStore};
pub use tree::{DistilledTree, NodeData, NodeId};
