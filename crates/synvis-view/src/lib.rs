//! Client-side pieces of the tree browser: a lazy read-through view over
//! the server's tree and a selection synchronizer that keeps the editor
//! and the view pointing at the same node without feeding back on itself.

mod lazy;
mod sync;

pub use lazy::{FetchTree, LazyTreeView, TreeItem};
pub use sync::{EditorPort, SelectionOrigin, SelectionSync, TreeViewPort};
