use anyhow::Result;
use synvis_distill::{Invalidation, Selection, Staleness};

use crate::lazy::{FetchTree, LazyTreeView, TreeItem};

/// Who initiated a selection change. Every selection a synchronizer makes
/// itself is tagged [`ProgrammaticReveal`], and events carrying that tag
/// are dropped on arrival, so an editor reveal can never bounce back as a
/// tree reveal and vice versa.
///
/// [`ProgrammaticReveal`]: SelectionOrigin::ProgrammaticReveal
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SelectionOrigin {
    UserInput,
    ProgrammaticReveal,
}

/// Editor side of the synchronizer.
pub trait EditorPort {
    fn select(&mut self, origin: SelectionOrigin, selection: Selection);
}

/// Tree-browser side of the synchronizer.
pub trait TreeViewPort {
    fn reveal(&mut self, origin: SelectionOrigin, item: &TreeItem) -> Result<()>;
    fn show_message(&mut self, message: &str);
}

/// Keeps the editor cursor and the tree browser pointing at the same node.
///
/// Both directions gate on two things: the event's origin, and whether the
/// displayed tree is still fresh. A stale tree's positions no longer line
/// up with the buffer, so synchronization pauses until a refresh.
pub struct SelectionSync<F, E, T> {
    view: LazyTreeView<F>,
    editor: E,
    tree_view: T,
    staleness: Staleness,
}

impl<F: FetchTree, E: EditorPort, T: TreeViewPort> SelectionSync<F, E, T> {
    pub fn new(view: LazyTreeView<F>, editor: E, tree_view: T) -> Self {
        Self { view, editor, tree_view, staleness: Staleness::Fresh }
    }

    pub fn staleness(&self) -> Staleness {
        self.staleness
    }

    /// The editor cursor moved. Reveals the enclosing chain in the tree
    /// browser, outermost first so ancestors expand before the target.
    pub fn text_selection_changed(
        &mut self,
        origin: SelectionOrigin,
        selection: Selection,
    ) -> Result<()> {
        if origin == SelectionOrigin::ProgrammaticReveal || self.staleness != Staleness::Fresh {
            return Ok(());
        }
        for item in self.view.enclosing_items(selection)? {
            self.tree_view.reveal(SelectionOrigin::ProgrammaticReveal, &item)?;
        }
        Ok(())
    }

    /// A tree row was selected. Moves the editor selection onto the node's
    /// source extent.
    pub fn tree_selection_changed(&mut self, origin: SelectionOrigin, id: u32) {
        if origin == SelectionOrigin::ProgrammaticReveal || self.staleness != Staleness::Fresh {
            return;
        }
        let Some(node) = self.view.node(id) else { return };
        let span = &node.span;
        let selection =
            Selection::new(span.start_line, span.start_column, span.end_line, span.end_column);
        self.editor.select(SelectionOrigin::ProgrammaticReveal, selection);
    }

    /// The server announced the displayed tree obsolete. Latches the
    /// matching staleness and tells the user what to do about it.
    pub fn invalidated(&mut self, invalidation: Invalidation) {
        match invalidation {
            Invalidation::Saved => {
                self.staleness = Staleness::StaleSaved;
                self.tree_view.show_message("Code was changed and saved - try to refresh.");
            }
            Invalidation::Unsaved => {
                self.staleness = Staleness::StaleUnsaved;
                self.tree_view.show_message("Code was changed - try to save it and refresh.");
            }
        }
    }

    /// Drops the cached tree and resumes synchronization.
    pub fn refresh(&mut self) {
        self.view.refresh();
        self.staleness = Staleness::Fresh;
    }

    pub fn view_mut(&mut self) -> &mut LazyTreeView<F> {
        &mut self.view
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use synvis_distill::{Node, distill};

    use super::*;

    struct FakeServer(Option<Node>);

    impl FakeServer {
        fn parsed(text: &str) -> Self {
            let parse = synvis_parse::parse(text).unwrap();
            let tree = distill(&parse.root, text);
            Self(Some(tree.to_node(tree.root())))
        }
    }

    impl FetchTree for FakeServer {
        fn fetch(&mut self, _id: Option<u32>) -> Result<Option<Node>> {
            Ok(self.0.clone())
        }
    }

    #[derive(Default)]
    struct Recorder {
        selects: Vec<(SelectionOrigin, Selection)>,
        reveals: Vec<(SelectionOrigin, String)>,
        messages: Vec<String>,
    }

    type Shared = Rc<RefCell<Recorder>>;

    impl EditorPort for Shared {
        fn select(&mut self, origin: SelectionOrigin, selection: Selection) {
            self.borrow_mut().selects.push((origin, selection));
        }
    }

    impl TreeViewPort for Shared {
        fn reveal(&mut self, origin: SelectionOrigin, item: &TreeItem) -> Result<()> {
            self.borrow_mut().reveals.push((origin, item.label.clone()));
            Ok(())
        }

        fn show_message(&mut self, message: &str) {
            self.borrow_mut().messages.push(message.to_string());
        }
    }

    fn sync_over(text: &str) -> (SelectionSync<FakeServer, Shared, Shared>, Shared) {
        let recorder = Shared::default();
        let view = LazyTreeView::new(FakeServer::parsed(text));
        (SelectionSync::new(view, recorder.clone(), recorder.clone()), recorder)
    }

    #[test]
    fn cursor_moves_reveal_the_enclosing_chain() {
        let (mut sync, recorder) = sync_over("class C { void M() {} }");

        sync.text_selection_changed(SelectionOrigin::UserInput, Selection::new(0, 15, 0, 16))
            .unwrap();

        let reveals = &recorder.borrow().reveals;
        let labels: Vec<_> = reveals.iter().map(|(_, label)| label.as_str()).collect();
        assert_eq!(labels, ["MethodDeclaration", "IdentifierToken"]);
        assert!(reveals.iter().all(|&(origin, _)| origin == SelectionOrigin::ProgrammaticReveal));
    }

    #[test]
    fn tree_clicks_move_the_editor_selection() {
        let (mut sync, recorder) = sync_over("class C { void M() {} }");
        // Load the cache and find the method name row.
        let chain = sync
            .view_mut()
            .enclosing_items(Selection::new(0, 15, 0, 16))
            .unwrap();
        let name_row = chain.last().unwrap().id;

        sync.tree_selection_changed(SelectionOrigin::UserInput, name_row);

        let selects = &recorder.borrow().selects;
        assert_eq!(
            selects.as_slice(),
            [(SelectionOrigin::ProgrammaticReveal, Selection::new(0, 15, 0, 16))]
        );
    }

    #[test]
    fn programmatic_echoes_are_dropped() {
        let (mut sync, recorder) = sync_over("class C { void M() {} }");

        sync.text_selection_changed(SelectionOrigin::UserInput, Selection::new(0, 15, 0, 16))
            .unwrap();
        let reveals_after_user = recorder.borrow().reveals.len();

        // The reveal lands back as a tree selection event; the editor must
        // not move, and the editor echo must not re-reveal.
        let revealed = sync
            .view_mut()
            .enclosing_items(Selection::new(0, 15, 0, 16))
            .unwrap()
            .last()
            .unwrap()
            .id;
        sync.tree_selection_changed(SelectionOrigin::ProgrammaticReveal, revealed);
        sync.text_selection_changed(
            SelectionOrigin::ProgrammaticReveal,
            Selection::new(0, 15, 0, 16),
        )
        .unwrap();

        let recorder = recorder.borrow();
        assert!(recorder.selects.is_empty());
        assert_eq!(recorder.reveals.len(), reveals_after_user);
    }

    #[test]
    fn gap_selections_reveal_nothing() {
        let (mut sync, recorder) = sync_over("int x = 1;\n\nint y = 2;");

        sync.text_selection_changed(SelectionOrigin::UserInput, Selection::new(1, 0, 1, 0))
            .unwrap();

        assert!(recorder.borrow().reveals.is_empty());
    }

    #[test]
    fn stale_trees_pause_synchronization() {
        let (mut sync, recorder) = sync_over("class C { void M() {} }");

        sync.invalidated(Invalidation::Unsaved);
        assert_eq!(sync.staleness(), Staleness::StaleUnsaved);
        assert_eq!(
            recorder.borrow().messages,
            ["Code was changed - try to save it and refresh."]
        );

        sync.text_selection_changed(SelectionOrigin::UserInput, Selection::new(0, 15, 0, 16))
            .unwrap();
        sync.tree_selection_changed(SelectionOrigin::UserInput, 8);
        {
            let recorder = recorder.borrow();
            assert!(recorder.reveals.is_empty());
            assert!(recorder.selects.is_empty());
        }

        sync.refresh();
        assert_eq!(sync.staleness(), Staleness::Fresh);
        sync.text_selection_changed(SelectionOrigin::UserInput, Selection::new(0, 15, 0, 16))
            .unwrap();
        assert!(!recorder.borrow().reveals.is_empty());
    }

    #[test]
    fn saved_invalidation_asks_for_a_refresh() {
        let (mut sync, recorder) = sync_over("int x = 1;");

        sync.invalidated(Invalidation::Saved);

        assert_eq!(sync.staleness(), Staleness::StaleSaved);
        assert_eq!(recorder.borrow().messages, ["Code was changed and saved - try to refresh."]);
    }
}
