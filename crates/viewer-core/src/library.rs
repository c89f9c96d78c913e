//! Sidebar library tree.
//!
//! Only placeholder folders exist; nothing here is backed by files on disk.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryNode {
    pub label: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct LibraryTree {
    nodes: Vec<LibraryNode>,
    selected: Option<NodeId>,
}

impl Default for LibraryTree {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl LibraryTree {
    /// A tree holding only a root node labelled `root_label`.
    pub fn new(root_label: impl Into<String>) -> Self {
        Self {
            nodes: vec![LibraryNode { label: root_label.into(), parent: None, children: Vec::new() }],
            selected: None,
        }
    }

    /// `Library` with `Recent`, `Books` and `Research Papers` beneath it.
    pub fn placeholder() -> Self {
        let mut tree = Self::new("Library");
        let root = tree.root();
        for label in ["Recent", "Books", "Research Papers"] {
            tree.add_child(root, label);
        }
        tree
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a child under `parent`. Returns `None` when `parent` is unknown.
    pub fn add_child(&mut self, parent: NodeId, label: impl Into<String>) -> Option<NodeId> {
        if parent.0 >= self.nodes.len() {
            return None;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(LibraryNode { label: label.into(), parent: Some(parent), children: Vec::new() });
        self.nodes[parent.0].children.push(id);
        Some(id)
    }

    pub fn node(&self, id: NodeId) -> Option<&LibraryNode> {
        self.nodes.get(id.0)
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|node| node.label.as_str())
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|node| node.children.as_slice()).unwrap_or(&[])
    }

    pub fn select(&mut self, id: NodeId) -> bool {
        if id.0 >= self.nodes.len() {
            return false;
        }
        log::debug!("sidebar selection: {}", self.nodes[id.0].label);
        self.selected = Some(id);
        true
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_has_three_folders_under_library() {
        let tree = LibraryTree::placeholder();
        let root = tree.root();

        assert_eq!(tree.label(root), Some("Library"));
        let labels: Vec<_> =
            tree.children(root).iter().filter_map(|id| tree.label(*id)).collect();
        assert_eq!(labels, ["Recent", "Books", "Research Papers"]);
        assert!(tree.node(NodeId(4)).is_none());
    }

    #[test]
    fn folders_are_leaves() {
        let tree = LibraryTree::placeholder();
        for child in tree.children(tree.root()) {
            assert!(tree.children(*child).is_empty());
            assert_eq!(tree.node(*child).and_then(|node| node.parent), Some(tree.root()));
        }
    }

    #[test]
    fn selection_tracks_known_nodes_only() {
        let mut tree = LibraryTree::placeholder();
        let books = tree.children(tree.root())[1];

        assert!(tree.select(books));
        assert_eq!(tree.selected(), Some(books));

        assert!(!tree.select(NodeId(42)));
        assert_eq!(tree.selected(), Some(books));
    }

    #[test]
    fn add_child_rejects_unknown_parent() {
        let mut tree = LibraryTree::new("Root");
        assert!(tree.add_child(NodeId(7), "orphan").is_none());
        assert!(tree.children(tree.root()).is_empty());
        assert!(tree.node(NodeId(1)).is_none());
    }
}
