mod kind;
mod tree;

pub use kind::NodeKind;
pub use tree::Node;

/// Find a node by ID in the tree, searching depth-first from `root`.
pub fn find_node(root: &Node, id: &str) -> Option<Node> {
    if root.node_id() == id {
        return Some(root.clone());
    }

    for child in root.children() {
        if let Some(found) = find_node(&child, id) {
            return Some(found);
        }
    }

    None
}
