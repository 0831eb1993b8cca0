use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use log::trace;

use super::NodeKind;
use crate::error::DomError;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug)]
struct NodeData {
    // Identity
    id: String,
    /// Whether `id` was chosen by the user (serialized) or generated.
    explicit_id: bool,
    /// Roots stand for the displayed document: anything below one is connected.
    root: bool,

    kind: NodeKind,

    // Tree
    parent: Weak<RefCell<NodeData>>,
    children: Vec<Node>,
}

/// A shared handle to a node in an in-memory view tree.
///
/// Cloning the handle does not clone the node: every clone refers to the same
/// node, and equality is identity. Parents own their children; children only
/// hold a weak link back to their parent.
#[derive(Clone)]
pub struct Node {
    inner: Rc<RefCell<NodeData>>,
}

impl Node {
    fn with_kind(kind: NodeKind) -> Self {
        let id = generate_id(kind.prefix());
        Self {
            inner: Rc::new(RefCell::new(NodeData {
                id,
                explicit_id: false,
                root: false,
                kind,
                parent: Weak::new(),
                children: Vec::new(),
            })),
        }
    }

    /// Create a displayed root (a `div` with the given id).
    ///
    /// Nodes below a root report themselves as connected.
    pub fn root(id: impl Into<String>) -> Self {
        let node = Self::element("div").id(id);
        node.inner.borrow_mut().root = true;
        node
    }

    pub fn element(tag: &str) -> Self {
        Self::with_kind(NodeKind::element(tag))
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::with_kind(NodeKind::Text(content.into()))
    }

    pub fn fragment() -> Self {
        Self::with_kind(NodeKind::Fragment)
    }

    // Builders

    pub fn id(self, id: impl Into<String>) -> Self {
        {
            let mut data = self.inner.borrow_mut();
            data.id = id.into();
            data.explicit_id = true;
        }
        self
    }

    pub fn class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn attr(self, name: &str, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    // Identity

    pub fn node_id(&self) -> String {
        self.inner.borrow().id.clone()
    }

    pub(crate) fn has_explicit_id(&self) -> bool {
        self.inner.borrow().explicit_id
    }

    pub fn kind(&self) -> NodeKind {
        self.inner.borrow().kind.clone()
    }

    pub fn tag(&self) -> Option<String> {
        match &self.inner.borrow().kind {
            NodeKind::Element { tag, .. } => Some(tag.clone()),
            _ => None,
        }
    }

    pub fn is_root(&self) -> bool {
        self.inner.borrow().root
    }

    pub fn is_fragment(&self) -> bool {
        self.inner.borrow().kind.is_fragment()
    }

    pub fn is_text(&self) -> bool {
        self.inner.borrow().kind.is_text()
    }

    pub fn is_element(&self) -> bool {
        self.inner.borrow().kind.is_element()
    }

    /// Whether both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    // Tree queries

    pub fn parent(&self) -> Option<Node> {
        self.inner
            .borrow()
            .parent
            .upgrade()
            .map(|inner| Node { inner })
    }

    pub fn children(&self) -> Vec<Node> {
        self.inner.borrow().children.clone()
    }

    pub fn child_count(&self) -> usize {
        self.inner.borrow().children.len()
    }

    pub fn first_child(&self) -> Option<Node> {
        self.inner.borrow().children.first().cloned()
    }

    /// Position of this node among its parent's children.
    pub fn index_in_parent(&self) -> Option<usize> {
        let parent = self.parent()?;
        let data = parent.inner.borrow();
        data.children.iter().position(|c| c.ptr_eq(self))
    }

    pub fn next_sibling(&self) -> Option<Node> {
        let parent = self.parent()?;
        let index = self.index_in_parent()?;
        let data = parent.inner.borrow();
        data.children.get(index + 1).cloned()
    }

    /// Whether `other` is this node or one of its descendants.
    pub fn contains(&self, other: &Node) -> bool {
        let mut current = Some(other.clone());
        while let Some(node) = current {
            if node.ptr_eq(self) {
                return true;
            }
            current = node.parent();
        }
        false
    }

    /// Whether the topmost ancestor of this node is a root.
    pub fn is_connected(&self) -> bool {
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current.is_root()
    }

    // Mutation

    /// Append `child` as the last child of this node.
    ///
    /// The child is detached from its previous parent first. Appending a
    /// fragment moves the fragment's children instead.
    pub fn append_child(&self, child: &Node) -> Result<(), DomError> {
        self.check_insertable(child)?;
        let moved = self.adopt(child);
        trace!("append {} node(s) into {}", moved.len(), self.node_id());
        self.inner.borrow_mut().children.extend(moved);
        Ok(())
    }

    /// Insert `child` immediately before `reference`, which must be a child
    /// of this node.
    pub fn insert_before(&self, child: &Node, reference: &Node) -> Result<(), DomError> {
        if !reference
            .parent()
            .is_some_and(|parent| parent.ptr_eq(self))
        {
            return Err(DomError::NotFound(reference.node_id()));
        }
        if child.ptr_eq(reference) {
            return Ok(());
        }
        self.check_insertable(child)?;

        let moved = self.adopt(child);
        // Look the reference up after adoption: detaching `child` may have
        // shifted it.
        let mut data = self.inner.borrow_mut();
        let index = data
            .children
            .iter()
            .position(|c| c.ptr_eq(reference))
            .ok_or_else(|| DomError::NotFound(reference.node_id()))?;
        trace!(
            "insert {} node(s) into {} at {}",
            moved.len(),
            data.id,
            index
        );
        data.children.splice(index..index, moved);
        Ok(())
    }

    /// Detach this node from its parent. Does nothing for parentless nodes.
    pub fn remove(&self) {
        let Some(parent) = self.parent() else {
            return;
        };
        parent
            .inner
            .borrow_mut()
            .children
            .retain(|c| !c.ptr_eq(self));
        self.inner.borrow_mut().parent = Weak::new();
    }

    fn check_insertable(&self, child: &Node) -> Result<(), DomError> {
        if self.is_text() {
            return Err(DomError::HierarchyRequest(format!(
                "text node '{}' cannot have children",
                self.node_id()
            )));
        }
        if child.is_root() {
            return Err(DomError::HierarchyRequest(format!(
                "root '{}' cannot be inserted",
                child.node_id()
            )));
        }
        if child.contains(self) {
            return Err(DomError::HierarchyRequest(format!(
                "'{}' is an ancestor of '{}'",
                child.node_id(),
                self.node_id()
            )));
        }
        Ok(())
    }

    /// Detach `child` (or a fragment's children) and point them at this node.
    /// Returns the nodes to splice into this node's child list.
    fn adopt(&self, child: &Node) -> Vec<Node> {
        let moved = if child.is_fragment() {
            std::mem::take(&mut child.inner.borrow_mut().children)
        } else {
            child.remove();
            vec![child.clone()]
        };
        for node in &moved {
            node.inner.borrow_mut().parent = Rc::downgrade(&self.inner);
        }
        moved
    }

    // Classes

    pub fn add_class(&self, class: &str) {
        if let NodeKind::Element { classes, .. } = &mut self.inner.borrow_mut().kind {
            if !classes.iter().any(|c| c == class) {
                classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&self, class: &str) {
        if let NodeKind::Element { classes, .. } = &mut self.inner.borrow_mut().kind {
            classes.retain(|c| c != class);
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        match &self.inner.borrow().kind {
            NodeKind::Element { classes, .. } => classes.iter().any(|c| c == class),
            _ => false,
        }
    }

    pub fn classes(&self) -> Vec<String> {
        match &self.inner.borrow().kind {
            NodeKind::Element { classes, .. } => classes.clone(),
            _ => Vec::new(),
        }
    }

    // Attributes

    pub fn set_attribute(&self, name: &str, value: impl Into<String>) {
        if let NodeKind::Element { attributes, .. } = &mut self.inner.borrow_mut().kind {
            attributes.insert(name.to_string(), value.into());
        }
    }

    pub fn remove_attribute(&self, name: &str) {
        if let NodeKind::Element { attributes, .. } = &mut self.inner.borrow_mut().kind {
            attributes.remove(name);
        }
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        match &self.inner.borrow().kind {
            NodeKind::Element { attributes, .. } => attributes.get(name).cloned(),
            _ => None,
        }
    }

    // Text

    /// Replace the text of a text node, or the children of an element with a
    /// single text node.
    pub fn set_text(&self, content: impl Into<String>) {
        let content = content.into();
        if self.is_text() {
            self.inner.borrow_mut().kind = NodeKind::Text(content);
            return;
        }
        for child in self.children() {
            child.remove();
        }
        let text = Node::text(content);
        text.inner.borrow_mut().parent = Rc::downgrade(&self.inner);
        self.inner.borrow_mut().children.push(text);
    }

    /// Concatenated text of this node and all its descendants.
    pub fn text_content(&self) -> String {
        let data = self.inner.borrow();
        match &data.kind {
            NodeKind::Text(text) => text.clone(),
            _ => data.children.iter().map(Node::text_content).collect(),
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.inner.borrow();
        f.debug_struct("Node")
            .field("id", &data.id)
            .field("kind", &data.kind)
            .field("children", &data.children.len())
            .finish()
    }
}
