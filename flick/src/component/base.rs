use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::Component;
use crate::node::ViewNode;

/// Unique identifier for a component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(usize);

impl ComponentId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "component#{}", self.0)
    }
}

/// The state every component carries: its node, mount flag and children.
///
/// Embed one in your component struct and return it from
/// [`Component::base`]. The tree operations on [`Component`] keep it
/// consistent; the accessors here are read-only apart from the crate-private
/// bookkeeping they use.
pub struct ComponentBase<N: ViewNode> {
    id: ComponentId,
    node: N,
    mounted: Cell<bool>,
    /// Whether this component is a member of some parent's children.
    attached: Cell<bool>,
    /// Membership only. Kept in insertion order so traversal is deterministic.
    children: RefCell<Vec<Rc<dyn Component<N>>>>,
}

impl<N: ViewNode> ComponentBase<N> {
    /// Wrap a node. The component starts mounted if the node is already
    /// connected to a displayed root.
    pub fn new(node: N) -> Self {
        let mounted = node.is_connected();
        Self {
            id: ComponentId::new(),
            node,
            mounted: Cell::new(mounted),
            attached: Cell::new(false),
            children: RefCell::new(Vec::new()),
        }
    }

    /// Wrap a freshly created element node with the given tag.
    pub fn element(tag: &str) -> Self {
        Self::new(N::element(tag))
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }

    /// Snapshot of the current children.
    pub fn children(&self) -> Vec<Rc<dyn Component<N>>> {
        self.children.borrow().clone()
    }

    pub fn child_count(&self) -> usize {
        self.children.borrow().len()
    }

    pub fn has_child(&self, id: ComponentId) -> bool {
        self.children.borrow().iter().any(|c| c.id() == id)
    }

    pub(crate) fn set_mounted_flag(&self, mounted: bool) {
        self.mounted.set(mounted);
    }

    pub(crate) fn set_attached(&self, attached: bool) {
        self.attached.set(attached);
    }

    pub(crate) fn insert_member(&self, child: Rc<dyn Component<N>>) {
        let mut children = self.children.borrow_mut();
        if !children.iter().any(|c| c.id() == child.id()) {
            children.push(child);
        }
    }

    pub(crate) fn take_member(&self, id: ComponentId) -> Option<Rc<dyn Component<N>>> {
        let mut children = self.children.borrow_mut();
        let index = children.iter().position(|c| c.id() == id)?;
        Some(children.remove(index))
    }

    pub(crate) fn take_all(&self) -> Vec<Rc<dyn Component<N>>> {
        std::mem::take(&mut *self.children.borrow_mut())
    }
}

impl<N: ViewNode> fmt::Debug for ComponentBase<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentBase")
            .field("id", &self.id)
            .field("node", &self.node)
            .field("mounted", &self.mounted.get())
            .field("children", &self.child_count())
            .finish()
    }
}
