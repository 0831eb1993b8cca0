use std::rc::Rc;

use log::{debug, trace};

use super::{ComponentBase, ComponentError, ComponentId};
use crate::node::ViewNode;

/// A node owner with child components and a mount lifecycle.
///
/// Implementors embed a [`ComponentBase`] and return it from
/// [`base`](Component::base); every tree operation is provided on top of it.
/// Override [`mounted`](Component::mounted) and
/// [`unmounting`](Component::unmounting) to react to lifecycle changes.
///
/// # Hook ordering
///
/// `mounted()` fires leaf-to-root: when it runs, the whole subtree below has
/// already been mounted and notified. `unmounting()` fires root-to-leaf: when
/// it runs, every descendant is still mounted and in place.
///
/// # Example
///
/// ```ignore
/// struct Panel {
///     base: ComponentBase<Node>,
/// }
///
/// impl Component<Node> for Panel {
///     fn base(&self) -> &ComponentBase<Node> {
///         &self.base
///     }
///
///     fn mounted(&self) {
///         log::info!("panel mounted with {} children", self.base.child_count());
///     }
/// }
/// ```
pub trait Component<N: ViewNode>: 'static {
    fn base(&self) -> &ComponentBase<N>;

    /// Called after this component and its whole subtree have been mounted.
    fn mounted(&self) {}

    /// Called before this component and its subtree are unmounted.
    fn unmounting(&self) {}

    // =========================================================================
    // Provided Methods - Accessors
    // =========================================================================

    fn id(&self) -> ComponentId {
        self.base().id()
    }

    fn node(&self) -> &N {
        self.base().node()
    }

    fn is_mounted(&self) -> bool {
        self.base().is_mounted()
    }

    /// Snapshot of the current children, in insertion order.
    fn children(&self) -> Vec<Rc<dyn Component<N>>> {
        self.base().children()
    }

    fn has_child(&self, child: &dyn Component<N>) -> bool {
        self.base().has_child(child.id())
    }

    // =========================================================================
    // Provided Methods - Membership
    // =========================================================================

    /// Append `child` after all existing children.
    ///
    /// If this component is mounted, the child's subtree is mounted too.
    fn add_child(&self, child: Rc<dyn Component<N>>) -> Result<(), ComponentError> {
        if child.base().is_attached() {
            return Err(ComponentError::AlreadyAttached { child: child.id() });
        }
        self.node().append_child(child.node())?;
        adopt(self.base(), child);
        Ok(())
    }

    /// Insert `child` with its node placed immediately before `sibling`.
    fn add_child_before(
        &self,
        child: Rc<dyn Component<N>>,
        sibling: &N,
    ) -> Result<(), ComponentError> {
        if child.base().is_attached() {
            return Err(ComponentError::AlreadyAttached { child: child.id() });
        }
        self.node().insert_before(child.node(), sibling)?;
        adopt(self.base(), child);
        Ok(())
    }

    /// Remove `child` from this component and [`remove`](Component::remove) it.
    fn remove_child(&self, child: &dyn Component<N>) -> Result<(), ComponentError> {
        let Some(member) = self.base().take_member(child.id()) else {
            return Err(ComponentError::ChildNotFound {
                parent: self.id(),
                child: child.id(),
            });
        };
        release(self.base(), member);
        Ok(())
    }

    /// Unmount this component's subtree and detach its node.
    ///
    /// Safe to call repeatedly; hooks fire on every call. Batching nodes are
    /// left where they are.
    fn remove(&self) {
        self.set_unmounted();
        let node = self.node();
        if node.is_displayable() {
            node.remove();
        }
    }

    // =========================================================================
    // Provided Methods - Propagation
    // =========================================================================

    /// Mark this subtree mounted, firing `mounted()` leaf-to-root.
    fn set_mounted(&self) {
        trace!("{}: mount", self.id());
        self.base().set_mounted_flag(true);
        for child in self.children() {
            child.set_mounted();
        }
        self.mounted();
    }

    /// Mark this subtree unmounted, firing `unmounting()` root-to-leaf.
    fn set_unmounted(&self) {
        trace!("{}: unmount", self.id());
        self.unmounting();
        for child in self.children() {
            child.set_unmounted();
        }
        self.base().set_mounted_flag(false);
    }

    // =========================================================================
    // Provided Methods - Attaching
    // =========================================================================

    /// Hand every child over to `parent`'s membership.
    ///
    /// Nodes are not touched: the children's nodes stay under this
    /// component's node. Returns the children that moved.
    fn transfer_children_to(&self, parent: &dyn Component<N>) -> Vec<Rc<dyn Component<N>>> {
        let moved = self.base().take_all();
        for child in &moved {
            parent.base().insert_member(child.clone());
        }
        debug!(
            "{}: transferred {} children to {}",
            self.id(),
            moved.len(),
            parent.id()
        );
        moved
    }

    /// Append this component's node to `parent`'s node.
    ///
    /// For a batching node this moves the staged child nodes into place.
    fn attach_node_to(&self, parent: &dyn Component<N>) -> Result<(), ComponentError> {
        parent.node().append_child(self.node())?;
        Ok(())
    }

    /// Flatten this component into `parent`.
    ///
    /// The node moves first, then the children join `parent`'s membership,
    /// and they are mounted if `parent` is. This component itself never
    /// becomes a child of `parent`.
    fn attach_to(&self, parent: &dyn Component<N>) -> Result<(), ComponentError> {
        self.attach_node_to(parent)?;
        let moved = self.transfer_children_to(parent);
        if parent.is_mounted() {
            for child in moved {
                child.set_mounted();
            }
        }
        Ok(())
    }
}

/// Record `child` as a member of `base` whose node is already in place.
fn adopt<N: ViewNode>(base: &ComponentBase<N>, child: Rc<dyn Component<N>>) {
    debug!("{}: adding child {}", base.id(), child.id());
    child.base().set_attached(true);
    base.insert_member(child.clone());
    if base.is_mounted() {
        child.set_mounted();
    }
}

/// Unmount and detach `member`, already taken out of `base`'s membership.
pub(crate) fn release<N: ViewNode>(base: &ComponentBase<N>, member: Rc<dyn Component<N>>) {
    debug!("{}: removing child {}", base.id(), member.id());
    member.base().set_attached(false);
    member.remove();
}

/// Conversion of a concrete component handle into a type-erased one.
///
/// Implemented for every sized [`Component`]; it lets handles typed as a
/// sub-trait object (like `Rc<dyn PayloadComponent<P, N>>`) be passed where an
/// `Rc<dyn Component<N>>` is expected.
pub trait AsComponent<N: ViewNode> {
    fn as_component(self: Rc<Self>) -> Rc<dyn Component<N>>;
}

impl<N: ViewNode, T: Component<N>> AsComponent<N> for T {
    fn as_component(self: Rc<Self>) -> Rc<dyn Component<N>> {
        self
    }
}

/// A component carrying an immutable payload, used as its sort key.
pub trait PayloadComponent<P, N: ViewNode>: Component<N> + AsComponent<N> {
    fn payload(&self) -> &P;
}
