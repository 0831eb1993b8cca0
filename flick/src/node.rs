//! The view-node capability the component core is written against.
//!
//! Components never look inside their nodes; they only create containers,
//! link nodes together, detach them and ask whether they are displayed.

use std::fmt;

use flickdom::DomError;
use thiserror::Error;

/// A platform mutation that was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    /// `insert_before` was given a reference that is not a child of the target.
    #[error("reference node is not a child of the target node")]
    ReferenceNotChild,
    /// The mutation would produce an invalid tree.
    #[error("invalid hierarchy: {0}")]
    HierarchyRequest(String),
}

impl From<DomError> for NodeError {
    fn from(err: DomError) -> Self {
        match err {
            DomError::NotFound(_) => Self::ReferenceNotChild,
            DomError::HierarchyRequest(reason) => Self::HierarchyRequest(reason),
        }
    }
}

/// An opaque, platform-owned view node handle.
///
/// Handles are cheap to clone and every clone refers to the same node.
pub trait ViewNode: Clone + fmt::Debug + 'static {
    /// Create a display-capable container node.
    fn element(tag: &str) -> Self;

    /// Create a batching node. Inserting it moves its children into the
    /// destination.
    fn fragment() -> Self;

    fn append_child(&self, child: &Self) -> Result<(), NodeError>;

    fn insert_before(&self, child: &Self, reference: &Self) -> Result<(), NodeError>;

    /// Detach this node from its parent.
    fn remove(&self);

    /// Whether this node is currently reachable from a displayed root.
    fn is_connected(&self) -> bool;

    /// Whether this node is shown on screen. Batching nodes are not, and
    /// are never detached by component removal.
    fn is_displayable(&self) -> bool;
}

impl ViewNode for flickdom::Node {
    fn element(tag: &str) -> Self {
        flickdom::Node::element(tag)
    }

    fn fragment() -> Self {
        flickdom::Node::fragment()
    }

    fn append_child(&self, child: &Self) -> Result<(), NodeError> {
        Ok(flickdom::Node::append_child(self, child)?)
    }

    fn insert_before(&self, child: &Self, reference: &Self) -> Result<(), NodeError> {
        Ok(flickdom::Node::insert_before(self, child, reference)?)
    }

    fn remove(&self) {
        flickdom::Node::remove(self)
    }

    fn is_connected(&self) -> bool {
        flickdom::Node::is_connected(self)
    }

    fn is_displayable(&self) -> bool {
        !self.is_fragment()
    }
}
