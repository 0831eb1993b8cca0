use thiserror::Error;

use super::ComponentId;
use crate::node::NodeError;

/// Errors raised by component tree mutations.
///
/// All of them signal a caller bug; a failed call leaves membership and
/// sibling order as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
    /// `remove_child` was called with a component that is not a member.
    #[error("{child} is not a child of {parent}")]
    ChildNotFound {
        parent: ComponentId,
        child: ComponentId,
    },
    /// `add_child` was called with a component that already has a parent.
    #[error("{child} already belongs to a parent")]
    AlreadyAttached { child: ComponentId },
    /// The platform refused the node mutation.
    #[error(transparent)]
    Node(#[from] NodeError),
}

impl From<flickdom::DomError> for ComponentError {
    fn from(err: flickdom::DomError) -> Self {
        Self::Node(err.into())
    }
}
