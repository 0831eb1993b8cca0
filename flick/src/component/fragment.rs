use super::{Component, ComponentBase};
use crate::node::ViewNode;

/// A disposable staging component over a batching node.
///
/// Build children into a fragment while it is detached, then
/// [`attach_to`](Component::attach_to) a real parent: the child nodes move
/// into the parent's node in one operation and the children join the
/// parent's membership. The fragment is empty afterwards and can be dropped.
#[derive(Debug)]
pub struct Fragment<N: ViewNode> {
    base: ComponentBase<N>,
}

impl<N: ViewNode> Fragment<N> {
    pub fn new() -> Self {
        Self {
            base: ComponentBase::new(N::fragment()),
        }
    }
}

impl<N: ViewNode> Default for Fragment<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: ViewNode> Component<N> for Fragment<N> {
    fn base(&self) -> &ComponentBase<N> {
        &self.base
    }
}
