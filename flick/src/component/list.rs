//! Sorted list component.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use log::debug;

use super::traits::release;
use super::{Component, ComponentBase, ComponentError, Fragment, PayloadComponent};
use crate::node::ViewNode;

type CompareFn<P> = Box<dyn Fn(&P, &P) -> Ordering>;

/// A component whose children are kept sorted by their payloads.
///
/// The item sequence and the sibling order of the item nodes never diverge:
/// insertion places the new node directly before the node of the item that
/// follows it in sorted order. Sorting is stable, so items that compare equal
/// stay in the order they were added.
///
/// Use [`ListComponent::add_child`] and [`ListComponent::remove_child`] to
/// change the items. Removal through [`Component::remove_child`] keeps the
/// sequence in step as well; [`Component::add_child`] does not sort and
/// should not be used on a list.
///
/// # Example
///
/// ```ignore
/// let list = ListComponent::unordered_by(entries, |a: &String, b| a.cmp(b))?;
/// list.add_child(entry)?; // lands at its sorted position
/// ```
pub struct ListComponent<P: 'static, N: ViewNode> {
    base: ComponentBase<N>,
    /// Sorted by `compare` on the payloads.
    items: RefCell<Vec<Rc<dyn PayloadComponent<P, N>>>>,
    compare: CompareFn<P>,
}

impl<P: 'static, N: ViewNode> ListComponent<P, N> {
    /// Create a list over `node` keeping `items` in their given order.
    pub fn new(
        node: N,
        items: Vec<Rc<dyn PayloadComponent<P, N>>>,
    ) -> Result<Self, ComponentError> {
        Self::with_compare(node, items, |_, _| Ordering::Equal)
    }

    /// Create a list over `node` sorted by `compare`.
    ///
    /// The initial items are sorted once and their nodes staged in a
    /// [`Fragment`], which is attached to `node` in a single operation.
    ///
    /// Fails with [`ComponentError::AlreadyAttached`] if an item already has a
    /// parent or appears twice; on any failure the items are left as they
    /// were given.
    pub fn with_compare(
        node: N,
        mut items: Vec<Rc<dyn PayloadComponent<P, N>>>,
        compare: impl Fn(&P, &P) -> Ordering + 'static,
    ) -> Result<Self, ComponentError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.base().is_attached() || !seen.insert(item.id()) {
                return Err(ComponentError::AlreadyAttached { child: item.id() });
            }
        }
        items.sort_by(|a, b| compare(a.payload(), b.payload()));

        let list = Self {
            base: ComponentBase::new(node),
            items: RefCell::new(Vec::new()),
            compare: Box::new(compare),
        };

        let staging = Fragment::<N>::new();
        let staged = items
            .iter()
            .try_for_each(|item| staging.add_child(item.clone().as_component()))
            .and_then(|()| staging.attach_to(&list));
        if let Err(err) = staged {
            // Hand the staged items back detached
            for member in staging.base().take_all() {
                member.base().set_attached(false);
                member.node().remove();
            }
            return Err(err);
        }
        *list.items.borrow_mut() = items;

        debug!("{}: created with {} items", list.id(), list.len());
        Ok(list)
    }

    /// A `ul` list keeping insertion order.
    pub fn unordered(items: Vec<Rc<dyn PayloadComponent<P, N>>>) -> Result<Self, ComponentError> {
        Self::new(N::element("ul"), items)
    }

    /// A sorted `ul` list.
    pub fn unordered_by(
        items: Vec<Rc<dyn PayloadComponent<P, N>>>,
        compare: impl Fn(&P, &P) -> Ordering + 'static,
    ) -> Result<Self, ComponentError> {
        Self::with_compare(N::element("ul"), items, compare)
    }

    /// A `div` list keeping insertion order.
    pub fn div(items: Vec<Rc<dyn PayloadComponent<P, N>>>) -> Result<Self, ComponentError> {
        Self::new(N::element("div"), items)
    }

    /// A sorted `div` list.
    pub fn div_by(
        items: Vec<Rc<dyn PayloadComponent<P, N>>>,
        compare: impl Fn(&P, &P) -> Ordering + 'static,
    ) -> Result<Self, ComponentError> {
        Self::with_compare(N::element("div"), items, compare)
    }

    // -------------------------------------------------------------------------
    // Item access
    // -------------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the items in sorted order.
    pub fn items(&self) -> Vec<Rc<dyn PayloadComponent<P, N>>> {
        self.items.borrow().clone()
    }

    pub fn get(&self, index: usize) -> Option<Rc<dyn PayloadComponent<P, N>>> {
        self.items.borrow().get(index).cloned()
    }

    /// Index of `item` in the sorted sequence.
    pub fn position(&self, item: &dyn PayloadComponent<P, N>) -> Option<usize> {
        let id = item.id();
        self.items.borrow().iter().position(|i| i.id() == id)
    }

    // -------------------------------------------------------------------------
    // Item mutation
    // -------------------------------------------------------------------------

    /// Insert `child` at its sorted position, after any items comparing equal.
    pub fn add_child(&self, child: Rc<dyn PayloadComponent<P, N>>) -> Result<(), ComponentError> {
        let (index, sibling) = {
            let items = self.items.borrow();
            let index = items.partition_point(|item| {
                (self.compare)(item.payload(), child.payload()) != Ordering::Greater
            });
            (index, items.get(index).map(|next| next.node().clone()))
        };

        // The item goes into the sequence first so hooks fired by the
        // mount below already see it.
        self.items.borrow_mut().insert(index, child.clone());
        let result = match &sibling {
            None => Component::add_child(self, child.as_component()),
            Some(sibling) => Component::add_child_before(self, child.as_component(), sibling),
        };
        if let Err(err) = result {
            self.items.borrow_mut().remove(index);
            return Err(err);
        }

        debug!("{}: item inserted at {}", self.id(), index);
        Ok(())
    }

    /// Remove `child` from the sequence, unmount it and detach its node.
    pub fn remove_child(&self, child: &dyn PayloadComponent<P, N>) -> Result<(), ComponentError> {
        let Some(item) = self.position(child).and_then(|index| self.get(index)) else {
            return Err(ComponentError::ChildNotFound {
                parent: self.id(),
                child: child.id(),
            });
        };
        Component::remove_child(self, &*item.as_component())
    }
}

impl<P: Clone + 'static, N: ViewNode> ListComponent<P, N> {
    /// The item payloads in sorted order.
    pub fn payloads(&self) -> Vec<P> {
        self.items
            .borrow()
            .iter()
            .map(|item| item.payload().clone())
            .collect()
    }
}

impl<P: 'static, N: ViewNode> Component<N> for ListComponent<P, N> {
    fn base(&self) -> &ComponentBase<N> {
        &self.base
    }

    /// Remove a member, dropping it from the item sequence too.
    fn remove_child(&self, child: &dyn Component<N>) -> Result<(), ComponentError> {
        let Some(member) = self.base.take_member(child.id()) else {
            return Err(ComponentError::ChildNotFound {
                parent: self.id(),
                child: child.id(),
            });
        };
        self.items.borrow_mut().retain(|item| item.id() != member.id());
        release(&self.base, member);
        Ok(())
    }
}

impl<P: 'static, N: ViewNode> fmt::Debug for ListComponent<P, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListComponent")
            .field("base", &self.base)
            .field("items", &self.len())
            .finish()
    }
}
