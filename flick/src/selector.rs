//! Mutually exclusive selection across heterogeneous widgets.
//!
//! Anything implementing [`Selector`] can join a [`SelectorGroup`]. The group
//! only sees the capability, never the concrete widget type, and does not
//! keep its members alive: a widget is expected to leave the group from its
//! own `unmounting()` hook.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use log::{debug, trace};

/// The capability to be selected and unselected.
pub trait Selector {
    /// Mark this object as the active one.
    fn select(&self);

    /// Mark this object as inactive.
    fn unselect(&self);
}

/// Whether `member` and `selector` are the same object.
fn same_selector(member: &Weak<dyn Selector>, selector: &dyn Selector) -> bool {
    std::ptr::addr_eq(member.as_ptr(), selector)
}

/// A set of selectors of which at most one is selected at a time.
///
/// # Example
///
/// ```ignore
/// let group = SelectorGroup::new();
/// group.add_selector(first.clone());
/// group.add_selector(second.clone());
/// group.set_selected(&*first); // first selected, second unselected
/// ```
#[derive(Default)]
pub struct SelectorGroup {
    /// Non-owning membership.
    selectors: RefCell<Vec<Weak<dyn Selector>>>,
}

impl SelectorGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `selector` to the group. Adding a member again does nothing.
    pub fn add_selector(&self, selector: Rc<dyn Selector>) {
        let mut selectors = self.selectors.borrow_mut();
        selectors.retain(|s| s.strong_count() > 0);
        if !selectors.iter().any(|s| same_selector(s, &*selector)) {
            selectors.push(Rc::downgrade(&selector));
            debug!("selector group: {} members", selectors.len());
        }
    }

    /// Remove `selector` from the group. Removing a non-member does nothing.
    pub fn remove_selector(&self, selector: &dyn Selector) {
        let mut selectors = self.selectors.borrow_mut();
        selectors.retain(|s| s.strong_count() > 0 && !same_selector(s, selector));
        debug!("selector group: {} members", selectors.len());
    }

    /// Unselect every other member, then select `selector`.
    ///
    /// `select()` is invoked even when `selector` is already the selected
    /// member.
    pub fn set_selected(&self, selector: &dyn Selector) {
        // Hooks may add or remove members, so work on a snapshot.
        let others: Vec<Rc<dyn Selector>> = self
            .selectors
            .borrow()
            .iter()
            .filter(|s| !same_selector(s, selector))
            .filter_map(Weak::upgrade)
            .collect();
        trace!("selector group: unselecting {} members", others.len());
        for other in others {
            other.unselect();
        }
        selector.select();
    }

    pub fn contains(&self, selector: &dyn Selector) -> bool {
        self.selectors
            .borrow()
            .iter()
            .any(|s| s.strong_count() > 0 && same_selector(s, selector))
    }

    /// Number of live members.
    pub fn len(&self) -> usize {
        self.selectors
            .borrow()
            .iter()
            .filter(|s| s.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for SelectorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectorGroup")
            .field("members", &self.len())
            .finish()
    }
}
