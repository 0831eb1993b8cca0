//! Application context shared by components.
//!
//! `AppContext` tracks which component is currently shown as "selected" and
//! fans out notifications to listeners. It is created once by the application
//! and handed to every widget that needs it; nothing looks it up globally.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use log::debug;

use crate::component::{Component, ComponentError};
use crate::node::ViewNode;

/// Receives application-level notifications.
pub trait AppListener<N: ViewNode> {
    /// A toast message was requested.
    fn toast(&self, _info: &str) {}

    /// The selected component changed.
    fn selected_component(&self, _component: Option<&Rc<dyn Component<N>>>) {}
}

/// Shared application state, passed explicitly to the widgets that use it.
///
/// # Example
///
/// ```ignore
/// let cx = Rc::new(AppContext::new());
/// cx.set_host(main_panel.clone());
/// let entry = ListEntry::new(group, cx.clone(), "home", icon, "Home", factory)?;
/// ```
pub struct AppContext<N: ViewNode> {
    /// Where the selected component is displayed, if anywhere.
    host: RefCell<Option<Rc<dyn Component<N>>>>,
    selected: RefCell<Option<Rc<dyn Component<N>>>>,
    listeners: RefCell<Vec<Weak<dyn AppListener<N>>>>,
}

impl<N: ViewNode> AppContext<N> {
    pub fn new() -> Self {
        Self {
            host: RefCell::new(None),
            selected: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Display selected components as children of `host`.
    pub fn set_host(&self, host: Rc<dyn Component<N>>) {
        *self.host.borrow_mut() = Some(host);
    }

    pub fn selected_component(&self) -> Option<Rc<dyn Component<N>>> {
        self.selected.borrow().clone()
    }

    /// Replace the selected component.
    ///
    /// The new one is added to the host, the previous one is removed (through
    /// the host when it is a member there), and listeners are told. If the
    /// host refuses the new component, nothing changes.
    pub fn set_selected_component(
        &self,
        component: Option<Rc<dyn Component<N>>>,
    ) -> Result<(), ComponentError> {
        let previous = self.selected.borrow().clone();
        let host = self.host.borrow().clone();
        let reselected = match (&previous, &component) {
            (Some(previous), Some(component)) => previous.id() == component.id(),
            _ => false,
        };

        // A reselected component has to leave the host before rejoining it
        if let Some(previous) = previous.as_ref().filter(|_| reselected) {
            dismiss(host.as_ref(), previous)?;
        }
        if let (Some(host), Some(component)) = (&host, &component) {
            host.add_child(component.clone())?;
        }
        if let Some(previous) = previous.as_ref().filter(|_| !reselected) {
            dismiss(host.as_ref(), previous)?;
        }
        *self.selected.borrow_mut() = component.clone();

        debug!(
            "selected component: {:?}",
            component.as_ref().map(|c| c.id())
        );
        for listener in self.live_listeners() {
            listener.selected_component(component.as_ref());
        }
        Ok(())
    }

    /// Ask listeners to show a toast message.
    pub fn toast(&self, info: &str) {
        for listener in self.live_listeners() {
            listener.toast(info);
        }
    }

    /// Register a listener. The context does not keep it alive.
    pub fn add_listener(&self, listener: Rc<dyn AppListener<N>>) {
        self.listeners.borrow_mut().push(Rc::downgrade(&listener));
    }

    pub fn remove_listener(&self, listener: &dyn AppListener<N>) {
        self.listeners.borrow_mut().retain(|l| {
            l.strong_count() > 0 && !std::ptr::addr_eq(l.as_ptr(), listener)
        });
    }

    fn live_listeners(&self) -> Vec<Rc<dyn AppListener<N>>> {
        let mut listeners = self.listeners.borrow_mut();
        listeners.retain(|l| l.strong_count() > 0);
        listeners.iter().filter_map(Weak::upgrade).collect()
    }
}

/// Take `previous` off screen, through `host` when it is a member there.
fn dismiss<N: ViewNode>(
    host: Option<&Rc<dyn Component<N>>>,
    previous: &Rc<dyn Component<N>>,
) -> Result<(), ComponentError> {
    match host {
        Some(host) if host.has_child(&**previous) => host.remove_child(&**previous),
        _ => {
            previous.remove();
            Ok(())
        }
    }
}

impl<N: ViewNode> Default for AppContext<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: ViewNode> fmt::Debug for AppContext<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field(
                "selected",
                &self.selected.borrow().as_ref().map(|c| c.id()),
            )
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}
