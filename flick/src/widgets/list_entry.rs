use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use flickdom::Node;
use log::{error, trace};

use crate::component::{Component, ComponentBase, ComponentError, PayloadComponent};
use crate::context::AppContext;
use crate::selector::{Selector, SelectorGroup};

/// Produces the component shown when an entry is selected.
pub type SelectedFactory<P> = Box<dyn Fn(&P) -> Rc<dyn Component<Node>>>;

/// A selectable navigation entry for a list.
///
/// Renders as `li.nav-item.list-group-item > a.nav-link` with an icon and a
/// text label. The entry joins its [`SelectorGroup`] when created and leaves
/// it when unmounted. Selecting it highlights the link and asks the
/// [`AppContext`] to show the component built by its factory.
pub struct ListEntry<P> {
    base: ComponentBase<Node>,
    payload: P,
    group: Rc<SelectorGroup>,
    cx: Rc<AppContext<Node>>,
    link: Node,
    icon: RefCell<Node>,
    text: Node,
    factory: SelectedFactory<P>,
}

impl<P: 'static> ListEntry<P> {
    pub fn new(
        group: Rc<SelectorGroup>,
        cx: Rc<AppContext<Node>>,
        payload: P,
        icon: Node,
        text: &str,
        factory: impl Fn(&P) -> Rc<dyn Component<Node>> + 'static,
    ) -> Result<Rc<Self>, ComponentError> {
        let node = Node::element("li")
            .class("nav-item")
            .class("list-group-item");
        let link = Node::element("a")
            .class("nav-link")
            .class("d-flex")
            .class("align-items-center")
            .attr("href", "#");
        icon.add_class("me-2");
        link.append_child(&icon)?;
        let text = Node::text(text);
        link.append_child(&text)?;
        node.append_child(&link)?;

        let entry = Rc::new(Self {
            base: ComponentBase::new(node),
            payload,
            group,
            cx,
            link,
            icon: RefCell::new(icon),
            text,
            factory: Box::new(factory),
        });
        entry.group.add_selector(entry.clone());
        Ok(entry)
    }

    /// Handle a click on the link: make this the group's selected entry.
    pub fn activate(&self) {
        self.group.set_selected(self);
    }

    /// Whether the link is currently highlighted.
    pub fn is_active(&self) -> bool {
        self.link.has_class("active")
    }

    pub fn set_text(&self, text: &str) {
        self.text.set_text(text);
    }

    pub fn text(&self) -> String {
        self.text.text_content()
    }

    /// Replace the icon in place.
    pub fn set_icon(&self, icon: Node) -> Result<(), ComponentError> {
        let mut current = self.icon.borrow_mut();
        icon.add_class("me-2");
        self.link.insert_before(&icon, &current)?;
        current.remove();
        *current = icon;
        Ok(())
    }

    pub fn icon(&self) -> Node {
        self.icon.borrow().clone()
    }
}

impl<P: 'static> Component<Node> for ListEntry<P> {
    fn base(&self) -> &ComponentBase<Node> {
        &self.base
    }

    fn unmounting(&self) {
        self.group.remove_selector(self);
    }
}

impl<P: 'static> PayloadComponent<P, Node> for ListEntry<P> {
    fn payload(&self) -> &P {
        &self.payload
    }
}

impl<P: 'static> Selector for ListEntry<P> {
    fn select(&self) {
        trace!("{}: select", self.id());
        self.link.add_class("active");
        let shown = (self.factory)(&self.payload);
        if let Err(err) = self.cx.set_selected_component(Some(shown)) {
            error!("{}: failed to show selected component: {}", self.id(), err);
        }
    }

    fn unselect(&self) {
        self.link.remove_class("active");
    }
}

impl<P: fmt::Debug> fmt::Debug for ListEntry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListEntry")
            .field("base", &self.base)
            .field("payload", &self.payload)
            .field("active", &self.link.has_class("active"))
            .finish()
    }
}
