use flickdom::Node;

use crate::component::{Component, ComponentBase, PayloadComponent};

/// A `button` node carrying a payload.
#[derive(Debug)]
pub struct Button<P> {
    base: ComponentBase<Node>,
    payload: P,
}

impl<P: 'static> Button<P> {
    pub fn new(payload: P) -> Self {
        Self {
            base: ComponentBase::new(Node::element("button").attr("type", "button")),
            payload,
        }
    }

    /// Set the button label.
    pub fn label(self, label: impl Into<String>) -> Self {
        self.base.node().set_text(label);
        self
    }

    /// Set whether the button is disabled.
    pub fn disabled(self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    pub fn set_disabled(&self, disabled: bool) {
        if disabled {
            self.base.node().set_attribute("disabled", "");
        } else {
            self.base.node().remove_attribute("disabled");
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.base.node().attribute("disabled").is_some()
    }
}

impl<P: 'static> Component<Node> for Button<P> {
    fn base(&self) -> &ComponentBase<Node> {
        &self.base
    }
}

impl<P: 'static> PayloadComponent<P, Node> for Button<P> {
    fn payload(&self) -> &P {
        &self.payload
    }
}
