use std::fmt;

use flickdom::Node;

use crate::component::{Component, ComponentBase, ComponentError, PayloadComponent};

type Callback<P> = Box<dyn Fn(&P)>;

/// A labelled checkbox carrying a payload.
///
/// Renders as `div.form-check > input.form-check-input [+ label]`. The checked
/// state lives on the input's `checked` attribute; every change fires the
/// matching callback with the payload.
///
/// # Example
///
/// ```ignore
/// let checkbox = Checkbox::new(feature, |f| format!("feature-{}", f.id), false, Some("Enabled"))?
///     .on_checked(|f| enable(f))
///     .on_unchecked(|f| disable(f));
/// ```
pub struct Checkbox<P> {
    base: ComponentBase<Node>,
    payload: P,
    input: Node,
    on_checked: Option<Callback<P>>,
    on_unchecked: Option<Callback<P>>,
}

impl<P: 'static> Checkbox<P> {
    /// Create a checkbox. `id_factory` derives the input's id from the
    /// payload; the label, if any, points at that id.
    pub fn new(
        payload: P,
        id_factory: impl Fn(&P) -> String,
        checked: bool,
        label: Option<&str>,
    ) -> Result<Self, ComponentError> {
        let node = Node::element("div").class("form-check");
        let input_id = id_factory(&payload);
        let input = Node::element("input")
            .id(input_id.clone())
            .class("form-check-input")
            .attr("type", "checkbox");
        if checked {
            input.set_attribute("checked", "");
        }
        node.append_child(&input)?;

        if let Some(label) = label {
            let label_node = Node::element("label")
                .class("form-check-label")
                .attr("for", input_id);
            label_node.set_text(label);
            node.append_child(&label_node)?;
        }

        Ok(Self {
            base: ComponentBase::new(node),
            payload,
            input,
            on_checked: None,
            on_unchecked: None,
        })
    }

    /// Called with the payload whenever the checkbox becomes checked.
    pub fn on_checked(mut self, callback: impl Fn(&P) + 'static) -> Self {
        self.on_checked = Some(Box::new(callback));
        self
    }

    /// Called with the payload whenever the checkbox becomes unchecked.
    pub fn on_unchecked(mut self, callback: impl Fn(&P) + 'static) -> Self {
        self.on_unchecked = Some(Box::new(callback));
        self
    }

    pub fn is_checked(&self) -> bool {
        self.input.attribute("checked").is_some()
    }

    /// Set the checked state and fire the matching callback.
    pub fn set_checked(&self, checked: bool) {
        if checked {
            self.input.set_attribute("checked", "");
            if let Some(callback) = &self.on_checked {
                callback(&self.payload);
            }
        } else {
            self.input.remove_attribute("checked");
            if let Some(callback) = &self.on_unchecked {
                callback(&self.payload);
            }
        }
    }

    /// Flip the checked state, as a click on the input would.
    pub fn toggle(&self) {
        self.set_checked(!self.is_checked());
    }

    pub fn input(&self) -> &Node {
        &self.input
    }
}

impl<P: 'static> Component<Node> for Checkbox<P> {
    fn base(&self) -> &ComponentBase<Node> {
        &self.base
    }
}

impl<P: 'static> PayloadComponent<P, Node> for Checkbox<P> {
    fn payload(&self) -> &P {
        &self.payload
    }
}

impl<P: fmt::Debug> fmt::Debug for Checkbox<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checkbox")
            .field("base", &self.base)
            .field("payload", &self.payload)
            .field("checked", &self.input.attribute("checked").is_some())
            .finish()
    }
}
