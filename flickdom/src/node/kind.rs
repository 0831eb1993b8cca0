use std::collections::BTreeMap;

/// What a node is, and the data specific to that kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A tagged element with classes and attributes.
    Element {
        tag: String,
        classes: Vec<String>,
        attributes: BTreeMap<String, String>,
    },
    /// A run of text. Text nodes cannot have children.
    Text(String),
    /// A batching container. Inserting a fragment moves its children
    /// into the destination and leaves the fragment empty.
    Fragment,
}

impl NodeKind {
    pub(crate) fn element(tag: &str) -> Self {
        Self::Element {
            tag: tag.to_string(),
            classes: Vec::new(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    pub fn is_fragment(&self) -> bool {
        matches!(self, Self::Fragment)
    }

    /// Short name used for generated IDs and debug output.
    pub(crate) fn prefix(&self) -> &str {
        match self {
            Self::Element { tag, .. } => tag,
            Self::Text(_) => "text",
            Self::Fragment => "fragment",
        }
    }
}
