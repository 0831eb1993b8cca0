//! HTML-like serialization of a node tree, used for debugging and tests.

use crate::node::{Node, NodeKind};

impl Node {
    /// Serialize this node and its subtree.
    ///
    /// Generated IDs are omitted so output is stable across runs; IDs set via
    /// [`Node::id`] are written as an `id` attribute. Fragments serialize as
    /// their children.
    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        write_node(self, &mut out);
        out
    }

    /// Serialize only the children of this node.
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in self.children() {
            write_node(&child, &mut out);
        }
        out
    }
}

fn write_node(node: &Node, out: &mut String) {
    match node.kind() {
        NodeKind::Text(text) => out.push_str(&escape(&text)),
        NodeKind::Fragment => {
            for child in node.children() {
                write_node(&child, out);
            }
        }
        NodeKind::Element {
            tag,
            classes,
            attributes,
        } => {
            out.push('<');
            out.push_str(&tag);
            if node.has_explicit_id() {
                push_attribute(out, "id", &node.node_id());
            }
            if !classes.is_empty() {
                push_attribute(out, "class", &classes.join(" "));
            }
            for (name, value) in &attributes {
                push_attribute(out, name, value);
            }
            out.push('>');
            for child in node.children() {
                write_node(&child, out);
            }
            out.push_str("</");
            out.push_str(&tag);
            out.push('>');
        }
    }
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_generated_ids_are_not_serialized() {
        let node = Node::element("p");
        assert_eq!(node.outer_html(), "<p></p>");
        let node = Node::element("p").id("intro");
        assert_eq!(node.outer_html(), "<p id=\"intro\"></p>");
    }
}
