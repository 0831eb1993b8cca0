pub mod error;
pub mod html;
pub mod node;

pub use error::DomError;
pub use node::{find_node, Node, NodeKind};
