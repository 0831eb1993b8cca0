use thiserror::Error;

/// Errors raised by tree mutations, named after their DOM counterparts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// The reference node is not a child of the node being mutated.
    #[error("node '{0}' is not a child of this node")]
    NotFound(String),
    /// The insertion would produce an invalid tree (cycle, text parent, moved root).
    #[error("hierarchy request refused: {0}")]
    HierarchyRequest(String),
}
