//! Components: owners of a view node, its child components and mount state.

mod base;
mod error;
mod fragment;
mod list;
mod traits;

pub use base::{ComponentBase, ComponentId};
pub use error::ComponentError;
pub use fragment::Fragment;
pub use list::ListComponent;
pub use traits::{AsComponent, Component, PayloadComponent};
