pub mod component;
pub mod context;
pub mod node;
pub mod selector;
pub mod widgets;

pub use component::{
    Component, ComponentBase, ComponentError, ComponentId, Fragment, ListComponent,
    PayloadComponent,
};
pub use context::{AppContext, AppListener};
pub use node::{NodeError, ViewNode};
pub use selector::{Selector, SelectorGroup};

pub mod prelude {
    pub use crate::component::{
        AsComponent, Component, ComponentBase, ComponentError, ComponentId, Fragment,
        ListComponent, PayloadComponent,
    };
    pub use crate::context::{AppContext, AppListener};
    pub use crate::node::{NodeError, ViewNode};
    pub use crate::selector::{Selector, SelectorGroup};
    pub use crate::widgets::{Button, Checkbox, ListEntry};

    pub use flickdom::Node;
}
