//! Reference widgets built on the `flickdom` node tree.

mod button;
mod checkbox;
mod list_entry;

pub use button::Button;
pub use checkbox::Checkbox;
pub use list_entry::{ListEntry, SelectedFactory};
