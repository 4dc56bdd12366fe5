pub mod figure;
pub mod layout;

pub use figure::{build_figure, show, write_html};
pub use layout::{DiagramLayout, NodeRole};
