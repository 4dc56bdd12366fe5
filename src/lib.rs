pub mod activation;
pub mod network;
pub mod report;
pub mod viz;

// Convenience re-exports
pub use activation::tanh;
pub use network::{ForwardPass, NetworkParams};
pub use report::{print_table, render_table};
pub use viz::{build_figure, DiagramLayout};
