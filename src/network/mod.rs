pub mod forward;
pub mod params;

pub use forward::ForwardPass;
pub use params::NetworkParams;
