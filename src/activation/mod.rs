pub mod activation;

pub use activation::tanh;
