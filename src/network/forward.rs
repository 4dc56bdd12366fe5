use crate::{activation::tanh, network::params::NetworkParams};
use serde::{Serialize, Deserialize};

/// Every intermediate and final value of one forward pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForwardPass {
    pub net_h1: f64,
    pub net_h2: f64,
    pub out_h1: f64,
    pub out_h2: f64,
    pub net_o1: f64,
    pub net_o2: f64,
    pub o1: f64,
    pub o2: f64,
}

impl ForwardPass {
    /// Runs the hidden layer then the output layer, both through tanh.
    pub fn compute(params: &NetworkParams) -> ForwardPass {
        let [w1, w2, w3, w4, w5, w6, w7, w8] = params.weights;
        let [b1, b2] = params.biases;
        let [i1, i2] = params.inputs;

        let net_h1 = w1 * i1 + w2 * i2 + b1;
        let net_h2 = w3 * i1 + w4 * i2 + b1;
        let out_h1 = tanh(net_h1);
        let out_h2 = tanh(net_h2);

        let net_o1 = w5 * out_h1 + w6 * out_h2 + b2;
        let net_o2 = w7 * out_h1 + w8 * out_h2 + b2;
        let o1 = tanh(net_o1);
        let o2 = tanh(net_o2);

        let pass = ForwardPass { net_h1, net_h2, out_h1, out_h2, net_o1, net_o2, o1, o2 };
        tracing::debug!(?pass, "forward pass computed");
        pass
    }

    /// `[net_h1, net_h2, net_o1, net_o2]`, the values marked on the tanh plot.
    pub fn pre_activations(&self) -> [f64; 4] {
        [self.net_h1, self.net_h2, self.net_o1, self.net_o2]
    }

    /// `[o1, o2]`, the final outputs.
    pub fn outputs(&self) -> [f64; 2] {
        [self.o1, self.o2]
    }
}
