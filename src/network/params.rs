use serde::{Serialize, Deserialize};

/// Parameters of the fixed 2-2-2 network: two inputs, two tanh hidden units,
/// two tanh outputs.
///
/// Fields:
/// - `weights` — w1..w8.  w1..w4 feed the hidden layer
///               (w1, w2 → hidden1; w3, w4 → hidden2), w5..w8 feed the
///               output layer (w5, w6 → output1; w7, w8 → output2)
/// - `biases`  — b1 is shared by both hidden units, b2 by both outputs
/// - `inputs`  — i1, i2
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkParams {
    pub weights: [f64; 8],
    pub biases: [f64; 2],
    pub inputs: [f64; 2],
}

impl Default for NetworkParams {
    /// The worked example.
    fn default() -> Self {
        NetworkParams {
            weights: [0.15, 0.2, 0.35, 0.45, 0.5, 0.1, 0.33, 0.23],
            biases: [0.5, 0.7],
            inputs: [1.0, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_worked_example() {
        let p = NetworkParams::default();
        assert_eq!(p.weights, [0.15, 0.2, 0.35, 0.45, 0.5, 0.1, 0.33, 0.23]);
        assert_eq!(p.biases, [0.5, 0.7]);
        assert_eq!(p.inputs, [1.0, 1.0]);
    }

    #[test]
    fn test_params_deserialize_from_json_object() {
        let json = serde_json::to_value(NetworkParams::default()).unwrap();
        assert_eq!(json["biases"], serde_json::json!([0.5, 0.7]));
        let back: NetworkParams = serde_json::from_value(json).unwrap();
        assert_eq!(back, NetworkParams::default());

        let short = serde_json::json!({ "weights": [0.1, 0.2], "biases": [0.5, 0.7], "inputs": [1, 1] });
        assert!(serde_json::from_value::<NetworkParams>(short).is_err());
    }
}
