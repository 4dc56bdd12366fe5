use crate::network::params::NetworkParams;

/// What a diagram node stands for; decides its fill colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Input,
    Hidden,
    Output,
    Bias,
}

impl NodeRole {
    /// Role from the node's name prefix.  Anything not named `input*`,
    /// `hidden*` or `output*` is a bias node.
    pub fn of(name: &str) -> NodeRole {
        if name.starts_with("input") {
            NodeRole::Input
        } else if name.starts_with("hidden") {
            NodeRole::Hidden
        } else if name.starts_with("output") {
            NodeRole::Output
        } else {
            NodeRole::Bias
        }
    }

    pub fn fill_color(&self) -> &'static str {
        match self {
            NodeRole::Input => "skyblue",
            NodeRole::Hidden => "lightgreen",
            NodeRole::Output => "gold",
            NodeRole::Bias => "gray",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub name: &'static str,
    pub pos: (f64, f64),
}

impl Node {
    pub fn role(&self) -> NodeRole {
        NodeRole::of(self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: &'static str,
    pub to: &'static str,
    pub weight: f64,
}

/// Fixed node positions (in a unit square) and weighted edges of the 2-2-2
/// network diagram.
#[derive(Debug, Clone)]
pub struct DiagramLayout {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

const POSITIONS: [(&str, (f64, f64)); 8] = [
    ("input1", (0.1, 0.7)),
    ("input2", (0.1, 0.3)),
    ("hidden1", (0.4, 0.7)),
    ("hidden2", (0.4, 0.3)),
    ("output1", (0.7, 0.6)),
    ("output2", (0.7, 0.4)),
    ("b1", (0.4, 0.9)),
    ("b2", (0.7, 0.9)),
];

impl DiagramLayout {
    pub fn from_params(params: &NetworkParams) -> DiagramLayout {
        let nodes = POSITIONS
            .iter()
            .map(|&(name, pos)| Node { name, pos })
            .collect();

        let [w1, w2, w3, w4, w5, w6, w7, w8] = params.weights;
        let [b1, b2] = params.biases;
        let edges = [
            ("input1", "hidden1", w1), ("input2", "hidden1", w2),
            ("input1", "hidden2", w3), ("input2", "hidden2", w4),
            ("hidden1", "output1", w5), ("hidden2", "output1", w6),
            ("hidden1", "output2", w7), ("hidden2", "output2", w8),
            ("b1", "hidden1", b1), ("b1", "hidden2", b1),
            ("b2", "output1", b2), ("b2", "output2", b2),
        ]
        .into_iter()
        .map(|(from, to, weight)| Edge { from, to, weight })
        .collect();

        DiagramLayout { nodes, edges }
    }

    pub fn position(&self, name: &str) -> Option<(f64, f64)> {
        self.nodes.iter().find(|n| n.name == name).map(|n| n.pos)
    }
}

/// Green for positive weights, red for zero or negative, both at 0.7 opacity.
pub fn edge_color(weight: f64) -> &'static str {
    if weight > 0.0 {
        "rgba(0, 128, 0, 0.7)"
    } else {
        "rgba(255, 0, 0, 0.7)"
    }
}

/// Stroke width proportional to weight magnitude.
pub fn edge_width(weight: f64) -> f64 {
    weight.abs() * 5.0
}

/// `n` evenly spaced samples over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_layout_nodes() {
        let layout = DiagramLayout::from_params(&NetworkParams::default());
        assert_eq!(layout.nodes.len(), 8);
        assert_eq!(layout.position("input1"), Some((0.1, 0.7)));
        assert_eq!(layout.position("output2"), Some((0.7, 0.4)));
        assert_eq!(layout.position("b2"), Some((0.7, 0.9)));
        assert_eq!(layout.position("nowhere"), None);
    }

    #[test]
    fn test_layout_edges_carry_weights() {
        let params = NetworkParams::default();
        let layout = DiagramLayout::from_params(&params);
        assert_eq!(layout.edges.len(), 12);

        let weights: Vec<f64> = layout.edges.iter().map(|e| e.weight).collect();
        assert_eq!(&weights[..8], &params.weights[..]);
        assert_eq!(&weights[8..], &[0.5, 0.5, 0.7, 0.7]);

        assert_eq!(layout.edges[2], Edge { from: "input1", to: "hidden2", weight: 0.35 });
        assert_eq!(layout.edges[11], Edge { from: "b2", to: "output2", weight: 0.7 });
    }

    #[test]
    fn test_every_edge_endpoint_is_a_node() {
        let layout = DiagramLayout::from_params(&NetworkParams::default());
        for edge in &layout.edges {
            assert!(layout.position(edge.from).is_some(), "{}", edge.from);
            assert!(layout.position(edge.to).is_some(), "{}", edge.to);
        }
    }

    #[test]
    fn test_node_roles() {
        assert_eq!(NodeRole::of("input2"), NodeRole::Input);
        assert_eq!(NodeRole::of("hidden1"), NodeRole::Hidden);
        assert_eq!(NodeRole::of("output1"), NodeRole::Output);
        assert_eq!(NodeRole::of("b1"), NodeRole::Bias);

        let layout = DiagramLayout::from_params(&NetworkParams::default());
        let biases = layout.nodes.iter().filter(|n| n.role() == NodeRole::Bias).count();
        assert_eq!(biases, 2);
        assert_eq!(NodeRole::Hidden.fill_color(), "lightgreen");
    }

    #[test]
    fn test_edge_style() {
        assert_eq!(edge_color(0.2), "rgba(0, 128, 0, 0.7)");
        assert_eq!(edge_color(0.0), "rgba(255, 0, 0, 0.7)");
        assert_eq!(edge_color(-0.4), "rgba(255, 0, 0, 0.7)");
        assert_abs_diff_eq!(edge_width(0.15), 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(edge_width(-0.4), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linspace() {
        let xs = linspace(-5.0, 5.0, 100);
        assert_eq!(xs.len(), 100);
        assert_eq!(xs[0], -5.0);
        assert_abs_diff_eq!(xs[99], 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(xs[1] - xs[0], 10.0 / 99.0, epsilon = 1e-12);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
    }
}
