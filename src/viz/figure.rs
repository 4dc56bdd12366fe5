//! Two-panel plotly figure.
//!
//! Left: the network diagram, nodes as layout circles and edges as arrow
//! annotations.  Right: the tanh curve with a dashed marker at each
//! pre-activation of the forward pass.
use plotly::{
    common::{DashType, Line, Mode},
    layout::{Annotation, Axis, GridPattern, LayoutGrid, Shape, ShapeLine, ShapeType},
    Layout, Plot, Scatter,
};

use crate::activation::tanh;
use crate::network::{forward::ForwardPass, params::NetworkParams};
use crate::viz::layout::{edge_color, edge_width, linspace, DiagramLayout};

/// Node radius in diagram units.
pub const NODE_RADIUS: f64 = 0.06;
/// Samples of the tanh curve over `CURVE_RANGE`.
pub const CURVE_SAMPLES: usize = 100;
pub const CURVE_RANGE: (f64, f64) = (-5.0, 5.0);

const FIGURE_SIZE: (usize, usize) = (1200, 800);

/// Builds the complete figure for one parameter set and its forward pass.
pub fn build_figure(params: &NetworkParams, pass: &ForwardPass) -> Plot {
    let diagram = DiagramLayout::from_params(params);

    let mut shapes = node_shapes(&diagram);
    shapes.extend(marker_shapes(&pass.pre_activations()));

    let mut annotations = vec![
        panel_title("Neural Network Architecture", "x domain", "y domain"),
        panel_title("Tanh Activation Function", "x2 domain", "y2 domain"),
    ];
    annotations.extend(edge_arrows(&diagram));
    annotations.extend(node_labels(&diagram));

    let layout = Layout::new()
        .grid(LayoutGrid::new().rows(1).columns(2).pattern(GridPattern::Independent))
        .width(FIGURE_SIZE.0)
        .height(FIGURE_SIZE.1)
        .show_legend(true)
        .x_axis(Axis::new().range(vec![0.0, 0.8]).visible(false))
        .y_axis(Axis::new().range(vec![0.15, 1.05]).visible(false))
        .x_axis2(Axis::new().show_grid(true))
        .y_axis2(Axis::new().show_grid(true))
        .shapes(shapes)
        .annotations(annotations);

    let mut plot = Plot::new();
    plot.add_trace(tanh_trace());
    plot.set_layout(layout);
    plot
}

/// Opens the figure once in the default browser.
pub fn show(plot: &Plot) {
    tracing::info!("opening figure");
    plot.show();
}

/// Writes the figure as a standalone HTML page.
pub fn write_html(plot: &Plot, path: &str) -> std::io::Result<()> {
    std::fs::write(path, plot.to_html())?;
    tracing::info!(path, "figure written");
    Ok(())
}

fn tanh_trace() -> Box<Scatter<f64, f64>> {
    let xs = linspace(CURVE_RANGE.0, CURVE_RANGE.1, CURVE_SAMPLES);
    let ys: Vec<f64> = xs.iter().map(|&x| tanh(x)).collect();
    Scatter::new(xs, ys)
        .mode(Mode::Lines)
        .name("tanh activation")
        .line(Line::new().width(2.0))
        .x_axis("x2")
        .y_axis("y2")
}

fn panel_title(text: &str, x_ref: &str, y_ref: &str) -> Annotation {
    Annotation::new()
        .text(format!("<b>{text}</b>").as_str())
        .x_ref(x_ref)
        .y_ref(y_ref)
        .x(0.5)
        .y(1.04)
        .show_arrow(false)
}

fn node_shapes(diagram: &DiagramLayout) -> Vec<Shape> {
    diagram
        .nodes
        .iter()
        .map(|node| {
            let (x, y) = node.pos;
            Shape::new()
                .shape_type(ShapeType::Circle)
                .x_ref("x")
                .y_ref("y")
                .x0(x - NODE_RADIUS)
                .y0(y - NODE_RADIUS)
                .x1(x + NODE_RADIUS)
                .y1(y + NODE_RADIUS)
                .fill_color(node.role().fill_color())
                .line(ShapeLine::new().color("black").width(2.0))
        })
        .collect()
}

fn node_labels(diagram: &DiagramLayout) -> Vec<Annotation> {
    diagram
        .nodes
        .iter()
        .map(|node| {
            Annotation::new()
                .text(format!("<b>{}</b>", node.name).as_str())
                .x_ref("x")
                .y_ref("y")
                .x(node.pos.0)
                .y(node.pos.1)
                .show_arrow(false)
        })
        .collect()
}

fn edge_arrows(diagram: &DiagramLayout) -> Vec<Annotation> {
    diagram
        .edges
        .iter()
        .filter_map(|edge| {
            let from = diagram.position(edge.from)?;
            let to = diagram.position(edge.to)?;
            let (tail, head) = trim_to_rims(from, to, NODE_RADIUS);
            Some(
                Annotation::new()
                    .text("")
                    .x_ref("x")
                    .y_ref("y")
                    .ax_ref("x")
                    .ay_ref("y")
                    .x(head.0)
                    .y(head.1)
                    .ax(tail.0)
                    .ay(tail.1)
                    .show_arrow(true)
                    .arrow_head(2)
                    .arrow_color(edge_color(edge.weight))
                    .arrow_width(edge_width(edge.weight)),
            )
        })
        .collect()
}

/// Red dashed vertical lines spanning the full height of the curve panel.
fn marker_shapes(values: &[f64]) -> Vec<Shape> {
    values
        .iter()
        .map(|&v| {
            Shape::new()
                .shape_type(ShapeType::Line)
                .x_ref("x2")
                .y_ref("y2 domain")
                .x0(v)
                .x1(v)
                .y0(0.0)
                .y1(1.0)
                .opacity(0.5)
                .line(ShapeLine::new().color("red").dash(DashType::Dash))
        })
        .collect()
}

/// Pulls both ends of a centre-to-centre segment in by `radius` so the arrow
/// starts and stops on the node circles.
fn trim_to_rims(from: (f64, f64), to: (f64, f64), radius: f64) -> ((f64, f64), (f64, f64)) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let len = dx.hypot(dy);
    if len <= 2.0 * radius {
        return (from, to);
    }
    let (ux, uy) = (dx / len * radius, dy / len * radius);
    ((from.0 + ux, from.1 + uy), (to.0 - ux, to.1 - uy))
}
