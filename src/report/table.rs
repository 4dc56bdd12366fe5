//! Bordered results table for a forward pass.
//!
//! Two columns of equal width drawn with box characters: the six
//! intermediate values, a separator, then the two final outputs.  Values are
//! right-aligned with four decimal places.
use crate::network::forward::ForwardPass;

/// Minimum content columns per cell, excluding the one-space padding on each
/// side.  Cells widen to fit the longest rendered value.
const CELL_WIDTH: usize = 21;

fn border(left: char, mid: char, right: char, width: usize) -> String {
    let bar = "─".repeat(width + 2);
    format!("{left}{bar}{mid}{bar}{right}")
}

fn row(label: &str, value: &str, width: usize) -> String {
    format!("│ {label:<width$} │ {value:>width$} │")
}

/// Renders the table as a newline-terminated string.
pub fn render_table(pass: &ForwardPass) -> String {
    let intermediate: Vec<(&str, String)> = [
        ("net_h1", pass.net_h1),
        ("net_h2", pass.net_h2),
        ("out_h1", pass.out_h1),
        ("out_h2", pass.out_h2),
        ("net_o1", pass.net_o1),
        ("net_o2", pass.net_o2),
    ]
    .into_iter()
    .map(|(label, v)| (label, format!("{v:.4}")))
    .collect();
    let finals: Vec<(&str, String)> = [("Final Output 1", pass.o1), ("Final Output 2", pass.o2)]
        .into_iter()
        .map(|(label, v)| (label, format!("{v:.4}")))
        .collect();

    let width = intermediate
        .iter()
        .chain(&finals)
        .map(|(_, v)| v.chars().count())
        .fold(CELL_WIDTH, usize::max);

    let mut lines = Vec::with_capacity(intermediate.len() + finals.len() + 5);
    lines.push(border('┌', '┬', '┐', width));
    lines.push(format!("│ {:<width$} │ {:<width$} │", "Intermediate Values", "Results"));
    lines.push(border('├', '┼', '┤', width));
    lines.extend(intermediate.iter().map(|(label, v)| row(label, v, width)));
    lines.push(border('├', '┼', '┤', width));
    lines.extend(finals.iter().map(|(label, v)| row(label, v, width)));
    lines.push(border('└', '┴', '┘', width));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Writes the table to stdout.
pub fn print_table(pass: &ForwardPass) {
    print!("{}", render_table(pass));
}
