// Runs the worked 2-2-2 example: prints the forward-pass table, then opens
// the network diagram and tanh plot once.
use tanh_forward::{build_figure, print_table, viz, ForwardPass, NetworkParams};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let params = NetworkParams::default();
    let pass = ForwardPass::compute(&params);
    tracing::info!(o1 = pass.o1, o2 = pass.o2, "forward pass done");

    print_table(&pass);

    let plot = build_figure(&params, &pass);
    viz::show(&plot);
}
