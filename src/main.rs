use clap::Parser;
use giftflow::cli::args::Args;
use giftflow::graph::graph::build_graph;
use giftflow::report::summary::render;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let graph = match args.participant_input().and_then(|input| {
        info!(?input, "building gift network");
        build_graph(&input)
    }) {
        Ok(graph) => graph,
        Err(err) if err.is_user_error() => {
            error!(%err, "cannot build gift network");
            return ExitCode::from(2);
        }
        Err(err) => {
            error!(%err, "gift network is corrupt");
            return ExitCode::FAILURE;
        }
    };

    print!("{}", render(&graph, args.edges));
    ExitCode::SUCCESS
}
