//! kubectl-graph - a kubectl plugin that renders Fluid datasets and their
//! dependent resources as a graph

use clap::Parser;
use kubectl_graph::cli::{self, Cli};

#[tokio::main]
async fn main() {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        // Help and version go to stdout and exit 0; real parse errors exit 1
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    cli::init_logging(args.debug);

    if let Err(err) = cli::run(args).await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
