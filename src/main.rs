//! CLI entry point for the fixed-size Life simulation

use clap::Parser;
use lifegrid::io::cli::{Cli, Runner};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> lifegrid::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lifegrid=warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let runner = Runner::new(cli);
    runner.run().map(|_| ())
}
