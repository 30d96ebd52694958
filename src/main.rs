use clap::Parser;
use tracing_subscriber::EnvFilter;

use octocard::cli::{run, Args};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Quiet unless RUST_LOG asks for loader/fetch diagnostics; the output
    // goes to stderr so it never lands inside the alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    run(args).await
}
