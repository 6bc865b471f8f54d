mod batch;
mod cli;
mod config;
mod connector;
mod credential;
mod error;
mod model;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("YTCONNECT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("run") => cli::handle_run(&args[1..]).await,
        Some("describe") => cli::handle_describe(),
        Some("test") => cli::handle_test().await,
        None | Some("help") | Some("--help") | Some("-h") => {
            cli::print_help();
            Ok(())
        }
        Some(other) => {
            cli::print_help();
            anyhow::bail!("Unknown command: {other}")
        }
    }
}
