pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use chunkcast_core::error::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so JSON lines on stdout stay machine-readable.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env("CHUNKCAST_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Plan {
            file,
            max_chunk_size,
        } => handlers::handle_plan(file, max_chunk_size),
        Commands::Upload {
            inputs,
            out,
            config,
            max_chunk_size,
            all_files,
            no_progress,
            deterministic,
        } => handlers::handle_upload(
            inputs,
            out,
            config,
            max_chunk_size,
            all_files,
            no_progress,
            deterministic,
        ),
        Commands::Verify { dir } => handlers::handle_verify(dir),
    }
}
