use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "chunkcast: send audio files as chunked transcription events", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the chunk map for one file
    Plan {
        file: PathBuf,
        /// largest chunk, e.g. 20MiB, 512KiB or plain bytes
        #[arg(long = "max-chunk-size")]
        max_chunk_size: Option<String>,
    },

    /// Upload audio files as `audio.transcribe` events, one session per file
    Upload {
        /// files or directories (walked recursively)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// spool directory; events go to stdout as JSON lines when omitted
        #[arg(long)]
        out: Option<PathBuf>,
        /// JSON file with upload options
        #[arg(long)]
        config: Option<PathBuf>,
        /// largest chunk, e.g. 20MiB, 512KiB or plain bytes
        #[arg(long = "max-chunk-size")]
        max_chunk_size: Option<String>,
        /// accept files that are not audio
        #[arg(long)]
        all_files: bool,
        /// hide the progress bar
        #[arg(long)]
        no_progress: bool,
        /// zero spool timestamps
        #[arg(long)]
        deterministic: bool,
    },

    /// Check spooled bodies against the spool index
    Verify { dir: PathBuf },
}
