use std::io::Stdout;
use std::path::{Path, PathBuf};

use chunkcast_core::error::{CastError, Result};
use chunkcast_core::event::TranscribeEvent;
use chunkcast_core::payload::select::{Backend, collect_inputs, open_payload};
use chunkcast_core::sink::jsonl::JsonLinesSink;
use chunkcast_core::sink::spool::{SpoolSink, verify_spool};
use chunkcast_core::stats::SessionStats;
use chunkcast_core::util::size::parse_size;
use chunkcast_core::{EventSink, Outcome, UploadOptions, Uploader, plan};
use tracing::{error, info, warn};

use crate::presentation::progress::BarProgress;

/// Where `upload` delivers events.
enum CliSink {
    Stdout(JsonLinesSink<Stdout>),
    Spool(SpoolSink),
}

impl EventSink for CliSink {
    fn send(&mut self, event: TranscribeEvent) -> Result<()> {
        match self {
            CliSink::Stdout(s) => s.send(event),
            CliSink::Spool(s) => s.send(event),
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self {
            CliSink::Stdout(s) => s.flush(),
            CliSink::Spool(s) => s.flush(),
        }
    }
}

fn options_from_args(
    config: Option<PathBuf>,
    max_chunk_size: Option<String>,
    all_files: bool,
) -> Result<UploadOptions> {
    let mut opts = match config {
        Some(path) => UploadOptions::from_file(&path)?,
        None => UploadOptions::default(),
    };
    if let Some(s) = max_chunk_size {
        opts.max_chunk_size = parse_size(&s)?;
    }
    if all_files {
        opts.audio_only = false;
    }
    opts.validate()?;
    Ok(opts)
}

pub fn handle_plan(file: PathBuf, max_chunk_size: Option<String>) -> Result<()> {
    let opts = options_from_args(None, max_chunk_size, false)?;
    let payload = open_payload(Backend::Fs, &file)?;
    let rows = plan(payload.size(), opts.effective_max_chunk_size())?;
    if rows.is_empty() {
        eprintln!("{}: empty file, nothing to send", payload.name());
        return Ok(());
    }
    for r in rows {
        println!(
            "#{:<5} off={:<12} len={:<10} pct={}%",
            r.ordinal, r.file_off, r.len, r.progress
        );
    }
    Ok(())
}

pub fn handle_upload(
    inputs: Vec<PathBuf>,
    out: Option<PathBuf>,
    config: Option<PathBuf>,
    max_chunk_size: Option<String>,
    all_files: bool,
    no_progress: bool,
    deterministic: bool,
) -> Result<()> {
    let opts = options_from_args(config, max_chunk_size, all_files)?;
    let refs: Vec<&Path> = inputs.iter().map(|p| p.as_path()).collect();
    let files = collect_inputs(&refs, opts.audio_only)?;
    if files.is_empty() {
        warn!("no audio files selected");
        return Ok(());
    }

    let sink = match out {
        Some(dir) => CliSink::Spool(SpoolSink::create(&dir)?.deterministic(deterministic)),
        None => CliSink::Stdout(JsonLinesSink::new(std::io::stdout())),
    };
    let mut uploader = Uploader::new(sink, opts);
    let mut stats = SessionStats::default();

    for path in &files {
        let outcome = match open_payload(Backend::Fs, path) {
            Ok(payload) => {
                let mut bar = BarProgress::new(payload.name(), !no_progress);
                uploader.upload(Some(&*payload), &mut bar)
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "cannot open file");
                Outcome::Failed(e)
            }
        };
        stats.record(&outcome);
    }

    info!(
        completed = stats.completed,
        failed = stats.failed,
        skipped = stats.skipped,
        chunks = stats.chunks,
        bytes = stats.bytes,
        "done"
    );
    if stats.failed > 0 {
        return Err(CastError::Upload(format!(
            "{} of {} files failed",
            stats.failed, stats.selected
        )));
    }
    Ok(())
}

pub fn handle_verify(dir: PathBuf) -> Result<()> {
    let n = verify_spool(&dir)?;
    eprintln!("verify: OK ({n} chunks)");
    Ok(())
}
