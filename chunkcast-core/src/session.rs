use tracing::{debug, error, info, warn};

use crate::chunking::fixed::split;
use crate::domain::UploadState;
use crate::emitter::Emitter;
use crate::error::{CastError, Result};
use crate::options::UploadOptions;
use crate::payload::FilePayload;
use crate::payload::select::accepts;
use crate::progress::{ProgressListener, ProgressTracker};
use crate::sink::EventSink;

/// How one selection ended.
#[derive(Debug)]
pub enum Outcome {
    /// Nothing (acceptable) was selected; state untouched.
    NoSelection,
    /// Zero-byte payload; nothing to send, state untouched.
    Empty,
    Completed { chunks: u64, bytes: u64 },
    /// Stopped at the first failing chunk; later chunks were not sent.
    Failed(CastError),
}

impl Outcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

/// Owns the sink and the upload state. Sessions take `&mut self`, so a second
/// upload cannot start while one is in flight.
pub struct Uploader<S: EventSink> {
    sink: S,
    opts: UploadOptions,
    state: UploadState,
}

impl<S: EventSink> Uploader<S> {
    pub fn new(sink: S, opts: UploadOptions) -> Self {
        Self {
            sink,
            opts,
            state: UploadState::default(),
        }
    }

    pub fn state(&self) -> UploadState {
        self.state
    }

    pub fn options(&self) -> &UploadOptions {
        &self.opts
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Run one session for a file selection. Errors never escape: they are
    /// logged, the state is reset and the outcome says `Failed`.
    pub fn upload(
        &mut self,
        selection: Option<&dyn FilePayload>,
        listener: &mut dyn ProgressListener,
    ) -> Outcome {
        let Some(payload) = selection else {
            debug!("no file selected");
            return Outcome::NoSelection;
        };
        if self.opts.audio_only && !accepts(payload.name()) {
            warn!(name = payload.name(), "not an audio file, ignoring selection");
            return Outcome::NoSelection;
        }
        if payload.size() == 0 {
            info!(name = payload.name(), "empty file, nothing to send");
            return Outcome::Empty;
        }

        let max = self.opts.effective_max_chunk_size();
        let mut tracker = ProgressTracker::new(&mut self.state, listener);
        tracker.start();
        let res = run(&mut self.sink, &self.opts.field_name, payload, max, &mut tracker);
        tracker.end();

        match res {
            Ok((chunks, bytes)) => {
                info!(name = payload.name(), chunks, bytes, "upload complete");
                Outcome::Completed { chunks, bytes }
            }
            Err(e) => {
                error!(name = payload.name(), error = %e, "error processing audio file");
                Outcome::Failed(e)
            }
        }
    }
}

fn run<S: EventSink, L: ProgressListener + ?Sized>(
    sink: &mut S,
    field_name: &str,
    payload: &dyn FilePayload,
    max_chunk_size: u64,
    tracker: &mut ProgressTracker<'_, L>,
) -> Result<(u64, u64)> {
    let chunks = split(payload.size(), max_chunk_size)?;
    info!(
        name = payload.name(),
        size = payload.size(),
        chunks = chunks.len(),
        "uploading"
    );
    let bytes = Emitter::new(sink, field_name)
        .emit_all(payload, &chunks, |n, total| tracker.step(n, total))?;
    sink.flush()?;
    Ok((chunks.len() as u64, bytes))
}
