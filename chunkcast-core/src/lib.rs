#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod options;

pub mod util {
    pub mod hash_forward;
    pub mod size;
}

pub mod chunking {
    pub mod fixed;
}

pub mod payload;

pub mod form;

pub mod event;

pub mod sink;

pub mod emitter;
pub mod progress;
pub mod session;
pub mod stats;

// Re-exports: stable API surface
pub use chunking::fixed::{Chunk, plan, split};
pub use domain::{ChunkRow, UploadState};
pub use event::TranscribeEvent;
pub use options::UploadOptions;
pub use payload::{FilePayload, MemoryPayload};
pub use session::{Outcome, Uploader};
pub use sink::EventSink;
