// chunkcast_core/src/domain.rs
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct ChunkRow {
    pub ordinal: u64,
    pub file_off: u64,
    pub len: u64,
    /// Upload progress (0..=100) once this chunk has been sent.
    pub progress: u8,
}

/// Caller-owned UI state for one upload session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UploadState {
    pub is_uploading: bool,
    /// 0..=100
    pub progress: u8,
}
