use crate::error::{CastError, Result};

pub mod fs;
pub mod mime;
pub mod select;

/// A read-only blob picked by the user. Bytes are only read when a chunk is
/// emitted, so large files are never held in memory as a whole.
pub trait FilePayload: Send + Sync {
    fn name(&self) -> &str;

    fn size(&self) -> u64;

    /// Read `len` bytes starting at `start`. The range must lie inside the payload.
    fn read_range(&self, start: u64, len: u64) -> Result<Vec<u8>>;

    fn content_type(&self) -> &'static str {
        mime::guess_from_name(self.name()).unwrap_or(mime::OCTET_STREAM)
    }
}

/// Payload held entirely in memory.
#[derive(Clone, Debug)]
pub struct MemoryPayload {
    name: String,
    bytes: Vec<u8>,
}

impl MemoryPayload {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

impl FilePayload for MemoryPayload {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn read_range(&self, start: u64, len: u64) -> Result<Vec<u8>> {
        let end = check_range(self.size(), start, len)?;
        Ok(self.bytes[start as usize..end as usize].to_vec())
    }
}

pub(crate) fn check_range(size: u64, start: u64, len: u64) -> Result<u64> {
    match start.checked_add(len) {
        Some(end) if end <= size => Ok(end),
        _ => Err(CastError::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            format!("range {start}+{len} outside payload of {size} bytes"),
        ))),
    }
}
