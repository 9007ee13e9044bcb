use crate::domain::ChunkRow;
use crate::error::{CastError, Result};
use crate::progress::percent;

/// Half-open byte range `[start, end)` of a payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk {
    pub start: u64,
    pub end: u64,
}

impl Chunk {
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Split `size` bytes into consecutive ranges of at most `max_chunk_size`.
/// An empty payload yields no chunks.
pub fn split(size: u64, max_chunk_size: u64) -> Result<Vec<Chunk>> {
    if max_chunk_size == 0 {
        return Err(CastError::Config("max_chunk_size must be non-zero".into()));
    }
    let mut chunks = Vec::with_capacity(size.div_ceil(max_chunk_size) as usize);
    let mut off = 0u64;
    while off < size {
        let end = off + (size - off).min(max_chunk_size);
        chunks.push(Chunk { start: off, end });
        off = end;
    }
    Ok(chunks)
}

/// Chunk map for display; `progress` is what the upload progress reads once
/// this chunk has been sent.
pub fn plan(size: u64, max_chunk_size: u64) -> Result<Vec<ChunkRow>> {
    let chunks = split(size, max_chunk_size)?;
    let total = chunks.len() as u64;
    Ok(chunks
        .into_iter()
        .enumerate()
        .map(|(i, c)| {
            let ordinal = i as u64 + 1;
            ChunkRow {
                ordinal,
                file_off: c.start,
                len: c.len(),
                progress: percent(ordinal, total),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: u64 = 1024 * 1024;

    #[test]
    fn forty_five_mib_in_twenty_mib_chunks() {
        let sizes: Vec<u64> = split(45 * MIB, 20 * MIB)
            .unwrap()
            .iter()
            .map(Chunk::len)
            .collect();
        assert_eq!(sizes, [20 * MIB, 20 * MIB, 5 * MIB]);
    }

    #[test]
    fn empty_payload_has_no_chunks() {
        assert!(split(0, 20 * MIB).unwrap().is_empty());
        assert!(plan(0, 20 * MIB).unwrap().is_empty());
    }

    #[test]
    fn zero_chunk_size_is_a_config_error() {
        assert!(matches!(split(10, 0), Err(CastError::Config(_))));
        assert!(matches!(plan(10, 0), Err(CastError::Config(_))));
    }

    #[test]
    fn exact_multiple_has_no_tail() {
        let c = split(40, 10).unwrap();
        assert_eq!(c.len(), 4);
        assert!(c.iter().all(|c| c.len() == 10));
    }

    #[test]
    fn ranges_are_contiguous_and_cover_everything() {
        for size in [1u64, 2, 7, 99, 100, 101, 1000] {
            for max in [1u64, 3, 10, 100, 4096] {
                let chunks = split(size, max).unwrap();
                assert_eq!(chunks.len() as u64, size.div_ceil(max));
                let mut off = 0;
                for (i, c) in chunks.iter().enumerate() {
                    assert_eq!(c.start, off);
                    assert!(!c.is_empty());
                    if i + 1 < chunks.len() {
                        assert_eq!(c.len(), max);
                    } else {
                        assert!(c.len() <= max);
                    }
                    off = c.end;
                }
                assert_eq!(off, size);
            }
        }
    }

    #[test]
    fn plan_progress_matches_upload_progress() {
        let rows = plan(45 * MIB, 20 * MIB).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].ordinal, 1);
        assert_eq!(rows[2].file_off, 40 * MIB);
        let progress: Vec<u8> = rows.iter().map(|r| r.progress).collect();
        assert_eq!(progress, [33, 67, 100]);
    }
}
