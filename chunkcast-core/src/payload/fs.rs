use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{FilePayload, check_range};
use crate::error::{CastError, Result};

/// Payload backed by a file on disk. The handle is shared behind a mutex so
/// range reads can seek without reopening the file.
pub struct FsPayload {
    path: PathBuf,
    name: String,
    size: u64,
    f: Mutex<File>,
}

impl FsPayload {
    pub fn open(path: &Path) -> Result<Self> {
        let f = File::open(path)?;
        let size = f.metadata()?.len();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        Ok(Self {
            path: path.to_path_buf(),
            name,
            size,
            f: Mutex::new(f),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FilePayload for FsPayload {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn read_range(&self, start: u64, len: u64) -> Result<Vec<u8>> {
        check_range(self.size, start, len)?;
        let mut f = self
            .f
            .lock()
            .map_err(|e| CastError::Io(std::io::Error::other(e.to_string())))?;
        f.seek(SeekFrom::Start(start))?;
        let mut buf = vec![0u8; len as usize];
        f.read_exact(&mut buf)?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_ranges_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memo.m4a");
        let mut f = File::create(&path).unwrap();
        f.write_all(b"abcdefghij").unwrap();
        drop(f);

        let p = FsPayload::open(&path).unwrap();
        assert_eq!(p.name(), "memo.m4a");
        assert_eq!(p.size(), 10);
        assert_eq!(p.read_range(7, 3).unwrap(), b"hij");
        assert_eq!(p.read_range(0, 2).unwrap(), b"ab");
        assert!(p.content_type().starts_with("audio/"));
        assert!(p.read_range(8, 5).is_err());
    }
}
