use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::debug;

use super::EventSink;
use crate::error::{CastError, Result};
use crate::event::TranscribeEvent;
use crate::util::hash_forward::HashingForward;

pub const INDEX_FILE: &str = "events.jsonl";

/// One line of the spool index.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpoolEntry {
    pub chunk_number: u64,
    pub total_chunks: u64,
    pub filename: String,
    /// Body file, relative to the spool directory.
    pub part: String,
    /// `multipart/form-data; boundary=...` of the stored body.
    pub content_type: String,
    pub body_len: u64,
    pub blake3: String,
    pub created: i64,
}

/// Stores every event's multipart body in a directory for a later transport
/// to pick up, indexed by `events.jsonl`. Part files are numbered by their
/// index line, so repeated names and repeated runs never overwrite a body.
pub struct SpoolSink {
    dir: PathBuf,
    index: BufWriter<File>,
    seq: u64,
    deterministic: bool,
}

impl SpoolSink {
    pub fn create(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        let seq = if dir.join(INDEX_FILE).exists() {
            read_index(dir)?.len() as u64
        } else {
            0
        };
        let index = OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(INDEX_FILE))?;
        Ok(Self {
            dir: dir.to_path_buf(),
            index: BufWriter::new(index),
            seq,
            deterministic: false,
        })
    }

    /// Zero the `created` timestamps.
    pub fn deterministic(mut self, on: bool) -> Self {
        self.deterministic = on;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl EventSink for SpoolSink {
    fn send(&mut self, event: TranscribeEvent) -> Result<()> {
        let item = event.into_item();
        let filename = item
            .file
            .parts()
            .first()
            .map(|p| p.filename.clone())
            .ok_or_else(|| CastError::Sink("form has no parts".into()))?;
        let seq = self.seq + 1;
        let part = format!("{seq:06}_{}.part", sanitize(&filename));

        let mut hasher = blake3::Hasher::new();
        let f = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.dir.join(&part))?;
        let mut w = HashingForward::new(BufWriter::new(f), &mut hasher);
        w.write_all(&item.file.encode())?;
        w.flush()?;
        let body_len = w.counted;
        drop(w);

        let entry = SpoolEntry {
            chunk_number: item.chunk_number,
            total_chunks: item.total_chunks,
            filename,
            part,
            content_type: item.file.content_type(),
            body_len,
            blake3: hasher.finalize().to_hex().to_string(),
            created: if self.deterministic {
                0
            } else {
                OffsetDateTime::now_utc().unix_timestamp()
            },
        };
        debug!(part = %entry.part, len = body_len, "spooled chunk");
        serde_json::to_writer(&mut self.index, &entry)?;
        self.index.write_all(b"\n")?;
        // Keep the index in step with the part files.
        self.index.flush()?;
        self.seq = seq;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(self.index.flush()?)
    }
}

// Original names may carry path separators; keep parts inside the spool dir.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c => c,
        })
        .collect()
}

pub fn read_index(dir: &Path) -> Result<Vec<SpoolEntry>> {
    let f = File::open(dir.join(INDEX_FILE))?;
    let mut out = Vec::new();
    for line in BufReader::new(f).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        out.push(serde_json::from_str(&line)?);
    }
    Ok(out)
}

/// Re-hash every spooled body against the index. Returns the number of
/// entries checked.
pub fn verify_spool(dir: &Path) -> Result<usize> {
    let entries = read_index(dir)?;
    for e in &entries {
        let mut f = File::open(dir.join(&e.part))?;
        let mut hasher = blake3::Hasher::new();
        let mut buf = [0u8; 64 * 1024];
        let mut total = 0u64;
        loop {
            let n = f.read(&mut buf)?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
            total += n as u64;
        }
        if total != e.body_len {
            return Err(CastError::Verify(format!(
                "{}: length {} != indexed {}",
                e.part, total, e.body_len
            )));
        }
        let got = hasher.finalize().to_hex().to_string();
        if got != e.blake3 {
            return Err(CastError::Verify(format!("{}: digest mismatch", e.part)));
        }
    }
    Ok(entries.len())
}
