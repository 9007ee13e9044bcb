use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::FilePayload;
use super::fs::FsPayload;
use super::mime;
use crate::error::Result;

pub enum Backend {
    Fs,
}

pub fn open_payload(backend: Backend, path: &Path) -> Result<Box<dyn FilePayload>> {
    match backend {
        Backend::Fs => Ok(Box::new(FsPayload::open(path)?)),
    }
}

/// Expand input paths into the ordered list of files to upload. Directories
/// are walked recursively in name order; with `audio_only`, files whose
/// extension is not an audio type are skipped.
pub fn collect_inputs(inputs: &[&Path], audio_only: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for root in inputs {
        for e in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            let e = e.map_err(std::io::Error::other)?;
            if !e.file_type().is_file() {
                continue;
            }
            let name = e.file_name().to_string_lossy();
            if audio_only && !accepts(&name) {
                warn!(path = %e.path().display(), "skipping non-audio file");
                continue;
            }
            debug!(path = %e.path().display(), "selected");
            files.push(e.into_path());
        }
    }
    Ok(files)
}

/// Mirrors an `accept="audio/*"` picker filter.
pub fn accepts(name: &str) -> bool {
    mime::is_audio_name(name)
}
