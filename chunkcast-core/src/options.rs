use crate::error::{CastError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 20 MiB, the largest chunk a transcription backend accepts in one event.
pub const DEFAULT_MAX_CHUNK_SIZE: u64 = 20 * 1024 * 1024;

pub const DEFAULT_FIELD_NAME: &str = "file";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadOptions {
    /// Upper bound for one chunk in bytes; 0 means the default.
    pub max_chunk_size: u64,
    /// Multipart field name carrying the chunk bytes.
    pub field_name: String,
    /// Treat non-audio selections as "nothing selected".
    pub audio_only: bool,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
            field_name: DEFAULT_FIELD_NAME.to_string(),
            audio_only: true,
        }
    }
}

impl UploadOptions {
    /// Load options from a JSON file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let opts: UploadOptions = serde_json::from_str(&raw)?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn effective_max_chunk_size(&self) -> u64 {
        if self.max_chunk_size == 0 {
            DEFAULT_MAX_CHUNK_SIZE
        } else {
            self.max_chunk_size
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.field_name.is_empty() {
            return Err(CastError::Config("field_name must not be empty".into()));
        }
        if self.field_name.contains('"') || self.field_name.contains(['\r', '\n']) {
            return Err(CastError::Config(format!(
                "field_name contains forbidden characters: {:?}",
                self.field_name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn zero_chunk_size_falls_back_to_default() {
        let opts = UploadOptions {
            max_chunk_size: 0,
            ..Default::default()
        };
        assert_eq!(opts.effective_max_chunk_size(), DEFAULT_MAX_CHUNK_SIZE);
    }

    #[test]
    fn partial_config_file_keeps_defaults() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{ "max_chunk_size": 1024 }}"#).unwrap();
        let opts = UploadOptions::from_file(f.path()).unwrap();
        assert_eq!(opts.max_chunk_size, 1024);
        assert_eq!(opts.field_name, "file");
        assert!(opts.audio_only);
    }

    #[test]
    fn empty_field_name_is_rejected() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{ "field_name": "" }}"#).unwrap();
        let err = UploadOptions::from_file(f.path()).unwrap_err();
        assert!(matches!(err, CastError::Config(_)));
    }
}
