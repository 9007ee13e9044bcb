use serde::Serialize;

use crate::form::FormData;

pub const AUDIO_TRANSCRIBE: &str = "audio.transcribe";

/// Client event asking the backend to transcribe one chunk of audio.
#[derive(Clone, Debug, Serialize)]
pub struct TranscribeEvent {
    #[serde(rename = "type")]
    kind: &'static str,
    item: TranscribeItem,
}

#[derive(Clone, Debug, Serialize)]
pub struct TranscribeItem {
    pub file: FormData,
    /// 1-based.
    pub chunk_number: u64,
    pub total_chunks: u64,
}

impl TranscribeEvent {
    pub fn new(file: FormData, chunk_number: u64, total_chunks: u64) -> Self {
        debug_assert!(chunk_number >= 1 && chunk_number <= total_chunks);
        Self {
            kind: AUDIO_TRANSCRIBE,
            item: TranscribeItem {
                file,
                chunk_number,
                total_chunks,
            },
        }
    }

    pub fn kind(&self) -> &str {
        self.kind
    }

    pub fn item(&self) -> &TranscribeItem {
        &self.item
    }

    pub fn into_item(self) -> TranscribeItem {
        self.item
    }
}

/// `chunk_<n>_<original name>`
pub fn chunk_filename(chunk_number: u64, original: &str) -> String {
    format!("chunk_{chunk_number}_{original}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape() {
        let mut form = FormData::new();
        form.append("file", b"abc".to_vec(), chunk_filename(2, "talk.mp3"), "audio/mpeg");
        let ev = TranscribeEvent::new(form, 2, 3);

        let v = serde_json::to_value(&ev).unwrap();
        assert_eq!(v["type"], "audio.transcribe");
        assert_eq!(v["item"]["chunk_number"], 2);
        assert_eq!(v["item"]["total_chunks"], 3);
        assert_eq!(v["item"]["file"]["field"], "file");
        assert_eq!(v["item"]["file"]["filename"], "chunk_2_talk.mp3");
        assert_eq!(v["item"]["file"]["size"], 3);
        assert_eq!(
            v["item"]["file"]["blake3"],
            blake3::hash(b"abc").to_hex().as_str()
        );
    }
}
