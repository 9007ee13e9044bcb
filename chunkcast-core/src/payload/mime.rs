use mime_guess::mime;

pub const OCTET_STREAM: &str = "application/octet-stream";

/// Guess a MIME type from the file extension.
pub fn guess_from_name(name: &str) -> Option<&'static str> {
    mime_guess::from_path(name).first_raw()
}

/// True when the extension's primary MIME type is `audio/*`.
pub fn is_audio_name(name: &str) -> bool {
    mime_guess::from_path(name)
        .first()
        .is_some_and(|m| m.type_() == mime::AUDIO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_types() {
        assert_eq!(guess_from_name("Interview.MP3"), Some("audio/mpeg"));
        assert_eq!(guess_from_name("noext"), None);
        let names = [
            "a.b.flac", "take.wav", "x.ogg", "memo.m4a", "song.wma", "clip.mka", "ring.mid", "a.au",
        ];
        for name in names {
            assert!(is_audio_name(name), "{name}");
        }
    }

    #[test]
    fn non_audio_types() {
        for name in ["report.pdf", "notes.txt", "clip.mp4", "noext"] {
            assert!(!is_audio_name(name), "{name}");
        }
    }
}
