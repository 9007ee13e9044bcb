use tracing::trace;

use crate::chunking::fixed::Chunk;
use crate::error::Result;
use crate::event::{TranscribeEvent, chunk_filename};
use crate::form::FormData;
use crate::payload::FilePayload;
use crate::sink::EventSink;

/// Turns chunks of a payload into transcription events, in order.
pub struct Emitter<'a, S: EventSink + ?Sized> {
    sink: &'a mut S,
    field_name: &'a str,
}

impl<'a, S: EventSink + ?Sized> Emitter<'a, S> {
    pub fn new(sink: &'a mut S, field_name: &'a str) -> Self {
        Self { sink, field_name }
    }

    /// Send every chunk, stopping at the first failure. `on_sent(n, total)`
    /// runs after chunk `n` has been handed to the sink. Returns bytes sent.
    pub fn emit_all(
        &mut self,
        payload: &dyn FilePayload,
        chunks: &[Chunk],
        mut on_sent: impl FnMut(u64, u64),
    ) -> Result<u64> {
        let total = chunks.len() as u64;
        let content_type = payload.content_type();
        let mut sent = 0u64;
        for (i, chunk) in chunks.iter().enumerate() {
            let n = i as u64 + 1;
            let bytes = payload.read_range(chunk.start, chunk.len())?;

            let mut form = FormData::new();
            form.append(
                self.field_name,
                bytes,
                chunk_filename(n, payload.name()),
                content_type,
            );
            let transcribe = TranscribeEvent::new(form, n, total);

            trace!(chunk = n, total, off = chunk.start, len = chunk.len(), "emit");
            self.sink.send(transcribe)?;
            sent += chunk.len();
            on_sent(n, total);
        }
        Ok(sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunking::fixed::split;
    use crate::payload::MemoryPayload;

    #[test]
    fn events_carry_chunk_bytes_in_order() {
        let payload = MemoryPayload::new("v.wav", (0u8..25).collect());
        let chunks = split(payload.size(), 10).unwrap();
        let mut got = Vec::new();
        let mut sink = |ev: TranscribeEvent| -> Result<()> {
            got.push(ev);
            Ok(())
        };
        let mut ticks = Vec::new();
        let sent = Emitter::new(&mut sink, "file")
            .emit_all(&payload, &chunks, |n, t| ticks.push((n, t)))
            .unwrap();

        assert_eq!(sent, 25);
        assert_eq!(ticks, [(1, 3), (2, 3), (3, 3)]);
        assert_eq!(got.len(), 3);
        let last = got[2].item();
        assert_eq!(last.chunk_number, 3);
        assert_eq!(last.total_chunks, 3);
        let part = last.file.get("file").unwrap();
        assert_eq!(part.filename, "chunk_3_v.wav");
        assert!(part.content_type.starts_with("audio/"));
        assert_eq!(part.bytes, (20u8..25).collect::<Vec<_>>());
    }

    #[test]
    fn custom_field_name() {
        let payload = MemoryPayload::new("v.wav", vec![1, 2, 3]);
        let chunks = split(payload.size(), 10).unwrap();
        let mut fields = Vec::new();
        let mut sink = |ev: TranscribeEvent| -> Result<()> {
            fields.push(ev.item().file.parts()[0].field.clone());
            Ok(())
        };
        Emitter::new(&mut sink, "audio")
            .emit_all(&payload, &chunks, |_, _| {})
            .unwrap();
        assert_eq!(fields, ["audio"]);
    }
}
