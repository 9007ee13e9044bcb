use crate::error::Result;
use crate::event::TranscribeEvent;

pub mod jsonl;
pub mod spool;

/// Receiver of transcription events. Delivery is fire-and-forget from the
/// emitter's point of view: `Ok` only means the event was handed over.
pub trait EventSink {
    fn send(&mut self, event: TranscribeEvent) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<F> EventSink for F
where
    F: FnMut(TranscribeEvent) -> Result<()>,
{
    fn send(&mut self, event: TranscribeEvent) -> Result<()> {
        self(event)
    }
}
