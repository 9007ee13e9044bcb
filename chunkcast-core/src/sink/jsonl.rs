use std::io::Write;

use super::EventSink;
use crate::error::Result;
use crate::event::TranscribeEvent;

/// Writes each event as one JSON line; the form is summarized, not embedded.
pub struct JsonLinesSink<W: Write> {
    w: W,
    n: u64,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(w: W) -> Self {
        Self { w, n: 0 }
    }

    pub fn written(&self) -> u64 {
        self.n
    }

    pub fn into_inner(self) -> W {
        self.w
    }
}

impl<W: Write> EventSink for JsonLinesSink<W> {
    fn send(&mut self, event: TranscribeEvent) -> Result<()> {
        serde_json::to_writer(&mut self.w, &event)?;
        self.w.write_all(b"\n")?;
        self.n += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(self.w.flush()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormData;

    #[test]
    fn one_line_per_event() {
        let mut sink = JsonLinesSink::new(Vec::new());
        for n in 1..=2 {
            let mut form = FormData::new();
            form.append("file", vec![n as u8; 4], format!("chunk_{n}_x.ogg"), "audio/ogg");
            sink.send(TranscribeEvent::new(form, n, 2)).unwrap();
        }
        assert_eq!(sink.written(), 2);
        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["item"]["chunk_number"], 2);
        assert_eq!(lines[1]["item"]["file"]["filename"], "chunk_2_x.ogg");
    }
}
