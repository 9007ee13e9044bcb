use serde::Serialize;

use crate::session::Outcome;

/// Totals over a run of sessions.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SessionStats {
    pub selected: u64,
    pub completed: u64,
    pub failed: u64,
    pub skipped: u64,
    pub chunks: u64,
    pub bytes: u64,
}

impl SessionStats {
    pub fn record(&mut self, outcome: &Outcome) {
        self.selected += 1;
        match outcome {
            Outcome::Completed { chunks, bytes } => {
                self.completed += 1;
                self.chunks += chunks;
                self.bytes += bytes;
            }
            Outcome::Failed(_) => self.failed += 1,
            Outcome::NoSelection | Outcome::Empty => self.skipped += 1,
        }
    }
}
