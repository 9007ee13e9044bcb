use chunkcast_core::UploadState;
use chunkcast_core::progress::ProgressListener;
use indicatif::{ProgressBar, ProgressStyle};

/// Terminal rendition of the upload state: a bar that exists only while a
/// session is uploading.
pub struct BarProgress {
    label: String,
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl BarProgress {
    pub fn new(label: impl Into<String>, enabled: bool) -> Self {
        Self {
            label: label.into(),
            enabled,
            bar: None,
        }
    }
}

fn new_bar(label: &str) -> ProgressBar {
    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {pos:>3}%")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    bar.set_message(format!("Processing {label}..."));
    bar
}

impl ProgressListener for BarProgress {
    fn on_change(&mut self, state: UploadState) {
        if !self.enabled {
            return;
        }
        if state.is_uploading {
            let bar = self.bar.get_or_insert_with(|| new_bar(&self.label));
            bar.set_position(state.progress as u64);
        } else if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
