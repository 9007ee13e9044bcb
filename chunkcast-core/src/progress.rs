use crate::domain::UploadState;

/// Observer of upload state transitions.
pub trait ProgressListener {
    fn on_change(&mut self, state: UploadState);
}

impl<F> ProgressListener for F
where
    F: FnMut(UploadState),
{
    fn on_change(&mut self, state: UploadState) {
        self(state)
    }
}

/// Listener that ignores every transition.
pub struct Silent;

impl ProgressListener for Silent {
    fn on_change(&mut self, _state: UploadState) {}
}

/// `round(100 * done / total)`, half rounding up. `total` must be non-zero.
pub fn percent(done: u64, total: u64) -> u8 {
    debug_assert!(total > 0 && done <= total);
    let done = done as u128;
    let total = total as u128;
    ((200 * done + total) / (2 * total)) as u8
}

/// Drives the caller's `UploadState` through Start, Step and End.
pub struct ProgressTracker<'a, L: ProgressListener + ?Sized> {
    state: &'a mut UploadState,
    listener: &'a mut L,
}

impl<'a, L: ProgressListener + ?Sized> ProgressTracker<'a, L> {
    pub fn new(state: &'a mut UploadState, listener: &'a mut L) -> Self {
        Self { state, listener }
    }

    pub fn start(&mut self) {
        *self.state = UploadState {
            is_uploading: true,
            progress: 0,
        };
        self.listener.on_change(*self.state);
    }

    pub fn step(&mut self, done: u64, total: u64) {
        self.state.progress = percent(done, total);
        self.listener.on_change(*self.state);
    }

    pub fn end(&mut self) {
        *self.state = UploadState::default();
        self.listener.on_change(*self.state);
    }

    pub fn state(&self) -> UploadState {
        *self.state
    }
}
