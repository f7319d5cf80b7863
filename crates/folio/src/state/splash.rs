//! Splash Screen State

use std::time::Duration;

use folio_motion::{BootFrame, PROGRESS_FULL};

/// Cursor blink half-period
pub const CURSOR_BLINK: Duration = Duration::from_millis(500);

/// Splash screen state, mirrored from the boot sequence
#[derive(Debug, Clone, Default)]
pub struct SplashState {
    pub revealed: String,
    pub progress: f64,
    pub typing_done: bool,
    pub completed: bool,
    /// Time spent on the splash screen, drives the cursor blink
    pub elapsed: Duration,
}

impl SplashState {
    pub fn apply_frame(&mut self, frame: &BootFrame) {
        self.revealed.clone_from(&frame.revealed);
        self.progress = frame.progress;
        self.typing_done = frame.typing_done;
        self.completed = frame.completed;
    }

    /// Whole-number percentage shown under the bar
    pub fn percent(&self) -> u8 {
        self.progress.clamp(0.0, PROGRESS_FULL).floor() as u8
    }

    /// Bar fill ratio for the gauge widget
    pub fn ratio(&self) -> f64 {
        (self.progress / PROGRESS_FULL).clamp(0.0, 1.0)
    }

    pub fn cursor_visible(&self) -> bool {
        (self.elapsed.as_millis() / CURSOR_BLINK.as_millis()) % 2 == 0
    }
}
