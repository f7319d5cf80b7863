//! Flash message timer
//!
//! A one-shot visibility window, e.g. the "message sent" confirmation under
//! the contact form.

use std::time::Duration;

use crate::scope::{TimerId, TimerScope};

#[derive(Debug, Default)]
pub struct Flash {
    timers: TimerScope,
    hide_at: Option<TimerId>,
}

impl Flash {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the flash for `duration`, restarting any running window
    pub fn show(&mut self, duration: Duration) {
        if let Some(id) = self.hide_at.take() {
            self.timers.clear(id);
        }
        self.hide_at = Some(self.timers.set_timeout(duration));
    }

    pub fn hide(&mut self) {
        self.timers.clear_all();
        self.hide_at = None;
    }

    /// Advance the clock; returns `true` if the flash just disappeared
    pub fn advance(&mut self, dt: Duration) -> bool {
        let deadline = self.timers.elapsed() + dt;
        let mut expired = false;
        while let Some(id) = self.timers.poll_until(deadline) {
            if self.hide_at == Some(id) {
                self.hide_at = None;
                expired = true;
            }
        }
        self.timers.finish_at(deadline);
        expired
    }

    pub fn is_visible(&self) -> bool {
        self.hide_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hides_after_duration() {
        let mut flash = Flash::new();
        flash.show(Duration::from_millis(3000));
        assert!(flash.is_visible());

        assert!(!flash.advance(Duration::from_millis(2999)));
        assert!(flash.is_visible());
        assert!(flash.advance(Duration::from_millis(1)));
        assert!(!flash.is_visible());
    }

    #[test]
    fn test_show_again_restarts_window() {
        let mut flash = Flash::new();
        flash.show(Duration::from_millis(3000));
        flash.advance(Duration::from_millis(2000));

        flash.show(Duration::from_millis(3000));
        flash.advance(Duration::from_millis(2000));
        assert!(flash.is_visible());

        flash.advance(Duration::from_millis(1000));
        assert!(!flash.is_visible());
    }

    #[test]
    fn test_hide_cancels() {
        let mut flash = Flash::new();
        flash.show(Duration::from_millis(100));
        flash.hide();
        assert!(!flash.advance(Duration::from_secs(1)));
    }
}
