//! Count-up counter
//!
//! Animates a number from zero to its end value in a fixed number of frames,
//! the way the About section's statistics roll up the first time they are
//! seen.

use std::time::Duration;

use crate::scope::{TimerId, TimerScope};

/// Default number of frames to reach the end value
pub const DEFAULT_FRAMES: u32 = 60;
/// Default frame interval (~60 fps)
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug)]
pub struct CountUp {
    end: u32,
    value: f64,
    increment: f64,
    frame_interval: Duration,
    timers: TimerScope,
    frame: Option<TimerId>,
    started: bool,
}

impl CountUp {
    pub fn new(end: u32) -> Self {
        Self::with_frames(end, DEFAULT_FRAMES, DEFAULT_FRAME_INTERVAL)
    }

    pub fn with_frames(end: u32, frames: u32, frame_interval: Duration) -> Self {
        Self {
            end,
            value: 0.0,
            increment: f64::from(end) / f64::from(frames.max(1)),
            frame_interval,
            timers: TimerScope::new(),
            frame: None,
            started: false,
        }
    }

    /// Start counting. Only the first call has an effect.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.frame = Some(self.timers.set_interval(self.frame_interval));
    }

    pub fn advance(&mut self, dt: Duration) -> u32 {
        let deadline = self.timers.elapsed() + dt;
        while let Some(id) = self.timers.poll_until(deadline) {
            if self.frame == Some(id) {
                self.value += self.increment;
                if self.value >= f64::from(self.end) {
                    self.value = f64::from(self.end);
                    self.timers.clear(id);
                    self.frame = None;
                }
            }
        }
        self.timers.finish_at(deadline);
        self.displayed()
    }

    /// Value to show: floored while counting, exactly `end` once done
    pub fn displayed(&self) -> u32 {
        self.value.floor() as u32
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_finished(&self) -> bool {
        self.started && self.frame.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_does_not_move_before_start() {
        let mut counter = CountUp::new(15);
        assert_eq!(counter.advance(Duration::from_secs(5)), 0);
        assert!(!counter.is_finished());
    }

    #[test]
    fn test_reaches_exact_end() {
        let mut counter = CountUp::new(15);
        counter.start();

        let mut last = 0;
        for _ in 0..100 {
            let shown = counter.advance(Duration::from_millis(16));
            assert!(shown >= last);
            assert!(shown <= 15);
            last = shown;
        }
        assert_eq!(last, 15);
        assert!(counter.is_finished());
    }

    #[test]
    fn test_start_only_once() {
        let mut counter = CountUp::with_frames(10, 10, Duration::from_millis(10));
        counter.start();
        counter.advance(Duration::from_millis(50));
        counter.start();
        assert_eq!(counter.displayed(), 5);
    }

    #[test]
    fn test_zero_end_finishes_on_first_frame() {
        let mut counter = CountUp::new(0);
        counter.start();
        assert_eq!(counter.advance(DEFAULT_FRAME_INTERVAL), 0);
        assert!(counter.is_finished());
    }
}
