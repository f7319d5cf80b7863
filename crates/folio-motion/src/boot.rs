//! Boot sequence controller
//!
//! Drives the splash screen: a typewriter that reveals a fixed name one
//! character at a time, and an independent progress bar that fills by random
//! increments. When the bar reaches 100 the controller waits a settle delay and
//! then invokes the completion callback exactly once.
//!
//! Typing and progress run on separate intervals; nothing here assumes which
//! of the two finishes first.

use std::fmt;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::scope::{TimerId, TimerScope};

/// Progress value at which the bar is considered full
pub const PROGRESS_FULL: f64 = 100.0;

/// Callback invoked once the boot sequence has settled
pub type OnComplete = Box<dyn FnOnce() + Send>;

/// Timing knobs for the boot sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BootConfig {
    /// Interval between two revealed characters
    pub typing_interval: Duration,
    /// Interval between two progress increments
    pub progress_interval: Duration,
    /// Delay between a full progress bar and the completion callback
    pub settle_delay: Duration,
    /// Lower bound (inclusive) of a progress increment
    pub min_increment: f64,
    /// Upper bound (exclusive) of a progress increment
    pub max_increment: f64,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            typing_interval: Duration::from_millis(100),
            progress_interval: Duration::from_millis(50),
            settle_delay: Duration::from_millis(600),
            min_increment: 1.0,
            max_increment: 4.0,
        }
    }
}

/// Snapshot of the boot sequence for the view layer
#[derive(Debug, Clone, PartialEq)]
pub struct BootFrame {
    pub revealed: String,
    pub progress: f64,
    pub typing_done: bool,
    pub completed: bool,
}

impl BootFrame {
    /// Whole-number percentage shown under the progress bar
    pub fn percent(&self) -> u8 {
        self.progress.clamp(0.0, PROGRESS_FULL).floor() as u8
    }
}

/// Splash screen controller: typewriter + progress bar + completion callback
pub struct BootSequence<R = StdRng> {
    target: String,
    target_len: usize,
    typed_len: usize,
    progress: f64,
    config: BootConfig,
    rng: R,
    timers: TimerScope,
    typing_tick: Option<TimerId>,
    progress_tick: Option<TimerId>,
    settle: Option<TimerId>,
    on_complete: Option<OnComplete>,
    completed: bool,
}

impl BootSequence<StdRng> {
    /// Start a boot sequence with default timings and an OS-seeded RNG
    pub fn start(target: impl Into<String>, on_complete: impl FnOnce() + Send + 'static) -> Self {
        Self::start_with(
            target,
            BootConfig::default(),
            StdRng::from_os_rng(),
            on_complete,
        )
    }
}

impl<R: Rng> BootSequence<R> {
    /// Start a boot sequence with explicit timings and random source
    pub fn start_with(
        target: impl Into<String>,
        config: BootConfig,
        rng: R,
        on_complete: impl FnOnce() + Send + 'static,
    ) -> Self {
        let target = target.into();
        let target_len = target.chars().count();
        let mut timers = TimerScope::new();
        let typing_tick = Some(timers.set_interval(config.typing_interval));
        let progress_tick = Some(timers.set_interval(config.progress_interval));

        log::debug!(
            "BootSequence: started for {:?} ({} chars)",
            target,
            target_len
        );

        Self {
            target,
            target_len,
            typed_len: 0,
            progress: 0.0,
            config,
            rng,
            timers,
            typing_tick,
            progress_tick,
            settle: None,
            on_complete: Some(Box::new(on_complete)),
            completed: false,
        }
    }

    /// Advance the virtual clock by `dt`, firing every tick that falls due
    pub fn advance(&mut self, dt: Duration) -> BootFrame {
        let deadline = self.timers.elapsed() + dt;
        while let Some(id) = self.timers.poll_until(deadline) {
            self.fire(id);
        }
        self.timers.finish_at(deadline);
        self.frame()
    }

    fn fire(&mut self, id: TimerId) {
        if self.typing_tick == Some(id) {
            self.on_typing_tick(id);
        } else if self.progress_tick == Some(id) {
            self.on_progress_tick(id);
        } else if self.settle == Some(id) {
            self.on_settled();
        }
    }

    fn on_typing_tick(&mut self, id: TimerId) {
        if self.typed_len < self.target_len {
            self.typed_len += 1;
        } else {
            self.timers.clear(id);
            self.typing_tick = None;
        }
    }

    fn on_progress_tick(&mut self, id: TimerId) {
        let next = self.progress + self.next_increment();
        if next >= PROGRESS_FULL {
            self.progress = PROGRESS_FULL;
            self.timers.clear(id);
            self.progress_tick = None;
            self.settle = Some(self.timers.set_timeout(self.config.settle_delay));
            log::debug!(
                "BootSequence: progress full at {:?}, settling",
                self.timers.elapsed()
            );
        } else {
            self.progress = next;
        }
    }

    fn on_settled(&mut self) {
        self.settle = None;
        self.completed = true;
        // Completion ends the sequence, whatever the typewriter was doing
        self.release_timers();
        if let Some(on_complete) = self.on_complete.take() {
            log::debug!("BootSequence: completed at {:?}", self.timers.elapsed());
            on_complete();
        }
    }

    fn next_increment(&mut self) -> f64 {
        let min = self.config.min_increment.max(f64::MIN_POSITIVE);
        let max = self.config.max_increment;
        if max > min {
            self.rng.random_range(min..max)
        } else {
            min
        }
    }
}

impl<R> BootSequence<R> {
    /// Tear the sequence down. The completion callback will never run.
    ///
    /// Safe to call any number of times, before or after completion.
    pub fn cancel(&mut self) {
        if self.on_complete.take().is_some() {
            log::debug!("BootSequence: cancelled before completion");
        }
        self.release_timers();
    }

    fn release_timers(&mut self) {
        self.timers.clear_all();
        self.typing_tick = None;
        self.progress_tick = None;
        self.settle = None;
    }

    /// The part of the target text revealed so far
    pub fn revealed(&self) -> &str {
        match self.target.char_indices().nth(self.typed_len) {
            Some((end, _)) => &self.target[..end],
            None => &self.target,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Number of characters revealed so far
    pub fn typed_len(&self) -> usize {
        self.typed_len
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// `true` while any tick or the settle delay is still pending
    pub fn is_running(&self) -> bool {
        !self.timers.is_idle()
    }

    pub fn elapsed(&self) -> Duration {
        self.timers.elapsed()
    }

    pub fn frame(&self) -> BootFrame {
        BootFrame {
            revealed: self.revealed().to_string(),
            progress: self.progress,
            typing_done: self.typed_len == self.target_len,
            completed: self.completed,
        }
    }
}

impl<R> Drop for BootSequence<R> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<R> fmt::Debug for BootSequence<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootSequence")
            .field("target", &self.target)
            .field("typed_len", &self.typed_len)
            .field("progress", &self.progress)
            .field("completed", &self.completed)
            .field("pending_timers", &self.timers.pending())
            .finish()
    }
}
