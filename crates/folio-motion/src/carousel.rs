//! Infinite carousel driver
//!
//! Moves a strip of tiles leftwards by a fixed step on every tick. After one
//! full cycle (source item count x tile width) the offset snaps back to zero.
//! The snap is invisible only when the strip shows at least three consecutive
//! copies of the source items, so the driver hands out the duplicated sequence
//! itself through [`CarouselDriver::display_items`] and refuses configurations
//! with fewer copies.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::scope::{TimerId, TimerScope};

/// Minimum number of copies of the source items the strip must show
pub const MIN_COPIES: usize = 3;

/// Carousel construction errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CarouselError {
    #[error("carousel needs at least one source item")]
    NoItems,
    #[error("carousel tile width must be greater than zero")]
    ZeroTileWidth,
    #[error("carousel step must be a positive number of pixels, got {0}")]
    InvalidStep(f64),
    #[error("carousel must display at least 3 copies of its items, got {0}")]
    TooFewCopies(usize),
}

/// Timing and geometry of a carousel strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Interval between two ticks
    pub tick_interval: Duration,
    /// Pixels travelled per tick
    pub step_px: f64,
    /// Width of one tile, gap included
    pub tile_width_px: u32,
    /// How many times the source items are repeated on screen
    pub copies: usize,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(20),
            step_px: 1.0,
            tile_width_px: 320,
            copies: MIN_COPIES,
        }
    }
}

impl CarouselConfig {
    fn validate(&self, item_count: usize) -> Result<(), CarouselError> {
        if item_count == 0 {
            return Err(CarouselError::NoItems);
        }
        if self.tile_width_px == 0 {
            return Err(CarouselError::ZeroTileWidth);
        }
        if !(self.step_px.is_finite() && self.step_px > 0.0) {
            return Err(CarouselError::InvalidStep(self.step_px));
        }
        if self.copies < MIN_COPIES {
            return Err(CarouselError::TooFewCopies(self.copies));
        }
        Ok(())
    }
}

/// Auto-scrolling strip over a looped sequence of items
pub struct CarouselDriver<T> {
    items: Vec<T>,
    config: CarouselConfig,
    cycle_length_px: u32,
    offset_px: f64,
    timers: TimerScope,
    interval: Option<TimerId>,
    paused: bool,
}

impl<T> CarouselDriver<T> {
    /// Create a running carousel over `items`
    pub fn new(items: Vec<T>, config: CarouselConfig) -> Result<Self, CarouselError> {
        config.validate(items.len())?;

        let cycle_length_px = u32::try_from(items.len())
            .unwrap_or(u32::MAX)
            .saturating_mul(config.tile_width_px);
        let mut timers = TimerScope::new();
        let interval = Some(timers.set_interval(config.tick_interval));

        log::debug!(
            "CarouselDriver: {} items, cycle of {}px",
            items.len(),
            cycle_length_px
        );

        Ok(Self {
            items,
            config,
            cycle_length_px,
            offset_px: 0.0,
            timers,
            interval,
            paused: false,
        })
    }

    /// Move the strip one step left, wrapping to zero after a full cycle
    pub fn tick(&mut self) {
        let next = self.offset_px - self.config.step_px;
        if next.abs() >= f64::from(self.cycle_length_px) {
            self.offset_px = 0.0;
        } else {
            self.offset_px = next;
        }
    }

    /// Pause or resume the strip.
    ///
    /// Pausing cancels the interval; resuming starts a fresh one a full period
    /// later. Ticks missed while paused are not replayed.
    pub fn set_paused(&mut self, paused: bool) {
        if paused == self.paused {
            return;
        }
        self.paused = paused;

        if paused {
            if let Some(id) = self.interval.take() {
                self.timers.clear(id);
            }
            log::debug!("CarouselDriver: paused at {}px", self.offset_px);
        } else {
            self.interval = Some(self.timers.set_interval(self.config.tick_interval));
            log::debug!("CarouselDriver: resumed at {}px", self.offset_px);
        }
    }

    /// Advance the virtual clock by `dt`, ticking for every interval fire
    pub fn advance(&mut self, dt: Duration) -> f64 {
        let deadline = self.timers.elapsed() + dt;
        while let Some(id) = self.timers.poll_until(deadline) {
            if self.interval == Some(id) {
                self.tick();
            }
        }
        self.timers.finish_at(deadline);
        self.offset_px
    }

    /// Stop the strip for good. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        self.timers.clear_all();
        self.interval = None;
    }

    /// Current horizontal translation, always in `(-cycle_length_px, 0]`
    pub fn offset_px(&self) -> f64 {
        self.offset_px
    }

    pub fn cycle_length_px(&self) -> u32 {
        self.cycle_length_px
    }

    pub fn tile_width_px(&self) -> u32 {
        self.config.tile_width_px
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// `true` while the interval is armed
    pub fn is_running(&self) -> bool {
        self.interval.is_some_and(|id| self.timers.is_active(id))
    }

    /// The source items, in order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Copies needed so a strip `width_px` wide never runs dry, not fewer
    /// than the configured copies
    ///
    /// Just before the wrap the window starts one full cycle into the
    /// sequence, so the sequence must span `cycle + width`.
    pub fn copies_to_cover(&self, width_px: f64) -> usize {
        let cycle = f64::from(self.cycle_length_px);
        let needed = ((width_px.max(0.0) + cycle) / cycle).ceil() as usize;
        needed.max(self.config.copies)
    }

    /// Source index of every tile a strip `width_px` wide lays out side by
    /// side, starting at `offset_px`
    pub fn display_indices(&self, width_px: f64) -> impl Iterator<Item = usize> {
        let len = self.items.len();
        (0..len).cycle().take(len * self.copies_to_cover(width_px))
    }

    /// The sources repeated the configured number of copies
    pub fn display_items(&self) -> impl Iterator<Item = &T> + '_ {
        self.display_indices(0.0).map(|index| &self.items[index])
    }

    /// Index of the source item under `x` pixels from the strip's left edge
    pub fn index_at(&self, x_px: f64) -> usize {
        let tile = f64::from(self.config.tile_width_px);
        let position = (x_px - self.offset_px).max(0.0);
        (position / tile).floor() as usize % self.items.len()
    }

    /// Source item under `x` pixels from the strip's left edge
    pub fn item_at(&self, x_px: f64) -> &T {
        &self.items[self.index_at(x_px)]
    }
}

impl<T> Drop for CarouselDriver<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<T> fmt::Debug for CarouselDriver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselDriver")
            .field("items", &self.items.len())
            .field("offset_px", &self.offset_px)
            .field("cycle_length_px", &self.cycle_length_px)
            .field("paused", &self.paused)
            .finish()
    }
}
