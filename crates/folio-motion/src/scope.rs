//! Timer scope
//!
//! A `TimerScope` is a small virtual clock that owns every timer one controller
//! creates. Controllers never share a scope, so tearing a controller down is a
//! single `clear_all()` and nothing scheduled before the teardown can fire
//! after it.
//!
//! Time only moves when the owner polls the scope:
//!
//! ```ignore
//! let deadline = scope.elapsed() + dt;
//! while let Some(id) = scope.poll_until(deadline) {
//!     // react to the fire, possibly clearing or creating timers
//! }
//! scope.finish_at(deadline);
//! ```

use std::collections::BTreeMap;
use std::time::Duration;

/// Smallest period an interval may have. Zero-length intervals would fire
/// forever within a single poll.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Handle to a timer inside a `TimerScope`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy)]
enum Repeat {
    Once,
    Every(Duration),
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    due: Duration,
    repeat: Repeat,
}

/// Virtual clock owning a set of timeouts and intervals
#[derive(Debug, Default)]
pub struct TimerScope {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<TimerId, Timer>,
}

impl TimerScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since the scope was created
    pub fn elapsed(&self) -> Duration {
        self.now
    }

    /// Schedule a repeating timer that first fires one `period` from now
    pub fn set_interval(&mut self, period: Duration) -> TimerId {
        let period = period.max(MIN_PERIOD);
        self.insert(period, Repeat::Every(period))
    }

    /// Schedule a one-shot timer that fires `delay` from now
    pub fn set_timeout(&mut self, delay: Duration) -> TimerId {
        self.insert(delay, Repeat::Once)
    }

    fn insert(&mut self, delay: Duration, repeat: Repeat) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.insert(
            id,
            Timer {
                due: self.now + delay,
                repeat,
            },
        );
        id
    }

    /// Cancel a timer. Returns `true` if it was still pending.
    ///
    /// Clearing an unknown, fired or already cleared timer is a no-op.
    pub fn clear(&mut self, id: TimerId) -> bool {
        self.timers.remove(&id).is_some()
    }

    /// Cancel every pending timer
    pub fn clear_all(&mut self) {
        self.timers.clear();
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    /// `true` when no timer is pending
    pub fn is_idle(&self) -> bool {
        self.timers.is_empty()
    }

    /// Number of pending timers
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Pop the next timer due at or before `deadline`.
    ///
    /// The clock moves to the fire time of the returned timer. Intervals are
    /// re-armed one period after their previous due time, timeouts are
    /// removed. Timers due at the same instant fire in creation order.
    pub fn poll_until(&mut self, deadline: Duration) -> Option<TimerId> {
        let (id, timer) = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.due <= deadline)
            .min_by_key(|(id, timer)| (timer.due, **id))
            .map(|(id, timer)| (*id, *timer))?;

        self.now = self.now.max(timer.due);

        match timer.repeat {
            Repeat::Once => {
                self.timers.remove(&id);
            }
            Repeat::Every(period) => {
                if let Some(entry) = self.timers.get_mut(&id) {
                    entry.due = timer.due + period;
                }
            }
        }

        Some(id)
    }

    /// Move the clock forward to `deadline` once every due timer was polled
    pub fn finish_at(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn drain(scope: &mut TimerScope, dt: Duration) -> Vec<TimerId> {
        let deadline = scope.elapsed() + dt;
        let mut fired = Vec::new();
        while let Some(id) = scope.poll_until(deadline) {
            fired.push(id);
        }
        scope.finish_at(deadline);
        fired
    }

    #[test]
    fn test_timeout_fires_once_at_deadline() {
        let mut scope = TimerScope::new();
        let id = scope.set_timeout(ms(600));

        assert!(drain(&mut scope, ms(599)).is_empty());
        assert_eq!(drain(&mut scope, ms(1)), vec![id]);
        assert!(drain(&mut scope, ms(10_000)).is_empty());
        assert!(scope.is_idle());
    }

    #[test]
    fn test_interval_rearms_without_drift() {
        let mut scope = TimerScope::new();
        let id = scope.set_interval(ms(50));

        let fired = drain(&mut scope, ms(175));
        assert_eq!(fired, vec![id, id, id]);
        assert_eq!(scope.elapsed(), ms(175));

        // Next fire is at 200, not 225
        assert_eq!(drain(&mut scope, ms(25)), vec![id]);
    }

    #[test]
    fn test_interleaved_intervals_fire_in_time_order() {
        let mut scope = TimerScope::new();
        let slow = scope.set_interval(ms(100));
        let fast = scope.set_interval(ms(50));

        let fired = drain(&mut scope, ms(200));
        // Ties fire in creation order
        assert_eq!(fired, vec![fast, slow, fast, fast, slow, fast]);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut scope = TimerScope::new();
        let id = scope.set_interval(ms(20));

        assert!(scope.clear(id));
        assert!(!scope.clear(id));
        assert!(!scope.clear(id));
        assert!(drain(&mut scope, ms(1_000)).is_empty());
    }

    #[test]
    fn test_clear_between_polls_prevents_fire() {
        let mut scope = TimerScope::new();
        let first = scope.set_timeout(ms(10));
        let second = scope.set_timeout(ms(10));

        let deadline = ms(10);
        assert_eq!(scope.poll_until(deadline), Some(first));
        scope.clear(second);
        assert_eq!(scope.poll_until(deadline), None);
    }

    #[test]
    fn test_clear_all_cancels_everything() {
        let mut scope = TimerScope::new();
        scope.set_interval(ms(20));
        scope.set_timeout(ms(600));
        assert_eq!(scope.pending(), 2);

        scope.clear_all();
        scope.clear_all();

        assert!(scope.is_idle());
        assert!(drain(&mut scope, ms(10_000)).is_empty());
    }

    #[test]
    fn test_zero_period_interval_is_clamped() {
        let mut scope = TimerScope::new();
        let id = scope.set_interval(Duration::ZERO);

        let fired = drain(&mut scope, ms(3));
        assert_eq!(fired, vec![id, id, id]);
    }
}
