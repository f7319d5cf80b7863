//! Event types
//!
//! Events represent facts/observations that have occurred and should be broadcast
//! to the middleware chain. Unlike commands (imperative actions), events allow
//! middleware to react to what happened elsewhere in the system.
//!
//! Events are never forwarded to reducers.
//!
//! Events use past tense names indicating something has happened:
//! `BootCompleted`, not `CompleteBoot`.

/// Events that re-enter the middleware chain
#[derive(Debug, Clone)]
pub enum Event {
    /// The splash boot sequence finished its settle delay
    BootCompleted,
}
