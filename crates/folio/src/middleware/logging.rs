//! Action trace
//!
//! Sits first in the chain so every action is seen before anything consumes
//! it. Ticks, splash frames and pointer moves arrive dozens of times a second
//! and only show up at trace level.

use crate::actions::{Action, BootstrapAction, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use log::Level;

pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

/// Level an action is traced at
fn level_for(action: &Action) -> Level {
    match action {
        _ if action.is_high_frequency() => Level::Trace,
        // Full config is large; lifecycle is logged by the owning middleware
        Action::Bootstrap(BootstrapAction::ConfigLoaded(_)) => Level::Trace,
        Action::Global(GlobalAction::PushView(_) | GlobalAction::ReplaceView(_)) => Level::Info,
        _ => Level::Debug,
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, _dispatcher: &Dispatcher) -> bool {
        let level = level_for(action);
        if log::log_enabled!(level) {
            let top = state.active_view().map(|v| v.view_id());
            log::log!(level, "Action: {:?} (top view: {:?})", action, top);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::PortfolioView;
    use std::time::Duration;

    #[test]
    fn test_levels() {
        assert_eq!(
            level_for(&Action::Global(GlobalAction::Tick(Duration::from_millis(16)))),
            Level::Trace
        );
        assert_eq!(
            level_for(&Action::Global(GlobalAction::ReplaceView(Box::new(
                PortfolioView::new()
            )))),
            Level::Info
        );
        assert_eq!(
            level_for(&Action::Global(GlobalAction::Close)),
            Level::Debug
        );
    }
}
