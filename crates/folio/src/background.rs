//! Background worker thread that processes actions through middleware
//!
//! This module implements the background processing architecture where:
//! - Main thread handles rendering, input and reducers only
//! - Background thread runs the middleware chain, which owns every animation controller
//! - Communication happens via channels
//!
//! The worker is also the single clock of the application: it emits a `Tick`
//! carrying the elapsed wall-clock time, and each controller middleware advances
//! its own timers by that amount.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, RwLock};
use std::thread;
use std::time::{Duration, Instant};

/// Shared state that background can read (main thread writes via reducer)
pub type SharedState = Arc<RwLock<AppState>>;

/// Interval between two animation ticks (~60 fps)
pub const TICK_RATE: Duration = Duration::from_millis(16);

/// Spawn the background worker thread
///
/// - `action_rx`: receives actions from main thread and from Dispatcher (re-entry)
/// - `action_tx`: used to create Dispatcher for middleware to dispatch actions that re-enter
/// - `result_tx`: sends actions to main thread for reducers (non-consumed actions)
/// - `state`: shared state for middleware to read
/// - `middleware`: the middleware chain
pub fn spawn_background_worker(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware + Send>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        background_loop(action_rx, action_tx, result_tx, state, middleware);
    })
}

/// Outcome of running one action through the chain
enum Flow {
    Continue,
    Shutdown,
}

fn background_loop(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    mut middleware: Vec<Box<dyn Middleware + Send>>,
) {
    log::info!("Background worker started");

    // Create dispatcher that re-enters actions through the middleware chain
    let dispatcher = Dispatcher::new(action_tx);

    let mut last_tick = Instant::now();

    loop {
        match action_rx.recv_timeout(Duration::from_millis(4)) {
            Ok(action) => {
                if let Flow::Shutdown =
                    process_action(action, &state, &mut middleware, &dispatcher, &result_tx)
                {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                // No action received, continue to tick check
            }
            Err(RecvTimeoutError::Disconnected) => {
                log::info!("Action channel disconnected, shutting down");
                break;
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= TICK_RATE {
            last_tick = Instant::now();
            let tick = Action::Global(GlobalAction::Tick(elapsed));
            if let Flow::Shutdown =
                process_action(tick, &state, &mut middleware, &dispatcher, &result_tx)
            {
                break;
            }
        }
    }

    log::info!("Background worker stopped");
}

fn process_action(
    action: Action,
    state: &SharedState,
    middleware: &mut [Box<dyn Middleware + Send>],
    dispatcher: &Dispatcher,
    result_tx: &Sender<Action>,
) -> Flow {
    // Get current state snapshot for middleware
    let current_state = match state.read() {
        Ok(s) => s.clone(),
        Err(e) => {
            log::error!("Failed to read shared state: {}", e);
            return Flow::Continue;
        }
    };

    // Run action through middleware chain
    let mut should_forward = true;
    for mw in middleware.iter_mut() {
        if !mw.handle(&action, &current_state, dispatcher) {
            should_forward = false;
            break;
        }
    }

    // Quit always reaches the main thread, after controllers had a chance to stop
    if matches!(action, Action::Global(GlobalAction::Quit)) {
        log::info!("Background worker received shutdown signal");
        if result_tx.send(action).is_err() {
            log::error!("Failed to send quit action to main thread");
        }
        return Flow::Shutdown;
    }

    // Events are only for middleware observation and never reach reducers
    if should_forward && !matches!(action, Action::Event(_)) && result_tx.send(action).is_err() {
        log::error!("Result channel disconnected, shutting down");
        return Flow::Shutdown;
    }

    Flow::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::PortfolioAction;
    use std::sync::mpsc;

    /// Records every action it sees and consumes none
    struct Spy(Sender<Action>);

    impl Middleware for Spy {
        fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
            let _ = self.0.send(action.clone());
            true
        }
    }

    /// Consumes everything
    struct Sink;

    impl Middleware for Sink {
        fn handle(&mut self, _action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
            false
        }
    }

    fn shared() -> SharedState {
        Arc::new(RwLock::new(AppState::default()))
    }

    #[test]
    fn test_quit_reaches_middleware_and_main_thread() {
        let (action_tx, _action_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();
        let (spy_tx, spy_rx) = mpsc::channel();
        let mut chain: Vec<Box<dyn Middleware + Send>> = vec![Box::new(Spy(spy_tx)), Box::new(Sink)];

        let flow = process_action(
            Action::Global(GlobalAction::Quit),
            &shared(),
            &mut chain,
            &Dispatcher::new(action_tx),
            &result_tx,
        );

        assert!(matches!(flow, Flow::Shutdown));
        assert!(matches!(spy_rx.try_recv(), Ok(Action::Global(GlobalAction::Quit))));
        assert!(matches!(result_rx.try_recv(), Ok(Action::Global(GlobalAction::Quit))));
    }

    #[test]
    fn test_consumed_actions_are_not_forwarded() {
        let (action_tx, _action_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();
        let mut chain: Vec<Box<dyn Middleware + Send>> = vec![Box::new(Sink)];

        let flow = process_action(
            Action::Portfolio(PortfolioAction::NextSection),
            &shared(),
            &mut chain,
            &Dispatcher::new(action_tx),
            &result_tx,
        );

        assert!(matches!(flow, Flow::Continue));
        assert!(result_rx.try_recv().is_err());
    }
}
