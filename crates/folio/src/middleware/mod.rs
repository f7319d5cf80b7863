use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod app_config_middleware;
pub mod boot_middleware;
pub mod carousel_middleware;
pub mod contact_middleware;
pub mod context_middleware;
pub mod counter_middleware;
pub mod keyboard_middleware;
pub mod logging;
pub mod navigation_middleware;
pub mod text_input_middleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the background thread. Animation controllers live inside
/// middleware, so each one is mutated from that single thread only.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
