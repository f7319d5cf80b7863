//! Context Action Translation Middleware
//!
//! Translates context-sensitive actions (Enter, Tab, `f`, `p`) into
//! section-specific actions using the active view's translate_context_action.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Middleware that translates ViewContext actions via the active view
pub struct ContextMiddleware;

impl ContextMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ContextMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for ContextMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::ViewContext(context) = action {
            if let Some(view) = state.active_view() {
                if let Some(translated) = view.translate_context_action(*context, state) {
                    log::debug!(
                        "ContextMiddleware: Translating {:?} to {:?}",
                        context,
                        translated
                    );
                    dispatcher.dispatch(translated);
                    return false;
                }
            }
            log::debug!("Context action not handled by active view: {:?}", context);
            // Untranslated context actions have no reducer
            return false;
        }

        true
    }
}
