//! Navigation Translation Middleware
//!
//! Translates generic Navigation actions into section-specific actions
//! using the active view's translate_navigation method.
//!
//! This ensures translated actions go through the full middleware chain.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Middleware that translates Navigation actions via the active view
pub struct NavigationMiddleware;

impl NavigationMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NavigationMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for NavigationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Navigate(nav) = action {
            if let Some(view) = state.active_view() {
                if let Some(translated) = view.translate_navigation(*nav, state) {
                    log::debug!(
                        "NavigationMiddleware: Translating {:?} to {:?}",
                        nav,
                        translated
                    );
                    // Dispatch the translated action through the full middleware chain
                    dispatcher.dispatch(translated);
                    // The generic Navigate action is done
                    return false;
                }
            }
            log::debug!("Navigation action not handled by active view: {:?}", nav);
        }

        // Pass through all other actions
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{ContactAction, NavigationAction, PortfolioAction};
    use crate::middleware::test_support::{drain, recording_dispatcher};
    use crate::state::{ContactField, Section};
    use crate::views::PortfolioView;

    fn portfolio_state(section: Section) -> AppState {
        let mut state = AppState {
            view_stack: vec![Box::new(PortfolioView::new())],
            ..Default::default()
        };
        state.portfolio.section = section;
        state
    }

    fn translate(state: &AppState, nav: NavigationAction) -> Vec<Action> {
        let (dispatcher, rx) = recording_dispatcher();
        NavigationMiddleware::new().handle(&Action::Navigate(nav), state, &dispatcher);
        drain(&rx)
    }

    #[test]
    fn test_next_scrolls_sections() {
        let state = portfolio_state(Section::Home);
        assert!(matches!(
            translate(&state, NavigationAction::Next)[..],
            [Action::Portfolio(PortfolioAction::NextSection)]
        ));
        assert!(matches!(
            translate(&state, NavigationAction::ToBottom)[..],
            [Action::Portfolio(PortfolioAction::ToBottom)]
        ));
    }

    #[test]
    fn test_left_right_select_projects() {
        let state = portfolio_state(Section::Projects);
        assert!(matches!(
            translate(&state, NavigationAction::Right)[..],
            [Action::Portfolio(PortfolioAction::NextProject)]
        ));
        assert!(matches!(
            translate(&state, NavigationAction::Left)[..],
            [Action::Portfolio(PortfolioAction::PreviousProject)]
        ));
    }

    #[test]
    fn test_focused_form_moves_between_fields() {
        let mut state = portfolio_state(Section::Contact);
        state.contact.focus = Some(ContactField::Email);
        assert!(matches!(
            translate(&state, NavigationAction::Next)[..],
            [Action::Contact(ContactAction::NextField)]
        ));
    }

    #[test]
    fn test_splash_ignores_navigation() {
        let state = AppState::default();
        let (dispatcher, rx) = recording_dispatcher();
        let pass = NavigationMiddleware::new().handle(
            &Action::Navigate(NavigationAction::Next),
            &state,
            &dispatcher,
        );
        assert!(pass);
        assert!(drain(&rx).is_empty());
    }
}
