//! Text Input Translation Middleware
//!
//! Translates generic TextInput actions into contact form actions
//! using the active view's translate_text_input method.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Middleware that translates TextInput actions via the active view
pub struct TextInputMiddleware;

impl TextInputMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextInputMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for TextInputMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::TextInput(input) = action {
            if let Some(view) = state.active_view() {
                if let Some(translated) = view.translate_text_input(input.clone(), state) {
                    log::debug!(
                        "TextInputMiddleware: Translating {:?} to {:?}",
                        input,
                        translated
                    );
                    dispatcher.dispatch(translated);
                    return false;
                }
            }
            log::debug!("TextInput action not handled by active view: {:?}", input);
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{ContactAction, TextInputAction};
    use crate::middleware::test_support::{drain, recording_dispatcher};
    use crate::state::{ContactField, Section};
    use crate::views::PortfolioView;

    fn focused(field: ContactField) -> AppState {
        let mut state = AppState {
            view_stack: vec![Box::new(PortfolioView::new())],
            ..Default::default()
        };
        state.portfolio.section = Section::Contact;
        state.contact.focus = Some(field);
        state
    }

    fn translate(state: &AppState, input: TextInputAction) -> Vec<Action> {
        let (dispatcher, rx) = recording_dispatcher();
        TextInputMiddleware::new().handle(&Action::TextInput(input), state, &dispatcher);
        drain(&rx)
    }

    #[test]
    fn test_characters_go_to_focused_field() {
        let state = focused(ContactField::Name);
        assert_eq!(
            translate(&state, TextInputAction::Char('A'))
                .into_iter()
                .filter_map(|a| match a {
                    Action::Contact(c) => Some(c),
                    _ => None,
                })
                .collect::<Vec<_>>(),
            vec![ContactAction::Char('A')]
        );
    }

    #[test]
    fn test_enter_depends_on_field() {
        assert!(matches!(
            translate(&focused(ContactField::Name), TextInputAction::Confirm)[..],
            [Action::Contact(ContactAction::NextField)]
        ));
        assert!(matches!(
            translate(&focused(ContactField::Message), TextInputAction::Confirm)[..],
            [Action::Contact(ContactAction::Char('\n'))]
        ));
        assert!(matches!(
            translate(&focused(ContactField::Submit), TextInputAction::Confirm)[..],
            [Action::Contact(ContactAction::Submit)]
        ));
    }

    #[test]
    fn test_escape_leaves_form() {
        assert!(matches!(
            translate(&focused(ContactField::Email), TextInputAction::Escape)[..],
            [Action::Contact(ContactAction::Blur)]
        ));
    }
}
