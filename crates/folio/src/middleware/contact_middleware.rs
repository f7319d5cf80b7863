//! Contact Middleware
//!
//! Validates submissions of the contact form and owns the timer of the
//! "Message sent successfully!" confirmation. Accepted messages are only
//! written to the log; nothing leaves the machine.

use std::time::Duration;

use folio_motion::Flash;

use crate::actions::{Action, BootstrapAction, ContactAction, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct ContactMiddleware {
    flash: Flash,
    flash_duration: Duration,
}

impl ContactMiddleware {
    pub fn new() -> Self {
        Self {
            flash: Flash::new(),
            flash_duration: Duration::from_millis(
                folio_config::ContactSettings::default().flash_ms,
            ),
        }
    }

    fn submit(&mut self, state: &AppState, dispatcher: &Dispatcher) {
        match state.contact.validate() {
            Ok(message) => {
                log::info!(
                    "ContactMiddleware: message from {} <{}> ({} chars): {}",
                    message.name,
                    message.email,
                    message.message.chars().count(),
                    message.message
                );
                self.flash.show(self.flash_duration);
                dispatcher.dispatch(Action::Contact(ContactAction::Submitted));
            }
            Err(errors) => {
                log::debug!("ContactMiddleware: submission rejected: {:?}", errors);
                dispatcher.dispatch(Action::Contact(ContactAction::ValidationFailed(errors)));
            }
        }
    }
}

impl Default for ContactMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for ContactMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::ConfigLoaded(config)) => {
                self.flash_duration = Duration::from_millis(config.contact.flash_ms);
                true
            }
            Action::Contact(ContactAction::Submit) => {
                self.submit(state, dispatcher);
                // The outcome is reported by Submitted or ValidationFailed
                false
            }
            Action::Global(GlobalAction::Tick(dt)) => {
                if self.flash.advance(*dt) {
                    dispatcher.dispatch(Action::Contact(ContactAction::FlashExpired));
                }
                true
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::test_support::{drain, recording_dispatcher};
    use crate::state::ContactField;

    fn filled(name: &str, email: &str, message: &str) -> AppState {
        let mut state = AppState::default();
        state.contact.name = name.to_string();
        state.contact.email = email.to_string();
        state.contact.message = message.to_string();
        state.contact.focus = Some(ContactField::Submit);
        state
    }

    fn contact_actions(actions: Vec<Action>) -> Vec<ContactAction> {
        actions
            .into_iter()
            .filter_map(|a| match a {
                Action::Contact(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_valid_submission_flashes_then_expires() {
        let mut mw = ContactMiddleware::new();
        let (dispatcher, rx) = recording_dispatcher();
        let state = filled("Ada", "ada@example.com", "Hello there");

        let pass = mw.handle(&Action::Contact(ContactAction::Submit), &state, &dispatcher);
        assert!(!pass);
        assert_eq!(contact_actions(drain(&rx)), vec![ContactAction::Submitted]);

        let tick = |ms| Action::Global(GlobalAction::Tick(Duration::from_millis(ms)));
        mw.handle(&tick(2999), &state, &dispatcher);
        assert!(drain(&rx).is_empty());
        mw.handle(&tick(1), &state, &dispatcher);
        assert_eq!(contact_actions(drain(&rx)), vec![ContactAction::FlashExpired]);
    }

    #[test]
    fn test_invalid_submission_reports_errors() {
        let mut mw = ContactMiddleware::new();
        let (dispatcher, rx) = recording_dispatcher();
        let state = filled("", "not-an-email", "hi");

        mw.handle(&Action::Contact(ContactAction::Submit), &state, &dispatcher);
        match &contact_actions(drain(&rx))[..] {
            [ContactAction::ValidationFailed(errors)] => {
                assert_eq!(errors.name.as_deref(), Some("Name is required"));
                assert_eq!(errors.email.as_deref(), Some("Invalid email address"));
                assert!(errors.message.is_none());
            }
            other => panic!("unexpected actions {:?}", other),
        }
    }

    #[test]
    fn test_flash_duration_from_config() {
        let mut mw = ContactMiddleware::new();
        let (dispatcher, rx) = recording_dispatcher();
        let mut config = folio_config::AppConfig::default();
        config.contact.flash_ms = 100;
        mw.handle(
            &Action::Bootstrap(BootstrapAction::ConfigLoaded(config)),
            &AppState::default(),
            &dispatcher,
        );

        let state = filled("Ada", "ada@example.com", "Hello");
        mw.handle(&Action::Contact(ContactAction::Submit), &state, &dispatcher);
        drain(&rx);
        mw.handle(
            &Action::Global(GlobalAction::Tick(Duration::from_millis(100))),
            &state,
            &dispatcher,
        );
        assert_eq!(contact_actions(drain(&rx)), vec![ContactAction::FlashExpired]);
    }
}
