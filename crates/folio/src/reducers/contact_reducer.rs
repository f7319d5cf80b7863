use crate::actions::{Action, ContactAction};
use crate::state::{ContactField, ContactFormState};

/// Reducer for the contact form
pub fn reduce(mut state: ContactFormState, action: &Action) -> ContactFormState {
    let Action::Contact(action) = action else {
        return state;
    };

    match action {
        ContactAction::Focus(field) => {
            state.focus = Some(*field);
        }
        ContactAction::Blur => {
            state.focus = None;
        }
        ContactAction::NextField => {
            state.focus = Some(state.focus.map_or(ContactField::Name, ContactField::next));
        }
        ContactAction::PrevField => {
            state.focus = Some(state.focus.map_or(ContactField::Submit, ContactField::prev));
        }
        ContactAction::Char(c) => {
            if let Some(value) = state.focused_value_mut() {
                value.push(*c);
            }
        }
        ContactAction::Backspace => {
            if let Some(value) = state.focused_value_mut() {
                value.pop();
            }
        }
        ContactAction::ClearField => {
            if let Some(value) = state.focused_value_mut() {
                value.clear();
            }
        }
        ContactAction::ValidationFailed(errors) => {
            state.errors = errors.clone();
        }
        ContactAction::Submitted => {
            state.reset();
            state.flash_visible = true;
        }
        ContactAction::FlashExpired => {
            state.flash_visible = false;
        }
        // Validation runs in the contact middleware
        ContactAction::Submit => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldErrors;

    fn apply(state: ContactFormState, actions: &[ContactAction]) -> ContactFormState {
        actions.iter().fold(state, |state, action| {
            reduce(state, &Action::Contact(action.clone()))
        })
    }

    #[test]
    fn test_typing_into_focused_field() {
        let state = apply(
            ContactFormState::default(),
            &[
                ContactAction::Focus(ContactField::Name),
                ContactAction::Char('A'),
                ContactAction::Char('d'),
                ContactAction::Char('x'),
                ContactAction::Backspace,
                ContactAction::Char('a'),
                ContactAction::NextField,
                ContactAction::Char('@'),
            ],
        );
        assert_eq!(state.name, "Ada");
        assert_eq!(state.email, "@");
        assert_eq!(state.focus, Some(ContactField::Email));
    }

    #[test]
    fn test_characters_ignored_without_field() {
        let state = apply(
            ContactFormState::default(),
            &[ContactAction::Char('x'), ContactAction::Focus(ContactField::Submit), ContactAction::Char('y')],
        );
        assert!(state.name.is_empty() && state.email.is_empty() && state.message.is_empty());
    }

    #[test]
    fn test_field_cycle_from_blurred_form() {
        let state = apply(ContactFormState::default(), &[ContactAction::NextField]);
        assert_eq!(state.focus, Some(ContactField::Name));
        let state = apply(ContactFormState::default(), &[ContactAction::PrevField]);
        assert_eq!(state.focus, Some(ContactField::Submit));
    }

    #[test]
    fn test_clear_field() {
        let state = apply(
            ContactFormState::default(),
            &[
                ContactAction::Focus(ContactField::Message),
                ContactAction::Char('h'),
                ContactAction::Char('i'),
                ContactAction::ClearField,
            ],
        );
        assert!(state.message.is_empty());
    }

    #[test]
    fn test_submitted_resets_and_flashes() {
        let mut state = ContactFormState {
            name: "Ada".to_string(),
            focus: Some(ContactField::Submit),
            errors: FieldErrors {
                email: Some("Invalid email address".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        state = apply(state, &[ContactAction::Submitted]);
        assert!(state.name.is_empty());
        assert!(state.errors.is_empty());
        assert_eq!(state.focus, None);
        assert!(state.flash_visible);

        state = apply(state, &[ContactAction::FlashExpired]);
        assert!(!state.flash_visible);
    }

    #[test]
    fn test_validation_errors_are_stored() {
        let errors = FieldErrors {
            name: Some("Name is required".to_string()),
            ..Default::default()
        };
        let state = apply(
            ContactFormState::default(),
            &[ContactAction::ValidationFailed(errors.clone())],
        );
        assert_eq!(state.errors, errors);
    }
}
