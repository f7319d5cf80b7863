//! Contact form actions

use crate::state::{ContactField, FieldErrors};

/// Actions for the contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactAction {
    /// Move focus into the form (or to a given field)
    Focus(ContactField),
    /// Leave the form
    Blur,
    /// Focus the next field
    NextField,
    /// Focus the previous field
    PrevField,
    /// Character typed into the focused field
    Char(char),
    /// Remove last character of the focused field
    Backspace,
    /// Clear the focused field
    ClearField,
    /// Submit the form
    Submit,
    /// Submission rejected with per-field errors
    ValidationFailed(FieldErrors),
    /// Submission accepted
    Submitted,
    /// The confirmation message timed out
    FlashExpired,
}
