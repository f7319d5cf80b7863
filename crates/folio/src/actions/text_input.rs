//! Editing keys while a form field has focus
//!
//! The portfolio view turns these into `ContactAction`s for the focused
//! field of the contact form.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputAction {
    /// Printable character, appended to the field
    Char(char),
    /// Drop the last character of the field
    Backspace,
    /// Empty the field (Ctrl+U, Cmd+Backspace)
    ClearLine,
    /// Leave the form without submitting
    Escape,
    /// Enter: next field, newline in the message, or send on the submit row
    Confirm,
}
