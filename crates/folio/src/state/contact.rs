//! Contact Form State
//!
//! Holds the three inputs of the contact form, the focused element and the
//! per-field errors of the last rejected submission.

use regex::Regex;
use std::sync::OnceLock;

pub const NAME_MAX: usize = 100;
pub const EMAIL_MAX: usize = 255;
pub const MESSAGE_MAX: usize = 1000;

/// Focusable elements of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Message,
    Submit,
}

impl ContactField {
    /// Move to the next field
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Submit,
            Self::Submit => Self::Name,
        }
    }

    /// Move to the previous field
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Submit,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
            Self::Submit => Self::Message,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Message => "Your Message",
            Self::Submit => "Send Message",
        }
    }
}

/// Validation messages of a rejected submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn for_field(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::Name => self.name.as_deref(),
            ContactField::Email => self.email.as_deref(),
            ContactField::Message => self.message.as_deref(),
            ContactField::Submit => None,
        }
    }
}

/// An accepted submission, trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// State for the contact form
#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub message: String,
    /// `None` while the form is not being edited
    pub focus: Option<ContactField>,
    pub errors: FieldErrors,
    /// "Message sent successfully!" is shown
    pub flash_visible: bool,
}

impl ContactFormState {
    /// Text of an input field; the submit button has none
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
            ContactField::Submit => "",
        }
    }

    /// Mutable text of the focused input field
    pub fn focused_value_mut(&mut self) -> Option<&mut String> {
        match self.focus? {
            ContactField::Name => Some(&mut self.name),
            ContactField::Email => Some(&mut self.email),
            ContactField::Message => Some(&mut self.message),
            ContactField::Submit => None,
        }
    }

    /// Empty all inputs and errors, leaving the form
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.errors = FieldErrors::default();
        self.focus = None;
    }

    /// Validate the trimmed inputs
    ///
    /// Rules: name 1..=100 chars, email a valid address of at most 255 chars,
    /// message 1..=1000 chars.
    pub fn validate(&self) -> Result<ContactMessage, FieldErrors> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        let errors = FieldErrors {
            name: check_required(name, "Name is required", NAME_MAX),
            email: check_email(email),
            message: check_required(message, "Message is required", MESSAGE_MAX),
        };

        if errors.is_empty() {
            Ok(ContactMessage {
                name: name.to_string(),
                email: email.to_string(),
                message: message.to_string(),
            })
        } else {
            Err(errors)
        }
    }
}

fn too_long(max: usize) -> String {
    format!("String must contain at most {} character(s)", max)
}

fn check_required(value: &str, required: &str, max: usize) -> Option<String> {
    let len = value.chars().count();
    if len == 0 {
        Some(required.to_string())
    } else if len > max {
        Some(too_long(max))
    } else {
        None
    }
}

/// The length rule is checked last and wins when both rules fail
fn check_email(value: &str) -> Option<String> {
    let mut error = None;
    if !is_valid_email(value) {
        error = Some("Invalid email address".to_string());
    }
    if value.chars().count() > EMAIL_MAX {
        error = Some(too_long(EMAIL_MAX));
    }
    error
}

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
            .unwrap()
    })
}

/// Address shape check: no leading dot and no consecutive dots in the local part
pub fn is_valid_email(value: &str) -> bool {
    if value.starts_with('.') || value.contains("..") {
        return false;
    }
    email_regex().is_match(value)
}
