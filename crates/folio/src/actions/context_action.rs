//! Context-sensitive actions
//!
//! These are semantic actions that views interpret differently based on context.
//! For example, `Confirm` (Enter key) means:
//! - Home: jump to the projects
//! - Projects: open the selected project
//! - Certificates: open the certificate under the strip centre
//! - Contact: focus the form

/// Semantic actions that views interpret differently.
///
/// Each view translates them to view-specific actions via `translate_context_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    /// Primary action on focused item (Enter key)
    Confirm,

    /// Move focus into the next focusable element (Tab key)
    FocusNext,

    /// Move focus into the previous focusable element (Shift+Tab)
    FocusPrevious,

    /// Cycle the filter of the current list (f key)
    CycleFilter,

    /// Toggle the animation of the current section (p key)
    TogglePause,
}
