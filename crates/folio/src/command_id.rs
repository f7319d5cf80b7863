//! Command identifiers
//!
//! This module defines all command IDs as an enum for type-safe,
//! memory-efficient command references that can be serialized/deserialized.

use serde::{Deserialize, Serialize};

use crate::state::Section;

/// Unique identifier for each command in the application.
///
/// Commands are the semantic actions users can trigger. Each command
/// has a unique ID that can be referenced in keybindings and the help panel.
///
/// The enum is serialized as snake_case (e.g., `CycleFilter` -> `"cycle_filter"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandId {
    // === Navigation ===
    /// Navigate to the next item (down)
    NavigateNext,
    /// Navigate to the previous item (up)
    NavigatePrevious,
    /// Navigate left
    NavigateLeft,
    /// Navigate right
    NavigateRight,
    /// Navigate to the top (gg in vim)
    NavigateToTop,
    /// Navigate to the bottom (G in vim)
    NavigateToBottom,

    // === Sections ===
    /// Scroll one section down
    SectionNext,
    /// Scroll one section up
    SectionPrevious,
    /// Jump to a section anchor
    JumpTo(Section),

    // === Context ===
    /// Primary action of the current section
    Confirm,
    /// Focus the next element
    FocusNext,
    /// Focus the previous element
    FocusPrevious,
    /// Cycle the project filter
    CycleFilter,
    /// Pause or resume the certificate strip
    TogglePause,

    // === Help ===
    /// Show or hide the key bindings panel
    KeyBindingsToggleView,

    // === General ===
    /// Close the current view/panel
    GlobalClose,
    /// Quit the application
    GlobalQuit,
}

impl CommandId {
    /// Convert this command ID to an Action
    pub fn to_action(self) -> crate::actions::Action {
        use crate::actions::{
            Action, ContextAction, GlobalAction, NavigationAction, PortfolioAction,
        };
        use crate::views::KeyBindingsView;

        match self {
            // Navigation
            Self::NavigateNext => Action::Navigate(NavigationAction::Next),
            Self::NavigatePrevious => Action::Navigate(NavigationAction::Previous),
            Self::NavigateLeft => Action::Navigate(NavigationAction::Left),
            Self::NavigateRight => Action::Navigate(NavigationAction::Right),
            Self::NavigateToTop => Action::Navigate(NavigationAction::ToTop),
            Self::NavigateToBottom => Action::Navigate(NavigationAction::ToBottom),

            // Sections
            Self::SectionNext => Action::Portfolio(PortfolioAction::NextSection),
            Self::SectionPrevious => Action::Portfolio(PortfolioAction::PreviousSection),
            Self::JumpTo(section) => Action::Portfolio(PortfolioAction::GoTo(section)),

            // Context
            Self::Confirm => Action::ViewContext(ContextAction::Confirm),
            Self::FocusNext => Action::ViewContext(ContextAction::FocusNext),
            Self::FocusPrevious => Action::ViewContext(ContextAction::FocusPrevious),
            Self::CycleFilter => Action::ViewContext(ContextAction::CycleFilter),
            Self::TogglePause => Action::ViewContext(ContextAction::TogglePause),

            // Help
            Self::KeyBindingsToggleView => {
                Action::Global(GlobalAction::PushView(Box::new(KeyBindingsView::new())))
            }

            // General
            Self::GlobalClose => Action::Global(GlobalAction::Close),
            Self::GlobalQuit => Action::Global(GlobalAction::Quit),
        }
    }

    /// Get the display title for this command
    pub fn title(&self) -> String {
        match self {
            Self::NavigateNext => "Next".to_string(),
            Self::NavigatePrevious => "Previous".to_string(),
            Self::NavigateLeft => "Left".to_string(),
            Self::NavigateRight => "Right".to_string(),
            Self::NavigateToTop => "Go to top".to_string(),
            Self::NavigateToBottom => "Go to bottom".to_string(),
            Self::SectionNext => "Next section".to_string(),
            Self::SectionPrevious => "Previous section".to_string(),
            Self::JumpTo(section) => format!("Jump to {}", section),
            Self::Confirm => "Open".to_string(),
            Self::FocusNext => "Next field".to_string(),
            Self::FocusPrevious => "Previous field".to_string(),
            Self::CycleFilter => "Cycle project filter".to_string(),
            Self::TogglePause => "Pause certificates".to_string(),
            Self::KeyBindingsToggleView => "Key bindings".to_string(),
            Self::GlobalClose => "Close".to_string(),
            Self::GlobalQuit => "Quit".to_string(),
        }
    }

    /// Get the category for grouping in the key bindings panel
    pub fn category(&self) -> &'static str {
        match self {
            Self::NavigateNext
            | Self::NavigatePrevious
            | Self::NavigateLeft
            | Self::NavigateRight
            | Self::NavigateToTop
            | Self::NavigateToBottom => "Navigation",

            Self::SectionNext | Self::SectionPrevious | Self::JumpTo(_) => "Sections",

            Self::Confirm
            | Self::FocusNext
            | Self::FocusPrevious
            | Self::CycleFilter
            | Self::TogglePause => "Section actions",

            Self::KeyBindingsToggleView | Self::GlobalClose | Self::GlobalQuit => "General",
        }
    }
}
