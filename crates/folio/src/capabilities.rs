//! View capability system
//!
//! Views declare capabilities so the keyboard middleware can decide how to route
//! keys without knowing about concrete views. A view that currently edits a text
//! field declares TEXT_INPUT and receives raw characters instead of keybindings.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a view can declare
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PanelCapabilities: u32 {
        /// View moves between sections (j/k, PgUp/PgDn, gg/G, 1..7)
        const SECTION_NAVIGATION = 1 << 0;

        /// View has a list whose items can be stepped through (h/l)
        const ITEM_NAVIGATION = 1 << 1;

        /// View has a filter that can be cycled
        const FILTER = 1 << 2;

        /// View shows an animation that can be paused
        const PAUSE = 1 << 3;

        /// A text field has focus: characters are typed, not interpreted
        const TEXT_INPUT = 1 << 4;
    }
}

impl PanelCapabilities {
    /// Check if the view currently edits text
    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }

    /// Check if the view supports item navigation
    pub fn supports_item_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }

    /// Check if the view moves between sections
    pub fn supports_section_navigation(self) -> bool {
        self.contains(Self::SECTION_NAVIGATION)
    }
}

impl Default for PanelCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}
