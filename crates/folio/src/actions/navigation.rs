//! Movement keys before the active view gives them a meaning
//!
//! On the page, up/down move between sections and left/right pick a project
//! card. With the contact form focused, up/down walk the fields instead.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// j, ↓, wheel down
    Next,
    /// k, ↑, wheel up
    Previous,
    /// h, ←
    Left,
    /// l, →
    Right,
    /// gg: back to the hero banner
    ToTop,
    /// G: down to the footer
    ToBottom,
}
