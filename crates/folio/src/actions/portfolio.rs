//! Portfolio actions
//!
//! Section navigation and project browsing.

use crate::state::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortfolioAction {
    /// Scroll to the next section
    NextSection,
    /// Scroll to the previous section
    PreviousSection,
    /// Jump to a section anchor
    GoTo(Section),
    /// Jump to the first section
    ToTop,
    /// Jump to the last section
    ToBottom,
    /// Cycle the project filter (All -> MERN -> Flutter -> AI)
    CycleProjectFilter,
    /// Select the next project card
    NextProject,
    /// Select the previous project card
    PreviousProject,
    /// Open the detail popup of the selected project
    OpenProject,
}
