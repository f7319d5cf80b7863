//! Actions module
//!
//! This module defines all actions in the application using a tagged action architecture.
//! Actions are organized by:
//! - Generic actions (Navigation, TextInput, ViewContext) that views translate to section-specific actions
//! - Global actions that affect the entire application
//! - Section-specific actions that are already targeted to a particular part of the portfolio

// Shared action types
pub mod context_action;
pub mod event;
pub mod global;
pub mod navigation;
pub mod text_input;

// Screen-specific action types
pub mod about;
pub mod bootstrap;
pub mod certificates;
pub mod contact;
pub mod portfolio;
pub mod splash;

pub use about::AboutAction;
pub use bootstrap::BootstrapAction;
pub use certificates::CertificatesAction;
pub use contact::ContactAction;
pub use context_action::ContextAction;
pub use event::Event;
pub use global::GlobalAction;
pub use navigation::NavigationAction;
pub use portfolio::PortfolioAction;
pub use splash::SplashAction;
pub use text_input::TextInputAction;

/// Root action enum - tagged by screen/domain
///
/// Actions are categorized as:
/// - `Navigate` / `TextInput` / `ViewContext`: Generic actions that need translation by the active view
/// - `Global`: Application-wide actions (quit, view management, tick, input events)
/// - Screen-specific variants: Already targeted to a specific reducer
#[derive(Debug, Clone)]
pub enum Action {
    /// Events are facts/observations that re-enter the middleware chain.
    /// Use `Action::event(Event::X)` to create - ensures visibility at call site.
    Event(Event),

    /// Generic navigation action - will be translated by active view
    Navigate(NavigationAction),
    /// Generic text input action - will be translated by active view
    TextInput(TextInputAction),
    /// Context-sensitive action - will be translated by active view
    ViewContext(ContextAction),

    /// Global application actions
    Global(GlobalAction),

    /// Bootstrap/initialization actions
    Bootstrap(BootstrapAction),
    /// Splash screen actions
    Splash(SplashAction),
    /// Section navigation and project browsing
    Portfolio(PortfolioAction),
    /// About section counters
    About(AboutAction),
    /// Certificate strip actions
    Certificates(CertificatesAction),
    /// Contact form actions
    Contact(ContactAction),

    /// No-op action
    None,
}

impl Action {
    /// Factory method for creating events.
    ///
    /// Using this factory makes event creation visually distinct at the call site,
    /// signaling that the action will re-enter the middleware chain.
    pub fn event(event: Event) -> Action {
        Action::Event(event)
    }

    /// Actions emitted many times per second, kept out of the debug log
    pub fn is_high_frequency(&self) -> bool {
        matches!(
            self,
            Action::Global(GlobalAction::Tick(_))
                | Action::Global(GlobalAction::MouseMoved { .. })
                | Action::Splash(SplashAction::Frame(_))
                | Action::About(AboutAction::CountersChanged(_))
                | Action::Certificates(CertificatesAction::OffsetChanged(_))
        )
    }
}
