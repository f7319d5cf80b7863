use crate::actions::{Action, ContextAction, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Clear},
    Frame,
};

pub mod certificate_detail_view;
pub mod key_bindings_view;
pub mod portfolio_view;
pub mod project_detail_view;
pub mod sections;
pub mod splash_view;
pub mod starfield;

pub use certificate_detail_view::CertificateDetailView;
pub use key_bindings_view::KeyBindingsView;
pub use portfolio_view::{portfolio_body_area, PortfolioView};
pub use project_detail_view::ProjectDetailView;
pub use splash_view::SplashView;

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Splash,
    Portfolio,
    ProjectDetail,
    CertificateDetail,
    KeyBindings,
}

/// View trait - defines the interface that all views must implement
///
/// This allows the application to interact with views polymorphically through
/// trait objects (Box<dyn View>).
///
/// The trait must stay object-safe, and views must be Send + Sync: they travel
/// inside actions and live in the state snapshot shared with the background
/// worker.
pub trait View: std::fmt::Debug + Send + Sync {
    /// Get the unique identifier for this view type
    fn view_id(&self) -> ViewId;

    /// Render this view
    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Get the capabilities of this view (for keyboard handling)
    fn capabilities(&self, state: &AppState) -> PanelCapabilities;

    /// Clone this view into a Box
    /// This is needed because Clone requires Sized, so we provide a manual clone method
    fn clone_box(&self) -> Box<dyn View>;

    /// Translate a generic navigation action to a section-specific action.
    ///
    /// The default implementation returns None, meaning the view doesn't
    /// handle navigation.
    fn translate_navigation(&self, _nav: NavigationAction, _state: &AppState) -> Option<Action> {
        None
    }

    /// Translate a generic text input action to a section-specific action.
    fn translate_text_input(&self, _input: TextInputAction, _state: &AppState) -> Option<Action> {
        None
    }

    /// Translate a context action (Enter, Tab, `f`, `p`) for the current context.
    fn translate_context_action(&self, _action: ContextAction, _state: &AppState) -> Option<Action> {
        None
    }

    /// Whether the keyboard middleware may dispatch this action while the view is on top
    fn accepts_action(&self, _action: &Action) -> bool {
        true
    }

    /// Floating views are drawn over the view below them
    fn is_floating(&self) -> bool {
        false
    }
}

/// Implement Clone for Box<dyn View>
impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// Render the entire application UI
///
/// Views render bottom-up so floating views on top render last. Views below
/// the top-most non-floating view are hidden and skipped.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let base = state
        .view_stack
        .iter()
        .rposition(|view| !view.is_floating())
        .unwrap_or(0);
    for view in &state.view_stack[base..] {
        view.render(state, area, f);
    }
}

/// Dim the whole screen and clear a centred panel for a popup
pub(crate) fn popup_area(area: Rect, percent_x: u16, height: u16, f: &mut Frame) -> Rect {
    let overlay = Block::default().style(
        Style::default()
            .bg(Color::Black)
            .add_modifier(Modifier::DIM),
    );
    f.render_widget(overlay, area);

    let panel = centered(area, percent_x, height);
    f.render_widget(Clear, panel);
    panel
}

/// Centre a rectangle of `percent_x` width and `height` rows in `area`
pub(crate) fn centered(area: Rect, percent_x: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [panel] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    panel
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_area() {
        let area = Rect::new(0, 0, 100, 40);
        let panel = centered(area, 60, 10);
        assert_eq!(panel.width, 60);
        assert_eq!(panel.height, 10);
        assert_eq!(panel.x, 20);
        assert_eq!(panel.y, 15);

        let small = centered(Rect::new(0, 0, 20, 5), 50, 10);
        assert_eq!(small.height, 5);
    }
}
