//! Key Bindings Help Panel View
//!
//! Displays all available keybindings grouped by category.

use crate::actions::Action;
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::view_models::KeyBindingsPanelViewModel;
use crate::views::{popup_area, View, ViewId};
use folio_theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Left padding for content
const LEFT_PADDING: &str = "  ";

/// Key bindings help panel view
#[derive(Debug, Clone)]
pub struct KeyBindingsView;

impl KeyBindingsView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KeyBindingsView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for KeyBindingsView {
    fn view_id(&self) -> ViewId {
        ViewId::KeyBindings
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let vm = KeyBindingsPanelViewModel::from_state(state);

        // Content plus borders, capped by the terminal
        let height = (vm.total_lines() as u16).saturating_add(2);
        let panel = popup_area(area, 60, height, f);

        let footer_hint = Line::from(vec![
            Span::styled(format!(" {}", vm.close_hint), theme.key_hint().bold()),
            Span::styled(" close ", theme.muted()),
        ]);

        let block = Block::default()
            .title(vm.title.clone())
            .borders(Borders::ALL)
            .border_style(theme.panel_border())
            .title_style(theme.panel_title())
            .title_alignment(Alignment::Center)
            .title_bottom(footer_hint);

        let paragraph = Paragraph::new(build_content_lines(&vm, theme))
            .block(block)
            .style(theme.panel_background());

        f.render_widget(paragraph, panel);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::empty()
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn accepts_action(&self, action: &Action) -> bool {
        // Read-only panel: only `?`, Esc, q and Ctrl+C apply
        matches!(action, Action::Global(_))
    }

    fn is_floating(&self) -> bool {
        true
    }
}

/// Build all content lines for the panel
fn build_content_lines(vm: &KeyBindingsPanelViewModel, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for section in &vm.sections {
        lines.push(Line::from(vec![
            Span::raw(LEFT_PADDING),
            Span::styled(section.category.clone(), theme.section_header()),
        ]));

        let separator = "─".repeat(section.category.chars().count());
        lines.push(Line::from(vec![
            Span::raw(LEFT_PADDING),
            Span::styled(separator, theme.muted()),
        ]));

        for binding in &section.bindings {
            lines.push(Line::from(vec![
                Span::raw(LEFT_PADDING),
                Span::styled(format!("{:<16}", binding.keys), theme.key_hint()),
                Span::styled(binding.description.clone(), theme.key_description()),
            ]));
        }

        lines.push(Line::default());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_has_header_separator_and_rows() {
        let state = AppState::default();
        let vm = KeyBindingsPanelViewModel::from_state(&state);
        let lines = build_content_lines(&vm, &state.theme);
        assert_eq!(lines.len(), vm.total_lines());

        let header: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(header, "  Navigation");
    }

    #[test]
    fn test_only_global_actions_accepted() {
        use crate::actions::{GlobalAction, NavigationAction};
        let view = KeyBindingsView::new();
        assert!(view.accepts_action(&Action::Global(GlobalAction::Close)));
        assert!(!view.accepts_action(&Action::Navigate(NavigationAction::Next)));
    }
}
