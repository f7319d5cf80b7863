//! Portfolio View
//!
//! The page itself: a scroll-progress line, the anchor bar, one section at a
//! time and a line of key hints. Keys are interpreted per section.

use crate::actions::{
    Action, CertificatesAction, ContactAction, ContextAction, NavigationAction, PortfolioAction,
    TextInputAction,
};
use crate::capabilities::PanelCapabilities;
use crate::command_id::CommandId;
use crate::state::{AppState, ContactField, Section};
use crate::views::{sections, View, ViewId};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    symbols,
    text::{Line, Span},
    widgets::{Block, LineGauge, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct PortfolioView;

impl PortfolioView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PortfolioView {
    fn default() -> Self {
        Self::new()
    }
}

/// Progress line, anchor bar, body, hints
fn layout(area: Rect) -> [Rect; 4] {
    Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area)
}

/// Area the current section is drawn into
pub fn portfolio_body_area(area: Rect) -> Rect {
    layout(area)[2]
}

fn form_focus(state: &AppState) -> Option<ContactField> {
    if state.portfolio.section == Section::Contact {
        state.contact.focus
    } else {
        None
    }
}

impl View for PortfolioView {
    fn view_id(&self) -> ViewId {
        ViewId::Portfolio
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        f.render_widget(Block::default().style(theme.panel_background()), area);

        let [progress_area, nav_area, body_area, hints_area] = layout(area);
        render_progress(state, progress_area, f);
        render_nav(state, nav_area, f);

        match state.portfolio.section {
            Section::Home => sections::hero::render(state, body_area, f),
            Section::About => sections::about::render(state, body_area, f),
            Section::Tech => sections::tech::render(state, body_area, f),
            Section::Projects => sections::projects::render(state, body_area, f),
            Section::Certificates => sections::certificates::render(state, body_area, f),
            Section::Contact => sections::contact::render(state, body_area, f),
            Section::Footer => sections::footer::render(state, body_area, f),
        }

        render_hints(state, hints_area, f);
    }

    fn capabilities(&self, state: &AppState) -> PanelCapabilities {
        if form_focus(state).is_some() {
            return PanelCapabilities::TEXT_INPUT;
        }
        let mut caps = PanelCapabilities::SECTION_NAVIGATION;
        match state.portfolio.section {
            Section::Projects => caps |= PanelCapabilities::ITEM_NAVIGATION | PanelCapabilities::FILTER,
            Section::Certificates => caps |= PanelCapabilities::PAUSE,
            _ => {}
        }
        caps
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction, state: &AppState) -> Option<Action> {
        if form_focus(state).is_some() {
            return match nav {
                NavigationAction::Next => Some(Action::Contact(ContactAction::NextField)),
                NavigationAction::Previous => Some(Action::Contact(ContactAction::PrevField)),
                _ => None,
            };
        }

        let action = match nav {
            NavigationAction::Next => PortfolioAction::NextSection,
            NavigationAction::Previous => PortfolioAction::PreviousSection,
            NavigationAction::ToTop => PortfolioAction::ToTop,
            NavigationAction::ToBottom => PortfolioAction::ToBottom,
            NavigationAction::Left if state.portfolio.section == Section::Projects => {
                PortfolioAction::PreviousProject
            }
            NavigationAction::Right if state.portfolio.section == Section::Projects => {
                PortfolioAction::NextProject
            }
            NavigationAction::Left | NavigationAction::Right => return None,
        };
        Some(Action::Portfolio(action))
    }

    fn translate_text_input(&self, input: TextInputAction, state: &AppState) -> Option<Action> {
        let field = form_focus(state)?;
        let action = match input {
            TextInputAction::Char(c) => ContactAction::Char(c),
            TextInputAction::Backspace => ContactAction::Backspace,
            TextInputAction::ClearLine => ContactAction::ClearField,
            TextInputAction::Escape => ContactAction::Blur,
            TextInputAction::Confirm => match field {
                ContactField::Submit => ContactAction::Submit,
                ContactField::Message => ContactAction::Char('\n'),
                ContactField::Name | ContactField::Email => ContactAction::NextField,
            },
        };
        Some(Action::Contact(action))
    }

    fn translate_context_action(&self, action: ContextAction, state: &AppState) -> Option<Action> {
        let section = state.portfolio.section;
        match (action, section) {
            (ContextAction::Confirm, Section::Home) => {
                Some(Action::Portfolio(PortfolioAction::GoTo(Section::Projects)))
            }
            (ContextAction::Confirm, Section::Projects) => {
                Some(Action::Portfolio(PortfolioAction::OpenProject))
            }
            (ContextAction::Confirm, Section::Certificates) => {
                Some(Action::Certificates(CertificatesAction::OpenCentre))
            }
            (ContextAction::Confirm, Section::Contact) => {
                Some(Action::Contact(ContactAction::Focus(ContactField::Name)))
            }
            (ContextAction::Confirm, Section::Footer) => {
                Some(Action::Portfolio(PortfolioAction::GoTo(Section::Home)))
            }
            (ContextAction::FocusNext, Section::Contact) => {
                Some(Action::Contact(ContactAction::NextField))
            }
            (ContextAction::FocusPrevious, Section::Contact) => {
                Some(Action::Contact(ContactAction::PrevField))
            }
            (ContextAction::CycleFilter, Section::Projects) => {
                Some(Action::Portfolio(PortfolioAction::CycleProjectFilter))
            }
            (ContextAction::TogglePause, Section::Certificates) => {
                Some(Action::Certificates(CertificatesAction::TogglePause))
            }
            _ => None,
        }
    }
}

fn render_progress(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let section = state.portfolio.section;
    let gauge = LineGauge::default()
        .filled_style(theme.accent())
        .unfilled_style(theme.muted())
        .line_set(symbols::line::THICK)
        .label(Span::styled(
            format!("{}/{} ", section.index(), Section::last().index()),
            theme.muted(),
        ))
        .ratio(section.scroll_progress());
    f.render_widget(gauge, area);
}

fn render_nav(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let brand = &state.profile().footer.brand;

    let mut spans = vec![
        Span::styled(format!(" {} ", brand), theme.gradient_text().bold()),
        Span::raw(" "),
    ];
    for (i, section) in Section::anchors().enumerate() {
        let style = if section == state.portfolio.section {
            theme.active()
        } else {
            theme.text_secondary()
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, section), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_hints(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let keymap = &state.keymap;
    let hint = |command: CommandId, fallback: &str| {
        keymap
            .compact_hint_for_command(command)
            .unwrap_or_else(|| fallback.to_string())
    };

    let mut pairs: Vec<(String, &str)> = Vec::new();
    if form_focus(state).is_some() {
        pairs.push(("Tab/S-Tab".to_string(), "field"));
        pairs.push(("Enter".to_string(), "next / send"));
        pairs.push(("Esc".to_string(), "leave form"));
    } else {
        pairs.push((
            format!(
                "{}/{}",
                hint(CommandId::NavigateNext, "j"),
                hint(CommandId::NavigatePrevious, "k")
            ),
            "scroll",
        ));
        pairs.push(("1-7".to_string(), "jump"));
        match state.portfolio.section {
            Section::Home => pairs.push((hint(CommandId::Confirm, "Enter"), "view projects")),
            Section::Projects => {
                pairs.push((
                    format!(
                        "{}/{}",
                        hint(CommandId::NavigateLeft, "h"),
                        hint(CommandId::NavigateRight, "l")
                    ),
                    "select",
                ));
                pairs.push((hint(CommandId::CycleFilter, "f"), "filter"));
                pairs.push((hint(CommandId::Confirm, "Enter"), "details"));
            }
            Section::Certificates => {
                pairs.push((hint(CommandId::TogglePause, "p"), "pause"));
                pairs.push((hint(CommandId::Confirm, "Enter"), "details"));
            }
            Section::Contact => pairs.push((hint(CommandId::Confirm, "Enter"), "write")),
            _ => {}
        }
        pairs.push((hint(CommandId::KeyBindingsToggleView, "?"), "keys"));
        pairs.push((hint(CommandId::GlobalClose, "q"), "quit"));
    }

    let spans: Vec<Span> = pairs
        .into_iter()
        .flat_map(|(keys, description)| {
            [
                Span::styled(format!(" {}", keys), theme.key_hint().bold()),
                Span::styled(format!(" {} ", description), theme.key_description()),
            ]
        })
        .collect();
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
