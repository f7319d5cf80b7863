//! Project detail popup
//!
//! Shows everything about one project, including the tech that does not fit
//! on its card and the live/GitHub links.

use crate::actions::Action;
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::views::{popup_area, View, ViewId};
use ratatui::{
    layout::{Alignment, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone)]
pub struct ProjectDetailView {
    /// Index into the profile's project list
    index: usize,
}

impl ProjectDetailView {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl View for ProjectDetailView {
    fn view_id(&self) -> ViewId {
        ViewId::ProjectDetail
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let Some(project) = state.profile().projects.get(self.index) else {
            return;
        };

        let panel = popup_area(area, 60, 14, f);

        let link = |label: &'static str, href: &Option<String>| {
            Line::from(vec![
                Span::styled(format!("{:<8}", label), theme.text_secondary()),
                match href {
                    Some(href) => Span::styled(href.clone(), theme.accent().underlined()),
                    None => Span::styled("not published", theme.muted()),
                },
            ])
        };

        let tech: Vec<Span> = project
            .tech
            .iter()
            .flat_map(|t| [Span::styled(format!("[{}]", t), theme.accent()), Span::raw(" ")])
            .collect();

        let lines = vec![
            Line::from(Span::styled(
                project.description.as_str(),
                theme.text_secondary(),
            )),
            Line::default(),
            Line::from(Span::styled("Tech", theme.section_header())),
            Line::from(tech),
            Line::default(),
            link("Live", &project.live),
            link("GitHub", &project.github),
        ];

        let block = Block::default()
            .title(format!(" {} ", project.title))
            .borders(Borders::ALL)
            .border_style(theme.panel_border())
            .title_style(theme.panel_title())
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(vec![
                Span::styled(" Esc", theme.key_hint().bold()),
                Span::styled(" close ", theme.muted()),
            ]));

        f.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: true })
                .style(theme.panel_background()),
            panel,
        );
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::empty()
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(action, Action::Global(_))
    }

    fn is_floating(&self) -> bool {
        true
    }
}
