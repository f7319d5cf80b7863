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

/// Certificate detail popup
#[derive(Debug, Clone)]
pub struct CertificateDetailView {
    /// Index into the profile's certificate list
    index: usize,
}

impl CertificateDetailView {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl View for CertificateDetailView {
    fn view_id(&self) -> ViewId {
        ViewId::CertificateDetail
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let Some(certificate) = state.profile().certificates.get(self.index) else {
            return;
        };

        let panel = popup_area(area, 50, 10, f);

        let mut lines = vec![
            Line::from("🏆").centered(),
            Line::default(),
            Line::from(vec![
                Span::styled(certificate.issuer.as_str(), theme.text_secondary()),
                Span::raw(" · "),
                Span::styled(certificate.year.as_str(), theme.accent().bold()),
            ])
            .centered(),
        ];
        lines.push(
            Line::from(Span::styled(
                certificate
                    .image
                    .as_deref()
                    .map(|image| format!("{} ({})", certificate.alt_text(), image))
                    .unwrap_or_else(|| certificate.alt_text().to_string()),
                theme.muted(),
            ))
            .centered(),
        );

        let block = Block::default()
            .title(format!(" {} ", certificate.title))
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
