use crate::state::AppState;
use crate::views::sections::heading;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let about = &state.profile().about;

    let [title_area, _, body_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);
    f.render_widget(Paragraph::new(heading("About", "Me", theme)), title_area);

    let [body_area] = Layout::horizontal([Constraint::Max(100)])
        .flex(Flex::Center)
        .areas(body_area);
    let [bio_area, counters_area] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .spacing(2)
            .areas(body_area);

    let mut bio = vec![
        Line::from(Span::styled(about.title.as_str(), theme.accent().bold())),
        Line::default(),
    ];
    for paragraph in &about.paragraphs {
        bio.push(Line::from(Span::styled(
            paragraph.as_str(),
            theme.text_secondary(),
        )));
        bio.push(Line::default());
    }
    f.render_widget(Paragraph::new(bio).wrap(Wrap { trim: true }), bio_area);

    if about.counters.is_empty() {
        return;
    }
    let rows = Layout::vertical(about.counters.iter().map(|_| Constraint::Length(4)))
        .split(counters_area);
    for (i, (counter, row)) in about.counters.iter().zip(rows.iter()).enumerate() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.panel_border());
        let lines = vec![
            Line::from(Span::styled(
                format!("{}+", state.about.value(i)),
                theme.gradient_text(),
            ))
            .centered(),
            Line::from(Span::styled(counter.label.as_str(), theme.muted())).centered(),
        ];
        f.render_widget(Paragraph::new(lines).block(block), *row);
    }
}
