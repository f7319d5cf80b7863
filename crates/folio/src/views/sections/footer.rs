use crate::state::AppState;
use chrono::Datelike;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let profile = state.profile();

    let [footer_area] = Layout::vertical([Constraint::Length(5)])
        .flex(Flex::End)
        .areas(area);
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.muted());
    let inner = block.inner(footer_area);
    f.render_widget(block, footer_area);

    let mut links: Vec<Span> = Vec::new();
    for (i, link) in profile.footer.links.iter().enumerate() {
        if i > 0 {
            links.push(Span::styled("  ·  ", theme.muted()));
        }
        links.push(Span::styled(link.as_str(), theme.text_secondary()));
    }

    let lines = vec![
        Line::from(Span::styled(
            profile.footer.brand.as_str(),
            theme.gradient_text().bold(),
        ))
        .centered(),
        Line::from(links).centered(),
        Line::default(),
        Line::from(Span::styled(
            copyright(chrono::Local::now().year(), &profile.display_name),
            theme.muted(),
        ))
        .centered(),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

fn copyright(year: i32, name: &str) -> String {
    format!("© {} {}. All rights reserved.", year, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright(2025, "Your Name"),
            "© 2025 Your Name. All rights reserved."
        );
    }
}
