use crate::state::AppState;
use crate::views::sections::heading;
use folio_config::Technology;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Width of one technology card
const CARD_WIDTH: u16 = 18;
const CARD_HEIGHT: u16 = 4;

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let technologies = &state.profile().technologies;

    let [title_area, _, grid_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);
    f.render_widget(Paragraph::new(heading("Tech", "Stack", theme)), title_area);

    let columns = usize::from((grid_area.width / CARD_WIDTH).clamp(1, 5));
    for (row_index, row) in technologies.chunks(columns).enumerate() {
        let y = grid_area.y + row_index as u16 * CARD_HEIGHT;
        if y + CARD_HEIGHT > grid_area.bottom() {
            break;
        }
        let row_area = Rect {
            y,
            height: CARD_HEIGHT,
            ..grid_area
        };
        let cells = Layout::horizontal(row.iter().map(|_| Constraint::Length(CARD_WIDTH)))
            .flex(Flex::Center)
            .spacing(1)
            .split(row_area);

        for (tech, cell) in row.iter().zip(cells.iter()) {
            let (r, g, b) = tech.rgb();
            let colour = Color::Rgb(r, g, b);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colour));
            let lines = vec![
                Line::from(Span::styled(badge(tech), Style::default().fg(colour).bold())).centered(),
                Line::from(Span::styled(tech.name.as_str(), theme.text_secondary())).centered(),
            ];
            f.render_widget(Paragraph::new(lines).block(block), *cell);
        }
    }
}

/// Two-letter badge shown on a technology card
fn badge(tech: &Technology) -> String {
    tech.name
        .chars()
        .filter(|c| c.is_alphanumeric())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tech(name: &str) -> Technology {
        Technology {
            name: name.to_string(),
            hue: 0,
            saturation: 0,
            lightness: 50,
        }
    }

    #[test]
    fn test_badge_skips_punctuation() {
        assert_eq!(badge(&tech("Node.js")), "NO");
        assert_eq!(badge(&tech("Three.js")), "TH");
        assert_eq!(badge(&tech("C")), "C");
    }
}
