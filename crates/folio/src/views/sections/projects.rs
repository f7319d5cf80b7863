use crate::state::{AppState, ProjectFilter};
use crate::views::sections::heading;
use folio_config::Project;
use folio_theme::Theme;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use strum::IntoEnumIterator;

const CARD_HEIGHT: u16 = 9;
const CARD_MIN_WIDTH: u16 = 30;

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let portfolio = &state.portfolio;

    let [title_area, _, filter_area, _, grid_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);
    f.render_widget(Paragraph::new(heading("My", "Projects", theme)), title_area);
    f.render_widget(
        Paragraph::new(filter_pills(portfolio.project_filter, theme)).centered(),
        filter_area,
    );

    let visible = portfolio.visible_projects(state.profile());
    if visible.is_empty() {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No projects in this category",
                theme.muted(),
            )))
            .centered(),
            grid_area,
        );
        return;
    }

    let columns = usize::from((grid_area.width / CARD_MIN_WIDTH).clamp(1, 3));
    let rows_fitting = usize::from((grid_area.height / CARD_HEIGHT).max(1));
    // Scroll the grid so the selected card stays visible
    let selected_row = portfolio.selected_project / columns;
    let first_row = selected_row.saturating_sub(rows_fitting - 1);

    for (row_index, row) in visible.chunks(columns).enumerate().skip(first_row) {
        let offset = (row_index - first_row) as u16 * CARD_HEIGHT;
        if offset + CARD_HEIGHT > grid_area.height {
            break;
        }
        let row_area = Rect {
            y: grid_area.y + offset,
            height: CARD_HEIGHT,
            ..grid_area
        };
        let cells = Layout::horizontal((0..columns).map(|_| Constraint::Ratio(1, columns as u32)))
            .spacing(1)
            .split(row_area);
        for (column, ((_, project), cell)) in row.iter().zip(cells.iter()).enumerate() {
            let selected = row_index * columns + column == portfolio.selected_project;
            render_card(project, selected, theme, *cell, f);
        }
    }
}

fn filter_pills(active: ProjectFilter, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for filter in ProjectFilter::iter() {
        let style = if filter == active {
            theme.active()
        } else {
            theme.text_secondary()
        };
        spans.push(Span::styled(format!(" {} ", filter), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_card(project: &Project, selected: bool, theme: &Theme, area: Rect, f: &mut Frame) {
    let border_style = if selected {
        theme.panel_border().bold()
    } else {
        theme.muted()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", project.title),
            theme.section_header(),
        ))
        .title_bottom(Line::from(Span::styled(
            format!(" {} ", category_label(project)),
            theme.gradient_text(),
        )));

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
        Line::from(tech),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn category_label(project: &Project) -> String {
    ProjectFilter::iter()
        .find(|filter| *filter != ProjectFilter::All && filter.matches(project.category))
        .map(|filter| filter.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_config::Profile;

    #[test]
    fn test_category_labels() {
        let profile = Profile::default();
        let labels: Vec<String> = profile.projects.iter().map(category_label).collect();
        assert_eq!(labels, vec!["MERN", "MERN", "Flutter", "AI", "MERN", "Flutter"]);
    }

    #[test]
    fn test_active_pill_is_highlighted() {
        let theme = Theme::default();
        let line = filter_pills(ProjectFilter::Flutter, &theme);
        let active: Vec<&str> = line
            .spans
            .iter()
            .filter(|s| s.style == theme.active())
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(active, vec![" Flutter "]);
    }
}
