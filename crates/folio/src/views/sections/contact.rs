use crate::state::{AppState, ContactField, ContactFormState};
use crate::views::sections::heading;
use folio_theme::Theme;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::Stylize,
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Confirmation shown after an accepted submission
pub const FLASH_MESSAGE: &str = "Message sent successfully! ✨";

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let content = &state.profile().contact;

    let [title_area, _, body_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);
    f.render_widget(Paragraph::new(heading("Get In", "Touch", theme)), title_area);

    let [body_area] = Layout::horizontal([Constraint::Max(110)])
        .flex(Flex::Center)
        .areas(body_area);
    let [form_area, info_area] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .spacing(3)
            .areas(body_area);

    render_form(&state.contact, theme, form_area, f);

    let mut info = vec![
        Line::from(Span::styled(content.heading.as_str(), theme.section_header())),
        Line::default(),
        Line::from(Span::styled(content.blurb.as_str(), theme.text_secondary())),
        Line::default(),
    ];
    for social in &content.socials {
        info.push(Line::from(vec![
            Span::styled(format!("{:<10}", social.label), theme.accent().bold()),
            Span::styled(social.href.as_str(), theme.muted()),
        ]));
    }
    f.render_widget(Paragraph::new(info).wrap(Wrap { trim: true }), info_area);
}

fn render_form(form: &ContactFormState, theme: &Theme, area: Rect, f: &mut Frame) {
    let [name_area, name_error, email_area, email_error, message_area, message_error, submit_area, flash_area] =
        Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

    for (field, input_area, error_area) in [
        (ContactField::Name, name_area, name_error),
        (ContactField::Email, email_area, email_error),
        (ContactField::Message, message_area, message_error),
    ] {
        render_input(form, field, theme, input_area, f);
        if let Some(error) = form.errors.for_field(field) {
            f.render_widget(
                Paragraph::new(Line::from(Span::styled(error, theme.error()))),
                error_area,
            );
        }
    }

    let submit_style = if form.focus == Some(ContactField::Submit) {
        theme.active()
    } else {
        theme.accent().bold()
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" ➤ {} ", ContactField::Submit.label()),
            submit_style,
        )))
        .centered(),
        submit_area,
    );

    let hint = if form.flash_visible {
        Span::styled(FLASH_MESSAGE, theme.success())
    } else if form.focus.is_none() {
        Span::styled("Press Enter to write a message", theme.muted())
    } else {
        Span::raw("")
    };
    f.render_widget(Paragraph::new(Line::from(hint)).centered(), flash_area);
}

fn render_input(
    form: &ContactFormState,
    field: ContactField,
    theme: &Theme,
    area: Rect,
    f: &mut Frame,
) {
    let focused = form.focus == Some(field);
    let has_error = form.errors.for_field(field).is_some();
    let border_style = if focused {
        theme.panel_border().bold()
    } else if has_error {
        theme.error()
    } else {
        theme.muted()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Span::styled(format!(" {} ", field.label()), theme.text_secondary()));

    let value = form.value(field);
    let mut text = if value.is_empty() && !focused {
        Text::from(Span::styled(field.label(), theme.muted()))
    } else {
        Text::from(value.to_string()).style(theme.text())
    };
    if focused {
        // Block cursor after the last character
        match text.lines.last_mut() {
            Some(line) => line.push_span(Span::styled(" ", theme.active())),
            None => text.push_line(Line::from(Span::styled(" ", theme.active()))),
        }
    }

    // Keep the end of long messages in view
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = text.lines.len().saturating_sub(inner_height) as u16;
    f.render_widget(
        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        area,
    );
}
