//! One renderer per portfolio section

pub mod about;
pub mod certificates;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod projects;
pub mod tech;

use folio_theme::Theme;
use ratatui::text::{Line, Span};

/// Two-tone section heading, e.g. "About" + "Me"
pub(crate) fn heading<'a>(plain: &'a str, highlighted: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(plain, theme.section_header()),
        Span::raw(" "),
        Span::styled(highlighted, theme.gradient_text()),
    ])
    .centered()
}
