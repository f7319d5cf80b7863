use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_tertiary: Color,
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors (hsl(185,100%,50%) and hsl(265,90%,65%))
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,

    // Active/selected elements
    pub active_fg: Color,
    pub active_bg: Color,
    pub selected_bg: Color,

    // Starfield
    pub star_bright: Color,
    pub star_dim: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_secondary: tailwind::SLATE.c900,
            bg_tertiary: tailwind::SLATE.c800,
            bg_panel: tailwind::SLATE.c950,

            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c300,
            text_muted: tailwind::SLATE.c500,

            accent_primary: Color::Rgb(0, 234, 255),
            accent_secondary: Color::Rgb(157, 91, 247),

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::AMBER.c400,

            active_fg: tailwind::SLATE.c950,
            active_bg: Color::Rgb(0, 234, 255),
            selected_bg: tailwind::SLATE.c700,

            star_bright: tailwind::SLATE.c200,
            star_dim: tailwind::SLATE.c600,
        }
    }

    // Prebuilt styles for common use cases

    /// Style for panel backgrounds
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.accent_primary)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for section headings ("About Me", "Tech Stack", ...)
    pub fn section_header(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlighted half of a section heading
    pub fn gradient_text(&self) -> Style {
        Style::default()
            .fg(self.accent_secondary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints (e.g., "Enter" in "Enter open")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for the active filter pill, focused field or button
    pub fn active(&self) -> Style {
        Style::default()
            .fg(self.active_fg)
            .bg(self.active_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for selected list items
    pub fn selection_bg(&self) -> Style {
        Style::default().bg(self.selected_bg)
    }

    /// Style for accents (links, years, counters)
    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent_primary)
    }

    /// Style for error messages
    pub fn error(&self) -> Style {
        Style::default().fg(self.status_error)
    }

    /// Style for success messages
    pub fn success(&self) -> Style {
        Style::default()
            .fg(self.status_success)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary text (descriptions, bios)
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }
}
