use crate::actions::Action;
use crate::capabilities::PanelCapabilities;
use crate::state::{AppState, SplashState};
use crate::views::starfield::paint_stars;
use crate::views::{View, ViewId};
use figlet_rs::FIGfont;
use folio_theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Stylize,
    symbols::Marker,
    text::{Line, Span},
    widgets::{canvas::Canvas, Block, Gauge, Paragraph},
    Frame,
};

/// Splash screen view - shown while the boot sequence runs
#[derive(Debug, Clone)]
pub struct SplashView;

impl SplashView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SplashView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for SplashView {
    fn view_id(&self) -> ViewId {
        ViewId::Splash
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render_splash(state, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        // Splash screen has no interactive capabilities
        PanelCapabilities::empty()
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn accepts_action(&self, action: &Action) -> bool {
        // Splash screen only accepts global actions (like Quit)
        matches!(action, Action::Global(_))
    }
}

/// Width of the progress bar in columns
const BAR_WIDTH: u16 = 40;

fn render_splash(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let splash = &state.splash;

    f.render_widget(Block::default().style(theme.panel_background()), area);

    let t = splash.elapsed.as_secs_f64();
    let stars = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, 1.0])
        .y_bounds([0.0, 1.0])
        .background_color(theme.bg_panel)
        .paint(|ctx| paint_stars(ctx, &state.hero.stars, t, theme));
    f.render_widget(stars, area);

    let title_lines = generate_figlet_title(splash, theme);
    let title_height = title_lines.len() as u16;

    let [title_area, _, bar_area, percent_area] = Layout::vertical([
        Constraint::Length(title_height),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(area);

    f.render_widget(
        Paragraph::new(title_lines).alignment(Alignment::Center),
        title_area,
    );

    let [bar_area] = Layout::horizontal([Constraint::Length(BAR_WIDTH)])
        .flex(Flex::Center)
        .areas(bar_area);
    let gauge = Gauge::default()
        .gauge_style(theme.accent().on_black())
        .ratio(splash.ratio())
        .label("");
    f.render_widget(gauge, bar_area);

    let percent = Line::from(Span::styled(
        format!("{}%", splash.percent()),
        theme.muted(),
    ))
    .alignment(Alignment::Center);
    f.render_widget(Paragraph::new(percent), percent_area);
}

/// FIGlet rendering of the revealed part of the name, with the cursor
fn generate_figlet_title(splash: &SplashState, theme: &Theme) -> Vec<Line<'static>> {
    let cursor = if splash.cursor_visible() { "|" } else { " " };
    let text = format!("{}{}", splash.revealed, cursor);

    let figlet_lines: Vec<String> = FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(&text).map(|figure| figure.to_string()))
        .map(|figure| figure.lines().map(String::from).collect())
        .unwrap_or_else(|| vec![text.clone()]);

    figlet_lines
        .into_iter()
        .map(|line| Line::from(Span::styled(line, theme.gradient_text().bold())))
        .collect()
}
