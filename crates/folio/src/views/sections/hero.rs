//! Hero banner: greeting, headline and calls to action over a rotating
//! wireframe sphere and a starfield

use std::f64::consts::{PI, TAU};

use crate::state::AppState;
use crate::views::starfield::paint_stars;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Stylize},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine},
        Paragraph,
    },
    Frame,
};

/// Meridians drawn on the sphere
const MERIDIANS: usize = 12;
/// Parallels drawn on the sphere, poles excluded
const PARALLELS: usize = 7;
/// Segments per circle
const SEGMENTS: usize = 36;
/// Sphere radius in canvas units
const RADIUS: f64 = 0.32;
/// Tilt of the rotation axis towards the viewer
const TILT: f64 = 0.4;

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let hero = &state.hero;
    let t = hero.elapsed.as_secs_f64();
    // Terminal cells are about twice as tall as wide
    let aspect = if area.height > 0 {
        f64::from(area.width) / (f64::from(area.height) * 2.0)
    } else {
        1.0
    };

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, 1.0])
        .y_bounds([0.0, 1.0])
        .background_color(theme.bg_panel)
        .paint(|ctx| {
            paint_stars(ctx, &hero.stars, t, theme);
            paint_sphere(
                ctx,
                hero.angle,
                aspect,
                theme.accent_primary,
                theme.accent_secondary,
            );
        });
    f.render_widget(canvas, area);

    let profile = state.profile();
    let lines = vec![
        Line::from(Span::styled(
            profile.greeting.to_uppercase(),
            theme.accent(),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Hi, I'm ", theme.section_header()),
            Span::styled(profile.display_name.as_str(), theme.gradient_text()),
        ]),
        Line::default(),
        Line::from(Span::styled(profile.tagline.as_str(), theme.text_secondary())),
        Line::default(),
        Line::from(vec![
            Span::styled(" View Projects ", theme.active()),
            Span::raw("  "),
            Span::styled(" Download Resume ", theme.accent().bold()),
        ]),
    ];

    let [text_area] = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .areas(area);
    let [text_area] = Layout::horizontal([Constraint::Percentage(50)])
        .flex(Flex::Start)
        .areas(text_area);
    let text_area = Rect {
        x: text_area.x + 4,
        width: text_area.width.saturating_sub(4),
        ..text_area
    };
    f.render_widget(Paragraph::new(lines), text_area);

    let scroll = Line::from(Span::styled("Scroll ↓", theme.muted())).centered();
    let scroll_area = Rect {
        y: area.bottom().saturating_sub(1),
        height: 1.min(area.height),
        ..area
    };
    f.render_widget(Paragraph::new(scroll), scroll_area);
}

/// Point on the unit sphere rotated by `angle` around the vertical axis and
/// tilted towards the viewer; returns screen x, y and depth
fn project(lat: f64, lon: f64, angle: f64) -> (f64, f64, f64) {
    let (x, y, z) = (lat.cos() * lon.cos(), lat.sin(), lat.cos() * lon.sin());
    // Rotate around Y
    let (x, z) = (
        x * angle.cos() - z * angle.sin(),
        x * angle.sin() + z * angle.cos(),
    );
    // Tilt around X
    let (y, z) = (y * TILT.cos() - z * TILT.sin(), y * TILT.sin() + z * TILT.cos());
    (x, y, z)
}

fn paint_sphere(ctx: &mut Context, angle: f64, aspect: f64, front: Color, back: Color) {
    let centre = (0.72, 0.5);
    let rx = RADIUS / aspect.max(0.1);
    let mut segment = |a: (f64, f64, f64), b: (f64, f64, f64)| {
        let color = if a.2 + b.2 >= 0.0 { front } else { back };
        ctx.draw(&CanvasLine::new(
            centre.0 + a.0 * rx,
            centre.1 + a.1 * RADIUS,
            centre.0 + b.0 * rx,
            centre.1 + b.1 * RADIUS,
            color,
        ));
    };

    for m in 0..MERIDIANS {
        let lon = m as f64 / MERIDIANS as f64 * TAU;
        for s in 0..SEGMENTS {
            let lat_a = -PI / 2.0 + s as f64 / SEGMENTS as f64 * PI;
            let lat_b = -PI / 2.0 + (s + 1) as f64 / SEGMENTS as f64 * PI;
            segment(project(lat_a, lon, angle), project(lat_b, lon, angle));
        }
    }

    for p in 1..=PARALLELS {
        let lat = -PI / 2.0 + p as f64 / (PARALLELS + 1) as f64 * PI;
        for s in 0..SEGMENTS {
            let lon_a = s as f64 / SEGMENTS as f64 * TAU;
            let lon_b = (s + 1) as f64 / SEGMENTS as f64 * TAU;
            segment(project(lat, lon_a, angle), project(lat, lon_b, angle));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_stays_on_unit_sphere() {
        for (lat, lon, angle) in [(0.0, 0.0, 0.0), (0.7, 2.0, 1.3), (-1.2, 5.0, 4.0)] {
            let (x, y, z) = project(lat, lon, angle);
            assert!(((x * x + y * y + z * z) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rotation_moves_points() {
        let a = project(0.0, 0.0, 0.0);
        let b = project(0.0, 0.0, 0.5);
        assert!((a.0 - b.0).abs() > 1e-3);
        // Rotation is periodic
        let c = project(0.0, 0.0, TAU);
        assert!((a.0 - c.0).abs() < 1e-9);
    }
}
