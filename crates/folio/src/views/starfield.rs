//! Starfield backdrop shared by the splash screen and the hero banner

use folio_theme::Theme;
use ratatui::widgets::canvas::{Context, Points};

use crate::state::Star;

/// Paint the stars in unit coordinates, twinkling with time `t` in seconds
pub fn paint_stars(ctx: &mut Context, stars: &[Star], t: f64, theme: &Theme) {
    let (bright, dim): (Vec<&Star>, Vec<&Star>) =
        stars.iter().partition(|star| star.brightness(t) > 0.5);

    let bright: Vec<(f64, f64)> = bright.iter().map(|s| (s.x, s.y)).collect();
    let dim: Vec<(f64, f64)> = dim.iter().map(|s| (s.x, s.y)).collect();

    ctx.draw(&Points {
        coords: &dim,
        color: theme.star_dim,
    });
    ctx.draw(&Points {
        coords: &bright,
        color: theme.star_bright,
    });
}
