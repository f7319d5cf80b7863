//! Certificate strip
//!
//! Tiles are laid out side by side in exactly the sequence the carousel driver
//! published (source indices, repeated enough to cover the strip), shifted
//! left by the current offset. The strip geometry is shared with the carousel
//! middleware for pointer hit-testing.

use crate::state::AppState;
use crate::views::sections::heading;
use folio_config::Certificate;
use folio_theme::Theme;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by the strip
pub const STRIP_HEIGHT: u16 = 8;

/// Screen area of the strip inside the section body
pub fn strip_area(body: Rect) -> Rect {
    let top = 2.min(body.height);
    Rect {
        x: body.x,
        y: body.y + top,
        width: body.width,
        height: STRIP_HEIGHT.min(body.height - top),
    }
}

/// A tile's visible columns, relative to the strip's left edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSpan {
    /// Position in the displayed sequence
    pub slot: usize,
    pub start: u16,
    pub width: u16,
}

/// Columns of every tile visible in a strip `width` columns wide
pub fn visible_tiles(
    offset_px: f64,
    tile_width_px: u32,
    px_per_column: u32,
    slots: usize,
    width: u16,
) -> Vec<TileSpan> {
    let px_per_column = f64::from(px_per_column.max(1));
    let tile_cols = f64::from(tile_width_px) / px_per_column;
    let offset_cols = offset_px / px_per_column;
    let width = f64::from(width);

    (0..slots)
        .filter_map(|slot| {
            let left = (slot as f64 * tile_cols + offset_cols).floor();
            let right = left + tile_cols;
            if right <= 0.0 || left >= width {
                return None;
            }
            let start = left.max(0.0);
            let end = right.min(width);
            Some(TileSpan {
                slot,
                start: start as u16,
                width: (end - start) as u16,
            })
        })
        .collect()
}

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let certificates = &state.profile().certificates;
    let settings = &state.app_config.carousel;

    let [title_area] = Layout::vertical([Constraint::Length(1)]).areas(area);
    f.render_widget(Paragraph::new(heading("My", "Certificates", theme)), title_area);

    let strip = strip_area(area);
    if let Some(error) = &state.certificates.error {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(error.as_str(), theme.error()))).centered(),
            strip,
        );
        return;
    }
    let sequence = &state.certificates.sequence;
    for tile in visible_tiles(
        state.certificates.offset_px,
        settings.tile_width_px,
        settings.px_per_column,
        sequence.len(),
        strip.width,
    ) {
        let Some(certificate) = certificates.get(sequence[tile.slot]) else {
            continue;
        };
        let tile_area = Rect {
            x: strip.x + tile.start,
            width: tile.width.saturating_sub(1),
            ..strip
        };
        render_tile(certificate, theme, tile_area, f);
    }

    let status_area = Rect {
        y: strip.bottom(),
        height: 1.min(area.bottom().saturating_sub(strip.bottom())),
        ..strip
    };
    let status = if state.certificates.manual_pause {
        Span::styled("paused (p to resume)", theme.muted())
    } else if state.certificates.hovered {
        Span::styled("paused while hovering", theme.muted())
    } else {
        Span::styled("Enter opens the certificate in the middle", theme.muted())
    };
    f.render_widget(Paragraph::new(Line::from(status)).centered(), status_area);
}

fn render_tile(certificate: &Certificate, theme: &Theme, area: Rect, f: &mut Frame) {
    if area.width < 2 {
        return;
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.panel_border());
    let lines = vec![
        Line::from("🏆"),
        Line::from(Span::styled(
            certificate.title.as_str(),
            theme.section_header(),
        )),
        Line::from(vec![
            Span::styled(certificate.issuer.as_str(), theme.muted()),
            Span::raw(" · "),
            Span::styled(certificate.year.as_str(), theme.accent().bold()),
        ]),
    ];
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_sits_below_heading() {
        let strip = strip_area(Rect::new(0, 2, 100, 30));
        assert_eq!(strip, Rect::new(0, 4, 100, STRIP_HEIGHT));

        let tiny = strip_area(Rect::new(0, 0, 10, 1));
        assert_eq!(tiny.height, 0);
    }

    #[test]
    fn test_tiles_at_rest() {
        // 320px tiles at 10px per column: 32 columns each
        let tiles = visible_tiles(0.0, 320, 10, 12, 80);
        assert_eq!(
            tiles,
            vec![
                TileSpan { slot: 0, start: 0, width: 32 },
                TileSpan { slot: 1, start: 32, width: 32 },
                TileSpan { slot: 2, start: 64, width: 16 },
            ]
        );
    }

    #[test]
    fn test_tiles_shift_with_offset() {
        let tiles = visible_tiles(-100.0, 320, 10, 12, 80);
        assert_eq!(tiles[0], TileSpan { slot: 0, start: 0, width: 22 });
        assert_eq!(tiles[1].start, 22);
        assert_eq!(tiles.last().map(|t| t.slot), Some(2));
    }

    #[test]
    fn test_strip_never_runs_dry() {
        // Offset just before the wrap of a 4-item cycle: copies keep the strip full
        let tiles = visible_tiles(-1279.0, 320, 10, 12, 120);
        let covered: u16 = tiles.iter().map(|t| t.width).sum();
        assert_eq!(covered, 120);
    }

    #[test]
    fn test_single_certificate_fills_wide_strip() {
        // One 32-column tile repeated five times, just before the wrap
        let tiles = visible_tiles(-319.0, 320, 10, 5, 120);
        let covered: u16 = tiles.iter().map(|t| t.width).sum();
        assert_eq!(covered, 120);

        // The bare three copies would leave a gap on the right
        let tiles = visible_tiles(-319.0, 320, 10, 3, 120);
        let covered: u16 = tiles.iter().map(|t| t.width).sum();
        assert!(covered < 120);
    }
}
