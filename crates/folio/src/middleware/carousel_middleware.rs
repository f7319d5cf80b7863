//! Carousel Middleware
//!
//! Owns the certificate strip's driver. The strip scrolls on every tick,
//! pauses while the pointer is over it or while the user paused it with `p`,
//! and resolves "open the certificate under the centre" against the driver's
//! own geometry. The driver also decides which tiles the view lays out; the
//! sequence is republished whenever the terminal width changes.

use std::time::Duration;

use folio_config::{CarouselSettings, Certificate};
use folio_motion::{CarouselConfig, CarouselDriver};
use ratatui::layout::{Position, Rect};

use crate::actions::{Action, BootstrapAction, CertificatesAction, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, Section};
use crate::views::sections::certificates::strip_area;
use crate::views::{portfolio_body_area, CertificateDetailView, ViewId};

pub struct CarouselMiddleware {
    driver: Option<CarouselDriver<Certificate>>,
    px_per_column: u32,
    hovered: bool,
    manual_pause: bool,
}

impl CarouselMiddleware {
    pub fn new() -> Self {
        Self {
            driver: None,
            px_per_column: CarouselSettings::default().px_per_column,
            hovered: false,
            manual_pause: false,
        }
    }

    fn build(
        &mut self,
        certificates: &[Certificate],
        settings: &CarouselSettings,
        viewport: Rect,
        dispatcher: &Dispatcher,
    ) {
        self.px_per_column = settings.px_per_column.max(1);
        match CarouselDriver::new(certificates.to_vec(), carousel_config(settings)) {
            Ok(driver) => {
                log::info!(
                    "CarouselMiddleware: strip ready with {} certificates",
                    certificates.len()
                );
                let sequence = driver
                    .display_indices(self.strip_width_px(viewport))
                    .collect();
                dispatcher.dispatch(Action::Certificates(CertificatesAction::Ready {
                    cycle_length_px: driver.cycle_length_px(),
                    sequence,
                }));
                self.driver = Some(driver);
            }
            Err(e) => {
                log::warn!("CarouselMiddleware: strip unavailable: {}", e);
                self.driver = None;
                dispatcher.dispatch(Action::Certificates(CertificatesAction::Unavailable(
                    e.to_string(),
                )));
            }
        }
    }

    /// Strip width in driver pixels for a terminal of this size
    fn strip_width_px(&self, viewport: Rect) -> f64 {
        let strip = strip_area(portfolio_body_area(viewport));
        f64::from(strip.width) * f64::from(self.px_per_column)
    }

    fn resized(&self, width: u16, height: u16, dispatcher: &Dispatcher) {
        let Some(driver) = self.driver.as_ref() else {
            return;
        };
        let viewport = Rect::new(0, 0, width, height);
        let sequence = driver
            .display_indices(self.strip_width_px(viewport))
            .collect();
        dispatcher.dispatch(Action::Certificates(CertificatesAction::SequenceChanged(
            sequence,
        )));
    }

    /// A strip that left the screen is no longer hovered, wherever the
    /// pointer rests
    fn release_hidden_hover(&mut self, state: &AppState, dispatcher: &Dispatcher) {
        if self.hovered && strip_on_screen(state).is_none() {
            log::debug!("CarouselMiddleware: strip hidden, hover ends");
            self.hovered = false;
            dispatcher.dispatch(Action::Certificates(CertificatesAction::Hovered(false)));
            self.sync_pause(dispatcher);
        }
    }

    fn tick(&mut self, dt: Duration, dispatcher: &Dispatcher) {
        let Some(driver) = self.driver.as_mut() else {
            return;
        };
        let before = driver.offset_px();
        let after = driver.advance(dt);
        if after != before {
            dispatcher.dispatch(Action::Certificates(CertificatesAction::OffsetChanged(
                after,
            )));
        }
    }

    /// Apply hover and manual pause to the driver, reporting changes
    fn sync_pause(&mut self, dispatcher: &Dispatcher) {
        let Some(driver) = self.driver.as_mut() else {
            return;
        };
        let paused = self.hovered || self.manual_pause;
        if driver.is_paused() != paused {
            driver.set_paused(paused);
            dispatcher.dispatch(Action::Certificates(CertificatesAction::PauseChanged(
                paused,
            )));
        }
    }

    fn pointer_moved(&mut self, column: u16, row: u16, state: &AppState, dispatcher: &Dispatcher) {
        let hovered = strip_on_screen(state)
            .is_some_and(|strip| strip.contains(Position::new(column, row)));
        if hovered != self.hovered {
            self.hovered = hovered;
            dispatcher.dispatch(Action::Certificates(CertificatesAction::Hovered(hovered)));
            self.sync_pause(dispatcher);
        }
    }

    fn open_centre(&self, state: &AppState, dispatcher: &Dispatcher) {
        let (Some(driver), Some(strip)) = (self.driver.as_ref(), strip_on_screen(state)) else {
            log::debug!("CarouselMiddleware: no strip to open a certificate from");
            return;
        };
        let centre_px = f64::from(strip.width / 2) * f64::from(self.px_per_column);
        let index = driver.index_at(centre_px);
        log::debug!(
            "CarouselMiddleware: opening certificate {} ({})",
            index,
            driver.item_at(centre_px).title
        );
        dispatcher.dispatch(Action::Global(GlobalAction::PushView(Box::new(
            CertificateDetailView::new(index),
        ))));
    }
}

impl Default for CarouselMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

/// Driver geometry from the `[carousel]` config table
pub fn carousel_config(settings: &CarouselSettings) -> CarouselConfig {
    CarouselConfig {
        tick_interval: Duration::from_millis(settings.tick_interval_ms.max(1)),
        step_px: settings.step_px,
        tile_width_px: settings.tile_width_px,
        copies: settings.copies,
    }
}

/// Screen area of the strip, if the certificates section is visible and on top
fn strip_on_screen(state: &AppState) -> Option<Rect> {
    let on_top = state
        .active_view()
        .is_some_and(|view| view.view_id() == ViewId::Portfolio);
    if !on_top || state.portfolio.section != Section::Certificates {
        return None;
    }
    Some(strip_area(portfolio_body_area(state.viewport)))
}

impl Middleware for CarouselMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::ConfigLoaded(config)) => {
                self.build(
                    &config.profile.certificates,
                    &config.carousel,
                    state.viewport,
                    dispatcher,
                );
                true
            }
            Action::Global(GlobalAction::Tick(dt)) => {
                self.release_hidden_hover(state, dispatcher);
                self.tick(*dt, dispatcher);
                true
            }
            Action::Global(GlobalAction::Resize { width, height }) => {
                self.resized(*width, *height, dispatcher);
                true
            }
            Action::Global(GlobalAction::MouseMoved { column, row }) => {
                self.pointer_moved(*column, *row, state, dispatcher);
                true
            }
            Action::Certificates(CertificatesAction::TogglePause) => {
                self.manual_pause = !self.manual_pause;
                log::debug!("CarouselMiddleware: manual pause {}", self.manual_pause);
                self.sync_pause(dispatcher);
                true
            }
            Action::Certificates(CertificatesAction::OpenCentre) => {
                self.open_centre(state, dispatcher);
                false
            }
            Action::Global(GlobalAction::Quit) => {
                if let Some(driver) = self.driver.as_mut() {
                    driver.cancel();
                }
                true
            }
            _ => true,
        }
    }
}
