//! Boot Middleware
//!
//! Owns the splash screen's boot sequence. The sequence starts once the
//! configuration (and with it the name to type) is loaded, is advanced by
//! every tick, and leaves the splash screen for the portfolio when it settles.

use std::time::Duration;

use folio_config::BootSettings;
use folio_motion::{BootConfig, BootFrame, BootSequence};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::actions::{Action, BootstrapAction, Event, GlobalAction, SplashAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::views::PortfolioView;

pub struct BootMiddleware {
    sequence: Option<BootSequence>,
    last_frame: Option<BootFrame>,
}

impl BootMiddleware {
    pub fn new() -> Self {
        Self {
            sequence: None,
            last_frame: None,
        }
    }

    fn start(&mut self, name: &str, settings: &BootSettings, dispatcher: &Dispatcher) {
        if let Some(mut previous) = self.sequence.take() {
            previous.cancel();
        }

        let on_complete = {
            let dispatcher = dispatcher.clone();
            move || dispatcher.dispatch(Action::event(Event::BootCompleted))
        };

        log::info!("BootMiddleware: starting boot sequence");
        self.sequence = Some(BootSequence::start_with(
            name,
            boot_config(settings),
            StdRng::from_os_rng(),
            on_complete,
        ));
        self.last_frame = None;
    }

    fn tick(&mut self, dt: Duration, dispatcher: &Dispatcher) {
        let Some(sequence) = self.sequence.as_mut() else {
            return;
        };

        let frame = sequence.advance(dt);
        if self.last_frame.as_ref() != Some(&frame) {
            self.last_frame = Some(frame.clone());
            dispatcher.dispatch(Action::Splash(SplashAction::Frame(frame)));
        }
    }
}

impl Default for BootMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

/// Controller timings from the `[boot]` config table
pub fn boot_config(settings: &BootSettings) -> BootConfig {
    BootConfig {
        typing_interval: Duration::from_millis(settings.typing_interval_ms.max(1)),
        progress_interval: Duration::from_millis(settings.progress_interval_ms.max(1)),
        settle_delay: Duration::from_millis(settings.settle_delay_ms),
        min_increment: settings.min_increment,
        max_increment: settings.max_increment,
    }
}

impl Middleware for BootMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::ConfigLoaded(config)) => {
                self.start(&config.profile.name, &config.boot, dispatcher);
            }
            Action::Global(GlobalAction::Tick(dt)) => {
                self.tick(*dt, dispatcher);
            }
            Action::Event(Event::BootCompleted) => {
                log::info!("BootMiddleware: boot sequence completed, showing portfolio");
                self.sequence = None;
                dispatcher.dispatch(Action::Bootstrap(BootstrapAction::End));
                dispatcher.dispatch(Action::Global(GlobalAction::ReplaceView(Box::new(
                    PortfolioView::new(),
                ))));
            }
            Action::Global(GlobalAction::Quit) => {
                if let Some(sequence) = self.sequence.as_mut() {
                    sequence.cancel();
                }
            }
            _ => {}
        }
        true
    }
}
