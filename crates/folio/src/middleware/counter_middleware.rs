//! Counter Middleware
//!
//! Rolls the About section's statistics up from zero the first time the
//! section is shown. Counters never restart afterwards.

use std::time::Duration;

use folio_motion::CountUp;

use crate::actions::{AboutAction, Action, BootstrapAction, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, Section};
use crate::views::ViewId;

pub struct CounterMiddleware {
    counters: Vec<CountUp>,
    started: bool,
    last_values: Vec<u32>,
}

impl CounterMiddleware {
    pub fn new() -> Self {
        Self {
            counters: Vec::new(),
            started: false,
            last_values: Vec::new(),
        }
    }

    fn tick(&mut self, dt: Duration, state: &AppState, dispatcher: &Dispatcher) {
        if !self.started && about_visible(state) && !self.counters.is_empty() {
            log::debug!("CounterMiddleware: About section shown, starting counters");
            self.counters.iter_mut().for_each(CountUp::start);
            self.started = true;
        }
        if !self.started {
            return;
        }

        let values: Vec<u32> = self
            .counters
            .iter_mut()
            .map(|counter| counter.advance(dt))
            .collect();
        if values != self.last_values {
            self.last_values.clone_from(&values);
            dispatcher.dispatch(Action::About(AboutAction::CountersChanged(values)));
        }
    }
}

impl Default for CounterMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

fn about_visible(state: &AppState) -> bool {
    state.portfolio.section == Section::About
        && state
            .active_view()
            .is_some_and(|view| view.view_id() == ViewId::Portfolio)
}

impl Middleware for CounterMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::ConfigLoaded(config)) => {
                self.counters = config
                    .profile
                    .about
                    .counters
                    .iter()
                    .map(|counter| CountUp::new(counter.end))
                    .collect();
                self.last_values = vec![0; self.counters.len()];
                self.started = false;
            }
            Action::Global(GlobalAction::Tick(dt)) => self.tick(*dt, state, dispatcher),
            _ => {}
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::test_support::{drain, recording_dispatcher};
    use crate::views::PortfolioView;
    use folio_config::AppConfig;

    fn portfolio_at(section: Section) -> AppState {
        let mut state = AppState {
            view_stack: vec![Box::new(PortfolioView::new())],
            ..Default::default()
        };
        state.portfolio.section = section;
        state
    }

    fn counter_values(actions: Vec<Action>) -> Option<Vec<u32>> {
        actions.into_iter().rev().find_map(|a| match a {
            Action::About(AboutAction::CountersChanged(values)) => Some(values),
            _ => None,
        })
    }

    fn ready() -> CounterMiddleware {
        let mut mw = CounterMiddleware::new();
        let (dispatcher, _rx) = recording_dispatcher();
        mw.handle(
            &Action::Bootstrap(BootstrapAction::ConfigLoaded(AppConfig::default())),
            &AppState::default(),
            &dispatcher,
        );
        mw
    }

    #[test]
    fn test_counters_wait_for_about_section() {
        let mut mw = ready();
        let (dispatcher, rx) = recording_dispatcher();
        let tick = Action::Global(GlobalAction::Tick(Duration::from_millis(500)));

        mw.handle(&tick, &portfolio_at(Section::Home), &dispatcher);
        assert!(drain(&rx).is_empty());

        mw.handle(&tick, &portfolio_at(Section::About), &dispatcher);
        let values = counter_values(drain(&rx)).expect("counters started");
        assert!(values.iter().all(|v| *v > 0));
    }

    #[test]
    fn test_counters_reach_end_values_and_keep_them() {
        let mut mw = ready();
        let (dispatcher, rx) = recording_dispatcher();
        let tick = Action::Global(GlobalAction::Tick(Duration::from_secs(2)));
        let ends: Vec<u32> = AppConfig::default()
            .profile
            .about
            .counters
            .iter()
            .map(|c| c.end)
            .collect();

        mw.handle(&tick, &portfolio_at(Section::About), &dispatcher);
        assert_eq!(counter_values(drain(&rx)), Some(ends));

        // Leaving and coming back does not restart them
        mw.handle(&tick, &portfolio_at(Section::Tech), &dispatcher);
        mw.handle(&tick, &portfolio_at(Section::About), &dispatcher);
        assert!(drain(&rx).is_empty());
    }

    #[test]
    fn test_splash_does_not_start_counters() {
        let mut mw = ready();
        let (dispatcher, rx) = recording_dispatcher();
        let mut state = AppState::default();
        state.portfolio.section = Section::About;
        mw.handle(
            &Action::Global(GlobalAction::Tick(Duration::from_secs(1))),
            &state,
            &dispatcher,
        );
        assert!(drain(&rx).is_empty());
    }
}
