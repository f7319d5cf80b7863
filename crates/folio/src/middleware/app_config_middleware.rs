//! Reads `.folio.toml` when the app starts
//!
//! Everything timed (boot sequence, strip, counters, flash) waits for the
//! `ConfigLoaded` this middleware dispatches.

use crate::actions::{Action, BootstrapAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use folio_config::AppConfig;

pub struct AppConfigMiddleware {
    loader: fn() -> AppConfig,
    loaded: bool,
}

impl AppConfigMiddleware {
    pub fn new() -> Self {
        Self::with_loader(AppConfig::load)
    }

    /// Use another config source, e.g. fixed content in tests
    pub fn with_loader(loader: fn() -> AppConfig) -> Self {
        Self {
            loader,
            loaded: false,
        }
    }
}

impl Default for AppConfigMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for AppConfigMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        if !matches!(action, Action::Bootstrap(BootstrapAction::Start)) || self.loaded {
            return true;
        }

        // File I/O is fine here, this is the worker thread
        let config = (self.loader)();
        let profile = &config.profile;
        log::info!(
            "AppConfigMiddleware: portfolio of {} with {} projects and {} certificates",
            profile.display_name,
            profile.projects.len(),
            profile.certificates.len()
        );
        self.loaded = true;
        dispatcher.dispatch(Action::Bootstrap(BootstrapAction::ConfigLoaded(config)));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::test_support::{drain, recording_dispatcher};

    fn short_flash() -> AppConfig {
        let mut config = AppConfig::default();
        config.contact.flash_ms = 5;
        config
    }

    #[test]
    fn test_loads_config_once() {
        let mut mw = AppConfigMiddleware::with_loader(short_flash);
        let (dispatcher, rx) = recording_dispatcher();
        let state = AppState::default();
        let start = Action::Bootstrap(BootstrapAction::Start);

        assert!(mw.handle(&start, &state, &dispatcher));
        assert!(mw.handle(&start, &state, &dispatcher));

        let loaded: Vec<AppConfig> = drain(&rx)
            .into_iter()
            .filter_map(|a| match a {
                Action::Bootstrap(BootstrapAction::ConfigLoaded(config)) => Some(config),
                _ => None,
            })
            .collect();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].contact.flash_ms, 5);
    }

    #[test]
    fn test_ignores_other_actions() {
        let mut mw = AppConfigMiddleware::with_loader(short_flash);
        let (dispatcher, rx) = recording_dispatcher();
        assert!(mw.handle(
            &Action::Bootstrap(BootstrapAction::End),
            &AppState::default(),
            &dispatcher
        ));
        assert!(drain(&rx).is_empty());
    }
}
