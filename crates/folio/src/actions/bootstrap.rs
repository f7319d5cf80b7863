//! Startup: load the config, play the splash, then show the page

use folio_config::AppConfig;

#[derive(Debug, Clone)]
pub enum BootstrapAction {
    /// Sent once by `main` after the worker is up
    Start,
    /// Timings and portfolio content are known; controllers start from here
    ConfigLoaded(AppConfig),
    /// The splash finished and the portfolio is shown
    End,
}
