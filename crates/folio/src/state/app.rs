//! Application State

use folio_config::{AppConfig, Profile};
use ratatui::layout::Rect;

use crate::keymap::{default_keymap, Keymap};
use crate::views::{SplashView, View};

use super::{
    AboutState, CertificatesState, ContactFormState, HeroState, PortfolioState, SplashState,
};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the base, top views are floating overlays
    /// Views are rendered bottom-up, so the last view in the stack renders on top
    pub view_stack: Vec<Box<dyn View>>,
    /// Terminal area, kept for pointer hit-testing on the background thread
    pub viewport: Rect,
    pub splash: SplashState,
    pub portfolio: PortfolioState,
    pub hero: HeroState,
    pub about: AboutState,
    pub certificates: CertificatesState,
    pub contact: ContactFormState,
    pub theme: folio_theme::Theme,
    /// The keymap containing all keybindings
    pub keymap: Keymap,
    /// Application configuration, including the portfolio content
    pub app_config: AppConfig,
}

impl AppState {
    /// Get the top-most (active) view from the stack
    pub fn active_view(&self) -> Option<&dyn View> {
        self.view_stack.last().map(|v| v.as_ref())
    }

    /// Portfolio content
    pub fn profile(&self) -> &Profile {
        &self.app_config.profile
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("running", &self.running)
            .field("view_stack", &format!("{} views", self.view_stack.len()))
            .field("viewport", &self.viewport)
            .field("splash", &self.splash)
            .field("portfolio", &self.portfolio)
            .field("about", &self.about)
            .field("certificates", &self.certificates)
            .field("contact", &self.contact)
            .field("theme", &"<theme>")
            .field("app_config", &"<config>")
            .finish()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(SplashView::new())],
            viewport: Rect::default(),
            splash: SplashState::default(),
            portfolio: PortfolioState::default(),
            hero: HeroState::default(),
            about: AboutState::default(),
            certificates: CertificatesState::default(),
            contact: ContactFormState::default(),
            theme: folio_theme::Theme::default(),
            keymap: default_keymap(),
            app_config: AppConfig::default(),
        }
    }
}
