//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod about;
mod app;
mod certificates;
mod contact;
mod hero;
mod portfolio;
mod splash;

pub use about::AboutState;
pub use app::AppState;
pub use certificates::CertificatesState;
pub use contact::{ContactField, ContactFormState, ContactMessage, FieldErrors};
pub use hero::{HeroState, Star};
pub use portfolio::{PortfolioState, ProjectFilter, Section};
pub use splash::SplashState;
