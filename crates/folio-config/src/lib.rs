//! Configuration and file management for folio
//!
//! This crate provides:
//! - The cache directory used for log files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig): animation timings
//! - Portfolio content (Profile) with built-in defaults

pub mod app_config;
pub mod config_file;
pub mod paths;
pub mod profile;

pub use app_config::{AppConfig, BootSettings, CarouselSettings, ContactSettings};
pub use config_file::{load_config_file, ConfigSource};
pub use paths::cache_dir;
pub use profile::{
    AboutContent, Certificate, ContactContent, Counter, FooterContent, Profile, Project, ProjectCategory, Social,
    Technology, hsl_to_rgb,
};
