//! Application configuration
//!
//! Configuration loaded from `.folio.toml`. Every key is optional; missing
//! keys fall back to the values the portfolio ships with.

use serde::{Deserialize, Serialize};

use crate::profile::Profile;

/// Application configuration loaded from .folio.toml
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Splash screen timings
    #[serde(default)]
    pub boot: BootSettings,

    /// Certificate strip timings and geometry
    #[serde(default)]
    pub carousel: CarouselSettings,

    /// Contact form behaviour
    #[serde(default)]
    pub contact: ContactSettings,

    /// Portfolio content
    #[serde(default)]
    pub profile: Profile,
}

/// Splash screen timings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BootSettings {
    /// Interval between two typed characters of the name
    #[serde(default = "default_typing_interval_ms")]
    pub typing_interval_ms: u64,

    /// Interval between two progress bar increments
    #[serde(default = "default_progress_interval_ms")]
    pub progress_interval_ms: u64,

    /// Pause between a full progress bar and the portfolio
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// Smallest progress increment
    #[serde(default = "default_min_increment")]
    pub min_increment: f64,

    /// Largest progress increment (exclusive)
    #[serde(default = "default_max_increment")]
    pub max_increment: f64,
}

fn default_typing_interval_ms() -> u64 {
    100
}

fn default_progress_interval_ms() -> u64 {
    50
}

fn default_settle_delay_ms() -> u64 {
    600
}

fn default_min_increment() -> f64 {
    1.0
}

fn default_max_increment() -> f64 {
    4.0
}

impl Default for BootSettings {
    fn default() -> Self {
        Self {
            typing_interval_ms: default_typing_interval_ms(),
            progress_interval_ms: default_progress_interval_ms(),
            settle_delay_ms: default_settle_delay_ms(),
            min_increment: default_min_increment(),
            max_increment: default_max_increment(),
        }
    }
}

/// Certificate strip timings and geometry
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CarouselSettings {
    /// Interval between two strip movements
    #[serde(default = "default_carousel_tick_ms")]
    pub tick_interval_ms: u64,

    /// Pixels travelled per tick
    #[serde(default = "default_step_px")]
    pub step_px: f64,

    /// Width of one certificate tile in pixels
    #[serde(default = "default_tile_width_px")]
    pub tile_width_px: u32,

    /// Pixels represented by one terminal column
    #[serde(default = "default_px_per_column")]
    pub px_per_column: u32,

    /// How many copies of the certificates are laid out side by side
    #[serde(default = "default_copies")]
    pub copies: usize,
}

fn default_carousel_tick_ms() -> u64 {
    20
}

fn default_step_px() -> f64 {
    1.0
}

fn default_tile_width_px() -> u32 {
    320
}

fn default_px_per_column() -> u32 {
    10
}

fn default_copies() -> usize {
    3
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_carousel_tick_ms(),
            step_px: default_step_px(),
            tile_width_px: default_tile_width_px(),
            px_per_column: default_px_per_column(),
            copies: default_copies(),
        }
    }
}

/// Contact form behaviour
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ContactSettings {
    /// How long the "message sent" confirmation stays visible
    #[serde(default = "default_flash_ms")]
    pub flash_ms: u64,
}

fn default_flash_ms() -> u64 {
    3000
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            flash_ms: default_flash_ms(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    ///
    /// A file that does not parse is reported and ignored as a whole.
    pub fn load() -> Self {
        let Some(source) = crate::load_config_file() else {
            log::debug!("No config file, using defaults");
            return Self::default();
        };

        match toml::from_str(&source.content) {
            Ok(config) => {
                log::info!("Loaded app config from {}", source.path.display());
                config
            }
            Err(e) => {
                log::warn!(
                    "Failed to parse {}, using defaults: {}",
                    source.path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.boot.typing_interval_ms, 100);
        assert_eq!(config.boot.progress_interval_ms, 50);
        assert_eq!(config.boot.settle_delay_ms, 600);
        assert_eq!(config.carousel.tick_interval_ms, 20);
        assert_eq!(config.carousel.tile_width_px, 320);
        assert_eq!(config.carousel.copies, 3);
        assert_eq!(config.contact.flash_ms, 3000);
        assert_eq!(config.profile.name, "Dhananjaya");
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            [boot]
            typing_interval_ms = 80
            settle_delay_ms = 1000

            [carousel]
            tile_width_px = 200
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.boot.typing_interval_ms, 80);
        assert_eq!(config.boot.settle_delay_ms, 1000);
        // Unset keys keep their defaults
        assert_eq!(config.boot.progress_interval_ms, 50);
        assert_eq!(config.carousel.tile_width_px, 200);
        assert_eq!(config.carousel.step_px, 1.0);
    }

    #[test]
    fn test_config_deserialize_partial_profile() {
        let toml = r#"
            [profile]
            name = "Ada"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.profile.name, "Ada");
        // Content sections fall back to the shipped portfolio
        assert_eq!(config.profile.projects.len(), 6);
        assert_eq!(config.boot, BootSettings::default());
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
