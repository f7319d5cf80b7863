//! Locating `.folio.toml`
//!
//! A file next to where folio is started wins over the one in the home
//! directory, so a checkout can carry its own portfolio content.

use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = ".folio.toml";

/// A config file that was found and read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub path: PathBuf,
    pub content: String,
}

/// Paths searched, in order of precedence
fn candidates(home: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = home {
        paths.push(home.join(CONFIG_FILE));
    }
    paths
}

/// First readable candidate; unreadable files are skipped
fn read_first(paths: &[PathBuf]) -> Option<ConfigSource> {
    paths.iter().find_map(|path| {
        std::fs::read_to_string(path)
            .ok()
            .map(|content| ConfigSource {
                path: path.clone(),
                content,
            })
    })
}

/// Read `.folio.toml` from the working directory, else from `$HOME`
pub fn load_config_file() -> Option<ConfigSource> {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    let source = read_first(&candidates(home.as_deref()))?;
    log::debug!("Found config at {}", source.path.display());
    Some(source)
}
