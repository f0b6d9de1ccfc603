mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;

pub use loader::{ConfigError, config_dir, config_path, load, try_load};

/// Top-level configuration for NanoPlay.
///
/// Loaded from `~/.config/nanoplay/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Message language code ("en", "zh", "es", "pt"). Empty means
    /// follow the system locale.
    pub language: String,
    /// Which windows are hidden from the list.
    pub filter: FilterConfig,
    /// Initial contents of the width and height inputs.
    pub resize: ResizeConfig,
    /// File logging.
    pub logging: LogConfig,
}

/// Denylists applied during enumeration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Exact window titles belonging to the shell.
    pub reserved_titles: Vec<String>,
    /// Exact window class names that are never user-facing.
    pub denied_classes: Vec<String>,
}

/// Starting size offered for a resize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            reserved_titles: vec!["Program Manager".into()],
            denied_classes: vec![
                "Shell_TrayWnd".into(),
                "Button".into(),
                "tooltips_class32".into(),
                "MSCTFIME UI".into(),
            ],
        }
    }
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 240,
        }
    }
}

impl Config {
    /// Normalizes values that would otherwise misbehave at runtime.
    ///
    /// Blank denylist entries would match windows with no class, so they
    /// are dropped. Log size is kept between 1 and 100 MB.
    pub fn validate(&mut self) {
        self.language = self.language.trim().to_ascii_lowercase();
        self.filter.reserved_titles.retain(|t| !t.trim().is_empty());
        self.filter.denied_classes.retain(|c| !c.trim().is_empty());
        self.logging.max_file_mb = self.logging.max_file_mb.clamp(1, 100);
    }
}

#[cfg(test)]
mod tests;
