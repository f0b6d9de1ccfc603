use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::Config;

/// Why `config.toml` could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine home directory")]
    NoHomeDir,
    #[error("{}: file not found", .0.display())]
    Missing(PathBuf),
    #[error("{}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("{}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Returns the config directory: `~/.config/nanoplay/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("nanoplay"))
}

/// Returns the config file path: `~/.config/nanoplay/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Reads and parses `config.toml`, then runs [`Config::validate`].
pub fn try_load() -> Result<Config, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoHomeDir)?;
    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(ConfigError::Missing(path)),
        Err(source) => return Err(ConfigError::Io { path, source }),
    };
    parse(&content).map_err(|source| ConfigError::Parse { path, source })
}

/// Loads the configuration from disk, falling back to defaults.
///
/// A missing file silently returns defaults; any other failure prints
/// a warning first.
pub fn load() -> Config {
    match try_load() {
        Ok(config) => config,
        Err(ConfigError::Missing(_)) => Config::default(),
        Err(e) => {
            eprintln!("Warning: {e}");
            Config::default()
        }
    }
}

pub(super) fn parse(content: &str) -> Result<Config, toml::de::Error> {
    let mut config: Config = toml::from_str(content)?;
    config.validate();
    Ok(config)
}
