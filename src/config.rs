use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use crate::models::DEFAULT_BG_COLOR;

/// Name of the per-user configuration directory under the home directory
const CONFIG_DIR: &str = ".stickerboard";

/// Runtime configuration
///
/// Read from `~/.stickerboard/rc`, a `key=value` file:
///
/// ```text
/// data.location=./stickers.json
/// sticker.color=#ffe08a
/// ```
///
/// Relative `data.location` paths resolve against the rc file's directory.
/// Blank lines, `#` comments and unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_location: PathBuf,
    pub default_color: String,
}

impl Config {
    /// Home directory, preferring `HOME` so tests can redirect it
    pub fn home_dir() -> Result<PathBuf> {
        std::env::var_os("HOME")
            .filter(|h| !h.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
            .context("Failed to determine home directory")
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::home_dir()?.join(CONFIG_DIR).join("rc"))
    }

    /// Get the default board file path
    pub fn default_data_location() -> Result<PathBuf> {
        Ok(Self::home_dir()?.join(CONFIG_DIR).join("stickers.json"))
    }

    /// Load configuration from the rc file, falling back to defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        let mut config = Config {
            data_location: Self::default_data_location()?,
            default_color: DEFAULT_BG_COLOR.to_string(),
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
            config.apply(&contents, config_path.parent().unwrap_or(Path::new(".")));
        }

        Ok(config)
    }

    /// Apply rc file contents on top of the current values
    pub fn apply(&mut self, contents: &str, base_dir: &Path) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                log::warn!("Ignoring malformed config line: {}", line);
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "data.location" if !value.is_empty() => {
                    let path = PathBuf::from(value);
                    self.data_location = if path.is_relative() {
                        base_dir.join(path)
                    } else {
                        path
                    };
                }
                "sticker.color" if !value.is_empty() => {
                    self.default_color = value.to_string();
                }
                other => log::debug!("Ignoring config key '{}'", other),
            }
        }
    }
}
