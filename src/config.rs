use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::app::Mode;
use crate::generator::corpus::Difficulty;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub start_mode: Mode,
    #[serde(default = "default_show_banner")]
    pub show_banner: bool,
}

fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_show_banner() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            difficulty: Difficulty::default(),
            start_mode: Mode::default(),
            show_banner: default_show_banner(),
        }
    }
}

impl Config {
    /// Reads the user config file, or returns defaults when there is none.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("keyglow")
    }

    fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }
}
