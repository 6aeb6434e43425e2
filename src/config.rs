//! Configuration file handling for lunarfetch.
//!
//! Loads configuration from `~/.config/lunarfetch/config.toml` or a custom path.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::artwork::ImageConfig;
use crate::compose::{DisplayOrder, Layout, Placement};
use crate::info::{Decorations, Icons, Modules};
use crate::logo::LogoConfig;

/// Configuration file structure for lunarfetch.
/// Loaded from ~/.config/lunarfetch/config.toml (or custom path via --config).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub decorations: Decorations,
    pub logo: LogoConfig,
    pub image: ImageSection,
    pub display: DisplayOrder,
    pub modules: Modules,
    pub icons: Icons,
}

/// `[image]` section: whether and where to show an image, plus how to render it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSection {
    #[serde(alias = "enable_image")]
    pub enabled: bool,
    pub position: Placement,
    #[serde(flatten)]
    pub render: ImageConfig,
}

impl Default for ImageSection {
    fn default() -> Self {
        Self {
            enabled: false,
            position: Placement::Left,
            render: ImageConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("loaded config from {}", path.display());
            Ok(config)
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Placement of the logo and image around the info box.
    pub fn layout(&self) -> Layout {
        Layout {
            logo: self.logo.position,
            image: self.image.position,
            order: self.display,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("lunarfetch").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/lunarfetch/config.toml")
        })
}
