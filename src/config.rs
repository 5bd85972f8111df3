//! Configuration file handling for termslide.
//!
//! Loads configuration from `<config dir>/termslide/config.toml` or a custom
//! path. Every field has a default, so a partial file is fine and a missing
//! file means all defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::ascii::DEFAULT_CHAR_ASPECT_RATIO;
use crate::figlet::DEFAULT_SPACING;
use crate::terminal::{detect_color_depth, ColorDepth};

/// Configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub figlet: FigletConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Left margin of content slides.
    #[serde(default = "default_margin")]
    pub margin: usize,
    /// Terminal cell height divided by width.
    #[serde(default = "default_char_aspect")]
    pub char_aspect: f32,
    #[serde(default = "default_true")]
    pub banner_headings: bool,
    #[serde(default)]
    pub color: ColorMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            margin: default_margin(),
            char_aspect: default_char_aspect(),
            banner_headings: true,
            color: ColorMode::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigletConfig {
    #[serde(default = "default_spacing")]
    pub spacing: usize,
    /// FIGlet `.flf` font; the built-in block font when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<PathBuf>,
}

impl Default for FigletConfig {
    fn default() -> Self {
        Self {
            spacing: default_spacing(),
            font: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub status_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { status_bar: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,
    /// Log file; nothing is logged when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

/// How the color depth is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Detect from `COLORTERM`.
    #[default]
    Auto,
    Truecolor,
    Ansi256,
}

impl ColorMode {
    /// The color depth to paint with.
    pub fn resolve(self) -> ColorDepth {
        match self {
            ColorMode::Auto => detect_color_depth(),
            ColorMode::Truecolor => ColorDepth::TrueColor,
            ColorMode::Ansi256 => ColorDepth::Ansi256,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_margin() -> usize {
    4
}

fn default_char_aspect() -> f32 {
    DEFAULT_CHAR_ASPECT_RATIO
}

fn default_spacing() -> usize {
    DEFAULT_SPACING
}

fn default_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from a file path, or the default path when `None`.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;
        let config = Self::parse(&content).map_err(|e| e.at(&path))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate config text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let aspect = self.render.char_aspect;
        if !aspect.is_finite() || aspect <= 0.0 {
            return Err(ConfigError::Invalid {
                path: PathBuf::new(),
                message: format!("render.char_aspect must be positive, got {}", aspect),
            });
        }
        Ok(())
    }

    /// The effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid config file '{}': {message}", .path.display())]
    Invalid { path: PathBuf, message: String },
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl ConfigError {
    fn at(self, at: &Path) -> Self {
        match self {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: at.to_path_buf(),
                source,
            },
            ConfigError::Invalid { message, .. } => ConfigError::Invalid {
                path: at.to_path_buf(),
                message,
            },
            other => other,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        })
        .join("termslide")
        .join("config.toml")
}

/// Commented default config written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# termslide configuration

[render]
# Left margin of content slides (collapses on narrow terminals)
margin = 4
# Terminal cell height / width, used to keep image proportions
char_aspect = 2.0
# Draw level-1 headings as banners when they fit
banner_headings = true
# Color depth: auto, truecolor, ansi256
color = "auto"

[figlet]
# Columns between banner glyphs
spacing = 1
# FIGlet font file (default: built-in block font)
# font = "/usr/share/figlet/standard.flf"

[ui]
# Show the slide counter and key hints on the last row
status_bar = true

[log]
# Level used when RUST_LOG is not set
level = "info"
# Nothing is logged unless a file is set
# file = "/tmp/termslide.log"
"#;
