//! Configuration file handling for glyphcast.
//!
//! Loads configuration from `<config dir>/glyphcast/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{
    CharSet, Ramp, RenderMode, RenderOptions, SampleFilter, DEFAULT_ASPECT_RATIO,
    DEFAULT_OUTPUT_WIDTH, DEFAULT_THRESHOLD,
};
use crate::renderer::OutputFormat;

/// Template written by `glyphcast config init`.
pub const DEFAULT_CONFIG: &str = r#"# glyphcast configuration

[render]
# classic, color, braille, edges, floyd, bayer, atkinson
mode = "classic"
# Output width in characters
width = 100
# standard, detailed, simple, blocks, dots, binary, tech, custom
charset = "standard"
# Glyphs for the custom charset, darkest first
ramp = ""
# Reverse the ramp / raise braille dots for bright pixels
invert = false
# Braille dot and edge magnitude threshold (0-255)
threshold = 128
# Character width divided by character height
aspect_ratio = 0.5
# nearest or area
filter = "nearest"

[output]
# plain, ansi, html
format = "plain"
"#;

/// Configuration file structure for glyphcast.
/// Loaded from the user config dir (or custom path via --config).
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    pub mode: RenderMode,
    pub width: u32,
    pub charset: CharSet,
    pub ramp: String,
    pub invert: bool,
    pub threshold: u8,
    pub aspect_ratio: f32,
    pub filter: SampleFilter,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::default(),
            width: DEFAULT_OUTPUT_WIDTH,
            charset: CharSet::default(),
            ramp: String::new(),
            invert: false,
            threshold: DEFAULT_THRESHOLD,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            filter: SampleFilter::default(),
        }
    }
}

impl RenderConfig {
    /// The ramp this config selects.
    ///
    /// A non-empty `ramp` string wins over `charset`.
    pub fn ramp(&self) -> Ramp {
        if !self.ramp.is_empty() {
            Ramp::custom(&self.ramp)
        } else {
            Ramp::named(self.charset)
        }
    }

    pub fn to_options(&self) -> RenderOptions {
        RenderOptions {
            output_width: self.width,
            ramp: self.ramp(),
            invert: self.invert,
            threshold: self.threshold,
            aspect_ratio: self.aspect_ratio,
            filter: self.filter,
        }
    }
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
            let config = Self::parse(&content).map_err(|e| ConfigError::Parse {
                path: path.clone(),
                source: e,
            })?;
            log::info!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("glyphcast").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/glyphcast/config.toml")
        })
}
