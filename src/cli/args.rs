//! CLI argument parsing with clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{CharacterSet, Filter, Format, Mode};
use crate::ascii::{Ramp, RenderMode, RenderOptions};
use crate::config::Config;
use crate::renderer::OutputFormat;

/// Render images as text art
#[derive(Parser, Debug)]
#[command(name = "glyphcast")]
#[command(version, about = "Render images as ASCII, braille and dithered text art", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image file to render
    pub image: Option<PathBuf>,

    /// Rendering algorithm
    #[arg(long, short)]
    pub mode: Option<Mode>,

    /// Output width in characters
    #[arg(long, short, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Character set for ramp-based modes
    #[arg(long)]
    pub charset: Option<CharacterSet>,

    /// Custom ramp glyphs, darkest first (implies --charset custom)
    #[arg(long)]
    pub ramp: Option<String>,

    /// Invert the ramp (classic) or braille dots
    #[arg(long, short)]
    pub invert: bool,

    /// Braille dot / edge magnitude threshold
    #[arg(long, short)]
    pub threshold: Option<u8>,

    /// Character aspect ratio (width / height)
    #[arg(long, short, value_parser = parse_aspect)]
    pub aspect: Option<f32>,

    /// Resampling filter
    #[arg(long)]
    pub filter: Option<Filter>,

    /// Output format
    #[arg(long, short)]
    pub format: Option<Format>,

    /// Write output to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available character sets
    ListCharsets,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

/// Parse and validate aspect ratio (finite, > 0)
fn parse_aspect(s: &str) -> Result<f32, String> {
    let aspect: f32 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if !aspect.is_finite() || aspect <= 0.0 {
        return Err(format!("Aspect ratio must be a positive number, got {}", aspect));
    }
    Ok(aspect)
}

impl Args {
    /// Render mode from flags, falling back to the config file.
    pub fn render_mode(&self, config: &Config) -> RenderMode {
        self.mode.map(Into::into).unwrap_or(config.render.mode)
    }

    /// Output format from flags, falling back to the config file.
    pub fn output_format(&self, config: &Config) -> OutputFormat {
        self.format.map(Into::into).unwrap_or(config.output.format)
    }

    /// Render options: flags override the config file, which overrides defaults.
    pub fn render_options(&self, config: &Config) -> RenderOptions {
        let mut options = config.render.to_options();

        if let Some(width) = self.width {
            options.output_width = width;
        }
        if let Some(ramp) = &self.ramp {
            options.ramp = Ramp::custom(ramp);
        } else if let Some(charset) = self.charset {
            options.ramp = Ramp::named(charset.into());
        }
        if self.invert {
            options.invert = true;
        }
        if let Some(threshold) = self.threshold {
            options.threshold = threshold;
        }
        if let Some(aspect) = self.aspect {
            options.aspect_ratio = aspect;
        }
        if let Some(filter) = self.filter {
            options.filter = filter.into();
        }

        options
    }
}
