//! Errors surfaced by the command-line front end.

use std::path::PathBuf;

use crate::config::ConfigError;
use crate::error::RenderError;

/// Errors that can occur while running a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to decode image '{}': {source}", path.display())]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Render failed: {0}")]
    Render(#[from] RenderError),

    #[error("No image given. Usage: glyphcast [OPTIONS] <IMAGE>")]
    MissingImage,

    #[error("Config file already exists: {}", .0.display())]
    ConfigExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
