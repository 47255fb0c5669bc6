//! Subcommand handlers and the default render command.

use std::io::Write;
use std::path::Path;

use super::args::{Args, ConfigAction};
use super::error::CliError;
use crate::ascii::{CharSet, PixelBuffer};
use crate::config::{self, Config, DEFAULT_CONFIG};
use crate::renderer;

/// Print every character set with its glyph count and glyphs.
pub fn list_charsets(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Available character sets:")?;
    for cs in CharSet::ALL {
        let glyphs: String = cs.chars().iter().collect();
        if cs == CharSet::Custom {
            writeln!(out, "  {:<9} (set glyphs with --ramp)", cs.name())?;
        } else {
            writeln!(out, "  {:<9} {:>2}  {}", cs.name(), glyphs.chars().count(), glyphs)?;
        }
    }
    Ok(())
}

/// Handle config subcommand actions.
///
/// `path` is the `--config` override; without it the default location is used.
pub fn handle_config_action(
    action: ConfigAction,
    path: Option<&Path>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(config::default_path);

    match action {
        ConfigAction::Show => {
            let config = Config::load(Some(&config_path))?;
            let render = &config.render;

            writeln!(out, "Current configuration:")?;
            writeln!(out, "  Mode: {}", render.mode.name())?;
            writeln!(out, "  Width: {}", render.width)?;
            if render.ramp.is_empty() {
                writeln!(out, "  Charset: {}", render.charset.name())?;
            } else {
                writeln!(out, "  Ramp: {:?}", render.ramp)?;
            }
            writeln!(out, "  Invert: {}", if render.invert { "yes" } else { "no" })?;
            writeln!(out, "  Threshold: {}", render.threshold)?;
            writeln!(out, "  Aspect ratio: {}", render.aspect_ratio)?;
            writeln!(out, "  Filter: {:?}", render.filter)?;
            writeln!(out, "  Format: {:?}", config.output.format)?;
            writeln!(out)?;

            if config_path.exists() {
                writeln!(out, "Config file: {} (exists)", config_path.display())?;
            } else {
                writeln!(out, "Config file: {} (not found)", config_path.display())?;
            }
        }
        ConfigAction::Init => {
            if config_path.exists() {
                return Err(CliError::ConfigExists(config_path));
            }

            // Create parent directories if needed
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&config_path, DEFAULT_CONFIG)?;
            log::info!("Wrote default config to {}", config_path.display());
            writeln!(out, "Created config file: {}", config_path.display())?;
        }
    }

    Ok(())
}

/// Decode an image file into an RGBA pixel buffer.
pub fn load_image(path: &Path) -> Result<PixelBuffer, CliError> {
    let img = image::open(path)
        .map_err(|source| CliError::Image {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();
    let (width, height) = img.dimensions();
    log::info!("Loaded {} ({}x{})", path.display(), width, height);

    Ok(PixelBuffer::new(width, height, img.into_raw())?)
}

/// Render the image named on the command line.
pub fn render_image(args: &Args, config: &Config, out: &mut impl Write) -> Result<(), CliError> {
    let path = args.image.as_deref().ok_or(CliError::MissingImage)?;
    let source = load_image(path)?;

    let mode = args.render_mode(config);
    let options = args.render_options(config);
    let format = args.output_format(config);

    let rendered = mode.render(&source, &options)?;
    let text = renderer::format(&rendered, format);

    match &args.output {
        Some(output) => {
            std::fs::write(output, text)?;
            log::info!("Wrote {}", output.display());
        }
        None => out.write_all(text.as_bytes())?,
    }

    Ok(())
}
