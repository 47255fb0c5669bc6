//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;
mod error;

pub use args::{Args, Command, ConfigAction};
pub use commands::{handle_config_action, list_charsets, load_image, render_image};
pub use enums::{CharacterSet, Filter, Format, Mode};
pub use error::CliError;
