//! CLI enum types for render mode, character set, filter and output format.

use clap::ValueEnum;

use crate::ascii;
use crate::renderer::OutputFormat;

/// Rendering algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    #[default]
    Classic,
    Color,
    Braille,
    Edges,
    Floyd,
    Bayer,
    Atkinson,
}

impl From<Mode> for ascii::RenderMode {
    fn from(m: Mode) -> Self {
        match m {
            Mode::Classic => ascii::RenderMode::Classic,
            Mode::Color => ascii::RenderMode::Color,
            Mode::Braille => ascii::RenderMode::Braille,
            Mode::Edges => ascii::RenderMode::Edges,
            Mode::Floyd => ascii::RenderMode::Floyd,
            Mode::Bayer => ascii::RenderMode::Bayer,
            Mode::Atkinson => ascii::RenderMode::Atkinson,
        }
    }
}

/// ASCII character set for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharacterSet {
    #[default]
    Standard,
    Detailed,
    Simple,
    Blocks,
    Dots,
    Binary,
    Tech,
    Custom,
}

impl From<CharacterSet> for ascii::CharSet {
    fn from(c: CharacterSet) -> Self {
        match c {
            CharacterSet::Standard => ascii::CharSet::Standard,
            CharacterSet::Detailed => ascii::CharSet::Detailed,
            CharacterSet::Simple => ascii::CharSet::Simple,
            CharacterSet::Blocks => ascii::CharSet::Blocks,
            CharacterSet::Dots => ascii::CharSet::Dots,
            CharacterSet::Binary => ascii::CharSet::Binary,
            CharacterSet::Tech => ascii::CharSet::Tech,
            CharacterSet::Custom => ascii::CharSet::Custom,
        }
    }
}

/// Resampling filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Filter {
    #[default]
    Nearest,
    Area,
}

impl From<Filter> for ascii::SampleFilter {
    fn from(f: Filter) -> Self {
        match f {
            Filter::Nearest => ascii::SampleFilter::Nearest,
            Filter::Area => ascii::SampleFilter::Area,
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Plain,
    Ansi,
    Html,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Plain => OutputFormat::Plain,
            Format::Ansi => OutputFormat::Ansi,
            Format::Html => OutputFormat::Html,
        }
    }
}
