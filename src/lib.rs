//! glyphcast library crate.
//!
//! The rendering engine lives in [`ascii`]; [`renderer`], [`config`] and
//! [`cli`] make up the command-line front end around it.

pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod renderer;

pub use ascii::{
    render_atkinson, render_bayer, render_braille, render_classic, render_color, render_edges,
    render_floyd, CharSet, ColorCell, ColorGrid, PixelBuffer, Ramp, RenderMode, RenderOptions,
    Rendered, SampleFilter,
};
pub use error::RenderError;
