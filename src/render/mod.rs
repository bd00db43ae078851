//! Rendering module for dragon.
//!
//! This module rasterizes a walked path onto an accumulation grid, maps the
//! grid to colours, and writes the result as a PNG.

mod colorize;
mod grid;
mod png;

pub use colorize::{colorize, colorize_binary, PixelBuffer};
pub use grid::{Grid, Mask, Stroke};
pub use png::{to_image, write_png};
