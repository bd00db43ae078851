//! dragon - Heighway dragon curve renderer
//!
//! Folds a binary turn sequence, walks it into a polyline on the integer
//! grid, rasterizes the polyline and writes it out as a shaded PNG.

pub mod cli;
pub mod config;
pub mod curve;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod types;

pub use config::{DragonConfig, RenderMode, CONFIG_FILENAME};
pub use curve::{Bounds, Path, PathWalker, Turn, TurnSequence};
pub use error::{DragonError, Result};
pub use pipeline::{rasterize, render, run, trace, CurveStats, Rendering};
pub use render::{colorize, colorize_binary, write_png, Grid, Mask, PixelBuffer, Stroke};
pub use types::{Colour, Direction, Point, Vector2};
