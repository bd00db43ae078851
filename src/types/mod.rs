//! Core value types for dragon.
//!
//! - `Vector2` / `Point` - grid coordinates and steps
//! - `Direction` - the four axis headings with a turn table
//! - `Colour` - RGB colour values

mod colour;
mod direction;
mod vector;

pub use colour::Colour;
pub use direction::Direction;
pub use vector::{Point, Vector2};
