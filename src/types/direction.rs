//! Axis-aligned headings for the path walker.

use super::vector::Point;

/// One of the four grid headings.
///
/// Turning is a table lookup, so a heading can never drift off-axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    East,
    North,
    West,
    South,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    /// Heading after a quarter turn counter-clockwise.
    pub fn left(self) -> Self {
        match self {
            Direction::East => Direction::North,
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
        }
    }

    /// Heading after a quarter turn clockwise.
    pub fn right(self) -> Self {
        match self {
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
            Direction::North => Direction::East,
        }
    }

    /// Unit step for this heading.
    pub fn vector(self) -> Point {
        match self {
            Direction::East => Point::new(1, 0),
            Direction::North => Point::new(0, 1),
            Direction::West => Point::new(-1, 0),
            Direction::South => Point::new(0, -1),
        }
    }

    /// Heading for a unit step, or `None` if `v` is not an axis-aligned unit vector.
    pub fn from_vector(v: Point) -> Option<Self> {
        match (v.x, v.y) {
            (1, 0) => Some(Direction::East),
            (0, 1) => Some(Direction::North),
            (-1, 0) => Some(Direction::West),
            (0, -1) => Some(Direction::South),
            _ => None,
        }
    }
}
