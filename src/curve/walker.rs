//! Turtle walk from a turn sequence to grid points.

use serde::Serialize;

use super::sequence::{Turn, TurnSequence};
use crate::types::{Direction, Point};

/// Axis-aligned bounding box of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl Bounds {
    /// Number of columns covered (inclusive).
    pub fn width(&self) -> i64 {
        self.max_x - self.min_x + 1
    }

    /// Number of rows covered (inclusive).
    pub fn height(&self) -> i64 {
        self.max_y - self.min_y + 1
    }

    /// Offset that moves the box's minimum corner to the origin.
    pub fn origin_offset(&self) -> Point {
        Point::new(-self.min_x, -self.min_y)
    }
}

/// Ordered polyline of the walked curve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive point pairs, one per unit step.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Bounding box over all points.
    ///
    /// A walked path always has at least two points.
    pub fn bounds(&self) -> Bounds {
        let first = self.points.first().copied().unwrap_or_default();
        self.points.iter().fold(
            Bounds {
                min_x: first.x,
                max_x: first.x,
                min_y: first.y,
                max_y: first.y,
            },
            |b, p| Bounds {
                min_x: b.min_x.min(p.x),
                max_x: b.max_x.max(p.x),
                min_y: b.min_y.min(p.y),
                max_y: b.max_y.max(p.y),
            },
        )
    }
}

/// Walks a turn sequence from the origin, initially facing east.
#[derive(Debug, Clone)]
pub struct PathWalker {
    position: Point,
    direction: Direction,
}

impl Default for PathWalker {
    fn default() -> Self {
        Self::new()
    }
}

impl PathWalker {
    pub fn new() -> Self {
        Self {
            position: Point::default(),
            direction: Direction::East,
        }
    }

    /// Start from a different point and heading.
    pub fn starting_at(position: Point, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Take the first step, then one turn-and-step per symbol.
    pub fn walk(&self, sequence: &TurnSequence) -> Path {
        let mut points = Vec::with_capacity(sequence.len() + 2);
        let mut heading = self.direction;
        let mut at = self.position + heading.vector();

        points.push(self.position);
        points.push(at);

        for turn in sequence.iter() {
            heading = match turn {
                Turn::Left => heading.left(),
                Turn::Right => heading.right(),
            };
            at = at + heading.vector();
            points.push(at);
        }

        Path { points }
    }
}
