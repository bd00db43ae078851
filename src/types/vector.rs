//! Minimal 2D vector used for curve points and headings.

use std::fmt;
use std::ops::{Add, Mul, Neg};

use serde::Serialize;

/// A 2D vector with componentwise addition and scalar multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

/// A point on the integer grid the curve is walked on.
pub type Point = Vector2<i64>;

impl<T> Vector2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> Vector2<T>
where
    T: Copy + Default + PartialEq + Neg<Output = T>,
{
    /// Rotate a quarter turn counter-clockwise.
    ///
    /// Only meaningful for axis-aligned unit vectors; anything else yields
    /// a vector that is not a rotation of the input.
    pub fn rotate_left(self) -> Self {
        let zero = T::default();
        if self.x == zero {
            Self::new(-self.y, zero)
        } else {
            Self::new(zero, self.x)
        }
    }

    /// Rotate a quarter turn clockwise.
    ///
    /// Only meaningful for axis-aligned unit vectors.
    pub fn rotate_right(self) -> Self {
        let zero = T::default();
        if self.y == zero {
            Self::new(zero, -self.x)
        } else {
            Self::new(self.y, zero)
        }
    }
}

impl<T: Add<Output = T>> Add for Vector2<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Vector2<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl<T: fmt::Display> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T> From<(T, T)> for Vector2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}
