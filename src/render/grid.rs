//! Accumulation grid and axis-aligned line drawing.

use crate::types::Point;

/// How a line updates the cells it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stroke {
    /// Set covered cells to 1.
    #[default]
    Mark,
    /// Add the weight to covered cells.
    Add(u32),
}

impl From<u32> for Stroke {
    /// `0` marks, any other weight accumulates.
    fn from(weight: u32) -> Self {
        match weight {
            0 => Stroke::Mark,
            n => Stroke::Add(n),
        }
    }
}

/// A `width x height` grid of stroke accumulators, indexed `(x, y)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u32>,
}

impl Grid {
    /// Create an all-zero grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Value at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Cells along `x`, each a run of `height` values over `y`.
    pub fn columns(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.cells.chunks(self.height.max(1))
    }

    /// Number of cells with a nonzero value.
    pub fn coverage(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// Draw a horizontal or vertical line, endpoints included.
    ///
    /// Diagonal segments draw nothing. Cells outside the grid are clipped.
    /// A zero-length segment is drawn once, as a vertical line.
    pub fn draw_line(&mut self, a: Point, b: Point, stroke: Stroke) {
        if a.x == b.x {
            for y in a.y.min(b.y)..=a.y.max(b.y) {
                self.apply(a.x, y, stroke);
            }
        } else if a.y == b.y {
            for x in a.x.min(b.x)..=a.x.max(b.x) {
                self.apply(x, a.y, stroke);
            }
        }
    }

    /// Boolean view: nonzero cells are set.
    pub fn binarize(&self) -> Mask {
        Mask {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(|&c| c != 0).collect(),
        }
    }

    fn apply(&mut self, x: i64, y: i64, stroke: Stroke) {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return;
        };
        let Some(i) = self.index(x, y) else {
            return;
        };

        let cell = &mut self.cells[i];
        match stroke {
            Stroke::Mark => *cell = 1,
            Stroke::Add(n) => *cell = cell.saturating_add(n),
        }
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| x * self.height + y)
    }
}

/// Which cells of a grid were touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Mask {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        (x < self.width && y < self.height).then(|| self.cells[x * self.height + y])
    }

    /// Cells along `x`, each a run of `height` flags over `y`.
    pub fn columns(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.height.max(1))
    }
}
