//! Grid to pixel colour mapping.
//!
//! The grid's `x` axis becomes image rows and `y` becomes image columns, so
//! a `w x h` grid produces an image `h` pixels wide and `w` pixels tall.

use super::grid::{Grid, Mask};
use crate::types::Colour;

/// Share of full brightness at the first image row.
const GRADIENT_FLOOR: f64 = 0.25;

/// Brightness gained between the first and last image rows.
const GRADIENT_SPAN: f64 = 0.75;

/// A rendered image - rows of colours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Pixel rows (row-major: pixels[row][column]).
    pixels: Vec<Vec<Colour>>,

    /// Width in pixels.
    width: usize,

    /// Height in pixels.
    height: usize,
}

impl PixelBuffer {
    /// Create a pixel buffer from rows of colours.
    pub fn new(pixels: Vec<Vec<Colour>>) -> Self {
        let height = pixels.len();
        let width = pixels.first().map_or(0, |row| row.len());

        Self {
            pixels,
            width,
            height,
        }
    }

    /// Get the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get a pixel at the given position.
    pub fn get(&self, column: usize, row: usize) -> Option<Colour> {
        self.pixels.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Get a reference to the pixel rows.
    pub fn pixels(&self) -> &[Vec<Colour>] {
        &self.pixels
    }

    /// Flatten each row into `width * 3` RGB bytes.
    pub fn to_rgb_rows(&self) -> Vec<Vec<u8>> {
        self.pixels
            .iter()
            .map(|row| row.iter().flat_map(|c| c.to_rgb()).collect())
            .collect()
    }

    /// Convert to a flat row-major RGB buffer (for image output).
    pub fn to_rgb_buffer(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.width * self.height * 3);
        for row in &self.pixels {
            for colour in row {
                buffer.extend_from_slice(&colour.to_rgb());
            }
        }
        buffer
    }
}

/// Brightness multiplier for image row `row` of `rows`.
fn gradient_factor(row: usize, rows: usize) -> f64 {
    GRADIENT_SPAN * (row as f64 / rows as f64) + GRADIENT_FLOOR
}

/// Shade touched cells with `colour`, darkest at the first row and
/// brightening linearly towards the last. Untouched cells get `background`.
///
/// Stroke weights only matter as zero or nonzero.
pub fn colorize(grid: &Grid, colour: Colour, background: Colour) -> PixelBuffer {
    let rows = grid.width();
    let pixels = grid
        .columns()
        .take(rows)
        .enumerate()
        .map(|(i, cells)| {
            let shade = colour.scaled(gradient_factor(i, rows));
            cells
                .iter()
                .map(|&c| if c != 0 { shade } else { background })
                .collect()
        })
        .collect();

    PixelBuffer::new(pixels)
}

/// Two-colour rendering of a mask.
pub fn colorize_binary(mask: &Mask, foreground: Colour, background: Colour) -> PixelBuffer {
    let pixels = mask
        .columns()
        .take(mask.width())
        .map(|cells| {
            cells
                .iter()
                .map(|&set| if set { foreground } else { background })
                .collect()
        })
        .collect();

    PixelBuffer::new(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::grid::Stroke;
    use crate::types::Point;

    #[test]
    fn test_empty_grid_is_all_background() {
        let grid = Grid::new(4, 3);
        let buffer = colorize(&grid, Colour::SKY, Colour::SLATE);

        assert_eq!(buffer.width(), 3);
        assert_eq!(buffer.height(), 4);
        for row in buffer.pixels() {
            for &pixel in row {
                assert_eq!(pixel, Colour::SLATE);
            }
        }
    }

    #[test]
    fn test_gradient_by_row() {
        let mut grid = Grid::new(4, 1);
        grid.draw_line(Point::new(0, 0), Point::new(3, 0), Stroke::Mark);
        let buffer = colorize(&grid, Colour::rgb(200, 100, 40), Colour::BLACK);

        // factors: 0.25, 0.4375, 0.625, 0.8125
        assert_eq!(buffer.get(0, 0), Some(Colour::rgb(50, 25, 10)));
        assert_eq!(buffer.get(0, 1), Some(Colour::rgb(87, 43, 17)));
        assert_eq!(buffer.get(0, 2), Some(Colour::rgb(125, 62, 25)));
        assert_eq!(buffer.get(0, 3), Some(Colour::rgb(162, 81, 32)));
    }

    #[test]
    fn test_gradient_ignores_stroke_weight() {
        let mut light = Grid::new(2, 2);
        light.draw_line(Point::new(0, 0), Point::new(1, 0), Stroke::Mark);

        let mut heavy = Grid::new(2, 2);
        heavy.draw_line(Point::new(0, 0), Point::new(1, 0), Stroke::Add(9));
        heavy.draw_line(Point::new(0, 0), Point::new(1, 0), Stroke::Add(9));

        assert_eq!(
            colorize(&light, Colour::SKY, Colour::SLATE),
            colorize(&heavy, Colour::SKY, Colour::SLATE)
        );
    }

    #[test]
    fn test_grid_axes_map_to_rows_and_columns() {
        // a vertical line in grid space is a single image row
        let mut grid = Grid::new(3, 5);
        grid.draw_line(Point::new(2, 0), Point::new(2, 4), Stroke::Mark);
        let buffer = colorize(&grid, Colour::WHITE, Colour::BLACK);

        assert_eq!(buffer.width(), 5);
        assert_eq!(buffer.height(), 3);
        for column in 0..5 {
            assert_ne!(buffer.get(column, 2), Some(Colour::BLACK));
            assert_eq!(buffer.get(column, 1), Some(Colour::BLACK));
        }
    }

    #[test]
    fn test_colorize_binary() {
        let mut grid = Grid::new(2, 2);
        grid.draw_line(Point::new(0, 1), Point::new(1, 1), Stroke::Mark);
        let buffer = colorize_binary(&grid.binarize(), Colour::INK, Colour::PAPER);

        assert_eq!(buffer.get(0, 0), Some(Colour::PAPER));
        assert_eq!(buffer.get(1, 0), Some(Colour::INK));
        assert_eq!(buffer.get(0, 1), Some(Colour::PAPER));
        assert_eq!(buffer.get(1, 1), Some(Colour::INK));
    }

    #[test]
    fn test_rgb_rows() {
        let buffer = PixelBuffer::new(vec![
            vec![Colour::rgb(1, 2, 3), Colour::rgb(4, 5, 6)],
            vec![Colour::BLACK, Colour::WHITE],
        ]);

        let rows = buffer.to_rgb_rows();
        assert_eq!(rows[0], vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(rows[1], vec![0, 0, 0, 255, 255, 255]);
        assert_eq!(buffer.to_rgb_buffer().len(), 12);
    }
}
