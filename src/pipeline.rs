//! Curve rendering pipeline.
//!
//! Fold → walk → bound → rasterize → colorize → write, driven by a
//! [`DragonConfig`].

use serde::Serialize;

use crate::config::{DragonConfig, RenderMode};
use crate::curve::{Bounds, Path, PathWalker, TurnSequence};
use crate::error::{DragonError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{colorize, colorize_binary, write_png, Grid, PixelBuffer, Stroke};
use crate::types::Point;

/// Folds past this produce images large enough to be worth a warning.
const LARGE_RENDER_ITERATIONS: u32 = 24;

/// Summary of a traced curve and the image it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurveStats {
    pub iterations: u32,
    pub turns: usize,
    pub points: usize,
    pub bounds: Bounds,
    /// Last point of the walk, before translation.
    pub end: Point,
    pub grid_width: usize,
    pub grid_height: usize,
    pub image_width: usize,
    pub image_height: usize,
}

/// A traced curve: its turns and the walked polyline.
#[derive(Debug, Clone)]
pub struct Curve {
    pub sequence: TurnSequence,
    pub path: Path,
}

/// Finished pixels plus the stats that produced them.
#[derive(Debug, Clone)]
pub struct Rendering {
    pub stats: CurveStats,
    pub pixels: PixelBuffer,
}

/// Fold the seed and walk the result.
pub fn trace(config: &DragonConfig) -> Result<Curve> {
    config.validate()?;

    let sequence = TurnSequence::generate(config.iterations, &config.seed_turns()?)?;
    let path = PathWalker::new().walk(&sequence);

    Ok(Curve { sequence, path })
}

/// Grid dimensions for `bounds` with every step stretched to `stretch` cells.
pub fn grid_size(bounds: &Bounds, stretch: u32) -> Result<(usize, usize)> {
    let extent = |span: i64| {
        span.checked_mul(stretch as i64)
            .and_then(|n| n.checked_add(1))
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| DragonError::Render {
                message: format!("Grid extent {} x {} does not fit in memory", span, stretch),
                help: Some("Lower iterations or stretch".to_string()),
            })
    };

    let width = extent(bounds.max_x - bounds.min_x)?;
    let height = extent(bounds.max_y - bounds.min_y)?;

    // the grid is one allocation and each side becomes a u32 image dimension
    let fits_image = u32::try_from(width).is_ok() && u32::try_from(height).is_ok();
    if width.checked_mul(height).is_none() || !fits_image {
        return Err(DragonError::Render {
            message: format!("Grid of {} x {} cells does not fit in memory", width, height),
            help: Some("Lower iterations or stretch".to_string()),
        });
    }

    Ok((width, height))
}

/// Draw every step of `path` onto a fresh grid sized to fit it.
///
/// The path is shifted so its bounding box starts at the origin, then
/// scaled by `stretch`.
pub fn rasterize(path: &Path, stretch: u32, stroke: Stroke) -> Result<Grid> {
    let bounds = path.bounds();
    let (width, height) = grid_size(&bounds, stretch)?;
    let adjustment = bounds.origin_offset();
    let stretch = stretch as i64;

    let mut grid = Grid::new(width, height);
    for (a, b) in path.segments() {
        grid.draw_line((a + adjustment) * stretch, (b + adjustment) * stretch, stroke);
    }

    Ok(grid)
}

/// Stats for a traced curve without rasterizing it.
pub fn stats(config: &DragonConfig, curve: &Curve) -> Result<CurveStats> {
    let bounds = curve.path.bounds();
    let (grid_width, grid_height) = grid_size(&bounds, config.stretch)?;

    Ok(CurveStats {
        iterations: config.iterations,
        turns: curve.sequence.len(),
        points: curve.path.len(),
        bounds,
        end: curve.path.points().last().copied().unwrap_or_default(),
        grid_width,
        grid_height,
        // grid x runs down the image, y across it
        image_width: grid_height,
        image_height: grid_width,
    })
}

/// Render a config to pixels.
pub fn render(config: &DragonConfig) -> Result<Rendering> {
    render_with(config, &Printer::quiet())
}

fn render_with(config: &DragonConfig, printer: &Printer) -> Result<Rendering> {
    let curve = trace(config)?;

    if config.iterations > LARGE_RENDER_ITERATIONS {
        printer.warning(
            "Large",
            &format!(
                "{} may need several GB of memory",
                plural(config.iterations as usize, "fold", "folds")
            ),
        );
    }

    let stats = stats(config, &curve)?;
    printer.status(
        "Generating",
        &format!(
            "{} ({})",
            plural(config.iterations as usize, "fold", "folds"),
            plural(stats.turns, "turn", "turns")
        ),
    );

    let b = &stats.bounds;
    printer.info(
        "Bounds",
        &format!("x {}..{}, y {}..{}", b.min_x, b.max_x, b.min_y, b.max_y),
    );

    printer.status(
        "Rasterizing",
        &format!(
            "{}x{} grid {}",
            stats.grid_width,
            stats.grid_height,
            printer.dim(&format!("(stretch {})", config.stretch))
        ),
    );
    let grid = rasterize(&curve.path, config.stretch, config.effective_stroke())?;

    let colour = config.effective_colour();
    let background = config.effective_background();
    let pixels = match config.mode {
        RenderMode::Gradient => colorize(&grid, colour, background),
        RenderMode::Binary => colorize_binary(&grid.binarize(), colour, background),
    };

    Ok(Rendering { stats, pixels })
}

/// Render a config and write the PNG to `config.output`.
pub fn run(config: &DragonConfig, printer: &Printer) -> Result<CurveStats> {
    let rendering = render_with(config, printer)?;

    printer.status("Writing", &display_path(&config.output));
    write_png(&rendering.pixels, &config.output)?;

    let stats = rendering.stats;
    printer.status(
        "Finished",
        &format!("{}x{} image", stats.image_width, stats.image_height),
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn config(iterations: u32) -> DragonConfig {
        DragonConfig {
            iterations,
            ..Default::default()
        }
    }

    #[test]
    fn test_trace_single_fold() {
        let curve = trace(&config(1)).unwrap();
        assert_eq!(curve.sequence.bits(), vec![1, 1, 0]);
        assert_eq!(curve.path.len(), 5);
    }

    #[test]
    fn test_trace_rejects_invalid_config() {
        let bad = DragonConfig {
            stretch: 0,
            ..Default::default()
        };
        assert!(trace(&bad).is_err());
    }

    #[test]
    fn test_rasterize_single_fold() {
        let curve = trace(&config(1)).unwrap();
        let grid = rasterize(&curve.path, 1, Stroke::Mark).unwrap();

        assert_eq!((grid.width(), grid.height()), (2, 3));
        assert_eq!(grid.coverage(), 5);
        assert_eq!(grid.get(1, 2), Some(0));
    }

    #[test]
    fn test_rasterize_stretched_fills_gaps() {
        let curve = trace(&config(1)).unwrap();
        let grid = rasterize(&curve.path, 2, Stroke::Mark).unwrap();

        assert_eq!((grid.width(), grid.height()), (3, 5));
        // (0,0)-(1,0)-(1,1)-(0,1)-(0,2) doubled: 4 unit steps of 3 cells, 3 shared corners
        assert_eq!(grid.coverage(), 9);
        assert_eq!(grid.get(1, 0), Some(1));
        assert_eq!(grid.get(2, 1), Some(1));
    }

    #[test]
    fn test_rasterize_accumulates_shared_corners() {
        let curve = trace(&config(1)).unwrap();
        let grid = rasterize(&curve.path, 1, Stroke::Add(1)).unwrap();

        // endpoints touched once, interior corners twice
        assert_eq!(grid.get(0, 0), Some(1));
        assert_eq!(grid.get(1, 0), Some(2));
        assert_eq!(grid.get(0, 2), Some(1));
    }

    #[test]
    fn test_rasterize_translates_negative_bounds() {
        let curve = trace(&config(8)).unwrap();
        let bounds = curve.path.bounds();
        let grid = rasterize(&curve.path, 1, Stroke::Mark).unwrap();

        assert_eq!(grid.width() as i64, bounds.width());
        assert_eq!(grid.height() as i64, bounds.height());
        // the walk's starting point lands at the offset origin
        let origin = bounds.origin_offset();
        assert_eq!(grid.get(origin.x as usize, origin.y as usize), Some(1));
    }

    #[test]
    fn test_grid_size_overflow_is_an_error() {
        let cfg = DragonConfig {
            iterations: 1,
            stretch: u32::MAX,
            ..Default::default()
        };

        let result = render(&cfg);
        assert!(matches!(result, Err(DragonError::Render { .. })));

        let curve = trace(&cfg).unwrap();
        assert!(stats(&cfg, &curve).is_err());
        assert!(rasterize(&curve.path, u32::MAX, Stroke::Mark).is_err());
    }

    #[test]
    fn test_grid_size_limits() {
        let bounds = Bounds {
            min_x: 0,
            max_x: 1,
            min_y: -1,
            max_y: 1,
        };
        assert_eq!(grid_size(&bounds, 3).unwrap(), (4, 7));

        // one side past u32::MAX cannot become an image dimension
        let wide = Bounds {
            min_x: 0,
            max_x: u32::MAX as i64,
            min_y: 0,
            max_y: 0,
        };
        assert!(grid_size(&wide, 1).is_err());
    }

    #[test]
    fn test_invalid_config_fails_before_rendering() {
        let cfg = DragonConfig {
            iterations: 40,
            ..Default::default()
        };
        assert!(matches!(
            run(&cfg, &Printer::quiet()),
            Err(DragonError::Config { .. })
        ));
    }

    #[test]
    fn test_render_single_fold_pixels() {
        let rendering = render(&config(1)).unwrap();
        let pixels = &rendering.pixels;

        assert_eq!((pixels.width(), pixels.height()), (3, 2));
        let first = Colour::rgb(29, 47, 60);
        let second = Colour::rgb(73, 118, 150);
        assert_eq!(
            pixels.pixels(),
            &[
                vec![first, first, first],
                vec![second, second, Colour::SLATE],
            ]
        );
    }

    #[test]
    fn test_render_binary_mode() {
        let cfg = DragonConfig {
            iterations: 1,
            mode: RenderMode::Binary,
            ..Default::default()
        };
        let pixels = render(&cfg).unwrap().pixels;

        assert_eq!(pixels.get(0, 0), Some(Colour::INK));
        assert_eq!(pixels.get(2, 1), Some(Colour::PAPER));
    }

    #[test]
    fn test_stats() {
        let cfg = config(1);
        let curve = trace(&cfg).unwrap();
        let stats = stats(&cfg, &curve).unwrap();

        assert_eq!(
            stats,
            CurveStats {
                iterations: 1,
                turns: 3,
                points: 5,
                bounds: Bounds {
                    min_x: 0,
                    max_x: 1,
                    min_y: 0,
                    max_y: 2,
                },
                end: Point::new(0, 2),
                grid_width: 2,
                grid_height: 3,
                image_width: 3,
                image_height: 2,
            }
        );
    }

    #[test]
    fn test_run_writes_png() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("dragon.png");
        let cfg = DragonConfig {
            iterations: 10,
            output: output.clone(),
            ..Default::default()
        };

        let stats = run(&cfg, &Printer::quiet()).unwrap();

        let img = image::open(&output).unwrap().to_rgb8();
        assert_eq!(img.width() as usize, stats.image_width);
        assert_eq!(img.height() as usize, stats.image_height);
        assert_eq!(stats.turns, 2047);
    }
}
