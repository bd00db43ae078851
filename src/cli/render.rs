//! Render command implementation.
//!
//! Traces the curve and writes it as a PNG.

use std::path::PathBuf;

use clap::Args;

use super::CurveArgs;
use crate::error::Result;
use crate::output::Printer;
use crate::pipeline;

/// Render the curve to a PNG
#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    #[command(flatten)]
    pub curve: CurveArgs,

    /// Output PNG path (default: output.png)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let mut config = args.curve.resolve(&cwd)?;

    if let Some(output) = args.output {
        config.output = output;
    }

    pipeline::run(&config, printer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_render_writes_output() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("small.png");

        let args = RenderArgs {
            curve: CurveArgs {
                iterations: Some(6),
                stretch: Some(3),
                ..Default::default()
            },
            output: Some(output.clone()),
        };

        run(args, &Printer::quiet()).unwrap();

        assert!(output.exists());
        let img = image::open(&output).unwrap().to_rgb8();
        assert!(img.width() > 1);
        // stretched grids are always 1 + a multiple of the stretch
        assert_eq!((img.width() - 1) % 3, 0);
        assert_eq!((img.height() - 1) % 3, 0);
    }

    #[test]
    fn test_render_missing_config_file() {
        let dir = tempdir().unwrap();
        let args = RenderArgs {
            curve: CurveArgs {
                config: Some(dir.path().join("nope.yaml")),
                ..Default::default()
            },
            output: Some(dir.path().join("out.png")),
        };

        assert!(run(args, &Printer::quiet()).is_err());
    }
}
