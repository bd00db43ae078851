use clap::Args;

use super::CurveArgs;
use crate::error::{DragonError, Result};
use crate::output::Printer;
use crate::pipeline::{self, CurveStats};

/// Print curve and image dimensions as JSON
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    #[command(flatten)]
    pub curve: CurveArgs,
}

pub fn run(args: InfoArgs, printer: &Printer) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = args.curve.resolve(&cwd)?;

    let curve = pipeline::trace(&config)?;
    let stats = pipeline::stats(&config, &curve)?;
    printer.info("Traced", &format!("{} points", stats.points));

    println!("{}", to_json(&stats)?);
    Ok(())
}

fn to_json(stats: &CurveStats) -> Result<String> {
    serde_json::to_string_pretty(stats).map_err(|e| DragonError::Render {
        message: format!("Failed to serialize stats: {}", e),
        help: None,
    })
}
