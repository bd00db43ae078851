pub mod completions;
pub mod info;
pub mod init;
pub mod render;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{DragonConfig, RenderMode};
use crate::curve::TurnSequence;
use crate::error::Result;
use crate::types::Colour;

/// dragon - Heighway dragon curve renderer
#[derive(Parser, Debug)]
#[command(name = "dragon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress status output
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the curve to a PNG (default)
    Render(render::RenderArgs),

    /// Print curve and image dimensions as JSON
    Info(info::InfoArgs),

    /// Write a dragon.yaml with the default settings
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Render(render::RenderArgs::default())
    }
}

/// Curve parameters shared by `render` and `info`.
///
/// Flags override the config file, which overrides the defaults.
#[derive(Args, Debug, Default, Clone)]
pub struct CurveArgs {
    /// Config file (default: ./dragon.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Number of folds
    #[arg(long, short)]
    pub iterations: Option<u32>,

    /// Grid cells per curve step
    #[arg(long)]
    pub stretch: Option<u32>,

    /// Seed turns as binary digits, e.g. 1 or 110
    #[arg(long)]
    pub seed: Option<TurnSequence>,

    /// Line weight (0 marks cells, otherwise accumulates)
    #[arg(long)]
    pub stroke: Option<u32>,

    /// Colouring scheme
    #[arg(long, value_enum)]
    pub mode: Option<RenderMode>,

    /// Curve colour (#RGB or #RRGGBB)
    #[arg(long)]
    pub colour: Option<Colour>,

    /// Background colour (#RGB or #RRGGBB)
    #[arg(long)]
    pub background: Option<Colour>,
}

impl CurveArgs {
    /// Build the effective config from `base_dir`, the config file and flags.
    pub fn resolve(&self, base_dir: &std::path::Path) -> Result<DragonConfig> {
        let mut config = match &self.config {
            Some(path) => DragonConfig::load(path)?,
            None => DragonConfig::discover(base_dir)?,
        };

        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if let Some(stretch) = self.stretch {
            config.stretch = stretch;
        }
        if let Some(seed) = &self.seed {
            config.seed = seed.bits();
        }
        if let Some(stroke) = self.stroke {
            config.stroke = stroke;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if self.colour.is_some() {
            config.colour = self.colour;
        }
        if self.background.is_some() {
            config.background = self.background;
        }

        config.validate()?;
        Ok(config)
    }
}
