//! Init command implementation.
//!
//! Writes a `dragon.yaml` holding the default render settings.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{DragonConfig, CONFIG_FILENAME};
use crate::error::{DragonError, Result};
use crate::output::{display_path, Printer};

/// Write a dragon.yaml with the default settings
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing dragon.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(DragonError::Config {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    // spell out the colours so they are easy to edit
    let defaults = DragonConfig::default();
    let config = DragonConfig {
        colour: Some(defaults.effective_colour()),
        background: Some(defaults.effective_background()),
        ..defaults
    };

    fs::write(&config_path, config.to_yaml()?).map_err(|e| DragonError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.status("Created", &display_path(&config_path));

    Ok(())
}
