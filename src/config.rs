//! Render configuration (dragon.yaml).
//!
//! Every field is optional; the defaults reproduce the classic 19-fold
//! dragon written to `output.png`.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::curve::{turns_from_bits, Turn};
use crate::error::{DragonError, Result};
use crate::render::Stroke;
use crate::types::Colour;

/// Config file looked up in the working directory when none is given.
pub const CONFIG_FILENAME: &str = "dragon.yaml";

/// Largest fold count accepted. The turn sequence alone has `2^(n+1) - 1`
/// entries.
pub const MAX_ITERATIONS: u32 = 30;

/// How grid cells are turned into pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Curve colour brightening from the first image row to the last.
    #[default]
    Gradient,
    /// Flat foreground on background.
    Binary,
}

/// Parameters for one curve render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DragonConfig {
    /// Number of folds applied to the seed.
    pub iterations: u32,

    /// Grid units per curve step.
    pub stretch: u32,

    /// Starting turns, `0` = right, `1` = left.
    pub seed: Vec<u8>,

    /// Line weight; `0` marks cells, anything else accumulates.
    pub stroke: u32,

    pub mode: RenderMode,

    /// Curve colour. Defaults depend on `mode`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colour: Option<Colour>,

    /// Background colour. Defaults depend on `mode`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Colour>,

    /// Output PNG path.
    pub output: PathBuf,
}

impl Default for DragonConfig {
    fn default() -> Self {
        Self {
            iterations: 19,
            stretch: 1,
            seed: vec![1],
            stroke: 0,
            mode: RenderMode::Gradient,
            colour: None,
            background: None,
            output: PathBuf::from("output.png"),
        }
    }
}

impl DragonConfig {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DragonError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // an empty file means all defaults
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| DragonError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Load `dragon.yaml` from `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| DragonError::Config {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }

    /// Check the parameters describe a drawable curve.
    pub fn validate(&self) -> Result<()> {
        if self.iterations > MAX_ITERATIONS {
            return Err(DragonError::Config {
                message: format!(
                    "iterations = {} exceeds the maximum of {}",
                    self.iterations, MAX_ITERATIONS
                ),
                help: Some("Image size doubles every two folds; try 20 or fewer".to_string()),
            });
        }

        if self.stretch == 0 {
            return Err(DragonError::Config {
                message: "stretch must be at least 1".to_string(),
                help: None,
            });
        }

        self.seed_turns().map(|_| ())
    }

    /// The seed as turns.
    pub fn seed_turns(&self) -> Result<Vec<Turn>> {
        if self.seed.is_empty() {
            return Err(DragonError::Config {
                message: "seed is empty".to_string(),
                help: Some("Use at least one turn, e.g. seed: [1]".to_string()),
            });
        }

        turns_from_bits(&self.seed)
    }

    pub fn effective_stroke(&self) -> Stroke {
        Stroke::from(self.stroke)
    }

    /// Curve colour, falling back to the mode's default.
    pub fn effective_colour(&self) -> Colour {
        self.colour.unwrap_or(match self.mode {
            RenderMode::Gradient => Colour::SKY,
            RenderMode::Binary => Colour::INK,
        })
    }

    /// Background colour, falling back to the mode's default.
    pub fn effective_background(&self) -> Colour {
        self.background.unwrap_or(match self.mode {
            RenderMode::Gradient => Colour::SLATE,
            RenderMode::Binary => Colour::PAPER,
        })
    }
}
