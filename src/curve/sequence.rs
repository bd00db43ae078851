//! Dragon curve turn sequence.
//!
//! Each fold appends a left turn and a copy of the current sequence with its
//! middle turn flipped: `S' = S ++ [L] ++ flip_middle(S)`.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::error::{DragonError, Result};

/// A single turn taken between two unit steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Symbol `0`.
    Right,
    /// Symbol `1`.
    Left,
}

impl Turn {
    /// The opposite turn.
    pub fn flipped(self) -> Self {
        match self {
            Turn::Right => Turn::Left,
            Turn::Left => Turn::Right,
        }
    }

    /// Binary symbol for this turn.
    pub fn bit(self) -> u8 {
        match self {
            Turn::Right => 0,
            Turn::Left => 1,
        }
    }
}

impl TryFrom<u8> for Turn {
    type Error = DragonError;

    fn try_from(bit: u8) -> Result<Self> {
        match bit {
            0 => Ok(Turn::Right),
            1 => Ok(Turn::Left),
            other => Err(DragonError::Parse {
                message: format!("Invalid turn symbol: {}", other),
                help: Some("Turns are 0 (right) or 1 (left)".to_string()),
            }),
        }
    }
}

/// Ordered turns of a dragon curve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnSequence {
    turns: Vec<Turn>,
}

impl TurnSequence {
    /// The seed every classic dragon starts from: a single left turn.
    pub fn default_seed() -> Vec<Turn> {
        vec![Turn::Left]
    }

    /// Fold `seed` `iterations` times.
    ///
    /// The seed must be non-empty so it has a middle turn to flip.
    pub fn generate(iterations: u32, seed: &[Turn]) -> Result<Self> {
        if seed.is_empty() {
            return Err(DragonError::Config {
                message: "Seed sequence is empty".to_string(),
                help: Some("Use at least one turn, e.g. seed: [1]".to_string()),
            });
        }

        let mut turns = seed.to_vec();
        for _ in 0..iterations {
            turns = fold(&turns);
        }

        Ok(Self { turns })
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Turn> + '_ {
        self.turns.iter().copied()
    }

    /// Turns as `0`/`1` symbols.
    pub fn bits(&self) -> Vec<u8> {
        self.iter().map(Turn::bit).collect()
    }
}

/// One fold: `current ++ [Left] ++ current-with-middle-flipped`.
fn fold(current: &[Turn]) -> Vec<Turn> {
    let mut next = Vec::with_capacity(current.len() * 2 + 1);
    next.extend_from_slice(current);
    next.push(Turn::Left);

    let mirror_start = next.len();
    next.extend_from_slice(current);

    let center = (current.len() - 1) / 2;
    next[mirror_start + center] = current[center].flipped();

    next
}

/// Parse a list of `0`/`1` symbols into turns.
pub fn turns_from_bits(bits: &[u8]) -> Result<Vec<Turn>> {
    bits.iter().map(|&b| Turn::try_from(b)).collect()
}

impl Index<usize> for TurnSequence {
    type Output = Turn;

    fn index(&self, index: usize) -> &Turn {
        &self.turns[index]
    }
}

impl From<Vec<Turn>> for TurnSequence {
    fn from(turns: Vec<Turn>) -> Self {
        Self { turns }
    }
}

impl FromStr for TurnSequence {
    type Err = DragonError;

    /// Parse a string of `0`/`1` digits, e.g. `"110"`.
    fn from_str(s: &str) -> Result<Self> {
        let turns = s
            .trim()
            .chars()
            .map(|c| match c {
                '0' => Ok(Turn::Right),
                '1' => Ok(Turn::Left),
                other => Err(DragonError::Parse {
                    message: format!("Invalid turn symbol '{}' in \"{}\"", other, s),
                    help: Some("Turn sequences contain only 0 and 1".to_string()),
                }),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { turns })
    }
}

impl fmt::Display for TurnSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for turn in &self.turns {
            write!(f, "{}", turn.bit())?;
        }
        Ok(())
    }
}
