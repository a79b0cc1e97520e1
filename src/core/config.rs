//! Game configuration types.
//!
//! A game is configured once, at construction, by:
//! - `Topology`: which board shape and adjacency to use
//! - `side_length`: the board size (meaning depends on the topology)
//! - `first_player`: who moves first (black by default)
//!
//! The board is never resized after construction.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::{GameError, Result};

/// Board topology.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    /// Hexagon of hexagonal cells, six neighbors per cell.
    ///
    /// `side_length` is the length of the longest (middle) row and must be
    /// odd and greater than 4.
    Hex,
    /// Square grid, eight neighbors per cell.
    ///
    /// `side_length` is the number of rows and must be even and at least 4.
    Square,
}

impl Topology {
    /// Check that `side_length` is a legal board size for this topology.
    pub fn validate_side_length(self, side_length: usize) -> Result<()> {
        let ok = match self {
            Topology::Hex => side_length > 4 && side_length % 2 == 1,
            Topology::Square => side_length >= 4 && side_length % 2 == 0,
        };

        if ok {
            Ok(())
        } else {
            Err(GameError::InvalidConfiguration(format!(
                "side length {side_length} is not valid for a {self} board"
            )))
        }
    }
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Topology::Hex => write!(f, "hex"),
            Topology::Square => write!(f, "square"),
        }
    }
}

impl std::str::FromStr for Topology {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hex" | "hexagonal" => Ok(Topology::Hex),
            "square" => Ok(Topology::Square),
            other => Err(GameError::InvalidConfiguration(format!(
                "unknown topology {other:?}"
            ))),
        }
    }
}

/// Complete game configuration.
///
/// ```
/// use rust_reversi::core::{Color, GameConfig, Topology};
///
/// let config = GameConfig::new(Topology::Square, 8).with_first_player(Color::White);
/// assert!(config.validate().is_ok());
/// assert!(GameConfig::new(Topology::Square, 7).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board shape and adjacency.
    pub topology: Topology,

    /// Board size; see `Topology` for the per-topology constraints.
    pub side_length: usize,

    /// Player on turn at the start of the game.
    pub first_player: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            topology: Topology::Hex,
            side_length: 11,
            first_player: Color::Black,
        }
    }
}

impl GameConfig {
    /// Create a config with black moving first.
    pub fn new(topology: Topology, side_length: usize) -> Self {
        Self {
            topology,
            side_length,
            first_player: Color::Black,
        }
    }

    /// Set the side length.
    #[must_use]
    pub fn with_side_length(mut self, side_length: usize) -> Self {
        self.side_length = side_length;
        self
    }

    /// Set the player who moves first.
    #[must_use]
    pub fn with_first_player(mut self, color: Color) -> Self {
        self.first_player = color;
        self
    }

    /// Check the side length against the topology.
    pub fn validate(&self) -> Result<()> {
        self.topology.validate_side_length(self.side_length)
    }
}
