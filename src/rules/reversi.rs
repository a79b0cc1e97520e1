//! The Reversi rule engine.
//!
//! `Reversi<G>` owns one board and its turn state. It is generic over the
//! topology, so hex and square games share every rule and differ only in
//! their `Geometry`.
//!
//! ## Mutation
//!
//! `apply_move` and `skip` are the only mutating entry points. Each validates
//! the full request first, then mutates, then returns the events it produced.
//! A rejected request leaves the game untouched.

use std::marker::PhantomData;

use tracing::debug;

use super::capture::{self, Captures};
use super::engine::GameView;
use super::turn::TurnState;
use crate::board::{Coordinate, Geometry, Hex, Lattice, Square};
use crate::core::{Cell, Color, Events, GameConfig, GameError, GameEvent, Result};

/// Reversi on a hexagonal board.
pub type HexReversi = Reversi<Hex>;

/// Reversi on a square board.
pub type SquareReversi = Reversi<Square>;

/// A Reversi game on topology `G`.
#[derive(Clone, Debug)]
pub struct Reversi<G: Geometry> {
    lattice: Lattice<G::Coord>,
    side_length: usize,
    turn: TurnState,
    _geometry: PhantomData<G>,
}

impl<G: Geometry> Reversi<G> {
    /// New game in the canonical opening position, black to move.
    ///
    /// Fails with `InvalidConfiguration` if `side_length` is not valid for `G`.
    pub fn new(side_length: usize) -> Result<Self> {
        let lattice = G::canonical_lattice(side_length)?;
        debug!(topology = %G::TOPOLOGY, side_length, "new game");

        Ok(Self {
            lattice,
            side_length,
            turn: TurnState::new(Color::Black),
            _geometry: PhantomData,
        })
    }

    /// New game from a full configuration.
    ///
    /// The config's topology must match `G`.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        if config.topology != G::TOPOLOGY {
            return Err(GameError::InvalidConfiguration(format!(
                "config is for a {} board, engine is {}",
                config.topology,
                G::TOPOLOGY
            )));
        }

        let mut game = Self::new(config.side_length)?;
        game.turn = TurnState::new(config.first_player);
        Ok(game)
    }

    /// Adopt a pre-built board verbatim with `starting` on turn.
    ///
    /// Only checks that the board has cells; the position itself is trusted.
    /// The side length is recovered from the board's extent.
    pub fn from_lattice(lattice: Lattice<G::Coord>, starting: Color) -> Result<Self> {
        if lattice.is_empty() {
            return Err(GameError::InvalidConfiguration(
                "rigged board has no cells".to_string(),
            ));
        }

        let side_length = lattice.extent();
        debug!(topology = %G::TOPOLOGY, side_length, cells = lattice.len(), "rigged game");

        Ok(Self {
            lattice,
            side_length,
            turn: TurnState::new(starting),
            _geometry: PhantomData,
        })
    }

    /// Isolated game built from a snapshot, for trying out moves.
    ///
    /// Keeps the side length of the game the snapshot came from.
    pub fn simulate(snapshot: &Lattice<G::Coord>, side_length: usize, starting: Color) -> Self {
        Self {
            lattice: snapshot.clone(),
            side_length,
            turn: TurnState::new(starting),
            _geometry: PhantomData,
        }
    }

    /// Number of consecutive skips so far (0, 1, or 2).
    #[must_use]
    pub fn skips(&self) -> u8 {
        self.turn.skips()
    }

    /// Text rendering of the board (see [`crate::view::TextView`]).
    #[must_use]
    pub fn render(&self) -> String {
        G::render(&self.lattice, self.side_length)
    }

    /// Place a disc for `player` at `at` and flip every captured disc.
    ///
    /// Returns the flipped discs and the events `[TurnChanged, BoardChanged]`.
    pub fn apply_move(&mut self, player: Color, at: G::Coord) -> Result<(Captures<G::Coord>, Events)> {
        self.turn.check_mover(player)?;

        if !self.lattice.contains(at) {
            return Err(GameError::OutOfBounds {
                col: at.col(),
                row: at.row(),
            });
        }

        let flipped = capture::captures(&self.lattice, at, player);
        if flipped.is_empty() {
            return Err(GameError::IllegalMove {
                col: at.col(),
                row: at.row(),
            });
        }

        self.lattice.set(at, Cell::Disc(player));
        for &disc in &flipped {
            self.lattice.set(disc, Cell::Disc(player));
        }
        self.turn.record_move();

        debug!(%player, %at, flipped = flipped.len(), "move applied");

        let mut events = Events::new();
        events.push(GameEvent::TurnChanged(self.turn.active()));
        events.push(GameEvent::BoardChanged);
        Ok((flipped, events))
    }

    /// Pass the turn for `player`.
    ///
    /// The second consecutive skip ends the game and returns
    /// `[BoardChanged, GameOver]`; otherwise `[TurnChanged, BoardChanged]`.
    pub fn skip(&mut self, player: Color) -> Result<Events> {
        self.turn.check_mover(player)?;

        let mut events = Events::new();
        if self.turn.record_skip() {
            debug!(%player, "second consecutive skip, game over");
            events.push(GameEvent::BoardChanged);
            events.push(GameEvent::GameOver);
        } else {
            debug!(%player, "skip");
            events.push(GameEvent::TurnChanged(self.turn.active()));
            events.push(GameEvent::BoardChanged);
        }
        Ok(events)
    }
}

impl<G: Geometry> GameView for Reversi<G> {
    type Coord = G::Coord;

    fn side_length(&self) -> usize {
        self.side_length
    }

    fn lattice(&self) -> &Lattice<G::Coord> {
        &self.lattice
    }

    fn turn_state(&self) -> TurnState {
        self.turn
    }
}
