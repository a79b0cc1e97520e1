//! Read-only query surface of a game.
//!
//! Strategies, players, and views only ever see a game through `GameView`.
//! Implementors supply the board, the side length, and the turn state; every
//! derived query (legality, captures, scores, winner) has a default built on
//! the capture resolver.
//!
//! ## Implementation Notes
//!
//! - `lattice` must describe the live board; `board` returns an owned snapshot
//! - All queries are pure: none may change what later queries return

use serde::{Deserialize, Serialize};

use super::capture::{self, Captures};
use super::turn::{Phase, TurnState};
use crate::board::{Coordinate, Lattice};
use crate::core::{Cell, Color, ColorMap, GameError, Result};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// One color has strictly more discs.
    Winner(Color),
    /// Equal disc counts.
    Draw,
}

impl Outcome {
    /// Compare disc counts.
    #[must_use]
    pub fn from_scores(scores: &ColorMap<usize>) -> Self {
        let (black, white) = (scores[Color::Black], scores[Color::White]);
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Outcome::Winner(Color::Black),
            std::cmp::Ordering::Less => Outcome::Winner(Color::White),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Check if a color won.
    #[must_use]
    pub fn is_winner(&self, color: Color) -> bool {
        matches!(self, Outcome::Winner(c) if *c == color)
    }
}

/// Read-only view of a game.
pub trait GameView {
    type Coord: Coordinate;

    /// Board size the game was built with.
    fn side_length(&self) -> usize;

    /// The live board.
    fn lattice(&self) -> &Lattice<Self::Coord>;

    /// Current turn bookkeeping.
    fn turn_state(&self) -> TurnState;

    // === Convenience Methods ===

    /// Owned snapshot of the board. Later moves never show up in it.
    fn board(&self) -> Lattice<Self::Coord> {
        self.lattice().clone()
    }

    /// Content of `at`, or `None` if `at` is not on the board.
    fn cell(&self, at: Self::Coord) -> Option<Cell> {
        self.lattice().get(at)
    }

    /// Color on turn. Frozen at its last value once the game is over.
    fn active_player(&self) -> Color {
        self.turn_state().active()
    }

    fn phase(&self) -> Phase {
        self.turn_state().phase()
    }

    fn is_over(&self) -> bool {
        self.turn_state().is_over()
    }

    /// Discs `player` would flip by placing at `at`.
    fn captures_for(&self, at: Self::Coord, player: Color) -> Captures<Self::Coord> {
        capture::captures(self.lattice(), at, player)
    }

    /// Discs the active player would flip by placing at `at`.
    fn captures(&self, at: Self::Coord) -> Captures<Self::Coord> {
        self.captures_for(at, self.active_player())
    }

    /// Whether the active player may place at `at`: on the board, empty, and capturing.
    fn is_legal_move(&self, at: Self::Coord) -> bool {
        capture::is_capturing(self.lattice(), at, self.active_player())
    }

    /// Every legal placement for `player`, row-major.
    fn legal_moves_for(&self, player: Color) -> Vec<Self::Coord> {
        let lattice = self.lattice();
        lattice
            .coords()
            .filter(|&at| capture::is_capturing(lattice, at, player))
            .collect()
    }

    /// Every legal placement for the active player, row-major.
    fn legal_moves(&self) -> Vec<Self::Coord> {
        self.legal_moves_for(self.active_player())
    }

    /// Whether the active player has any legal placement.
    fn legal_move_exists(&self) -> bool {
        let lattice = self.lattice();
        let player = self.active_player();
        lattice
            .coords()
            .any(|at| capture::is_capturing(lattice, at, player))
    }

    /// Number of discs of `color`. Valid in any phase.
    fn score(&self, color: Color) -> usize {
        self.lattice().discs(color)
    }

    fn scores(&self) -> ColorMap<usize> {
        ColorMap::new(|color| self.score(color))
    }

    /// Winner by disc count. Only defined once the game is over.
    fn winner(&self) -> Result<Outcome> {
        if !self.is_over() {
            return Err(GameError::GameInProgress);
        }
        Ok(Outcome::from_scores(&self.scores()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_scores() {
        let mut scores = ColorMap::with_value(10);
        assert_eq!(Outcome::from_scores(&scores), Outcome::Draw);

        scores[Color::Black] = 11;
        assert_eq!(Outcome::from_scores(&scores), Outcome::Winner(Color::Black));

        scores[Color::White] = 12;
        assert_eq!(Outcome::from_scores(&scores), Outcome::Winner(Color::White));
    }

    #[test]
    fn test_outcome_is_winner() {
        let result = Outcome::Winner(Color::White);
        assert!(result.is_winner(Color::White));
        assert!(!result.is_winner(Color::Black));
        assert!(!Outcome::Draw.is_winner(Color::Black));
    }
}
