//! Move-selection strategies for automated players.
//!
//! Strategies are trait-based so players can be configured with any of them:
//! - `CaptureMost`: most discs flipped, ties to the topmost-then-leftmost cell
//! - `PreferCorners` / `PreferEdges`: positional preference over a fallback strategy
//! - `AnyOpenSpace`: uniformly random legal move from a seeded RNG
//!
//! A strategy only reads the game through [`GameView`]; it never mutates it.
//! Every strategy fails with `NoLegalMoves` when the player has nothing to
//! play, and the caller is expected to skip instead.

pub mod capture_most;
pub mod positional;
pub mod random;

pub use capture_most::CaptureMost;
pub use positional::{is_corner, is_edge, PreferCorners, PreferEdges};
pub use random::AnyOpenSpace;

use crate::board::Coordinate;
use crate::core::{Color, GameError, Result};
use crate::rules::GameView;

/// Chooses a move for a player.
pub trait Strategy<C: Coordinate> {
    /// Pick a legal placement for `player`, who must be on turn.
    fn choose_move(&mut self, view: &dyn GameView<Coord = C>, player: Color) -> Result<C>;
}

impl<C: Coordinate, S: Strategy<C> + ?Sized> Strategy<C> for Box<S> {
    fn choose_move(&mut self, view: &dyn GameView<Coord = C>, player: Color) -> Result<C> {
        (**self).choose_move(view, player)
    }
}

/// Legal moves for `player`, row-major, after checking it is their turn.
///
/// Shared precondition of every strategy: the game must still be on, `player`
/// must be on turn, and at least one legal move must exist.
pub fn candidate_moves<C: Coordinate>(view: &dyn GameView<Coord = C>, player: Color) -> Result<Vec<C>> {
    if view.is_over() {
        return Err(GameError::GameConcluded);
    }

    let active = view.active_player();
    if player != active {
        return Err(GameError::WrongTurn { player, active });
    }

    let moves = view.legal_moves_for(player);
    if moves.is_empty() {
        return Err(GameError::NoLegalMoves(player));
    }
    Ok(moves)
}
