//! Capture-maximizing strategy.

use std::cmp::Reverse;

use super::{candidate_moves, Strategy};
use crate::board::Coordinate;
use crate::core::{Color, GameError, Result};
use crate::rules::GameView;

/// Pick the move that flips the most discs.
///
/// Ties go to the topmost cell, then the leftmost. Capture counts come from
/// the read-only capture resolver, so the live game is never touched.
#[derive(Clone, Copy, Debug, Default)]
pub struct CaptureMost;

impl CaptureMost {
    /// Every legal move for `player` with the number of discs it would flip, row-major.
    pub fn scored_moves<C: Coordinate>(
        view: &dyn GameView<Coord = C>,
        player: Color,
    ) -> Result<Vec<(C, usize)>> {
        Ok(candidate_moves(view, player)?
            .into_iter()
            .map(|at| (at, view.captures_for(at, player).len()))
            .collect())
    }
}

impl<C: Coordinate> Strategy<C> for CaptureMost {
    fn choose_move(&mut self, view: &dyn GameView<Coord = C>, player: Color) -> Result<C> {
        let scored = Self::scored_moves(view, player)?;

        // Coordinates order row-major, so the smallest key is the topmost,
        // leftmost move among those flipping the most discs.
        scored
            .into_iter()
            .min_by_key(|&(at, flipped)| (Reverse(flipped), at))
            .map(|(at, _)| at)
            .ok_or(GameError::NoLegalMoves(player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{HexCoord, SquareCoord};
    use crate::rules::{HexReversi, SquareReversi};

    #[test]
    fn test_hex_opening_tie_break_size_7() {
        let game = HexReversi::new(7).unwrap();
        let choice = CaptureMost.choose_move(&game, Color::Black).unwrap();
        assert_eq!(choice, HexCoord::new(4, 1));
    }

    #[test]
    fn test_hex_opening_tie_break_size_11() {
        let game = HexReversi::new(11).unwrap();
        let choice = CaptureMost.choose_move(&game, Color::Black).unwrap();
        assert_eq!(choice, HexCoord::new(6, 3));
    }

    #[test]
    fn test_square_opening_tie_break() {
        // Every opening move flips one disc; (4,2) is the topmost.
        let game = SquareReversi::new(8).unwrap();
        let choice = CaptureMost.choose_move(&game, Color::Black).unwrap();
        assert_eq!(choice, SquareCoord::new(4, 2));
    }

    #[test]
    fn test_scored_moves_opening() {
        let game = SquareReversi::new(8).unwrap();
        let scored = CaptureMost::scored_moves(&game, Color::Black).unwrap();
        assert_eq!(scored.len(), 4);
        assert!(scored.iter().all(|&(_, n)| n == 1));
    }

    #[test]
    fn test_wrong_player() {
        let game = SquareReversi::new(8).unwrap();
        assert_eq!(
            CaptureMost.choose_move(&game, Color::White),
            Err(GameError::WrongTurn {
                player: Color::White,
                active: Color::Black
            })
        );
    }
}
