//! Uniformly random legal move.

use super::{candidate_moves, Strategy};
use crate::board::Coordinate;
use crate::core::{Color, GameError, GameRng, Result};
use crate::rules::GameView;

/// Pick any legal move, uniformly, from a seeded generator.
///
/// Two instances built from the same seed make the same choices against the
/// same sequence of positions.
#[derive(Clone, Debug)]
pub struct AnyOpenSpace {
    rng: GameRng,
}

impl AnyOpenSpace {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl<C: Coordinate> Strategy<C> for AnyOpenSpace {
    fn choose_move(&mut self, view: &dyn GameView<Coord = C>, player: Color) -> Result<C> {
        let moves = candidate_moves(view, player)?;
        self.rng
            .choose(&moves)
            .copied()
            .ok_or(GameError::NoLegalMoves(player))
    }
}
