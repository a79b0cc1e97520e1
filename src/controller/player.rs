//! Players: whoever decides what the active color does next.
//!
//! A player only sees the game through [`GameView`] and answers with a
//! [`PlayerAction`]. The session turns that action into an engine call.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::board::Coordinate;
use crate::core::{Color, GameError, Result};
use crate::rules::GameView;
use crate::strategy::Strategy;

/// What a player chose to do on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction<C> {
    /// Place a disc at this cell.
    Move(C),
    /// Give up the turn.
    Pass,
}

/// A participant bound to one color.
pub trait Player<C: Coordinate> {
    /// The color this player plays.
    fn color(&self) -> Color;

    /// Decide an action. Only called while this player is on turn.
    fn take_turn(&mut self, view: &dyn GameView<Coord = C>) -> Result<PlayerAction<C>>;
}

impl<C: Coordinate, P: Player<C> + ?Sized> Player<C> for Box<P> {
    fn color(&self) -> Color {
        (**self).color()
    }

    fn take_turn(&mut self, view: &dyn GameView<Coord = C>) -> Result<PlayerAction<C>> {
        (**self).take_turn(view)
    }
}

// =============================================================================
// AiPlayer
// =============================================================================

/// Player driven by a [`Strategy`]. Passes when the strategy finds no move.
#[derive(Clone, Debug)]
pub struct AiPlayer<S> {
    color: Color,
    strategy: S,
}

impl<S> AiPlayer<S> {
    pub fn new(color: Color, strategy: S) -> Self {
        Self { color, strategy }
    }
}

impl<C: Coordinate, S: Strategy<C>> Player<C> for AiPlayer<S> {
    fn color(&self) -> Color {
        self.color
    }

    fn take_turn(&mut self, view: &dyn GameView<Coord = C>) -> Result<PlayerAction<C>> {
        match self.strategy.choose_move(view, self.color) {
            Ok(at) => Ok(PlayerAction::Move(at)),
            Err(GameError::NoLegalMoves(_)) => Ok(PlayerAction::Pass),
            Err(err) => Err(err),
        }
    }
}

// =============================================================================
// ScriptedPlayer
// =============================================================================

/// Player that replays a fixed list of actions, then passes forever.
///
/// Stands in for a human at a keyboard in tests and demos.
#[derive(Clone, Debug)]
pub struct ScriptedPlayer<C> {
    color: Color,
    script: VecDeque<PlayerAction<C>>,
}

impl<C> ScriptedPlayer<C> {
    pub fn new(color: Color, script: impl IntoIterator<Item = PlayerAction<C>>) -> Self {
        Self {
            color,
            script: script.into_iter().collect(),
        }
    }

    /// Actions not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl<C: Coordinate> Player<C> for ScriptedPlayer<C> {
    fn color(&self) -> Color {
        self.color
    }

    fn take_turn(&mut self, _view: &dyn GameView<Coord = C>) -> Result<PlayerAction<C>> {
        Ok(self.script.pop_front().unwrap_or(PlayerAction::Pass))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Geometry, Square, SquareCoord};
    use crate::core::Cell;
    use crate::rules::SquareReversi;
    use crate::strategy::CaptureMost;

    #[test]
    fn test_ai_moves_when_it_can() {
        let game = SquareReversi::new(8).unwrap();
        let mut ai = AiPlayer::new(Color::Black, CaptureMost);
        assert_eq!(
            ai.take_turn(&game).unwrap(),
            PlayerAction::Move(SquareCoord::new(4, 2))
        );
    }

    #[test]
    fn test_ai_passes_without_moves() {
        let mut lattice = Square::empty_lattice(4);
        lattice.set(SquareCoord::new(1, 1), Cell::Disc(Color::White));
        let game = SquareReversi::from_lattice(lattice, Color::Black).unwrap();

        let mut ai = AiPlayer::new(Color::Black, CaptureMost);
        assert_eq!(ai.take_turn(&game).unwrap(), PlayerAction::Pass);
    }

    #[test]
    fn test_ai_surfaces_wrong_turn() {
        let game = SquareReversi::new(8).unwrap();
        let mut ai = AiPlayer::new(Color::White, CaptureMost);
        assert!(matches!(
            Player::<SquareCoord>::take_turn(&mut ai, &game),
            Err(GameError::WrongTurn { .. })
        ));
    }

    #[test]
    fn test_script_replays_then_passes() {
        let game = SquareReversi::new(8).unwrap();
        let mut human = ScriptedPlayer::new(
            Color::Black,
            [PlayerAction::Move(SquareCoord::new(4, 2)), PlayerAction::Pass],
        );

        assert_eq!(human.remaining(), 2);
        assert_eq!(
            human.take_turn(&game).unwrap(),
            PlayerAction::Move(SquareCoord::new(4, 2))
        );
        assert_eq!(human.take_turn(&game).unwrap(), PlayerAction::Pass);
        assert_eq!(human.take_turn(&game).unwrap(), PlayerAction::Pass);
        assert_eq!(human.remaining(), 0);
    }
}
