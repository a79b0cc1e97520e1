//! Turn state: who is on turn, consecutive skips, and the game phase.

use serde::{Deserialize, Serialize};

use crate::core::{Color, GameError, Result};

/// Lifecycle phase of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for `start` (sessions only; an engine is never built in this phase).
    NotStarted,
    /// Moves and skips are accepted.
    Playing,
    /// Two consecutive skips ended the game. Read-only from here on.
    Over,
}

/// Mutable turn bookkeeping owned by one engine.
///
/// Invariants:
/// - `skips` is 0 or 1 while `Playing`, and 2 once `Over`
/// - once `Over`, nothing changes any more
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    active: Color,
    skips: u8,
    phase: Phase,
}

impl TurnState {
    /// Start of play with `first` on turn.
    #[must_use]
    pub fn new(first: Color) -> Self {
        Self {
            active: first,
            skips: 0,
            phase: Phase::Playing,
        }
    }

    #[must_use]
    pub fn active(&self) -> Color {
        self.active
    }

    #[must_use]
    pub fn skips(&self) -> u8 {
        self.skips
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    /// Reject the request unless the game is on and `player` is on turn.
    pub fn check_mover(&self, player: Color) -> Result<()> {
        match self.phase {
            Phase::NotStarted => return Err(GameError::NotStarted),
            Phase::Over => return Err(GameError::GameConcluded),
            Phase::Playing => {}
        }

        if player != self.active {
            return Err(GameError::WrongTurn {
                player,
                active: self.active,
            });
        }

        Ok(())
    }

    /// Record a placement: reset skips and pass the turn.
    pub fn record_move(&mut self) {
        debug_assert_eq!(self.phase, Phase::Playing);
        self.skips = 0;
        self.active = self.active.opponent();
    }

    /// Record a skip. Returns `true` if it ended the game.
    ///
    /// The second consecutive skip freezes the turn state; otherwise the turn passes.
    pub fn record_skip(&mut self) -> bool {
        debug_assert_eq!(self.phase, Phase::Playing);
        self.skips += 1;

        if self.skips >= 2 {
            self.phase = Phase::Over;
            true
        } else {
            self.active = self.active.opponent();
            false
        }
    }
}
