//! Error types.
//!
//! Every failure is a synchronous return value. The engine validates a whole
//! request before touching the board, so an `Err` always means nothing changed.

use super::color::Color;

/// Crate-wide result alias.
pub type Result<T, E = GameError> = std::result::Result<T, E>;

/// Errors raised by the rule engine, strategies, and session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Bad side length, mismatched topology, or an unusable rigged board.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The session has not been started yet.
    #[error("game has not started")]
    NotStarted,

    /// The session was already started.
    #[error("game has already started")]
    AlreadyStarted,

    /// The game is over; no further moves or skips are accepted.
    #[error("game has concluded")]
    GameConcluded,

    /// The winner was requested while the game is still being played.
    #[error("game is still in progress")]
    GameInProgress,

    /// A mutation was attempted by the player who is not on turn.
    #[error("it is not {player}'s turn ({active} to play)")]
    WrongTurn { player: Color, active: Color },

    /// The coordinate has no cell on this board.
    #[error("({col}, {row}) is not on the board")]
    OutOfBounds { col: i32, row: i32 },

    /// The cell is occupied or the placement captures nothing.
    #[error("move at ({col}, {row}) is not legal")]
    IllegalMove { col: i32, row: i32 },

    /// A strategy found no legal move; the player has to skip.
    #[error("{0} has no legal moves")]
    NoLegalMoves(Color),
}
