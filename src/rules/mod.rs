//! Game rules.
//!
//! - `capture`: line-walk capture resolution shared by both topologies
//! - `turn`: turn alternation, skip counting, and phase
//! - `engine`: the read-only `GameView` query surface
//! - `reversi`: the `Reversi<G>` engine that owns board and turn state
//!
//! The only way a game ends is two consecutive skips. A player without a
//! legal move still has to skip explicitly.

pub mod capture;
pub mod engine;
pub mod reversi;
pub mod turn;

pub use capture::Captures;
pub use engine::{GameView, Outcome};
pub use reversi::{HexReversi, Reversi, SquareReversi};
pub use turn::{Phase, TurnState};
