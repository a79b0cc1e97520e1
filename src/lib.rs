//! # rust-reversi
//!
//! A Reversi rules engine for hexagonal and square boards, with deterministic
//! AI strategies and a small controller layer.
//!
//! ## Design Principles
//!
//! 1. **Topology-Generic**: Every rule is written once against the `Geometry`
//!    and `Coordinate` traits. Hex and square boards differ only in their
//!    coordinate type, direction table, starting discs, and rendering.
//!
//! 2. **Read-Only Views**: Strategies, players, and views see a game through
//!    `GameView`, which cannot mutate it. Trying a move means simulating it on
//!    a snapshot.
//!
//! 3. **Validate, Then Mutate**: A rejected move or skip leaves the game
//!    exactly as it was.
//!
//! ## Architecture
//!
//! - **Persistent Boards**: Boards are `im::OrdMap`s, so snapshots are O(1)
//!   and independent of the live game.
//!
//! - **Returned Events**: Engine calls return the events they caused; the
//!   `Session` controller delivers them to listeners in order.
//!
//! ## Modules
//!
//! - `core`: Colors, cells, configuration, errors, events, RNG
//! - `board`: Coordinates, geometries, and the board lattice
//! - `rules`: Capture resolution, turn state, and the `Reversi` engine
//! - `strategy`: Move-selection strategies for AI players
//! - `controller`: Players and the game session
//! - `view`: Text rendering

pub mod core;
pub mod board;
pub mod rules;
pub mod strategy;
pub mod controller;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    Cell, Color, ColorMap,
    GameConfig, Topology,
    GameError, Result,
    EventLog, GameEvent, GameListener,
    GameRng,
};

pub use crate::board::{
    Coordinate, Geometry, Lattice,
    Hex, HexCoord, HexDirection,
    Square, SquareCoord, SquareDirection,
};

pub use crate::rules::{GameView, HexReversi, Outcome, Phase, Reversi, SquareReversi};

pub use crate::strategy::{AnyOpenSpace, CaptureMost, PreferCorners, PreferEdges, Strategy};

pub use crate::controller::{AiPlayer, Player, PlayerAction, ScriptedPlayer, Session};

pub use crate::view::TextView;
