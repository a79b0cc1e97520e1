//! Core types shared by every topology: colors, cells, configuration,
//! errors, events, and the deterministic RNG.
//!
//! Nothing in here knows about coordinates or adjacency; that lives in
//! [`crate::board`].

pub mod cell;
pub mod color;
pub mod config;
pub mod error;
pub mod event;
pub mod rng;

pub use cell::Cell;
pub use color::{Color, ColorMap};
pub use config::{GameConfig, Topology};
pub use error::{GameError, Result};
pub use event::{dispatch, EventLog, Events, GameEvent, GameListener};
pub use rng::GameRng;
