//! Players and the session that drives a game between them.
//!
//! - `Player`: anything that picks a `PlayerAction` for its color
//! - `AiPlayer`: a player backed by a `Strategy`
//! - `ScriptedPlayer`: replays a fixed list of actions
//! - `Session`: owns the engine, seats two players, and fans events out to listeners

pub mod player;
pub mod session;

pub use player::{AiPlayer, Player, PlayerAction, ScriptedPlayer};
pub use session::Session;
