//! Game events and the listener contract.
//!
//! The engine does not keep a subscriber list. Each mutating call returns the
//! events it produced, in delivery order, and whoever drives the engine hands
//! them to its listeners with [`dispatch`].
//!
//! ## Delivery order
//!
//! - Successful move: board mutated, then `TurnChanged`, then `BoardChanged`.
//! - Non-terminating skip: `TurnChanged`, then `BoardChanged`.
//! - Terminating skip: `BoardChanged`, then `GameOver`.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::Color;

/// Something observable that happened to a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// The game was started; carries the color that moves first.
    GameInitialized(Color),
    /// The turn passed; carries the color now on turn.
    TurnChanged(Color),
    /// Board contents or turn state changed and views should refresh.
    BoardChanged,
    /// Two consecutive skips ended the game.
    GameOver,
}

/// Events produced by one engine call. Never more than two.
pub type Events = SmallVec<[GameEvent; 2]>;

/// Receiver of game events (views, controllers, loggers).
///
/// All methods default to no-ops so implementors only override what they use.
pub trait GameListener {
    fn on_game_initialized(&mut self, _starting: Color) {}

    fn on_turn_changed(&mut self, _active: Color) {}

    fn on_board_changed(&mut self) {}

    fn on_game_over(&mut self) {}
}

/// A shared listener, so the caller can keep a handle after registering it.
impl<L: GameListener + ?Sized> GameListener for Rc<RefCell<L>> {
    fn on_game_initialized(&mut self, starting: Color) {
        self.borrow_mut().on_game_initialized(starting);
    }

    fn on_turn_changed(&mut self, active: Color) {
        self.borrow_mut().on_turn_changed(active);
    }

    fn on_board_changed(&mut self) {
        self.borrow_mut().on_board_changed();
    }

    fn on_game_over(&mut self) {
        self.borrow_mut().on_game_over();
    }
}

/// Deliver `events` to `listener` in order.
pub fn dispatch<L: GameListener + ?Sized>(events: &[GameEvent], listener: &mut L) {
    for event in events {
        match *event {
            GameEvent::GameInitialized(color) => listener.on_game_initialized(color),
            GameEvent::TurnChanged(color) => listener.on_turn_changed(color),
            GameEvent::BoardChanged => listener.on_board_changed(),
            GameEvent::GameOver => listener.on_game_over(),
        }
    }
}

/// Listener that records every event it sees. Handy in tests and replays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    pub events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the recorded events.
    pub fn take(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl GameListener for EventLog {
    fn on_game_initialized(&mut self, starting: Color) {
        self.events.push(GameEvent::GameInitialized(starting));
    }

    fn on_turn_changed(&mut self, active: Color) {
        self.events.push(GameEvent::TurnChanged(active));
    }

    fn on_board_changed(&mut self) {
        self.events.push(GameEvent::BoardChanged);
    }

    fn on_game_over(&mut self) {
        self.events.push(GameEvent::GameOver);
    }
}
