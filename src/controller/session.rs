//! A running game between two players.
//!
//! `Session` is the controller: it owns the engine, asks the active player
//! for an action, forwards that action to the engine, and delivers the
//! resulting events to every registered listener.
//!
//! ## Lifecycle
//!
//! A session is `NotStarted` until [`Session::start`], which announces the
//! first player with `GameInitialized`. Every action before that fails with
//! `NotStarted`. After the engine reports game over, every action fails with
//! `GameConcluded`.

use tracing::{debug, info, instrument, warn};

use super::player::{Player, PlayerAction};
use crate::board::{Coordinate, Geometry};
use crate::core::{Color, ColorMap, GameError, GameEvent, GameListener, Result};
use crate::rules::{Captures, GameView, Outcome, Phase, Reversi};

type BoxedPlayer<G> = Box<dyn Player<<G as Geometry>::Coord>>;

/// Controller for one game.
pub struct Session<G: Geometry> {
    game: Reversi<G>,
    players: ColorMap<BoxedPlayer<G>>,
    listeners: Vec<Box<dyn GameListener>>,
    started: bool,
    turns: usize,
}

impl<G: Geometry> Session<G> {
    /// Seat `black` and `white` at `game`.
    ///
    /// Fails with `InvalidConfiguration` if a player's color does not match its seat.
    pub fn new(
        game: Reversi<G>,
        black: impl Player<G::Coord> + 'static,
        white: impl Player<G::Coord> + 'static,
    ) -> Result<Self> {
        for (seat, player) in [(Color::Black, black.color()), (Color::White, white.color())] {
            if seat != player {
                return Err(GameError::InvalidConfiguration(format!(
                    "{player} player seated as {seat}"
                )));
            }
        }

        let black: BoxedPlayer<G> = Box::new(black);
        let white: BoxedPlayer<G> = Box::new(white);
        Ok(Self {
            game,
            players: ColorMap::from_pair(black, white),
            listeners: Vec::new(),
            started: false,
            turns: 0,
        })
    }

    /// Register a listener. It receives every event from now on.
    pub fn add_listener(&mut self, listener: impl GameListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Read access to the engine.
    #[must_use]
    pub fn game(&self) -> &Reversi<G> {
        &self.game
    }

    /// `NotStarted` before `start`, then the engine's phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.started {
            self.game.phase()
        } else {
            Phase::NotStarted
        }
    }

    /// Turns played so far, passes included.
    #[must_use]
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Begin play and announce who moves first.
    pub fn start(&mut self) -> Result<()> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }

        self.started = true;
        let first = self.game.active_player();
        info!(topology = %G::TOPOLOGY, side_length = self.game.side_length(), %first, "session started");
        self.broadcast(&[GameEvent::GameInitialized(first)]);
        Ok(())
    }

    /// The active player places at (`row`, `col`).
    pub fn move_chosen(&mut self, row: i32, col: i32) -> Result<Captures<G::Coord>> {
        let active = self.game.active_player();
        self.place(active, G::Coord::new(col, row))
    }

    /// The active player passes.
    pub fn pass_chosen(&mut self) -> Result<()> {
        let active = self.game.active_player();
        self.pass(active)
    }

    /// Carry out `action` on behalf of `player`.
    pub fn submit(&mut self, player: Color, action: PlayerAction<G::Coord>) -> Result<()> {
        match action {
            PlayerAction::Move(at) => self.place(player, at).map(|_| ()),
            PlayerAction::Pass => self.pass(player),
        }
    }

    /// Ask the active player for an action and carry it out.
    ///
    /// Returns the action taken. A rejected action is returned as an error
    /// and the turn stays with the same player.
    #[instrument(skip(self), fields(turn = self.turns))]
    pub fn play_turn(&mut self) -> Result<PlayerAction<G::Coord>> {
        self.ensure_running()?;

        let active = self.game.active_player();
        let action = self.players[active].take_turn(&self.game)?;
        debug!(%active, ?action, "player chose");

        self.submit(active, action)?;
        Ok(action)
    }

    /// Play until the game ends or `max_turns` turns have been played.
    ///
    /// Starts the session if needed. Fails with `GameInProgress` if the turn
    /// limit is reached first.
    pub fn run(&mut self, max_turns: usize) -> Result<Outcome> {
        if !self.started {
            self.start()?;
        }

        while !self.game.is_over() && self.turns < max_turns {
            self.play_turn()?;
        }

        let outcome = self.game.winner()?;
        info!(?outcome, turns = self.turns, scores = ?self.game.scores(), "game over");
        Ok(outcome)
    }

    fn place(&mut self, player: Color, at: G::Coord) -> Result<Captures<G::Coord>> {
        self.ensure_running()?;

        match self.game.apply_move(player, at) {
            Ok((flipped, events)) => {
                self.turns += 1;
                self.broadcast(&events);
                Ok(flipped)
            }
            Err(err) => {
                warn!(%player, %at, %err, "move rejected");
                Err(err)
            }
        }
    }

    fn pass(&mut self, player: Color) -> Result<()> {
        self.ensure_running()?;

        match self.game.skip(player) {
            Ok(events) => {
                self.turns += 1;
                self.broadcast(&events);
                Ok(())
            }
            Err(err) => {
                warn!(%player, %err, "pass rejected");
                Err(err)
            }
        }
    }

    fn ensure_running(&self) -> Result<()> {
        if !self.started {
            return Err(GameError::NotStarted);
        }
        Ok(())
    }

    /// Each event goes to every listener before the next event is sent.
    fn broadcast(&mut self, events: &[GameEvent]) {
        for event in events {
            for listener in &mut self.listeners {
                crate::core::dispatch(std::slice::from_ref(event), listener.as_mut());
            }
        }
    }
}

impl<G: Geometry> std::fmt::Debug for Session<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("game", &self.game)
            .field("listeners", &self.listeners.len())
            .field("started", &self.started)
            .field("turns", &self.turns)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::board::SquareCoord;
    use crate::controller::{AiPlayer, ScriptedPlayer};
    use crate::core::EventLog;
    use crate::rules::{HexReversi, SquareReversi};
    use crate::strategy::CaptureMost;

    fn scripted(
        black: Vec<PlayerAction<SquareCoord>>,
        white: Vec<PlayerAction<SquareCoord>>,
    ) -> Session<crate::board::Square> {
        Session::new(
            SquareReversi::new(8).unwrap(),
            ScriptedPlayer::new(Color::Black, black),
            ScriptedPlayer::new(Color::White, white),
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_mismatched_seats() {
        let result = Session::new(
            SquareReversi::new(8).unwrap(),
            ScriptedPlayer::<SquareCoord>::new(Color::White, []),
            ScriptedPlayer::new(Color::White, []),
        );
        assert!(matches!(result, Err(GameError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_actions_before_start() {
        let mut session = scripted(vec![], vec![]);
        assert_eq!(session.phase(), Phase::NotStarted);
        assert_eq!(session.move_chosen(2, 4), Err(GameError::NotStarted));
        assert_eq!(session.pass_chosen(), Err(GameError::NotStarted));
        assert_eq!(session.play_turn(), Err(GameError::NotStarted));

        session.start().unwrap();
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.start(), Err(GameError::AlreadyStarted));
        assert_eq!(session.phase(), Phase::Playing);
    }

    #[test]
    fn test_events_reach_listeners_in_order() {
        let log = Rc::new(RefCell::new(EventLog::new()));
        let mut session = scripted(vec![], vec![]);
        session.add_listener(Rc::clone(&log));

        session.start().unwrap();
        session.move_chosen(2, 4).unwrap();
        session.pass_chosen().unwrap();
        session.pass_chosen().unwrap();

        assert_eq!(
            log.borrow().events,
            vec![
                GameEvent::GameInitialized(Color::Black),
                GameEvent::TurnChanged(Color::White),
                GameEvent::BoardChanged,
                GameEvent::TurnChanged(Color::Black),
                GameEvent::BoardChanged,
                GameEvent::BoardChanged,
                GameEvent::GameOver,
            ]
        );
        assert_eq!(session.phase(), Phase::Over);
        assert_eq!(session.turns(), 3);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let log = Rc::new(RefCell::new(EventLog::new()));
        let mut session = scripted(vec![], vec![]);
        session.add_listener(Rc::clone(&log));
        session.start().unwrap();
        log.borrow_mut().take();

        assert_eq!(
            session.move_chosen(0, 0),
            Err(GameError::IllegalMove { col: 0, row: 0 })
        );
        assert_eq!(
            session.submit(Color::White, PlayerAction::Pass),
            Err(GameError::WrongTurn {
                player: Color::White,
                active: Color::Black
            })
        );
        assert!(log.borrow().events.is_empty());
        assert_eq!(session.game().active_player(), Color::Black);
        assert_eq!(session.turns(), 0);
    }

    #[test]
    fn test_play_turn_uses_active_player() {
        let mut session = scripted(
            vec![PlayerAction::Move(SquareCoord::new(4, 2))],
            vec![PlayerAction::Pass],
        );
        session.start().unwrap();

        assert_eq!(
            session.play_turn().unwrap(),
            PlayerAction::Move(SquareCoord::new(4, 2))
        );
        assert_eq!(session.game().score(Color::Black), 4);
        assert_eq!(session.play_turn().unwrap(), PlayerAction::Pass);
        assert_eq!(session.game().active_player(), Color::Black);
    }

    #[test]
    fn test_run_ai_to_completion() {
        let mut session = Session::new(
            HexReversi::new(7).unwrap(),
            AiPlayer::new(Color::Black, CaptureMost),
            AiPlayer::new(Color::White, CaptureMost),
        )
        .unwrap();

        let outcome = session.run(1_000).unwrap();
        assert!(session.game().is_over());
        assert_eq!(session.game().winner(), Ok(outcome));
        assert_eq!(session.move_chosen(0, 3), Err(GameError::GameConcluded));
    }

    #[test]
    fn test_run_stops_at_turn_limit() {
        let mut session = Session::new(
            SquareReversi::new(8).unwrap(),
            AiPlayer::new(Color::Black, CaptureMost),
            AiPlayer::new(Color::White, CaptureMost),
        )
        .unwrap();

        assert_eq!(session.run(3), Err(GameError::GameInProgress));
        assert_eq!(session.turns(), 3);
    }
}
