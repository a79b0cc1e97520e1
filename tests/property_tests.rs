//! Property tests over random legal play.
//!
//! Games are driven by a list of indices: each turn the active player takes
//! `legal_moves()[i % len]`, or skips when there is nothing legal.

use proptest::prelude::*;
use rust_reversi::{
    Color, GameError, GameView, Geometry, HexReversi, Lattice, Reversi, SquareReversi,
};

fn hex_game() -> impl Strategy<Value = (usize, Vec<usize>)> {
    (prop::sample::select(vec![5usize, 7, 9, 11]), prop::collection::vec(any::<usize>(), 0..80))
}

fn square_game() -> impl Strategy<Value = (usize, Vec<usize>)> {
    (prop::sample::select(vec![4usize, 6, 8]), prop::collection::vec(any::<usize>(), 0..80))
}

/// Play one step. Returns `false` once the game is over.
fn step<G: Geometry>(game: &mut Reversi<G>, pick: usize) -> bool {
    if game.is_over() {
        return false;
    }
    let player = game.active_player();
    let moves = game.legal_moves();
    if moves.is_empty() {
        game.skip(player).unwrap();
    } else {
        game.apply_move(player, moves[pick % moves.len()]).unwrap();
    }
    true
}

fn check_invariants<G: Geometry>(mut game: Reversi<G>, picks: Vec<usize>) -> Result<(), TestCaseError> {
    let cells = game.board().len();

    for pick in picks {
        if game.is_over() {
            break;
        }

        let player = game.active_player();
        let before: Lattice<G::Coord> = game.board();
        let before_scores = game.scores();
        let moves = game.legal_moves();

        // Every listed move captures, and nothing else does.
        for at in before.coords() {
            let listed = moves.contains(&at);
            prop_assert_eq!(listed, !game.captures(at).is_empty());
            prop_assert_eq!(listed, game.is_legal_move(at));
        }

        prop_assert_eq!(game.legal_move_exists(), !moves.is_empty());

        if moves.is_empty() {
            let skips_before = game.skips();
            game.skip(player).unwrap();
            prop_assert_eq!(game.board(), before);

            if game.is_over() {
                // Only the second consecutive skip ends the game, and the
                // player who made it stays on turn.
                prop_assert_eq!(skips_before, 1);
                prop_assert_eq!(game.active_player(), player);
            } else {
                prop_assert_eq!(game.active_player(), player.opponent());
                prop_assert_eq!(game.skips(), 1);
            }
            continue;
        }

        let at = moves[pick % moves.len()];
        let expected = game.captures(at);
        let (flipped, _) = game.apply_move(player, at).unwrap();

        // Exactly the predicted discs flip, plus the placed one.
        prop_assert_eq!(flipped.to_vec(), expected.to_vec());
        let scores = game.scores();
        prop_assert_eq!(scores[player], before_scores[player] + flipped.len() + 1);
        prop_assert_eq!(scores[player.opponent()], before_scores[player.opponent()] - flipped.len());

        // Turn alternates after a placement.
        prop_assert_eq!(game.active_player(), player.opponent());
        prop_assert_eq!(game.skips(), 0);

        // The snapshot taken before the move is untouched.
        prop_assert_eq!(before.discs(player), before_scores[player]);

        // The board never grows or shrinks.
        prop_assert_eq!(game.board().len(), cells);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_hex_invariants((size, picks) in hex_game()) {
        check_invariants(HexReversi::new(size).unwrap(), picks)?;
    }

    #[test]
    fn prop_square_invariants((size, picks) in square_game()) {
        check_invariants(SquareReversi::new(size).unwrap(), picks)?;
    }

    #[test]
    fn prop_discs_never_exceed_cells((size, picks) in hex_game()) {
        let mut game = HexReversi::new(size).unwrap();
        for pick in picks {
            if !step(&mut game, pick) {
                break;
            }
        }
        let scores = game.scores();
        prop_assert!(scores[Color::Black] + scores[Color::White] <= game.board().len());
        prop_assert_eq!(
            game.board().count(rust_reversi::Cell::Empty) + scores[Color::Black] + scores[Color::White],
            game.board().len()
        );
    }

    #[test]
    fn prop_simulation_leaves_game_alone((size, picks) in square_game()) {
        let mut game = SquareReversi::new(size).unwrap();
        for pick in &picks {
            if !step(&mut game, *pick) {
                break;
            }
        }

        let before = game.board();
        let mut sim = SquareReversi::simulate(&before, game.side_length(), game.active_player());
        for pick in picks {
            if !step(&mut sim, pick) {
                break;
            }
        }
        prop_assert_eq!(game.board(), before);
    }

    #[test]
    fn prop_finished_games_reject_everything((size, picks) in hex_game()) {
        let mut game = HexReversi::new(size).unwrap();
        for pick in picks {
            if !step(&mut game, pick) {
                break;
            }
        }
        let player = game.active_player();
        if game.skip(player).is_ok() && !game.is_over() {
            game.skip(player.opponent()).unwrap();
        }

        prop_assert!(game.is_over());
        prop_assert_eq!(game.skip(Color::Black), Err(GameError::GameConcluded));
        prop_assert_eq!(game.skip(Color::White), Err(GameError::GameConcluded));
        prop_assert!(game.winner().is_ok());
    }
}
