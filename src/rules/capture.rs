//! Capture resolution.
//!
//! For a placement at `at` by `player`, each of the topology's directions is
//! walked outward. A direction yields captures only if it starts with one or
//! more opponent discs and ends on a disc of `player` (the anchor). Hitting
//! an empty cell or leaving the board first yields nothing. Walks never wrap.
//!
//! Lines from one origin in distinct directions never share a cell, so the
//! per-direction results can simply be concatenated.

use smallvec::SmallVec;

use crate::board::{Coordinate, Lattice};
use crate::core::{Cell, Color};

/// Discs flipped by one move.
pub type Captures<C> = SmallVec<[C; 16]>;

/// Opponent discs captured along one direction, or `None` if the line is not anchored.
pub fn capture_line<C: Coordinate>(
    lattice: &Lattice<C>,
    at: C,
    direction: C::Direction,
    player: Color,
) -> Option<SmallVec<[C; 8]>> {
    let opponent = Cell::Disc(player.opponent());
    let mut line = SmallVec::new();
    let mut cursor = at.step(direction);

    while lattice.get(cursor) == Some(opponent) {
        line.push(cursor);
        cursor = cursor.step(direction);
    }

    match lattice.get(cursor) {
        Some(Cell::Disc(color)) if color == player && !line.is_empty() => Some(line),
        _ => None,
    }
}

/// Every disc a placement at `at` by `player` would flip.
///
/// Empty if `at` is off the board, occupied, or anchors no line; a move is
/// legal exactly when this is non-empty.
pub fn captures<C: Coordinate>(lattice: &Lattice<C>, at: C, player: Color) -> Captures<C> {
    let mut flipped = Captures::new();

    if lattice.get(at) != Some(Cell::Empty) {
        return flipped;
    }

    for &direction in C::DIRECTIONS {
        if let Some(line) = capture_line(lattice, at, direction, player) {
            flipped.extend(line);
        }
    }

    flipped
}

/// Whether a placement at `at` by `player` captures anything.
///
/// Stops at the first anchored line.
pub fn is_capturing<C: Coordinate>(lattice: &Lattice<C>, at: C, player: Color) -> bool {
    lattice.get(at) == Some(Cell::Empty)
        && C::DIRECTIONS
            .iter()
            .any(|&d| capture_line(lattice, at, d, player).is_some())
}
