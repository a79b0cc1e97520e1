//! Positional strategies: prefer corners or the outer ring, else defer.
//!
//! Both are topology-agnostic. A corner is an on-board cell with exactly
//! three on-board neighbors (true of the six hex vertices and the four
//! square corners); an edge cell is any cell missing at least one neighbor.

use super::{candidate_moves, CaptureMost, Strategy};
use crate::board::{Coordinate, Lattice};
use crate::core::{Color, Result};
use crate::rules::GameView;

/// Whether `at` is a corner of the board.
#[must_use]
pub fn is_corner<C: Coordinate>(lattice: &Lattice<C>, at: C) -> bool {
    lattice.contains(at) && lattice.neighbors_in_bounds(at) == 3
}

/// Whether `at` is on the outer ring of the board (corners included).
#[must_use]
pub fn is_edge<C: Coordinate>(lattice: &Lattice<C>, at: C) -> bool {
    lattice.contains(at) && lattice.neighbors_in_bounds(at) < C::DIRECTIONS.len()
}

// =============================================================================
// Corners
// =============================================================================

/// Take a legal corner if there is one (topmost, then leftmost), otherwise
/// ask the fallback strategy.
#[derive(Clone, Debug)]
pub struct PreferCorners<F> {
    fallback: F,
}

impl<F> PreferCorners<F> {
    pub fn new(fallback: F) -> Self {
        Self { fallback }
    }
}

impl Default for PreferCorners<PreferEdges<CaptureMost>> {
    fn default() -> Self {
        Self::new(PreferEdges::default())
    }
}

impl<C: Coordinate, F: Strategy<C>> Strategy<C> for PreferCorners<F> {
    fn choose_move(&mut self, view: &dyn GameView<Coord = C>, player: Color) -> Result<C> {
        let lattice = view.lattice();
        let corner = candidate_moves(view, player)?
            .into_iter()
            .find(|&at| is_corner(lattice, at));

        match corner {
            Some(at) => Ok(at),
            None => self.fallback.choose_move(view, player),
        }
    }
}

// =============================================================================
// Edges
// =============================================================================

/// Take a legal move on the outer ring if there is one (topmost, then
/// leftmost), otherwise ask the fallback strategy.
#[derive(Clone, Debug)]
pub struct PreferEdges<F> {
    fallback: F,
}

impl<F> PreferEdges<F> {
    pub fn new(fallback: F) -> Self {
        Self { fallback }
    }
}

impl Default for PreferEdges<CaptureMost> {
    fn default() -> Self {
        Self::new(CaptureMost)
    }
}

impl<C: Coordinate, F: Strategy<C>> Strategy<C> for PreferEdges<F> {
    fn choose_move(&mut self, view: &dyn GameView<Coord = C>, player: Color) -> Result<C> {
        let lattice = view.lattice();
        let edge = candidate_moves(view, player)?
            .into_iter()
            .find(|&at| is_edge(lattice, at));

        match edge {
            Some(at) => Ok(at),
            None => self.fallback.choose_move(view, player),
        }
    }
}
