//! The per-topology contracts: `Coordinate` and `Geometry`.
//!
//! Each topology supplies its own coordinate type with a fixed direction
//! table. Everything that walks the board (capture lines, adjacency, corner
//! detection) goes through `Coordinate::step` with one of those directions,
//! so the two topologies never share a coordinate type.

use serde::de::DeserializeOwned;
use serde::Serialize;
use smallvec::SmallVec;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use super::lattice::Lattice;
use crate::core::{Cell, Color, Result, Topology};

/// A board position for one topology.
///
/// `Ord` must be row-major (row ascending, then column ascending). Strategies
/// rely on it for the topmost-then-leftmost tie-break and the lattice relies
/// on it for iteration order.
pub trait Coordinate:
    Copy + Eq + Hash + Ord + Debug + Display + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Named step direction.
    type Direction: Copy + Eq + Debug + Send + Sync + 'static;

    /// Every direction, in the topology's canonical neighbor order.
    const DIRECTIONS: &'static [Self::Direction];

    fn new(col: i32, row: i32) -> Self;

    fn col(self) -> i32;

    fn row(self) -> i32;

    /// The adjacent position one step in `direction`. May be off the board.
    fn step(self, direction: Self::Direction) -> Self;

    /// All adjacent positions, in `DIRECTIONS` order. May include positions off the board.
    fn neighbors(self) -> SmallVec<[Self; 8]> {
        Self::DIRECTIONS.iter().map(|&d| self.step(d)).collect()
    }
}

/// A board topology: its coordinate type, board shape, starting position,
/// and text layout.
pub trait Geometry: Copy + Debug + Default + Send + Sync + 'static {
    type Coord: Coordinate;

    const TOPOLOGY: Topology;

    /// Every in-bounds cell, all `Empty`. `side_length` must already be valid.
    fn empty_lattice(side_length: usize) -> Lattice<Self::Coord>;

    /// The canonical opening discs around the center.
    fn starting_discs(side_length: usize) -> Vec<(Self::Coord, Color)>;

    /// Render the board as text, one line per row, row-major.
    fn render(lattice: &Lattice<Self::Coord>, side_length: usize) -> String;

    /// Check `side_length` against this topology's constraints.
    fn validate(side_length: usize) -> Result<()> {
        Self::TOPOLOGY.validate_side_length(side_length)
    }

    /// Validated board with the canonical opening position.
    fn canonical_lattice(side_length: usize) -> Result<Lattice<Self::Coord>> {
        Self::validate(side_length)?;

        let mut lattice = Self::empty_lattice(side_length);
        for (at, color) in Self::starting_discs(side_length) {
            lattice.set(at, Cell::Disc(color));
        }
        Ok(lattice)
    }
}
