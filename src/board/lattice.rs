//! Cell lattice: the mapping from coordinate to cell content.
//!
//! Backed by `im::OrdMap`, so cloning is O(1) and a clone never observes
//! later writes to the original (and vice versa). A cloned lattice is the
//! board snapshot handed to strategies and simulations.
//!
//! Coordinates that are not keys of the map are out of play.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use super::geometry::Coordinate;
use crate::core::{Cell, Color};

/// Mapping from in-bounds coordinates to their contents.
///
/// Serializes as a row-major list of `(coordinate, cell)` pairs, since
/// struct keys are not valid map keys in most formats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<(C, Cell)>", from = "Vec<(C, Cell)>", bound = "")]
pub struct Lattice<C: Coordinate> {
    cells: OrdMap<C, Cell>,
}

impl<C: Coordinate> Default for Lattice<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Coordinate> Lattice<C> {
    /// Create a lattice with no cells.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: OrdMap::new(),
        }
    }

    /// Overwrite the content of an existing cell.
    ///
    /// Returns `false` and leaves the lattice untouched if `at` is not on the board.
    pub fn set(&mut self, at: C, cell: Cell) -> bool {
        match self.cells.get_mut(&at) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Content of `at`, or `None` if `at` is not on the board.
    #[inline]
    #[must_use]
    pub fn get(&self, at: C) -> Option<Cell> {
        self.cells.get(&at).copied()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, at: C) -> bool {
        self.cells.contains_key(&at)
    }

    /// Number of in-bounds cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (C, Cell)> + '_ {
        self.cells.iter().map(|(&at, &cell)| (at, cell))
    }

    /// All in-bounds coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = C> + '_ {
        self.cells.keys().copied()
    }

    /// Number of cells holding exactly `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.values().filter(|&&c| c == cell).count()
    }

    /// Number of discs of `color`.
    #[must_use]
    pub fn discs(&self, color: Color) -> usize {
        self.count(Cell::Disc(color))
    }

    /// Number of on-board neighbors of `at`.
    #[must_use]
    pub fn neighbors_in_bounds(&self, at: C) -> usize {
        at.neighbors().into_iter().filter(|&n| self.contains(n)).count()
    }

    /// Smallest square extent containing every cell: `max(row, col) + 1`.
    ///
    /// Used to recover the side length of a rigged board.
    #[must_use]
    pub fn extent(&self) -> usize {
        self.coords()
            .map(|at| at.row().max(at.col()).max(0) as usize + 1)
            .max()
            .unwrap_or(0)
    }
}

impl<C: Coordinate> FromIterator<(C, Cell)> for Lattice<C> {
    fn from_iter<I: IntoIterator<Item = (C, Cell)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<C: Coordinate> From<Lattice<C>> for Vec<(C, Cell)> {
    fn from(lattice: Lattice<C>) -> Self {
        lattice.iter().collect()
    }
}

impl<C: Coordinate> From<Vec<(C, Cell)>> for Lattice<C> {
    fn from(cells: Vec<(C, Cell)>) -> Self {
        cells.into_iter().collect()
    }
}
