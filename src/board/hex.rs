//! Hexagonal topology.
//!
//! Cells are addressed in axial coordinates stored on an `n x n` grid,
//! where `n` is the side length (the length of the middle row). With
//! `m = (n - 1) / 2`, a grid position `(col, row)` is on the board iff
//! `m <= col + row <= 3m`; the two triangles outside that band are the
//! unused corners of the grid and have no lattice entry.
//!
//! ```text
//!        _ _ _ _          row 0: cols 3..=6 (n = 7)
//!       _ _ _ _ _
//!      _ _ X O _ _
//!     _ _ O _ X _ _       row 3: the middle row, all n cells
//!      _ _ X O _ _
//!       _ _ _ _ _
//!        _ _ _ _          row 6: cols 0..=3
//! ```

use serde::{Deserialize, Serialize};

use super::geometry::{Coordinate, Geometry};
use super::lattice::Lattice;
use crate::core::{Cell, Color, Topology};

/// The six hex directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HexDirection {
    TopRight,
    TopLeft,
    Right,
    Left,
    BottomLeft,
    BottomRight,
}

impl HexDirection {
    pub const ALL: [HexDirection; 6] = [
        HexDirection::TopRight,
        HexDirection::TopLeft,
        HexDirection::Right,
        HexDirection::Left,
        HexDirection::BottomLeft,
        HexDirection::BottomRight,
    ];

    /// `(d_col, d_row)` for one step.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            HexDirection::TopRight => (1, -1),
            HexDirection::TopLeft => (0, -1),
            HexDirection::Right => (1, 0),
            HexDirection::Left => (-1, 0),
            HexDirection::BottomLeft => (-1, 1),
            HexDirection::BottomRight => (0, 1),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            HexDirection::TopRight => HexDirection::BottomLeft,
            HexDirection::TopLeft => HexDirection::BottomRight,
            HexDirection::Right => HexDirection::Left,
            HexDirection::Left => HexDirection::Right,
            HexDirection::BottomLeft => HexDirection::TopRight,
            HexDirection::BottomRight => HexDirection::TopLeft,
        }
    }
}

/// Axial hex coordinate. Ordered row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HexCoord {
    // Field order gives the derived row-major `Ord`.
    pub row: i32,
    pub col: i32,
}

impl HexCoord {
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for HexCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl Coordinate for HexCoord {
    type Direction = HexDirection;

    const DIRECTIONS: &'static [HexDirection] = &HexDirection::ALL;

    fn new(col: i32, row: i32) -> Self {
        HexCoord::new(col, row)
    }

    fn col(self) -> i32 {
        self.col
    }

    fn row(self) -> i32 {
        self.row
    }

    fn step(self, direction: HexDirection) -> Self {
        let (dc, dr) = direction.offset();
        HexCoord::new(self.col + dc, self.row + dr)
    }
}

/// Hexagonal board topology.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hex;

impl Hex {
    /// Index of the middle row and column.
    #[must_use]
    pub const fn middle(side_length: usize) -> i32 {
        ((side_length as i32) - 1) / 2
    }
}

impl Geometry for Hex {
    type Coord = HexCoord;

    const TOPOLOGY: Topology = Topology::Hex;

    fn empty_lattice(side_length: usize) -> Lattice<HexCoord> {
        let n = side_length as i32;
        let m = Self::middle(side_length);

        (0..n)
            .flat_map(|row| (0..n).map(move |col| HexCoord::new(col, row)))
            .filter(|at| (m..=3 * m).contains(&(at.col + at.row)))
            .map(|at| (at, Cell::Empty))
            .collect()
    }

    /// Six discs on the ring around the (empty) center, alternating colors.
    fn starting_discs(side_length: usize) -> Vec<(HexCoord, Color)> {
        let m = Self::middle(side_length);
        vec![
            (HexCoord::new(m, m - 1), Color::Black),
            (HexCoord::new(m + 1, m - 1), Color::White),
            (HexCoord::new(m - 1, m), Color::White),
            (HexCoord::new(m + 1, m), Color::Black),
            (HexCoord::new(m - 1, m + 1), Color::Black),
            (HexCoord::new(m, m + 1), Color::White),
        ]
    }

    /// Rows below the middle are indented by their distance from it; unused
    /// grid positions render as a single space, which indents the top half.
    fn render(lattice: &Lattice<HexCoord>, side_length: usize) -> String {
        let n = side_length as i32;
        let m = Self::middle(side_length);

        (0..n)
            .map(|row| {
                let mut line = " ".repeat((row - m).max(0) as usize);
                for col in 0..n {
                    match lattice.get(HexCoord::new(col, row)) {
                        Some(cell) => {
                            line.push(cell.glyph());
                            line.push(' ');
                        }
                        None => line.push(' '),
                    }
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
