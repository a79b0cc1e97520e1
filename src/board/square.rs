//! Square topology: the classic `n x n` Reversi grid with eight neighbors.

use serde::{Deserialize, Serialize};

use super::geometry::{Coordinate, Geometry};
use super::lattice::Lattice;
use crate::core::{Cell, Color, Topology};

/// The eight square-grid directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SquareDirection {
    Top,
    Bottom,
    TopRight,
    TopLeft,
    Right,
    Left,
    BottomLeft,
    BottomRight,
}

impl SquareDirection {
    pub const ALL: [SquareDirection; 8] = [
        SquareDirection::Top,
        SquareDirection::Bottom,
        SquareDirection::TopRight,
        SquareDirection::TopLeft,
        SquareDirection::Right,
        SquareDirection::Left,
        SquareDirection::BottomLeft,
        SquareDirection::BottomRight,
    ];

    /// `(d_col, d_row)` for one step.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            SquareDirection::Top => (0, -1),
            SquareDirection::Bottom => (0, 1),
            SquareDirection::TopRight => (1, -1),
            SquareDirection::TopLeft => (-1, -1),
            SquareDirection::Right => (1, 0),
            SquareDirection::Left => (-1, 0),
            SquareDirection::BottomLeft => (-1, 1),
            SquareDirection::BottomRight => (1, 1),
        }
    }
}

/// Offset coordinate on a square grid. Ordered row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SquareCoord {
    pub row: i32,
    pub col: i32,
}

impl SquareCoord {
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for SquareCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl Coordinate for SquareCoord {
    type Direction = SquareDirection;

    const DIRECTIONS: &'static [SquareDirection] = &SquareDirection::ALL;

    fn new(col: i32, row: i32) -> Self {
        SquareCoord::new(col, row)
    }

    fn col(self) -> i32 {
        self.col
    }

    fn row(self) -> i32 {
        self.row
    }

    fn step(self, direction: SquareDirection) -> Self {
        let (dc, dr) = direction.offset();
        SquareCoord::new(self.col + dc, self.row + dr)
    }
}

/// Square board topology.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Square;

impl Geometry for Square {
    type Coord = SquareCoord;

    const TOPOLOGY: Topology = Topology::Square;

    fn empty_lattice(side_length: usize) -> Lattice<SquareCoord> {
        let n = side_length as i32;
        (0..n)
            .flat_map(|row| (0..n).map(move |col| (SquareCoord::new(col, row), Cell::Empty)))
            .collect()
    }

    /// The standard diagonal 2x2 block in the center.
    fn starting_discs(side_length: usize) -> Vec<(SquareCoord, Color)> {
        let m = side_length as i32 / 2 - 1;
        vec![
            (SquareCoord::new(m, m), Color::Black),
            (SquareCoord::new(m + 1, m), Color::White),
            (SquareCoord::new(m, m + 1), Color::White),
            (SquareCoord::new(m + 1, m + 1), Color::Black),
        ]
    }

    /// Every row, including the last, ends with a newline.
    fn render(lattice: &Lattice<SquareCoord>, side_length: usize) -> String {
        let n = side_length as i32;
        let mut out = String::with_capacity(side_length * (2 * side_length + 1));
        for row in 0..n {
            for col in 0..n {
                match lattice.get(SquareCoord::new(col, row)) {
                    Some(cell) => {
                        out.push(cell.glyph());
                        out.push(' ');
                    }
                    None => out.push(' '),
                }
            }
            out.push('\n');
        }
        out
    }
}
