//! Cell contents.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Content of an in-bounds cell.
///
/// Out-of-bounds positions are not cells at all: they have no entry in the
/// lattice, so there is no `Absent` variant here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Disc(Color),
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Color of the disc in this cell, if any.
    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Disc(color) => Some(color),
        }
    }

    /// Glyph used by the textual board view.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Disc(color) => color.glyph(),
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        Cell::Disc(color)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
