//! Disc colors and per-color data storage.
//!
//! ## Color
//!
//! The two sides of a Reversi game. Black always moves first on a freshly
//! constructed board.
//!
//! ## ColorMap
//!
//! Fixed two-slot storage indexed by `Color`, used for scores and for
//! per-color session state.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::error::GameError;

/// One of the two players, identified by disc color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Both colors, black first.
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// The other color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Slot index used by `ColorMap`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }

    /// Glyph used by the textual board view.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }

    /// Parse a single-character color tag.
    ///
    /// Accepts `B`/`X` for black and `W`/`O` for white, case-insensitive.
    ///
    /// ```
    /// use rust_reversi::core::Color;
    ///
    /// assert_eq!(Color::from_tag('B'), Some(Color::Black));
    /// assert_eq!(Color::from_tag('o'), Some(Color::White));
    /// assert_eq!(Color::from_tag('?'), None);
    /// ```
    #[must_use]
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag.to_ascii_uppercase() {
            'B' | 'X' => Some(Color::Black),
            'W' | 'O' => Some(Color::White),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

impl FromStr for Color {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Color::Black),
            "white" => Ok(Color::White),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(tag), None) => Color::from_tag(tag),
                    _ => None,
                }
                .ok_or_else(|| GameError::InvalidConfiguration(format!("unknown color tag {s:?}")))
            }
        }
    }
}

/// Per-color data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_reversi::core::{Color, ColorMap};
///
/// let mut discs: ColorMap<usize> = ColorMap::with_value(2);
/// discs[Color::White] += 1;
///
/// assert_eq!(discs[Color::Black], 2);
/// assert_eq!(discs[Color::White], 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: [factory(Color::Black), factory(Color::White)],
        }
    }

    /// Create a map from the black and white entries.
    pub fn from_pair(black: T, white: T) -> Self {
        Self { data: [black, white] }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a color's data.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a color's data.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (Color, &T) pairs, black first.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}
