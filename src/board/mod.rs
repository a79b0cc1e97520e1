//! Board representation.
//!
//! - [`Coordinate`] / [`Geometry`]: the contract each topology implements
//! - [`Lattice`]: coordinate to cell mapping with O(1) snapshots
//! - [`hex`]: six-neighbor hexagonal board
//! - [`square`]: eight-neighbor square board
//!
//! The two topologies are parallel implementations; they share no
//! coordinate type.

pub mod geometry;
pub mod hex;
pub mod lattice;
pub mod square;

pub use geometry::{Coordinate, Geometry};
pub use hex::{Hex, HexCoord, HexDirection};
pub use lattice::Lattice;
pub use square::{Square, SquareCoord, SquareDirection};
