//! Board views.

pub mod text;

pub use text::TextView;
