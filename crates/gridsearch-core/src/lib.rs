//! **gridsearch-core**: the square grid that path searches run on.
//!
//! This crate provides the grid model shared by the *gridsearch* crates:
//! positions, cell classification and cost, a square [`Grid`] with cached
//! adjacency lists, and text / label-matrix layouts.
//!
//! Nothing here draws anything; classification is an explicit tag that a
//! front end may map to colors however it likes.

pub mod cell;
pub mod grid;
pub mod layout;
pub mod pos;

pub use cell::{Cell, CellKind, SearchMark};
pub use grid::{Adjacency, DEFAULT_WEIGHT, Grid, GridError};
pub use layout::LayoutError;
pub use pos::Pos;
