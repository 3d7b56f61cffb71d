//! Random grids for exercising the gridsearch searches.

pub mod obstacles;

pub use obstacles::{ObstacleGen, ObstacleRates, Scattered};
