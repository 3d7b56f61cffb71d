//! Observable path searches on a square grid.
//!
//! This crate runs four searches over a [`gridsearch_core::Grid`] with one
//! shared engine:
//!
//! - **A\*** (g + h priority, optimal with an admissible heuristic)
//! - **Dijkstra** (g priority, always optimal)
//! - **Greedy best-first** (h priority, fast but not optimal)
//! - **Breadth-first** (FIFO, fewest moves)
//!
//! A [`Search`] can be advanced one [`step`](Search::step) at a time, with
//! its scores, frontier and predecessor links open to inspection, or driven
//! to completion by [`Search::run`] with a [`StepObserver`] that may cancel
//! at any step boundary. [`find_path`] is the headless shortcut.
//!
//! # Preconditions
//!
//! The grid's neighbor lists must be refreshed with
//! [`Grid::update_neighbors`](gridsearch_core::Grid::update_neighbors) after
//! editing barriers. A grid whose cached lists still point at a barrier is
//! rejected with [`SearchError::StaleAdjacency`].
//!
//! ```
//! use gridsearch_core::{Adjacency, Grid};
//! use gridsearch_paths::{Algorithm, SearchConfig, find_path};
//!
//! let mut grid = Grid::from_text("S.#\n..#\n..E").unwrap();
//! grid.update_neighbors(Adjacency::Cardinal);
//! let report = find_path(&mut grid, &SearchConfig::new(Algorithm::Dijkstra)).unwrap();
//! assert_eq!(report.path_len(), 5);
//! ```

mod config;
mod error;
mod frontier;
mod heuristic;
mod observer;
#[cfg(test)]
mod randomized;
mod reconstruct;
mod report;
mod search;

pub use config::{Algorithm, SearchConfig};
pub use error::{GridStateError, SearchError};
pub use heuristic::{Heuristic, UnknownName, chebyshev, euclidean, manhattan};
pub use observer::{CancelFlag, NoopObserver, StepEvent, StepObserver};
pub use reconstruct::{PredecessorMap, reconstruct_path};
pub use report::{Outcome, Phase, SearchReport};
pub use search::{Search, find_path, find_path_with};
