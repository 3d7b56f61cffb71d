use std::fmt;

use gridsearch_core::{GridError, Pos};

/// Why a grid cannot be searched as it stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridStateError {
    MissingStart,
    MissingEnd,
    /// An endpoint lies outside the grid.
    OutOfBounds(Pos),
    StartIsBarrier(Pos),
    EndIsBarrier(Pos),
}

impl fmt::Display for GridStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => f.write_str("no start cell"),
            Self::MissingEnd => f.write_str("no end cell"),
            Self::OutOfBounds(p) => write!(f, "endpoint {p} is outside the grid"),
            Self::StartIsBarrier(p) => write!(f, "start cell {p} is a barrier"),
            Self::EndIsBarrier(p) => write!(f, "end cell {p} is a barrier"),
        }
    }
}

impl std::error::Error for GridStateError {}

/// Errors raised by the search engine.
///
/// Running out of frontier and being cancelled are outcomes, not errors;
/// see [`Outcome`](crate::Outcome).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Rejected before any search work began.
    InvalidGridState(GridStateError),
    /// The grid's neighbor lists were never computed.
    AdjacencyNotComputed,
    /// A cached neighbor list still points at a cell that has since become
    /// a barrier; the grid needs a neighbor refresh.
    StaleAdjacency { cell: Pos, barrier: Pos },
    /// Predecessor links loop back on themselves.
    CycleInPredecessorMap { at: Pos },
    Grid(GridError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGridState(e) => write!(f, "invalid grid state: {e}"),
            Self::AdjacencyNotComputed => f.write_str("neighbor lists have not been computed"),
            Self::StaleAdjacency { cell, barrier } => write!(
                f,
                "stale adjacency: {cell} lists barrier {barrier} as a neighbor"
            ),
            Self::CycleInPredecessorMap { at } => {
                write!(f, "cycle in predecessor map at {at}")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGridState(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridStateError> for SearchError {
    fn from(e: GridStateError) -> Self {
        Self::InvalidGridState(e)
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
