use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::heuristic::{Heuristic, UnknownName};

/// Which search the engine runs. All four share one frontier/relaxation
/// loop and differ only in the frontier priority and step cost.
///
/// | Algorithm | Priority | Step cost | Optimal |
/// |---|---|---|---|
/// | `AStar` | g + h | cell cost | yes, with an admissible heuristic |
/// | `Dijkstra` | g | cell cost | yes |
/// | `GreedyBestFirst` | h | cell cost | no |
/// | `BreadthFirst` | insertion order | 1 | fewest moves |
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "astar"))]
    AStar,
    #[cfg_attr(feature = "serde", serde(rename = "dijkstra"))]
    Dijkstra,
    #[cfg_attr(feature = "serde", serde(rename = "greedy"))]
    GreedyBestFirst,
    #[cfg_attr(feature = "serde", serde(rename = "bfs"))]
    BreadthFirst,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Self::AStar,
        Self::Dijkstra,
        Self::GreedyBestFirst,
        Self::BreadthFirst,
    ];

    /// Whether the heuristic is consulted at all.
    #[inline]
    pub const fn uses_heuristic(self) -> bool {
        matches!(self, Self::AStar | Self::GreedyBestFirst)
    }

    /// The next algorithm in [`ALL`](Self::ALL), wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::AStar => Self::Dijkstra,
            Self::Dijkstra => Self::GreedyBestFirst,
            Self::GreedyBestFirst => Self::BreadthFirst,
            Self::BreadthFirst => Self::AStar,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::AStar => "astar",
            Self::Dijkstra => "dijkstra",
            Self::GreedyBestFirst => "greedy",
            Self::BreadthFirst => "bfs",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            "dijkstra" => Ok(Self::Dijkstra),
            "greedy" | "best-first" | "greedy-best-first" => Ok(Self::GreedyBestFirst),
            "bfs" | "breadth-first" => Ok(Self::BreadthFirst),
            _ => Err(UnknownName(s.to_string())),
        }
    }
}

/// Search parameters.
///
/// Adjacency (4- or 8-directional) is not part of the config: it is fixed
/// when the grid's neighbor lists are refreshed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    pub heuristic: Heuristic,
    /// Pause after every step of [`Search::run`](crate::Search::run). Zero
    /// means no pause.
    pub step_delay: Duration,
}

impl SearchConfig {
    /// Default configuration running `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_step_delay(mut self, step_delay: Duration) -> Self {
        self.step_delay = step_delay;
        self
    }
}
