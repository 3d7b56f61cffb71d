use std::fmt;
use std::str::FromStr;

use gridsearch_core::Pos;

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> f64 {
    let (dr, dc) = a.delta(b);
    f64::from(dr + dc)
}

/// Euclidean (L2) distance between two positions.
#[inline]
pub fn euclidean(a: Pos, b: Pos) -> f64 {
    let (dr, dc) = a.delta(b);
    f64::from(dr).hypot(f64::from(dc))
}

/// Chebyshev (L∞) distance between two positions.
#[inline]
pub fn chebyshev(a: Pos, b: Pos) -> f64 {
    let (dr, dc) = a.delta(b);
    f64::from(dr.max(dc))
}

/// Distance estimator used by the informed searches.
///
/// Manhattan and Chebyshev never overestimate on a unit-cost cardinal
/// grid; Euclidean never overestimates when every move costs at least its
/// straight-line length. Dijkstra and BFS ignore the heuristic.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
    Chebyshev,
}

impl Heuristic {
    pub const ALL: [Heuristic; 3] = [Self::Manhattan, Self::Euclidean, Self::Chebyshev];

    /// Estimated remaining cost from `a` to `b`. Never negative.
    #[inline]
    pub fn estimate(self, a: Pos, b: Pos) -> f64 {
        match self {
            Self::Manhattan => manhattan(a, b),
            Self::Euclidean => euclidean(a, b),
            Self::Chebyshev => chebyshev(a, b),
        }
    }

    /// The next heuristic in [`ALL`](Self::ALL), wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Manhattan => Self::Euclidean,
            Self::Euclidean => Self::Chebyshev,
            Self::Chebyshev => Self::Manhattan,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
            Self::Chebyshev => "chebyshev",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Self::Manhattan),
            "euclidean" => Ok(Self::Euclidean),
            "chebyshev" => Ok(Self::Chebyshev),
            _ => Err(UnknownName(s.to_string())),
        }
    }
}

/// A heuristic or algorithm name that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownName(pub String);

impl fmt::Display for UnknownName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown name {:?}", self.0)
    }
}

impl std::error::Error for UnknownName {}
