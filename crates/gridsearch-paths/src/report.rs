use std::time::Duration;

use gridsearch_core::Pos;

/// Where a search currently is.
///
/// `Initialized → Running → {Succeeded | Exhausted | Cancelled}`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Initialized,
    Running,
    Succeeded,
    Exhausted,
    Cancelled,
}

impl Phase {
    /// Whether the search has stopped.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Exhausted | Self::Cancelled)
    }

    /// The outcome for a terminal phase.
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Succeeded => Some(Outcome::Succeeded),
            Self::Exhausted => Some(Outcome::Exhausted),
            Self::Cancelled => Some(Outcome::Cancelled),
            Self::Initialized | Self::Running => None,
        }
    }
}

/// How a finished search ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Outcome {
    /// The end was reached.
    Succeeded,
    /// The frontier drained without reaching the end.
    Exhausted,
    /// Stopped from outside at a step boundary.
    Cancelled,
}

/// Result of a finished search.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SearchReport {
    pub outcome: Outcome,
    /// Start to end inclusive; present only on success.
    pub path: Option<Vec<Pos>>,
    /// Number of cells popped from the frontier.
    pub explored_count: usize,
    pub elapsed_time: Duration,
    /// Total cost of `path`, present only on success.
    pub cost: Option<f64>,
}

impl SearchReport {
    #[inline]
    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Succeeded
    }

    /// Number of cells on the path, 0 when there is none.
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }
}
