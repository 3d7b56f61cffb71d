//! The [`Cell`] type: a classification tag plus a traversal cost.

use std::fmt;

/// What a cell currently is. Exactly one kind holds at a time.
///
/// `Frontier`, `Visited` and `OnPath` are search marks written by the engine
/// for observers; the rest are set by whoever edits the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CellKind {
    #[default]
    Empty,
    Start,
    End,
    Barrier,
    Weighted,
    Frontier,
    Visited,
    OnPath,
}

impl CellKind {
    /// Whether this kind is one of the marks a search leaves behind.
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Self::Frontier | Self::Visited | Self::OnPath)
    }

    /// Layout symbol for this kind.
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Barrier => '#',
            Self::Weighted => 'w',
            Self::Frontier => 'o',
            Self::Visited => 'x',
            Self::OnPath => '*',
        }
    }

    /// Parse a layout symbol. Search marks are accepted as well so that
    /// [`Grid::to_text`](crate::Grid::to_text) output can be read back.
    pub const fn from_symbol(ch: char) -> Option<Self> {
        Some(match ch {
            '.' => Self::Empty,
            'S' => Self::Start,
            'E' => Self::End,
            '#' => Self::Barrier,
            'w' => Self::Weighted,
            'o' => Self::Frontier,
            'x' => Self::Visited,
            '*' => Self::OnPath,
            _ => return None,
        })
    }

    /// Label used by row-major label matrices (`"start"`, `"barrier"`, ...).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Start => "start",
            Self::End => "end",
            Self::Barrier => "barrier",
            Self::Weighted => "weight",
            Self::Frontier => "frontier",
            Self::Visited => "visited",
            Self::OnPath => "path",
        }
    }

    /// Parse an editing label. Only the kinds a user can paint are accepted;
    /// an empty string is read as `"empty"`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "" | "empty" => Some(Self::Empty),
            "start" => Some(Self::Start),
            "end" => Some(Self::End),
            "barrier" => Some(Self::Barrier),
            "weight" | "weighted" => Some(Self::Weighted),
            _ => None,
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Search marks the engine may write over open cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchMark {
    Frontier,
    Visited,
    OnPath,
}

impl From<SearchMark> for CellKind {
    fn from(m: SearchMark) -> Self {
        match m {
            SearchMark::Frontier => CellKind::Frontier,
            SearchMark::Visited => CellKind::Visited,
            SearchMark::OnPath => CellKind::OnPath,
        }
    }
}

/// A single grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub kind: CellKind,
    /// Cost of leaving this cell. Always >= 1.
    pub cost: u32,
}

impl Cell {
    /// An empty cell with unit cost.
    pub const EMPTY: Self = Self {
        kind: CellKind::Empty,
        cost: 1,
    };

    #[inline]
    pub const fn is_barrier(self) -> bool {
        matches!(self.kind, CellKind::Barrier)
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}
