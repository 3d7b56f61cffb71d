//! The [`Grid`] type: a square board of [`Cell`]s with cached adjacency.
//!
//! Adjacency lists are computed by [`Grid::update_neighbors`] and are *not*
//! refreshed when classifications change. Callers refresh before each search.

use std::fmt;

use crate::cell::{Cell, CellKind, SearchMark};
use crate::pos::Pos;

/// Default leaving cost of a [`CellKind::Weighted`] cell.
pub const DEFAULT_WEIGHT: u32 = 5;

// ---------------------------------------------------------------------------
// Adjacency
// ---------------------------------------------------------------------------

/// Neighbor enumeration order: down, up, right, left.
const CARDINAL: [Pos; 4] = [
    Pos::new(1, 0),
    Pos::new(-1, 0),
    Pos::new(0, 1),
    Pos::new(0, -1),
];

/// Cardinal order followed by down-right, up-left, down-left, up-right.
const ALL: [Pos; 8] = [
    Pos::new(1, 0),
    Pos::new(-1, 0),
    Pos::new(0, 1),
    Pos::new(0, -1),
    Pos::new(1, 1),
    Pos::new(-1, -1),
    Pos::new(1, -1),
    Pos::new(-1, 1),
];

/// Which moves connect two cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Adjacency {
    /// 4-directional.
    #[default]
    Cardinal,
    /// 8-directional.
    Diagonal,
}

impl Adjacency {
    /// `Diagonal` when `allow_diagonal` is set, `Cardinal` otherwise.
    #[inline]
    pub const fn from_diagonal(allow_diagonal: bool) -> Self {
        if allow_diagonal {
            Self::Diagonal
        } else {
            Self::Cardinal
        }
    }

    /// Neighbor offsets in enumeration order.
    #[inline]
    pub const fn offsets(self) -> &'static [Pos] {
        match self {
            Self::Cardinal => &CARDINAL,
            Self::Diagonal => &ALL,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised by grid construction and editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The position is outside `[0, size) x [0, size)`.
    OutOfBounds { pos: Pos, size: usize },
    /// Weighted cells must cost at least 1.
    InvalidWeight(u32),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, size } => {
                write!(f, "position {pos} is outside the {size}x{size} grid")
            }
            Self::InvalidWeight(w) => write!(f, "invalid weighted-cell cost {w}, must be >= 1"),
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A square `size x size` grid that exclusively owns its cells.
///
/// At most one cell is [`CellKind::Start`] and at most one is
/// [`CellKind::End`]; the grid keeps track of both.
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    cell_width: u32,
    weight: u32,
    cells: Vec<Cell>,
    neighbors: Vec<Vec<Pos>>,
    adjacency: Option<Adjacency>,
    start: Option<Pos>,
    end: Option<Pos>,
}

impl Grid {
    /// Create a `size x size` grid of empty cells.
    pub fn new(size: usize) -> Self {
        Self::build(size, 0, DEFAULT_WEIGHT)
    }

    /// Create a grid that will be drawn `total_width` pixels wide. The
    /// per-cell width is only kept for front ends (see [`pos_at_pixel`](Self::pos_at_pixel)).
    pub fn with_cell_width(size: usize, total_width: u32) -> Self {
        let cell_width = if size == 0 {
            0
        } else {
            total_width / size as u32
        };
        Self::build(size, cell_width, DEFAULT_WEIGHT)
    }

    /// Create a grid whose weighted cells cost `weight` instead of
    /// [`DEFAULT_WEIGHT`].
    pub fn with_weight(size: usize, weight: u32) -> Result<Self, GridError> {
        if weight == 0 {
            return Err(GridError::InvalidWeight(weight));
        }
        Ok(Self::build(size, 0, weight))
    }

    fn build(size: usize, cell_width: u32, weight: u32) -> Self {
        let len = size * size;
        Self {
            size,
            cell_width,
            weight,
            cells: vec![Cell::EMPTY; len],
            neighbors: vec![Vec::new(); len],
            adjacency: None,
            start: None,
            end: None,
        }
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Pixel width of one cell, 0 if no hint was given.
    #[inline]
    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    /// Cost given to cells classified [`CellKind::Weighted`].
    #[inline]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        p.row >= 0 && p.col >= 0 && (p.row as usize) < self.size && (p.col as usize) < self.size
    }

    /// Row-major flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.size + p.col as usize)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn pos_of(&self, idx: usize) -> Pos {
        Pos::new((idx / self.size) as i32, (idx % self.size) as i32)
    }

    fn checked_index(&self, p: Pos) -> Result<usize, GridError> {
        self.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            size: self.size,
        })
    }

    /// The cell at `p`.
    #[inline]
    pub fn at(&self, p: Pos) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Classification of the cell at `p`.
    #[inline]
    pub fn kind(&self, p: Pos) -> Option<CellKind> {
        self.at(p).map(|c| c.kind)
    }

    /// Leaving cost of the cell at `p`.
    #[inline]
    pub fn cost(&self, p: Pos) -> Option<u32> {
        self.at(p).map(|c| c.cost)
    }

    /// The Start cell, if one is set.
    #[inline]
    pub fn start(&self) -> Option<Pos> {
        self.start
    }

    /// The End cell, if one is set.
    #[inline]
    pub fn end(&self) -> Option<Pos> {
        self.end
    }

    /// Iterate over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.cells.len()).map(|i| self.pos_of(i))
    }

    /// Iterate over all `(position, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (self.pos_of(i), c))
    }

    /// Count cells of the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|c| c.kind == kind).count()
    }

    /// Map a pixel coordinate to a cell using the width hint.
    pub fn pos_at_pixel(&self, x: u32, y: u32) -> Option<Pos> {
        if self.cell_width == 0 {
            return None;
        }
        let p = Pos::new((y / self.cell_width) as i32, (x / self.cell_width) as i32);
        self.contains(p).then_some(p)
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Set the classification of the cell at `p`.
    ///
    /// `Weighted` sets the cost to [`weight`](Self::weight); any other new
    /// kind resets it to 1. Setting the kind a cell already has changes
    /// nothing. Making a cell Start (or End) demotes the previous Start
    /// (or End) to Empty, and overwriting a Start/End cell clears the role.
    pub fn set_classification(&mut self, p: Pos, kind: CellKind) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        let old = self.cells[i].kind;
        if old == kind {
            return Ok(());
        }
        self.release_role(p, old);
        match kind {
            CellKind::Start => {
                if let Some(prev) = self.start.replace(p) {
                    let j = self.checked_index(prev)?;
                    self.cells[j] = Cell::EMPTY;
                }
            }
            CellKind::End => {
                if let Some(prev) = self.end.replace(p) {
                    let j = self.checked_index(prev)?;
                    self.cells[j] = Cell::EMPTY;
                }
            }
            _ => {}
        }
        let cost = if kind == CellKind::Weighted {
            self.weight
        } else {
            1
        };
        self.cells[i] = Cell { kind, cost };
        Ok(())
    }

    /// Return the cell at `p` to Empty with cost 1, dropping any Start/End
    /// role it held.
    pub fn reset(&mut self, p: Pos) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        let old = self.cells[i].kind;
        self.release_role(p, old);
        self.cells[i] = Cell::EMPTY;
        Ok(())
    }

    fn release_role(&mut self, p: Pos, old: CellKind) {
        match old {
            CellKind::Start if self.start == Some(p) => self.start = None,
            CellKind::End if self.end == Some(p) => self.end = None,
            _ => {}
        }
    }

    /// Write a search mark over the cell at `p`, keeping its cost.
    ///
    /// Start, End and Barrier cells are left alone; returns whether the
    /// cell changed.
    pub fn mark(&mut self, p: Pos, mark: SearchMark) -> Result<bool, GridError> {
        let i = self.checked_index(p)?;
        let cell = &mut self.cells[i];
        if matches!(
            cell.kind,
            CellKind::Start | CellKind::End | CellKind::Barrier
        ) {
            return Ok(false);
        }
        cell.kind = mark.into();
        Ok(true)
    }

    /// Reset every cell and drop Start/End.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
        self.start = None;
        self.end = None;
    }

    /// Turn Frontier/Visited/OnPath cells back into Empty, or Weighted when
    /// their cost is above 1. Returns how many cells changed.
    pub fn clear_search_marks(&mut self) -> usize {
        let mut n = 0;
        for cell in self.cells.iter_mut().filter(|c| c.kind.is_search_mark()) {
            cell.kind = if cell.cost > 1 {
                CellKind::Weighted
            } else {
                CellKind::Empty
            };
            n += 1;
        }
        n
    }

    // -----------------------------------------------------------------------
    // Adjacency
    // -----------------------------------------------------------------------

    /// In-bounds, non-barrier neighbors of `p` under `adjacency`, computed
    /// from the current classification (cardinal moves first, then
    /// diagonals).
    pub fn compute_neighbors(&self, p: Pos, adjacency: Adjacency) -> Vec<Pos> {
        adjacency
            .offsets()
            .iter()
            .map(|&d| p + d)
            .filter(|&n| self.at(n).is_some_and(|c| !c.is_barrier()))
            .collect()
    }

    /// Recompute every cached adjacency list.
    pub fn update_neighbors(&mut self, adjacency: Adjacency) {
        let lists: Vec<Vec<Pos>> = (0..self.cells.len())
            .map(|i| self.compute_neighbors(self.pos_of(i), adjacency))
            .collect();
        self.neighbors = lists;
        self.adjacency = Some(adjacency);
        log::debug!(
            "refreshed adjacency for {0}x{0} grid ({adjacency:?})",
            self.size
        );
    }

    /// Cached neighbors of `p` from the last [`update_neighbors`](Self::update_neighbors).
    #[inline]
    pub fn neighbors(&self, p: Pos) -> &[Pos] {
        match self.index(p) {
            Some(i) => &self.neighbors[i],
            None => &[],
        }
    }

    /// Adjacency mode of the cached lists, `None` if never computed.
    #[inline]
    pub fn adjacency(&self) -> Option<Adjacency> {
        self.adjacency
    }

    /// First cached adjacency entry that now points at a barrier, as
    /// `(cell, barrier)`.
    pub fn stale_neighbor(&self) -> Option<(Pos, Pos)> {
        self.neighbors.iter().enumerate().find_map(|(i, list)| {
            list.iter()
                .find(|&&n| self.at(n).is_some_and(|c| c.is_barrier()))
                .map(|&n| (self.pos_of(i), n))
        })
    }
}

impl fmt::Display for Grid {
    /// One line per row using [`CellKind::symbol`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.size.max(1)).enumerate() {
            if r > 0 {
                f.write_str("\n")?;
            }
            for c in row {
                write!(f, "{}", c.kind.symbol())?;
            }
        }
        Ok(())
    }
}
