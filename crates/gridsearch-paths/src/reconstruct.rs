use gridsearch_core::Pos;

use crate::error::SearchError;

/// Predecessor links (`came_from`) of a square grid, defining the
/// shortest-path tree a search has discovered so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorMap {
    size: usize,
    links: Vec<Option<Pos>>,
}

impl PredecessorMap {
    /// An empty map for a `size x size` grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            links: vec![None; size * size],
        }
    }

    #[inline]
    fn idx(&self, p: Pos) -> Option<usize> {
        let in_bounds =
            p.row >= 0 && p.col >= 0 && (p.row as usize) < self.size && (p.col as usize) < self.size;
        in_bounds.then(|| p.row as usize * self.size + p.col as usize)
    }

    /// Predecessor of `p`, if it has one.
    #[inline]
    pub fn get(&self, p: Pos) -> Option<Pos> {
        self.idx(p).and_then(|i| self.links[i])
    }

    /// Record `from` as the predecessor of `p`. Out-of-bounds `p` is ignored.
    #[inline]
    pub fn set(&mut self, p: Pos, from: Pos) {
        if let Some(i) = self.idx(p) {
            self.links[i] = Some(from);
        }
    }

    /// Number of positions that have a predecessor.
    pub fn len(&self) -> usize {
        self.links.iter().filter(|l| l.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.links.iter().all(Option::is_none)
    }
}

/// Rebuild the path ending at `end` by walking predecessor links back to a
/// position without one (the start), then reversing.
///
/// The result runs start to end inclusive; it is `[end]` when `end` has no
/// predecessor. A cycle in the links yields
/// [`SearchError::CycleInPredecessorMap`] instead of looping.
pub fn reconstruct_path(came_from: &PredecessorMap, end: Pos) -> Result<Vec<Pos>, SearchError> {
    let mut seen = vec![false; came_from.links.len()];
    let mut path = vec![end];
    if let Some(i) = came_from.idx(end) {
        seen[i] = true;
    }
    let mut current = end;
    while let Some(prev) = came_from.get(current) {
        if let Some(i) = came_from.idx(prev) {
            if seen[i] {
                return Err(SearchError::CycleInPredecessorMap { at: prev });
            }
            seen[i] = true;
        }
        path.push(prev);
        current = prev;
    }
    path.reverse();
    Ok(path)
}
