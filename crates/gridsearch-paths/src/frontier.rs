use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridsearch_core::Pos;

/// Frontier entry ordered by priority, then by insertion sequence.
#[derive(Clone, Copy, Debug)]
struct Entry {
    priority: f64,
    seq: u64,
    idx: usize,
    pos: Pos,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first,
        // and the earliest insertion among equal priorities.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Min-priority open set with FIFO tie-breaking and a membership index.
///
/// Each cell is queued at most once. Pushing a queued cell with a strictly
/// lower priority moves it (it takes a fresh insertion sequence); any other
/// push of a queued cell is ignored. Superseded heap entries are skipped
/// lazily on pop.
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    /// Priority and sequence of the live entry of each queued cell.
    live: Vec<Option<(f64, u64)>>,
    len: usize,
    seq: u64,
}

impl Frontier {
    /// A frontier for a grid with `len` cells.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: vec![None; len],
            len: 0,
            seq: 0,
        }
    }

    /// Queue `pos` (flat index `idx`) or lower its priority. Returns whether
    /// the frontier changed.
    pub(crate) fn push(&mut self, idx: usize, pos: Pos, priority: f64) -> bool {
        match self.live[idx] {
            Some((queued, _)) if priority >= queued => return false,
            Some(_) => {}
            None => self.len += 1,
        }
        let seq = self.seq;
        self.seq += 1;
        self.live[idx] = Some((priority, seq));
        self.heap.push(Entry {
            priority,
            seq,
            idx,
            pos,
        });
        true
    }

    /// Pop the minimum live entry.
    pub(crate) fn pop(&mut self) -> Option<Pos> {
        while let Some(e) = self.heap.pop() {
            if matches!(self.live[e.idx], Some((_, seq)) if seq == e.seq) {
                self.live[e.idx] = None;
                self.len -= 1;
                return Some(e.pos);
            }
        }
        None
    }

    #[inline]
    pub(crate) fn contains(&self, idx: usize) -> bool {
        self.live.get(idx).is_some_and(Option::is_some)
    }

    /// Number of queued cells.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.len == 0
    }
}
