//! The search engine.
//!
//! One loop serves every [`Algorithm`]: pop the cheapest frontier entry,
//! stop if it is the end, otherwise relax its cached neighbors. Only the
//! frontier priority (and, for BFS, the step cost) differs between
//! variants. Equal priorities leave the frontier in insertion order, so a
//! run is reproducible step for step.

use std::thread;
use std::time::{Duration, Instant};

use gridsearch_core::{CellKind, Grid, Pos, SearchMark};

use crate::config::{Algorithm, SearchConfig};
use crate::error::{GridStateError, SearchError};
use crate::frontier::Frontier;
use crate::observer::{NoopObserver, StepEvent, StepObserver};
use crate::reconstruct::{PredecessorMap, reconstruct_path};
use crate::report::{Outcome, Phase, SearchReport};

/// A single search over a grid, advanced one iteration at a time.
///
/// The grid is borrowed mutably for the lifetime of the search: the engine
/// writes Frontier/Visited/OnPath marks as it goes, and nothing else can
/// edit the grid meanwhile. A cancelled search leaves its marks behind;
/// [`Grid::clear_search_marks`] removes them.
pub struct Search<'g> {
    grid: &'g mut Grid,
    config: SearchConfig,
    start: Pos,
    end: Pos,
    g_score: Vec<f64>,
    f_score: Vec<f64>,
    came_from: PredecessorMap,
    frontier: Frontier,
    nbuf: Vec<Pos>,
    phase: Phase,
    explored: usize,
    last: Option<Pos>,
    path: Option<Vec<Pos>>,
    cost: Option<f64>,
    started: Instant,
    elapsed: Duration,
}

impl<'g> Search<'g> {
    /// Prepare a search between the grid's Start and End cells.
    pub fn new(grid: &'g mut Grid, config: &SearchConfig) -> Result<Self, SearchError> {
        let start = grid.start().ok_or(GridStateError::MissingStart);
        let end = grid.end().ok_or(GridStateError::MissingEnd);
        let (start, end) = match (start, end) {
            (Ok(s), Ok(e)) => (s, e),
            (Err(e), _) | (_, Err(e)) => {
                log::warn!("search rejected: {e}");
                return Err(e.into());
            }
        };
        Self::with_endpoints(grid, start, end, config)
    }

    /// Prepare a search between explicit endpoints, which need not carry
    /// the Start/End classification.
    ///
    /// The grid is validated before anything is touched: both endpoints
    /// must be in bounds and open, and the cached neighbor lists must be
    /// computed and must not point at any barrier.
    pub fn with_endpoints(
        grid: &'g mut Grid,
        start: Pos,
        end: Pos,
        config: &SearchConfig,
    ) -> Result<Self, SearchError> {
        validate(grid, start, end).inspect_err(|e| log::warn!("search rejected: {e}"))?;
        let si = grid
            .index(start)
            .ok_or(GridStateError::OutOfBounds(start))?;

        let len = grid.len();
        let mut search = Self {
            came_from: PredecessorMap::new(grid.size()),
            grid,
            config: *config,
            start,
            end,
            g_score: vec![f64::INFINITY; len],
            f_score: vec![f64::INFINITY; len],
            frontier: Frontier::new(len),
            nbuf: Vec::with_capacity(8),
            phase: Phase::Initialized,
            explored: 0,
            last: None,
            path: None,
            cost: None,
            started: Instant::now(),
            elapsed: Duration::ZERO,
        };

        let h = if config.algorithm.uses_heuristic() {
            search.estimate(start)
        } else {
            0.0
        };
        search.g_score[si] = 0.0;
        if config.algorithm == Algorithm::AStar {
            search.f_score[si] = h;
        }
        let priority = match config.algorithm {
            Algorithm::GreedyBestFirst => h,
            _ => 0.0,
        };
        search.frontier.push(si, start, priority);

        log::debug!(
            "search {} ({}) from {start} to {end} on {}x{} grid",
            config.algorithm,
            config.heuristic,
            search.grid.size(),
            search.grid.size()
        );
        Ok(search)
    }

    #[inline]
    fn estimate(&self, p: Pos) -> f64 {
        self.config.heuristic.estimate(p, self.end)
    }

    /// Cost of moving out of `p`.
    #[inline]
    fn step_cost(&self, p: Pos) -> f64 {
        match self.config.algorithm {
            Algorithm::BreadthFirst => 1.0,
            _ => f64::from(self.grid.cost(p).unwrap_or(1)),
        }
    }

    /// Write a search mark, leaving the two endpoints as they are even when
    /// they are not classified Start/End.
    fn mark(&mut self, p: Pos, mark: SearchMark) -> Result<(), SearchError> {
        if p != self.start && p != self.end {
            self.grid.mark(p, mark)?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Stepping
    // -----------------------------------------------------------------------

    /// Run one iteration and return the phase afterwards.
    ///
    /// Calling `step` on a finished search does nothing.
    pub fn step(&mut self) -> Result<Phase, SearchError> {
        match self.phase {
            Phase::Initialized => self.phase = Phase::Running,
            Phase::Running => {}
            done => return Ok(done),
        }

        let Some(current) = self.frontier.pop() else {
            self.finish(Phase::Exhausted);
            return Ok(self.phase);
        };
        self.explored += 1;
        self.last = Some(current);
        log::trace!("expand {current} (explored {})", self.explored);

        if current == self.end {
            let path = reconstruct_path(&self.came_from, self.end)?;
            for &p in &path {
                self.mark(p, SearchMark::OnPath)?;
            }
            let moves = path.len() - 1;
            self.cost = Some(path[..moves].iter().map(|&p| self.step_cost(p)).sum());
            self.path = Some(path);
            self.finish(Phase::Succeeded);
            return Ok(self.phase);
        }

        let ci = self
            .grid
            .index(current)
            .ok_or(GridStateError::OutOfBounds(current))?;
        let current_g = self.g_score[ci];
        let step_cost = self.step_cost(current);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        nbuf.extend_from_slice(self.grid.neighbors(current));

        for &np in nbuf.iter() {
            let Some(ni) = self.grid.index(np) else {
                continue;
            };
            let tentative_g = current_g + step_cost;
            if tentative_g >= self.g_score[ni] {
                continue;
            }

            self.came_from.set(np, current);
            self.g_score[ni] = tentative_g;
            let priority = match self.config.algorithm {
                Algorithm::AStar => {
                    let f = tentative_g + self.estimate(np);
                    self.f_score[ni] = f;
                    f
                }
                Algorithm::Dijkstra => tentative_g,
                Algorithm::GreedyBestFirst => self.estimate(np),
                Algorithm::BreadthFirst => 0.0,
            };
            if self.frontier.push(ni, np, priority) {
                self.mark(np, SearchMark::Frontier)?;
            }
        }

        self.nbuf = nbuf;
        self.mark(current, SearchMark::Visited)?;
        Ok(self.phase)
    }

    /// Stop the search. Has no effect once it has finished.
    pub fn cancel(&mut self) {
        if !self.phase.is_terminal() {
            self.finish(Phase::Cancelled);
        }
    }

    fn finish(&mut self, phase: Phase) {
        self.phase = phase;
        self.elapsed = self.started.elapsed();
        match phase {
            Phase::Cancelled => log::warn!(
                "search cancelled after {} explored cells ({:.2?})",
                self.explored,
                self.elapsed
            ),
            _ => log::info!(
                "search {:?}: time {:.2?}, explored {}, path length {}",
                phase,
                self.elapsed,
                self.explored,
                self.path.as_ref().map_or(0, Vec::len)
            ),
        }
    }

    /// Step until the search finishes, notifying `observer` after every
    /// iteration and sleeping for the configured step delay.
    ///
    /// The observer can cancel by returning [`ControlFlow::Break`](std::ops::ControlFlow::Break).
    pub fn run<O>(&mut self, observer: &mut O) -> Result<SearchReport, SearchError>
    where
        O: StepObserver + ?Sized,
    {
        let outcome = loop {
            if let Some(outcome) = self.step()?.outcome() {
                break outcome;
            }
            if let Some(current) = self.last {
                let event = StepEvent {
                    current,
                    explored: self.explored,
                    frontier_len: self.frontier.len(),
                };
                if observer.on_step(&event, &*self.grid).is_break() {
                    self.cancel();
                    break Outcome::Cancelled;
                }
            }
            if !self.config.step_delay.is_zero() {
                thread::sleep(self.config.step_delay);
            }
        };
        Ok(self.build_report(outcome))
    }

    fn build_report(&self, outcome: Outcome) -> SearchReport {
        SearchReport {
            outcome,
            path: self.path.clone(),
            explored_count: self.explored,
            elapsed_time: self.elapsed,
            cost: self.cost,
        }
    }

    // -----------------------------------------------------------------------
    // Inspection
    // -----------------------------------------------------------------------

    /// The report, once the search has finished.
    pub fn report(&self) -> Option<SearchReport> {
        self.phase.outcome().map(|o| self.build_report(o))
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Pos {
        self.end
    }

    /// Cells popped from the frontier so far.
    #[inline]
    pub fn explored(&self) -> usize {
        self.explored
    }

    /// Cell expanded by the most recent step.
    #[inline]
    pub fn last_expanded(&self) -> Option<Pos> {
        self.last
    }

    /// Best known cost from the start; infinite if not reached.
    pub fn g_score(&self, p: Pos) -> f64 {
        self.grid
            .index(p)
            .map_or(f64::INFINITY, |i| self.g_score[i])
    }

    /// `g + h` as last computed by A*; infinite otherwise.
    pub fn f_score(&self, p: Pos) -> f64 {
        self.grid
            .index(p)
            .map_or(f64::INFINITY, |i| self.f_score[i])
    }

    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn in_frontier(&self, p: Pos) -> bool {
        self.grid.index(p).is_some_and(|i| self.frontier.contains(i))
    }

    #[inline]
    pub fn came_from(&self) -> &PredecessorMap {
        &self.came_from
    }

    /// The path, once found.
    pub fn path(&self) -> Option<&[Pos]> {
        self.path.as_deref()
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &*self.grid
    }
}

fn validate(grid: &Grid, start: Pos, end: Pos) -> Result<(), SearchError> {
    for p in [start, end] {
        if !grid.contains(p) {
            return Err(GridStateError::OutOfBounds(p).into());
        }
    }
    if grid.kind(start) == Some(CellKind::Barrier) {
        return Err(GridStateError::StartIsBarrier(start).into());
    }
    if grid.kind(end) == Some(CellKind::Barrier) {
        return Err(GridStateError::EndIsBarrier(end).into());
    }
    if grid.adjacency().is_none() {
        return Err(SearchError::AdjacencyNotComputed);
    }
    if let Some((cell, barrier)) = grid.stale_neighbor() {
        return Err(SearchError::StaleAdjacency { cell, barrier });
    }
    Ok(())
}

/// Search between the grid's Start and End without observation.
pub fn find_path(grid: &mut Grid, config: &SearchConfig) -> Result<SearchReport, SearchError> {
    Search::new(grid, config)?.run(&mut NoopObserver)
}

/// Search between the grid's Start and End, notifying `observer` each step.
pub fn find_path_with<O>(
    grid: &mut Grid,
    config: &SearchConfig,
    observer: &mut O,
) -> Result<SearchReport, SearchError>
where
    O: StepObserver + ?Sized,
{
    Search::new(grid, config)?.run(observer)
}
