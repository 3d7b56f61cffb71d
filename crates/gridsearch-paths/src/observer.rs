//! Step notifications and cooperative cancellation.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use gridsearch_core::{Grid, Pos};

/// What happened in one search iteration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepEvent {
    /// The cell just expanded.
    pub current: Pos,
    /// Cells popped so far, including `current`.
    pub explored: usize,
    /// Entries left in the frontier.
    pub frontier_len: usize,
}

/// Receives a notification after every iteration of
/// [`Search::run`](crate::Search::run).
///
/// Returning [`ControlFlow::Break`] cancels the search at that step
/// boundary. The grid carries the current Frontier/Visited marks.
pub trait StepObserver {
    fn on_step(&mut self, event: &StepEvent, grid: &Grid) -> ControlFlow<()>;
}

/// Observer that does nothing, for headless runs.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    #[inline]
    fn on_step(&mut self, _: &StepEvent, _: &Grid) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

impl<F> StepObserver for F
where
    F: FnMut(&StepEvent, &Grid) -> ControlFlow<()>,
{
    #[inline]
    fn on_step(&mut self, event: &StepEvent, grid: &Grid) -> ControlFlow<()> {
        self(event, grid)
    }
}

/// A cancellation flag that can be raised from another thread.
///
/// Clones share the same flag. As an observer it breaks the run at the
/// first step boundary after [`cancel`](Self::cancel).
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl StepObserver for CancelFlag {
    fn on_step(&mut self, _: &StepEvent, _: &Grid) -> ControlFlow<()> {
        if self.is_cancelled() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}
