//! Random obstacle fields.
//!
//! Every cell other than Start and End is reset, then becomes a barrier with
//! probability `barrier`, or otherwise a weighted cell with probability
//! `weighted`.

use gridsearch_core::{CellKind, Grid, GridError, Pos};
use rand::Rng;
use rand::RngExt;

/// Probabilities used by [`ObstacleGen::scatter`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleRates {
    /// Chance (0.0–1.0) that a cell becomes a barrier.
    pub barrier: f64,
    /// Chance (0.0–1.0) that a non-barrier cell becomes weighted.
    pub weighted: f64,
}

impl Default for ObstacleRates {
    fn default() -> Self {
        Self {
            barrier: 0.25,
            weighted: 0.1,
        }
    }
}

/// What [`ObstacleGen::scatter`] placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scattered {
    pub barriers: usize,
    pub weighted: usize,
}

/// Obstacle generator driven by `rng`.
pub struct ObstacleGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> ObstacleGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Reset the grid and scatter barriers and weighted cells over it,
    /// keeping the current Start and End.
    ///
    /// Neighbor lists are not refreshed.
    pub fn scatter(&mut self, grid: &mut Grid, rates: &ObstacleRates) -> Result<Scattered, GridError> {
        let keep = [grid.start(), grid.end()];
        let positions: Vec<Pos> = grid.positions().collect();
        let mut placed = Scattered::default();
        for p in positions {
            if keep.contains(&Some(p)) {
                continue;
            }
            grid.reset(p)?;
            let r: f64 = self.rng.random();
            if r < rates.barrier {
                grid.set_classification(p, CellKind::Barrier)?;
                placed.barriers += 1;
                continue;
            }
            let r: f64 = self.rng.random();
            if r < rates.weighted {
                grid.set_classification(p, CellKind::Weighted)?;
                placed.weighted += 1;
            }
        }
        log::debug!(
            "scattered {} barriers and {} weighted cells over {} cells",
            placed.barriers,
            placed.weighted,
            grid.len()
        );
        Ok(placed)
    }

    /// Pick two distinct random non-barrier cells and make them Start and End.
    ///
    /// Returns `None` when fewer than two open cells exist.
    pub fn place_endpoints(&mut self, grid: &mut Grid) -> Result<Option<(Pos, Pos)>, GridError> {
        let open: Vec<Pos> = grid
            .iter()
            .filter(|(_, c)| !c.is_barrier())
            .map(|(p, _)| p)
            .collect();
        if open.len() < 2 {
            return Ok(None);
        }
        let si = self.rng.random_range(0..open.len());
        let mut ei = self.rng.random_range(0..open.len() - 1);
        if ei >= si {
            ei += 1;
        }
        let (start, end) = (open[si], open[ei]);
        grid.set_classification(start, CellKind::Start)?;
        grid.set_classification(end, CellKind::End)?;
        Ok(Some((start, end)))
    }
}
