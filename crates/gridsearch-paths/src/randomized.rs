//! Searches over seeded random grids, checked against a brute-force
//! relaxation.

use gridsearch_core::{Adjacency, Grid, Pos};
use gridsearch_gen::{ObstacleGen, ObstacleRates};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{Algorithm, Heuristic, SearchConfig, find_path, reconstruct_path};

/// Cheapest start-to-end cost by repeated relaxation, paying each cell's
/// cost on leaving it.
fn cheapest(grid: &Grid, unit: bool) -> Option<f64> {
    let start = grid.start()?;
    let end = grid.end()?;
    let mut dist = vec![f64::INFINITY; grid.len()];
    dist[grid.index(start)?] = 0.0;
    let mut changed = true;
    while changed {
        changed = false;
        for u in grid.positions() {
            let du = dist[grid.index(u)?];
            if du.is_infinite() {
                continue;
            }
            let step = if unit { 1.0 } else { f64::from(grid.cost(u)?) };
            for &v in grid.neighbors(u) {
                let i = grid.index(v)?;
                if du + step < dist[i] {
                    dist[i] = du + step;
                    changed = true;
                }
            }
        }
    }
    let d = dist[grid.index(end)?];
    d.is_finite().then_some(d)
}

fn random_grid(g: &mut ObstacleGen<StdRng>, size: usize, adjacency: Adjacency) -> Option<Grid> {
    let mut grid = Grid::new(size);
    g.scatter(&mut grid, &ObstacleRates::default()).unwrap();
    g.place_endpoints(&mut grid).unwrap()?;
    grid.update_neighbors(adjacency);
    Some(grid)
}

fn run(grid: &Grid, config: SearchConfig) -> crate::SearchReport {
    let mut grid = grid.clone();
    find_path(&mut grid, &config).unwrap()
}

fn assert_valid_path(grid: &Grid, path: &[Pos]) {
    assert_eq!(path.first().copied(), grid.start());
    assert_eq!(path.last().copied(), grid.end());
    for w in path.windows(2) {
        assert!(grid.neighbors(w[0]).contains(&w[1]), "{} -> {}", w[0], w[1]);
    }
}

#[test]
fn dijkstra_matches_brute_force() {
    let mut g = ObstacleGen::new(StdRng::seed_from_u64(11));
    for adjacency in [Adjacency::Cardinal, Adjacency::Diagonal] {
        for _ in 0..60 {
            let Some(grid) = random_grid(&mut g, 6, adjacency) else {
                continue;
            };
            let report = run(&grid, SearchConfig::new(Algorithm::Dijkstra));
            assert_eq!(report.cost, cheapest(&grid, false), "\n{grid}");
            if let Some(path) = &report.path {
                assert_valid_path(&grid, path);
            }
        }
    }
}

#[test]
fn breadth_first_finds_fewest_moves() {
    let mut g = ObstacleGen::new(StdRng::seed_from_u64(12));
    for _ in 0..60 {
        let Some(grid) = random_grid(&mut g, 6, Adjacency::Cardinal) else {
            continue;
        };
        let report = run(&grid, SearchConfig::new(Algorithm::BreadthFirst));
        let moves = cheapest(&grid, true);
        assert_eq!(report.path.as_ref().map(|p| (p.len() - 1) as f64), moves);
    }
}

#[test]
fn astar_is_optimal_with_manhattan_on_cardinal_grids() {
    let mut g = ObstacleGen::new(StdRng::seed_from_u64(13));
    for _ in 0..60 {
        let Some(grid) = random_grid(&mut g, 6, Adjacency::Cardinal) else {
            continue;
        };
        let astar = run(
            &grid,
            SearchConfig::new(Algorithm::AStar).with_heuristic(Heuristic::Manhattan),
        );
        let dijkstra = run(&grid, SearchConfig::new(Algorithm::Dijkstra));
        assert_eq!(astar.outcome, dijkstra.outcome);
        assert_eq!(astar.cost, dijkstra.cost, "\n{grid}");
    }
}

#[test]
fn greedy_reaches_the_end_whenever_a_path_exists() {
    let mut g = ObstacleGen::new(StdRng::seed_from_u64(14));
    for _ in 0..60 {
        let Some(grid) = random_grid(&mut g, 6, Adjacency::Cardinal) else {
            continue;
        };
        let greedy = run(&grid, SearchConfig::new(Algorithm::GreedyBestFirst));
        let best = cheapest(&grid, false);
        assert_eq!(greedy.is_success(), best.is_some());
        if let (Some(cost), Some(best)) = (greedy.cost, best) {
            assert!(cost >= best);
            assert_valid_path(&grid, greedy.path.as_deref().unwrap());
        }
    }
}

#[test]
fn rebuilding_the_path_is_stable() {
    let mut g = ObstacleGen::new(StdRng::seed_from_u64(15));
    for _ in 0..30 {
        let Some(mut grid) = random_grid(&mut g, 6, Adjacency::Diagonal) else {
            continue;
        };
        let config = SearchConfig::new(Algorithm::AStar).with_heuristic(Heuristic::Chebyshev);
        let mut search = crate::Search::new(&mut grid, &config).unwrap();
        let report = search.run(&mut crate::NoopObserver).unwrap();
        let Some(path) = report.path else { continue };
        let end = search.end();
        let again = reconstruct_path(search.came_from(), end).unwrap();
        assert_eq!(again, path);
        assert_eq!(reconstruct_path(search.came_from(), end).unwrap(), again);
    }
}
