//! Solving a maze with interchangeable search strategies.

use std::fmt;
use std::str::FromStr;

use log::debug;
use searcher::{self, SearchCandidate, SearchCost};
use thiserror::Error;

use super::grid::Grid;
use super::path::Path;
use super::point::{Direction, Point};

/// The closed set of strategies a maze can be solved with.
///
/// Dispatch is an exhaustive `match`, so a new variant refuses to
/// compile until every dispatch site handles it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    HeuristicGuided,
}

const STRATEGIES: [Strategy; 3] = [
    Strategy::BreadthFirst,
    Strategy::DepthFirst,
    Strategy::HeuristicGuided,
];

impl Strategy {
    /// Enumerates every strategy.
    pub fn all() -> impl Iterator<Item = Self> {
        STRATEGIES.iter().cloned()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::BreadthFirst => write!(f, "breadth-first"),
            Strategy::DepthFirst => write!(f, "depth-first"),
            Strategy::HeuristicGuided => write!(f, "heuristic-guided"),
        }
    }
}

/// Error when parsing a strategy selector.
#[derive(Debug, Error)]
#[error("Unknown strategy: {0:?} (expected bfs, dfs or astar)")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" => Ok(Strategy::BreadthFirst),
            "dfs" => Ok(Strategy::DepthFirst),
            "astar" | "aStar" => Ok(Strategy::HeuristicGuided),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// Holds information about a route while the search algorithm runs.
#[derive(Debug)]
struct RouteCandidate<'m> {
    path: Path,
    grid: &'m Grid,
    target: Point,
    cost: usize,
}

impl<'m> RouteCandidate<'m> {
    fn start(grid: &'m Grid) -> Self {
        Self {
            path: Path::new(grid.start()),
            grid,
            target: grid.end(),
            cost: 0,
        }
    }
}

impl<'m> SearchCandidate for RouteCandidate<'m> {
    type State = Point;

    fn state(&self) -> Point {
        *self.path.destination()
    }

    fn is_complete(&self) -> bool {
        *self.path.destination() == self.target
    }

    fn children(&self) -> Vec<Self> {
        let here = *self.path.destination();

        // The guided estimate is measured from the cell being expanded
        // (not the neighbor being pushed) and is anchored to the
        // bottom-right corner (not the end marker). Both decide which
        // of several equal routes comes out. On a grid whose end sits
        // away from that corner the estimate can overestimate, and the
        // guided strategy loses its shortest-route bias.
        let cost = self.path.distance() + 1 + self.grid.corner_distance(here);

        let mut routes = Vec::with_capacity(4);
        for direction in Direction::all() {
            let next = here.step(direction);
            if !self.grid.is_traversable(next) {
                continue;
            }
            routes.push(RouteCandidate {
                path: self.path.step(direction),
                grid: self.grid,
                target: self.target,
                cost,
            });
        }

        routes
    }
}

impl<'m> SearchCost for RouteCandidate<'m> {
    type Cost = usize;

    fn cost(&self) -> usize {
        self.cost
    }
}

/// Find a route from the start marker to the end marker of a grid.
///
/// The returned path begins at the start cell, finishes at the end
/// cell, and advances one orthogonal step at a time through non-wall
/// cells. `None` is the defined outcome when no route exists; callers
/// branch on it rather than handling an error.
pub fn solve(grid: &Grid, strategy: Strategy) -> Option<Path> {
    debug!(
        "Searching a {}x{} grid ({})",
        grid.rows(),
        grid.cols(),
        strategy
    );

    let origin = RouteCandidate::start(grid);
    let found = match strategy {
        Strategy::BreadthFirst => searcher::breadth_first(origin),
        Strategy::DepthFirst => searcher::depth_first(origin),
        Strategy::HeuristicGuided => searcher::guided(origin),
    };

    found.ok().map(|candidate| candidate.path)
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::generate::generate;

    fn open_3x3() -> Grid {
        "S..\n...\n..E".parse().unwrap()
    }

    fn assert_walkable(grid: &Grid, path: &Path) {
        assert_eq!(*path.origin(), grid.start());
        assert_eq!(*path.destination(), grid.end());

        let mut seen = HashSet::new();
        for point in path.iter() {
            assert!(grid.is_traversable(*point), "{} is not traversable", point);
            assert!(seen.insert(*point), "{} repeats", point);
        }
        for pair in path.windows(2) {
            assert!(pair[0].is_adjacent(&pair[1]));
        }
    }

    #[test]
    fn breadth_first_takes_the_top_edge() {
        let path = solve(&open_3x3(), Strategy::BreadthFirst).unwrap();
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
            .into()
        );
    }

    #[test]
    fn depth_first_serpentines_from_the_left_edge() {
        // Expansion pushes right, down, left, up; the stack releases
        // them in reverse, so downward progress is explored before the
        // rightward route the breadth-first strategy reports.
        let path = solve(&open_3x3(), Strategy::DepthFirst).unwrap();
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(1, 1),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
            .into()
        );
    }

    #[test]
    fn guided_matches_breadth_first_on_an_open_grid() {
        // Stepping toward the corner costs exactly what stepping away
        // saves, so every queued candidate carries an equal estimate
        // and the arrival-order tie break reproduces breadth-first.
        assert_eq!(
            solve(&open_3x3(), Strategy::HeuristicGuided),
            solve(&open_3x3(), Strategy::BreadthFirst)
        );
    }

    #[test]
    fn walls_funnel_every_strategy() {
        let grid: Grid = "S#.\n.#.\n..E".parse().unwrap();
        let expected: Path = vec![
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(2, 1),
            Point::new(2, 2),
        ]
        .into();

        for strategy in Strategy::all() {
            assert_eq!(solve(&grid, strategy), Some(expected.clone()));
        }
    }

    #[test]
    fn enclosed_start_is_unsolvable() {
        let grid: Grid = "S#\n#E".parse().unwrap();
        for strategy in Strategy::all() {
            assert_eq!(solve(&grid, strategy), None);
        }
    }

    #[test]
    fn guided_reaches_an_end_away_from_the_corner() {
        // The estimate stays anchored to the bottom-right corner even
        // when the end marker sits elsewhere; the search still finds
        // the marker, it just stops favoring goal-ward candidates.
        let grid: Grid = "S.E\n...\n...".parse().unwrap();
        let path = solve(&grid, Strategy::HeuristicGuided).unwrap();
        assert_walkable(&grid, &path);
    }

    #[test]
    fn breadth_first_is_never_longer() {
        let mut rng = StdRng::seed_from_u64(2019);
        for _ in 0..25 {
            let grid = generate(9, 9, 0.3, &mut rng).unwrap();
            let shortest = solve(&grid, Strategy::BreadthFirst);

            for strategy in Strategy::all() {
                match (&shortest, &solve(&grid, strategy)) {
                    (Some(a), Some(b)) => {
                        assert_walkable(&grid, b);
                        assert!(a.distance() <= b.distance());
                    }
                    // Reachability cannot depend on the strategy.
                    (None, None) => {}
                    _ => panic!("strategies disagree on whether a route exists"),
                }
            }
        }
    }

    #[test]
    fn solving_twice_yields_the_same_route() {
        let grid = generate(12, 12, 0.25, &mut StdRng::seed_from_u64(7)).unwrap();
        for strategy in Strategy::all() {
            assert_eq!(solve(&grid, strategy), solve(&grid, strategy));
        }
    }

    #[test]
    fn selector_values_parse() {
        assert_eq!("bfs".parse::<Strategy>().unwrap(), Strategy::BreadthFirst);
        assert_eq!("dfs".parse::<Strategy>().unwrap(), Strategy::DepthFirst);
        assert_eq!(
            "astar".parse::<Strategy>().unwrap(),
            Strategy::HeuristicGuided
        );
        assert!("dijkstra".parse::<Strategy>().is_err());
    }
}
