//! Provides the building blocks for search algorithms

use std::collections::HashSet;
use std::default::Default;

use crate::errors::{Result, SearchError};
use crate::traits::SearchCandidate;

pub(crate) mod breadth;
pub(crate) mod depth;
pub(crate) mod guided;

/// Trait used to implement frontiers of search candidates
/// which should be checked for completion.
///
/// The removal order of the frontier is the only thing which
/// distinguishes the search strategies from one another.
pub trait Frontier {
    type Candidate;

    fn pop(&mut self) -> Option<Self::Candidate>;

    fn push(&mut self, item: Self::Candidate);

    fn len(&self) -> usize;
}

/// Implementation of search, using a generic frontier (Q) to provide
/// a single foundation for multiple search algorithms.
///
/// Each state is expanded at most once. A state is recorded when a
/// candidate occupying it is *removed* from the frontier, not when it
/// is inserted, so several routes to the same state may sit queued at
/// once and the frontier's removal order decides which of them wins.
#[derive(Debug)]
pub struct SearchAlgorithm<S, Q>
where
    S: SearchCandidate,
    Q: Frontier<Candidate = S> + Default,
{
    queue: Q,
    visited: HashSet<S::State>,
}

impl<S, Q> SearchAlgorithm<S, Q>
where
    S: SearchCandidate,
    Q: Frontier<Candidate = S> + Default,
{
    fn new(origin: S) -> Self {
        let mut sr = SearchAlgorithm {
            queue: Q::default(),
            visited: HashSet::new(),
        };
        sr.queue.push(origin);
        sr
    }

    /// Run the search until the first complete candidate is removed
    /// from the frontier.
    pub fn run(mut self) -> Result<S> {
        while let Some(candidate) = self.queue.pop() {
            if !self.visited.insert(candidate.state()) {
                continue;
            }

            if candidate.is_complete() {
                return Ok(candidate);
            }

            for child in candidate.children() {
                self.queue.push(child);
            }
        }

        Err(SearchError::FrontierExhausted)
    }
}

#[cfg(test)]
mod test {
    use super::breadth::breadth_first;
    use super::depth::depth_first;
    use super::guided::guided;
    use crate::traits::{SearchCandidate, SearchCost};

    const GOAL: u32 = 5;

    /// Walks the integers from 0 to [GOAL] in hops of one or two,
    /// recording the numbers stepped on along the way.
    #[derive(Debug, Clone)]
    struct Hopper {
        trail: Vec<u32>,
    }

    impl Hopper {
        fn start() -> Self {
            Hopper { trail: vec![0] }
        }

        fn here(&self) -> u32 {
            *self.trail.last().unwrap()
        }

        fn hop(&self, stride: u32) -> Option<Self> {
            let next = self.here() + stride;
            if next > GOAL {
                return None;
            }
            let mut trail = self.trail.clone();
            trail.push(next);
            Some(Hopper { trail })
        }
    }

    impl SearchCandidate for Hopper {
        type State = u32;

        fn state(&self) -> u32 {
            self.here()
        }

        fn is_complete(&self) -> bool {
            self.here() == GOAL
        }

        fn children(&self) -> Vec<Self> {
            [1, 2].iter().filter_map(|&s| self.hop(s)).collect()
        }
    }

    /// Prefers whichever hop lands closest to the goal.
    impl SearchCost for Hopper {
        type Cost = u32;

        fn cost(&self) -> u32 {
            GOAL - self.here()
        }
    }

    /// A hopper whose candidates all cost the same, so the guided
    /// frontier falls back to arrival order alone.
    #[derive(Debug, Clone)]
    struct FlatHopper(Hopper);

    impl SearchCandidate for FlatHopper {
        type State = u32;

        fn state(&self) -> u32 {
            self.0.state()
        }

        fn is_complete(&self) -> bool {
            self.0.is_complete()
        }

        fn children(&self) -> Vec<Self> {
            self.0.children().into_iter().map(FlatHopper).collect()
        }
    }

    impl SearchCost for FlatHopper {
        type Cost = u32;

        fn cost(&self) -> u32 {
            0
        }
    }

    #[test]
    fn breadth_finds_a_shortest_trail() {
        let found = breadth_first(Hopper::start()).unwrap();
        assert_eq!(found.trail, vec![0, 1, 3, 5]);
    }

    #[test]
    fn depth_explores_late_arrivals_first() {
        let found = depth_first(Hopper::start()).unwrap();
        assert_eq!(found.trail, vec![0, 2, 4, 5]);
    }

    #[test]
    fn guided_follows_the_cheapest_candidate() {
        let found = guided(Hopper::start()).unwrap();
        assert_eq!(found.trail, vec![0, 2, 4, 5]);
    }

    #[test]
    fn guided_breaks_ties_in_arrival_order() {
        // With every cost equal, the guided frontier degenerates to
        // first-in, first-out and must match the breadth-first trail.
        let found = guided(FlatHopper(Hopper::start())).unwrap();
        assert_eq!(found.0.trail, vec![0, 1, 3, 5]);
    }
}
