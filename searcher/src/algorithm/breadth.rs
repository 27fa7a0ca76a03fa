use std::collections::VecDeque;
use std::default::Default;

use super::{Frontier, SearchAlgorithm};
use crate::errors::Result;
use crate::SearchCandidate;

/// A first-in, first-out frontier: candidates leave in arrival order,
/// so shallower candidates always leave ahead of deeper ones.
#[derive(Debug)]
pub struct BreadthFrontier<S> {
    queue: VecDeque<S>,
}

impl<S> Default for BreadthFrontier<S> {
    fn default() -> Self {
        BreadthFrontier {
            queue: VecDeque::new(),
        }
    }
}

impl<S> Frontier for BreadthFrontier<S> {
    type Candidate = S;

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.queue.pop_front()
    }

    fn push(&mut self, item: Self::Candidate) {
        self.queue.push_back(item);
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

type BreadthFirstSearcher<S> = SearchAlgorithm<S, BreadthFrontier<S>>;

fn build<S>(origin: S) -> BreadthFirstSearcher<S>
where
    S: SearchCandidate,
{
    SearchAlgorithm::new(origin)
}

/// Breadth-first search, where the order within one expansion is
/// determined by the candidates returned by [SearchCandidate::children].
///
/// Because candidates leave the frontier in non-decreasing depth, the
/// first complete candidate also carries a shortest route.
pub fn breadth_first<S>(origin: S) -> Result<S>
where
    S: SearchCandidate,
{
    build(origin).run()
}
