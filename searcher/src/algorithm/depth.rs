use std::collections::VecDeque;
use std::default::Default;

use super::{Frontier, SearchAlgorithm};
use crate::errors::Result;
use crate::SearchCandidate;

/// A last-in, first-out frontier.
///
/// The children of one expansion are explored in the *reverse* of the
/// order [SearchCandidate::children] produced them, since each push
/// lands in front of its siblings.
#[derive(Debug)]
pub struct DepthFrontier<S> {
    queue: VecDeque<S>,
}

impl<S> Default for DepthFrontier<S> {
    fn default() -> Self {
        DepthFrontier {
            queue: VecDeque::new(),
        }
    }
}

impl<S> Frontier for DepthFrontier<S> {
    type Candidate = S;

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.queue.pop_front()
    }

    fn push(&mut self, item: Self::Candidate) {
        self.queue.push_front(item);
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

type DepthFirstSearcher<S> = SearchAlgorithm<S, DepthFrontier<S>>;

fn build<S>(origin: S) -> DepthFirstSearcher<S>
where
    S: SearchCandidate,
{
    SearchAlgorithm::new(origin)
}

/// Depth-first search, which commits to the most recent expansion
/// until it runs dry.
///
/// Finds *a* route when one exists, with no promise that it is a
/// shortest one.
pub fn depth_first<S>(origin: S) -> Result<S>
where
    S: SearchCandidate,
{
    build(origin).run()
}
