use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::collections::BinaryHeap;
use std::default::Default;

use super::{Frontier, SearchAlgorithm};
use crate::errors::Result;
use crate::traits::SearchCost;

/// Wrapper for search candidates which sorts appropriately for the
/// guided frontier: lowest cost first, and equal costs in arrival
/// order (the sequence number is the tie breaker).
#[derive(Debug)]
struct Prioritized<S>
where
    S: SearchCost,
{
    candidate: S,
    seq: usize,
}

impl<S> PartialEq for Prioritized<S>
where
    S: SearchCost,
{
    fn eq(&self, other: &Self) -> bool {
        self.candidate.cost().eq(&other.candidate.cost()) && self.seq == other.seq
    }
}

impl<S> Eq for Prioritized<S> where S: SearchCost {}

impl<S> Ord for Prioritized<S>
where
    S: SearchCost,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.candidate
            .cost()
            .cmp(&other.candidate.cost())
            .then(self.seq.cmp(&other.seq))
            .reverse()
    }
}

impl<S> PartialOrd for Prioritized<S>
where
    S: SearchCost,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A priority frontier which always releases the cheapest candidate,
/// breaking ties in favor of the earliest arrival.
#[derive(Debug)]
pub struct GuidedFrontier<S>
where
    S: SearchCost,
{
    queue: BinaryHeap<Prioritized<S>>,
    counter: usize,
}

impl<S> Default for GuidedFrontier<S>
where
    S: SearchCost,
{
    fn default() -> Self {
        GuidedFrontier {
            queue: BinaryHeap::new(),
            counter: 0,
        }
    }
}

impl<S> Frontier for GuidedFrontier<S>
where
    S: SearchCost,
{
    type Candidate = S;

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.queue.pop().map(|p| p.candidate)
    }

    fn push(&mut self, item: Self::Candidate) {
        let seq = self.counter;
        self.counter += 1;
        self.queue.push(Prioritized {
            candidate: item,
            seq,
        });
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

type GuidedSearcher<S> = SearchAlgorithm<S, GuidedFrontier<S>>;

fn build<S>(origin: S) -> GuidedSearcher<S>
where
    S: SearchCost,
{
    SearchAlgorithm::new(origin)
}

/// Best-first search guided by each candidate's cost.
///
/// The frontier releases candidates in ascending cost order, equal
/// costs in arrival order. The route found is only guaranteed to be a
/// shortest one when the costs never overestimate.
pub fn guided<S>(origin: S) -> Result<S>
where
    S: SearchCost,
{
    build(origin).run()
}
