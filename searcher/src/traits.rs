use std::fmt::Debug;
use std::hash::Hash;

/// Provides an interface for conducting searches.
///
/// A candidate is one position in the search space together with
/// whatever the search needs to resume from it. The first candidate
/// removed from the frontier which reports itself complete becomes
/// the search result.
pub trait SearchCandidate: Debug + Sized {
    /// Identity of the position this candidate occupies. Two
    /// candidates with the same state are routes to the same place,
    /// and only the first one removed from the frontier is expanded.
    type State: Debug + Clone + Eq + Hash;

    fn state(&self) -> Self::State;

    /// Indicates that this candidate is the goal.
    fn is_complete(&self) -> bool;

    /// Produces the candidates reachable from this one.
    ///
    /// Positions which cannot be occupied at all should not be
    /// produced here. Positions which were already expanded may be;
    /// the engine discards those on removal.
    fn children(&self) -> Vec<Self>;
}

/// An interface for searching when an ordering priority can be provided.
///
/// The guided frontier removes the candidate with the lowest cost
/// first. The cost is fixed when the candidate is created.
pub trait SearchCost: SearchCandidate {
    type Cost: Debug + Copy + Ord;

    fn cost(&self) -> Self::Cost;
}
