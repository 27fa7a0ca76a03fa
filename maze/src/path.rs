//! Path data structures
//!
//! A path is an ordered sequence of grid points, each one orthogonal
//! step from the point before it.

use std::convert::From;
use std::ops::Deref;

use super::point::{Direction, Point};

/// A walked route across the grid, from its origin to its destination.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Path {
    steps: Vec<Point>,
}

impl From<Vec<Point>> for Path {
    fn from(points: Vec<Point>) -> Self {
        assert_ne!(points.len(), 0);
        Self { steps: points }
    }
}

impl Path {
    /// Construct a new path which starts from this point.
    pub fn new(origin: Point) -> Self {
        let mut steps = Vec::with_capacity(1);
        steps.push(origin);
        Path { steps }
    }

    /// Return a new path after taking a step in a particular direction.
    pub fn step(&self, direction: Direction) -> Self {
        let mut steps = self.steps.clone();
        steps.push(self.destination().step(direction));
        Path { steps }
    }

    /// Iterate over the points in this path.
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.steps.iter()
    }

    /// Where this path started
    pub fn origin(&self) -> &Point {
        self.steps.first().unwrap()
    }

    /// Where this path ends
    pub fn destination(&self) -> &Point {
        self.steps.last().unwrap()
    }

    /// How long this path is, counted in steps taken.
    pub fn distance(&self) -> usize {
        self.steps.len() - 1
    }
}

impl Deref for Path {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}
