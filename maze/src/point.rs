//! Coordinate work on the maze grid.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// Data type used for coordinates
pub type Position = i32;

/// A movement direction on the grid.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::Right,
    Direction::Down,
    Direction::Left,
    Direction::Up,
];

impl Direction {
    /// Enumerates all directions of movement in expansion order:
    /// right, down, left, up. Searches rely on this order staying
    /// fixed, since it decides which of several equally good routes
    /// a strategy reports.
    pub fn all() -> impl Iterator<Item = Self> {
        DIRECTIONS.iter().cloned()
    }
}

/// A location on the grid.
///
/// A 2-tuple of zero-based row and column, row counting downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: Position,
    pub col: Position,
}

impl Point {
    /// Build a new point from coordinates.
    pub fn new(row: Position, col: Position) -> Self {
        Self { row, col }
    }

    /// Returns the point at (0, 0), the top-left corner.
    pub fn origin() -> Self {
        Self { row: 0, col: 0 }
    }

    fn right(self) -> Self {
        Self {
            row: self.row,
            col: self.col + 1,
        }
    }

    fn down(self) -> Self {
        Self {
            row: self.row + 1,
            col: self.col,
        }
    }

    fn left(self) -> Self {
        Self {
            row: self.row,
            col: self.col - 1,
        }
    }

    fn up(self) -> Self {
        Self {
            row: self.row - 1,
            col: self.col,
        }
    }

    /// Step in a given direction.
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Right => self.right(),
            Direction::Down => self.down(),
            Direction::Left => self.left(),
            Direction::Up => self.up(),
        }
    }

    /// Check if a point is adjacent.
    pub fn is_adjacent(&self, point: &Point) -> bool {
        self.manhattan_distance(*point) == 1
    }

    /// Manhattan distance between two points is the distance along
    /// each coordinate
    pub fn manhattan_distance(self, other: Point) -> Position {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl From<(Position, Position)> for Point {
    fn from(coordinates: (Position, Position)) -> Self {
        Self {
            row: coordinates.0,
            col: coordinates.1,
        }
    }
}

/// Error when parsing a point from string.
#[derive(Debug, Error)]
pub enum ParsePointError {
    #[error("Invalid Point: {0}")]
    InvalidLiteral(String),

    #[error("Invalid Number Literal")]
    InvalidNumber,
}

impl From<::std::num::ParseIntError> for ParsePointError {
    fn from(_: ::std::num::ParseIntError) -> Self {
        ParsePointError::InvalidNumber
    }
}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE: Regex = Regex::new(r"(?P<row>[\d]+)\s*,\s*(?P<col>[\d]+)").unwrap();
        };

        let cap = match RE.captures(s) {
            None => return Err(ParsePointError::InvalidLiteral(s.to_string())),
            Some(c) => c,
        };

        Ok(Self::new(cap["row"].parse()?, cap["col"].parse()?))
    }
}
