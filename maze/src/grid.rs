//! The maze matrix: cell storage, bounds-checked reads and the wall
//! toggle.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use itertools::iproduct;
use thiserror::Error;

use super::cell::{Cell, UnknownGlyph};
use super::point::{Point, Position};

/// Error raised when a grid operation violates its preconditions.
#[derive(Debug, Error)]
pub enum GridError {
    /// The requested dimensions cannot hold distinct start and end
    /// markers.
    #[error("Invalid dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Wall probability outside the unit interval.
    #[error("Invalid wall density: {0}")]
    InvalidDensity(f64),

    #[error("{0} lies outside the grid")]
    OutOfBounds(Point),

    /// The start and end markers are fixed in place.
    #[error("The marker cell at {0} cannot be toggled")]
    ImmutableCell(Point),
}

/// A rectangular maze: a matrix of classified cells.
///
/// Dimensions are fixed at construction. The only mutation is
/// [Grid::toggle_wall], so the start and end markers placed by the
/// constructors stay unique and traversable for the life of the grid.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Grid {
    pub(crate) fn from_cells(cells: Vec<Cell>, rows: usize, cols: usize) -> Self {
        assert_eq!(cells.len(), rows * cols);
        Grid { cells, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Iterate over every point of the grid in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        iproduct!(0..self.rows, 0..self.cols)
            .map(|(row, col)| Point::new(row as Position, col as Position))
    }

    /// The cell at a location, or `None` outside the grid.
    pub fn get(&self, point: Point) -> Option<Cell> {
        if self.contains(point) {
            Some(self.cells[self.index(point)])
        } else {
            None
        }
    }

    /// Bounds-checked read of the cell at a location.
    pub fn cell_at(&self, point: Point) -> Result<Cell, GridError> {
        self.get(point).ok_or(GridError::OutOfBounds(point))
    }

    /// Can a route occupy this location? Walls and locations outside
    /// the grid cannot be stepped on.
    pub fn is_traversable(&self, point: Point) -> bool {
        self.get(point).map(Cell::is_traversable).unwrap_or(false)
    }

    /// Flip a free cell to a wall, or a wall back to a free cell.
    ///
    /// The start and end markers refuse the toggle and leave the grid
    /// unchanged.
    pub fn toggle_wall(&mut self, point: Point) -> Result<(), GridError> {
        let flipped = match self.cell_at(point)? {
            Cell::Free => Cell::Wall,
            Cell::Wall => Cell::Free,
            Cell::Start | Cell::End => return Err(GridError::ImmutableCell(point)),
        };
        self.put(point, flipped);
        Ok(())
    }

    /// Location of the start marker.
    ///
    /// Every constructor checks that the marker exists and is unique,
    /// so the scan cannot miss.
    pub fn start(&self) -> Point {
        self.locate(Cell::Start).unwrap()
    }

    /// Location of the end marker.
    pub fn end(&self) -> Point {
        self.locate(Cell::End).unwrap()
    }

    /// Manhattan distance from a point to the bottom-right corner of
    /// the grid.
    pub(crate) fn corner_distance(&self, point: Point) -> usize {
        let corner = Point::new(self.rows as Position - 1, self.cols as Position - 1);
        point.manhattan_distance(corner) as usize
    }

    pub(crate) fn put(&mut self, point: Point, cell: Cell) {
        let index = self.index(point);
        self.cells[index] = cell;
    }

    fn locate(&self, cell: Cell) -> Option<Point> {
        self.points().find(|&point| self.get(point) == Some(cell))
    }

    fn contains(&self, point: Point) -> bool {
        0 <= point.row
            && (point.row as usize) < self.rows
            && 0 <= point.col
            && (point.col as usize) < self.cols
    }

    fn index(&self, point: Point) -> usize {
        point.row as usize * self.cols + point.col as usize
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{}", self.cells[row * self.cols + col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Error when parsing a grid from its text form.
#[derive(Debug, Error)]
pub enum ParseGridError {
    #[error(transparent)]
    UnknownGlyph(#[from] UnknownGlyph),

    #[error("Row {0} does not match the width of the first row")]
    RaggedRow(usize),

    #[error("No cells found")]
    Empty,

    #[error("Expected exactly one {0} cell, found {1}")]
    MarkerCount(Cell, usize),
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();
        let mut rows = 0;
        let mut cols = 0;

        for line in s.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let row = line
                .chars()
                .map(Cell::try_from)
                .collect::<Result<Vec<Cell>, _>>()?;
            if rows == 0 {
                cols = row.len();
            } else if row.len() != cols {
                return Err(ParseGridError::RaggedRow(rows));
            }
            cells.extend(row);
            rows += 1;
        }

        if rows == 0 {
            return Err(ParseGridError::Empty);
        }

        let grid = Grid::from_cells(cells, rows, cols);
        for &marker in &[Cell::Start, Cell::End] {
            let count = grid
                .points()
                .filter(|&point| grid.get(point) == Some(marker))
                .count();
            if count != 1 {
                return Err(ParseGridError::MarkerCount(marker, count));
            }
        }

        Ok(grid)
    }
}
