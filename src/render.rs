//! Text rendering of grids and their solved routes.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use maze::{Cell, Grid, Path, Point, Position};

/// Render the grid with part of a route marked.
///
/// Free cells on the route show as `*`; the start and end glyphs win
/// over the marker.
pub fn with_route(grid: &Grid, route: &[Point]) -> String {
    let mut out = String::with_capacity((grid.cols() + 1) * grid.rows());
    for row in 0..grid.rows() as Position {
        for col in 0..grid.cols() as Position {
            let point = Point::new(row, col);
            // The loop stays in bounds, so the read cannot miss.
            let cell = grid.get(point).unwrap();
            if cell == Cell::Free && route.contains(&point) {
                out.push('*');
            } else {
                out.push(cell.glyph());
            }
        }
        out.push('\n');
    }
    out
}

/// Reveal a solved route one step at a time.
///
/// Redraws the grid after each step with the route walked so far, then
/// sleeps for `delay`. The final frame shows the complete route.
pub fn reveal(grid: &Grid, path: &Path, delay: Duration) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for shown in 1..=path.len() {
        write!(out, "\x1B[2J\x1B[H")?;
        write!(out, "{}", with_route(grid, &path[..shown]))?;
        out.flush()?;
        thread::sleep(delay);
    }

    Ok(())
}
