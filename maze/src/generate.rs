//! Randomized maze generation.
//!
//! Walls fall independently per cell from an injected random stream;
//! the start and end markers are stamped into opposite corners
//! afterwards, so they are never walls.

use log::debug;
use rand::Rng;

use super::cell::Cell;
use super::grid::{Grid, GridError};
use super::point::{Point, Position};

/// Generate a maze grid of the given dimensions.
///
/// Every cell draws one uniform sample from `rng` in row-major order
/// and becomes a wall when the sample falls below `wall_density`. The
/// draw covers the two corner cells as well, before the start and end
/// markers replace whatever landed there, so a seeded stream always
/// produces the same grid for the same dimensions.
///
/// Densities outside `0.0..=1.0` are rejected, not clamped.
pub fn generate<R>(
    rows: usize,
    cols: usize,
    wall_density: f64,
    rng: &mut R,
) -> Result<Grid, GridError>
where
    R: Rng,
{
    // A single cell has no room for distinct start and end markers.
    if rows < 1 || cols < 1 || rows * cols < 2 {
        return Err(GridError::InvalidDimensions { rows, cols });
    }
    if !(0.0..=1.0).contains(&wall_density) {
        return Err(GridError::InvalidDensity(wall_density));
    }

    let mut cells = Vec::with_capacity(rows * cols);
    for _ in 0..rows * cols {
        cells.push(if rng.gen::<f64>() < wall_density {
            Cell::Wall
        } else {
            Cell::Free
        });
    }

    let mut grid = Grid::from_cells(cells, rows, cols);
    grid.put(Point::origin(), Cell::Start);
    grid.put(
        Point::new(rows as Position - 1, cols as Position - 1),
        Cell::End,
    );

    debug!("Generated a {}x{} grid at density {}", rows, cols, wall_density);

    Ok(grid)
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn markers_occupy_the_corners() {
        let mut rng = StdRng::seed_from_u64(99);
        let grid = generate(10, 8, 0.9, &mut rng).unwrap();

        assert_eq!(grid.start(), Point::origin());
        assert_eq!(grid.end(), Point::new(9, 7));

        let starts = grid
            .points()
            .filter(|&p| grid.get(p) == Some(Cell::Start))
            .count();
        let ends = grid
            .points()
            .filter(|&p| grid.get(p) == Some(Cell::End))
            .count();
        assert_eq!((starts, ends), (1, 1));
    }

    #[test]
    fn density_bounds_the_walls() {
        let mut rng = StdRng::seed_from_u64(99);

        let open = generate(6, 6, 0.0, &mut rng).unwrap();
        assert!(open.points().all(|p| open.get(p) != Some(Cell::Wall)));

        let packed = generate(6, 6, 1.0, &mut rng).unwrap();
        let walls = packed
            .points()
            .filter(|&p| packed.get(p) == Some(Cell::Wall))
            .count();
        assert_eq!(walls, 6 * 6 - 2);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = generate(12, 12, 0.35, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = generate(12, 12, 0.35, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn dimensions_are_validated() {
        let mut rng = StdRng::seed_from_u64(0);
        for &(rows, cols) in &[(0, 5), (5, 0), (1, 1)] {
            assert!(matches!(
                generate(rows, cols, 0.2, &mut rng),
                Err(GridError::InvalidDimensions { .. })
            ));
        }
        assert!(generate(1, 2, 0.2, &mut rng).is_ok());
    }

    #[test]
    fn density_is_validated() {
        let mut rng = StdRng::seed_from_u64(0);
        for &density in &[-0.1, 1.5, ::std::f64::NAN] {
            assert!(matches!(
                generate(4, 4, density, &mut rng),
                Err(GridError::InvalidDensity(_))
            ));
        }
    }
}
