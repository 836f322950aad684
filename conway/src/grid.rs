// grid.rs - Grid type for Conway's Game of Life

use std::fmt;

use rand::Rng;

use crate::error::{ConfigError, LifeError, Result};

/// A fixed-size rectangle of cells, stored row-major in one flat buffer.
///
/// The public API is read-only. A new generation is always a new `Grid`
/// (or the other half of a [`GridBuffers`](crate::rules::GridBuffers) pair),
/// never an in-place edit of the one being read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

/// Number of cells in a `rows` x `cols` grid, rejecting empty or
/// unaddressable sizes.
pub(crate) fn check_dimensions(
    rows: usize,
    cols: usize,
) -> std::result::Result<usize, ConfigError> {
    if rows == 0 {
        return Err(ConfigError::ZeroRows);
    }
    if cols == 0 {
        return Err(ConfigError::ZeroCols);
    }
    rows.checked_mul(cols).ok_or(ConfigError::GridTooLarge { rows, cols })
}

pub(crate) fn check_density(density: f64) -> std::result::Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(ConfigError::DensityOutOfRange(density));
    }
    Ok(())
}

impl Grid {
    /// An all-dead grid.
    pub fn dead(rows: usize, cols: usize) -> Result<Self> {
        let len = check_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![false; len],
        })
    }

    /// Every cell is independently alive with probability `density`.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        density: f64,
        rng: &mut R,
    ) -> Result<Self> {
        let len = check_dimensions(rows, cols)?;
        check_density(density)?;

        let cells = (0..len).map(|_| rng.random_bool(density)).collect();
        Ok(Self { rows, cols, cells })
    }

    /// A dead grid with the listed `(row, col)` cells alive.
    pub fn from_live_cells(rows: usize, cols: usize, live: &[(usize, usize)]) -> Result<Self> {
        let mut grid = Self::dead(rows, cols)?;
        for &(row, col) in live {
            let index = grid.index(row, col)?;
            grid.cells[index] = true;
        }
        Ok(grid)
    }

    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.is_empty() || cols == 0 || rows.iter().any(|row| row.len() != cols) {
            return Err(LifeError::RaggedRows);
        }

        let row_count = rows.len();
        let cells = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        self.index(row, col).map(|index| self.cells[index])
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.cols)
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(LifeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    // Callers iterate within bounds.
    pub(crate) fn alive_at(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            let line: String = row.iter().map(|&alive| if alive { '#' } else { ' ' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn zero_density_is_all_dead() {
        let mut rng = StdRng::seed_from_u64(7);
        for (rows, cols) in [(1, 1), (3, 9), (20, 40)] {
            let grid = Grid::random(rows, cols, 0.0, &mut rng).unwrap();
            assert_eq!(grid.population(), 0);
        }
    }

    #[test]
    fn full_density_is_all_alive() {
        let mut rng = StdRng::seed_from_u64(7);
        for (rows, cols) in [(1, 1), (3, 9), (20, 40)] {
            let grid = Grid::random(rows, cols, 1.0, &mut rng).unwrap();
            assert_eq!(grid.population(), rows * cols);
        }
    }

    #[test]
    fn same_seed_same_grid() {
        let a = Grid::random(16, 16, 0.3, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Grid::random(16, 16, 0.3, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_bad_arguments() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Grid::random(0, 5, 0.5, &mut rng),
            Err(LifeError::InvalidConfig(ConfigError::ZeroRows))
        );
        assert_eq!(
            Grid::random(5, 0, 0.5, &mut rng),
            Err(LifeError::InvalidConfig(ConfigError::ZeroCols))
        );
        assert_eq!(
            Grid::random(5, 5, 1.5, &mut rng),
            Err(LifeError::InvalidConfig(ConfigError::DensityOutOfRange(1.5)))
        );
        assert!(Grid::random(5, 5, -0.1, &mut rng).is_err());
        assert!(Grid::random(5, 5, f64::NAN, &mut rng).is_err());
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        assert_eq!(
            Grid::from_rows(vec![vec![true, false], vec![true]]),
            Err(LifeError::RaggedRows)
        );
        assert_eq!(Grid::from_rows(vec![]), Err(LifeError::RaggedRows));
        assert_eq!(Grid::from_rows(vec![vec![]]), Err(LifeError::RaggedRows));
    }

    #[test]
    fn lookups_are_bounds_checked() {
        let grid = Grid::from_live_cells(2, 3, &[(1, 2)]).unwrap();
        assert_eq!(grid.get(1, 2), Ok(true));
        assert_eq!(grid.get(0, 0), Ok(false));
        assert_eq!(
            grid.get(2, 0),
            Err(LifeError::OutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 3,
            })
        );
        assert!(Grid::from_live_cells(2, 3, &[(0, 3)]).is_err());
    }

    #[test]
    fn rejects_sizes_whose_cell_count_overflows() {
        let huge = 1usize << (usize::BITS / 2 + 1);
        let expected = Err(LifeError::InvalidConfig(ConfigError::GridTooLarge {
            rows: huge,
            cols: huge,
        }));

        assert_eq!(Grid::dead(huge, huge), expected);
        assert_eq!(Grid::random(huge, huge, 0.5, &mut StdRng::seed_from_u64(1)), expected);
        assert_eq!(
            Grid::dead(usize::MAX, 2),
            Err(LifeError::InvalidConfig(ConfigError::GridTooLarge {
                rows: usize::MAX,
                cols: 2,
            }))
        );
    }

    #[test]
    fn displays_like_the_console() {
        let rows = vec![vec![true, false, true], vec![false, true, false]];
        let grid = Grid::from_rows(rows).unwrap();
        assert_eq!(grid.to_string(), "# #\n # \n");
    }
}
