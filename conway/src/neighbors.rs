// neighbors.rs - Moore-neighbourhood counting with a clamped boundary
//
// Cells past the edge of the grid do not exist: an edge cell has five
// neighbours, a corner cell three. Nothing wraps to the opposite side.

use crate::error::{LifeError, Result};
use crate::grid::Grid;

/// Live cells among the up to eight cells around `(row, col)`.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> Result<u8> {
    if row >= grid.rows() || col >= grid.cols() {
        return Err(LifeError::OutOfBounds {
            row,
            col,
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }
    Ok(live_neighbors(grid, row, col))
}

// Unchecked: `(row, col)` must already be inside `grid`.
pub(crate) fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let rows = row.saturating_sub(1)..=(row + 1).min(grid.rows() - 1);
    let cols = col.saturating_sub(1)..=(col + 1).min(grid.cols() - 1);

    let mut count = 0;
    for nr in rows {
        for nc in cols.clone() {
            if (nr, nc) != (row, col) && grid.alive_at(nr, nc) {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(rows: usize, cols: usize) -> Grid {
        Grid::from_rows(vec![vec![true; cols]; rows]).unwrap()
    }

    #[test]
    fn interior_cell_sees_eight() {
        assert_eq!(count_live_neighbors(&full(3, 3), 1, 1), Ok(8));
    }

    #[test]
    fn corners_see_at_most_three() {
        let grid = full(4, 6);
        for (row, col) in [(0, 0), (0, 5), (3, 0), (3, 5)] {
            assert_eq!(count_live_neighbors(&grid, row, col), Ok(3));
        }
    }

    #[test]
    fn edges_see_at_most_five() {
        let grid = full(4, 6);
        assert_eq!(count_live_neighbors(&grid, 0, 2), Ok(5));
        assert_eq!(count_live_neighbors(&grid, 2, 5), Ok(5));
    }

    #[test]
    fn never_wraps_around() {
        // Only the opposite corners are alive; a toroidal count would see them.
        let grid = Grid::from_live_cells(5, 5, &[(4, 4), (4, 0), (0, 4)]).unwrap();
        assert_eq!(count_live_neighbors(&grid, 0, 0), Ok(0));
    }

    #[test]
    fn excludes_the_cell_itself() {
        let grid = Grid::from_live_cells(3, 3, &[(1, 1)]).unwrap();
        assert_eq!(count_live_neighbors(&grid, 1, 1), Ok(0));
        assert_eq!(count_live_neighbors(&grid, 0, 0), Ok(1));
    }

    #[test]
    fn single_cell_grid_has_no_neighbours() {
        assert_eq!(count_live_neighbors(&full(1, 1), 0, 0), Ok(0));
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let grid = full(2, 2);
        assert_eq!(
            count_live_neighbors(&grid, 0, 2),
            Err(LifeError::OutOfBounds {
                row: 0,
                col: 2,
                rows: 2,
                cols: 2,
            })
        );
    }
}
