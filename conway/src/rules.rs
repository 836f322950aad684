// rules.rs - The Life transition rule (B3/S23) with synchronous update
//
// Every neighbour count for generation `n + 1` is taken from generation `n`;
// the successor is written to a separate buffer, so no cell ever observes a
// neighbour's already-updated state.

use crate::grid::Grid;
use crate::neighbors::live_neighbors;

/// Next state of one cell given its current state and live-neighbour count.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3)            => true, // Birth
        _                     => false, // Under/over-population, or stays dead
    }
}

/// The successor generation of `grid`, as a new grid of the same size.
pub fn advance(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    advance_into(grid, &mut next);
    next
}

// `next` must have the same dimensions as `current`.
fn advance_into(current: &Grid, next: &mut Grid) {
    debug_assert_eq!((current.rows(), current.cols()), (next.rows(), next.cols()));

    let cols = current.cols();
    for (index, cell) in next.cells_mut().iter_mut().enumerate() {
        let (row, col) = (index / cols, index % cols);
        *cell = next_state(current.alive_at(row, col), live_neighbors(current, row, col));
    }
}

/// Two preallocated grids that alternate roles each generation.
///
/// `step` computes into the spare buffer then swaps, so a long run allocates
/// nothing after construction.
#[derive(Debug, Clone)]
pub struct GridBuffers {
    current: Grid,
    next: Grid,
}

impl GridBuffers {
    pub fn new(initial: Grid) -> Self {
        let next = initial.clone();
        Self {
            current: initial,
            next,
        }
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn step(&mut self) -> &Grid {
        advance_into(&self.current, &mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
        &self.current
    }

    pub fn into_current(self) -> Grid {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_table() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "alive with {n}");
            assert_eq!(next_state(false, n), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn block_is_a_still_life() {
        let block = Grid::from_live_cells(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]).unwrap();
        let next = advance(&block);
        assert_eq!(next, block);
        assert_eq!(advance(&next), next);
    }

    #[test]
    fn blinker_has_period_two() {
        let vertical = Grid::from_live_cells(5, 5, &[(1, 2), (2, 2), (3, 2)]).unwrap();
        let horizontal = Grid::from_live_cells(5, 5, &[(2, 1), (2, 2), (2, 3)]).unwrap();

        let once = advance(&vertical);
        assert_ne!(once, vertical);
        assert_eq!(once, horizontal);
        assert_eq!(advance(&once), vertical);
    }

    #[test]
    fn lone_cell_dies_anywhere() {
        for (row, col) in [(0, 0), (0, 3), (3, 0), (3, 3), (0, 1), (2, 3), (1, 2)] {
            let grid = Grid::from_live_cells(4, 4, &[(row, col)]).unwrap();
            assert_eq!(advance(&grid).population(), 0, "cell at ({row}, {col})");
        }
    }

    #[test]
    fn reads_only_the_old_generation() {
        // An in-place sweep would already see (0, 0) dead when counting (0, 1).
        let grid = Grid::from_live_cells(3, 3, &[(0, 0), (0, 2), (1, 0)]).unwrap();
        let expected = Grid::from_live_cells(3, 3, &[(0, 1), (1, 1)]).unwrap();
        assert_eq!(advance(&grid), expected);
    }

    #[test]
    fn advance_is_deterministic() {
        let live = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2), (5, 5)];
        let grid = Grid::from_live_cells(6, 6, &live).unwrap();
        assert_eq!(advance(&grid), advance(&grid));
    }

    #[test]
    fn buffers_match_advance() {
        let live = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
        let glider = Grid::from_live_cells(8, 8, &live).unwrap();
        let mut buffers = GridBuffers::new(glider.clone());

        let mut expected = glider;
        for _ in 0..12 {
            expected = advance(&expected);
            assert_eq!(buffers.step(), &expected);
        }
        assert_eq!(buffers.into_current(), expected);
    }
}
