// patterns.rs - Named seed patterns, as offsets from their top-left corner

use crate::error::{LifeError, Result};
use crate::grid::Grid;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

/// Looks a pattern up by name, ignoring case, spaces, `-` and `_`.
pub fn find(name: &str) -> Result<&'static Pattern> {
    let wanted = normalize(name);
    PATTERNS
        .iter()
        .find(|pattern| normalize(pattern.name) == wanted)
        .ok_or_else(|| LifeError::UnknownPattern(name.to_string()))
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl Pattern {
    /// Bounding box as `(height, width)`.
    pub fn size(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }

    /// A dead grid with this pattern's top-left corner at `(row, col)`.
    pub fn place_at(&self, rows: usize, cols: usize, row: usize, col: usize) -> Result<Grid> {
        let (height, width) = self.size();
        let fits = row.checked_add(height).is_some_and(|end| end <= rows)
            && col.checked_add(width).is_some_and(|end| end <= cols);
        if !fits {
            // Let bad dimensions surface as configuration errors first.
            Grid::dead(rows, cols)?;
            return Err(LifeError::PatternDoesNotFit {
                name: self.name,
                rows,
                cols,
            });
        }

        let live: Vec<(usize, usize)> = self
            .cells
            .iter()
            .map(|&(r, c)| (row + r, col + c))
            .collect();
        Grid::from_live_cells(rows, cols, &live)
    }

    pub fn centered(&self, rows: usize, cols: usize) -> Result<Grid> {
        let (height, width) = self.size();
        let top = rows.saturating_sub(height) / 2;
        let left = cols.saturating_sub(width) / 2;
        self.place_at(rows, cols, top, left)
    }
}
