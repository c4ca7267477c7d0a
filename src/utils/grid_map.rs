// obstacle grid definition

use std::ops::Deref;

use itertools::iproduct;
extern crate nalgebra as na;

use crate::common::{ClearanceMap, LoadError, SeaResult};

/// State of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Free,
    Blocked,
}

/// Byte values used by map files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapSymbols {
    /// Symbol of a free cell
    pub free: u8,
    /// Symbol of a blocked cell
    pub blocked: u8,
}

impl Default for MapSymbols {
    fn default() -> Self {
        Self {
            free: b'-',
            blocked: b'X',
        }
    }
}

impl MapSymbols {
    pub fn decode(&self, symbol: u8) -> Option<Cell> {
        if symbol == self.free {
            Some(Cell::Free)
        } else if symbol == self.blocked {
            Some(Cell::Blocked)
        } else {
            None
        }
    }
}

/// Rectangular obstacle grid indexed by (row, col)
#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleGrid {
    grid: na::DMatrix<Cell>,
}

impl ObstacleGrid {
    /// Validate and decode rows of symbols.
    ///
    /// A single empty row after the last real one is the residue of a
    /// trailing terminator and is dropped. Fails on zero rows, a zero-width
    /// first row, rows of unequal length or any symbol other than the
    /// free/blocked pair.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R], symbols: &MapSymbols) -> SeaResult<Self> {
        let rows = match rows.split_last() {
            Some((last, rest)) if last.as_ref().is_empty() && !rest.is_empty() => rest,
            _ => rows,
        };
        let first = rows.first().ok_or(LoadError::EmptyMap)?;
        let ncols = first.as_ref().len();
        if ncols == 0 {
            return Err(LoadError::EmptyRow { row: 0 });
        }

        let mut cells = Vec::with_capacity(rows.len() * ncols);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            if line.len() != ncols {
                return Err(LoadError::RaggedRow {
                    row,
                    expected: ncols,
                    found: line.len(),
                });
            }
            for (col, &symbol) in line.iter().enumerate() {
                let cell = symbols
                    .decode(symbol)
                    .ok_or(LoadError::UnknownSymbol { row, col, symbol })?;
                cells.push(cell);
            }
        }

        let grid = na::DMatrix::from_row_slice(rows.len(), ncols, &cells);
        Ok(Self { grid })
    }

    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.grid.nrows() && (col as usize) < self.grid.ncols()
    }

    pub fn cell(&self, row: i32, col: i32) -> Option<Cell> {
        if self.contains(row, col) {
            Some(self.grid[(row as usize, col as usize)])
        } else {
            None
        }
    }

    /// Blocked cells in row-major order
    pub fn obstacles(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        iproduct!(0..self.grid.nrows(), 0..self.grid.ncols())
            .filter(move |&(r, c)| self.grid[(r, c)] == Cell::Blocked)
            .map(|(r, c)| (r as i32, c as i32))
    }
}

impl ClearanceMap for ObstacleGrid {
    fn is_free(&self, row: i32, col: i32) -> bool {
        self.cell(row, col) == Some(Cell::Free)
    }
}

impl Deref for ObstacleGrid {
    type Target = na::DMatrix<Cell>;

    fn deref(&self) -> &Self::Target {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid(rows: &[&str]) -> SeaResult<ObstacleGrid> {
        ObstacleGrid::from_rows(rows, &MapSymbols::default())
    }

    #[test]
    fn test_decode_rows() {
        let g = grid(&["--X", "X--"]).unwrap();
        assert_eq!(g.shape(), (2, 3));
        assert_eq!(g.cell(0, 2), Some(Cell::Blocked));
        assert_eq!(g.cell(1, 1), Some(Cell::Free));
        assert_eq!(g.cell(2, 0), None);
    }

    #[test]
    fn test_non_square_bounds() {
        let g = grid(&["-----", "-----"]).unwrap();
        assert!(g.is_free(1, 4));
        assert!(!g.is_free(4, 1));
        assert!(!g.is_free(-1, 0));
        assert!(!g.is_free(0, 5));
    }

    #[test]
    fn test_rejects_malformed_rows() {
        assert!(matches!(grid(&[]), Err(LoadError::EmptyMap)));
        assert!(matches!(grid(&[""]), Err(LoadError::EmptyRow { row: 0 })));
        assert!(matches!(
            grid(&["---", "--"]),
            Err(LoadError::RaggedRow { row: 1, expected: 3, found: 2 })
        ));
        assert!(matches!(
            grid(&["---", "-o-"]),
            Err(LoadError::UnknownSymbol { row: 1, col: 1, symbol: b'o' })
        ));
    }

    #[test]
    fn test_drops_one_trailing_empty_row() {
        let g = grid(&["---", "-X-", ""]).unwrap();
        assert_eq!((g.nrows(), g.ncols()), (2, 3));
        assert!(!g.is_free(1, 1));

        assert!(matches!(
            grid(&["---", "", ""]),
            Err(LoadError::RaggedRow { row: 1, expected: 3, found: 0 })
        ));
        assert!(matches!(
            grid(&["---", "", "---"]),
            Err(LoadError::RaggedRow { row: 1, expected: 3, found: 0 })
        ));
    }

    #[test]
    fn test_custom_symbols() {
        let symbols = MapSymbols { free: b'.', blocked: b'#' };
        let g = ObstacleGrid::from_rows(&[".#", ".."], &symbols).unwrap();
        assert!(!g.is_free(0, 1));
        assert!(g.is_free(1, 1));
    }

    #[test]
    fn test_obstacles_row_major_and_restartable() {
        let g = grid(&["X-X", "--X"]).unwrap();
        let first: Vec<_> = g.obstacles().collect();
        assert_eq!(first, vec![(0, 0), (0, 2), (1, 2)]);
        let again: Vec<_> = g.obstacles().collect();
        assert_eq!(first, again);
    }

    proptest! {
        #[test]
        fn ragged_rows_always_fail(width in 1usize..8, height in 2usize..8, short in 0usize..8) {
            let short_row = short % height;
            let rows: Vec<String> = (0..height)
                .map(|r| if r == short_row && r > 0 { "-".repeat(width + 1) } else { "-".repeat(width) })
                .collect();
            let result = ObstacleGrid::from_rows(&rows, &MapSymbols::default());
            if short_row > 0 {
                prop_assert!(
                    matches!(result, Err(LoadError::RaggedRow { .. })),
                    "ragged rows were accepted"
                );
            } else {
                prop_assert!(result.is_ok());
            }
        }

        #[test]
        fn foreign_symbol_always_fails(width in 1usize..8, height in 1usize..8, at in 0usize..64, symbol in any::<u8>()) {
            prop_assume!(symbol != b'-' && symbol != b'X');
            let mut rows = vec![vec![b'-'; width]; height];
            let idx = at % (width * height);
            rows[idx / width][idx % width] = symbol;
            let result = ObstacleGrid::from_rows(&rows, &MapSymbols::default());
            prop_assert!(
                matches!(result, Err(LoadError::UnknownSymbol { .. })),
                "foreign symbol was accepted"
            );
        }
    }
}
