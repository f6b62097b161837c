use std::fmt;
use std::ops::Index;
use std::ops::IndexMut;

use thiserror::Error;

use crate::cell;
use crate::cell::Age;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("({row}, {col}) is outside of a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Row {row} has {got} cells, expected {exp}")]
    Ragged { row: usize, exp: usize, got: usize },
}

/// A rectangular grid of cell ages, stored row-major.
///
/// ```notrust
///         col 0   col 1   col 2
/// row 0   [0]     [1]     [2]
/// row 1   [3]     [4]     [5]
/// ```
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Grid {
    /// Every cell of the grid. `cells[row * cols + col]` is the cell at `(row, col)`.
    cells: Vec<Age>,

    rows: usize,
    cols: usize,
}

impl Grid {
    /// Create an empty (all dead) grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![cell::DEAD; rows * cols],
            rows,
            cols,
        }
    }

    /// Build a grid from a list of rows. Every row must be as long as the first one.
    pub fn from_rows(rows: Vec<Vec<Age>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut grid = Self::new(rows.len(), cols);

        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: r,
                    exp: cols,
                    got: row.len(),
                });
            }

            let start = r * cols;
            grid.cells[start..start + cols].copy_from_slice(&row);
        }

        Ok(grid)
    }

    /// Reallocate the grid to `rows` x `cols`. Every cell is dead afterwards, including the ones
    /// which were already in range.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.cells.clear();
        self.cells.resize(rows * cols, cell::DEAD);

        self.rows = rows;
        self.cols = cols;
    }

    pub fn num_rows(&self) -> usize {
        self.rows
    }

    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// Whether `(row, col)` lies on the grid. Takes signed coordinates so that neighbor offsets
    /// can be checked before they are turned into indices.
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        (0..self.rows as isize).contains(&row) && (0..self.cols as isize).contains(&col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Age, GridError> {
        let i = self.index_of(row, col)?;

        Ok(self.cells[i])
    }

    pub fn set(&mut self, row: usize, col: usize, age: Age) -> Result<(), GridError> {
        let i = self.index_of(row, col)?;
        self.cells[i] = age;

        Ok(())
    }

    /// Iterate over every cell as `(row, col, age)`, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Age)> + '_ {
        let cols = self.cols;

        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &age)| (i / cols, i % cols, age))
    }

    /// Number of living cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&age| cell::is_alive(age)).count()
    }

    fn index_of(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }

        Ok(row * self.cols + col)
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Age;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        match self.index_of(row, col) {
            Ok(i) => &self.cells[i],
            Err(e) => panic!("{e}"),
        }
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        match self.index_of(row, col) {
            Ok(i) => &mut self.cells[i],
            Err(e) => panic!("{e}"),
        }
    }
}

/// Writes the grid in the same layout colony files use: `-` for an empty location, `o` for a
/// living cell.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let start = row * self.cols;

            for &age in &self.cells[start..start + self.cols] {
                let c = if cell::is_alive(age) { 'o' } else { '-' };
                write!(f, "{c}")?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
