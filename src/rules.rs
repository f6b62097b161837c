use crate::cell;
use crate::cell::Age;
use crate::display::Display;
use crate::display::NullDisplay;
use crate::grid::Grid;

/// Offsets of the eight neighbors of a location
///
/// ```notrust
///   (-1, -1) (-1, 0) (-1, 1)
///   ( 0, -1)    X    ( 0, 1)
///   ( 1, -1) ( 1, 0) ( 1, 1)
/// ```
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// What happens to a location, given how many occupied neighbors it has.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Fate {
    /// Zero or one neighbor. The location is empty in the next generation.
    Lonely,

    /// Two neighbors. An empty location stays empty, a cell stays and ages.
    Stable,

    /// Three neighbors. An empty location gets a new cell, a cell stays and ages.
    Birth,

    /// Four or more neighbors. The location is empty in the next generation.
    Overcrowded,
}

impl Fate {
    pub const fn from_neighbors(n: u8) -> Self {
        match n {
            0 | 1 => Self::Lonely,
            2 => Self::Stable,
            3 => Self::Birth,
            _ => Self::Overcrowded,
        }
    }

    /// Apply the fate to a location currently holding `age`
    pub const fn apply(self, age: Age) -> Age {
        match (self, cell::is_alive(age)) {
            (Self::Lonely | Self::Overcrowded, _) => cell::DEAD,
            (Self::Stable, false) => cell::DEAD,
            (Self::Birth, false) => cell::NEWBORN,
            (Self::Stable | Self::Birth, true) => cell::grow_older(age),
        }
    }
}

/// Count the occupied neighbors of `(row, col)`.
///
/// Locations off the edge of the grid are never occupied. There is no wrapping, so a corner has
/// only three neighbors that can count, and an edge five.
pub fn count_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let (row, col) = (row as isize, col as isize);
    let mut n = 0;

    for (dr, dc) in NEIGHBORS {
        let (r, c) = (row + dr, col + dc);

        if !grid.in_bounds(r, c) {
            continue;
        }

        if cell::is_alive(grid[(r as usize, c as usize)]) {
            n += 1;
        }
    }

    n
}

/// The next age of a location holding `age` with `n` occupied neighbors.
#[inline]
pub const fn next_age(age: Age, n: u8) -> Age {
    Fate::from_neighbors(n).apply(age)
}

/// Compute the generation after `current` into `next`, drawing every new cell on `display` as it
/// goes.
///
/// `next` is resized to the dimensions of `current` first, so whatever it held before is lost.
/// Births and deaths take effect simultaneously: every neighbor count is taken from `current`,
/// which is never written to.
pub fn compute_next<D: Display>(current: &Grid, next: &mut Grid, display: &mut D) {
    next.resize(current.num_rows(), current.num_cols());

    for (row, col, age) in current.cells() {
        let n = count_neighbors(current, row, col);
        let age = next_age(age, n);

        next[(row, col)] = age;
        display.draw_cell_at(row, col, age);
    }
}

/// Like [`compute_next`] but returns a new grid and draws nothing.
pub fn next_generation(current: &Grid) -> Grid {
    let mut next = Grid::default();
    compute_next(current, &mut next, &mut NullDisplay);

    next
}
