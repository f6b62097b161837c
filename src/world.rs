use std::io;
use std::mem;

use tracing::debug;

use crate::display::Display;
use crate::grid::Grid;
use crate::rules;

/// A running colony.
///
/// Holds two grids of identical size: the generation being shown, and a scratch grid the next
/// generation is computed into. The two are swapped after every step, so neither is ever
/// updated while it is being read.
#[derive(Clone, Default, Debug)]
pub struct World {
    /// The generation currently shown
    current: Grid,

    /// Scratch space for the next generation. Its contents are meaningless between steps.
    next: Grid,

    /// Number of steps taken since the world was seeded
    generation: u64,
}

impl World {
    /// Create a world seeded with `grid`
    pub fn new(grid: Grid) -> Self {
        let next = Grid::new(grid.num_rows(), grid.num_cols());

        Self {
            current: grid,
            next,
            generation: 0,
        }
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Throw away the colony and start over from `grid`.
    pub fn replace(&mut self, grid: Grid) {
        self.next.resize(grid.num_rows(), grid.num_cols());
        self.current = grid;
        self.generation = 0;
    }

    /// Advance the world by one generation, then repaint `display`.
    pub fn advance<D: Display>(&mut self, display: &mut D) -> io::Result<()> {
        rules::compute_next(&self.current, &mut self.next, display);
        mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;

        debug!(
            generation = self.generation,
            population = self.current.population(),
            "advanced"
        );

        display.repaint()
    }

    /// Draw the whole current generation from scratch
    pub fn draw<D: Display>(&self, display: &mut D) -> io::Result<()> {
        display.set_dimensions(self.current.num_rows(), self.current.num_cols());

        for (row, col, age) in self.current.cells() {
            display.draw_cell_at(row, col, age);
        }

        display.repaint()
    }
}
