use std::io;

use crate::cell;
use crate::cell::Age;

/// Anything able to show a colony.
///
/// Drawing is buffered: `draw_cell_at` only records the new state of a location, and nothing is
/// guaranteed to be visible until `repaint` is called.
pub trait Display {
    /// Prepare the display for a grid of `rows` x `cols`. Clears whatever was drawn before.
    fn set_dimensions(&mut self, rows: usize, cols: usize);

    /// Record the state of the location `(row, col)`. An age of `0` draws an empty location.
    fn draw_cell_at(&mut self, row: usize, col: usize, age: Age);

    /// Flush every pending draw
    fn repaint(&mut self) -> io::Result<()>;

    /// The surface the colony is shown on is now `cols` x `rows` characters wide
    fn set_viewport(&mut self, _cols: u16, _rows: u16) {}
}

impl<D: Display + ?Sized> Display for &mut D {
    fn set_dimensions(&mut self, rows: usize, cols: usize) {
        (**self).set_dimensions(rows, cols)
    }

    fn draw_cell_at(&mut self, row: usize, col: usize, age: Age) {
        (**self).draw_cell_at(row, col, age)
    }

    fn repaint(&mut self) -> io::Result<()> {
        (**self).repaint()
    }

    fn set_viewport(&mut self, cols: u16, rows: u16) {
        (**self).set_viewport(cols, rows)
    }
}

/// A display which discards everything
#[derive(Default, Clone, Copy, Debug)]
pub struct NullDisplay;

impl Display for NullDisplay {
    fn set_dimensions(&mut self, _rows: usize, _cols: usize) {}

    fn draw_cell_at(&mut self, _row: usize, _col: usize, _age: Age) {}

    fn repaint(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// How far along a living cell is on its way from dark (new) to gray (old), in `[0, 1]`.
///
/// A newborn yields `0`, anything at or past `max_age` yields `1`. Empty locations have no fade
/// and also yield `0`.
pub fn fade(age: Age, max_age: Age) -> f64 {
    if !cell::is_alive(age) || max_age <= cell::NEWBORN {
        return 0f64;
    }

    let age = cell::display_age(age, max_age);

    (age - cell::NEWBORN) as f64 / (max_age - cell::NEWBORN) as f64
}
