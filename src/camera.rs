use std::io;
use std::io::Write;

use crossterm::cursor;
use crossterm::queue;
use crossterm::style;
use crossterm::style::Color;
use crossterm::terminal;

use crate::cell;
use crate::cell::Age;
use crate::display;
use crate::display::Display;
use crate::ext::color::ColorInterpolationExt;

/// Glyphs for living cells in the plain text frame, from newborn to old.
///
/// New cells are dense and dark, and fade out as they age.
const RAMP: [char; 5] = ['@', '#', '*', '+', ':'];

/// Glyph for an empty location in the plain text frame
const EMPTY: char = '.';

/// Color of a newborn cell
const NEW_COLOR: Color = Color::Rgb {
    r: 20,
    g: 20,
    b: 20,
};

/// Color of a cell at or past the maximum age
const OLD_COLOR: Color = Color::Rgb {
    r: 190,
    g: 190,
    b: 190,
};

/// Background of the colony
const BACKGROUND: Color = Color::Rgb {
    r: 245,
    g: 245,
    b: 240,
};

/// A terminal display.
///
/// Every cell is drawn as two columns wide so that the colony comes out roughly square.
pub struct Camera<W: Write> {
    /// The cell buffer
    cb: Vec<Age>,

    /// The frame buffer. Only used for plain text output.
    fb: String,

    /// Number of rows of the colony
    rows: usize,

    /// Number of columns of the colony
    cols: usize,

    /// Size of the terminal as `(cols, rows)`, if known. The colony is clipped to it.
    viewport: Option<(u16, u16)>,

    /// Ages at or above this are drawn as fully faded
    max_age: Age,

    /// Whether to paint with colors, rather than printing the plain text frame
    color: bool,

    /// Whether the screen must be cleared before the next repaint
    needs_clear: bool,

    out: W,
}

impl<W: Write> Camera<W> {
    pub fn new(out: W, max_age: Age) -> Self {
        Self {
            cb: Vec::new(),
            fb: String::new(),
            rows: 0,
            cols: 0,
            viewport: None,
            max_age,
            color: true,
            needs_clear: false,
            out,
        }
    }

    /// Paint with plain text glyphs instead of colors
    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }

    /// Clip the drawing to a terminal of `cols` x `rows` characters
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.viewport = Some((cols, rows));
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Build the plain text frame, one line per visible row.
    pub fn frame(&mut self) -> &str {
        let (rows, cols) = self.visible();

        self.fb.clear();

        for row in 0..rows {
            for col in 0..cols {
                let age = self.cb[row * self.cols + col];
                self.fb.push(Self::glyph(age, self.max_age));
            }

            self.fb.push('\n');
        }

        &self.fb
    }

    /// Rows and columns which fit in the viewport
    fn visible(&self) -> (usize, usize) {
        match self.viewport {
            // Leave the last line free for the status of the terminal
            Some((w, h)) => (
                self.rows.min((h as usize).saturating_sub(1)),
                self.cols.min(w as usize / 2),
            ),
            None => (self.rows, self.cols),
        }
    }

    fn glyph(age: Age, max_age: Age) -> char {
        if !cell::is_alive(age) {
            return EMPTY;
        }

        let fade = display::fade(age, max_age);
        let i = (fade * (RAMP.len() - 1) as f64).round() as usize;

        RAMP[i]
    }

    fn paint(&mut self) -> io::Result<()> {
        let (rows, cols) = self.visible();

        queue!(self.out, cursor::MoveTo(0, 0))?;

        for row in 0..rows {
            queue!(self.out, style::SetBackgroundColor(BACKGROUND))?;

            for col in 0..cols {
                let age = self.cb[row * self.cols + col];

                if cell::is_alive(age) {
                    let fade = display::fade(age, self.max_age);
                    let color = NEW_COLOR.lerp(&OLD_COLOR, fade);

                    queue!(
                        self.out,
                        style::SetForegroundColor(color),
                        style::Print("\u{2588}\u{2588}")
                    )?;
                } else {
                    queue!(self.out, style::Print("  "))?;
                }
            }

            queue!(self.out, style::ResetColor, cursor::MoveToNextLine(1))?;
        }

        Ok(())
    }
}

impl<W: Write> Display for Camera<W> {
    fn set_dimensions(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;

        self.cb.clear();
        self.cb.resize(rows * cols, cell::DEAD);
        self.fb = String::with_capacity((cols + 1) * rows);

        // Whatever the previous colony left on screen goes on the next repaint
        self.needs_clear = true;
    }

    fn draw_cell_at(&mut self, row: usize, col: usize, age: Age) {
        assert!(row < self.rows, "row is out of bounds");
        assert!(col < self.cols, "col is out of bounds");

        self.cb[row * self.cols + col] = age;
    }

    fn repaint(&mut self) -> io::Result<()> {
        if self.needs_clear {
            queue!(self.out, terminal::Clear(terminal::ClearType::All))?;
            self.needs_clear = false;
        }

        if self.color {
            self.paint()?;
        } else {
            self.frame();
            queue!(self.out, cursor::MoveTo(0, 0))?;

            for line in self.fb.lines() {
                queue!(self.out, style::Print(line), cursor::MoveToNextLine(1))?;
            }
        }

        self.out.flush()
    }

    fn set_viewport(&mut self, cols: u16, rows: u16) {
        self.resize(cols, rows);
    }
}
