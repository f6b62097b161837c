use std::fs;
use std::io;
use std::ops::RangeInclusive;
use std::path::Path;
use std::path::PathBuf;

use rand::Rng;
use thiserror::Error;
use tracing::debug;
use tracing::warn;

use crate::cell;
use crate::cell::Age;
use crate::grid::Grid;
use crate::parse_util;
use crate::parse_util::ConvertError;

/// Largest number of cells a colony may have, whether read from a file or seeded at random
const MAX_CELLS: usize = 1 << 24;

/// Extension tried when a colony file is given without one
const COLONY_EXTENSION: &str = "txt";

/// Marks an empty location in a colony file. Any other character is a cell.
const EMPTY: char = '-';

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Unable to open the file named \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Expected the number of rows, found end of input")]
    NoRows,

    #[error("Expected the number of columns, found end of input")]
    NoCols,

    #[error("Failed to parse the number of rows: {0}")]
    ParseRows(#[source] ConvertError),

    #[error("Failed to parse the number of columns: {0}")]
    ParseCols(#[source] ConvertError),

    #[error("A {rows}x{cols} colony is too large")]
    TooLarge { rows: usize, cols: usize },

    #[error("Expected {exp} rows, but the file ends after {got}")]
    MissingRow { exp: usize, got: usize },

    #[error("Row {row} has {got} cells, expected {exp}")]
    RowWidth { row: usize, exp: usize, got: usize },

    #[error("Row {row} is not valid UTF-8")]
    InvalidUtf8 { row: usize },

    #[error("Empty {what} range {start}..={end}")]
    EmptyRange {
        what: &'static str,
        start: usize,
        end: usize,
    },

    #[error("Probability of a cell being alive must lie in [0, 1], got {0}")]
    Density(f64),

    #[error("The maximum age must be at least 1")]
    MaxAge,
}

/// Seeds colonies at random.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomSeed {
    /// Range the number of rows is drawn from
    rows: RangeInclusive<usize>,

    /// Range the number of columns is drawn from
    cols: RangeInclusive<usize>,

    /// Chance of any location starting with a cell
    alive_probability: f64,

    /// Living cells start with an age drawn from `1..=max_age`
    max_age: Age,
}

impl Default for RandomSeed {
    fn default() -> Self {
        Self {
            rows: 40..=60,
            cols: 40..=60,
            alive_probability: 0.5,
            max_age: cell::MAX_AGE,
        }
    }
}

impl RandomSeed {
    pub fn new(
        rows: RangeInclusive<usize>,
        cols: RangeInclusive<usize>,
        alive_probability: f64,
        max_age: Age,
    ) -> Result<Self, SeedError> {
        for (what, range) in [("row", &rows), ("column", &cols)] {
            if range.is_empty() {
                return Err(SeedError::EmptyRange {
                    what,
                    start: *range.start(),
                    end: *range.end(),
                });
            }
        }

        let (max_rows, max_cols) = (*rows.end(), *cols.end());
        if max_rows.checked_mul(max_cols).is_none_or(|n| n > MAX_CELLS) {
            return Err(SeedError::TooLarge {
                rows: max_rows,
                cols: max_cols,
            });
        }

        if !(0f64..=1f64).contains(&alive_probability) {
            return Err(SeedError::Density(alive_probability));
        }

        if max_age < cell::NEWBORN {
            return Err(SeedError::MaxAge);
        }

        Ok(Self {
            rows,
            cols,
            alive_probability,
            max_age,
        })
    }

    /// Seed a new colony
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Grid {
        let rows = rng.gen_range(self.rows.clone());
        let cols = rng.gen_range(self.cols.clone());

        let mut grid = Grid::new(rows, cols);

        for row in 0..rows {
            for col in 0..cols {
                if rng.gen_bool(self.alive_probability) {
                    grid[(row, col)] = rng.gen_range(cell::NEWBORN..=self.max_age);
                }
            }
        }

        debug!(rows, cols, population = grid.population(), "seeded randomly");

        grid
    }
}

/// Parse a colony file.
///
/// # Format
/// ```notrust
/// 3 4
/// -o--
/// --o-
/// ooo-
/// ```
///
/// The number of rows and columns come first, followed by one line per row holding exactly one
/// character per column. `-` is an empty location, anything else is a newborn cell.
pub fn parse_colony(bytes: &[u8]) -> Result<Grid, SeedError> {
    let (Some(rows), bytes) = parse_util::take_token(bytes) else {
        return Err(SeedError::NoRows);
    };
    let rows: usize = parse_util::convert(rows).map_err(SeedError::ParseRows)?;

    let (Some(cols), mut bytes) = parse_util::take_token(bytes) else {
        return Err(SeedError::NoCols);
    };
    let cols: usize = parse_util::convert(cols).map_err(SeedError::ParseCols)?;

    if rows.checked_mul(cols).is_none_or(|n| n > MAX_CELLS) {
        return Err(SeedError::TooLarge { rows, cols });
    }

    let mut grid = Grid::new(rows, cols);

    for row in 0..rows {
        let (Some(line), rest) = parse_util::take_token(bytes) else {
            return Err(SeedError::MissingRow {
                exp: rows,
                got: row,
            });
        };
        bytes = rest;

        let Ok(line) = std::str::from_utf8(line) else {
            return Err(SeedError::InvalidUtf8 { row });
        };

        let got = line.chars().count();
        if got != cols {
            return Err(SeedError::RowWidth {
                row,
                exp: cols,
                got,
            });
        }

        for (col, c) in line.chars().enumerate() {
            if c != EMPTY {
                grid[(row, col)] = cell::NEWBORN;
            }
        }
    }

    if parse_util::peek_1(parse_util::take_ws(bytes)).is_some() {
        warn!("Colony file has more than {rows} rows. Ignoring the rest");
    }

    Ok(grid)
}

/// Read and parse the colony file at `path`.
///
/// A path without an extension which doesn't exist is retried with `.txt` appended, so that
/// colonies can be named the way they are listed.
pub fn load_colony(path: &Path) -> Result<Grid, SeedError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound && path.extension().is_none() => {
            let with_extension = path.with_extension(COLONY_EXTENSION);
            debug!(path = %with_extension.display(), "retrying with extension");

            // Report the name as it was given
            fs::read(&with_extension).map_err(|source| SeedError::Io {
                path: path.to_path_buf(),
                source,
            })?
        }
        Err(source) => {
            return Err(SeedError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let grid = parse_colony(&bytes)?;
    debug!(
        path = %path.display(),
        rows = grid.num_rows(),
        cols = grid.num_cols(),
        "loaded colony"
    );

    Ok(grid)
}
