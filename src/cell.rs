/// The age of a cell. `0` is an empty location, anything else is a living cell which has survived
/// `age - 1` generations since it was born.
pub type Age = u32;

/// The dead (empty) cell
pub const DEAD: Age = 0;

/// A freshly born cell
pub const NEWBORN: Age = 1;

/// Oldest age the display distinguishes. Cells older than this are drawn exactly like a cell of
/// this age, but keep aging underneath.
pub const MAX_AGE: Age = 12;

/// Check if the cell is alive.
#[inline]
pub const fn is_alive(age: Age) -> bool {
    age != DEAD
}

/// Age a living cell by one generation.
///
/// The counter saturates rather than wrap, so a very old cell never comes back as dead.
#[inline]
pub const fn grow_older(age: Age) -> Age {
    debug_assert!(is_alive(age), "only living cells age");

    age.saturating_add(1)
}

/// Clamp an age for display purposes.
#[inline]
pub fn display_age(age: Age, max_age: Age) -> Age {
    age.min(max_age)
}
