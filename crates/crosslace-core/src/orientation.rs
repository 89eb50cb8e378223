//! Word layout direction.

use std::fmt::{self, Display};

/// The direction a word is laid out on the grid.
///
/// # Examples
///
/// ```
/// use crosslace_core::Orientation;
///
/// assert!(Orientation::Across.is_across());
/// assert_eq!(Orientation::Down.to_string(), "down");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Orientation {
    /// Left to right along a row.
    Across,
    /// Top to bottom along a column.
    Down,
}

impl Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::Across => "across",
            Orientation::Down => "down",
        };
        f.write_str(name)
    }
}
