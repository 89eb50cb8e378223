//! Crossword game session management.
//!
//! This crate owns everything mutable about playing a crossword: the
//! [`Session`] tracks the current level, the player's grid, the typing
//! orientation, and the focused cell, and exposes the operations a host
//! surface wires its input events to. Grid construction and the puzzle data
//! model live in [`crosslace_core`].
//!
//! # Example
//!
//! ```
//! use crosslace_core::{Clue, Orientation, Position, Puzzle, PuzzleSet};
//! use crosslace_game::{Session, Verdict};
//!
//! let puzzle = Puzzle::new(vec![
//!     Clue::new("cat", 1, 1, Orientation::Across, "Feline pet", 1)?,
//!     Clue::new("car", 1, 1, Orientation::Down, "It drives", 1)?,
//! ])?;
//! let mut session = Session::new(PuzzleSet::new(vec![puzzle]))?;
//!
//! // Typing a letter advances focus along the word.
//! session.set_cell(Position::new(0, 0), "c")?;
//! assert_eq!(session.focus(), Some(Position::new(1, 0)));
//!
//! assert_eq!(session.verify(), Verdict::Incorrect);
//! session.solve();
//! assert_eq!(session.verify(), Verdict::Correct);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crosslace_core::Position;

mod session;

pub use self::session::Session;

/// Outcome of checking the player's grid against the answer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Verdict {
    /// Every cell matches the answer grid exactly.
    Correct,
    /// At least one cell differs; cells still empty count as differing.
    Incorrect,
}

/// Player input addressed at a cell that cannot accept it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The cell lies outside the current grid.
    #[display("cell {pos} is outside the {width}x{height} grid")]
    OutOfBounds {
        /// The addressed cell.
        pos: Position,
        /// Width of the current grid.
        width: usize,
        /// Height of the current grid.
        height: usize,
    },
    /// The cell is not part of any clue.
    #[display("cell {pos} is blocked")]
    BlockedCell {
        /// The addressed cell.
        pos: Position,
    },
}
