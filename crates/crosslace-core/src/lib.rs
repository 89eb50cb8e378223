//! Core data structures for the crosslace crossword engine.
//!
//! This crate provides the puzzle data model and the pure grid builders the
//! rest of the workspace is built on. It has no mutable state of its own:
//! everything here is a function of the clue data.
//!
//! # Overview
//!
//! 1. **Core types**
//!    - [`clue`]: a single word placement (answer, start, orientation, hint,
//!      display number)
//!    - [`orientation`]: across/down layout direction
//!    - [`position`]: 0-based grid coordinates
//! 2. **Grids**
//!    - [`grid`]: the 2-D cell array ([`Cell`] is blocked, empty, or an
//!      uppercase letter)
//! 3. **Puzzles**
//!    - [`puzzle`]: [`Puzzle`] derives grid dimensions from its clues and
//!      builds both the blank initial grid and the solved answer grid from
//!      one shared sizing, so the two always agree cell-for-cell in shape;
//!      [`PuzzleSet`] holds the per-level puzzle list
//! 4. **Errors**
//!    - [`error`]: construction-time validation ([`PuzzleError`]) and level
//!      lookup ([`LevelOutOfRange`])
//!
//! # Examples
//!
//! ```
//! use crosslace_core::{Cell, Clue, Orientation, Position, Puzzle};
//!
//! let puzzle = Puzzle::new(vec![
//!     Clue::new("cat", 1, 1, Orientation::Across, "Feline pet", 1)?,
//!     Clue::new("car", 1, 1, Orientation::Down, "It drives", 1)?,
//! ])?;
//!
//! let initial = puzzle.initial_grid();
//! assert_eq!(initial[Position::new(0, 0)], Cell::Empty);
//! assert_eq!(initial[Position::new(1, 1)], Cell::Blocked);
//!
//! let answer = puzzle.answer_grid();
//! assert_eq!(answer[Position::new(2, 0)], Cell::Letter('T'));
//! # Ok::<(), crosslace_core::PuzzleError>(())
//! ```

pub mod clue;
pub mod error;
pub mod grid;
pub mod orientation;
pub mod position;
pub mod puzzle;

// Re-export commonly used types
pub use self::{
    clue::Clue,
    error::{LevelOutOfRange, PuzzleError},
    grid::{Cell, Grid},
    orientation::Orientation,
    position::Position,
    puzzle::{Puzzle, PuzzleSet},
};
