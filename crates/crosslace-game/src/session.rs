//! The active-puzzle session.

use crosslace_core::{Cell, Grid, LevelOutOfRange, Orientation, Position, Puzzle, PuzzleSet};

use crate::{GameError, Verdict};

/// A crossword play session over a set of per-level puzzles.
///
/// The session is the single owner of all mutable game state: the current
/// level index, the player's grid, the typing orientation, and the focused
/// cell. Hosts render from the shared accessors and mutate only through the
/// operations here; serializing input events (the natural behavior of a UI
/// event queue) is the caller's responsibility.
///
/// # Example
///
/// ```
/// use crosslace_core::{Clue, Orientation, Position, Puzzle, PuzzleSet};
/// use crosslace_game::Session;
///
/// let puzzle = Puzzle::new(vec![
///     Clue::new("cat", 1, 1, Orientation::Across, "Feline pet", 1)?,
///     Clue::new("car", 1, 1, Orientation::Down, "It drives", 1)?,
/// ])?;
/// let mut session = Session::new(PuzzleSet::new(vec![puzzle]))?;
///
/// // Focusing the shared start cell picks the later clue's orientation.
/// let orientation = session.focus_cell(Position::new(0, 0))?;
/// assert_eq!(orientation, Orientation::Down);
///
/// // Typing moves focus down the word.
/// session.set_cell(Position::new(0, 0), "c")?;
/// assert_eq!(session.focus(), Some(Position::new(0, 1)));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    puzzles: PuzzleSet,
    level: usize,
    grid: Grid,
    orientation: Orientation,
    focus: Option<Position>,
}

impl Session {
    /// Creates a session starting at level 0.
    ///
    /// # Errors
    ///
    /// Returns [`LevelOutOfRange`] if the set is empty.
    pub fn new(puzzles: PuzzleSet) -> Result<Self, LevelOutOfRange> {
        Self::with_level(puzzles, 0)
    }

    /// Creates a session starting at the given level.
    ///
    /// # Errors
    ///
    /// Returns [`LevelOutOfRange`] if the set has no puzzle at `level`.
    pub fn with_level(puzzles: PuzzleSet, level: usize) -> Result<Self, LevelOutOfRange> {
        let grid = puzzles.get(level)?.initial_grid();
        Ok(Self {
            puzzles,
            level,
            grid,
            orientation: Orientation::Across,
            focus: None,
        })
    }

    fn current_puzzle(&self) -> &Puzzle {
        self.puzzles
            .get(self.level)
            .expect("session keeps its level within the puzzle set")
    }

    /// Returns the current level index.
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Returns the number of levels in the set.
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.puzzles.len()
    }

    /// Returns the puzzle for the current level.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        self.current_puzzle()
    }

    /// Returns the player's grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the orientation typing currently advances in.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the focused cell, if any.
    #[must_use]
    pub fn focus(&self) -> Option<Position> {
        self.focus
    }

    /// Writes player input into the cell at `pos`.
    ///
    /// Input is normalized the way the grid accepts typing: only the first
    /// character counts, an ASCII letter is stored uppercase, and anything
    /// else (including empty input) clears the cell. Correctness is not
    /// checked here; that is [`verify`]'s job.
    ///
    /// Storing a letter advances focus to the next empty cell of the word
    /// in the current orientation, if there is one. Clearing never moves
    /// focus.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `pos` lies outside the grid
    /// and [`GameError::BlockedCell`] if the cell is not part of any clue.
    ///
    /// [`verify`]: Self::verify
    pub fn set_cell(&mut self, pos: Position, input: &str) -> Result<(), GameError> {
        self.check_editable(pos)?;
        match normalize_input(input) {
            Some(letter) => {
                self.grid[pos] = Cell::Letter(letter);
                self.advance_focus(pos);
            }
            None => self.grid[pos] = Cell::Empty,
        }
        Ok(())
    }

    /// Clears the cell at `pos` back to empty.
    ///
    /// # Errors
    ///
    /// Same as [`set_cell`](Self::set_cell).
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), GameError> {
        self.set_cell(pos, "")
    }

    /// Moves focus to `pos` and determines the typing orientation from the
    /// clues covering the cell.
    ///
    /// Clues are scanned in list order and the last one whose span covers
    /// the cell decides, so a cell shared by an across and a down clue
    /// resolves to whichever the puzzle lists later. When no clue covers
    /// the cell, the previous orientation is kept.
    ///
    /// Returns the orientation now in effect.
    ///
    /// # Errors
    ///
    /// Same as [`set_cell`](Self::set_cell).
    pub fn focus_cell(&mut self, pos: Position) -> Result<Orientation, GameError> {
        self.check_editable(pos)?;
        self.focus = Some(pos);
        if let Some(orientation) = self.current_puzzle().orientation_at(pos) {
            self.orientation = orientation;
        }
        Ok(self.orientation)
    }

    /// Advances to the next level, wrapping to level 0 after the last.
    ///
    /// The grid is rebuilt for the new level; orientation and focus are
    /// reset to their initial state.
    ///
    /// Returns the new level index.
    pub fn next_puzzle(&mut self) -> usize {
        self.level = (self.level + 1) % self.puzzles.len();
        self.grid = self.current_puzzle().initial_grid();
        self.orientation = Orientation::Across;
        self.focus = None;
        self.level
    }

    /// Discards all player input by rebuilding the current level's initial
    /// grid.
    ///
    /// Orientation and focus are left as they were.
    pub fn reset_puzzle(&mut self) {
        self.grid = self.current_puzzle().initial_grid();
    }

    /// Compares the player's grid against the answer grid cell by cell.
    ///
    /// Every cell must match exactly, so a grid with any cell still empty
    /// is never [`Verdict::Correct`]. The comparison stops at the first
    /// mismatch.
    #[must_use]
    pub fn verify(&self) -> Verdict {
        if self.grid == self.current_puzzle().answer_grid() {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }

    /// Replaces the player's grid with the full answer grid.
    ///
    /// Only the grid changes; level, orientation, and focus stay put.
    /// Solving an already solved grid is a no-op.
    pub fn solve(&mut self) {
        self.grid = self.current_puzzle().answer_grid();
    }

    fn check_editable(&self, pos: Position) -> Result<(), GameError> {
        match self.grid.get(pos) {
            None => Err(GameError::OutOfBounds {
                pos,
                width: self.grid.width(),
                height: self.grid.height(),
            }),
            Some(Cell::Blocked) => Err(GameError::BlockedCell { pos }),
            Some(Cell::Empty | Cell::Letter(_)) => Ok(()),
        }
    }

    fn advance_focus(&mut self, pos: Position) {
        let next = match self.orientation {
            Orientation::Across => self.next_empty_in_row(pos),
            Orientation::Down => self.next_empty_in_column(pos),
        };
        if let Some(next) = next {
            self.focus = Some(next);
        }
    }

    // Both scans stop at the first blocked cell: advancement is bounded to
    // the word being typed and never jumps into a later word on the line.
    fn next_empty_in_row(&self, pos: Position) -> Option<Position> {
        ((pos.x() + 1)..self.grid.width())
            .map(|x| Position::new(x, pos.y()))
            .take_while(|p| !self.grid[*p].is_blocked())
            .find(|p| self.grid[*p].is_empty())
    }

    fn next_empty_in_column(&self, pos: Position) -> Option<Position> {
        ((pos.y() + 1)..self.grid.height())
            .map(|y| Position::new(pos.x(), y))
            .take_while(|p| !self.grid[*p].is_blocked())
            .find(|p| self.grid[*p].is_empty())
    }
}

fn normalize_input(input: &str) -> Option<char> {
    let first = input.chars().next()?;
    first
        .is_ascii_alphabetic()
        .then(|| first.to_ascii_uppercase())
}
