//! Puzzle definitions and grid construction.

use crate::{
    Cell, Clue, Grid, Orientation, Position,
    error::{LevelOutOfRange, PuzzleError},
};

/// An ordered collection of clues sharing one coordinate space.
///
/// The clue list fully determines the grid: the dimensions come from the
/// furthest cell any clue reaches, and a cell belongs to the puzzle exactly
/// when some clue's span covers it.
///
/// Crossing clues are expected to agree on the letter at the shared cell.
/// This is not validated; the answer grid reflects whichever clue is later
/// in list order.
///
/// # Examples
///
/// ```
/// use crosslace_core::{Clue, Orientation, Position, Puzzle};
///
/// let puzzle = Puzzle::new(vec![
///     Clue::new("cat", 1, 1, Orientation::Across, "Feline pet", 1)?,
///     Clue::new("car", 1, 1, Orientation::Down, "It drives", 1)?,
/// ])?;
///
/// assert_eq!(puzzle.dimensions(), (3, 3));
/// let answer = puzzle.answer_grid();
/// assert_eq!(answer[Position::new(0, 0)].letter(), Some('C'));
/// assert_eq!(answer[Position::new(0, 2)].letter(), Some('R'));
/// # Ok::<(), crosslace_core::PuzzleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    clues: Vec<Clue>,
}

impl Puzzle {
    /// Creates a puzzle from its clue list.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::NoClues`] if the list is empty; a puzzle with
    /// no clues would produce a zero-sized grid that verifies as solved.
    pub fn new(clues: Vec<Clue>) -> Result<Self, PuzzleError> {
        if clues.is_empty() {
            return Err(PuzzleError::NoClues);
        }
        Ok(Self { clues })
    }

    /// Returns the clues in their original order.
    #[must_use]
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    /// Returns the `(width, height)` of the grid this puzzle occupies.
    ///
    /// Both grid builders size their output with this, so the initial and
    /// answer grids of one puzzle always agree in shape.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        let mut width = 0;
        let mut height = 0;
        for clue in &self.clues {
            let end = clue.end();
            width = width.max(end.x() + 1);
            height = height.max(end.y() + 1);
        }
        (width, height)
    }

    /// Builds the initial grid: every cell some clue spans is empty, every
    /// other cell is blocked.
    ///
    /// Pure; callers own any cursor bookkeeping sized to the result.
    #[must_use]
    pub fn initial_grid(&self) -> Grid {
        let (width, height) = self.dimensions();
        let mut grid = Grid::blocked(width, height);
        for clue in &self.clues {
            for pos in clue.cells() {
                grid[pos] = Cell::Empty;
            }
        }
        grid
    }

    /// Builds the fully solved grid: every clue cell holds its uppercase
    /// letter, every other cell is blocked.
    ///
    /// Clues are written in list order, so a disagreeing overlap is resolved
    /// by the later clue.
    #[must_use]
    pub fn answer_grid(&self) -> Grid {
        let (width, height) = self.dimensions();
        let mut grid = Grid::blocked(width, height);
        for clue in &self.clues {
            for (pos, ch) in clue.letter_cells() {
                grid[pos] = Cell::Letter(ch);
            }
        }
        grid
    }

    /// Returns the orientation of the clue whose span covers `pos`, or
    /// `None` if no clue covers the cell.
    ///
    /// When several clues cover the cell, the one latest in list order wins,
    /// so a cell shared by an across and a down clue resolves to whichever
    /// the puzzle lists second.
    #[must_use]
    pub fn orientation_at(&self, pos: Position) -> Option<Orientation> {
        let mut found = None;
        for clue in &self.clues {
            if clue.span_contains(pos) {
                found = Some(clue.orientation());
            }
        }
        found
    }
}

/// The ordered list of puzzles a game cycles through, one per level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSet {
    puzzles: Vec<Puzzle>,
}

impl PuzzleSet {
    /// Creates a set from per-level puzzles, level 0 first.
    #[must_use]
    pub fn new(puzzles: Vec<Puzzle>) -> Self {
        Self { puzzles }
    }

    /// Returns the puzzle at `level`.
    ///
    /// # Errors
    ///
    /// Returns [`LevelOutOfRange`] if the set has no puzzle at that index.
    pub fn get(&self, level: usize) -> Result<&Puzzle, LevelOutOfRange> {
        self.puzzles.get(level).ok_or(LevelOutOfRange {
            level,
            count: self.puzzles.len(),
        })
    }

    /// Returns the number of levels in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Returns whether the set has no levels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn clue(
        answer: &str,
        start_x: usize,
        start_y: usize,
        orientation: Orientation,
        number: u32,
    ) -> Clue {
        Clue::new(answer, start_x, start_y, orientation, "hint", number).unwrap()
    }

    /// CAT across and CAR down, sharing their first cell.
    fn cat_car() -> Puzzle {
        Puzzle::new(vec![
            clue("cat", 1, 1, Orientation::Across, 1),
            clue("car", 1, 1, Orientation::Down, 1),
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_empty_clue_list() {
        assert_eq!(Puzzle::new(Vec::new()), Err(PuzzleError::NoClues));
    }

    #[test]
    fn test_cat_car_initial_grid() {
        let grid = cat_car().initial_grid();
        assert_eq!((grid.width(), grid.height()), (3, 3));

        for x in 0..3 {
            assert!(grid[Position::new(x, 0)].is_empty());
        }
        for y in 1..3 {
            assert!(grid[Position::new(0, y)].is_empty());
        }
        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            assert!(grid[Position::new(x, y)].is_blocked());
        }
    }

    #[test]
    fn test_cat_car_answer_grid() {
        let grid = cat_car().answer_grid();
        assert_eq!((grid.width(), grid.height()), (3, 3));

        assert_eq!(grid[Position::new(0, 0)].letter(), Some('C'));
        assert_eq!(grid[Position::new(1, 0)].letter(), Some('A'));
        assert_eq!(grid[Position::new(2, 0)].letter(), Some('T'));
        assert_eq!(grid[Position::new(0, 1)].letter(), Some('A'));
        assert_eq!(grid[Position::new(0, 2)].letter(), Some('R'));
        assert!(grid[Position::new(1, 1)].is_blocked());
    }

    #[test]
    fn test_dimensions_ignore_clue_order() {
        let a = Puzzle::new(vec![
            clue("lace", 1, 2, Orientation::Across, 1),
            clue("pin", 3, 1, Orientation::Down, 2),
        ])
        .unwrap();
        let b = Puzzle::new(vec![
            clue("pin", 3, 1, Orientation::Down, 2),
            clue("lace", 1, 2, Orientation::Across, 1),
        ])
        .unwrap();
        assert_eq!(a.dimensions(), (4, 3));
        assert_eq!(a.dimensions(), b.dimensions());
    }

    #[test]
    fn test_answer_grid_later_clue_wins_on_disagreeing_overlap() {
        // BAD down crosses CAT across at their shared first cell; overlap
        // agreement is not validated and the later clue's letter stands.
        let puzzle = Puzzle::new(vec![
            clue("cat", 1, 1, Orientation::Across, 1),
            clue("bad", 1, 1, Orientation::Down, 2),
        ])
        .unwrap();
        let grid = puzzle.answer_grid();
        assert_eq!(grid[Position::new(0, 0)].letter(), Some('B'));
        assert_eq!(grid[Position::new(1, 0)].letter(), Some('A'));
    }

    #[test]
    fn test_orientation_at_last_match_wins() {
        let puzzle = cat_car();
        // Shared start cell: the down clue is listed second and wins.
        assert_eq!(
            puzzle.orientation_at(Position::new(0, 0)),
            Some(Orientation::Down)
        );
        // Cells covered by a single clue resolve to that clue.
        assert_eq!(
            puzzle.orientation_at(Position::new(1, 0)),
            Some(Orientation::Across)
        );
        assert_eq!(
            puzzle.orientation_at(Position::new(0, 1)),
            Some(Orientation::Down)
        );
        // Blocked cells have no owner.
        assert_eq!(puzzle.orientation_at(Position::new(1, 1)), None);
    }

    #[test]
    fn test_puzzle_set_lookup() {
        let set = PuzzleSet::new(vec![cat_car()]);
        assert_eq!(set.len(), 1);
        assert!(set.get(0).is_ok());
        assert_eq!(
            set.get(3),
            Err(LevelOutOfRange { level: 3, count: 1 })
        );

        let empty = PuzzleSet::new(Vec::new());
        assert!(empty.is_empty());
        assert_eq!(
            empty.get(0),
            Err(LevelOutOfRange { level: 0, count: 0 })
        );
    }

    fn arb_clue() -> impl Strategy<Value = Clue> {
        (
            "[a-z]{1,8}",
            1_usize..8,
            1_usize..8,
            any::<bool>(),
            0_u32..100,
        )
            .prop_map(|(answer, start_x, start_y, down, number)| {
                let orientation = if down {
                    Orientation::Down
                } else {
                    Orientation::Across
                };
                Clue::new(&answer, start_x, start_y, orientation, "hint", number).unwrap()
            })
    }

    fn arb_puzzle() -> impl Strategy<Value = Puzzle> {
        proptest::collection::vec(arb_clue(), 1..8)
            .prop_map(|clues| Puzzle::new(clues).unwrap())
    }

    proptest! {
        #[test]
        fn prop_builders_agree_on_dimensions(puzzle in arb_puzzle()) {
            let initial = puzzle.initial_grid();
            let answer = puzzle.answer_grid();
            prop_assert_eq!(
                (initial.width(), initial.height()),
                puzzle.dimensions()
            );
            prop_assert_eq!(
                (answer.width(), answer.height()),
                (initial.width(), initial.height())
            );
        }

        #[test]
        fn prop_clue_cells_are_empty_then_lettered(puzzle in arb_puzzle()) {
            let initial = puzzle.initial_grid();
            let answer = puzzle.answer_grid();
            for clue in puzzle.clues() {
                for pos in clue.cells() {
                    prop_assert!(initial[pos].is_empty());
                    prop_assert!(answer[pos].is_letter());
                }
            }
        }

        #[test]
        fn prop_uncovered_cells_stay_blocked(puzzle in arb_puzzle()) {
            let initial = puzzle.initial_grid();
            let answer = puzzle.answer_grid();
            for y in 0..initial.height() {
                for x in 0..initial.width() {
                    let pos = Position::new(x, y);
                    let covered = puzzle
                        .clues()
                        .iter()
                        .any(|clue| clue.span_contains(pos));
                    prop_assert_eq!(initial[pos].is_blocked(), !covered);
                    prop_assert_eq!(answer[pos].is_blocked(), !covered);
                }
            }
        }

        #[test]
        fn prop_answer_letters_are_uppercase(puzzle in arb_puzzle()) {
            let answer = puzzle.answer_grid();
            for row in answer.rows() {
                for cell in row {
                    if let Some(ch) = cell.letter() {
                        prop_assert!(ch.is_ascii_uppercase());
                    }
                }
            }
        }
    }
}
