//! Word placements.

use crate::{Orientation, Position, error::PuzzleError};

/// One word placement: answer text, start coordinate, orientation, hint
/// text, and display number.
///
/// Answers are case-insensitive on input and stored uppercase. Start
/// coordinates are 1-based, the way puzzle data is authored, and are
/// converted to 0-based [`Position`]s on construction.
///
/// # Examples
///
/// ```
/// use crosslace_core::{Clue, Orientation, Position};
///
/// let clue = Clue::new("cat", 1, 1, Orientation::Across, "Feline pet", 1)?;
/// assert_eq!(clue.answer(), "CAT");
/// assert_eq!(clue.start(), Position::new(0, 0));
/// assert_eq!(clue.end(), Position::new(2, 0));
/// # Ok::<(), crosslace_core::PuzzleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    answer: String,
    start: Position,
    orientation: Orientation,
    hint: String,
    number: u32,
}

impl Clue {
    /// Creates a clue from 1-based start coordinates.
    ///
    /// The answer is normalized to uppercase.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::EmptyAnswer`] if `answer` has no characters,
    /// [`PuzzleError::NonLetterAnswer`] if it contains anything other than
    /// ASCII letters, and [`PuzzleError::ZeroStartCoordinate`] if either
    /// start coordinate is zero.
    pub fn new(
        answer: &str,
        start_x: usize,
        start_y: usize,
        orientation: Orientation,
        hint: &str,
        number: u32,
    ) -> Result<Self, PuzzleError> {
        if answer.is_empty() {
            return Err(PuzzleError::EmptyAnswer { number });
        }
        if let Some(ch) = answer.chars().find(|ch| !ch.is_ascii_alphabetic()) {
            return Err(PuzzleError::NonLetterAnswer { number, ch });
        }
        if start_x == 0 || start_y == 0 {
            return Err(PuzzleError::ZeroStartCoordinate { number });
        }
        Ok(Self {
            answer: answer.to_ascii_uppercase(),
            start: Position::new(start_x - 1, start_y - 1),
            orientation,
            hint: hint.to_owned(),
            number,
        })
    }

    /// Returns the uppercase answer text.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Returns the 0-based position of the first cell.
    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Returns the layout direction.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the hint text displayed next to the clue number.
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Returns the display number shown in the clue's first cell.
    ///
    /// Numbers are not required to be unique across orientations: an across
    /// and a down clue sharing a start cell may share one.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Returns the 0-based position of the last cell.
    #[must_use]
    pub fn end(&self) -> Position {
        let offset = self.answer.len() - 1;
        match self.orientation {
            Orientation::Across => Position::new(self.start.x() + offset, self.start.y()),
            Orientation::Down => Position::new(self.start.x(), self.start.y() + offset),
        }
    }

    /// Returns an iterator over the answer's letters and the cell each one
    /// occupies, in layout order.
    #[must_use]
    pub fn letter_cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        let start = self.start;
        let orientation = self.orientation;
        self.answer.chars().enumerate().map(move |(i, ch)| {
            let pos = match orientation {
                Orientation::Across => Position::new(start.x() + i, start.y()),
                Orientation::Down => Position::new(start.x(), start.y() + i),
            };
            (pos, ch)
        })
    }

    /// Returns an iterator over the cells the clue spans, in layout order.
    #[must_use]
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.letter_cells().map(|(pos, _)| pos)
    }

    /// Returns whether `pos` lies on this clue's span.
    #[must_use]
    pub fn span_contains(&self, pos: Position) -> bool {
        match self.orientation {
            Orientation::Across => {
                pos.y() == self.start.y()
                    && pos.x() >= self.start.x()
                    && pos.x() <= self.end().x()
            }
            Orientation::Down => {
                pos.x() == self.start.x()
                    && pos.y() >= self.start.y()
                    && pos.y() <= self.end().y()
            }
        }
    }
}
