//! Errors for puzzle construction and level lookup.

/// A structural defect in clue or puzzle data, detected at construction.
///
/// Every malformed shape is rejected here, before any grid exists, so the
/// grid builders themselves never write out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    /// The puzzle has no clues at all.
    #[display("puzzle has no clues")]
    NoClues,
    /// A clue's answer has no characters.
    #[display("clue {number} has an empty answer")]
    EmptyAnswer {
        /// Display number of the offending clue.
        number: u32,
    },
    /// A clue's answer contains something other than an ASCII letter.
    #[display("clue {number} contains non-letter character {ch:?}")]
    NonLetterAnswer {
        /// Display number of the offending clue.
        number: u32,
        /// The offending character.
        ch: char,
    },
    /// A clue's start coordinate is zero; clue coordinates are 1-based.
    #[display("clue {number} has a zero start coordinate")]
    ZeroStartCoordinate {
        /// Display number of the offending clue.
        number: u32,
    },
}

/// A level index with no corresponding puzzle.
///
/// Surfaced to the caller instead of substituting a default puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("level {level} is out of range for {count} puzzle(s)")]
pub struct LevelOutOfRange {
    /// The requested level index.
    pub level: usize,
    /// The number of puzzles in the set.
    pub count: usize,
}
