//! JSON level files.
//!
//! The wire format is an array of levels, each an array of clue objects
//! with the field names crossword data is commonly authored with:
//!
//! ```json
//! [
//!   [
//!     {
//!       "answer": "cat",
//!       "startx": 1,
//!       "starty": 1,
//!       "orientation": "across",
//!       "hint": "Feline pet",
//!       "position": 1
//!     }
//!   ]
//! ]
//! ```
//!
//! Wire structs are converted into engine types with full validation here;
//! the engine itself never sees the file format.

use std::{fs, io, path::Path};

use crosslace_core::{Clue, Orientation, Puzzle, PuzzleError, PuzzleSet};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
struct ClueDto {
    answer: String,
    startx: usize,
    starty: usize,
    orientation: OrientationDto,
    hint: String,
    position: u32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum OrientationDto {
    Across,
    Down,
}

impl From<OrientationDto> for Orientation {
    fn from(dto: OrientationDto) -> Self {
        match dto {
            OrientationDto::Across => Orientation::Across,
            OrientationDto::Down => Orientation::Down,
        }
    }
}

impl TryFrom<ClueDto> for Clue {
    type Error = PuzzleError;

    fn try_from(dto: ClueDto) -> Result<Self, PuzzleError> {
        Clue::new(
            &dto.answer,
            dto.startx,
            dto.starty,
            dto.orientation.into(),
            &dto.hint,
            dto.position,
        )
    }
}

/// A level file that could not be turned into a puzzle set.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum LoadError {
    #[display("cannot read level file: {_0}")]
    Io(#[from] io::Error),
    #[display("cannot parse level file: {_0}")]
    Json(#[from] serde_json::Error),
    #[display("invalid level data: {_0}")]
    Puzzle(#[from] PuzzleError),
}

/// Reads and validates a level file.
pub(crate) fn load_file(path: &Path) -> Result<PuzzleSet, LoadError> {
    let json = fs::read_to_string(path)?;
    parse_levels(&json)
}

fn parse_levels(json: &str) -> Result<PuzzleSet, LoadError> {
    let levels: Vec<Vec<ClueDto>> = serde_json::from_str(json)?;
    let puzzles = levels
        .into_iter()
        .map(|clues| {
            let clues = clues
                .into_iter()
                .map(Clue::try_from)
                .collect::<Result<Vec<_>, _>>()?;
            Puzzle::new(clues)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(PuzzleSet::new(puzzles))
}
