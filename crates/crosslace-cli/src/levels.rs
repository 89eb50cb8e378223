//! Built-in sample levels.
//!
//! Vocabulary-practice words, used when no level file is given.

use crosslace_core::{Clue, Orientation, Puzzle, PuzzleError, PuzzleSet};

/// Builds the bundled levels.
pub(crate) fn sample_levels() -> Result<PuzzleSet, PuzzleError> {
    let level_one = Puzzle::new(vec![
        Clue::new(
            "cat",
            1,
            1,
            Orientation::Across,
            "Furry pet that says meow",
            1,
        )?,
        Clue::new("car", 1, 1, Orientation::Down, "You drive it", 1)?,
        Clue::new("top", 3, 1, Orientation::Down, "Opposite of bottom", 2)?,
    ])?;

    let level_two = Puzzle::new(vec![
        Clue::new(
            "house",
            1,
            1,
            Orientation::Across,
            "A place where people live",
            1,
        )?,
        Clue::new("horse", 1, 1, Orientation::Down, "Animal you can ride", 1)?,
        Clue::new(
            "snail",
            4,
            1,
            Orientation::Down,
            "Slow animal that carries its shell",
            2,
        )?,
        Clue::new(
            "eagle",
            1,
            5,
            Orientation::Across,
            "Large bird with sharp eyes",
            3,
        )?,
    ])?;

    Ok(PuzzleSet::new(vec![level_one, level_two]))
}

#[cfg(test)]
mod tests {
    use crosslace_core::{Cell, Position};

    use super::*;

    #[test]
    fn test_sample_levels_are_well_formed() {
        let set = sample_levels().unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0).unwrap().dimensions(), (3, 3));
        assert_eq!(set.get(1).unwrap().dimensions(), (5, 5));
    }

    #[test]
    fn test_sample_levels_crossings_agree() {
        let set = sample_levels().unwrap();
        for level in 0..set.len() {
            let puzzle = set.get(level).unwrap();
            let answer = puzzle.answer_grid();
            for clue in puzzle.clues() {
                for (pos, ch) in clue.letter_cells() {
                    assert_eq!(
                        answer[pos],
                        Cell::Letter(ch),
                        "level {level} clue {} disagrees at {pos}",
                        clue.number()
                    );
                }
            }
        }
    }

    #[test]
    fn test_level_two_crossing_letters() {
        let set = sample_levels().unwrap();
        let answer = set.get(1).unwrap().answer_grid();
        // HOUSE meets HORSE at H and SNAIL at S; EAGLE picks up the E and L.
        assert_eq!(answer[Position::new(0, 0)].letter(), Some('H'));
        assert_eq!(answer[Position::new(3, 0)].letter(), Some('S'));
        assert_eq!(answer[Position::new(0, 4)].letter(), Some('E'));
        assert_eq!(answer[Position::new(3, 4)].letter(), Some('L'));
    }
}
