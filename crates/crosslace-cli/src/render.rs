//! Grid and clue rendering for the terminal.

use std::io::{self, Write};

use crosslace_core::{Cell, Orientation, Position};
use crosslace_game::Session;

/// Prints the level banner, the clue lists, and the grid.
pub(crate) fn print_puzzle(out: &mut impl Write, session: &Session) -> io::Result<()> {
    writeln!(
        out,
        "Level {} of {} - typing {}",
        session.level() + 1,
        session.level_count(),
        session.orientation()
    )?;
    print_clues(out, session)?;
    print_grid(out, session)
}

fn print_clues(out: &mut impl Write, session: &Session) -> io::Result<()> {
    for heading in [Orientation::Across, Orientation::Down] {
        writeln!(out, "{heading}:")?;
        for clue in session.puzzle().clues() {
            if clue.orientation() == heading {
                writeln!(
                    out,
                    "  {}. ({}, {}) {}",
                    clue.number(),
                    clue.start().x() + 1,
                    clue.start().y() + 1,
                    clue.hint()
                )?;
            }
        }
    }
    Ok(())
}

/// Blocked cells print as `#`, empty cells as `.`, and the focused cell is
/// bracketed.
pub(crate) fn print_grid(out: &mut impl Write, session: &Session) -> io::Result<()> {
    let grid = session.grid();
    for (y, row) in grid.rows().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let ch = match cell {
                Cell::Blocked => '#',
                Cell::Empty => '.',
                Cell::Letter(ch) => *ch,
            };
            if session.focus() == Some(Position::new(x, y)) {
                write!(out, "[{ch}]")?;
            } else {
                write!(out, " {ch} ")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
