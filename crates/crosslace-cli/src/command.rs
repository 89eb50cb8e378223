//! Line-command parsing for the terminal host.

use crosslace_core::Position;

/// A parsed player command.
///
/// Cell coordinates are typed 1-based (column first), matching the way the
/// clue list is displayed, and converted to 0-based positions here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    /// `put <col> <row> <letter>` — type into a cell.
    Put { pos: Position, input: String },
    /// `clear <col> <row>` — erase a cell.
    Clear { pos: Position },
    /// `focus <col> <row>` — focus a cell, picking up its orientation.
    Focus { pos: Position },
    /// `verify` — check the grid against the answers.
    Verify,
    /// `solve` — fill in the full answer grid.
    Solve,
    /// `reset` — discard all input for this level.
    Reset,
    /// `next` — advance to the next level.
    Next,
    /// `show` — reprint the clues and the grid.
    Show,
    /// `help` — list the commands.
    Help,
    /// `quit` — leave the game.
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum CommandError {
    #[display("unknown command {name:?}; try `help`")]
    Unknown { name: String },
    #[display("`{command}` expects {expected}")]
    BadArguments {
        command: &'static str,
        expected: &'static str,
    },
}

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    pub(crate) fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match name {
            "put" => match args {
                [col, row, input] => Command::Put {
                    pos: parse_pos(col, row).ok_or(BAD_PUT)?,
                    input: (*input).to_owned(),
                },
                _ => return Err(BAD_PUT),
            },
            "clear" => Command::Clear {
                pos: parse_pos_args("clear", args)?,
            },
            "focus" => Command::Focus {
                pos: parse_pos_args("focus", args)?,
            },
            "verify" => Command::Verify,
            "solve" => Command::Solve,
            "reset" => Command::Reset,
            "next" => Command::Next,
            "show" => Command::Show,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => {
                return Err(CommandError::Unknown {
                    name: name.to_owned(),
                });
            }
        };
        Ok(Some(command))
    }
}

const BAD_PUT: CommandError = CommandError::BadArguments {
    command: "put",
    expected: "a column, a row, and a letter",
};

fn parse_pos_args(command: &'static str, args: &[&str]) -> Result<Position, CommandError> {
    let err = CommandError::BadArguments {
        command,
        expected: "a column and a row",
    };
    match args {
        [col, row] => parse_pos(col, row).ok_or(err),
        _ => Err(err),
    }
}

/// Parses a 1-based `col row` pair into a 0-based position.
fn parse_pos(col: &str, row: &str) -> Option<Position> {
    let col: usize = col.parse().ok()?;
    let row: usize = row.parse().ok()?;
    (col >= 1 && row >= 1).then(|| Position::new(col - 1, row - 1))
}
