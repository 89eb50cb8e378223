//! Terminal host for the crosslace engine.
//!
//! Renders the grid and clue lists, and wires line commands to the game
//! session the way the mobile surface wires its touch and keyboard events.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin crosslace
//! cargo run --bin crosslace -- --file levels.json --level 1
//! ```
//!
//! Set `RUST_LOG=info` to see level switches and rejected inputs.

use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use crosslace_core::PuzzleSet;
use crosslace_game::Session;

use crate::{command::Command, puzzle_file::LoadError};

mod command;
mod levels;
mod puzzle_file;
mod render;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Level file to load (JSON). Bundled sample levels are used if omitted.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Level to start at (0-based).
    #[arg(long, value_name = "LEVEL", default_value_t = 0)]
    level: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let puzzles = match load_puzzles(args.file.as_deref()) {
        Ok(puzzles) => puzzles,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let session = match Session::with_level(puzzles, args.level) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    if let Err(err) = run(session) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn load_puzzles(file: Option<&Path>) -> Result<PuzzleSet, LoadError> {
    match file {
        Some(path) => puzzle_file::load_file(path),
        None => Ok(levels::sample_levels()?),
    }
}

fn run(mut session: Session) -> io::Result<()> {
    let mut out = io::stdout();
    render::print_puzzle(&mut out, &session)?;
    print_help(&mut out)?;

    write!(out, "> ")?;
    out.flush()?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => apply(&mut session, command, &mut out)?,
            Ok(None) => {}
            Err(err) => {
                log::warn!("rejected command line {line:?}");
                writeln!(out, "{err}")?;
            }
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}

fn apply(session: &mut Session, command: Command, out: &mut impl Write) -> io::Result<()> {
    match command {
        Command::Put { pos, input } => match session.set_cell(pos, &input) {
            Ok(()) => render::print_grid(out, session)?,
            Err(err) => writeln!(out, "{err}")?,
        },
        Command::Clear { pos } => match session.clear_cell(pos) {
            Ok(()) => render::print_grid(out, session)?,
            Err(err) => writeln!(out, "{err}")?,
        },
        Command::Focus { pos } => match session.focus_cell(pos) {
            Ok(orientation) => {
                writeln!(out, "typing {orientation}")?;
                render::print_grid(out, session)?;
            }
            Err(err) => writeln!(out, "{err}")?,
        },
        Command::Verify => {
            let message = if session.verify().is_correct() {
                "Congratulations!"
            } else {
                "Incorrect. Please try again."
            };
            writeln!(out, "{message}")?;
        }
        Command::Solve => {
            session.solve();
            render::print_grid(out, session)?;
        }
        Command::Reset => {
            session.reset_puzzle();
            render::print_grid(out, session)?;
        }
        Command::Next => {
            let level = session.next_puzzle();
            log::info!("switched to level {level}");
            render::print_puzzle(out, session)?;
        }
        Command::Show => render::print_puzzle(out, session)?,
        Command::Help => print_help(out)?,
        Command::Quit => unreachable!("quit is handled by the command loop"),
    }
    Ok(())
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "Commands: put <col> <row> <letter>, clear <col> <row>, \
         focus <col> <row>, verify, solve, reset, next, show, help, quit"
    )
}
