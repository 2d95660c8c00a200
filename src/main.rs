//! Line-oriented text front end.
//!
//! Run with: `cargo run -- [--config session.json]`, then type commands on stdin:
//! `select e2`, `move e4`, `e2e4`, `undo`, `show`, `fen`, `perft 3`, `quit`.

use std::error::Error;
use std::io::{self, BufRead, Write};

use chessgame::perft::perft_n;
use chessgame::{GameSession, SessionConfig, Snapshot};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env().add_directive("chessgame=info".parse()?))
        .init();

    let config = match parse_config_arg()? {
        Some(path) => SessionConfig::load(&path)?,
        None => SessionConfig::default(),
    };
    tracing::info!(rules = ?config.rules, enforce_turn = config.enforce_turn, "session starting");

    let mut session = GameSession::with_config(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&mut out, &session.snapshot())?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        let (Some(command), arg) = (words.next(), words.next()) else {
            continue;
        };

        let outcome: Result<(), Box<dyn Error>> = match (command, arg) {
            ("select", Some(square)) => session.select(square).map_err(Into::into),
            ("move", Some(square)) => session.move_to(square).map(drop).map_err(Into::into),
            ("undo", None) => {
                if session.undo().is_none() {
                    writeln!(out, "nothing to undo")?;
                }
                Ok(())
            }
            ("show", None) => Ok(()),
            ("fen", None) => {
                writeln!(out, "{}", session.to_fen())?;
                continue;
            }
            ("perft", Some(depth)) => {
                let depth: u32 = depth.parse()?;
                for (d, nodes) in perft_n(session.config().rules, depth).into_iter().enumerate() {
                    writeln!(out, "perft({}): {}", d + 1, nodes)?;
                }
                continue;
            }
            ("quit", None) => break,
            (text, None) => session.play(text).map(drop).map_err(Into::into),
            _ => Err(format!("unknown command: {line}").into()),
        };

        if let Err(e) = outcome {
            writeln!(out, "error: {e}")?;
        }
        render(&mut out, &session.snapshot())?;
    }

    Ok(())
}

fn parse_config_arg() -> Result<Option<String>, Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        None => Ok(None),
        Some("--config") => Ok(Some(args.next().ok_or("--config needs a path")?)),
        Some(other) => Err(format!("unexpected argument {other:?}").into()),
    }
}

/// Prints the board with the selected square in brackets and its targets marked with `*`.
fn render<W: Write>(out: &mut W, snap: &Snapshot<'_>) -> io::Result<()> {
    writeln!(out, "{}'s turn", snap.turn)?;
    for (row, cells) in snap.board.iter().enumerate() {
        write!(out, "{} ", 8 - row)?;
        for (col, cell) in cells.iter().enumerate() {
            let here = |sq: &chessgame::Square| sq.row() as usize == row && sq.col() as usize == col;
            let ch = cell.map_or('.', |p| p.glyph());
            if snap.selected.as_ref().is_some_and(here) {
                write!(out, "[{ch}]")?;
            } else if snap.targets.iter().any(here) {
                write!(out, "*{ch}*")?;
            } else {
                write!(out, " {ch} ")?;
            }
        }
        writeln!(out)?;
    }
    writeln!(out, "   a  b  c  d  e  f  g  h")?;
    if let Some(m) = snap.last_move {
        writeln!(out, "last move: {m}")?;
    }
    Ok(())
}
