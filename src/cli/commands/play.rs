//! Play command - interactive game in the terminal

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{config::SessionArgs, output::render_game},
    session::{Outcome, Session},
    tictactoe::Action,
};

const HELP: &str = "Commands: 0-8 place a mark, u undo, r reset, h help, q quit";

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game")]
pub struct PlayArgs {
    #[command(flatten)]
    pub session: SessionArgs,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.session.resolve()?;
    let mut session = Session::from_config(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    play_through(&mut session, stdin.lock(), stdout.lock())
}

/// Run the loop, then finish the session whether or not the loop failed.
///
/// A loop error takes precedence over an error from finishing.
pub fn play_through<R: BufRead, W: Write>(session: &mut Session, input: R, out: W) -> Result<()> {
    let result = run(session, input, out);
    let finished = session.finish();
    result?;
    finished?;
    Ok(())
}

/// Drive a session from line-based input until `q` or end of input.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, mut out: W) -> Result<()> {
    session.start()?;
    writeln!(out, "T3 - each player keeps at most 3 marks; the 4th removes the oldest.")?;
    writeln!(out, "{HELP}\n")?;
    write!(out, "{}", render_game(session.state()))?;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let token = line.trim();
        match token.to_ascii_lowercase().as_str() {
            "" => {}
            "q" | "quit" | "exit" => break,
            "h" | "help" | "?" => writeln!(out, "{HELP}")?,
            _ => match token.parse::<Action>() {
                Ok(action) => match session.dispatch(action)? {
                    Outcome::Applied(_) => write!(out, "\n{}", render_game(session.state()))?,
                    Outcome::Ignored(reason) => writeln!(out, "ignored: {reason}")?,
                },
                Err(err) => writeln!(out, "{err}")?,
            },
        }
        write!(out, "> ")?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}
