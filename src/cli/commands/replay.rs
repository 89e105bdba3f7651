//! Replay command - apply a scripted list of actions

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        config::SessionArgs,
        output::{print_kv, print_section, render_game},
    },
    session::{Outcome, Session},
    tictactoe::Action,
};

#[derive(Parser, Debug)]
#[command(about = "Replay a scripted sequence of actions")]
pub struct ReplayArgs {
    /// Actions in order: 0-8 places a mark, `u` undoes, `r` resets
    #[arg(required = true)]
    pub actions: Vec<String>,

    /// Print the final state as JSON instead of a board
    #[arg(long)]
    pub json: bool,

    /// Fail on the first action the engine ignores
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub session: SessionArgs,
}

/// Counts from a replay run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    pub applied: usize,
    pub ignored: usize,
}

pub fn execute(args: ReplayArgs) -> Result<()> {
    let actions = parse_actions(&args.actions)?;
    let config = args.session.resolve()?;
    let mut session = Session::from_config(&config)?;

    // Observers hear the end of the session even when a strict replay bails.
    let result = replay(&mut session, &actions, args.strict);
    let finished = session.finish();
    let summary = result?;
    finished?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    } else {
        print_section("Final position");
        print!("{}", render_game(session.state()));
        println!();
        print_kv("Applied", &summary.applied.to_string());
        print_kv("Ignored", &summary.ignored.to_string());
    }
    Ok(())
}

/// Parse every token up front so a typo fails before anything is played.
pub fn parse_actions(tokens: &[String]) -> Result<Vec<Action>> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            token
                .parse::<Action>()
                .with_context(|| format!("action #{} is not valid", i + 1))
        })
        .collect()
}

pub fn replay(session: &mut Session, actions: &[Action], strict: bool) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();
    for (i, &action) in actions.iter().enumerate() {
        match session.dispatch(action)? {
            Outcome::Applied(_) => summary.applied += 1,
            Outcome::Ignored(reason) if strict => {
                bail!("action #{} ({action}) was ignored: {reason}", i + 1)
            }
            Outcome::Ignored(_) => summary.ignored += 1,
        }
    }
    Ok(summary)
}
