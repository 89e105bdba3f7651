//! Text output for CLI commands

use std::fmt;

use crate::{
    tictactoe::{GameState, MarkQueue, Player},
    types::Position,
};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

fn format_marks(marks: &MarkQueue) -> String {
    if marks.is_empty() {
        return "-".to_string();
    }
    marks
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the grid plus turn, history and vanish hint.
///
/// Winning cells are shown as `[X]`, the mark that disappears on the next
/// placement as `(X)`, and empty cells by their index so they can be typed.
pub fn render_game(state: &GameState) -> String {
    GameView(state).to_string()
}

struct GameView<'a>(&'a GameState);

impl GameView<'_> {
    fn cell(&self, pos: Position, fading: Option<Position>) -> String {
        let state = self.0;
        let cell = state.board().get(pos);
        if cell.is_empty() {
            format!(" {pos} ")
        } else if state.winner().is_some_and(|w| w.contains(pos)) {
            format!("[{}]", cell.to_char())
        } else if fading == Some(pos) {
            format!("({})", cell.to_char())
        } else {
            format!(" {} ", cell.to_char())
        }
    }
}

impl fmt::Display for GameView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        let fading = if state.is_won() {
            None
        } else {
            state.about_to_vanish()
        };

        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .filter_map(|col| Position::new(row * 3 + col).ok())
                .map(|pos| self.cell(pos, fading))
                .collect();
            writeln!(f, "{}", cells.join("|"))?;
            if row < 2 {
                writeln!(f, "---+---+---")?;
            }
        }

        writeln!(f)?;
        match state.winner() {
            Some(win) => writeln!(f, "Winner: {}", win.player)?,
            None => writeln!(f, "Current: {}", state.current())?,
        }
        for player in [Player::X, Player::O] {
            writeln!(f, "{player} moves: {}", format_marks(state.marks(player)))?;
        }
        if let Some(pos) = fading {
            writeln!(f, "Next to vanish: {pos}")?;
        }
        Ok(())
    }
}
