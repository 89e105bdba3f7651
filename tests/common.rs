//! Common test utilities for the t3 test suite.
//!
//! Invariant checks shared by the scenario, property and random-walk tests.

#![allow(dead_code)]

use rand::{Rng, rngs::StdRng};
use t3::tictactoe::{Action, GameState, LineAnalyzer, MAX_MARKS, Player};

/// Play a sequence of placements from an empty X-first game.
pub fn play(moves: &[usize]) -> GameState {
    moves
        .iter()
        .fold(GameState::new(), |state, &idx| state.place(idx))
}

/// Live marks of a player as plain indices, oldest first.
pub fn marks(state: &GameState, player: Player) -> Vec<usize> {
    state.marks(player).iter().map(|p| p.value()).collect()
}

/// Panic with a description if any structural invariant is broken.
pub fn assert_invariants(state: &GameState) {
    for player in [Player::X, Player::O] {
        let queue = marks(state, player);

        assert!(
            queue.len() <= MAX_MARKS,
            "{player} holds {} marks: {queue:?}",
            queue.len()
        );
        assert_eq!(
            queue.len(),
            state.board().count(player),
            "{player} queue {queue:?} disagrees with board {}",
            state.board().encode()
        );
        for &idx in &queue {
            assert_eq!(
                state.cell(idx).and_then(|c| c.owner()),
                Some(player),
                "{player} queue lists {idx} but the board has {:?}",
                state.cell(idx)
            );
        }

        // The log, restricted to one player, is that player's queue in order.
        let logged: Vec<usize> = state
            .moves()
            .iter()
            .filter(|m| m.player == player)
            .map(|m| m.position.value())
            .collect();
        assert_eq!(logged, queue, "{player} log and queue diverge");
    }

    match state.winner() {
        Some(win) => {
            for idx in win.cells {
                assert_eq!(state.cell(idx).and_then(|c| c.owner()), Some(win.player));
            }
            assert_eq!(state.current(), win.player);
        }
        None => assert_eq!(LineAnalyzer::find_win(state.board()), None),
    }
}

/// Draw a random action, mostly placements (including off-board ones).
pub fn random_action(rng: &mut StdRng, state: &GameState) -> Action {
    if state.is_won() && rng.random_bool(0.8) {
        return Action::Reset;
    }
    match rng.random_range(0..20) {
        0..=13 => Action::Place(rng.random_range(0..10)),
        14..=18 => Action::Undo,
        _ => Action::Reset,
    }
}
