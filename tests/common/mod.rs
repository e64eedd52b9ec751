//! Helpers shared by the integration tests.

use std::collections::HashSet;
use unbeatable_tictactoe::{BoardState, Player, new_game};

/// Visits every distinct state reachable by alternating legal moves.
///
/// The human plays X throughout; `first` decides who opens.
pub fn reachable_states(first: Player) -> Vec<BoardState> {
    let mut seen = HashSet::new();
    let mut stack = vec![new_game(Player::X, first)];
    let mut states = Vec::new();

    while let Some(state) = stack.pop() {
        if !seen.insert(state.clone()) {
            continue;
        }
        states.push(state.clone());
        if state.is_terminal() {
            continue;
        }
        for index in state.empty_cells() {
            let mut next = state.clone();
            next.apply_move(index).unwrap();
            stack.push(next);
        }
    }

    states
}
