//! Balanced marks invariant: players alternate, so counts stay close.

use super::super::BoardState;
use super::Invariant;

/// Invariant: the X and O mark counts differ by at most one.
pub struct BalancedMarksInvariant;

impl Invariant<BoardState> for BalancedMarksInvariant {
    fn holds(state: &BoardState) -> bool {
        let (x, o) = state.board().mark_counts();
        x.abs_diff(o) <= 1
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;

    #[test]
    fn test_alternating_play_holds() {
        let mut state = BoardState::new();
        for index in [0, 4, 8, 2, 6] {
            state.apply_move(index).unwrap();
            assert!(BalancedMarksInvariant::holds(&state));
        }
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut state = BoardState::new();
        state.apply_move_as(0, Player::X).unwrap();
        state.apply_move_as(1, Player::X).unwrap();
        assert!(!BalancedMarksInvariant::holds(&state));
    }
}
