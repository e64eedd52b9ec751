//! Single winner invariant: at most one player ever holds a line.

use super::super::{BoardState, Player};
use super::Invariant;

/// Invariant: X and O never both have three in a row.
pub struct SingleWinnerInvariant;

impl Invariant<BoardState> for SingleWinnerInvariant {
    fn holds(state: &BoardState) -> bool {
        !(state.is_winner(Player::X) && state.is_winner(Player::O))
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}
