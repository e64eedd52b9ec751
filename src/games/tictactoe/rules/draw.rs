//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::check_winner;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner is a draw.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::*;

    fn fill(board: &mut Board, player: Player, positions: &[Position]) {
        for pos in positions {
            board
                .set(pos.to_index(), Square::Occupied(player))
                .unwrap();
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        fill(&mut board, Player::X, &[Position::Center]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // X O X / O X X / O X O
        fill(
            &mut board,
            Player::X,
            &[
                Position::TopLeft,
                Position::TopRight,
                Position::Center,
                Position::MiddleRight,
                Position::BottomCenter,
            ],
        );
        fill(
            &mut board,
            Player::O,
            &[
                Position::TopCenter,
                Position::MiddleLeft,
                Position::BottomLeft,
                Position::BottomRight,
            ],
        );

        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        // X X X / O O X / O X O
        fill(
            &mut board,
            Player::X,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleRight,
                Position::BottomCenter,
            ],
        );
        fill(
            &mut board,
            Player::O,
            &[
                Position::MiddleLeft,
                Position::Center,
                Position::BottomLeft,
                Position::BottomRight,
            ],
        );

        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
