//! Mutable game state shared by the game loop and the search engine.

use super::action::MoveError;
use super::position::Position;
use super::rules;
use super::types::{Board, CELL_COUNT, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Board, side to move, and the fixed human/AI role assignment.
///
/// `apply_move` advances the turn; `undo_move` only clears the cell.
/// Code that backtracks (the minimax search) threads the mover
/// explicitly through [`BoardState::apply_move_as`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    board: Board,
    current_player: Player,
    human: Player,
}

/// Error parsing a board from its 9-character form.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// The input did not contain exactly 9 cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),
    /// A character was not X, O, or an empty marker.
    #[display("Unexpected character {:?} in board", _0)]
    BadCell(char),
}

impl std::error::Error for ParseBoardError {}

impl BoardState {
    /// Human plays X, the AI plays O, the human moves first.
    pub fn new() -> Self {
        Self::new_game(Player::X, Player::X)
    }

    /// Creates an empty board with the given human mark and first mover.
    #[instrument]
    pub fn new_game(human: Player, first: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: first,
            human,
        }
    }

    /// Creates a state from an existing board.
    pub fn from_board(board: Board, to_move: Player, human: Player) -> Self {
        Self {
            board,
            current_player: to_move,
            human,
        }
    }

    /// Parses a board such as `"XX.OO...."` in row-major order.
    ///
    /// `X`/`O` (any case) are marks; `.`, `_`, `-` and space are empty.
    /// Row separators `/` and `|` are ignored.
    #[instrument]
    pub fn from_cells_str(
        cells: &str,
        to_move: Player,
        human: Player,
    ) -> Result<Self, ParseBoardError> {
        let mut squares = Vec::with_capacity(CELL_COUNT);
        for c in cells.chars().filter(|c| !matches!(c, '/' | '|')) {
            let square = match c.to_ascii_uppercase() {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                '.' | '_' | '-' | ' ' => Square::Empty,
                other => return Err(ParseBoardError::BadCell(other)),
            };
            squares.push(square);
        }
        let squares: [Square; CELL_COUNT] = squares
            .try_into()
            .map_err(|v: Vec<Square>| ParseBoardError::WrongLength(v.len()))?;
        let board = Board::from_squares(squares);
        Ok(Self::from_board(board, to_move, human))
    }

    /// The side to move on a board reached by alternating play from X.
    pub fn inferred_to_move(board: &Board) -> Player {
        let (x, o) = board.mark_counts();
        if x > o { Player::O } else { Player::X }
    }

    /// Returns the same cells and turn with the AI role given to `ai`.
    pub fn with_ai_role(&self, ai: Player) -> Self {
        Self {
            human: ai.opponent(),
            ..self.clone()
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the human's mark.
    pub fn human(&self) -> Player {
        self.human
    }

    /// Returns the AI's mark.
    pub fn ai(&self) -> Player {
        self.human.opponent()
    }

    /// True iff `player` holds any full row, column, or diagonal.
    pub fn is_winner(&self, player: Player) -> bool {
        rules::has_won(&self.board, player)
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// True iff either player has won or the board is full.
    pub fn is_terminal(&self) -> bool {
        self.is_winner(Player::X) || self.is_winner(Player::O) || self.is_full()
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(&self.board)
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Won(player),
            None if rules::is_draw(&self.board) => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Indices of empty cells in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.board
            .squares()
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Places the current player's mark and passes the turn.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for an index above 8 and
    /// [`MoveError::Occupied`] for a taken cell. The state is left
    /// unchanged on error.
    pub fn apply_move(&mut self, index: usize) -> Result<(), MoveError> {
        self.apply_move_as(index, self.current_player)
    }

    /// Places `player`'s mark and hands the turn to the opponent.
    pub fn apply_move_as(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        if !self.board.is_empty(index) {
            return Err(MoveError::Occupied(position));
        }
        self.board.set(index, Square::Occupied(player))?;
        self.current_player = player.opponent();
        Ok(())
    }

    /// Clears the cell at `index`. Leaves `current_player` untouched.
    pub fn undo_move(&mut self, index: usize) {
        if self.board.set(index, Square::Empty).is_err() {
            debug!(index, "Ignoring undo of off-board index");
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
