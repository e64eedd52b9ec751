//! Minimax with alpha-beta pruning over a single mutable board.

use super::stats::SearchStats;
use crate::games::tictactoe::{BoardState, Player, Position};
use tracing::{debug, info, instrument};

/// Score of a position the AI has won.
pub const AI_WIN: i32 = 1;
/// Score of a position the human has won.
pub const HUMAN_WIN: i32 = -1;
/// Score of a drawn position.
pub const DRAW: i32 = 0;

/// Bound wider than any reachable score.
const INF: i32 = i32::MAX;

/// Best move found for the AI at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Index (0-8) of the chosen cell.
    pub index: usize,
    /// Minimax value of the move from the AI's perspective.
    pub value: i32,
    /// Counters collected while searching.
    pub stats: SearchStats,
}

impl SearchResult {
    /// Named position of the chosen cell.
    pub fn position(&self) -> Option<Position> {
        Position::from_index(self.index)
    }
}

/// Scores a finished game, or returns `None` while play continues.
///
/// Wins are checked before the full-board draw so that a last move
/// completing a line counts as a win.
pub fn terminal_value(state: &BoardState) -> Option<i32> {
    if state.is_winner(state.human()) {
        Some(HUMAN_WIN)
    } else if state.is_winner(state.ai()) {
        Some(AI_WIN)
    } else if state.is_full() {
        Some(DRAW)
    } else {
        None
    }
}

/// Exhaustive minimax searcher for the AI side of a [`BoardState`].
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    stats: SearchStats,
}

impl Minimax {
    /// Creates a searcher with empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the most recent search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Chooses the AI's best move, or `None` on a full board.
    ///
    /// Candidates are tried in ascending index order and only a
    /// strictly better value replaces the current best, so ties go to
    /// the lowest index. The search runs on a private copy; `state`
    /// is not modified.
    #[instrument(skip(self, state), fields(ai = %state.ai(), empty = state.empty_cells().len()))]
    pub fn search(&mut self, state: &BoardState) -> Option<SearchResult> {
        self.stats = SearchStats::default();
        let mut scratch = state.clone();
        let ai = scratch.ai();

        let mut best: Option<(usize, i32)> = None;
        let mut alpha = -INF;
        let beta = INF;

        for index in scratch.empty_cells() {
            let Ok(()) = scratch.apply_move_as(index, ai) else {
                continue;
            };
            let value = self.minimax(&mut scratch, 0, alpha, beta, false);
            scratch.undo_move(index);
            debug!(index, value, "Evaluated root move");

            if best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((index, value));
            }
            alpha = alpha.max(value);
        }

        let (index, value) = best?;
        info!(
            index,
            value,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "Search complete"
        );
        Some(SearchResult {
            index,
            value,
            stats: self.stats,
        })
    }

    /// Index of the AI's best move, or `None` on a full board.
    pub fn find_best_move(&mut self, state: &BoardState) -> Option<usize> {
        self.search(state).map(|result| result.index)
    }

    /// Game-theoretic value of `state` from the AI's perspective.
    ///
    /// The side to move is taken from `state.current_player()`.
    #[instrument(skip(self, state))]
    pub fn evaluate(&mut self, state: &BoardState) -> i32 {
        self.stats = SearchStats::default();
        let mut scratch = state.clone();
        let maximizing = scratch.current_player() == scratch.ai();
        self.minimax(&mut scratch, 0, -INF, INF, maximizing)
    }

    /// Minimax value of `state` with alpha-beta pruning.
    ///
    /// `maximizing` selects the mover: the AI when true, the human
    /// otherwise. Every move is undone before returning, so `state`
    /// holds the same cells afterwards (its `current_player` may
    /// differ). `depth` only feeds the statistics.
    pub fn minimax(
        &mut self,
        state: &mut BoardState,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats.visit(depth);

        if let Some(value) = terminal_value(state) {
            return value;
        }

        let mover: Player = if maximizing { state.ai() } else { state.human() };
        let mut best = if maximizing { -INF } else { INF };

        for index in state.empty_cells() {
            let Ok(()) = state.apply_move_as(index, mover) else {
                continue;
            };
            let value = self.minimax(state, depth + 1, alpha, beta, !maximizing);
            state.undo_move(index);

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }

            if beta <= alpha {
                self.stats.cutoff();
                break;
            }
        }

        best
    }
}

/// Minimax value of `state` with alpha-beta pruning, discarding statistics.
pub fn minimax(
    state: &mut BoardState,
    depth: u32,
    alpha: i32,
    beta: i32,
    maximizing: bool,
) -> i32 {
    Minimax::new().minimax(state, depth, alpha, beta, maximizing)
}

/// Index of the AI's best move for `state`, or `None` on a full board.
pub fn find_best_move(state: &BoardState) -> Option<usize> {
    Minimax::new().find_best_move(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(cells: &str, to_move: Player, human: Player) -> BoardState {
        BoardState::from_cells_str(cells, to_move, human).unwrap()
    }

    #[test]
    fn test_terminal_value_prefers_win_over_draw() {
        // Full board where X's last move completed the left column.
        let s = state("XOOXXOXOX", Player::O, Player::X);
        assert!(s.is_full());
        assert_eq!(terminal_value(&s), Some(HUMAN_WIN));
    }

    #[test]
    fn test_terminal_value_in_progress() {
        assert_eq!(terminal_value(&BoardState::new()), None);
    }

    #[test]
    fn test_full_board_returns_none() {
        let s = state("XOXXOOOXX", Player::O, Player::X);
        assert_eq!(find_best_move(&s), None);
    }

    #[test]
    fn test_single_empty_cell() {
        let s = state("XOXXOOOX.", Player::O, Player::X);
        assert_eq!(find_best_move(&s), Some(8));
    }

    #[test]
    fn test_search_leaves_caller_state_untouched() {
        let s = state("X...O....", Player::X, Player::X);
        let before = s.clone();
        let _ = find_best_move(&s);
        assert_eq!(s, before);
    }

    #[test]
    fn test_minimax_restores_cells() {
        let mut s = state("X...O....", Player::X, Player::X);
        let cells = s.board().clone();
        let _ = minimax(&mut s, 0, -INF, INF, false);
        assert_eq!(s.board(), &cells);
    }

    #[test]
    fn test_stats_recorded() {
        let mut searcher = Minimax::new();
        let result = searcher.search(&BoardState::new()).unwrap();
        assert!(result.stats.nodes > 0);
        assert!(result.stats.cutoffs > 0);
        assert_eq!(result.stats.max_depth, 8);
        assert_eq!(searcher.stats(), &result.stats);
    }

    #[test]
    fn test_evaluate_empty_board_is_draw() {
        assert_eq!(Minimax::new().evaluate(&BoardState::new()), DRAW);
    }
}
