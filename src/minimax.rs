use crate::board::{Board, Mark};
use crate::error::GameError;
use crate::search_result::{SearchResult, SearchStats};
use tracing::{debug, instrument, trace};

/// Score of a win reached on the very first ply of the tree.
///
/// Terminal positions are worth `WIN_SCORE - depth` for a win and `depth - WIN_SCORE` for a
/// loss, so quicker wins and slower losses are preferred. The value must exceed the deepest
/// possible game, so every win stays positive.
pub const WIN_SCORE: i32 = 10;

/// Exhaustive minimax search over the full game tree.
///
/// The search scores positions from the perspective of one mark. Plies where that mark acts
/// maximize the score and plies where its opponent acts minimize it. Ties keep the first
/// move in [`Board::legal_moves`] order, so repeated searches of the same position always
/// return the same move.
///
/// Every explored branch works on its own clone of the board; the board passed in is never
/// modified.
#[derive(Debug, Clone)]
pub struct MinimaxSearch {
    perspective: Mark,
    stats: SearchStats,
}

impl MinimaxSearch {
    /// Creates a search that plays for `perspective`.
    pub fn new(perspective: Mark) -> Self {
        Self {
            perspective,
            stats: SearchStats::default(),
        }
    }

    /// The mark whose outcome this search maximizes.
    pub fn perspective(&self) -> Mark {
        self.perspective
    }

    /// Counters from the most recent call to [`search`](Self::search).
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Searches `board` with the perspective mark to act and returns the root value.
    ///
    /// Fails with [`GameError::TerminalBoard`] if the game on `board` is already over, since
    /// there is no move to choose.
    #[instrument(level = "debug", skip_all, fields(perspective = %self.perspective))]
    pub fn search<T: Board>(&mut self, board: &T) -> Result<SearchResult<T::Move>, GameError> {
        if board.is_terminal() {
            return Err(GameError::TerminalBoard);
        }

        self.stats = SearchStats::default();
        let result = self.minimax(board, self.perspective, 0);
        debug!(
            score = result.score,
            best_move = ?result.best_move,
            nodes = self.stats.nodes,
            leaves = self.stats.leaves,
            max_depth = self.stats.max_depth,
            "Search finished"
        );
        Ok(result)
    }

    /// Returns the optimal move for the perspective mark on `board`.
    pub fn best_move<T: Board>(&mut self, board: &T) -> Result<T::Move, GameError> {
        self.search(board)?
            .best_move
            .ok_or(GameError::TerminalBoard)
    }

    fn minimax<T: Board>(&mut self, board: &T, acting: Mark, depth: i32) -> SearchResult<T::Move> {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if board.is_terminal() {
            self.stats.leaves += 1;
            return SearchResult::terminal(self.terminal_score(board, depth));
        }

        let maximizing = acting == self.perspective;
        let mut best = SearchResult {
            score: if maximizing { i32::MIN } else { i32::MAX },
            best_move: None,
        };

        for b_move in board.legal_moves() {
            let mut branch = board.clone();
            if !branch.apply_move(acting, b_move) {
                debug_assert!(false, "legal move {b_move:?} was rejected");
                continue;
            }

            let score = self.minimax(&branch, acting.opponent(), depth + 1).score;
            if depth == 0 {
                trace!(?b_move, score, "Root candidate");
            }

            let improves = if maximizing {
                score > best.score
            } else {
                score < best.score
            };
            if improves {
                best = SearchResult {
                    score,
                    best_move: Some(b_move),
                };
            }
        }

        best
    }

    fn terminal_score<T: Board>(&self, board: &T, depth: i32) -> i32 {
        if board.is_winner(self.perspective) {
            WIN_SCORE - depth
        } else if board.is_winner(self.perspective.opponent()) {
            depth - WIN_SCORE
        } else {
            0
        }
    }
}
