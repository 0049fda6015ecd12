/// The value of one position in the search tree.
///
/// `score` is from the searching side's perspective. `best_move` is the move that
/// reaches that score and is `None` only for terminal positions.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SearchResult<M> {
    /// Positive when the searching side wins, negative when it loses, zero for a draw.
    pub score: i32,
    /// The chosen move from this position.
    pub best_move: Option<M>,
}

impl<M> SearchResult<M> {
    /// Creates a result for a position where the game is over.
    pub fn terminal(score: i32) -> Self {
        SearchResult {
            score,
            best_move: None,
        }
    }

    /// Returns `true` if the searching side is guaranteed to win from here.
    pub fn is_win(&self) -> bool {
        self.score > 0
    }

    /// Returns `true` if the searching side is guaranteed to lose from here.
    pub fn is_loss(&self) -> bool {
        self.score < 0
    }
}

/// Counters collected during one search.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct SearchStats {
    /// Every position visited, including the root.
    pub nodes: u64,
    /// Positions where the game was over.
    pub leaves: u64,
    /// Deepest ply reached below the root.
    pub max_depth: i32,
}
