use crate::error::GameError;
use derive_more::Display;
use std::fmt::Debug;
use std::str::FromStr;

/// The central trait of the library, defining the interface for a game state.
///
/// To search a game with [`MinimaxSearch`](crate::minimax::MinimaxSearch), this trait must be
/// implemented. Boards are small values: the search clones one per explored branch, so
/// `Clone` must produce a fully independent copy.
pub trait Board: Default + Clone {
    /// The type representing a move in the game.
    type Move: Copy + Debug + PartialEq;

    /// Places `mark` according to `b_move`.
    ///
    /// Returns `false` and leaves the board untouched when the move is not legal.
    fn apply_move(&mut self, mark: Mark, b_move: Self::Move) -> bool;

    /// Returns `true` if at least one more move can be made.
    fn has_legal_moves(&self) -> bool;

    /// Returns `true` if `mark` has completed a line.
    fn is_winner(&self, mark: Mark) -> bool;

    /// Returns every legal move, always in the same order for the same position.
    ///
    /// The search breaks ties by this order, so it is part of the observable contract.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Returns `true` once the game is over, either by a win or by running out of moves.
    fn is_terminal(&self) -> bool {
        self.is_winner(Mark::X) || self.is_winner(Mark::O) || !self.has_legal_moves()
    }
}

/// One of the two marks a side plays with.
#[derive(Debug, Display, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Mark {
    /// Conventionally moves first.
    X,
    /// Conventionally moves second.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl FromStr for Mark {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Mark::X),
            "o" | "O" => Ok(Mark::O),
            other => Err(GameError::UnknownMark {
                input: other.to_string(),
            }),
        }
    }
}

/// A cell address on a grid board, as `(column, row)`.
///
/// Coordinates are not range checked on construction; boards reject
/// out-of-range moves in [`Board::apply_move`].
#[derive(Debug, Display, PartialEq, Eq, Hash, Copy, Clone)]
#[display("{col},{row}")]
pub struct Coord {
    /// Column, counted from the left.
    pub col: usize,
    /// Row, counted from the top.
    pub row: usize,
}

impl Coord {
    /// Creates a coordinate from a column and a row.
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// Result of a finished game.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum GameOutcome {
    /// The given mark completed a line.
    Winner(Mark),
    /// The board filled up without a line.
    Draw,
}

impl GameOutcome {
    /// Reads the outcome off a board. Returns `None` while the game is still in progress.
    pub fn of<T: Board>(board: &T) -> Option<Self> {
        if board.is_winner(Mark::X) {
            Some(GameOutcome::Winner(Mark::X))
        } else if board.is_winner(Mark::O) {
            Some(GameOutcome::Winner(Mark::O))
        } else if !board.has_legal_moves() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}
