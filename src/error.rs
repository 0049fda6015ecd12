//! Error type shared by the board, the search and the players.

use crate::board::{Coord, Mark};
use derive_more::{Display, Error, From};

/// Everything that can go wrong outside of an ordinary illegal move.
///
/// Illegal moves are not errors: [`Board::apply_move`](crate::board::Board::apply_move)
/// reports them with `false` so the caller can simply ask again.
#[derive(Debug, Display, Error, From)]
pub enum GameError {
    /// A side was configured with something other than `X` or `O`.
    #[display("unknown mark {input:?}, expected X or O")]
    UnknownMark { input: String },

    /// A side was configured with something other than a human or a computer.
    #[display("unknown player kind {input:?}, expected human or computer")]
    UnknownPlayerKind { input: String },

    /// The move source ran out of input before a legal move was entered.
    #[display("input closed before a move was entered")]
    InputClosed,

    /// The search was asked for a move on a board where the game is already over.
    #[display("cannot search a finished game")]
    TerminalBoard,

    /// A computer player chose a move the board refused.
    #[display("{mark} could not be placed at {b_move}")]
    RejectedMove { mark: Mark, b_move: Coord },

    #[display("I/O error: {_0}")]
    #[from]
    Io(std::io::Error),
}
