//! A small tic-tac-toe engine with an unbeatable computer opponent.
//!
//! The computer picks its moves with an exhaustive minimax search: every reachable position is
//! explored, finished games are scored from the searching side's point of view, and scores are
//! propagated back up with the two sides alternately maximizing and minimizing. Quicker wins
//! and slower losses score better, and equal scores keep the first move in board order, so the
//! engine is fully deterministic.
//!
//! # Example
//!
//! ```rust
//! use minimax_ttt::board::{Board, Coord, Mark};
//! use minimax_ttt::boards::tic_tac_toe::TicTacToeBoard;
//! use minimax_ttt::minimax::MinimaxSearch;
//!
//! // X threatens the top row
//! let mut board = TicTacToeBoard::new();
//! board.apply_move(Mark::X, Coord::new(0, 0));
//! board.apply_move(Mark::O, Coord::new(1, 1));
//! board.apply_move(Mark::X, Coord::new(1, 0));
//!
//! // Ask the search for O's reply
//! let mut search = MinimaxSearch::new(Mark::O);
//! let best_move = search.best_move(&board).unwrap();
//!
//! assert_eq!(best_move, Coord::new(2, 0));
//! println!("{board}");
//! ```

/// Contains the `Board` trait and the types shared by every board: marks, coordinates, outcomes.
pub mod board;
/// Contains pre-made implementations of the `Board` trait.
pub mod boards;
/// The crate error type.
pub mod error;
/// The core module of the library, containing the `MinimaxSearch` implementation.
pub mod minimax;
/// Human and computer players.
pub mod player;
/// Round control.
pub mod round;
/// Contains the value of a searched position and the counters of a search.
pub mod search_result;
