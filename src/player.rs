//! Move sources for the two sides of a round.

use crate::board::{Board, Coord, Mark};
use crate::boards::tic_tac_toe::TicTacToeBoard;
use crate::error::GameError;
use crate::minimax::MinimaxSearch;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// A side in a round. Each call to [`make_move`](Player::make_move) places exactly one mark.
pub trait Player {
    /// The mark this player places.
    fn mark(&self) -> Mark;

    /// Picks a move for [`mark`](Player::mark) and applies it to `board`.
    fn make_move(&mut self, board: &mut TicTacToeBoard) -> Result<(), GameError>;

    /// Returns `true` if this player holds a line on `board`.
    fn is_winner(&self, board: &TicTacToeBoard) -> bool {
        board.is_winner(self.mark())
    }
}

/// Which kind of player controls a side.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum PlayerKind {
    /// Moves are typed in as text.
    Human,
    /// Moves are chosen by the minimax search.
    Computer,
}

impl FromStr for PlayerKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "h" | "1" => Ok(PlayerKind::Human),
            "computer" | "c" | "2" => Ok(PlayerKind::Computer),
            _ => Err(GameError::UnknownPlayerKind {
                input: s.trim().to_string(),
            }),
        }
    }
}

/// Parses a move typed as `x,y`.
///
/// Both fields must be plain decimal digits; whitespace around them is ignored. The range is
/// not checked here, so `5,5` parses and is later rejected by the board.
pub fn parse_move(text: &str) -> Option<Coord> {
    let mut fields = text.split(',').map(str::trim);
    let (col, row) = (fields.next()?, fields.next()?);
    if fields.next().is_some() {
        return None;
    }

    let is_number = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !is_number(col) || !is_number(row) {
        return None;
    }

    Some(Coord::new(col.parse().ok()?, row.parse().ok()?))
}

/// Reads one line from `input`. Returns `None` at end of input.
///
/// Bytes that are not valid UTF-8 are replaced rather than reported, so garbled input is
/// handled like any other unparsable answer.
pub fn read_answer<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&line).into_owned()))
}

/// A player that reads moves as text, typically a person at a terminal.
///
/// Invalid or illegal moves are reported and asked for again until one applies.
pub struct HumanPlayer<R, W> {
    mark: Mark,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a player for `mark` that reads moves from `input` and prompts on `output`.
    pub fn new(mark: Mark, input: R, output: W) -> Self {
        Self {
            mark,
            input,
            output,
        }
    }

    fn prompt_for_move(&mut self, board: &mut TicTacToeBoard) -> Result<bool, GameError> {
        write!(self.output, "Please specify a move in format x,y: ")?;
        self.output.flush()?;

        let line = read_answer(&mut self.input)?.ok_or(GameError::InputClosed)?;

        let applied = parse_move(&line).is_some_and(|coord| board.apply_move(self.mark, coord));
        debug!(mark = %self.mark, input = line.trim(), applied, "Human move entered");
        Ok(applied)
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn mark(&self) -> Mark {
        self.mark
    }

    #[instrument(level = "debug", skip_all, fields(mark = %self.mark))]
    fn make_move(&mut self, board: &mut TicTacToeBoard) -> Result<(), GameError> {
        while !self.prompt_for_move(board)? {
            writeln!(self.output, "That is not recognized as a valid move.")?;
        }
        Ok(())
    }
}

/// A player that picks every move with an exhaustive minimax search and never loses.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    search: MinimaxSearch,
}

impl ComputerPlayer {
    /// Creates a computer player for `mark`.
    pub fn new(mark: Mark) -> Self {
        Self {
            search: MinimaxSearch::new(mark),
        }
    }
}

impl Player for ComputerPlayer {
    fn mark(&self) -> Mark {
        self.search.perspective()
    }

    #[instrument(level = "debug", skip_all, fields(mark = %self.mark()))]
    fn make_move(&mut self, board: &mut TicTacToeBoard) -> Result<(), GameError> {
        let b_move = self.search.best_move(board)?;
        place(board, self.mark(), b_move)?;

        let stats = self.search.last_stats();
        info!(mark = %self.mark(), %b_move, nodes = stats.nodes, "Computer moved");
        Ok(())
    }
}

fn place(board: &mut TicTacToeBoard, mark: Mark, b_move: Coord) -> Result<(), GameError> {
    if board.apply_move(mark, b_move) {
        Ok(())
    } else {
        Err(GameError::RejectedMove { mark, b_move })
    }
}
