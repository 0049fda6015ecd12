use crate::board::{Board, Coord, Mark};
use std::fmt;

const SIZE: usize = 3;

/// Every line that wins the game: two diagonals, three rows, three columns.
/// Entries are field indices, `row * 3 + col`.
const LINES: [[usize; 3]; 8] = [
    [0, 4, 8],
    [2, 4, 6],
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
];

/// An implementation of the `Board` trait for the game of Tic-Tac-Toe.
///
/// The board is represented by a 9-element array in row-major order, where each element
/// corresponds to a cell. A move is a [`Coord`] with both components in `0..3`.
///
/// The board does not track whose turn it is: any mark may be placed on any empty cell.
/// Alternation is the job of whoever drives the game.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
pub struct TicTacToeBoard {
    field: [Option<Mark>; SIZE * SIZE],
}

impl TicTacToeBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the contents of a cell, or `None` if it is empty or out of range.
    pub fn cell(&self, coord: Coord) -> Option<Mark> {
        Self::index(coord).and_then(|i| self.field[i])
    }

    /// Number of cells that hold a mark.
    pub fn occupied_count(&self) -> usize {
        self.field.iter().filter(|x| x.is_some()).count()
    }

    fn index(coord: Coord) -> Option<usize> {
        (coord.col < SIZE && coord.row < SIZE).then_some(coord.row * SIZE + coord.col)
    }
}

impl Board for TicTacToeBoard {
    type Move = Coord;

    fn apply_move(&mut self, mark: Mark, b_move: Self::Move) -> bool {
        match Self::index(b_move) {
            Some(i) if self.field[i].is_none() => {
                self.field[i] = Some(mark);
                true
            }
            _ => false,
        }
    }

    fn has_legal_moves(&self) -> bool {
        self.field.iter().any(|x| x.is_none())
    }

    fn is_winner(&self, mark: Mark) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.field[i] == Some(mark)))
    }

    fn legal_moves(&self) -> Vec<Self::Move> {
        self.field
            .iter()
            .enumerate()
            .filter(|(_, x)| x.is_none())
            .map(|(i, _)| Coord::new(i % SIZE, i / SIZE))
            .collect()
    }
}

impl fmt::Display for TicTacToeBoard {
    /// Draws the grid with column labels on top and row labels on the left.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  0 1 2")?;
        for row in 0..SIZE {
            if row > 0 {
                write!(f, "\n  -+-+-")?;
            }
            write!(f, "\n{row} ")?;
            for col in 0..SIZE {
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.cell(Coord::new(col, row)) {
                    Some(mark) => write!(f, "{mark}")?,
                    None => write!(f, " ")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Coord, GameOutcome, Mark};
    use crate::boards::tic_tac_toe::TicTacToeBoard;
    use rand::rngs::StdRng;
    use rand::seq::IndexedRandom;
    use rand::SeedableRng;

    fn board_from(moves: &[(Mark, usize, usize)]) -> TicTacToeBoard {
        let mut board = TicTacToeBoard::new();
        for &(mark, col, row) in moves {
            assert!(board.apply_move(mark, Coord::new(col, row)));
        }
        board
    }

    /// Plays random alternating legal moves, stopping once the game is over.
    fn random_game(rng: &mut StdRng) -> Vec<TicTacToeBoard> {
        let mut board = TicTacToeBoard::new();
        let mut mark = Mark::X;
        let mut history = vec![board];
        while !board.is_terminal() {
            let moves = board.legal_moves();
            let b_move = *moves.choose(rng).unwrap();
            assert!(board.apply_move(mark, b_move));
            history.push(board);
            mark = mark.opponent();
        }
        history
    }

    #[test]
    fn empty_board_has_all_moves_in_row_major_order() {
        let board = TicTacToeBoard::new();
        let moves = board.legal_moves();

        assert_eq!(moves.len(), 9);
        assert_eq!(moves[0], Coord::new(0, 0));
        assert_eq!(moves[1], Coord::new(1, 0));
        assert_eq!(moves[3], Coord::new(0, 1));
        assert_eq!(moves[8], Coord::new(2, 2));
        assert!(board.has_legal_moves());
        assert!(!board.is_terminal());
    }

    #[test]
    fn apply_move_fills_empty_cell() {
        let mut board = TicTacToeBoard::new();

        assert!(board.apply_move(Mark::X, Coord::new(2, 1)));

        assert_eq!(board.cell(Coord::new(2, 1)), Some(Mark::X));
        assert_eq!(board.occupied_count(), 1);
        assert!(!board.legal_moves().contains(&Coord::new(2, 1)));
    }

    #[test]
    fn apply_move_rejects_out_of_range() {
        let mut board = TicTacToeBoard::new();

        assert!(!board.apply_move(Mark::X, Coord::new(3, 0)));
        assert!(!board.apply_move(Mark::O, Coord::new(0, 3)));

        assert_eq!(board, TicTacToeBoard::new());
    }

    #[test]
    fn occupied_cell_is_never_overwritten() {
        // arrange
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            for board in random_game(&mut rng) {
                for col in 0..3 {
                    for row in 0..3 {
                        let coord = Coord::new(col, row);
                        if board.cell(coord).is_none() {
                            continue;
                        }

                        // act
                        let mut copy = board;
                        let applied_x = copy.apply_move(Mark::X, coord);
                        let applied_o = copy.apply_move(Mark::O, coord);

                        // assert
                        assert!(!applied_x && !applied_o);
                        assert_eq!(copy, board);
                    }
                }
            }
        }
    }

    #[test]
    fn legal_and_occupied_cells_add_up_to_nine() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..200 {
            for board in random_game(&mut rng) {
                assert_eq!(board.legal_moves().len() + board.occupied_count(), 9);
            }
        }
    }

    #[test]
    fn terminal_is_a_fixed_point() {
        let mut rng = StdRng::seed_from_u64(13);

        for _ in 0..200 {
            let history = random_game(&mut rng);
            let last = *history.last().unwrap();
            assert!(last.is_terminal());
            assert!(GameOutcome::of(&last).is_some());

            // only the final position of a game can be terminal
            for board in &history[..history.len() - 1] {
                assert!(!board.is_terminal());
            }

            // querying does not change anything
            let copy = last;
            assert!(last.is_terminal());
            assert_eq!(copy, last);
        }
    }

    #[test]
    fn detects_every_line() {
        let lines = [
            [(0, 0), (1, 1), (2, 2)],
            [(2, 0), (1, 1), (0, 2)],
            [(0, 1), (1, 1), (2, 1)],
            [(1, 0), (1, 1), (1, 2)],
            [(0, 2), (1, 2), (2, 2)],
            [(2, 0), (2, 1), (2, 2)],
        ];

        for line in lines {
            let moves: Vec<_> = line.iter().map(|&(c, r)| (Mark::O, c, r)).collect();
            let board = board_from(&moves);

            assert!(board.is_winner(Mark::O), "line {line:?}");
            assert!(!board.is_winner(Mark::X));
            assert!(board.is_terminal());
            assert_eq!(GameOutcome::of(&board), Some(GameOutcome::Winner(Mark::O)));
        }
    }

    #[test]
    fn full_board_without_line_is_draw() {
        // arrange
        // X O X
        // X O O
        // O X X
        let board = board_from(&[
            (Mark::X, 0, 0),
            (Mark::O, 1, 0),
            (Mark::X, 2, 0),
            (Mark::O, 1, 1),
            (Mark::X, 0, 1),
            (Mark::O, 2, 1),
            (Mark::X, 1, 2),
            (Mark::O, 0, 2),
            (Mark::X, 2, 2),
        ]);

        // assert
        assert!(!board.has_legal_moves());
        assert!(board.legal_moves().is_empty());
        assert!(!board.is_winner(Mark::X));
        assert!(!board.is_winner(Mark::O));
        assert!(board.is_terminal());
        assert_eq!(GameOutcome::of(&board), Some(GameOutcome::Draw));
    }

    #[test]
    fn renders_grid_with_labels() {
        let board = board_from(&[(Mark::X, 0, 0), (Mark::O, 1, 0), (Mark::X, 1, 1), (Mark::O, 2, 2)]);

        let expected = "  0 1 2\n\
                        0 X|O| \n  -+-+-\n\
                        1  |X| \n  -+-+-\n\
                        2  | |O";
        assert_eq!(board.to_string(), expected);
    }
}
