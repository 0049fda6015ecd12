//! Round control: alternate two players on one board until the game is over.

use crate::board::GameOutcome;
use crate::boards::tic_tac_toe::TicTacToeBoard;
use crate::error::GameError;
use crate::player::Player;
use tracing::{info, instrument};

/// Plays one round on `board`, starting with `first`, and returns how it ended.
///
/// `on_turn` is called with the player that is about to move and the board before each move,
/// then once more with `None` and the final board.
#[instrument(level = "debug", skip_all, fields(first = %first.mark(), second = %second.mark()))]
pub fn play_round<'a>(
    first: &'a mut dyn Player,
    second: &'a mut dyn Player,
    board: &mut TicTacToeBoard,
    mut on_turn: impl FnMut(Option<&dyn Player>, &TicTacToeBoard),
) -> Result<GameOutcome, GameError> {
    let mut players: [&'a mut dyn Player; 2] = [first, second];
    let mut turn = 0;

    let outcome = loop {
        if let Some(outcome) = GameOutcome::of(&*board) {
            break outcome;
        }

        let player = &mut players[turn % 2];
        on_turn(Some(&**player), board);
        player.make_move(board)?;
        turn += 1;
    };

    on_turn(None, board);
    info!(?outcome, moves = turn, "Round finished");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Coord, GameOutcome, Mark};
    use crate::boards::tic_tac_toe::TicTacToeBoard;
    use crate::player::{ComputerPlayer, HumanPlayer, Player};
    use crate::round::play_round;
    use std::io::Cursor;

    #[test]
    fn computers_draw() {
        // arrange
        let mut x = ComputerPlayer::new(Mark::X);
        let mut o = ComputerPlayer::new(Mark::O);
        let mut board = TicTacToeBoard::new();
        let mut turns = Vec::new();

        // act
        let outcome = play_round(&mut x, &mut o, &mut board, |player, _| {
            turns.push(player.map(|p| p.mark()));
        })
        .unwrap();

        // assert
        assert_eq!(outcome, GameOutcome::Draw);
        assert!(!board.has_legal_moves());
        assert_eq!(turns.len(), 10);
        assert_eq!(turns[0], Some(Mark::X));
        assert_eq!(turns[1], Some(Mark::O));
        assert_eq!(turns[8], Some(Mark::X));
        assert_eq!(turns[9], None);
    }

    #[test]
    fn computer_punishes_careless_human() {
        // arrange
        // The human plays along the top row and ignores every threat.
        let input = Cursor::new("0,0\n1,0\n2,0\n0,1\n2,1\n0,2\n1,2\n2,2\n");
        let mut human = HumanPlayer::new(Mark::X, input, Vec::new());
        let mut computer = ComputerPlayer::new(Mark::O);
        let mut board = TicTacToeBoard::new();

        // act
        let outcome = play_round(&mut human, &mut computer, &mut board, |_, _| {}).unwrap();

        // assert
        assert_eq!(outcome, GameOutcome::Winner(Mark::O));
        assert!(computer.is_winner(&board));
        assert!(!human.is_winner(&board));
    }

    #[test]
    fn second_player_can_start() {
        let mut x = ComputerPlayer::new(Mark::X);
        let mut o = ComputerPlayer::new(Mark::O);
        let mut board = TicTacToeBoard::new();

        let outcome = play_round(&mut o, &mut x, &mut board, |_, _| {}).unwrap();

        assert_eq!(outcome, GameOutcome::Draw);
        // O moved first, so it holds five of the nine cells.
        let o_cells = (0..3)
            .flat_map(|col| (0..3).map(move |row| Coord::new(col, row)))
            .filter(|&coord| board.cell(coord) == Some(Mark::O))
            .count();
        assert_eq!(o_cells, 5);
    }

    #[test]
    fn finished_board_is_returned_without_moves() {
        let mut board = TicTacToeBoard::new();
        for col in 0..3 {
            assert!(board.apply_move(Mark::O, Coord::new(col, 1)));
        }
        let mut x = ComputerPlayer::new(Mark::X);
        let mut o = ComputerPlayer::new(Mark::O);
        let mut calls = 0;

        let outcome = play_round(&mut x, &mut o, &mut board, |_, _| calls += 1).unwrap();

        assert_eq!(outcome, GameOutcome::Winner(Mark::O));
        assert_eq!(board.occupied_count(), 3);
        assert_eq!(calls, 1);
    }
}
