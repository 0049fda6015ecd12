//! minimax-ttt - interactive tic-tac-toe
//!
//! Each side is either a human typing moves or the minimax computer player.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use minimax_ttt::board::{GameOutcome, Mark};
use minimax_ttt::boards::tic_tac_toe::TicTacToeBoard;
use minimax_ttt::player::{read_answer, ComputerPlayer, HumanPlayer, Player, PlayerKind};
use minimax_ttt::round::play_round;
use std::io::{self, BufRead, Read, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    debug!(?cli, "Starting");
    let rounds = run(&cli, &mut ByteReader::stdin(), &mut io::stdout())?;
    debug!(rounds, "Exiting");
    Ok(())
}

/// Plays rounds until the player declines a rematch, or just one with `--once`.
/// Returns the number of rounds played.
fn run<R: BufRead, W: Write>(cli: &Cli, input: &mut R, output: &mut W) -> Result<usize> {
    let mut rounds = 0;
    loop {
        play_one_round(cli, input, output)?;
        rounds += 1;

        if cli.once || !ask_play_again(input, output)? {
            return Ok(rounds);
        }
    }
}

/// Plays one round on a fresh board and announces the result.
fn play_one_round<R: BufRead, W: Write>(cli: &Cli, input: &mut R, output: &mut W) -> Result<GameOutcome> {
    let mut x = create_player(Mark::X, cli.x, input, output)?;
    let mut o = create_player(Mark::O, cli.o, input, output)?;
    let (first, second) = match cli.first {
        Mark::X => (&mut x, &mut o),
        Mark::O => (&mut o, &mut x),
    };

    let mut board = TicTacToeBoard::new();
    let mut printed = Ok(());
    let outcome = play_round(first.as_mut(), second.as_mut(), &mut board, |player, board| {
        if printed.is_ok() {
            printed = match player {
                Some(player) => writeln!(output, "{board}\n{}'s turn", player.mark()),
                None => writeln!(output, "{board}"),
            };
        }
    })
    .context("round aborted")?;
    printed?;

    match outcome {
        GameOutcome::Winner(mark) => writeln!(output, "{mark} wins!")?,
        GameOutcome::Draw => writeln!(output, "The game is a draw.")?,
    }
    info!(?outcome, "Round over");
    Ok(outcome)
}

/// Builds the player for `mark`, asking when the kind was not configured.
///
/// Human players always read the terminal: two of them cannot share one borrowed reader.
fn create_player<R: BufRead, W: Write>(
    mark: Mark,
    kind: Option<PlayerKind>,
    input: &mut R,
    output: &mut W,
) -> Result<Box<dyn Player>> {
    let kind = match kind {
        Some(kind) => kind,
        None => ask_player_kind(mark, input, output)?,
    };

    Ok(match kind {
        PlayerKind::Human => Box::new(HumanPlayer::new(mark, ByteReader::stdin(), io::stdout())),
        PlayerKind::Computer => Box::new(ComputerPlayer::new(mark)),
    })
}

fn ask_player_kind<R: BufRead, W: Write>(mark: Mark, input: &mut R, output: &mut W) -> Result<PlayerKind> {
    loop {
        let answer = prompt(
            &format!("Player {mark}: human or computer? (Type 1 for human, 2 for computer): "),
            input,
            output,
        )?
        .context("no player selected")?;

        match answer.parse() {
            Ok(kind) => return Ok(kind),
            Err(err) => writeln!(output, "{err}")?,
        }
    }
}

fn ask_play_again<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    let answer = prompt("Would you like to play again? (Y/N): ", input, output)?;
    Ok(answer.is_some_and(|a| a.trim().to_ascii_lowercase().starts_with('y')))
}

/// Prints `question` and reads one line. Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(question: &str, input: &mut R, output: &mut W) -> Result<Option<String>> {
    write!(output, "{question}")?;
    output.flush()?;
    Ok(read_answer(input)?)
}

/// Line reader that never buffers past the byte it hands out, so any number of readers can
/// take turns on the same stream without losing input.
struct ByteReader<T> {
    inner: T,
    byte: [u8; 1],
    filled: bool,
}

impl ByteReader<io::Stdin> {
    /// A reader over the process stdin. std's `Stdin` is already buffered, so single-byte
    /// reads stay cheap.
    fn stdin() -> Self {
        Self::new(io::stdin())
    }
}

impl<T: Read> ByteReader<T> {
    fn new(inner: T) -> Self {
        Self {
            inner,
            byte: [0],
            filled: false,
        }
    }
}

impl<T: Read> Read for ByteReader<T> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        let available = self.fill_buf()?;
        if available.is_empty() {
            return Ok(0);
        }
        buf[0] = available[0];
        self.consume(1);
        Ok(1)
    }
}

impl<T: Read> BufRead for ByteReader<T> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if !self.filled {
            self.filled = self.inner.read(&mut self.byte)? == 1;
        }
        Ok(if self.filled { &self.byte[..] } else { &[] })
    }

    fn consume(&mut self, amt: usize) {
        if amt > 0 {
            self.filled = false;
        }
    }
}
