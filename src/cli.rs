//! Command-line interface for minimax-ttt.

use clap::Parser;
use minimax_ttt::board::Mark;
use minimax_ttt::player::PlayerKind;

/// Play tic-tac-toe against a friend or an unbeatable computer
#[derive(Parser, Debug)]
#[command(name = "minimax-ttt")]
#[command(about = "Play tic-tac-toe against a friend or an unbeatable computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Who plays X (human or computer). Asked before every round if omitted.
    #[arg(long = "x", value_name = "KIND")]
    pub x: Option<PlayerKind>,

    /// Who plays O (human or computer). Asked before every round if omitted.
    #[arg(long = "o", value_name = "KIND")]
    pub o: Option<PlayerKind>,

    /// Mark that moves first
    #[arg(long, value_name = "MARK", default_value = "x")]
    pub first: Mark,

    /// Play a single round instead of offering a rematch
    #[arg(long)]
    pub once: bool,
}
