use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::{Board, Color};
use lib::game::Record;
use lib::rules;
use tracing::{info, instrument};

/// Classifies a board and lists every legal move of the side to move.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Analyze {
    /// The side to move.
    #[clap(short, long, default_value_t = Color::White)]
    turn: Color,

    /// The piece placement in FEN notation.
    #[clap(default_value_t = Board::initial())]
    board: Board,
}

impl Analyze {
    #[instrument(level = "debug", skip(self), fields(board = %self.board, turn = %self.turn), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let status = rules::status(&self.board, self.turn)?;
        let moves = rules::legal_moves(&self.board, self.turn)?;

        info!(%status, moves = moves.len());

        println!("{:#}\n", self.board);
        println!("{} to move, {}", self.turn, status);

        for m in moves {
            let Some(piece) = self.board[m.whence()] else {
                continue;
            };

            let record = Record {
                piece,
                r#move: m,
                capture: self.board[m.whither()],
            };

            println!("{}", record);
        }

        Ok(())
    }
}
