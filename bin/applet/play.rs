use anyhow::Error as Anyhow;
use clap::Parser;
use derive_more::{Display, Error, From};
use lib::chess::{Move, ParseMoveError, ParseSquareError, Square, Status};
use lib::game::Game;
use std::io::{stdin, stdout, BufRead, Write};
use std::str::FromStr;
use tracing::{info, instrument, warn};

/// Two players take turns at the same terminal.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {}

/// What the player typed at the prompt.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Command {
    Move(Move),
    Moves(Square),
    History,
    Reset,
    Quit,
}

/// The reason why parsing [`Command`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
enum ParseCommandError {
    #[display(fmt = "expected a move such as `e2e4`, `moves <square>`, `history`, `reset` or `quit`")]
    InvalidMove(ParseMoveError),
    #[display(fmt = "expected a square such as `e2`")]
    InvalidSquare(ParseSquareError),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "history" => Ok(Command::History),
            "reset" => Ok(Command::Reset),
            "quit" | "exit" => Ok(Command::Quit),
            s => match s.strip_prefix("moves") {
                Some(sq) => Ok(Command::Moves(sq.trim().parse()?)),
                None => Ok(Command::Move(s.parse()?)),
            },
        }
    }
}

impl Play {
    #[instrument(level = "debug", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut game = Game::new();
        let mut lines = stdin().lock().lines();
        let mut redraw = true;

        loop {
            let status = game.status()?;

            if redraw {
                println!("{:#}\n", game.board());
                info!(turn = %game.turn(), %status);

                match status {
                    Status::Ongoing => {}
                    Status::Check(_) => println!("{}", status),
                    Status::Checkmate(c) => println!("checkmate, the {} player wins", !c),
                    Status::Stalemate => println!("stalemate, the game is drawn"),
                }
            }

            if status.is_terminal() {
                break;
            }

            print!("{} to move> ", game.turn());
            stdout().flush()?;

            let Some(line) = lines.next() else {
                break;
            };

            redraw = false;
            match line?.parse() {
                Err(e) => println!("{}", e),
                Ok(Command::Quit) => break,

                Ok(Command::Reset) => {
                    game.reset();
                    redraw = true;
                }

                Ok(Command::History) => {
                    for (i, pair) in game.history().chunks(2).enumerate() {
                        match pair {
                            [w, b] => println!("{}. {} {}", i + 1, w, b),
                            [w] => println!("{}. {}", i + 1, w),
                            _ => {}
                        }
                    }
                }

                Ok(Command::Moves(sq)) => {
                    let destinations = game.moves(sq)?;
                    let list: Vec<_> = destinations.iter().map(|d| d.to_string()).collect();
                    println!("{}: {}", sq, list.join(" "));
                }

                Ok(Command::Move(m)) => match game.execute(m) {
                    Ok(record) => {
                        println!("{}", record);
                        redraw = true;
                    }

                    Err(e) => {
                        warn!(%m, "{}", e);
                        println!("{}", e);
                    }
                },
            }
        }

        Ok(())
    }
}
