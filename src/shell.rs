// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A line-oriented text driver for a single game. Each line of input is one command; each command prints its result.
//!
//! ```text
//! board            print the board
//! moves            list the moves available to the side to move
//! move e2e4        play a move
//! undo             take back the last move
//! fen [FEN]        print the current position, or set up a new one
//! history          list the moves played so far
//! new              start a new game
//! quit             exit
//! ```

use std::io::{self, BufRead, Write};

use anyhow::anyhow;

use crate::{core::Move, GameState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Board,
    Moves,
    Move(String),
    Undo,
    Fen(Option<String>),
    History,
    New,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> anyhow::Result<Command> {
        let components: Vec<_> = line.split_whitespace().collect();
        let (&command, arguments) = components.split_first().unwrap_or((&"", &[]));
        let command = match (command, arguments) {
            ("board", []) => Command::Board,
            ("moves", []) => Command::Moves,
            ("move", [mov]) => Command::Move(mov.to_string()),
            ("undo", []) => Command::Undo,
            ("fen", []) => Command::Fen(None),
            ("fen", fen) => Command::Fen(Some(fen.join(" "))),
            ("history", []) => Command::History,
            ("new", []) => Command::New,
            ("quit", []) => Command::Quit,
            _ => return Err(anyhow!("unrecognized command: {} {:?}", command, arguments)),
        };

        Ok(command)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

/// Owns one game and applies commands to it.
#[derive(Default)]
pub struct Shell {
    game: GameState,
}

impl Shell {
    pub fn new() -> Shell {
        Shell::default()
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn execute(&mut self, command: Command) -> anyhow::Result<Outcome> {
        let output = match command {
            Command::Board => self.game.to_string(),
            Command::Moves => join_moves(&self.game.valid_moves()),
            Command::Move(notation) => {
                let mov = Move::from_notation(self.game.board(), &notation)?;
                self.game.make_move(mov)?;
                format!("played {}", mov)
            }
            Command::Undo => match self.game.undo_move() {
                Some(mov) => format!("took back {}", mov),
                None => "nothing to undo".to_string(),
            },
            Command::Fen(None) => self.game.as_fen(),
            Command::Fen(Some(fen)) => {
                self.game = GameState::from_fen(&fen)?;
                self.game.as_fen()
            }
            Command::History => join_moves(self.game.history()),
            Command::New => {
                self.game = GameState::new();
                self.game.as_fen()
            }
            Command::Quit => return Ok(Outcome::Quit),
        };

        Ok(Outcome::Continue(output))
    }
}

fn join_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|m| m.as_notation())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs the shell over stdin and stdout until `quit` or end of input.
pub fn run() -> io::Result<()> {
    let mut shell = Shell::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for maybe_line in stdin.lock().lines() {
        let line = maybe_line?;
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line).and_then(|command| shell.execute(command)) {
            Ok(Outcome::Continue(output)) => writeln!(out, "{}", output.trim_end())?,
            Ok(Outcome::Quit) => break,
            Err(e) => writeln!(out, "error: {}", e)?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::*;

    fn run_line(shell: &mut Shell, line: &str) -> anyhow::Result<Outcome> {
        Command::parse(line).and_then(|command| shell.execute(command))
    }

    fn output(shell: &mut Shell, line: &str) -> String {
        match run_line(shell, line).unwrap() {
            Outcome::Continue(output) => output,
            Outcome::Quit => panic!("unexpected quit"),
        }
    }

    mod parse {
        use super::*;

        #[test]
        fn simple_commands() {
            assert_eq!(Command::Board, Command::parse("board").unwrap());
            assert_eq!(Command::Moves, Command::parse("  moves ").unwrap());
            assert_eq!(Command::Undo, Command::parse("undo").unwrap());
            assert_eq!(Command::History, Command::parse("history").unwrap());
            assert_eq!(Command::New, Command::parse("new").unwrap());
            assert_eq!(Command::Quit, Command::parse("quit").unwrap());
        }

        #[test]
        fn move_command() {
            assert_eq!(
                Command::Move("e2e4".to_string()),
                Command::parse("move e2e4").unwrap()
            );
            assert!(Command::parse("move").is_err());
            assert!(Command::parse("move e2e4 e7e5").is_err());
        }

        #[test]
        fn fen_command() {
            assert_eq!(Command::Fen(None), Command::parse("fen").unwrap());
            assert_eq!(
                Command::Fen(Some("8/8/8/8/8/8/8/K6k w - - 0 1".to_string())),
                Command::parse("fen 8/8/8/8/8/8/8/K6k w - - 0 1").unwrap()
            );
        }

        #[test]
        fn unknown() {
            assert!(Command::parse("castle").is_err());
            assert!(Command::parse("board now").is_err());
            assert!(Command::parse("").is_err());
        }
    }

    mod execute {
        use super::*;

        #[test]
        fn play_and_undo() {
            let mut shell = Shell::new();
            assert_eq!("played e2e4", output(&mut shell, "move e2e4"));
            assert_eq!(Some(Piece::new(Color::White, PieceKind::Pawn)), shell.game().board().piece_at(E4));
            assert_eq!("played e7e5", output(&mut shell, "move e7e5"));
            assert_eq!("e2e4 e7e5", output(&mut shell, "history"));
            assert_eq!("took back e7e5", output(&mut shell, "undo"));
            assert_eq!("took back e2e4", output(&mut shell, "undo"));
            assert_eq!("nothing to undo", output(&mut shell, "undo"));
            assert_eq!("", output(&mut shell, "history"));
        }

        #[test]
        fn rejected_move_leaves_game_alone() {
            let mut shell = Shell::new();
            let err = run_line(&mut shell, "move e2e5").unwrap_err();
            assert!(err.to_string().contains("e2e5"));
            assert!(shell.game().history().is_empty());
            assert!(shell.game().white_to_move());
        }

        #[test]
        fn bad_notation() {
            let mut shell = Shell::new();
            assert!(run_line(&mut shell, "move z2e4").is_err());
            assert!(run_line(&mut shell, "move e2").is_err());
        }

        #[test]
        fn moves_lists_valid_moves() {
            let mut shell = Shell::new();
            let moves = output(&mut shell, "moves");
            assert_eq!(20, moves.split(' ').count());
            assert!(moves.starts_with("a2a3 a2a4 b2b3"));
            assert!(moves.ends_with("g1h3 g1f3"));
        }

        #[test]
        fn fen_set_and_get() {
            let mut shell = Shell::new();
            assert_eq!(
                "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w",
                output(&mut shell, "fen")
            );
            assert_eq!("4k3/8/8/8/8/8/8/4K3 b", output(&mut shell, "fen 4k3/8/8/8/8/8/8/4K3 b"));
            assert!(!shell.game().white_to_move());
            assert!(run_line(&mut shell, "fen nonsense").is_err());
            assert_eq!("4k3/8/8/8/8/8/8/4K3 b", output(&mut shell, "fen"));
        }

        #[test]
        fn new_game() {
            let mut shell = Shell::new();
            output(&mut shell, "move d2d4");
            output(&mut shell, "new");
            assert!(shell.game().history().is_empty());
            assert_eq!(&Board::starting_position(), shell.game().board());
        }

        #[test]
        fn board() {
            let mut shell = Shell::new();
            let board = output(&mut shell, "board");
            assert!(board.contains("wK"));
            assert!(board.ends_with("white to move\n"));
        }

        #[test]
        fn quit() {
            let mut shell = Shell::new();
            assert_eq!(Outcome::Quit, run_line(&mut shell, "quit").unwrap());
        }
    }
}
