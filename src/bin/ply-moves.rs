// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use anyhow::Context;
use structopt::StructOpt;
use tracing::Level;

use ply::core::Move;
use ply::GameState;

/// Lists the moves available in a position.
#[derive(Debug, StructOpt)]
struct Options {
    /// FEN representation of the position to start from. Defaults to the starting position.
    #[structopt(long)]
    fen: Option<String>,

    /// Moves to play before listing, in file-and-rank notation (e.g. e2e4).
    #[structopt(long)]
    moves: Vec<String>,

    /// Print the moves as JSON, including the pieces they move and capture.
    #[structopt(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    ply::log::init(Level::WARN)?;
    let ops = Options::from_args();
    let mut game = match ops.fen {
        Some(ref fen) => GameState::from_fen(fen)?,
        None => GameState::new(),
    };

    for notation in &ops.moves {
        let mov = Move::from_notation(game.board(), notation)?;
        game.make_move(mov)
            .with_context(|| format!("failed to play {}", notation))?;
    }

    let moves = game.valid_moves();
    if ops.json {
        println!("{}", serde_json::to_string_pretty(&moves)?);
    } else {
        for mov in moves {
            println!("{}", mov.as_notation());
        }
    }

    Ok(())
}
