// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use structopt::StructOpt;
use tracing::Level;

use ply::perft;
use ply::GameState;

#[derive(Debug, StructOpt)]
struct Options {
    /// The depth to search to.
    #[structopt(short, long)]
    depth: u32,

    /// FEN representation of the position to analyze. Defaults to the starting position.
    #[structopt(long)]
    fen: Option<String>,

    /// If set, print the node count below each root move as well as the total.
    #[structopt(long)]
    divide: bool,
}

fn main() -> anyhow::Result<()> {
    ply::log::init(Level::WARN)?;
    let ops = Options::from_args();
    let mut game = match ops.fen {
        Some(ref fen) => GameState::from_fen(fen)?,
        None => GameState::new(),
    };

    if ops.divide {
        let split = perft::divide(&mut game, ops.depth);
        for (mov, nodes) in &split {
            println!("{}: {}", mov, nodes);
        }
        println!();
        println!("{}", split.iter().map(|&(_, n)| n).sum::<u64>());
    } else {
        println!("{}", perft::perft(&mut game, ops.depth));
    }

    Ok(())
}
