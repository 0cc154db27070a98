// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Move path enumeration, for checking the move generator against known node counts.
//!
//! Counts are of pseudo-legal move sequences. They agree with published perft results only as long as no checks,
//! castling, en passant or promotions come up within the searched depth, which holds from the starting position up
//! to depth 3.

use crate::{core::Move, GameState};

/// Counts the leaf nodes of the move tree rooted at the current position, `depth` plies deep. The game is restored
/// to its current state before returning.
pub fn perft(game: &mut GameState, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game.valid_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mov in moves {
        game.make_move_unchecked(mov);
        nodes += perft(game, depth - 1);
        game.undo_move();
    }

    nodes
}

/// Like `perft`, but reports the node count below each root move separately, in generation order.
pub fn divide(game: &mut GameState, depth: u32) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    game.valid_moves()
        .into_iter()
        .map(|mov| {
            game.make_move_unchecked(mov);
            let nodes = perft(game, depth - 1);
            game.undo_move();
            (mov, nodes)
        })
        .collect()
}
