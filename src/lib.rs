// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `ply` models the rules state of a game of chess: the board, whose turn it is, the moves that can be made from
//! here, and the history of moves that can be taken back.
//!
//! Move generation is pseudo-legal. Moves that leave the mover's king attacked are generated like any other, and
//! there is no castling, en passant or promotion. Callers pick a move out of `GameState::valid_moves` (usually by
//! building a candidate `Move` from two squares and comparing), play it with `GameState::make_move`, and take it back
//! with `GameState::undo_move`.

pub mod core;
pub mod game;
pub mod log;
pub mod movegen;
pub mod perft;
pub mod shell;

pub use game::{FenParseError, GameState, MoveError};
