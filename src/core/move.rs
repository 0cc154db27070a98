// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use serde::Serialize;
use thiserror::Error;

use crate::core::{types::*, Board};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("move notation must be four characters long, got {0:?}")]
    InvalidLength(String),
    #[error("invalid file: {0}")]
    InvalidFile(char),
    #[error("invalid rank: {0}")]
    InvalidRank(char),
}

/// A single piece displacement on a board.
///
/// A move remembers the piece that stood on its source square and the piece that stood on its destination square at
/// the time it was constructed. These are copies, so later changes to the board never change a move that has already
/// been built, and they are exactly what is needed to take the move back.
///
/// ## Identity
/// Two moves are equal if and only if they go from the same source square to the same destination square. The
/// recorded pieces do not take part in equality or hashing; a move built from two clicked squares on one snapshot of
/// the board is equal to the generated move between the same squares on another.
#[derive(Copy, Clone, Serialize)]
pub struct Move {
    source: Square,
    destination: Square,
    moved: Option<Piece>,
    captured: Option<Piece>,
}

impl Move {
    /// Constructs a move from the source square to the destination square, reading the pieces on both squares from
    /// the given board.
    pub fn new(source: Square, destination: Square, board: &Board) -> Move {
        Move {
            source,
            destination,
            moved: board.piece_at(source),
            captured: board.piece_at(destination),
        }
    }

    /// Returns the source square of this move.
    pub fn source(self) -> Square {
        self.source
    }

    /// Returns the destination square of this move.
    pub fn destination(self) -> Square {
        self.destination
    }

    /// Returns the piece that was on the source square when this move was constructed.
    pub fn moved(self) -> Option<Piece> {
        self.moved
    }

    /// Returns the piece that was on the destination square when this move was constructed, if any.
    pub fn captured(self) -> Option<Piece> {
        self.captured
    }

    /// Returns whether or not this move lands on an occupied square.
    pub fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// Returns the canonical integer identity of this move, unique for every (source, destination) pair.
    pub fn id(self) -> u16 {
        let (sr, sc) = (self.source.row() as u16, self.source.col() as u16);
        let (dr, dc) = (self.destination.row() as u16, self.destination.col() as u16);
        sr * 1000 + sc * 100 + dr * 10 + dc
    }

    /// Returns the file-and-rank notation of this move, the source square followed by the destination square
    /// (e.g. `e2e4`).
    pub fn as_notation(self) -> String {
        format!("{}{}", self.source, self.destination)
    }

    /// Parses a move in file-and-rank notation against the given board.
    ///
    /// The result is a candidate move: it names two squares and records whatever the board holds on them, but it says
    /// nothing about whether the move is actually playable. Check it against the generated moves before applying it.
    pub fn from_notation(board: &Board, notation: &str) -> Result<Move, MoveParseError> {
        let chars: Vec<_> = notation.chars().collect();
        if chars.len() != 4 {
            return Err(MoveParseError::InvalidLength(notation.to_string()));
        }

        let source = parse_square(chars[0], chars[1])?;
        let destination = parse_square(chars[2], chars[3])?;
        Ok(Move::new(source, destination, board))
    }
}

fn parse_square(file: char, rank: char) -> Result<Square, MoveParseError> {
    let col = file_to_col(file).ok_or(MoveParseError::InvalidFile(file))?;
    let row = rank_to_row(rank).ok_or(MoveParseError::InvalidRank(rank))?;
    Square::new(row, col).ok_or(MoveParseError::InvalidRank(rank))
}

impl PartialEq for Move {
    fn eq(&self, other: &Move) -> bool {
        self.source == other.source && self.destination == other.destination
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.destination.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.source, self.destination)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(
            f,
            "{} ({} x {})",
            self.as_notation(),
            square_code(self.moved),
            square_code(self.captured)
        )
    }
}
