// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{convert::TryFrom, fmt};

use thiserror::Error;

use crate::core::types::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementParseError {
    #[error("invalid piece: {0}")]
    InvalidPiece(#[from] PieceParseError),
    #[error("row {0} does not sum to 8")]
    RowLength(u8),
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),
}

/// An 8x8 grid of squares, each of which is either empty or holds a single piece.
///
/// The board is indexed by `Square`, so every read and write is in bounds by construction. Only the game state may
/// write to it; everyone else gets a shared reference.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// Returns a board with no pieces on it.
    pub fn empty() -> Board {
        Board {
            squares: [None; 64],
        }
    }

    /// Returns a board set up in the standard chess starting position, black at rows 0 and 1 and white at rows 6
    /// and 7.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for (col, &kind) in BACK_ROW.iter().enumerate() {
            let col = col as u8;
            board.set(Square(col), Some(Piece::new(Color::Black, kind)));
            board.set(Square(8 + col), Some(Piece::new(Color::Black, PieceKind::Pawn)));
            board.set(Square(48 + col), Some(Piece::new(Color::White, PieceKind::Pawn)));
            board.set(Square(56 + col), Some(Piece::new(Color::White, kind)));
        }

        board
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.0 as usize]
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Returns whether or not the given square holds a piece of the given color.
    pub fn is_color(&self, square: Square, color: Color) -> bool {
        matches!(self.piece_at(square), Some(piece) if piece.color == color)
    }

    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.0 as usize] = piece;
    }

    /// Iterates the rows of the board from row 0 (the eighth rank) to row 7 (the first rank).
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Piece>]> + '_ {
        self.squares.chunks(8)
    }

    /// Iterates every occupied square along with the piece on it, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        squares().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Parses the piece placement field of a FEN string. The first row of the placement is the eighth rank, which is
    /// row 0 of the board.
    pub fn from_fen_placement(placement: &str) -> Result<Board, PlacementParseError> {
        let mut board = Board::empty();
        let rows: Vec<_> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(PlacementParseError::RowCount(rows.len()));
        }

        for (row, text) in rows.into_iter().enumerate() {
            let row = row as u8;
            let mut col = 0u8;
            for c in text.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if skip == 0 || skip > 8 {
                        return Err(PlacementParseError::RowLength(row));
                    }

                    col += skip as u8;
                } else {
                    let piece = Piece::try_from(c)?;
                    let square = Square::new(row, col).ok_or(PlacementParseError::RowLength(row))?;
                    board.set(square, Some(piece));
                    col += 1;
                }

                if col > 8 {
                    return Err(PlacementParseError::RowLength(row));
                }
            }

            if col != 8 {
                return Err(PlacementParseError::RowLength(row));
            }
        }

        Ok(board)
    }

    /// Renders the board as the piece placement field of a FEN string.
    pub fn as_fen_placement(&self) -> String {
        let mut buf = String::new();
        for (row, pieces) in self.rows().enumerate() {
            if row != 0 {
                buf.push('/');
            }

            let mut empty_squares = 0u8;
            for piece in pieces {
                match piece {
                    Some(piece) => {
                        if empty_squares != 0 {
                            buf.push((b'0' + empty_squares) as char);
                            empty_squares = 0;
                        }
                        buf.push(piece.fen_char());
                    }
                    None => empty_squares += 1,
                }
            }

            if empty_squares != 0 {
                buf.push((b'0' + empty_squares) as char);
            }
        }

        buf
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Display for Board {
    /// Draws the board as a grid of two-character piece codes, with rank and file labels.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, pieces) in self.rows().enumerate() {
            write!(f, "{} ", row_to_rank(row as u8))?;
            for piece in pieces {
                write!(f, " {}", square_code(*piece))?;
            }
            writeln!(f)?;
        }

        write!(f, "  ")?;
        for col in 0..8 {
            write!(f, "  {}", col_to_file(col))?;
        }
        writeln!(f)
    }
}
