// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::{core::*, movegen};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("move {0} is not available in this position")]
    NotAvailable(Move),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenParseError {
    #[error("unexpected end of FEN string")]
    UnexpectedEnd,
    #[error("invalid piece placement: {0}")]
    Placement(#[from] PlacementParseError),
    #[error("invalid side to move: {0:?}")]
    InvalidSideToMove(String),
}

/// The state of a game in progress: the board, whose turn it is, and every move that has been played to get here.
///
/// Moves are played with `make_move` and taken back one at a time with `undo_move`. The history only ever grows by one
/// move at the end or shrinks by one move at the end, so after `N` moves from a fresh game the history holds exactly
/// `N` entries and it is White's turn if and only if `N` is even.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    history: Vec<Move>,
    /// Where each king stands, indexed by color. Kept up to date by make and undo.
    king_squares: [Option<Square>; 2],
}

impl GameState {
    /// Returns a game in the standard starting position with White to move.
    pub fn new() -> GameState {
        GameState::from_board(Board::starting_position(), Color::White)
    }

    /// Returns a game starting from an arbitrary board, with the given side to move and an empty history.
    pub fn from_board(board: Board, side_to_move: Color) -> GameState {
        let king_squares = [
            locate_king(&board, Color::White),
            locate_king(&board, Color::Black),
        ];
        GameState {
            board,
            side_to_move,
            history: Vec::new(),
            king_squares,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    /// The moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Returns the square of the given color's king, or None if it has none on the board. Should a position hold more
    /// than one king of a color, the last one in row-major order (a8 through h1) is reported.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.king_squares[color as usize]
    }

    /// Re-reads the king squares of any color whose king moved, was captured, or was put back by `mov`.
    fn update_king_squares(&mut self, mov: Move) {
        for piece in [mov.moved(), mov.captured()].into_iter().flatten() {
            if piece.kind == PieceKind::King {
                self.king_squares[piece.color as usize] = locate_king(&self.board, piece.color);
            }
        }
    }
}

fn locate_king(board: &Board, color: Color) -> Option<Square> {
    board
        .pieces()
        .filter(|&(_, piece)| piece == Piece::new(color, PieceKind::King))
        .map(|(square, _)| square)
        .last()
}

impl GameState {
    /// Returns every move the side to move can make, ignoring whether it leaves their own king attacked.
    ///
    /// The list is built fresh on every call and goes stale as soon as a move is made or undone.
    pub fn possible_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        movegen::generate_moves(self.side_to_move, &self.board, &mut moves);
        moves
    }

    /// Returns the moves that `make_move` will accept. This is currently the same list as `possible_moves`; moves
    /// that expose the king are not filtered.
    pub fn valid_moves(&self) -> Vec<Move> {
        self.possible_moves()
    }

    /// Returns whether or not a move between the same two squares is among the valid moves.
    pub fn is_valid(&self, mov: Move) -> bool {
        self.valid_moves().contains(&mov)
    }

    /// Plays a move, if it is one of the valid moves in this position.
    ///
    /// The move is matched by its squares alone. What gets played and recorded is the generated move, so the history
    /// holds the pieces as they stand on this board even if `mov` was built against some other board. If the move is
    /// not available, the game is left untouched.
    pub fn make_move(&mut self, mov: Move) -> Result<(), MoveError> {
        let generated = match self.valid_moves().into_iter().find(|&m| m == mov) {
            Some(generated) => generated,
            None => {
                warn!(mov = %mov, side = %self.side_to_move, "rejected move");
                return Err(MoveError::NotAvailable(mov));
            }
        };

        self.make_move_unchecked(generated);
        Ok(())
    }

    /// Plays a move without checking that it is valid in this position.
    ///
    /// The move's recorded pieces are what get written to the board, and what will be restored when it is undone. This
    /// is only sound for moves that came out of the move generator for this exact position.
    pub fn make_move_unchecked(&mut self, mov: Move) {
        debug!(mov = %mov, side = %self.side_to_move, "make move");
        self.board.set(mov.source(), None);
        self.board.set(mov.destination(), mov.moved());
        self.history.push(mov);
        self.side_to_move = self.side_to_move.toggle();
        // A king can be captured outright; there is no check detection to prevent it.
        self.update_king_squares(mov);
    }

    /// Takes back the most recent move, restoring both of its squares and the side to move. Returns the move that was
    /// taken back, or None (and does nothing) if no moves have been played.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mov = match self.history.pop() {
            Some(mov) => mov,
            None => {
                trace!("undo with empty history");
                return None;
            }
        };

        debug!(mov = %mov, "undo move");
        self.board.set(mov.source(), mov.moved());
        self.board.set(mov.destination(), mov.captured());
        self.side_to_move = self.side_to_move.toggle();
        self.update_king_squares(mov);
        Some(mov)
    }
}

impl GameState {
    /// Constructs a game from a FEN string. Only the piece placement and side to move fields are read; castling, en
    /// passant and the move clocks are accepted but ignored, since this game does not model them.
    pub fn from_fen(fen: impl AsRef<str>) -> Result<GameState, FenParseError> {
        let mut fields = fen.as_ref().split_whitespace();
        let placement = fields.next().ok_or(FenParseError::UnexpectedEnd)?;
        let board = Board::from_fen_placement(placement)?;
        let side_to_move = match fields.next() {
            Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(FenParseError::InvalidSideToMove(other.to_string())),
            None => return Err(FenParseError::UnexpectedEnd),
        };

        Ok(GameState::from_board(board, side_to_move))
    }

    /// Renders the board and side to move as the first two fields of a FEN string.
    pub fn as_fen(&self) -> String {
        format!("{} {}", self.board.as_fen_placement(), self.side_to_move)
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        let side = match self.side_to_move {
            Color::White => "white",
            Color::Black => "black",
        };
        writeln!(f, "{} to move", side)
    }
}
